pub mod effect;
pub mod particle;
