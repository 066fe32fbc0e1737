/// Cubic connectors between consecutive story cards.
pub mod connector;
pub mod grid;
