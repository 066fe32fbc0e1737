//! Screens and the forward-only sequencer that switches between them.

pub mod backdrop;
pub mod greeting;
pub mod sequencer;
pub mod timeline;
