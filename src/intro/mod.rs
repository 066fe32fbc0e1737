//! Intro name animation.
//!
//! A declarative [`stage::IntroTimeline`] (what happens when, to which element) played by
//! a generic [`driver::IntroDriver`] against host time.

pub mod driver;
pub mod love;
pub mod scene;
pub mod stage;
