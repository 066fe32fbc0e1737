//! Keepsake is a deterministic motion engine for an animated greeting card.
//!
//! The card has three screens played strictly in order: an intro that spells out
//! "I LOVE YOU" and collapses it to a heart, a birthday message, and a scrollable photo
//! timeline whose header labels fade with the scroll offset. A heart-shaped cursor with
//! trailing bubbles runs over all of them.
//!
//! Nothing here touches a window, a DOM or a speaker. A host forwards its events to a
//! [`Card`] and gets back plain data:
//!
//! 1. **Events in**: ticks, pointer moves, button presses, scroll offsets, resizes
//!    ([`HostEvent`]).
//! 2. **Outputs**: audio cues to play and screen changes ([`CardOutput`]).
//! 3. **Frames**: a serializable [`FrameSnapshot`] describing everything visible, which
//!    [`snapshot_svg`] and [`Rasterizer`] turn into SVG or pixels.
//!
//! All randomness comes from a seeded generator, so replaying the same events against
//! the same [`CardConfig`] yields the same frames.
#![forbid(unsafe_code)]

mod animation;
mod card;
mod config;
mod cursor;
mod foundation;
mod intro;
mod layout;
mod render;
mod screen;
mod scroll;

pub use animation::anim::{InterpMode, Keyframe, Keyframes, Lerp, Segment, Tween};
pub use animation::ease::Ease;
pub use card::{
    Card, CardOutput, FrameSnapshot, HostEvent, IntroElementFrame, IntroFrame, ScreenFrame,
};
pub use config::{
    AudioConfig, CardConfig, ConnectorConfig, CursorConfig, GreetingConfig, GridConfig,
    IntroConfig, ScrollConfig, Story,
};
pub use cursor::effect::{CursorEffect, CursorFrame};
pub use cursor::particle::{Particle, ParticleSample};
pub use foundation::core::{BezPath, Millis, Point, Rect, Rgba8, TimeSpan, Vec2, Viewport};
pub use foundation::error::{KeepsakeError, KeepsakeResult};
pub use foundation::math::Rng64;
pub use intro::driver::{IntroDriver, IntroEvent, IntroPhase};
pub use intro::love::{HEART_PATH, INTRO_CANVAS};
pub use intro::scene::IntroScene;
pub use intro::stage::{
    AudioCue, Axis, BurstChild, BurstFrame, BurstSpec, Effect, ElementState, IntroTimeline,
    Stage, TargetDecl, TargetId, TargetKind, TimelineBuilder,
};
pub use layout::connector::{ConnectorPath, LayoutNode, Orientation, compute_connectors};
pub use layout::grid::{GridFrame, GridLayout};
pub use render::raster::{RasterFrame, Rasterizer};
pub use render::svg::{CURSOR_HEART_PATH, snapshot_svg};
pub use screen::backdrop::{FallingHeart, FallingHearts, HEART_GLYPHS, HeartSprite};
pub use screen::greeting::{GreetingFrame, GreetingScreen};
pub use screen::sequencer::{Screen, Sequencer, Transition, Trigger};
pub use screen::timeline::{ConnectorFrame, StoryCardFrame, TimelineFrame, TimelineScreen};
pub use scroll::mapper::{HeaderFrame, LabelFrame, ScrollMapper, TrackedLabel};
pub use scroll::range::{Direction, DirectionalRange, ScrollRange};
