use crate::{
    animation::{anim::Tween, ease::Ease},
    config::GreetingConfig,
    foundation::core::{Millis, Viewport},
    screen::backdrop::{FallingHearts, HeartSprite},
};

const CARD_MS: u64 = 500;
const LINE_MS: u64 = 300;
const TITLE_DELAY_MS: u64 = 300;
const MESSAGE_DELAY_MS: u64 = 500;

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct GreetingFrame {
    pub title: String,
    pub message: String,
    pub card_scale: f64,
    pub card_opacity: f64,
    pub title_offset_y: f64,
    pub title_opacity: f64,
    pub message_offset_y: f64,
    pub message_opacity: f64,
    pub hearts: Vec<HeartSprite>,
}

/// The birthday message card shown after the intro.
///
/// The card pops in, then the title drops from above and the message rises from below.
/// Pressing the heart button moves on to the timeline; that is handled by the session.
#[derive(Clone, Debug)]
pub struct GreetingScreen {
    mounted_at: Millis,
    title: String,
    message: String,
    card_scale: Tween,
    card_opacity: Tween,
    title_y: Tween,
    title_opacity: Tween,
    message_y: Tween,
    message_opacity: Tween,
    hearts: FallingHearts,
}

impl GreetingScreen {
    pub fn mount(now: Millis, cfg: &GreetingConfig, viewport: Viewport, seed: u64) -> Self {
        let ease = Ease::OutCubic;
        Self {
            mounted_at: now,
            title: cfg.title.clone(),
            message: cfg.message.clone(),
            card_scale: Tween::new(0, CARD_MS, 0.8, 1.0, ease),
            card_opacity: Tween::new(0, CARD_MS, 0.0, 1.0, ease),
            title_y: Tween::new(TITLE_DELAY_MS, LINE_MS, -50.0, 0.0, ease),
            title_opacity: Tween::new(TITLE_DELAY_MS, LINE_MS, 0.0, 1.0, ease),
            message_y: Tween::new(MESSAGE_DELAY_MS, LINE_MS, 50.0, 0.0, ease),
            message_opacity: Tween::new(MESSAGE_DELAY_MS, LINE_MS, 0.0, 1.0, ease),
            hearts: FallingHearts::new(cfg.falling_hearts, viewport, seed),
        }
    }

    pub fn mounted_at(&self) -> Millis {
        self.mounted_at
    }

    /// True once every entrance tween has settled.
    pub fn is_settled(&self, now: Millis) -> bool {
        let t = now.saturating_sub(self.mounted_at);
        self.card_opacity.is_done(t) && self.title_y.is_done(t) && self.message_y.is_done(t)
    }

    pub fn snapshot(&self, now: Millis) -> GreetingFrame {
        let t = now.saturating_sub(self.mounted_at);
        GreetingFrame {
            title: self.title.clone(),
            message: self.message.clone(),
            card_scale: self.card_scale.sample(t),
            card_opacity: self.card_opacity.sample(t),
            title_offset_y: self.title_y.sample(t),
            title_opacity: self.title_opacity.sample(t),
            message_offset_y: self.message_y.sample(t),
            message_opacity: self.message_opacity.sample(t),
            hearts: self.hearts.sample(t),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/screen/greeting.rs"]
mod tests;
