use crate::foundation::{
    core::{Millis, Point, Viewport},
    math::Rng64,
};

const MIN_FALL_MS: f64 = 2000.0;
const MAX_FALL_MS: f64 = 5000.0;
const MAX_DELAY_MS: f64 = 2000.0;
/// Hearts start and end this far outside the viewport.
const OVERSHOOT: f64 = 100.0;

/// Number of heart glyph variants the host can draw.
pub const HEART_GLYPHS: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct FallingHeart {
    pub x_from: f64,
    pub x_to: f64,
    pub fall: Millis,
    pub delay: Millis,
    pub glyph: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct HeartSprite {
    pub pos: Point,
    pub glyph: usize,
}

/// Decorative hearts drifting down the screen forever.
///
/// Every heart is rolled once at mount time and then loops: after its delay it falls from
/// above the viewport to below it, then restarts from the top.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FallingHearts {
    viewport: Viewport,
    hearts: Vec<FallingHeart>,
}

impl FallingHearts {
    pub fn new(count: usize, viewport: Viewport, seed: u64) -> Self {
        let mut rng = Rng64::new(seed);
        let hearts = (0..count)
            .map(|_| FallingHeart {
                x_from: rng.range_f64(0.0, viewport.width),
                x_to: rng.range_f64(0.0, viewport.width),
                fall: Millis(rng.range_f64(MIN_FALL_MS, MAX_FALL_MS) as u64),
                delay: Millis(rng.range_f64(0.0, MAX_DELAY_MS) as u64),
                glyph: rng.index(HEART_GLYPHS),
            })
            .collect();
        Self { viewport, hearts }
    }

    pub fn hearts(&self) -> &[FallingHeart] {
        &self.hearts
    }

    /// Positions `elapsed` ms after mount.
    pub fn sample(&self, elapsed: Millis) -> Vec<HeartSprite> {
        let top = -OVERSHOOT;
        let bottom = self.viewport.height + OVERSHOOT;
        self.hearts
            .iter()
            .map(|h| {
                let t = match elapsed.0.checked_sub(h.delay.0) {
                    Some(local) if h.fall.0 > 0 => (local % h.fall.0) as f64 / h.fall.as_f64(),
                    _ => 0.0,
                };
                HeartSprite {
                    pos: Point::new(h.x_from + (h.x_to - h.x_from) * t, top + (bottom - top) * t),
                    glyph: h.glyph,
                }
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/screen/backdrop.rs"]
mod tests;
