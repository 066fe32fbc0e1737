use crate::{
    config::CursorConfig,
    foundation::core::{Millis, Point, Rgba8, Vec2},
};

/// Fraction of its life a particle stays at full opacity before fading.
const HOLD_FRACTION: f64 = 0.8;

/// One heart bubble left behind by the pointer.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Particle {
    pub id: u64,
    pub origin: Point,
    pub size: f64,
    pub lifetime: Millis,
    pub drift_x: f64,
    pub color: Rgba8,
    pub born_at: Millis,
}

/// Where and how to draw a particle at a given instant.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ParticleSample {
    pub id: u64,
    pub center: Point,
    pub size: f64,
    pub scale: f64,
    pub opacity: f64,
    pub color: Rgba8,
}

impl Particle {
    pub fn deadline(&self) -> Millis {
        self.born_at + self.lifetime
    }

    /// Linear rise with a sideways drift, shrinking, fading out over the last fifth of life.
    pub fn sample(&self, now: Millis, cfg: &CursorConfig) -> ParticleSample {
        let p = if self.lifetime.0 == 0 {
            1.0
        } else {
            (now.saturating_sub(self.born_at).as_f64() / self.lifetime.as_f64()).clamp(0.0, 1.0)
        };
        let opacity = if p <= HOLD_FRACTION {
            cfg.opacity
        } else {
            cfg.opacity * (1.0 - (p - HOLD_FRACTION) / (1.0 - HOLD_FRACTION))
        };
        ParticleSample {
            id: self.id,
            center: self.origin + Vec2::new(self.drift_x * p, -cfg.rise * p),
            size: self.size,
            scale: 1.0 + (cfg.end_scale - 1.0) * p,
            opacity: opacity.max(0.0),
            color: self.color,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/cursor/particle.rs"]
mod tests;
