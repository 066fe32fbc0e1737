use crate::{
    animation::ease::Ease,
    foundation::core::{Millis, Point, TimeSpan, Vec2},
    foundation::error::{KeepsakeError, KeepsakeResult},
};

pub trait Lerp: Sized {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

impl Lerp for Point {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a.lerp(*b, t)
    }
}

/// Keyframe track over local time (milliseconds since the owning stage started).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Keyframes<T> {
    pub keys: Vec<Keyframe<T>>, // sorted by time
    pub mode: InterpMode,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Keyframe<T> {
    pub at: Millis,
    pub value: T,
    pub ease: Ease, // ease applied toward next key
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum InterpMode {
    Hold,
    Linear,
}

/// One leg of a chained tween: move to `to` (or hold when `None`) over `duration`.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment<T> {
    pub duration: Millis,
    pub to: Option<T>,
    pub ease: Ease,
}

impl<T> Segment<T> {
    pub fn to(duration_ms: u64, value: T, ease: Ease) -> Self {
        Self {
            duration: Millis(duration_ms),
            to: Some(value),
            ease,
        }
    }

    pub fn hold(duration_ms: u64) -> Self {
        Self {
            duration: Millis(duration_ms),
            to: None,
            ease: Ease::Linear,
        }
    }
}

impl<T> Keyframes<T>
where
    T: Lerp + Clone,
{
    pub fn constant(value: T) -> Self {
        Self {
            keys: vec![Keyframe {
                at: Millis::ZERO,
                value,
                ease: Ease::Linear,
            }],
            mode: InterpMode::Hold,
        }
    }

    /// Build a linear track from a start value and a chain of segments.
    pub fn from_segments(from: T, segments: Vec<Segment<T>>) -> Self {
        let mut keys = Vec::with_capacity(segments.len() + 1);
        let mut at = Millis::ZERO;
        let mut current = from;
        keys.push(Keyframe {
            at,
            value: current.clone(),
            ease: Ease::Linear,
        });
        for seg in segments {
            if let Some(last) = keys.last_mut() {
                last.ease = seg.ease;
            }
            at = at + seg.duration;
            if let Some(to) = seg.to {
                current = to;
            }
            keys.push(Keyframe {
                at,
                value: current.clone(),
                ease: Ease::Linear,
            });
        }
        Self {
            keys,
            mode: InterpMode::Linear,
        }
    }

    /// Time of the last key; the track holds its final value afterwards.
    pub fn span(&self) -> Millis {
        self.keys.last().map(|k| k.at).unwrap_or(Millis::ZERO)
    }

    pub fn validate(&self) -> KeepsakeResult<()> {
        if self.keys.is_empty() {
            return Err(KeepsakeError::animation(
                "Keyframes must have at least one key",
            ));
        }
        if !self.keys.windows(2).all(|w| w[0].at <= w[1].at) {
            return Err(KeepsakeError::animation(
                "Keyframes keys must be sorted by time",
            ));
        }
        Ok(())
    }

    pub fn sample(&self, t: Millis) -> KeepsakeResult<T> {
        if self.keys.is_empty() {
            return Err(KeepsakeError::animation("Keyframes has no keys"));
        }

        let idx = self.keys.partition_point(|k| k.at <= t);

        if idx == 0 {
            return Ok(self.keys[0].value.clone());
        }
        if idx >= self.keys.len() {
            return Ok(self.keys[self.keys.len() - 1].value.clone());
        }

        let a = &self.keys[idx - 1];
        let b = &self.keys[idx];
        let denom = b.at.0.saturating_sub(a.at.0);
        if denom == 0 {
            return Ok(a.value.clone());
        }

        let u = ((t.0 - a.at.0) as f64) / (denom as f64);
        let ue = a.ease.apply(u);
        match self.mode {
            InterpMode::Hold => Ok(a.value.clone()),
            InterpMode::Linear => Ok(T::lerp(&a.value, &b.value, ue)),
        }
    }
}

/// Single delayed tween, for one-shot entrance animations measured from mount time.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tween {
    pub span: TimeSpan,
    pub from: f64,
    pub to: f64,
    pub ease: Ease,
}

impl Tween {
    pub fn new(delay_ms: u64, duration_ms: u64, from: f64, to: f64, ease: Ease) -> Self {
        Self {
            span: TimeSpan::starting_at(Millis(delay_ms), Millis(duration_ms)),
            from,
            to,
            ease,
        }
    }

    pub fn sample(&self, t: Millis) -> f64 {
        match self.span.progress(t) {
            p if p <= 0.0 => self.from,
            p if p >= 1.0 => self.to,
            p => f64::lerp(&self.from, &self.to, self.ease.apply(p)),
        }
    }

    pub fn is_done(&self, t: Millis) -> bool {
        t >= self.span.end
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/anim.rs"]
mod tests;
