use crate::animation::ease::Ease;

/// Linear (optionally eased) mapping from a scroll offset to an output value.
///
/// `input_from > input_to` is allowed and describes a mapping that runs against the
/// scroll direction. Outputs clamp to the endpoint values outside the input interval.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollRange {
    pub input_from: f64,
    pub input_to: f64,
    pub output_from: f64,
    pub output_to: f64,
    #[serde(default)]
    pub ease: Ease,
}

impl ScrollRange {
    pub fn linear(input: [f64; 2], output: [f64; 2]) -> Self {
        Self {
            input_from: input[0],
            input_to: input[1],
            output_from: output[0],
            output_to: output[1],
            ease: Ease::Linear,
        }
    }

    pub fn with_ease(self, ease: Ease) -> Self {
        Self { ease, ..self }
    }

    /// Progress of `offset` through the input interval, in `[0, 1]`.
    pub fn progress(&self, offset: f64) -> f64 {
        let span = self.input_to - self.input_from;
        if span == 0.0 {
            // Degenerate interval: a step at the single input point.
            return if offset >= self.input_from { 1.0 } else { 0.0 };
        }
        ((offset - self.input_from) / span).clamp(0.0, 1.0)
    }

    pub fn map(&self, offset: f64) -> f64 {
        let t = self.ease.apply(self.progress(offset));
        self.output_from + (self.output_to - self.output_from) * t
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Direction {
    Forward,
    Reverse,
}

/// A "scrolling down" range and a "scrolling up" range, picked by a threshold.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DirectionalRange {
    pub forward: ScrollRange,
    pub reverse: ScrollRange,
}

impl DirectionalRange {
    /// Offsets strictly above `threshold` use the reverse range.
    pub fn direction(threshold: f64, offset: f64) -> Direction {
        if offset > threshold {
            Direction::Reverse
        } else {
            Direction::Forward
        }
    }

    pub fn active(&self, threshold: f64, offset: f64) -> &ScrollRange {
        match Self::direction(threshold, offset) {
            Direction::Forward => &self.forward,
            Direction::Reverse => &self.reverse,
        }
    }

    pub fn map(&self, threshold: f64, offset: f64) -> f64 {
        self.active(threshold, offset).map(offset)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/range.rs"]
mod tests;
