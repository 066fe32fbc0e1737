use crate::{
    config::ScrollConfig,
    scroll::range::{Direction, DirectionalRange, ScrollRange},
};

/// One header label animated by scroll position.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TrackedLabel {
    pub text: String,
    pub opacity: DirectionalRange,
    pub lift: ScrollRange,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct LabelFrame {
    pub text: String,
    pub opacity: f64,
    pub offset_y: f64,
    pub direction: Direction,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct HeaderFrame {
    pub offset: f64,
    pub sticky: bool,
    pub labels: Vec<LabelFrame>,
    pub badge_opacity: f64,
    pub badge_scale: f64,
}

/// Maps the live scroll offset to per-label outputs.
///
/// Pure function of the offset: nothing is remembered between calls, so scrolling
/// back always restores the earlier frame.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollMapper {
    threshold: f64,
    sticky_after: f64,
    labels: Vec<TrackedLabel>,
    badge_opacity: ScrollRange,
    badge_scale: ScrollRange,
}

impl ScrollMapper {
    pub fn new(
        threshold: f64,
        sticky_after: f64,
        labels: Vec<TrackedLabel>,
        badge_opacity: ScrollRange,
        badge_scale: ScrollRange,
    ) -> Self {
        Self {
            threshold,
            sticky_after,
            labels,
            badge_opacity,
            badge_scale,
        }
    }

    /// Staggered cascade: label `i` fades over `[i*stride, i*stride + span]` going down and
    /// comes back over `[threshold + span - i*stride, threshold - i*stride]` going up, so the
    /// last label to leave is the first to return.
    pub fn cascade<S: AsRef<str>>(texts: &[S], cfg: &ScrollConfig) -> Self {
        let labels = texts
            .iter()
            .enumerate()
            .map(|(i, text)| {
                let start = i as f64 * cfg.stride;
                TrackedLabel {
                    text: text.as_ref().to_owned(),
                    opacity: DirectionalRange {
                        forward: ScrollRange::linear([start, start + cfg.span], [1.0, 0.0]),
                        reverse: ScrollRange::linear(
                            [cfg.threshold + cfg.span - start, cfg.threshold - start],
                            [0.0, 1.0],
                        ),
                    },
                    lift: ScrollRange::linear([start, start + cfg.span], [0.0, -cfg.lift]),
                }
            })
            .collect();

        let badge_in = [cfg.threshold, cfg.threshold + cfg.span];
        Self::new(
            cfg.threshold,
            cfg.sticky_after,
            labels,
            ScrollRange::linear(badge_in, [0.0, 1.0]),
            ScrollRange::linear(badge_in, [cfg.badge_min_scale, 1.0]),
        )
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn labels(&self) -> &[TrackedLabel] {
        &self.labels
    }

    pub fn map(&self, offset: f64) -> HeaderFrame {
        let offset = sanitize_offset(offset);
        let direction = DirectionalRange::direction(self.threshold, offset);
        let labels = self
            .labels
            .iter()
            .map(|l| LabelFrame {
                text: l.text.clone(),
                opacity: l.opacity.map(self.threshold, offset),
                offset_y: l.lift.map(offset),
                direction,
            })
            .collect();

        HeaderFrame {
            offset,
            sticky: offset > self.sticky_after,
            labels,
            badge_opacity: self.badge_opacity.map(offset),
            badge_scale: self.badge_scale.map(offset),
        }
    }
}

fn sanitize_offset(offset: f64) -> f64 {
    if offset.is_finite() { offset.max(0.0) } else { 0.0 }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/mapper.rs"]
mod tests;
