use kurbo::{CubicBez, ParamCurve, Point};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    #[default]
    Linear,
    InQuad,
    OutQuad,
    InOutQuad,
    InCubic,
    OutCubic,
    InOutCubic,
    OutQuint,
    InSine,
    OutSine,
    InOutSine,
    /// Pop that overshoots to about 1.07, dips to about 0.85, then settles on 1.
    HeartPop,
}

impl Ease {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::OutQuint => 1.0 - (1.0 - t).powi(5),
            // Sine curves are snapped at the endpoints so holds after a segment are exact.
            Self::InSine => snap(1.0 - (t * std::f64::consts::FRAC_PI_2).cos(), t),
            Self::OutSine => snap((t * std::f64::consts::FRAC_PI_2).sin(), t),
            Self::InOutSine => snap(-((std::f64::consts::PI * t).cos() - 1.0) / 2.0, t),
            Self::HeartPop => snap(path_ease(&HEART_POP, t), t),
        }
    }
}

fn snap(v: f64, t: f64) -> f64 {
    if t <= 0.0 {
        0.0
    } else if t >= 1.0 {
        1.0
    } else {
        v
    }
}

/// Easing curve drawn in a 100x100 box: x is time, y is `100 * (1 - value)`.
const HEART_POP: [[(f64, f64); 4]; 3] = [
    [(0.0, 100.0), (2.9, 86.7), (33.6, -7.3), (46.0, -7.3)],
    [(46.0, -7.3), (58.4, -7.3), (61.2, 15.4), (72.0, 15.4)],
    [(72.0, 15.4), (82.8, 15.4), (89.0, 0.0), (100.0, 0.0)],
];

/// Samples a path easing at time `t`. Each segment must be monotonic in x.
fn path_ease(segments: &[[(f64, f64); 4]], t: f64) -> f64 {
    let x = t * 100.0;
    let Some(seg) = segments
        .iter()
        .find(|s| x <= s[3].0)
        .or_else(|| segments.last())
    else {
        return t;
    };
    let [p0, p1, p2, p3] = seg.map(|(x, y)| Point::new(x, y));
    let curve = CubicBez::new(p0, p1, p2, p3);

    let (mut lo, mut hi) = (0.0, 1.0);
    for _ in 0..48 {
        let mid = (lo + hi) / 2.0;
        if curve.eval(mid).x < x {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    1.0 - curve.eval((lo + hi) / 2.0).y / 100.0
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
