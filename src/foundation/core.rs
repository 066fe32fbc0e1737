use crate::foundation::error::{KeepsakeError, KeepsakeResult};

pub use kurbo::{BezPath, Point, Rect, Vec2};

/// Milliseconds on the host clock.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(transparent)]
pub struct Millis(pub u64);

impl Millis {
    pub const ZERO: Self = Self(0);

    pub fn saturating_sub(self, other: Millis) -> Millis {
        Millis(self.0.saturating_sub(other.0))
    }

    pub fn saturating_add(self, other: Millis) -> Millis {
        Millis(self.0.saturating_add(other.0))
    }

    pub fn as_f64(self) -> f64 {
        self.0 as f64
    }
}

impl std::ops::Add for Millis {
    type Output = Millis;

    fn add(self, rhs: Millis) -> Millis {
        self.saturating_add(rhs)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TimeSpan {
    pub start: Millis,
    pub end: Millis, // exclusive
}

impl TimeSpan {
    pub fn new(start: Millis, end: Millis) -> KeepsakeResult<Self> {
        if start.0 > end.0 {
            return Err(KeepsakeError::validation("TimeSpan start must be <= end"));
        }
        Ok(Self { start, end })
    }

    pub fn starting_at(start: Millis, len: Millis) -> Self {
        Self {
            start,
            end: start + len,
        }
    }

    pub fn len(self) -> Millis {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(self) -> bool {
        self.start == self.end
    }

    pub fn contains(self, t: Millis) -> bool {
        self.start.0 <= t.0 && t.0 < self.end.0
    }

    /// Linear progress of `t` through the span, clamped to `[0, 1]`.
    ///
    /// An empty span is a step: 0 before `start`, 1 from `start` on.
    pub fn progress(self, t: Millis) -> f64 {
        if t.0 < self.start.0 {
            return 0.0;
        }
        if self.is_empty() {
            return 1.0;
        }
        let local = t.saturating_sub(self.start).as_f64();
        (local / self.len().as_f64()).clamp(0.0, 1.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 800.0,
        }
    }
}

impl Viewport {
    pub fn center(self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Both sides finite and positive.
    pub fn is_usable(self) -> bool {
        self.width.is_finite() && self.width > 0.0 && self.height.is_finite() && self.height > 0.0
    }
}

/// Straight (non-premultiplied) RGBA8, serialized as `#RRGGBB` or `#RRGGBBAA`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub fn parse_hex(s: &str) -> KeepsakeResult<Self> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        fn hex_byte(pair: &str) -> KeepsakeResult<u8> {
            u8::from_str_radix(pair, 16)
                .map_err(|_| KeepsakeError::validation(format!("invalid hex byte \"{pair}\"")))
        }

        if !s.is_ascii() {
            return Err(KeepsakeError::validation("hex color must be ASCII"));
        }
        match s.len() {
            6 => Ok(Self {
                r: hex_byte(&s[0..2])?,
                g: hex_byte(&s[2..4])?,
                b: hex_byte(&s[4..6])?,
                a: 255,
            }),
            8 => Ok(Self {
                r: hex_byte(&s[0..2])?,
                g: hex_byte(&s[2..4])?,
                b: hex_byte(&s[4..6])?,
                a: hex_byte(&s[6..8])?,
            }),
            _ => Err(KeepsakeError::validation(
                "hex color must be #RRGGBB or #RRGGBBAA (case-insensitive)",
            )),
        }
    }

    pub fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }

    /// `rgb(...)` form plus a separate opacity, which is what SVG renderers accept everywhere.
    pub(crate) fn svg_fill(self) -> (String, f64) {
        (
            format!("rgb({},{},{})", self.r, self.g, self.b),
            f64::from(self.a) / 255.0,
        )
    }
}

impl TryFrom<String> for Rgba8 {
    type Error = KeepsakeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse_hex(&value)
    }
}

impl From<Rgba8> for String {
    fn from(value: Rgba8) -> Self {
        value.to_hex()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
