//! Card configuration.
//!
//! Every field has a default matching the shipped card, so an empty JSON object (`{}`)
//! is a complete configuration. Tuned constants such as the scroll threshold and label
//! stride live here rather than in code so they can be adjusted per viewport.

use std::path::Path;

use anyhow::Context as _;

use crate::foundation::core::{Rgba8, Viewport};
use crate::foundation::error::{KeepsakeError, KeepsakeResult};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CardConfig {
    pub viewport: Viewport,
    pub seed: u64,
    pub intro: IntroConfig,
    pub greeting: GreetingConfig,
    pub scroll: ScrollConfig,
    pub header_labels: Vec<String>,
    pub badge_image: String,
    pub stories: Vec<Story>,
    pub grid: GridConfig,
    pub connector: ConnectorConfig,
    pub cursor: CursorConfig,
    pub audio: AudioConfig,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            seed: 0x5EED_CA2D,
            intro: IntroConfig::default(),
            greeting: GreetingConfig::default(),
            scroll: ScrollConfig::default(),
            header_labels: ["Ho", "Thi", "Hong", "Ngat"]
                .into_iter()
                .map(str::to_owned)
                .collect(),
            badge_image: "/photos/beauty_1746170682737.JPG".to_owned(),
            stories: Story::defaults(),
            grid: GridConfig::default(),
            connector: ConnectorConfig::default(),
            cursor: CursorConfig::default(),
            audio: AudioConfig::default(),
        }
    }
}

impl CardConfig {
    pub fn from_path(path: &Path) -> KeepsakeResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read card config '{}'", path.display()))?;
        let cfg = Self::from_json(&text)?;
        Ok(cfg)
    }

    pub fn from_json(text: &str) -> KeepsakeResult<Self> {
        let cfg: Self = serde_json::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> KeepsakeResult<()> {
        fn finite_pos(name: &str, v: f64) -> KeepsakeResult<()> {
            if !v.is_finite() || v <= 0.0 {
                return Err(KeepsakeError::validation(format!("{name} must be > 0")));
            }
            Ok(())
        }
        fn finite_non_neg(name: &str, v: f64) -> KeepsakeResult<()> {
            if !v.is_finite() || v < 0.0 {
                return Err(KeepsakeError::validation(format!("{name} must be >= 0")));
            }
            Ok(())
        }

        finite_pos("viewport.width", self.viewport.width)?;
        finite_pos("viewport.height", self.viewport.height)?;

        finite_non_neg("scroll.threshold", self.scroll.threshold)?;
        finite_non_neg("scroll.stride", self.scroll.stride)?;
        finite_pos("scroll.span", self.scroll.span)?;
        finite_non_neg("scroll.lift", self.scroll.lift)?;
        finite_non_neg("scroll.sticky_after", self.scroll.sticky_after)?;

        finite_non_neg("grid.gap", self.grid.gap)?;
        finite_non_neg("grid.padding_x", self.grid.padding_x)?;
        finite_pos("grid.max_width", self.grid.max_width)?;
        finite_pos("grid.card_height", self.grid.card_height)?;
        if self.grid.columns == 0 {
            return Err(KeepsakeError::validation("grid.columns must be >= 1"));
        }

        finite_non_neg("connector.tangent", self.connector.tangent)?;

        let c = &self.cursor;
        if !(c.smoothing > 0.0 && c.smoothing <= 1.0) {
            return Err(KeepsakeError::validation(
                "cursor.smoothing must be in (0, 1]",
            ));
        }
        finite_non_neg("cursor.jitter", c.jitter)?;
        finite_non_neg("cursor.drift", c.drift)?;
        finite_non_neg("cursor.rise", c.rise)?;
        finite_pos("cursor.size_min", c.size_min)?;
        if c.size_max < c.size_min {
            return Err(KeepsakeError::validation(
                "cursor.size_max must be >= cursor.size_min",
            ));
        }
        if c.lifetime_min_ms == 0 || c.lifetime_max_ms < c.lifetime_min_ms {
            return Err(KeepsakeError::validation(
                "cursor lifetimes must satisfy 0 < lifetime_min_ms <= lifetime_max_ms",
            ));
        }

        if !(0.0..=1.0).contains(&self.audio.volume) {
            return Err(KeepsakeError::validation("audio.volume must be in [0, 1]"));
        }

        let mut ids = std::collections::BTreeSet::new();
        for story in &self.stories {
            if !ids.insert(story.id) {
                return Err(KeepsakeError::validation(format!(
                    "duplicate story id {}",
                    story.id
                )));
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IntroConfig {
    pub name: String,
    pub falling_hearts: usize,
}

impl Default for IntroConfig {
    fn default() -> Self {
        Self {
            name: "Hong Ngat".to_owned(),
            falling_hearts: 20,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GreetingConfig {
    pub title: String,
    pub message: String,
    pub falling_hearts: usize,
}

impl Default for GreetingConfig {
    fn default() -> Self {
        Self {
            title: "Happy Birthday, My Love!".to_owned(),
            message: "Wishing the most wonderful birthday to the most wonderful person in my \
                      life. May your day be filled with laughter, love, and all your favorite \
                      things. I love you more than words can say!"
                .to_owned(),
            falling_hearts: 10,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScrollConfig {
    /// Offsets above this use each label's reverse range.
    pub threshold: f64,
    /// Input offset between consecutive labels of the cascade.
    pub stride: f64,
    /// Input width of each label's fade.
    pub span: f64,
    /// How far (px) a label rises while fading out.
    pub lift: f64,
    pub sticky_after: f64,
    pub badge_min_scale: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            threshold: 150.0,
            stride: 50.0,
            span: 100.0,
            lift: 20.0,
            sticky_after: 10.0,
            badge_min_scale: 0.5,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridConfig {
    pub columns: u32,
    pub gap: f64,
    pub padding_x: f64,
    pub max_width: f64,
    pub card_height: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            columns: 2,
            gap: 48.0,
            padding_x: 32.0,
            max_width: 1000.0,
            card_height: 400.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConnectorConfig {
    /// Control point offset along the connector's axis.
    pub tangent: f64,
}

impl Default for ConnectorConfig {
    fn default() -> Self {
        Self { tangent: 20.0 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CursorConfig {
    pub default_color: Rgba8,
    /// Fraction of the remaining distance the trailing anchor covers per frame.
    pub smoothing: f64,
    pub spawn_interval_ms: u64,
    pub jitter: f64,
    pub size_min: f64,
    pub size_max: f64,
    pub lifetime_min_ms: u64,
    pub lifetime_max_ms: u64,
    pub drift: f64,
    pub rise: f64,
    pub end_scale: f64,
    pub opacity: f64,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            default_color: Rgba8::rgb(0xff, 0x6b, 0x6b),
            smoothing: 0.15,
            spawn_interval_ms: 60,
            jitter: 10.0,
            size_min: 16.0,
            size_max: 28.0,
            lifetime_min_ms: 1200,
            lifetime_max_ms: 1800,
            drift: 20.0,
            rise: 60.0,
            end_scale: 0.7,
            opacity: 0.7,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AudioConfig {
    pub volume: f64,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self { volume: 0.2 }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Story {
    pub id: u32,
    pub image: String,
    pub title: String,
    #[serde(default = "Story::default_date")]
    pub date: String,
}

impl Story {
    fn default_date() -> String {
        "Cherished Memory".to_owned()
    }

    pub fn defaults() -> Vec<Story> {
        [
            ("/photos/IMG_1072.JPG", "Radiant Beauty"),
            ("/photos/beauty_1589637736203.JPG", "Charming Smile"),
            ("/photos/beauty_1649498572034.JPG", "Elegant Moments"),
            ("/photos/beauty_1649497517782.JPG", "Playful Vibes"),
            ("/photos/IMG_6730.JPG", "Adventurous Heart"),
            ("/photos/beauty_1746170682737.JPG", "Lovely Portrait"),
            ("/photos/IMG_6644.JPG", "Cozy Days"),
            ("/photos/IMG_9090.JPG", "Forever Us"),
        ]
        .into_iter()
        .zip(1u32..)
        .map(|((image, title), id)| Story {
            id,
            image: image.to_owned(),
            title: title.to_owned(),
            date: Self::default_date(),
        })
        .collect()
    }
}

#[cfg(test)]
#[path = "../tests/unit/config/config.rs"]
mod tests;
