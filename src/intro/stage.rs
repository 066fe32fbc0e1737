use crate::{
    animation::{anim::Keyframes, ease::Ease},
    foundation::core::{Millis, Point, Rgba8, Vec2},
    foundation::error::{KeepsakeError, KeepsakeResult},
    foundation::math::Rng64,
};

/// Handle to an element declared by an [`IntroTimeline`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct TargetId(pub usize);

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum AudioCue {
    Blop,
    Blup,
}

impl AudioCue {
    /// Clip the host should play for this cue.
    pub fn clip(self) -> &'static str {
        match self {
            Self::Blop => "audio/blop.mp3",
            Self::Blup => "audio/blup.mp3",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    X,
    Y,
}

/// Radial burst: an expanding ring plus a few dots flying outwards.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BurstSpec {
    /// Offset from the intro canvas center.
    pub offset: Vec2,
    pub radius: f64,
    pub spread_to: f64,
    pub count: u32,
    pub child_radii: Vec<f64>,
    pub ring_ms: u64,
    pub burst_ms: u64,
    pub color: Rgba8,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct BurstChild {
    pub center: Point,
    pub radius: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct BurstFrame {
    pub center: Point,
    pub ring_radius: f64,
    pub ring_stroke: f64,
    pub children: Vec<BurstChild>,
    pub color: Rgba8,
}

impl BurstSpec {
    pub fn duration(&self) -> Millis {
        Millis(self.ring_ms.max(self.burst_ms))
    }

    /// Burst state `local` ms after it fired. `seed` fixes the spray angle.
    pub fn sample(&self, canvas_center: Point, local: Millis, seed: u64) -> BurstFrame {
        fn progress(local: Millis, len: u64) -> f64 {
            if len == 0 {
                1.0
            } else {
                (local.as_f64() / len as f64).clamp(0.0, 1.0)
            }
        }

        let center = canvas_center + self.offset;
        let ring = Ease::OutQuint.apply(progress(local, self.ring_ms));
        let spray = progress(local, self.burst_ms);
        let inner = self.radius + 15.0;
        let dist = inner + (self.spread_to - inner) * Ease::OutQuint.apply(spray);
        let shrink = 1.0 - Ease::InQuad.apply(spray);

        let mut rng = Rng64::new(seed);
        let base = rng.range_f64(60.0, 180.0).to_radians();
        let count = self.count.max(1);
        let step = std::f64::consts::TAU / f64::from(count);
        let children = (0..count)
            .map(|k| {
                let angle = base + step * f64::from(k);
                let r = self
                    .child_radii
                    .get(k as usize % self.child_radii.len().max(1))
                    .copied()
                    .unwrap_or(0.0);
                BurstChild {
                    center: center + Vec2::new(angle.cos(), angle.sin()) * dist,
                    radius: r * shrink,
                }
            })
            .collect();

        BurstFrame {
            center,
            ring_radius: self.radius + 20.0 * ring,
            ring_stroke: 5.0 * (1.0 - ring),
            children,
            color: self.color,
        }
    }
}

/// Tagged effect played by one stage.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Effect {
    Fade {
        from: f64,
        to: f64,
        duration: Millis,
        ease: Ease,
    },
    Translate {
        axis: Axis,
        track: Keyframes<f64>,
    },
    Scale {
        track: Keyframes<f64>,
    },
    Burst(BurstSpec),
}

impl Effect {
    pub fn fade(from: f64, to: f64, duration_ms: u64, ease: Ease) -> Self {
        Self::Fade {
            from,
            to,
            duration: Millis(duration_ms),
            ease,
        }
    }

    /// Instant opacity change.
    pub fn set_opacity(value: f64) -> Self {
        Self::fade(value, value, 0, Ease::Linear)
    }

    pub fn duration(&self) -> Millis {
        match self {
            Self::Fade { duration, .. } => *duration,
            Self::Translate { track, .. } | Self::Scale { track } => track.span(),
            Self::Burst(spec) => spec.duration(),
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Fade { .. } => "fade",
            Self::Translate { .. } => "translate",
            Self::Scale { .. } => "scale",
            Self::Burst(_) => "burst",
        }
    }
}

/// One scheduled sub-effect of the intro.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Stage {
    pub start: Millis,
    pub target: TargetId,
    pub effect: Effect,
    /// Played when the stage ends.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cue: Option<AudioCue>,
    /// The stage whose end finishes the intro.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub completes: bool,
}

impl Stage {
    pub fn new(start_ms: u64, target: TargetId, effect: Effect) -> Self {
        Self {
            start: Millis(start_ms),
            target,
            effect,
            cue: None,
            completes: false,
        }
    }

    pub fn with_cue(mut self, cue: AudioCue) -> Self {
        self.cue = Some(cue);
        self
    }

    pub fn completing(mut self) -> Self {
        self.completes = true;
        self
    }

    pub fn duration(&self) -> Millis {
        self.effect.duration()
    }

    pub fn end(&self) -> Millis {
        self.start + self.duration()
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TargetKind {
    /// Glyph outline in intro canvas coordinates.
    Letter { path_d: String, color: Rgba8 },
    Line {
        from: Point,
        to: Point,
        color: Rgba8,
        width: f64,
    },
    /// Shape drawn from a `size`-square path, centered on the canvas center plus offset.
    Shape {
        path_d: String,
        size: f64,
        color: Rgba8,
    },
    /// The stage itself; bursts are spawned into it.
    Container,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ElementState {
    pub opacity: f64,
    pub offset: Vec2,
    pub scale: f64,
}

impl Default for ElementState {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            offset: Vec2::ZERO,
            scale: 1.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TargetDecl {
    pub name: String,
    pub kind: TargetKind,
    pub initial: ElementState,
}

/// Declarative intro: the elements it animates and the stages that animate them.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct IntroTimeline {
    pub canvas: Vec2,
    pub targets: Vec<TargetDecl>,
    pub stages: Vec<Stage>,
}

impl IntroTimeline {
    pub fn canvas_center(&self) -> Point {
        Point::new(self.canvas.x / 2.0, self.canvas.y / 2.0)
    }

    pub fn first_stage(&self) -> Option<&Stage> {
        self.stages.first()
    }

    pub fn completing_stage(&self) -> Option<&Stage> {
        self.stages.iter().find(|s| s.completes)
    }

    /// Time from start until every stage has ended.
    pub fn total_duration(&self) -> Millis {
        self.stages
            .iter()
            .map(Stage::end)
            .max()
            .unwrap_or(Millis::ZERO)
    }

    pub fn target_by_name(&self, name: &str) -> Option<TargetId> {
        self.targets
            .iter()
            .position(|t| t.name == name)
            .map(TargetId)
    }

    pub fn validate(&self) -> KeepsakeResult<()> {
        if self.stages.is_empty() {
            return Err(KeepsakeError::validation("intro timeline has no stages"));
        }
        if !self.stages.windows(2).all(|w| w[0].start <= w[1].start) {
            return Err(KeepsakeError::validation(
                "intro stages must be sorted by start offset",
            ));
        }

        for (idx, stage) in self.stages.iter().enumerate() {
            if stage.target.0 >= self.targets.len() {
                return Err(KeepsakeError::validation(format!(
                    "stage {idx} references undeclared target {}",
                    stage.target.0
                )));
            }
            match &stage.effect {
                Effect::Fade { from, to, .. } => {
                    if !(from.is_finite() && to.is_finite()) {
                        return Err(KeepsakeError::validation(format!(
                            "stage {idx}: fade values must be finite"
                        )));
                    }
                }
                Effect::Translate { track, .. } | Effect::Scale { track } => track.validate()?,
                Effect::Burst(spec) => {
                    if spec.count == 0 || spec.child_radii.is_empty() {
                        return Err(KeepsakeError::validation(format!(
                            "stage {idx}: burst needs at least one child"
                        )));
                    }
                }
            }
        }

        let completing: Vec<usize> = self
            .stages
            .iter()
            .enumerate()
            .filter(|(_, s)| s.completes)
            .map(|(i, _)| i)
            .collect();
        match completing.as_slice() {
            [idx] if *idx == self.stages.len() - 1 => Ok(()),
            [_] => Err(KeepsakeError::validation(
                "the completing stage must be the last stage",
            )),
            [] => Err(KeepsakeError::validation(
                "intro timeline has no completing stage",
            )),
            _ => Err(KeepsakeError::validation(
                "intro timeline has more than one completing stage",
            )),
        }
    }
}

/// Collects targets and stages, then sorts and validates them.
#[derive(Clone, Debug, Default)]
pub struct TimelineBuilder {
    canvas: Vec2,
    targets: Vec<TargetDecl>,
    stages: Vec<Stage>,
}

impl TimelineBuilder {
    pub fn new(canvas: Vec2) -> Self {
        Self {
            canvas,
            ..Self::default()
        }
    }

    pub fn target(&mut self, name: &str, kind: TargetKind, initial: ElementState) -> TargetId {
        self.targets.push(TargetDecl {
            name: name.to_owned(),
            kind,
            initial,
        });
        TargetId(self.targets.len() - 1)
    }

    pub fn stage(&mut self, stage: Stage) -> &mut Self {
        self.stages.push(stage);
        self
    }

    pub fn build(mut self) -> KeepsakeResult<IntroTimeline> {
        // Stable: authoring order is kept among stages sharing a start offset, except that
        // the completing stage goes last.
        self.stages.sort_by_key(|s| (s.start, s.completes));
        let timeline = IntroTimeline {
            canvas: self.canvas,
            targets: self.targets,
            stages: self.stages,
        };
        timeline.validate()?;
        Ok(timeline)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/intro/stage.rs"]
mod tests;
