use std::collections::BTreeSet;

use crate::{
    foundation::core::{Millis, Point},
    foundation::error::KeepsakeResult,
    foundation::math::Rng64,
    intro::scene::IntroScene,
    intro::stage::{AudioCue, Axis, Effect, IntroTimeline, Stage},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum IntroPhase {
    /// Waiting for the start affordance.
    Idle,
    Running { started_at: Millis },
    /// The completing stage ended.
    Finished,
    /// Torn down by the host; pending stages were discarded.
    Unmounted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "event", content = "cue", rename_all = "snake_case")]
pub enum IntroEvent {
    Cue(AudioCue),
    Completed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum StageState {
    Pending,
    Active,
    Done,
}

/// Plays an [`IntroTimeline`] once against host time.
///
/// The driver is polled: every [`IntroDriver::tick`] samples all started stages at their
/// local time and reports cues and completion that became due since the previous tick.
/// Large gaps between ticks are fine, stages that were skipped over still fire their
/// end-of-stage events in start order.
#[derive(Clone, Debug)]
pub struct IntroDriver {
    timeline: IntroTimeline,
    scene: IntroScene,
    phase: IntroPhase,
    states: Vec<StageState>,
    warned: Vec<bool>,
    played: BTreeSet<AudioCue>,
    seed: u64,
}

impl IntroDriver {
    pub fn new(timeline: IntroTimeline, seed: u64) -> KeepsakeResult<Self> {
        timeline.validate()?;
        let n = timeline.stages.len();
        Ok(Self {
            scene: IntroScene::new(&timeline),
            timeline,
            phase: IntroPhase::Idle,
            states: vec![StageState::Pending; n],
            warned: vec![false; n],
            played: BTreeSet::new(),
            seed,
        })
    }

    pub fn timeline(&self) -> &IntroTimeline {
        &self.timeline
    }

    pub fn scene(&self) -> &IntroScene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut IntroScene {
        &mut self.scene
    }

    pub fn phase(&self) -> IntroPhase {
        self.phase
    }

    /// Stages that have not ended yet.
    pub fn pending_stages(&self) -> usize {
        self.states
            .iter()
            .filter(|s| **s != StageState::Done)
            .count()
    }

    /// Start the run. Returns `false` (and does nothing) unless the driver is idle.
    pub fn start(&mut self, now: Millis) -> bool {
        if self.phase != IntroPhase::Idle {
            tracing::debug!(phase = ?self.phase, "intro start ignored");
            return false;
        }
        tracing::debug!(at = now.0, "intro started");
        self.phase = IntroPhase::Running { started_at: now };
        true
    }

    /// Drop every pending stage. Nothing scheduled fires after this.
    pub fn unmount(&mut self) {
        if self.phase == IntroPhase::Unmounted {
            return;
        }
        let discarded = self.pending_stages();
        tracing::debug!(discarded, "intro unmounted");
        self.states.fill(StageState::Done);
        self.scene.clear_bursts();
        self.phase = IntroPhase::Unmounted;
    }

    pub fn tick(&mut self, now: Millis) -> Vec<IntroEvent> {
        let IntroPhase::Running { started_at } = self.phase else {
            return Vec::new();
        };
        let elapsed = now.saturating_sub(started_at);
        let center = self.timeline.canvas_center();
        let mut events = Vec::new();

        self.scene.clear_bursts();
        for idx in 0..self.timeline.stages.len() {
            let stage = &self.timeline.stages[idx];
            if stage.start > elapsed {
                break;
            }
            if self.states[idx] == StageState::Done {
                continue;
            }
            self.states[idx] = StageState::Active;

            let local = elapsed.saturating_sub(stage.start).min(stage.duration());
            let applied = apply_stage(&mut self.scene, stage, local, center, self.seed, idx);
            if !applied && !self.warned[idx] {
                tracing::warn!(
                    stage = idx,
                    target = stage.target.0,
                    effect = stage.effect.kind_name(),
                    "intro target is not attached; skipping effect"
                );
                self.warned[idx] = true;
            }

            if elapsed >= stage.end() {
                self.states[idx] = StageState::Done;
                if let Some(cue) = stage.cue
                    && self.played.insert(cue)
                {
                    events.push(IntroEvent::Cue(cue));
                }
                if stage.completes {
                    tracing::debug!(at = stage.end().0, "intro completed");
                    events.push(IntroEvent::Completed);
                    self.phase = IntroPhase::Finished;
                    break;
                }
            }
        }
        events
    }
}

/// Returns `false` when the stage's target is missing and the effect was skipped.
fn apply_stage(
    scene: &mut IntroScene,
    stage: &Stage,
    local: Millis,
    center: Point,
    seed: u64,
    idx: usize,
) -> bool {
    if !scene.is_attached(stage.target) {
        return false;
    }
    match &stage.effect {
        Effect::Burst(spec) => {
            let burst_seed = Rng64::fork(seed, idx as u64).next_u64();
            scene.push_burst(spec.sample(center, local, burst_seed));
        }
        Effect::Fade {
            from,
            to,
            duration,
            ease,
        } => {
            let t = if duration.0 == 0 {
                1.0
            } else {
                local.as_f64() / duration.as_f64()
            };
            if let Some(el) = scene.element_mut(stage.target) {
                el.opacity = from + (to - from) * ease.apply(t);
            }
        }
        Effect::Translate { axis, track } => match track.sample(local) {
            Ok(v) => {
                if let Some(el) = scene.element_mut(stage.target) {
                    match axis {
                        Axis::X => el.offset.x = v,
                        Axis::Y => el.offset.y = v,
                    }
                }
            }
            Err(err) => tracing::warn!(%err, stage = idx, "translate track failed to sample"),
        },
        Effect::Scale { track } => match track.sample(local) {
            Ok(v) => {
                if let Some(el) = scene.element_mut(stage.target) {
                    el.scale = v;
                }
            }
            Err(err) => tracing::warn!(%err, stage = idx, "scale track failed to sample"),
        },
    }
    true
}

#[cfg(test)]
#[path = "../../tests/unit/intro/driver.rs"]
mod tests;
