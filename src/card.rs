//! Card session: the one object a host talks to.
//!
//! The host forwards its events to [`Card::handle`] and draws whatever
//! [`Card::snapshot`] returns. Exactly one screen is mounted at a time; the cursor effect
//! lives for the whole session.

use crate::{
    config::CardConfig,
    cursor::effect::{CursorEffect, CursorFrame},
    foundation::core::{Millis, Point, Vec2, Viewport},
    foundation::error::KeepsakeResult,
    foundation::math::Rng64,
    intro::{
        driver::{IntroDriver, IntroEvent, IntroPhase},
        stage::{AudioCue, BurstFrame, ElementState, IntroTimeline, TargetId, TargetKind},
    },
    screen::{
        backdrop::{FallingHearts, HeartSprite},
        greeting::{GreetingFrame, GreetingScreen},
        sequencer::{Screen, Sequencer, Trigger},
        timeline::{TimelineFrame, TimelineScreen},
    },
};

const INTRO_SALT: u64 = 1;
const INTRO_HEARTS_SALT: u64 = 2;
const GREETING_HEARTS_SALT: u64 = 3;
const CURSOR_SALT: u64 = 4;

/// Input from the host, in host clock milliseconds.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HostEvent {
    Tick {
        now: Millis,
    },
    PointerMove {
        now: Millis,
        pos: Point,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        hovered_color: Option<String>,
    },
    StartPressed {
        now: Millis,
    },
    HeartPressed {
        now: Millis,
    },
    Scroll {
        offset: f64,
    },
    Resize {
        width: f64,
        height: f64,
    },
}

impl HostEvent {
    /// Host time carried by the event, if any.
    pub fn time(&self) -> Option<Millis> {
        match self {
            Self::Tick { now }
            | Self::PointerMove { now, .. }
            | Self::StartPressed { now }
            | Self::HeartPressed { now } => Some(*now),
            Self::Scroll { .. } | Self::Resize { .. } => None,
        }
    }
}

/// Something the host has to act on.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "output", rename_all = "snake_case")]
pub enum CardOutput {
    PlayCue {
        cue: AudioCue,
        clip: &'static str,
        volume: f64,
    },
    ScreenChanged {
        screen: Screen,
    },
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct IntroElementFrame {
    pub name: String,
    pub kind: TargetKind,
    pub state: ElementState,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct IntroFrame {
    pub phase: IntroPhase,
    /// True until the start affordance is pressed.
    pub awaiting_start: bool,
    pub canvas: Vec2,
    pub name: String,
    pub elements: Vec<IntroElementFrame>,
    pub bursts: Vec<BurstFrame>,
    pub hearts: Vec<HeartSprite>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum ScreenFrame {
    Intro(IntroFrame),
    Greeting(GreetingFrame),
    Timeline(TimelineFrame),
}

/// Everything needed to draw one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FrameSnapshot {
    pub now: Millis,
    pub viewport: Viewport,
    pub scene: ScreenFrame,
    pub cursor: CursorFrame,
}

#[derive(Clone, Debug)]
enum Mounted {
    Intro {
        driver: IntroDriver,
        hearts: FallingHearts,
    },
    Greeting(GreetingScreen),
    Timeline(TimelineScreen),
}

#[derive(Clone, Debug)]
pub struct Card {
    cfg: CardConfig,
    viewport: Viewport,
    sequencer: Sequencer,
    mounted: Mounted,
    cursor: CursorEffect,
}

impl Card {
    #[tracing::instrument(skip(cfg), fields(seed = cfg.seed, stories = cfg.stories.len()))]
    pub fn new(cfg: CardConfig) -> KeepsakeResult<Self> {
        cfg.validate()?;
        let seed = cfg.seed;
        let viewport = cfg.viewport;
        let driver = IntroDriver::new(
            IntroTimeline::love()?,
            Rng64::fork(seed, INTRO_SALT).next_u64(),
        )?;
        let hearts = FallingHearts::new(
            cfg.intro.falling_hearts,
            viewport,
            Rng64::fork(seed, INTRO_HEARTS_SALT).next_u64(),
        );
        let cursor = CursorEffect::mount(
            cfg.cursor,
            viewport,
            Rng64::fork(seed, CURSOR_SALT).next_u64(),
        );
        Ok(Self {
            cfg,
            viewport,
            sequencer: Sequencer::new(),
            mounted: Mounted::Intro { driver, hearts },
            cursor,
        })
    }

    pub fn config(&self) -> &CardConfig {
        &self.cfg
    }

    pub fn screen(&self) -> Screen {
        self.sequencer.current()
    }

    pub fn sequencer(&self) -> &Sequencer {
        &self.sequencer
    }

    pub fn cursor(&self) -> &CursorEffect {
        &self.cursor
    }

    pub fn intro(&self) -> Option<&IntroDriver> {
        match &self.mounted {
            Mounted::Intro { driver, .. } => Some(driver),
            _ => None,
        }
    }

    pub fn intro_mut(&mut self) -> Option<&mut IntroDriver> {
        match &mut self.mounted {
            Mounted::Intro { driver, .. } => Some(driver),
            _ => None,
        }
    }

    pub fn timeline(&self) -> Option<&TimelineScreen> {
        match &self.mounted {
            Mounted::Timeline(t) => Some(t),
            _ => None,
        }
    }

    pub fn timeline_mut(&mut self) -> Option<&mut TimelineScreen> {
        match &mut self.mounted {
            Mounted::Timeline(t) => Some(t),
            _ => None,
        }
    }

    pub fn handle(&mut self, event: HostEvent) -> KeepsakeResult<Vec<CardOutput>> {
        let mut out = Vec::new();
        match event {
            HostEvent::Tick { now } => {
                self.cursor.frame(now);
                self.tick_intro(now, &mut out);
            }
            HostEvent::PointerMove {
                now,
                pos,
                hovered_color,
            } => {
                self.cursor.pointer_move(now, pos, hovered_color.as_deref());
            }
            HostEvent::StartPressed { now } => {
                if let Some(driver) = self.intro_mut() {
                    driver.start(now);
                }
            }
            HostEvent::HeartPressed { now } => {
                if self.sequencer.advance(Trigger::HeartPressed).is_some() {
                    let screen = TimelineScreen::mount(now, &self.cfg, self.viewport)?;
                    self.mounted = Mounted::Timeline(screen);
                    out.push(CardOutput::ScreenChanged {
                        screen: Screen::Timeline,
                    });
                }
            }
            HostEvent::Scroll { offset } => {
                if let Some(t) = self.timeline_mut() {
                    t.scroll(offset);
                }
            }
            HostEvent::Resize { width, height } => {
                let viewport = Viewport { width, height };
                if !viewport.is_usable() {
                    tracing::warn!(width, height, "ignoring resize to an unusable viewport");
                    return Ok(out);
                }
                self.viewport = viewport;
                if let Some(t) = self.timeline_mut() {
                    t.resize(viewport);
                }
            }
        }
        Ok(out)
    }

    fn tick_intro(&mut self, now: Millis, out: &mut Vec<CardOutput>) {
        let Mounted::Intro { driver, .. } = &mut self.mounted else {
            return;
        };
        let mut completed = false;
        for event in driver.tick(now) {
            match event {
                IntroEvent::Cue(cue) => out.push(CardOutput::PlayCue {
                    cue,
                    clip: cue.clip(),
                    volume: self.cfg.audio.volume,
                }),
                IntroEvent::Completed => completed = true,
            }
        }
        if !completed {
            return;
        }

        driver.unmount();
        if let Some(screen) = self.sequencer.advance(Trigger::IntroCompleted) {
            self.mounted = Mounted::Greeting(GreetingScreen::mount(
                now,
                &self.cfg.greeting,
                self.viewport,
                Rng64::fork(self.cfg.seed, GREETING_HEARTS_SALT).next_u64(),
            ));
            out.push(CardOutput::ScreenChanged { screen });
        }
    }

    /// Tear the session down: the intro drops its pending stages and the cursor its
    /// particles and timers.
    pub fn unmount(&mut self) {
        if let Some(driver) = self.intro_mut() {
            driver.unmount();
        }
        self.cursor.unmount();
    }

    /// Replay `events` in order and collect every output.
    pub fn replay<I>(&mut self, events: I) -> KeepsakeResult<Vec<CardOutput>>
    where
        I: IntoIterator<Item = HostEvent>,
    {
        let mut out = Vec::new();
        for event in events {
            out.extend(self.handle(event)?);
        }
        Ok(out)
    }

    pub fn snapshot(&self, now: Millis) -> FrameSnapshot {
        let scene = match &self.mounted {
            Mounted::Intro { driver, hearts } => {
                ScreenFrame::Intro(self.intro_frame(driver, hearts, now))
            }
            Mounted::Greeting(g) => ScreenFrame::Greeting(g.snapshot(now)),
            Mounted::Timeline(t) => ScreenFrame::Timeline(t.snapshot(now)),
        };
        FrameSnapshot {
            now,
            viewport: self.viewport,
            scene,
            cursor: self.cursor.snapshot(now),
        }
    }

    fn intro_frame(
        &self,
        driver: &IntroDriver,
        hearts: &FallingHearts,
        now: Millis,
    ) -> IntroFrame {
        let timeline = driver.timeline();
        let scene = driver.scene();
        let elements = timeline
            .targets
            .iter()
            .enumerate()
            .filter_map(|(idx, decl)| {
                let state = scene.element(TargetId(idx))?;
                Some(IntroElementFrame {
                    name: decl.name.clone(),
                    kind: decl.kind.clone(),
                    state: *state,
                })
            })
            .collect();
        IntroFrame {
            phase: driver.phase(),
            awaiting_start: driver.phase() == IntroPhase::Idle,
            canvas: timeline.canvas,
            name: self.cfg.intro.name.clone(),
            elements,
            bursts: scene.bursts().to_vec(),
            hearts: hearts.sample(now),
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/card/card.rs"]
mod tests;
