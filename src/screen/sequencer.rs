/// Top-level screens of the card, in the only order they can appear.
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
#[serde(rename_all = "snake_case")]
pub enum Screen {
    #[default]
    Intro,
    Greeting,
    Timeline,
}

/// Affordances that can move the card forward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trigger {
    IntroCompleted,
    HeartPressed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Transition {
    pub from: Screen,
    pub to: Screen,
    pub trigger: Trigger,
}

/// Forward-only screen state machine. Exactly one screen is current at any time.
#[derive(Clone, Debug, Default)]
pub struct Sequencer {
    current: Screen,
    history: Vec<Transition>,
}

impl Sequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Screen {
        self.current
    }

    pub fn history(&self) -> &[Transition] {
        &self.history
    }

    /// Apply `trigger`. Returns the new screen, or `None` when the trigger is not the current
    /// screen's way forward.
    pub fn advance(&mut self, trigger: Trigger) -> Option<Screen> {
        let next = match (self.current, trigger) {
            (Screen::Intro, Trigger::IntroCompleted) => Screen::Greeting,
            (Screen::Greeting, Trigger::HeartPressed) => Screen::Timeline,
            (current, trigger) => {
                tracing::debug!(?current, ?trigger, "trigger ignored");
                return None;
            }
        };
        tracing::debug!(from = ?self.current, to = ?next, ?trigger, "screen transition");
        self.history.push(Transition {
            from: self.current,
            to: next,
            trigger,
        });
        self.current = next;
        Some(next)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/screen/sequencer.rs"]
mod tests;
