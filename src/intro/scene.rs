use crate::intro::stage::{BurstFrame, ElementState, IntroTimeline, TargetId};

/// Live visual state of the intro's elements.
///
/// Elements are addressed by the [`TargetId`]s the timeline handed out. A host that
/// tears an element down calls [`IntroScene::detach`]; stages aimed at it are skipped.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct IntroScene {
    elements: Vec<Option<ElementState>>,
    bursts: Vec<BurstFrame>,
}

impl IntroScene {
    pub fn new(timeline: &IntroTimeline) -> Self {
        Self {
            elements: timeline.targets.iter().map(|t| Some(t.initial)).collect(),
            bursts: Vec::new(),
        }
    }

    pub fn element(&self, id: TargetId) -> Option<&ElementState> {
        self.elements.get(id.0).and_then(Option::as_ref)
    }

    pub(crate) fn element_mut(&mut self, id: TargetId) -> Option<&mut ElementState> {
        self.elements.get_mut(id.0).and_then(Option::as_mut)
    }

    pub fn is_attached(&self, id: TargetId) -> bool {
        self.element(id).is_some()
    }

    pub fn detach(&mut self, id: TargetId) {
        if let Some(slot) = self.elements.get_mut(id.0) {
            *slot = None;
        }
    }

    pub fn bursts(&self) -> &[BurstFrame] {
        &self.bursts
    }

    pub(crate) fn clear_bursts(&mut self) {
        self.bursts.clear();
    }

    pub(crate) fn push_burst(&mut self, frame: BurstFrame) {
        self.bursts.push(frame);
    }
}
