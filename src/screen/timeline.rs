use crate::{
    animation::{anim::Tween, ease::Ease},
    config::{CardConfig, ConnectorConfig, Story},
    foundation::core::{Millis, Viewport},
    foundation::error::KeepsakeResult,
    layout::{
        connector::{ConnectorPath, LayoutNode, compute_connectors},
        grid::{GridFrame, GridLayout},
    },
    scroll::mapper::{HeaderFrame, ScrollMapper},
};

const CARD_ENTER_MS: u64 = 500;
const CARD_RISE: f64 = 20.0;

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct StoryCardFrame {
    pub id: u32,
    pub image: String,
    pub title: String,
    pub date: String,
    pub node: LayoutNode,
    pub opacity: f64,
    pub offset_y: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ConnectorFrame {
    #[serde(flatten)]
    pub path: ConnectorPath,
    pub d: String,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TimelineFrame {
    pub header: HeaderFrame,
    pub badge_image: String,
    /// Left edge of the grid; card and connector coordinates are relative to it.
    pub grid_origin_x: f64,
    pub grid_width: f64,
    pub grid_height: f64,
    pub cards: Vec<StoryCardFrame>,
    pub connectors: Vec<ConnectorFrame>,
}

/// The scrollable photo timeline.
///
/// Connectors are cached and only recomputed when the grid changes: on resize and when the
/// story list is replaced. Scrolling touches the header only.
#[derive(Clone, Debug)]
pub struct TimelineScreen {
    mounted_at: Millis,
    viewport: Viewport,
    stories: Vec<Story>,
    badge_image: String,
    grid: GridLayout,
    connector: ConnectorConfig,
    frame: GridFrame,
    connectors: Vec<ConnectorPath>,
    mapper: ScrollMapper,
    offset: f64,
    card_opacity: Tween,
    card_rise: Tween,
}

impl TimelineScreen {
    #[tracing::instrument(level = "debug", skip(cfg), fields(stories = cfg.stories.len()))]
    pub fn mount(now: Millis, cfg: &CardConfig, viewport: Viewport) -> KeepsakeResult<Self> {
        let grid = GridLayout::new(cfg.grid)?;
        let mut screen = Self {
            mounted_at: now,
            viewport,
            stories: cfg.stories.clone(),
            badge_image: cfg.badge_image.clone(),
            grid,
            connector: cfg.connector,
            frame: grid.layout(viewport.width, 0),
            connectors: Vec::new(),
            mapper: ScrollMapper::cascade(&cfg.header_labels, &cfg.scroll),
            offset: 0.0,
            card_opacity: Tween::new(0, CARD_ENTER_MS, 0.0, 1.0, Ease::OutCubic),
            card_rise: Tween::new(0, CARD_ENTER_MS, CARD_RISE, 0.0, Ease::OutCubic),
        };
        screen.relayout();
        Ok(screen)
    }

    pub fn stories(&self) -> &[Story] {
        &self.stories
    }

    pub fn nodes(&self) -> &[LayoutNode] {
        &self.frame.nodes
    }

    pub fn connectors(&self) -> &[ConnectorPath] {
        &self.connectors
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn scroll(&mut self, offset: f64) {
        self.offset = offset;
    }

    pub fn resize(&mut self, viewport: Viewport) {
        if viewport == self.viewport {
            return;
        }
        self.viewport = viewport;
        self.relayout();
    }

    pub fn set_stories(&mut self, stories: Vec<Story>) {
        self.stories = stories;
        self.relayout();
    }

    fn relayout(&mut self) {
        self.frame = self.grid.layout(self.viewport.width, self.stories.len());
        self.connectors = compute_connectors(&self.frame.nodes, self.connector.tangent);
        tracing::debug!(
            width = self.viewport.width,
            cards = self.frame.nodes.len(),
            connectors = self.connectors.len(),
            "timeline relayout"
        );
    }

    pub fn header(&self) -> HeaderFrame {
        self.mapper.map(self.offset)
    }

    pub fn snapshot(&self, now: Millis) -> TimelineFrame {
        let t = now.saturating_sub(self.mounted_at);
        let opacity = self.card_opacity.sample(t);
        let offset_y = self.card_rise.sample(t);
        let cards = self
            .stories
            .iter()
            .zip(&self.frame.nodes)
            .map(|(story, node)| StoryCardFrame {
                id: story.id,
                image: story.image.clone(),
                title: story.title.clone(),
                date: story.date.clone(),
                node: *node,
                opacity,
                offset_y,
            })
            .collect();
        let connectors = self
            .connectors
            .iter()
            .map(|c| ConnectorFrame {
                path: *c,
                d: c.svg_d(),
            })
            .collect();

        TimelineFrame {
            header: self.header(),
            badge_image: self.badge_image.clone(),
            grid_origin_x: self.frame.origin_x,
            grid_width: self.frame.width,
            grid_height: self.frame.height,
            cards,
            connectors,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/screen/timeline.rs"]
mod tests;
