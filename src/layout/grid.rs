use crate::{
    config::GridConfig,
    foundation::error::{KeepsakeError, KeepsakeResult},
    layout::connector::LayoutNode,
};

/// Column grid used for the story cards.
///
/// The grid is centered in the viewport, capped at `max_width`, with `padding_x` kept on
/// both sides. Nodes are reported relative to the grid's own origin, which is also the
/// coordinate space connectors are drawn in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLayout {
    cfg: GridConfig,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct GridFrame {
    /// Left edge of the grid within the viewport.
    pub origin_x: f64,
    pub width: f64,
    pub height: f64,
    pub nodes: Vec<LayoutNode>,
}

impl GridLayout {
    pub fn new(cfg: GridConfig) -> KeepsakeResult<Self> {
        if cfg.columns == 0 {
            return Err(KeepsakeError::layout("grid needs at least one column"));
        }
        Ok(Self { cfg })
    }

    pub fn layout(&self, viewport_width: f64, count: usize) -> GridFrame {
        let cols = usize::try_from(self.cfg.columns.max(1)).unwrap_or(1);
        let avail = (viewport_width - 2.0 * self.cfg.padding_x).max(0.0);
        let width = avail.min(self.cfg.max_width);
        let origin_x = self.cfg.padding_x + (avail - width) / 2.0;

        let gaps = (cols.saturating_sub(1) as f64) * self.cfg.gap;
        let cell_w = ((width - gaps) / cols as f64).max(0.0);
        let cell_h = self.cfg.card_height;

        let mut nodes = Vec::with_capacity(count);
        for idx in 0..count {
            let row = idx / cols;
            let col = idx % cols;
            let left = (col as f64) * (cell_w + self.cfg.gap);
            let top = (row as f64) * (cell_h + self.cfg.gap);
            nodes.push(LayoutNode {
                left,
                right: left + cell_w,
                top,
                bottom: top + cell_h,
                center_x: left + cell_w / 2.0,
                center_y: top + cell_h / 2.0,
                width: cell_w,
                height: cell_h,
            });
        }

        let rows = count.div_ceil(cols);
        let height = if rows == 0 {
            0.0
        } else {
            (rows as f64) * cell_h + ((rows - 1) as f64) * self.cfg.gap
        };

        GridFrame {
            origin_x,
            width,
            height,
            nodes,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/grid.rs"]
mod tests;
