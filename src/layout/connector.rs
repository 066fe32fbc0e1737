use crate::foundation::core::{BezPath, Point, Rect};

/// Snapshot of one card's box, relative to the grid origin.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayoutNode {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
    pub center_x: f64,
    pub center_y: f64,
    pub width: f64,
    pub height: f64,
}

impl LayoutNode {
    /// Snapshot `rect` (in any coordinate space) relative to `origin` in the same space.
    pub fn from_rect(rect: Rect, origin: Point) -> Self {
        let r = rect.abs();
        let left = r.x0 - origin.x;
        let top = r.y0 - origin.y;
        let width = r.width();
        let height = r.height();
        Self {
            left,
            right: left + width,
            top,
            bottom: top + height,
            center_x: left + width / 2.0,
            center_y: top + height / 2.0,
            width,
            height,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.left, self.top, self.right, self.bottom)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Orientation {
    /// Next card sits on a following row: bottom-center to top-center.
    Vertical,
    /// Next card sits on the same row: right-center to left-center.
    Horizontal,
}

/// Cubic curve joining two consecutive cards.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ConnectorPath {
    pub id: usize,
    pub orientation: Orientation,
    pub start: Point,
    pub control1: Point,
    pub control2: Point,
    pub end: Point,
}

impl ConnectorPath {
    /// Connector from `a` to `b`.
    ///
    /// The pair counts as being on different rows when their tops differ by more than
    /// half of `a`'s height.
    pub fn between(id: usize, a: &LayoutNode, b: &LayoutNode, tangent: f64) -> Self {
        let next_row = (b.top - a.top).abs() > a.height / 2.0;
        if next_row {
            Self {
                id,
                orientation: Orientation::Vertical,
                start: Point::new(a.center_x, a.bottom),
                control1: Point::new(a.center_x, a.bottom + tangent),
                control2: Point::new(b.center_x, b.top - tangent),
                end: Point::new(b.center_x, b.top),
            }
        } else {
            Self {
                id,
                orientation: Orientation::Horizontal,
                start: Point::new(a.right, a.center_y),
                control1: Point::new(a.right + tangent, a.center_y),
                control2: Point::new(b.left - tangent, b.center_y),
                end: Point::new(b.left, b.center_y),
            }
        }
    }

    pub fn to_bez_path(&self) -> BezPath {
        let mut path = BezPath::new();
        path.move_to(self.start);
        path.curve_to(self.control1, self.control2, self.end);
        path
    }

    /// SVG path data, `M{start} C{control1} {control2} {end}`.
    pub fn svg_d(&self) -> String {
        format!(
            "M{},{} C{},{} {},{} {},{}",
            self.start.x,
            self.start.y,
            self.control1.x,
            self.control1.y,
            self.control2.x,
            self.control2.y,
            self.end.x,
            self.end.y
        )
    }
}

/// One connector per consecutive pair of nodes, in document order.
#[tracing::instrument(level = "debug", skip(nodes), fields(nodes = nodes.len()))]
pub fn compute_connectors(nodes: &[LayoutNode], tangent: f64) -> Vec<ConnectorPath> {
    nodes
        .windows(2)
        .enumerate()
        .map(|(i, pair)| ConnectorPath::between(i, &pair[0], &pair[1], tangent))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/layout/connector.rs"]
mod tests;
