use super::*;

fn node(left: f64, top: f64, w: f64, h: f64) -> LayoutNode {
    LayoutNode::from_rect(Rect::new(left, top, left + w, top + h), Point::ZERO)
}

#[test]
fn from_rect_is_relative_to_origin() {
    let n = LayoutNode::from_rect(
        Rect::new(110.0, 220.0, 210.0, 270.0),
        Point::new(10.0, 20.0),
    );
    assert_eq!(n.left, 100.0);
    assert_eq!(n.right, 200.0);
    assert_eq!(n.top, 200.0);
    assert_eq!(n.bottom, 250.0);
    assert_eq!(n.center_x, 150.0);
    assert_eq!(n.center_y, 225.0);
    assert_eq!(n.width, 100.0);
    assert_eq!(n.height, 50.0);
}

#[test]
fn same_row_connects_right_to_left() {
    let a = node(0.0, 0.0, 100.0, 400.0);
    let b = node(148.0, 10.0, 100.0, 400.0);
    let c = ConnectorPath::between(0, &a, &b, 20.0);
    assert_eq!(c.orientation, Orientation::Horizontal);
    assert_eq!(c.start, Point::new(100.0, 200.0));
    assert_eq!(c.control1, Point::new(120.0, 200.0));
    assert_eq!(c.control2, Point::new(128.0, 210.0));
    assert_eq!(c.end, Point::new(148.0, 210.0));
}

#[test]
fn next_row_connects_bottom_to_top() {
    let a = node(148.0, 0.0, 100.0, 400.0);
    let b = node(0.0, 448.0, 100.0, 400.0);
    let c = ConnectorPath::between(3, &a, &b, 20.0);
    assert_eq!(c.id, 3);
    assert_eq!(c.orientation, Orientation::Vertical);
    assert_eq!(c.start, Point::new(198.0, 400.0));
    assert_eq!(c.control1, Point::new(198.0, 420.0));
    assert_eq!(c.control2, Point::new(50.0, 428.0));
    assert_eq!(c.end, Point::new(50.0, 448.0));
}

#[test]
fn row_test_is_strictly_greater_than_half_height() {
    let a = node(0.0, 0.0, 10.0, 100.0);
    let exactly_half = node(20.0, 50.0, 10.0, 100.0);
    let past_half = node(20.0, 50.5, 10.0, 100.0);
    let above = node(20.0, -51.0, 10.0, 100.0);
    assert_eq!(
        ConnectorPath::between(0, &a, &exactly_half, 20.0).orientation,
        Orientation::Horizontal
    );
    assert_eq!(
        ConnectorPath::between(0, &a, &past_half, 20.0).orientation,
        Orientation::Vertical
    );
    assert_eq!(
        ConnectorPath::between(0, &a, &above, 20.0).orientation,
        Orientation::Vertical
    );
}

#[test]
fn control_points_sit_exactly_one_tangent_away() {
    let nodes: Vec<_> = (0..7)
        .map(|i| {
            let (row, col) = (i / 2, i % 2);
            node(
                f64::from(col) * 148.0,
                f64::from(row) * 448.0,
                100.0,
                400.0,
            )
        })
        .collect();
    let connectors = compute_connectors(&nodes, 20.0);
    assert_eq!(connectors.len(), 6);
    for c in &connectors {
        match c.orientation {
            Orientation::Vertical => {
                assert_eq!(c.control1 - c.start, crate::foundation::core::Vec2::new(0.0, 20.0));
                assert_eq!(c.end - c.control2, crate::foundation::core::Vec2::new(0.0, 20.0));
            }
            Orientation::Horizontal => {
                assert_eq!(c.control1 - c.start, crate::foundation::core::Vec2::new(20.0, 0.0));
                assert_eq!(c.end - c.control2, crate::foundation::core::Vec2::new(20.0, 0.0));
            }
        }
    }
    let kinds: Vec<_> = connectors.iter().map(|c| c.orientation).collect();
    assert_eq!(
        kinds,
        vec![
            Orientation::Horizontal,
            Orientation::Vertical,
            Orientation::Horizontal,
            Orientation::Vertical,
            Orientation::Horizontal,
            Orientation::Vertical,
        ]
    );
}

#[test]
fn fewer_than_two_nodes_yield_nothing() {
    assert!(compute_connectors(&[], 20.0).is_empty());
    assert!(compute_connectors(&[node(0.0, 0.0, 1.0, 1.0)], 20.0).is_empty());
}

#[test]
fn svg_and_bez_path_agree() {
    let a = node(0.0, 0.0, 100.0, 50.0);
    let b = node(150.0, 0.0, 100.0, 50.0);
    let c = ConnectorPath::between(0, &a, &b, 20.0);
    assert_eq!(c.svg_d(), "M100,25 C120,25 130,25 150,25");

    let els: Vec<_> = c.to_bez_path().elements().to_vec();
    assert_eq!(
        els,
        vec![
            kurbo::PathEl::MoveTo(c.start),
            kurbo::PathEl::CurveTo(c.control1, c.control2, c.end),
        ]
    );
}
