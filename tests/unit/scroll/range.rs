use super::*;

#[test]
fn ascending_range_interpolates_and_clamps() {
    let r = ScrollRange::linear([50.0, 150.0], [1.0, 0.0]);
    assert_eq!(r.map(0.0), 1.0);
    assert_eq!(r.map(50.0), 1.0);
    assert_eq!(r.map(100.0), 0.5);
    assert_eq!(r.map(150.0), 0.0);
    assert_eq!(r.map(1000.0), 0.0);
}

#[test]
fn descending_input_runs_against_scroll() {
    let r = ScrollRange::linear([250.0, 150.0], [0.0, 1.0]);
    assert_eq!(r.map(300.0), 0.0);
    assert_eq!(r.map(250.0), 0.0);
    assert_eq!(r.map(200.0), 0.5);
    assert_eq!(r.map(150.0), 1.0);
    assert_eq!(r.map(0.0), 1.0);
}

#[test]
fn degenerate_range_is_a_step() {
    let r = ScrollRange::linear([100.0, 100.0], [0.0, 1.0]);
    assert_eq!(r.map(99.0), 0.0);
    assert_eq!(r.map(100.0), 1.0);
}

#[test]
fn eased_range_keeps_endpoints() {
    let r = ScrollRange::linear([0.0, 100.0], [0.5, 1.0]).with_ease(Ease::OutCubic);
    assert_eq!(r.map(0.0), 0.5);
    assert_eq!(r.map(100.0), 1.0);
    assert!(r.map(50.0) > 0.75);
}

#[test]
fn threshold_is_inclusive_for_forward() {
    let d = DirectionalRange {
        forward: ScrollRange::linear([0.0, 100.0], [1.0, 0.0]),
        reverse: ScrollRange::linear([250.0, 150.0], [0.0, 1.0]),
    };
    assert_eq!(DirectionalRange::direction(150.0, 150.0), Direction::Forward);
    assert_eq!(DirectionalRange::direction(150.0, 150.5), Direction::Reverse);
    assert_eq!(d.map(150.0, 150.0), 0.0);
    assert_eq!(d.map(150.0, 151.0), 0.99);
}

#[test]
fn every_offset_matches_the_selected_range() {
    let d = DirectionalRange {
        forward: ScrollRange::linear([50.0, 150.0], [1.0, 0.0]),
        reverse: ScrollRange::linear([200.0, 100.0], [0.0, 1.0]),
    };
    for step in 0..=400 {
        let s = f64::from(step);
        let expected = if s > 150.0 {
            ((200.0 - s) / 100.0).clamp(0.0, 1.0)
        } else {
            1.0 - ((s - 50.0) / 100.0).clamp(0.0, 1.0)
        };
        assert!((d.map(150.0, s) - expected).abs() < 1e-12, "offset {s}");
    }
}
