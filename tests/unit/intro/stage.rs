use super::*;

fn letter() -> TargetKind {
    TargetKind::Letter {
        path_d: "M0,0h10v10H0z".to_owned(),
        color: Rgba8::rgb(0, 0, 0),
    }
}

fn burst() -> BurstSpec {
    BurstSpec {
        offset: Vec2::new(-84.0, 0.0),
        radius: 46.0,
        spread_to: 110.0,
        count: 3,
        child_radii: vec![5.0, 3.0, 7.0],
        ring_ms: 166,
        burst_ms: 333,
        color: Rgba8::rgb(0xe7, 0x54, 0x80),
    }
}

#[test]
fn builder_sorts_and_puts_completion_last() {
    let mut b = TimelineBuilder::new(Vec2::new(100.0, 100.0));
    let a = b.target("a", letter(), ElementState::default());
    b.stage(Stage::new(500, a, Effect::set_opacity(0.0)).completing())
        .stage(Stage::new(500, a, Effect::set_opacity(0.5)))
        .stage(Stage::new(0, a, Effect::fade(0.0, 1.0, 500, Ease::Linear)));
    let t = b.build().unwrap();

    let starts: Vec<u64> = t.stages.iter().map(|s| s.start.0).collect();
    assert_eq!(starts, vec![0, 500, 500]);
    assert!(t.stages[2].completes);
    assert_eq!(t.total_duration(), Millis(500));
    assert_eq!(t.target_by_name("a"), Some(a));
    assert_eq!(t.target_by_name("missing"), None);
}

#[test]
fn timeline_without_completion_is_rejected() {
    let mut b = TimelineBuilder::new(Vec2::new(100.0, 100.0));
    let a = b.target("a", letter(), ElementState::default());
    b.stage(Stage::new(0, a, Effect::set_opacity(1.0)));
    let err = b.build().unwrap_err();
    assert!(matches!(err, KeepsakeError::Validation(_)));
}

#[test]
fn two_completing_stages_are_rejected() {
    let mut b = TimelineBuilder::new(Vec2::new(100.0, 100.0));
    let a = b.target("a", letter(), ElementState::default());
    b.stage(Stage::new(0, a, Effect::set_opacity(1.0)).completing())
        .stage(Stage::new(10, a, Effect::set_opacity(0.0)).completing());
    assert!(b.build().is_err());
}

#[test]
fn undeclared_target_is_rejected() {
    let t = IntroTimeline {
        canvas: Vec2::new(100.0, 100.0),
        targets: Vec::new(),
        stages: vec![Stage::new(0, TargetId(3), Effect::set_opacity(1.0)).completing()],
    };
    let err = t.validate().unwrap_err();
    assert!(err.to_string().contains("undeclared target 3"));
}

#[test]
fn stage_after_completion_is_rejected() {
    let t = IntroTimeline {
        canvas: Vec2::new(100.0, 100.0),
        targets: vec![TargetDecl {
            name: "a".to_owned(),
            kind: letter(),
            initial: ElementState::default(),
        }],
        stages: vec![
            Stage::new(0, TargetId(0), Effect::set_opacity(1.0)).completing(),
            Stage::new(10, TargetId(0), Effect::set_opacity(0.0)),
        ],
    };
    assert!(t.validate().is_err());
}

#[test]
fn burst_without_children_is_rejected() {
    let mut b = TimelineBuilder::new(Vec2::new(100.0, 100.0));
    let a = b.target("stage", TargetKind::Container, ElementState::default());
    let mut spec = burst();
    spec.child_radii.clear();
    b.stage(Stage::new(0, a, Effect::Burst(spec)).completing());
    assert!(b.build().is_err());
}

#[test]
fn effect_durations() {
    assert_eq!(Effect::fade(0.0, 1.0, 1000, Ease::InOutSine).duration(), Millis(1000));
    assert_eq!(Effect::set_opacity(0.0).duration(), Millis::ZERO);
    assert_eq!(Effect::Burst(burst()).duration(), Millis(333));
    let track = Keyframes::from_segments(
        0.0,
        vec![
            crate::animation::anim::Segment::to(1000, 34.0, Ease::InOutSine),
            crate::animation::anim::Segment::to(200, 53.0, Ease::InSine),
        ],
    );
    let e = Effect::Translate {
        axis: Axis::X,
        track,
    };
    assert_eq!(e.duration(), Millis(1200));
    assert_eq!(e.kind_name(), "translate");
}

#[test]
fn burst_starts_at_its_radius_and_fades_out() {
    let spec = burst();
    let center = Point::new(250.0, 100.0);

    let f0 = spec.sample(center, Millis::ZERO, 7);
    assert_eq!(f0.center, Point::new(166.0, 100.0));
    assert_eq!(f0.ring_radius, 46.0);
    assert_eq!(f0.ring_stroke, 5.0);
    assert_eq!(f0.children.len(), 3);
    for child in &f0.children {
        let d = (child.center - f0.center).hypot();
        assert!((d - 61.0).abs() < 1e-9, "{d}");
    }

    let end = spec.sample(center, Millis(333), 7);
    assert!((end.ring_radius - 66.0).abs() < 1e-9);
    assert!(end.ring_stroke.abs() < 1e-9);
    assert!(end.children.iter().all(|c| c.radius.abs() < 1e-9));
    for child in &end.children {
        let d = (child.center - end.center).hypot();
        assert!((d - 110.0).abs() < 1e-9, "{d}");
    }
}

#[test]
fn burst_spray_is_seeded() {
    let spec = burst();
    let c = Point::new(0.0, 0.0);
    assert_eq!(spec.sample(c, Millis(100), 1), spec.sample(c, Millis(100), 1));
    assert_ne!(spec.sample(c, Millis(100), 1), spec.sample(c, Millis(100), 2));
}

#[test]
fn cues_name_their_clips() {
    assert_eq!(AudioCue::Blop.clip(), "audio/blop.mp3");
    assert_eq!(AudioCue::Blup.clip(), "audio/blup.mp3");
}

#[test]
fn stage_json_is_tagged() {
    let s = Stage::new(1000, TargetId(1), Effect::set_opacity(0.0)).with_cue(AudioCue::Blop);
    let v = serde_json::to_value(&s).unwrap();
    assert_eq!(v["start"], 1000);
    assert_eq!(v["target"], 1);
    assert_eq!(v["effect"]["kind"], "fade");
    assert_eq!(v["cue"], "blop");
    assert!(v.get("completes").is_none());

    let back: Stage = serde_json::from_value(v).unwrap();
    assert_eq!(back, s);
}
