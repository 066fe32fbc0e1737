use super::*;

fn card() -> Card {
    Card::new(CardConfig::default()).unwrap()
}

fn tick(ms: u64) -> HostEvent {
    HostEvent::Tick { now: Millis(ms) }
}

#[test]
fn intro_waits_for_start() {
    let mut c = card();
    assert!(c.handle(tick(10_000)).unwrap().is_empty());
    assert_eq!(c.screen(), Screen::Intro);
    let ScreenFrame::Intro(f) = c.snapshot(Millis(10_000)).scene else {
        panic!("expected intro");
    };
    assert!(f.awaiting_start);
    assert_eq!(f.hearts.len(), 20);
    assert_eq!(f.name, "Hong Ngat");
}

#[test]
fn intro_completion_mounts_greeting_in_the_same_tick() {
    let mut c = card();
    c.handle(HostEvent::StartPressed { now: Millis(100) }).unwrap();

    let out = c.handle(tick(1100)).unwrap();
    assert_eq!(
        out,
        vec![CardOutput::PlayCue {
            cue: AudioCue::Blop,
            clip: "audio/blop.mp3",
            volume: 0.2,
        }]
    );

    assert!(c.handle(tick(3499)).unwrap().is_empty());
    assert_eq!(c.screen(), Screen::Intro);

    let out = c.handle(tick(3500)).unwrap();
    assert_eq!(
        out,
        vec![
            CardOutput::PlayCue {
                cue: AudioCue::Blup,
                clip: "audio/blup.mp3",
                volume: 0.2,
            },
            CardOutput::ScreenChanged {
                screen: Screen::Greeting,
            },
        ]
    );
    assert_eq!(c.screen(), Screen::Greeting);
    assert!(c.intro().is_none());
    assert!(c.handle(tick(9000)).unwrap().is_empty());
}

#[test]
fn heart_press_only_works_on_the_greeting() {
    let mut c = card();
    assert!(c.handle(HostEvent::HeartPressed { now: Millis(0) }).unwrap().is_empty());
    assert_eq!(c.screen(), Screen::Intro);

    c.handle(HostEvent::StartPressed { now: Millis(0) }).unwrap();
    c.handle(tick(3400)).unwrap();
    let out = c.handle(HostEvent::HeartPressed { now: Millis(4000) }).unwrap();
    assert_eq!(
        out,
        vec![CardOutput::ScreenChanged {
            screen: Screen::Timeline,
        }]
    );
    assert!(c.timeline().is_some());

    let again = c.handle(HostEvent::HeartPressed { now: Millis(4100) }).unwrap();
    assert!(again.is_empty());
    assert_eq!(c.sequencer().history().len(), 2);
}

#[test]
fn scroll_and_resize_reach_the_timeline() {
    let mut c = card();
    c.replay([
        HostEvent::StartPressed { now: Millis(0) },
        tick(3400),
        HostEvent::HeartPressed { now: Millis(4000) },
        HostEvent::Scroll { offset: 250.0 },
        HostEvent::Resize {
            width: 700.0,
            height: 900.0,
        },
    ])
    .unwrap();

    let t = c.timeline().unwrap();
    assert_eq!(t.offset(), 250.0);
    assert_eq!(t.viewport().width, 700.0);

    let snap = c.snapshot(Millis(5000));
    assert_eq!(snap.viewport.height, 900.0);
    let ScreenFrame::Timeline(f) = snap.scene else {
        panic!("expected timeline");
    };
    assert!(f.header.labels.iter().all(|l| l.opacity == 0.0));
}

#[test]
fn scroll_before_the_timeline_is_ignored() {
    let mut c = card();
    assert!(c.handle(HostEvent::Scroll { offset: 400.0 }).unwrap().is_empty());
    assert!(c.timeline().is_none());
}

#[test]
fn pointer_moves_feed_the_cursor_on_every_screen() {
    let mut c = card();
    c.handle(HostEvent::PointerMove {
        now: Millis(0),
        pos: Point::new(5.0, 6.0),
        hovered_color: Some("#123456".to_owned()),
    })
    .unwrap();
    assert_eq!(c.cursor().pointer(), Point::new(5.0, 6.0));
    assert_eq!(c.cursor().particles().len(), 1);
    let snap = c.snapshot(Millis(0));
    assert_eq!(snap.cursor.tint.to_hex(), "#123456");
}

#[test]
fn unmount_stops_intro_and_cursor() {
    let mut c = card();
    c.handle(HostEvent::StartPressed { now: Millis(0) }).unwrap();
    c.handle(HostEvent::PointerMove {
        now: Millis(0),
        pos: Point::ZERO,
        hovered_color: None,
    })
    .unwrap();
    c.unmount();
    assert!(c.handle(tick(5000)).unwrap().is_empty());
    assert_eq!(c.screen(), Screen::Intro);
    assert!(c.cursor().particles().is_empty());
}

#[test]
fn host_events_read_from_json() {
    let events: Vec<HostEvent> = serde_json::from_str(
        r##"[
            {"event": "start_pressed", "now": 0},
            {"event": "pointer_move", "now": 5, "pos": {"x": 1.0, "y": 2.0}},
            {"event": "pointer_move", "now": 9, "pos": {"x": 1.0, "y": 2.0}, "hovered_color": "#ff0000"},
            {"event": "tick", "now": 16},
            {"event": "scroll", "offset": 12.5},
            {"event": "resize", "width": 800, "height": 600}
        ]"##,
    )
    .unwrap();
    assert_eq!(events.len(), 6);
    assert_eq!(events[0].time(), Some(Millis(0)));
    assert_eq!(events[4].time(), None);
    assert!(matches!(
        &events[2],
        HostEvent::PointerMove { hovered_color: Some(c), .. } if c == "#ff0000"
    ));
}

#[test]
fn snapshot_serializes_with_screen_tag() {
    let c = card();
    let v = serde_json::to_value(c.snapshot(Millis(0))).unwrap();
    assert_eq!(v["scene"]["screen"], "intro");
    assert_eq!(v["scene"]["phase"]["phase"], "idle");
    assert_eq!(v["cursor"]["tint"], "#ff6b6b");
}

#[test]
fn invalid_config_is_rejected() {
    let mut cfg = CardConfig::default();
    cfg.audio.volume = 3.0;
    assert!(Card::new(cfg).is_err());
}

#[test]
fn timeline_mounts_at_the_latest_viewport() {
    let mut c = card();
    c.replay([
        HostEvent::StartPressed { now: Millis(0) },
        tick(3400),
        HostEvent::Resize {
            width: 600.0,
            height: 900.0,
        },
        HostEvent::HeartPressed { now: Millis(4000) },
    ])
    .unwrap();

    let t = c.timeline().unwrap();
    assert_eq!(t.viewport().width, 600.0);
    assert_eq!(t.nodes()[0].right, 244.0);
    assert_eq!(t.connectors()[0].start.x, 244.0);

    let ScreenFrame::Timeline(f) = c.snapshot(Millis(4000)).scene else {
        panic!("expected timeline");
    };
    assert_eq!(f.grid_width, 536.0);
}

#[test]
fn unusable_resizes_are_ignored() {
    let mut c = card();
    c.replay([
        HostEvent::StartPressed { now: Millis(0) },
        tick(3400),
        HostEvent::HeartPressed { now: Millis(4000) },
        HostEvent::Resize {
            width: 700.0,
            height: 900.0,
        },
    ])
    .unwrap();
    let before = c.timeline().unwrap().connectors().to_vec();

    let bad = [
        (f64::NAN, 900.0),
        (0.0, 900.0),
        (700.0, -1.0),
        (f64::INFINITY, 1.0),
    ];
    for (width, height) in bad {
        assert!(c.handle(HostEvent::Resize { width, height }).unwrap().is_empty());
    }

    let t = c.timeline().unwrap();
    assert_eq!(t.viewport().width, 700.0);
    assert_eq!(t.connectors(), before.as_slice());
    assert_eq!(c.snapshot(Millis(5000)).viewport.height, 900.0);
}
