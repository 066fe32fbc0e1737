use super::*;
use std::collections::BTreeSet;

fn effect() -> CursorEffect {
    CursorEffect::mount(CursorConfig::default(), Viewport::default(), 77)
}

#[test]
fn starts_at_viewport_center() {
    let e = effect();
    assert_eq!(e.pointer(), Point::new(640.0, 400.0));
    assert_eq!(e.trail(), Point::new(640.0, 400.0));
    assert_eq!(e.tint(), Rgba8::rgb(0xff, 0x6b, 0x6b));
}

#[test]
fn first_move_always_spawns() {
    let mut e = effect();
    assert_eq!(e.pointer_move(Millis(5), Point::new(10.0, 10.0), None), Some(0));
    assert_eq!(e.pointer_move(Millis(30), Point::new(12.0, 10.0), None), None);
    assert_eq!(e.pointer_move(Millis(65), Point::new(14.0, 10.0), None), None);
    assert_eq!(e.pointer_move(Millis(66), Point::new(16.0, 10.0), None), Some(1));
    assert_eq!(e.pointer(), Point::new(16.0, 10.0));
}

#[test]
fn continuous_movement_is_throttled() {
    let mut e = effect();
    let mut spawned = 0;
    for ms in 0..600u64 {
        let pos = Point::new(ms as f64, 300.0);
        if e.pointer_move(Millis(ms), pos, None).is_some() {
            spawned += 1;
        }
    }
    assert!(spawned <= 10, "{spawned}");
    assert!(spawned >= 9, "{spawned}");
}

#[test]
fn particles_are_rolled_within_bounds() {
    let mut e = effect();
    for i in 0..50u64 {
        e.pointer_move(Millis(i * 100), Point::new(200.0, 200.0), None);
    }
    assert_eq!(e.particles().len(), 50);
    for p in e.particles() {
        assert!((p.origin.x - 200.0).abs() <= 10.0);
        assert!((p.origin.y - 200.0).abs() <= 10.0);
        assert!((16.0..28.0).contains(&p.size));
        assert!((1200..1800).contains(&p.lifetime.0));
        assert!((-20.0..20.0).contains(&p.drift_x));
    }
}

#[test]
fn particles_leave_within_their_lifetime_and_stay_gone() {
    let mut e = effect();
    e.pointer_move(Millis(0), Point::new(50.0, 50.0), None);
    let p = e.particles()[0];

    e.frame(Millis(1199));
    assert_eq!(e.particles().len(), 1);
    e.frame(Millis(p.deadline().0 - 1));
    assert_eq!(e.particles().len(), 1);
    e.frame(p.deadline());
    assert!(e.particles().is_empty());
    assert_eq!(e.pending_removals(), 0);

    e.frame(Millis(1800));
    e.pointer_move(Millis(5000), Point::new(50.0, 50.0), None);
    assert!(e.particles().iter().all(|q| q.id != p.id));
}

#[test]
fn ids_are_unique_among_live_particles() {
    let mut e = effect();
    for ms in (0..3000u64).step_by(7) {
        e.pointer_move(Millis(ms), Point::new(ms as f64, 0.0), None);
        e.frame(Millis(ms));
        let ids: BTreeSet<u64> = e.particles().iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), e.particles().len());
    }
}

#[test]
fn hovered_color_tints_new_particles() {
    let mut e = effect();
    e.pointer_move(Millis(0), Point::ZERO, Some("#e75480"));
    assert_eq!(e.tint(), Rgba8::rgb(0xe7, 0x54, 0x80));
    assert_eq!(e.particles()[0].color, Rgba8::rgb(0xe7, 0x54, 0x80));

    let f = e.snapshot(Millis(0));
    assert_eq!(f.glow, Rgba8::rgb(0xe7, 0x54, 0x80).with_alpha(0x22));
    assert_eq!(f.shadow.a, 0x88);

    e.pointer_move(Millis(10), Point::ZERO, Some("not a color"));
    assert_eq!(e.tint(), Rgba8::rgb(0xff, 0x6b, 0x6b));
    e.pointer_move(Millis(20), Point::ZERO, None);
    assert_eq!(e.tint(), Rgba8::rgb(0xff, 0x6b, 0x6b));
}

#[test]
fn trail_eases_toward_pointer() {
    let mut e = effect();
    e.pointer_move(Millis(0), Point::new(740.0, 400.0), None);
    e.frame(Millis(16));
    assert!((e.trail().x - 655.0).abs() < 1e-9);
    for i in 0..200 {
        e.frame(Millis(32 + i * 16));
    }
    assert!((e.trail().x - 740.0).abs() < 1e-6);
}

#[test]
fn unmount_clears_everything_and_ignores_events() {
    let mut e = effect();
    e.pointer_move(Millis(0), Point::new(1.0, 1.0), None);
    e.pointer_move(Millis(100), Point::new(2.0, 1.0), None);
    assert_eq!(e.pending_removals(), 2);

    e.unmount();
    assert!(!e.is_mounted());
    assert!(e.particles().is_empty());
    assert_eq!(e.pending_removals(), 0);
    assert_eq!(e.pointer_move(Millis(500), Point::new(3.0, 1.0), None), None);
    assert!(e.particles().is_empty());
    e.frame(Millis(600));
    assert_eq!(e.pointer(), Point::new(2.0, 1.0));
}

#[test]
fn same_seed_same_particles() {
    let run = || {
        let mut e = effect();
        for ms in (0..1000u64).step_by(61) {
            e.pointer_move(Millis(ms), Point::new(1.0, 2.0), None);
        }
        e.particles().to_vec()
    };
    assert_eq!(run(), run());
}
