use super::*;
use crate::{
    card::{Card, HostEvent},
    config::CardConfig,
    foundation::core::Millis,
};

fn parses(svg: &str) {
    usvg::Tree::from_data(svg.as_bytes(), &usvg::Options::default()).unwrap();
}

fn card_at_timeline() -> Card {
    let mut c = Card::new(CardConfig::default()).unwrap();
    c.replay([
        HostEvent::StartPressed { now: Millis(0) },
        HostEvent::Tick { now: Millis(3400) },
        HostEvent::HeartPressed { now: Millis(4000) },
    ])
    .unwrap();
    c
}

#[test]
fn intro_svg_shows_letters_and_start_prompt() {
    let c = Card::new(CardConfig::default()).unwrap();
    let svg = snapshot_svg(&c.snapshot(Millis(0)));
    assert!(svg.starts_with("<svg"));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert!(svg.contains(">Start</text>"));
    assert!(svg.contains(">Hong Ngat</text>"));
    // Letters start transparent and are skipped.
    assert!(!svg.contains("M42.2,73.9"));
    parses(&svg);
}

#[test]
fn running_intro_draws_letters_and_bursts() {
    let mut c = Card::new(CardConfig::default()).unwrap();
    c.handle(HostEvent::StartPressed { now: Millis(0) }).unwrap();
    c.handle(HostEvent::Tick { now: Millis(1100) }).unwrap();
    let svg = snapshot_svg(&c.snapshot(Millis(1100)));
    assert!(svg.contains("M42.2,73.9"));
    assert!(svg.contains(r#"fill="none" stroke="rgb(231,84,128)""#));
    assert!(!svg.contains(">Start</text>"));
    parses(&svg);
}

#[test]
fn timeline_svg_has_cards_and_connectors() {
    let c = card_at_timeline();
    let svg = snapshot_svg(&c.snapshot(Millis(5000)));
    assert!(svg.contains(">Radiant Beauty</text>"));
    assert_eq!(svg.matches(r#"stroke-width="6""#).count(), 7);
    parses(&svg);
}

#[test]
fn greeting_text_is_escaped_and_wrapped() {
    let mut cfg = CardConfig::default();
    cfg.greeting.title = "You & <me>".to_owned();
    let mut c = Card::new(cfg).unwrap();
    c.replay([
        HostEvent::StartPressed { now: Millis(0) },
        HostEvent::Tick { now: Millis(3400) },
    ])
    .unwrap();
    let svg = snapshot_svg(&c.snapshot(Millis(4400)));
    assert!(svg.contains("You &amp; &lt;me&gt;"));
    parses(&svg);
}

#[test]
fn numbers_are_short() {
    assert_eq!(num(1280.0), "1280");
    assert_eq!(num(0.5), "0.5");
    assert_eq!(num(-0.0001), "0");
    assert_eq!(num(f64::NAN), "0");
    assert_eq!(num(2.0 / 3.0), "0.667");
}

#[test]
fn wrap_keeps_words_whole() {
    let lines = wrap("aaa bbb ccc ddd", 7);
    assert_eq!(lines, vec!["aaa bbb", "ccc ddd"]);
    assert!(wrap("", 10).is_empty());
}
