//! The shipped "I LOVE YOU" intro.
//!
//! Letters slide together while L, O, V, E, then Y and O, then I drop out, leaving the
//! U; a heart hops between the survivors and four bursts mark the drop-outs. The frame
//! lines slide in from both sides and snap back at the end.

use crate::{
    animation::{
        anim::{Keyframes, Segment},
        ease::Ease,
    },
    foundation::core::{Point, Rgba8, Vec2},
    foundation::error::KeepsakeResult,
    intro::stage::{
        AudioCue, Axis, BurstSpec, Effect, ElementState, IntroTimeline, Stage, TargetKind,
        TimelineBuilder,
    },
};

const MOVE: u64 = 1000;
const BOOM: u64 = 200;
const DELTA: u64 = 150;

/// Intro canvas, in SVG user units.
pub const INTRO_CANVAS: Vec2 = Vec2::new(500.0, 200.0);

const TEXT: Rgba8 = Rgba8::rgb(0xe7, 0x54, 0x80);
const HEART: Rgba8 = Rgba8::rgb(0xfa, 0x48, 0x43);
const LINE: Rgba8 = Rgba8::rgb(0xff, 0xb6, 0xc1);

pub const HEART_PATH: &str = "M50,88.9C25.5,78.2,0.5,54.4,3.8,31.1S41.3,1.8,50,29.9c8.7-28.2,42.8-22.2,46.2,1.2S74.5,78.2,50,88.9z";

const LETTERS: [(&str, &str); 8] = [
    ("I", "M42.2,73.9h11.4v52.1H42.2V73.9z"),
    ("L", "M85.1,73.9h11.4v42.1h22.8v10H85.1V73.9z"),
    (
        "O",
        "M123.9,100c0-15.2,11.7-26.9,27.2-26.9s27.2,11.7,27.2,26.9s-11.7,26.9-27.2,26.9S123.9,115.2,123.9,100zM166.9,100c0-9.2-6.8-16.5-15.8-16.5c-9,0-15.8,7.3-15.8,16.5s6.8,16.5,15.8,16.5C160.1,116.5,166.9,109.2,166.9,100z",
    ),
    (
        "V",
        "M180.7,73.9H193l8.4,22.9c1.7,4.7,3.5,9.5,5,14.2h0.1c1.7-4.8,3.4-9.4,5.2-14.3l8.6-22.8h11.7l-19.9,52.1h-11.5L180.7,73.9z",
    ),
    (
        "E",
        "M239.1,73.9h32.2v10h-20.7v10.2h17.9v9.5h-17.9v12.4H272v10h-33V73.9z",
    ),
    (
        "Y",
        "M315.8,102.5l-20.1-28.6H309l6.3,9.4c2,3,4.2,6.4,6.3,9.6h0.1c2-3.2,4.1-6.4,6.3-9.6l6.3-9.4h12.9l-19.9,28.5v23.6h-11.4V102.5z",
    ),
    (
        "O2",
        "M348.8,100c0-15.2,11.7-26.9,27.2-26.9c15.5,0,27.2,11.7,27.2,26.9s-11.7,26.9-27.2,26.9C360.5,126.9,348.8,115.2,348.8,100z M391.8,100c0-9.2-6.8-16.5-15.8-16.5c-9,0-15.8,7.3-15.8,16.5s6.8,16.5,15.8,16.5C385,116.5,391.8,109.2,391.8,100z",
    ),
    (
        "U",
        "M412.4,101.1V73.9h11.4v26.7c0,10.9,2.4,15.9,11.5,15.9c8.4,0,11.4-4.6,11.4-15.8V73.9h11v26.9c0,7.8-1.1,13.5-4,17.7c-3.7,5.3-10.4,8.4-18.7,8.4c-8.4,0-15.1-3.1-18.8-8.5C413.4,114.2,412.4,108.5,412.4,101.1z",
    ),
];

/// Horizontal slide of each letter.
fn letter_legs(name: &str) -> Vec<Segment<f64>> {
    let io = Ease::InOutSine;
    let boom = Ease::InSine;
    match name {
        "I" => vec![
            Segment::to(MOVE, 34.0, io),
            Segment::to(BOOM, 53.0, boom),
            Segment::to(MOVE, 93.0, io),
            Segment::to(BOOM, 123.0, boom),
            Segment::to(MOVE, 153.0, io),
        ],
        "L" => vec![Segment::to(MOVE, 15.0, io)],
        "O" => vec![Segment::to(MOVE, 11.0, io)],
        "V" => vec![Segment::to(MOVE, 3.0, io)],
        "E" => vec![Segment::to(MOVE, -3.0, io)],
        "Y" => vec![
            Segment::to(MOVE, -20.0, io),
            Segment::to(BOOM, -53.0, boom),
            Segment::to(MOVE, -77.0, io),
        ],
        "O2" => vec![
            Segment::to(MOVE, -27.0, io),
            Segment::to(BOOM, -54.0, boom),
            Segment::to(MOVE, -84.0, io),
        ],
        "U" => vec![
            Segment::to(MOVE, -32.0, io),
            Segment::to(BOOM, -53.0, boom),
            Segment::to(MOVE, -89.0, io),
            Segment::to(BOOM, -120.0, boom),
            Segment::to(MOVE, -147.0, io),
        ],
        _ => Vec::new(),
    }
}

/// Frame line legs; `sign` is +1 for the left line, -1 for the right one.
fn line_legs(sign: f64) -> Vec<Segment<f64>> {
    let io = Ease::InOutSine;
    vec![
        Segment::to(MOVE, sign * 52.0, io),
        Segment::to(BOOM + MOVE, sign * 106.0, io),
        Segment::to(BOOM + MOVE, sign * 166.0, io),
        Segment::to(150, sign * 176.0, io),
        Segment::hold(300),
        Segment::to(350, 0.0, Ease::OutSine),
    ]
}

/// Heart hop as parallel x and scale tracks, starting at x = -84, scale 0.
fn heart_legs() -> (Vec<Segment<f64>>, Vec<Segment<f64>>) {
    let io = Ease::InOutSine;
    let boom = Ease::InSine;
    let out = Ease::OutSine;
    let legs: [(u64, Option<f64>, f64, Ease); 11] = [
        (500, None, 0.95, Ease::HeartPop),
        (BOOM + MOVE - 500, Some(-82.0), 0.65, io),
        (BOOM - 50, Some(-14.0), 0.9, boom),
        (125, None, 0.8, out),
        (125, None, 0.85, out),
        (MOVE - 200 - 75, None, 0.45, io),
        (150, Some(20.0), 0.9, boom),
        (125, None, 0.8, out),
        (125, None, 0.85, out),
        (125, None, 0.85, Ease::Linear),
        (350, None, 0.0, out),
    ];
    let x = legs
        .iter()
        .map(|&(d, x, _, ease)| match x {
            Some(x) => Segment::to(d, x, ease),
            None => Segment::hold(d),
        })
        .collect();
    let scale = legs
        .iter()
        .map(|&(d, _, s, ease)| Segment::to(d, s, ease))
        .collect();
    (x, scale)
}

fn boom(x: f64, radius: f64) -> Effect {
    Effect::Burst(BurstSpec {
        offset: Vec2::new(x, 0.0),
        radius,
        spread_to: 110.0,
        count: 3,
        child_radii: vec![5.0, 3.0, 7.0],
        ring_ms: 500 / 3,
        burst_ms: 1000 / 3,
        color: TEXT,
    })
}

impl IntroTimeline {
    /// The shipped intro. Completes 3400 ms after start, when the U drops out.
    pub fn love() -> KeepsakeResult<IntroTimeline> {
        let mut b = TimelineBuilder::new(INTRO_CANVAS);
        let hidden = ElementState {
            opacity: 0.0,
            ..ElementState::default()
        };

        let letters: Vec<_> = LETTERS
            .iter()
            .map(|(name, d)| {
                let id = b.target(
                    name,
                    TargetKind::Letter {
                        path_d: (*d).to_owned(),
                        color: TEXT,
                    },
                    hidden,
                );
                (*name, id)
            })
            .collect();
        let line_left = b.target(
            "line-left",
            TargetKind::Line {
                from: Point::new(10.0, 17.0),
                to: Point::new(10.0, 183.0),
                color: LINE,
                width: 8.0,
            },
            ElementState::default(),
        );
        let line_right = b.target(
            "line-right",
            TargetKind::Line {
                from: Point::new(490.0, 17.0),
                to: Point::new(490.0, 183.0),
                color: LINE,
                width: 8.0,
            },
            ElementState::default(),
        );
        let heart = b.target(
            "heart",
            TargetKind::Shape {
                path_d: HEART_PATH.to_owned(),
                size: 100.0,
                color: HEART,
            },
            ElementState {
                opacity: 1.0,
                offset: Vec2::new(-84.0, 0.0),
                scale: 0.0,
            },
        );
        let stage = b.target("stage", TargetKind::Container, ElementState::default());

        let id = |name: &str| {
            letters
                .iter()
                .find(|(n, _)| *n == name)
                .map(|(_, id)| *id)
                .unwrap_or(stage)
        };

        // Reveal.
        for &(name, target) in &letters {
            b.stage(Stage::new(0, target, Effect::fade(0.0, 1.0, MOVE, Ease::InOutSine)));
            b.stage(Stage::new(
                0,
                target,
                Effect::Translate {
                    axis: Axis::X,
                    track: Keyframes::from_segments(0.0, letter_legs(name)),
                },
            ));
        }
        for (target, sign) in [(line_left, 1.0), (line_right, -1.0)] {
            b.stage(Stage::new(
                0,
                target,
                Effect::Translate {
                    axis: Axis::X,
                    track: Keyframes::from_segments(0.0, line_legs(sign)),
                },
            ));
        }

        let (heart_x, heart_scale) = heart_legs();
        b.stage(Stage::new(
            MOVE,
            heart,
            Effect::Translate {
                axis: Axis::X,
                track: Keyframes::from_segments(-84.0, heart_x),
            },
        ));
        b.stage(Stage::new(
            MOVE,
            heart,
            Effect::Scale {
                track: Keyframes::from_segments(0.0, heart_scale),
            },
        ));

        // Drop-outs.
        let first_out = MOVE;
        let second_out = MOVE * 2 + BOOM;
        let third_out = MOVE * 3 + BOOM * 2 - DELTA;
        let last_out = MOVE * 3 + BOOM * 2;

        b.stage(
            Stage::new(first_out, id("L"), Effect::set_opacity(0.0)).with_cue(AudioCue::Blop),
        );
        for name in ["O", "V", "E"] {
            b.stage(Stage::new(first_out, id(name), Effect::set_opacity(0.0)));
        }
        for name in ["Y", "O2"] {
            b.stage(Stage::new(second_out, id(name), Effect::set_opacity(0.0)));
        }
        b.stage(Stage::new(third_out, id("I"), Effect::set_opacity(0.0)));

        b.stage(Stage::new(first_out, stage, boom(-84.0, 46.0)));
        b.stage(Stage::new(second_out, stage, boom(38.0, 34.0)));
        b.stage(Stage::new(third_out, stage, boom(-84.0, 34.0)));
        b.stage(Stage::new(last_out, stage, boom(65.0, 34.0)));

        b.stage(
            Stage::new(last_out, id("U"), Effect::set_opacity(0.0))
                .with_cue(AudioCue::Blup)
                .completing(),
        );

        b.build()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/intro/love.rs"]
mod tests;
