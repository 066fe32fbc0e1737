use std::fmt::Write as _;

use crate::{
    card::{FrameSnapshot, IntroFrame, ScreenFrame},
    cursor::effect::CursorFrame,
    foundation::core::{Point, Rgba8, Viewport},
    intro::{love::HEART_PATH, stage::TargetKind},
    screen::{backdrop::HeartSprite, greeting::GreetingFrame, timeline::TimelineFrame},
};

/// Heart outline in a 24x24 box, used for the pointer and its bubbles.
pub const CURSOR_HEART_PATH: &str = "M12 21.35l-1.45-1.32C5.4 15.36 2 12.28 2 8.5 2 5.42 4.42 3 7.5 3c1.74 0 3.41 0.81 4.5 2.09C13.09 3.81 14.76 3 16.5 3 19.58 3 22 5.42 22 8.5c0 3.78-3.4 6.86-8.55 11.54L12 21.35z";

const BACKGROUND: Rgba8 = Rgba8::rgb(0xff, 0xf0, 0xf5);
const TEXT: Rgba8 = Rgba8::rgb(0xe7, 0x54, 0x80);
const ACCENT: Rgba8 = Rgba8::rgb(0xff, 0x6b, 0x6b);
const CONNECTOR: Rgba8 = Rgba8::rgb(0xff, 0x1a, 0x1a);
const CARD: Rgba8 = Rgba8::rgb(0xff, 0xff, 0xff);
const HEART_GLYPH_COLORS: [Rgba8; 3] = [
    Rgba8::rgb(0xff, 0x69, 0xb4),
    Rgba8::rgb(0xff, 0x85, 0xc2),
    Rgba8::rgb(0xff, 0x4d, 0x6d),
];
const FALLING_HEART_SIZE: f64 = 44.0;
const GREETING_CARD_MAX_W: f64 = 600.0;
const GREETING_CARD_H: f64 = 380.0;
const HEADER_H: f64 = 120.0;
const GRID_TOP: f64 = HEADER_H + 40.0;

/// Render a frame snapshot as a standalone SVG document the size of the viewport.
pub fn snapshot_svg(snap: &FrameSnapshot) -> String {
    let vp = snap.viewport;
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = num(vp.width),
        h = num(vp.height)
    );
    let (bg, _) = BACKGROUND.svg_fill();
    let _ = writeln!(out, r#"<rect width="100%" height="100%" fill="{bg}"/>"#);

    match &snap.scene {
        ScreenFrame::Intro(f) => intro(&mut out, f, vp),
        ScreenFrame::Greeting(f) => greeting(&mut out, f, vp),
        ScreenFrame::Timeline(f) => timeline(&mut out, f, vp),
    }
    cursor(&mut out, &snap.cursor);

    out.push_str("</svg>\n");
    out
}

fn intro(out: &mut String, f: &IntroFrame, vp: Viewport) {
    hearts(out, &f.hearts);

    let ox = (vp.width - f.canvas.x) / 2.0;
    let oy = (vp.height - f.canvas.y) / 2.0;
    let center = Point::new(f.canvas.x / 2.0, f.canvas.y / 2.0);
    let _ = writeln!(out, r#"<g transform="translate({},{})">"#, num(ox), num(oy));

    for el in &f.elements {
        let s = el.state;
        if s.opacity <= 0.0 {
            continue;
        }
        match &el.kind {
            TargetKind::Letter { path_d, color } => {
                let (fill, a) = color.svg_fill();
                let _ = writeln!(
                    out,
                    r#"<path d="{path_d}" fill="{fill}" fill-opacity="{}" transform="translate({},{})"/>"#,
                    num(a * s.opacity),
                    num(s.offset.x),
                    num(s.offset.y)
                );
            }
            TargetKind::Line {
                from,
                to,
                color,
                width,
            } => {
                let (stroke, a) = color.svg_fill();
                let _ = writeln!(
                    out,
                    r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{stroke}" stroke-opacity="{}" stroke-width="{}" stroke-linecap="round" transform="translate({},{})"/>"#,
                    num(from.x),
                    num(from.y),
                    num(to.x),
                    num(to.y),
                    num(a * s.opacity),
                    num(*width),
                    num(s.offset.x),
                    num(s.offset.y)
                );
            }
            TargetKind::Shape {
                path_d,
                size,
                color,
            } => {
                if s.scale <= 0.0 {
                    continue;
                }
                let (fill, a) = color.svg_fill();
                let _ = writeln!(
                    out,
                    r#"<path d="{path_d}" fill="{fill}" fill-opacity="{}" transform="translate({},{}) scale({}) translate({},{})"/>"#,
                    num(a * s.opacity),
                    num(center.x + s.offset.x),
                    num(center.y + s.offset.y),
                    num(s.scale),
                    num(-size / 2.0),
                    num(-size / 2.0)
                );
            }
            TargetKind::Container => {}
        }
    }

    for b in &f.bursts {
        let (color, a) = b.color.svg_fill();
        if b.ring_stroke > 0.0 {
            let _ = writeln!(
                out,
                r#"<circle cx="{}" cy="{}" r="{}" fill="none" stroke="{color}" stroke-opacity="{}" stroke-width="{}"/>"#,
                num(b.center.x),
                num(b.center.y),
                num(b.ring_radius),
                num(a),
                num(b.ring_stroke)
            );
        }
        for c in b.children.iter().filter(|c| c.radius > 0.0) {
            let _ = writeln!(
                out,
                r#"<circle cx="{}" cy="{}" r="{}" fill="{color}" fill-opacity="{}"/>"#,
                num(c.center.x),
                num(c.center.y),
                num(c.radius),
                num(a)
            );
        }
    }

    let (fill, _) = TEXT.svg_fill();
    let _ = writeln!(
        out,
        r#"<text x="{}" y="160" text-anchor="middle" font-size="24" font-weight="bold" fill="{fill}">{}</text>"#,
        num(center.x),
        escape(&f.name)
    );
    out.push_str("</g>\n");

    if f.awaiting_start {
        let _ = writeln!(
            out,
            r#"<text x="{}" y="{}" text-anchor="middle" font-size="40" fill="{fill}">Start</text>"#,
            num(vp.width / 2.0),
            num(oy + f.canvas.y + 80.0)
        );
    }
}

fn greeting(out: &mut String, f: &GreetingFrame, vp: Viewport) {
    hearts(out, &f.hearts);

    let w = GREETING_CARD_MAX_W.min(vp.width - 40.0).max(0.0);
    let h = GREETING_CARD_H;
    let cx = vp.width / 2.0;
    let cy = vp.height / 2.0;
    let (card, _) = CARD.svg_fill();
    let (text, _) = TEXT.svg_fill();
    let (accent, _) = ACCENT.svg_fill();

    let _ = writeln!(
        out,
        r#"<g opacity="{}" transform="translate({},{}) scale({})">"#,
        num(f.card_opacity),
        num(cx),
        num(cy),
        num(f.card_scale)
    );
    let _ = writeln!(
        out,
        r#"<rect x="{}" y="{}" width="{}" height="{}" rx="20" fill="{card}"/>"#,
        num(-w / 2.0),
        num(-h / 2.0),
        num(w),
        num(h)
    );
    let _ = writeln!(
        out,
        r#"<text x="0" y="{}" text-anchor="middle" font-size="36" fill="{text}" opacity="{}">{}</text>"#,
        num(-h / 2.0 + 80.0 + f.title_offset_y),
        num(f.title_opacity),
        escape(&f.title)
    );
    for (i, line) in wrap(&f.message, 56).iter().enumerate() {
        let _ = writeln!(
            out,
            r#"<text x="0" y="{}" text-anchor="middle" font-size="18" fill="{text}" opacity="{}">{}</text>"#,
            num(-h / 2.0 + 150.0 + 28.0 * i as f64 + f.message_offset_y),
            num(f.message_opacity),
            escape(line)
        );
    }
    let _ = writeln!(
        out,
        r#"<path d="{HEART_PATH}" fill="{accent}" transform="translate(-30,{}) scale(0.6)"/>"#,
        num(h / 2.0 - 90.0)
    );
    out.push_str("</g>\n");
}

fn timeline(out: &mut String, f: &TimelineFrame, vp: Viewport) {
    let (card, _) = CARD.svg_fill();
    let (text, _) = TEXT.svg_fill();
    let (accent, _) = ACCENT.svg_fill();
    let (line, _) = CONNECTOR.svg_fill();

    let gy = GRID_TOP - f.header.offset;
    let _ = writeln!(
        out,
        r#"<g transform="translate({},{})">"#,
        num(f.grid_origin_x),
        num(gy)
    );
    for c in &f.connectors {
        let _ = writeln!(
            out,
            r#"<path d="{}" fill="none" stroke="{line}" stroke-width="6" stroke-opacity="0.9"/>"#,
            c.d
        );
    }
    for c in &f.cards {
        let n = c.node;
        let _ = writeln!(
            out,
            r#"<g opacity="{}" transform="translate(0,{})">"#,
            num(c.opacity),
            num(c.offset_y)
        );
        let _ = writeln!(
            out,
            r#"<rect x="{}" y="{}" width="{}" height="{}" rx="20" fill="{card}"/>"#,
            num(n.left),
            num(n.top),
            num(n.width),
            num(n.height)
        );
        let _ = writeln!(
            out,
            r#"<text x="{}" y="{}" text-anchor="end" font-size="18" fill="{accent}">{}</text>"#,
            num(n.right - 16.0),
            num(n.top + 32.0),
            escape(&c.date)
        );
        let _ = writeln!(
            out,
            r#"<text x="{}" y="{}" text-anchor="middle" font-size="24" fill="{text}">{}</text>"#,
            num(n.center_x),
            num(n.bottom - 32.0),
            escape(&c.title)
        );
        out.push_str("</g>\n");
    }
    out.push_str("</g>\n");

    let h = &f.header;
    if h.sticky {
        let _ = writeln!(
            out,
            r#"<rect width="{}" height="{}" fill="{card}" fill-opacity="0.95"/>"#,
            num(vp.width),
            num(HEADER_H)
        );
    }
    let widths: Vec<f64> = h
        .labels
        .iter()
        .map(|l| 22.0 * l.text.chars().count() as f64 + 24.0)
        .collect();
    let mut x = (vp.width - widths.iter().sum::<f64>()) / 2.0;
    for (label, w) in h.labels.iter().zip(&widths) {
        let _ = writeln!(
            out,
            r#"<text x="{}" y="{}" text-anchor="middle" font-size="40" fill="{text}" opacity="{}">{}</text>"#,
            num(x + w / 2.0),
            num(HEADER_H / 2.0 + 14.0 + label.offset_y),
            num(label.opacity),
            escape(&label.text)
        );
        x += w;
    }
    if h.badge_opacity > 0.0 {
        let _ = writeln!(
            out,
            r#"<circle cx="{}" cy="{}" r="{}" fill="{accent}" opacity="{}"/>"#,
            num(vp.width / 2.0),
            num(HEADER_H / 2.0),
            num(30.0 * h.badge_scale),
            num(h.badge_opacity)
        );
    }
}

fn hearts(out: &mut String, sprites: &[HeartSprite]) {
    let scale = FALLING_HEART_SIZE / 100.0;
    for s in sprites {
        let color = HEART_GLYPH_COLORS[s.glyph % HEART_GLYPH_COLORS.len()];
        let (fill, _) = color.svg_fill();
        let _ = writeln!(
            out,
            r#"<path d="{HEART_PATH}" fill="{fill}" transform="translate({},{}) scale({})"/>"#,
            num(s.pos.x),
            num(s.pos.y),
            num(scale)
        );
    }
}

fn cursor(out: &mut String, f: &CursorFrame) {
    for p in &f.particles {
        if p.opacity <= 0.0 {
            continue;
        }
        let (fill, _) = p.color.svg_fill();
        let _ = writeln!(
            out,
            r#"<path d="{CURSOR_HEART_PATH}" fill="{fill}" fill-opacity="{}" transform="translate({},{}) scale({}) translate(-12,-12)"/>"#,
            num(p.opacity),
            num(p.center.x),
            num(p.center.y),
            num(p.size / 24.0 * p.scale)
        );
    }

    let (glow, glow_a) = f.glow.svg_fill();
    let _ = writeln!(
        out,
        r#"<circle cx="{}" cy="{}" r="18" fill="{glow}" fill-opacity="{}"/>"#,
        num(f.trail.x),
        num(f.trail.y),
        num(glow_a)
    );
    let (tint, _) = f.tint.svg_fill();
    let _ = writeln!(
        out,
        r#"<path d="{CURSOR_HEART_PATH}" fill="{tint}" transform="translate({},{}) translate(-12,-12)"/>"#,
        num(f.pointer.x),
        num(f.pointer.y)
    );
}

/// Short decimal form; SVG parsers choke on `NaN` and exponents are needlessly long.
fn num(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_owned();
    }
    let s = format!("{v:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_owned() } else { s.to_owned() }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

/// Greedy word wrap at `width` characters.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut cur = String::new();
    for word in text.split_whitespace() {
        if !cur.is_empty() && cur.chars().count() + 1 + word.chars().count() > width {
            lines.push(std::mem::take(&mut cur));
        }
        if !cur.is_empty() {
            cur.push(' ');
        }
        cur.push_str(word);
    }
    if !cur.is_empty() {
        lines.push(cur);
    }
    lines
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
