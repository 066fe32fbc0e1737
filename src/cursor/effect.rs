use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::{
    config::CursorConfig,
    cursor::particle::{Particle, ParticleSample},
    foundation::core::{Millis, Point, Rgba8, Vec2, Viewport},
    foundation::math::Rng64,
};

/// Alpha of the soft glow that trails the pointer.
const GLOW_ALPHA: u8 = 0x22;
/// Alpha of the drop shadow under the heart pointer.
const SHADOW_ALPHA: u8 = 0x88;

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct CursorFrame {
    pub pointer: Point,
    pub trail: Point,
    pub tint: Rgba8,
    pub glow: Rgba8,
    pub shadow: Rgba8,
    pub particles: Vec<ParticleSample>,
}

/// Heart pointer with an eased trailing glow and a stream of short-lived bubbles.
///
/// Lives for the whole session. Each spawned particle gets a removal deadline pushed onto a
/// min-heap; [`CursorEffect::frame`] pops everything that expired. After
/// [`CursorEffect::unmount`] all events are ignored.
#[derive(Clone, Debug)]
pub struct CursorEffect {
    cfg: CursorConfig,
    pointer: Point,
    trail: Point,
    tint: Rgba8,
    particles: Vec<Particle>,
    removals: BinaryHeap<Reverse<(Millis, u64)>>,
    next_id: u64,
    last_spawn: Option<Millis>,
    rng: Rng64,
    mounted: bool,
}

impl CursorEffect {
    pub fn mount(cfg: CursorConfig, viewport: Viewport, seed: u64) -> Self {
        let center = viewport.center();
        Self {
            cfg,
            pointer: center,
            trail: center,
            tint: cfg.default_color,
            particles: Vec::new(),
            removals: BinaryHeap::new(),
            next_id: 0,
            last_spawn: None,
            rng: Rng64::new(seed),
            mounted: true,
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn pointer(&self) -> Point {
        self.pointer
    }

    pub fn trail(&self) -> Point {
        self.trail
    }

    pub fn tint(&self) -> Rgba8 {
        self.tint
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn pending_removals(&self) -> usize {
        self.removals.len()
    }

    /// Move the pointer. `hovered_color` is the color attribute of the element under it,
    /// if any. Returns the id of the particle spawned by this move.
    pub fn pointer_move(
        &mut self,
        now: Millis,
        pos: Point,
        hovered_color: Option<&str>,
    ) -> Option<u64> {
        if !self.mounted {
            return None;
        }
        self.pointer = pos;
        self.tint = hovered_color
            .and_then(|c| Rgba8::parse_hex(c).ok())
            .unwrap_or(self.cfg.default_color);

        let due = match self.last_spawn {
            None => true,
            Some(last) => now.saturating_sub(last).0 > self.cfg.spawn_interval_ms,
        };
        if !due {
            return None;
        }
        self.last_spawn = Some(now);
        Some(self.spawn(now, pos))
    }

    fn spawn(&mut self, now: Millis, pos: Point) -> u64 {
        let c = self.cfg;
        let jitter = Vec2::new(
            self.rng.range_f64(-c.jitter, c.jitter),
            self.rng.range_f64(-c.jitter, c.jitter),
        );
        let lifetime = self
            .rng
            .range_f64(c.lifetime_min_ms as f64, c.lifetime_max_ms as f64) as u64;
        let particle = Particle {
            id: self.next_id,
            origin: pos + jitter,
            size: self.rng.range_f64(c.size_min, c.size_max),
            lifetime: Millis(lifetime),
            drift_x: self.rng.range_f64(-c.drift, c.drift),
            color: self.tint,
            born_at: now,
        };
        self.next_id += 1;
        self.removals.push(Reverse((particle.deadline(), particle.id)));
        tracing::trace!(id = particle.id, lifetime, "cursor particle spawned");
        self.particles.push(particle);
        particle.id
    }

    /// Advance the trailing anchor one step and drop expired particles.
    pub fn frame(&mut self, now: Millis) {
        if !self.mounted {
            return;
        }
        self.trail = self.trail.lerp(self.pointer, self.cfg.smoothing);

        let mut expired = Vec::new();
        while let Some(Reverse((deadline, id))) = self.removals.peek().copied() {
            if deadline > now {
                break;
            }
            self.removals.pop();
            expired.push(id);
        }
        if !expired.is_empty() {
            self.particles.retain(|p| !expired.contains(&p.id));
        }
    }

    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        tracing::debug!(
            particles = self.particles.len(),
            timers = self.removals.len(),
            "cursor unmounted"
        );
        self.particles.clear();
        self.removals.clear();
        self.mounted = false;
    }

    pub fn snapshot(&self, now: Millis) -> CursorFrame {
        CursorFrame {
            pointer: self.pointer,
            trail: self.trail,
            tint: self.tint,
            glow: self.tint.with_alpha(GLOW_ALPHA),
            shadow: self.tint.with_alpha(SHADOW_ALPHA),
            particles: self
                .particles
                .iter()
                .map(|p| p.sample(now, &self.cfg))
                .collect(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/cursor/effect.rs"]
mod tests;
