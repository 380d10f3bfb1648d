// SPDX-License-Identifier: MPL-2.0
//! Twinkling stars around the hero portrait.
//!
//! A star pops up on one of a fixed set of anchors every 100 to 400 ms and
//! disappears 1.5 s after it was spawned. Four warm-up stars are spaced
//! 200 ms apart right after [`Sparkles::start`] so the portrait is never bare.
//!
//! Randomness comes from an injected [`Rng`], which keeps tests seedable.

use crate::timer::OneShot;
use rand::Rng;
use std::time::{Duration, Instant};

/// How long one star stays on screen.
pub const LIFETIME: Duration = Duration::from_millis(1_500);

const MIN_INTERVAL_MS: u64 = 100;
const MAX_INTERVAL_MS: u64 = 400;
const WARMUP_STARS: usize = 4;
const WARMUP_STEP_MS: u64 = 200;

/// Number of star artworks; variants are numbered from 1.
pub const VARIANTS: u8 = 4;

/// Horizontal attachment of an anchor, as a percentage of the portrait frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Edge {
    Left(f32),
    Right(f32),
}

/// Where a star may appear: `top` is a percentage of the frame height and
/// `size` is in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub top: f32,
    pub edge: Edge,
    pub size: f32,
}

#[rustfmt::skip]
pub const ANCHORS: [Anchor; 10] = [
    Anchor { top: -10.0, edge: Edge::Left(20.0), size: 16.0 },
    Anchor { top: 0.0, edge: Edge::Right(-5.0), size: 20.0 },
    Anchor { top: 30.0, edge: Edge::Right(-15.0), size: 14.0 },
    Anchor { top: 60.0, edge: Edge::Right(-10.0), size: 18.0 },
    Anchor { top: 80.0, edge: Edge::Left(30.0), size: 12.0 },
    Anchor { top: 70.0, edge: Edge::Left(-10.0), size: 16.0 },
    Anchor { top: 40.0, edge: Edge::Left(-15.0), size: 20.0 },
    Anchor { top: 10.0, edge: Edge::Left(-5.0), size: 14.0 },
    Anchor { top: 50.0, edge: Edge::Right(0.0), size: 22.0 },
    Anchor { top: -5.0, edge: Edge::Left(50.0), size: 18.0 },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Star {
    pub id: u64,
    /// Index into [`ANCHORS`].
    pub slot: usize,
    /// Artwork number, `1..=VARIANTS`.
    pub variant: u8,
}

impl Star {
    #[must_use]
    pub fn anchor(&self) -> Anchor {
        ANCHORS[self.slot]
    }
}

/// Stars that appeared and disappeared during one tick.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Effect {
    pub added: Vec<Star>,
    pub removed: Vec<u64>,
}

impl Effect {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

#[derive(Debug)]
pub struct Sparkles<R> {
    rng: R,
    /// Live stars with their expiry, in spawn order.
    stars: Vec<(Star, Instant)>,
    warmup: [OneShot; WARMUP_STARS],
    spawner: OneShot,
    next_id: u64,
}

impl<R: Rng> Sparkles<R> {
    #[must_use]
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            stars: Vec::new(),
            warmup: [OneShot::default(); WARMUP_STARS],
            spawner: OneShot::default(),
            next_id: 0,
        }
    }

    /// Schedules the warm-up stars and the first random spawn.
    pub fn start(&mut self, now: Instant) {
        for (step, timer) in (0..).zip(self.warmup.iter_mut()) {
            timer.arm(now, Duration::from_millis(step * WARMUP_STEP_MS));
        }
        let delay = self.next_interval();
        self.spawner.arm(now, delay);
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.spawner.is_armed()
    }

    /// When the next random spawn is due.
    #[must_use]
    pub fn next_spawn(&self) -> Option<Instant> {
        self.spawner.due()
    }

    pub fn stars(&self) -> impl Iterator<Item = &Star> {
        self.stars.iter().map(|(star, _)| star)
    }

    /// Expires old stars, then spawns the ones that are due. A late tick
    /// spawns at most one random star and reschedules from `now`.
    pub fn tick(&mut self, now: Instant) -> Effect {
        let mut effect = Effect::default();

        self.stars.retain(|&(star, expires)| {
            let alive = expires > now;
            if !alive {
                effect.removed.push(star.id);
            }
            alive
        });

        for index in 0..self.warmup.len() {
            if self.warmup[index].fire(now) {
                effect.added.push(self.spawn(now));
            }
        }

        if self.spawner.fire(now) {
            effect.added.push(self.spawn(now));
            let delay = self.next_interval();
            self.spawner.arm(now, delay);
        }

        effect
    }

    /// Cancels every pending spawn and clears the stars. Safe to call repeatedly.
    pub fn teardown(&mut self) {
        for timer in &mut self.warmup {
            timer.cancel();
        }
        self.spawner.cancel();
        self.stars.clear();
    }

    fn spawn(&mut self, now: Instant) -> Star {
        let star = Star {
            id: self.next_id,
            slot: self.rng.random_range(0..ANCHORS.len()),
            variant: self.rng.random_range(1..=VARIANTS),
        };
        self.next_id += 1;
        self.stars.push((star, now + LIFETIME));
        tracing::trace!(id = star.id, slot = star.slot, "sparkle spawned");
        star
    }

    fn next_interval(&mut self) -> Duration {
        Duration::from_millis(self.rng.random_range(MIN_INTERVAL_MS..MAX_INTERVAL_MS))
    }
}
