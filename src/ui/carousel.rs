// SPDX-License-Identifier: MPL-2.0
//! Autoplaying testimonial carousel.
//!
//! A circular index over a fixed list. Manual navigation restarts the
//! autoplay period so a user click never races the next scheduled advance.
//! While the user drags or holds the pointer down autoplay is suspended;
//! what happens on release is decided by [`ResumePolicy`].
//!
//! With fewer than two items navigation is disabled and no autoplay timer
//! exists at all.

use crate::timer::Repeating;
use crate::ui::state::AutoplayInterval;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// What autoplay does once a user interaction ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResumePolicy {
    /// Next advance one full interval after release.
    #[default]
    Immediate,
    /// Next advance after the given idle period.
    AfterIdle(Duration),
    /// Autoplay stays off for the rest of the carousel's life.
    Never,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub interval: AutoplayInterval,
    pub loop_enabled: bool,
    pub resume: ResumePolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            interval: AutoplayInterval::default(),
            loop_enabled: true,
            resume: ResumePolicy::default(),
        }
    }
}

/// One pagination dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dot {
    pub index: usize,
    pub active: bool,
}

#[derive(Debug, Clone, Copy)]
pub enum Message {
    Next { now: Instant },
    Prev { now: Instant },
    /// Pagination dot click. Out-of-range targets resolve like navigation.
    GoTo { index: isize, now: Instant },
    PointerDown,
    PointerUp { now: Instant },
    Tick(Instant),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The current index changed.
    Moved(usize),
}

#[derive(Debug, Clone)]
pub struct Carousel<T> {
    items: Vec<T>,
    current: usize,
    settings: Settings,
    autoplay: Option<Repeating>,
    interacting: bool,
}

impl<T> Carousel<T> {
    /// Creates the carousel at index 0, starting autoplay if there is
    /// anything to rotate through.
    #[must_use]
    pub fn new(items: Vec<T>, settings: Settings, now: Instant) -> Self {
        let autoplay = (items.len() > 1).then(|| {
            let mut timer = Repeating::new(settings.interval.as_duration());
            timer.start(now);
            timer
        });

        Self {
            items,
            current: 0,
            settings,
            autoplay,
            interacting: false,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current(&self) -> Option<&T> {
        self.items.get(self.current)
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Whether prev/next/autoplay apply at all.
    #[must_use]
    pub fn navigation_enabled(&self) -> bool {
        self.items.len() > 1
    }

    #[must_use]
    pub fn can_go_prev(&self) -> bool {
        self.navigation_enabled() && (self.settings.loop_enabled || self.current > 0)
    }

    #[must_use]
    pub fn can_go_next(&self) -> bool {
        self.navigation_enabled()
            && (self.settings.loop_enabled || self.current + 1 < self.items.len())
    }

    #[must_use]
    pub fn is_autoplaying(&self) -> bool {
        self.autoplay.is_some_and(|timer| timer.is_running())
    }

    #[must_use]
    pub fn is_interacting(&self) -> bool {
        self.interacting
    }

    /// Next scheduled autoplay advance.
    #[must_use]
    pub fn next_advance(&self) -> Option<Instant> {
        self.autoplay.and_then(|timer| timer.next_due())
    }

    /// One dot per item, exactly one of them active.
    #[must_use]
    pub fn pagination(&self) -> Vec<Dot> {
        (0..self.items.len())
            .map(|index| Dot {
                index,
                active: index == self.current,
            })
            .collect()
    }

    pub fn next(&mut self, now: Instant) -> Effect {
        if !self.navigation_enabled() {
            return Effect::None;
        }
        self.restart_autoplay(now);
        self.move_to(self.resolve(self.signed_current() + 1))
    }

    pub fn prev(&mut self, now: Instant) -> Effect {
        if !self.navigation_enabled() {
            return Effect::None;
        }
        self.restart_autoplay(now);
        self.move_to(self.resolve(self.signed_current() - 1))
    }

    /// Jumps to `index`, wrapping when looping and clamping otherwise.
    pub fn goto(&mut self, index: isize, now: Instant) -> Effect {
        if !self.navigation_enabled() {
            return Effect::None;
        }
        self.restart_autoplay(now);
        self.move_to(self.resolve(index))
    }

    /// Suspends autoplay while the user drags or presses.
    pub fn pointer_down(&mut self) {
        self.interacting = true;
    }

    /// Ends an interaction and applies the resume policy.
    pub fn pointer_up(&mut self, now: Instant) {
        if !self.interacting {
            return;
        }
        self.interacting = false;

        match self.settings.resume {
            ResumePolicy::Immediate => self.restart_autoplay(now),
            ResumePolicy::AfterIdle(idle) => {
                if let Some(timer) = self.autoplay.as_mut() {
                    timer.restart_at(now + idle);
                }
            }
            ResumePolicy::Never => {
                if self.autoplay.take().is_some() {
                    tracing::debug!("carousel autoplay stopped by interaction");
                }
            }
        }
    }

    /// Advances on schedule unless the user is interacting.
    ///
    /// Autoplay always moves forward; past the last item of a non-looping
    /// carousel it rewinds to the first.
    pub fn tick(&mut self, now: Instant) -> Effect {
        if self.interacting {
            return Effect::None;
        }
        let Some(timer) = self.autoplay.as_mut() else {
            return Effect::None;
        };
        if !timer.poll(now) {
            return Effect::None;
        }

        let target = if self.current + 1 < self.items.len() {
            self.current + 1
        } else {
            0
        };
        self.move_to(target)
    }

    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Next { now } => self.next(now),
            Message::Prev { now } => self.prev(now),
            Message::GoTo { index, now } => self.goto(index, now),
            Message::PointerDown => {
                self.pointer_down();
                Effect::None
            }
            Message::PointerUp { now } => {
                self.pointer_up(now);
                Effect::None
            }
            Message::Tick(now) => self.tick(now),
        }
    }

    /// Cancels autoplay. Safe to call repeatedly.
    pub fn teardown(&mut self) {
        self.autoplay = None;
        self.interacting = false;
    }

    fn signed_current(&self) -> isize {
        isize::try_from(self.current).unwrap_or(isize::MAX)
    }

    fn resolve(&self, index: isize) -> usize {
        let len = isize::try_from(self.items.len()).unwrap_or(isize::MAX);
        let resolved = if self.settings.loop_enabled {
            index.rem_euclid(len)
        } else {
            index.clamp(0, len - 1)
        };
        usize::try_from(resolved).unwrap_or_default()
    }

    fn restart_autoplay(&mut self, now: Instant) {
        if let Some(timer) = self.autoplay.as_mut() {
            timer.start(now);
        }
    }

    fn move_to(&mut self, index: usize) -> Effect {
        if index == self.current {
            return Effect::None;
        }
        self.current = index;
        tracing::debug!(index, "carousel moved");
        Effect::Moved(index)
    }
}

/// A client testimonial as supplied by the content collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub rating: Option<i64>,
    /// Tailwind gradient classes for the avatar.
    #[serde(default)]
    pub accent_color: Option<String>,
}

impl Testimonial {
    /// Avatar letters: first letter of up to two words, upper-cased.
    #[must_use]
    pub fn initials(&self) -> String {
        self.name
            .as_deref()
            .unwrap_or_default()
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }

    /// Filled stars, 1 to 5. Missing ratings show 5.
    #[must_use]
    pub fn stars(&self) -> u8 {
        let rating = self.rating.unwrap_or(5).clamp(1, 5);
        u8::try_from(rating).unwrap_or(5)
    }
}
