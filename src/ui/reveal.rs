// SPDX-License-Identifier: MPL-2.0
//! Scroll-triggered, one-shot entrance animations.
//!
//! Elements are registered in groups. When an element first becomes visible
//! enough it is marked fired and its entrance is scheduled with a delay of
//! `index * stagger` inside its group. The engine never animates anything
//! itself; [`RevealEngine::tick`] hands out [`RevealStart`]s whose delay has
//! elapsed and the renderer plays them.
//!
//! Without visibility observation everything is shown at once instead of
//! staying hidden forever.

use crate::config::DEFAULT_REVEAL_STAGGER_MS;
use crate::easing::{ease, Easing};
use crate::geometry::visible_fraction;
use crate::ui::state::Threshold;
use iced_core::Rectangle;
use std::time::{Duration, Instant};

/// Identifies one animatable element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u64);

/// Identifies one registration group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegistrationHandle(u64);

/// Activation options of a registration group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealOptions {
    pub threshold: Threshold,
    /// Delay added per position in the group.
    pub stagger: Duration,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: Threshold::default(),
            stagger: Duration::from_millis(DEFAULT_REVEAL_STAGGER_MS),
        }
    }
}

/// Presentation of an entrance: where the element starts and how it moves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntrancePreset {
    /// Initial downward offset in pixels.
    pub rise: f32,
    /// Initial scale.
    pub scale: f32,
    /// Initial rotation around the horizontal axis, in degrees.
    pub tilt: f32,
    pub duration: Duration,
    pub easing: Easing,
    /// Delay before the first element of a group starts.
    pub delay: Duration,
    /// Delay between consecutive elements when replayed with [`RevealEngine::play`].
    pub stagger: Duration,
}

impl EntrancePreset {
    /// Badge, title and subtitle of a section heading.
    pub const HEADING: Self = Self {
        rise: 40.0,
        scale: 1.0,
        tilt: 0.0,
        duration: Duration::from_millis(800),
        easing: Easing::PowerOut,
        delay: Duration::ZERO,
        stagger: Duration::from_millis(150),
    };

    pub const SECTION: Self = Self {
        rise: 60.0,
        scale: 1.0,
        tilt: 0.0,
        duration: Duration::from_millis(1_000),
        easing: Easing::PowerOut,
        delay: Duration::ZERO,
        stagger: Duration::ZERO,
    };

    /// Gallery cards, replayed on every filter change.
    pub const CARD: Self = Self {
        rise: 60.0,
        scale: 0.9,
        tilt: -15.0,
        duration: Duration::from_millis(800),
        easing: Easing::BackOut,
        delay: Duration::from_millis(200),
        stagger: Duration::from_millis(100),
    };

    /// Gallery filter tabs.
    pub const TABS: Self = Self {
        rise: 20.0,
        scale: 0.9,
        tilt: 0.0,
        duration: Duration::from_millis(600),
        easing: Easing::BackOut,
        delay: Duration::from_millis(300),
        stagger: Duration::from_millis(100),
    };

    /// Pose `elapsed` after the entrance started.
    #[must_use]
    pub fn pose(&self, elapsed: Duration) -> Pose {
        let progress = if self.duration.is_zero() {
            1.0
        } else {
            elapsed.as_secs_f32() / self.duration.as_secs_f32()
        };
        let eased = ease(self.easing, progress);
        let remaining = 1.0 - eased;

        Pose {
            opacity: eased.clamp(0.0, 1.0),
            offset_y: self.rise * remaining,
            scale: 1.0 - (1.0 - self.scale) * remaining,
            tilt: self.tilt * remaining,
        }
    }
}

/// Animated values of one element at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub opacity: f32,
    pub offset_y: f32,
    pub scale: f32,
    pub tilt: f32,
}

/// Whether the environment can report element visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ObservationSupport {
    #[default]
    Available,
    Unavailable,
}

/// One visibility notification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    pub element: ElementId,
    pub is_intersecting: bool,
    /// Visible fraction of the element.
    pub ratio: f32,
}

impl Intersection {
    /// Derives the notification from layout.
    #[must_use]
    pub fn from_layout(element: ElementId, bounds: Rectangle, viewport: Rectangle) -> Self {
        let ratio = visible_fraction(bounds, viewport);
        Self {
            element,
            is_intersecting: ratio > 0.0,
            ratio,
        }
    }
}

/// An entrance the renderer should play now.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RevealStart {
    Animate {
        element: ElementId,
        preset: EntrancePreset,
    },
    /// Show in the final pose without animating.
    Immediate { element: ElementId },
}

impl RevealStart {
    #[must_use]
    pub fn element(&self) -> ElementId {
        match self {
            RevealStart::Animate { element, .. } | RevealStart::Immediate { element } => *element,
        }
    }
}

#[derive(Debug, Clone)]
struct RevealableElement {
    element: ElementId,
    fired: bool,
}

#[derive(Debug, Clone)]
struct Group {
    handle: RegistrationHandle,
    threshold: Threshold,
    stagger: Duration,
    preset: EntrancePreset,
    elements: Vec<RevealableElement>,
}

#[derive(Debug, Clone, Copy)]
struct Scheduled {
    due: Instant,
    seq: u64,
    group: RegistrationHandle,
    element: ElementId,
    preset: EntrancePreset,
}

/// Messages for the reveal engine.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    Observed { entry: Intersection, now: Instant },
    Tick(Instant),
}

/// Effects produced by the reveal engine.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Start(Vec<RevealStart>),
}

/// Owner of every reveal registration on a page.
#[derive(Debug, Default)]
pub struct RevealEngine {
    support: ObservationSupport,
    groups: Vec<Group>,
    scheduled: Vec<Scheduled>,
    /// Immediate starts waiting for the next tick, by group.
    ready: Vec<(RegistrationHandle, ElementId)>,
    next_handle: u64,
    next_seq: u64,
}

impl RevealEngine {
    #[must_use]
    pub fn new(support: ObservationSupport) -> Self {
        Self {
            support,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn support(&self) -> ObservationSupport {
        self.support
    }

    /// Starts observing `elements` as one group.
    ///
    /// Without observation support every element is fired right away and
    /// shown without animation on the next tick.
    pub fn register(
        &mut self,
        elements: &[ElementId],
        options: RevealOptions,
        preset: EntrancePreset,
    ) -> RegistrationHandle {
        let handle = self.allocate_handle();
        let unavailable = self.support == ObservationSupport::Unavailable;

        self.groups.push(Group {
            handle,
            threshold: options.threshold,
            stagger: options.stagger,
            preset,
            elements: elements
                .iter()
                .map(|&element| RevealableElement {
                    element,
                    fired: unavailable,
                })
                .collect(),
        });

        if unavailable {
            self.ready
                .extend(elements.iter().map(|&element| (handle, element)));
        }

        tracing::debug!(?handle, count = elements.len(), "reveal group registered");
        handle
    }

    /// Replays an entrance for `elements` right away, in order.
    ///
    /// Used when content is swapped in place (e.g. a gallery filter change):
    /// the new elements are visible already so there is nothing to wait for.
    pub fn play(
        &mut self,
        elements: &[ElementId],
        preset: EntrancePreset,
        now: Instant,
    ) -> RegistrationHandle {
        let handle = self.allocate_handle();

        self.groups.push(Group {
            handle,
            threshold: Threshold::new(0.0),
            stagger: preset.stagger,
            preset,
            elements: elements
                .iter()
                .map(|&element| RevealableElement {
                    element,
                    fired: true,
                })
                .collect(),
        });

        if self.support == ObservationSupport::Unavailable {
            self.ready
                .extend(elements.iter().map(|&element| (handle, element)));
        } else {
            for (index, &element) in elements.iter().enumerate() {
                let due = now + stagger_delay(preset.delay, preset.stagger, index);
                self.schedule(handle, element, preset, due);
            }
        }

        handle
    }

    /// Feeds one visibility notification.
    ///
    /// Returns `true` if this notification fired at least one element.
    pub fn observe(&mut self, entry: Intersection, now: Instant) -> bool {
        if !entry.is_intersecting {
            return false;
        }

        let mut starts = Vec::new();
        for group in &mut self.groups {
            if !group.threshold.is_met_by(entry.ratio) {
                continue;
            }

            for (index, descriptor) in group.elements.iter_mut().enumerate() {
                if descriptor.element != entry.element || descriptor.fired {
                    continue;
                }
                // Flag first so a bouncing scroll can never schedule twice.
                descriptor.fired = true;
                let due = now + stagger_delay(group.preset.delay, group.stagger, index);
                starts.push((group.handle, group.preset, due));
            }
        }

        let fired = !starts.is_empty();
        for (handle, preset, due) in starts {
            self.schedule(handle, entry.element, preset, due);
        }
        fired
    }

    /// Returns the entrances due at `now`, earliest first.
    pub fn tick(&mut self, now: Instant) -> Vec<RevealStart> {
        let mut starts: Vec<RevealStart> = self
            .ready
            .drain(..)
            .map(|(_, element)| RevealStart::Immediate { element })
            .collect();

        let (mut due, waiting): (Vec<_>, Vec<_>) = self
            .scheduled
            .drain(..)
            .partition(|scheduled| scheduled.due <= now);
        self.scheduled = waiting;

        due.sort_by_key(|scheduled| (scheduled.due, scheduled.seq));
        starts.extend(due.into_iter().map(|scheduled| RevealStart::Animate {
            element: scheduled.element,
            preset: scheduled.preset,
        }));
        starts
    }

    /// Handle a reveal message.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Observed { entry, now } => {
                self.observe(entry, now);
                Effect::None
            }
            Message::Tick(now) => {
                let starts = self.tick(now);
                if starts.is_empty() {
                    Effect::None
                } else {
                    Effect::Start(starts)
                }
            }
        }
    }

    /// Stops observing a group and drops its pending entrances.
    ///
    /// Unknown or already released handles are ignored.
    pub fn unregister(&mut self, handle: RegistrationHandle) {
        let before = self.groups.len();
        self.groups.retain(|group| group.handle != handle);
        self.scheduled.retain(|scheduled| scheduled.group != handle);
        self.ready.retain(|&(group, _)| group != handle);

        if self.groups.len() != before {
            tracing::debug!(?handle, "reveal group unregistered");
        }
    }

    /// Releases every group. Safe to call repeatedly.
    pub fn teardown(&mut self) {
        self.groups.clear();
        self.scheduled.clear();
        self.ready.clear();
    }

    /// Whether `element` has fired in any group.
    #[must_use]
    pub fn is_fired(&self, element: ElementId) -> bool {
        self.groups
            .iter()
            .flat_map(|group| &group.elements)
            .any(|descriptor| descriptor.element == element && descriptor.fired)
    }

    /// Number of entrances waiting for their delay.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.scheduled.len() + self.ready.len()
    }

    #[must_use]
    pub fn is_registered(&self, handle: RegistrationHandle) -> bool {
        self.groups.iter().any(|group| group.handle == handle)
    }

    fn allocate_handle(&mut self) -> RegistrationHandle {
        self.next_handle += 1;
        RegistrationHandle(self.next_handle)
    }

    fn schedule(
        &mut self,
        group: RegistrationHandle,
        element: ElementId,
        preset: EntrancePreset,
        due: Instant,
    ) {
        self.next_seq += 1;
        self.scheduled.push(Scheduled {
            due,
            seq: self.next_seq,
            group,
            element,
            preset,
        });
    }
}

fn stagger_delay(base: Duration, stagger: Duration, index: usize) -> Duration {
    base + stagger * u32::try_from(index).unwrap_or(u32::MAX)
}
