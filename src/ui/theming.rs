// SPDX-License-Identifier: MPL-2.0
//! Dark/light theme state with a persisted value and a ripple transition.
//!
//! The engine is the single holder of the site-wide theme. Consumers receive
//! it by reference from the page shell instead of reaching for a global.
//!
//! Toggling switches the theme, the root attribute and the stored value in
//! the same call. The ripple is purely cosmetic; a settle window (timer
//! based, never tied to the animation finishing) rejects toggles that arrive
//! while the previous transition is still running.

use crate::app::persisted_state::Storage;
use crate::config::{
    DEFAULT_RIPPLE_DURATION_MS, DEFAULT_RIPPLE_LIFETIME_MS, DEFAULT_RIPPLE_ORIGIN_OFFSET_Y,
    DEFAULT_THEME_SETTLE_MS,
};
use crate::geometry::Viewport;
use crate::timer::OneShot;
use crate::ui::ripple::RippleOverlay;
use iced_core::Point;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{Duration, Instant};

/// Storage key holding the theme.
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Parses a stored value. Only the exact strings `"dark"` and `"light"`
    /// are accepted.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Timings of one theme transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    ripple_duration: Duration,
    ripple_lifetime: Duration,
    settle: Duration,
    origin_offset_y: f32,
}

impl Timing {
    /// Builds timings, stretching the lifetime and the settle window so
    /// neither is shorter than the ripple animation.
    #[must_use]
    pub fn new(
        ripple_duration: Duration,
        ripple_lifetime: Duration,
        settle: Duration,
        origin_offset_y: f32,
    ) -> Self {
        let origin_offset_y = if origin_offset_y.is_finite() {
            origin_offset_y.max(0.0)
        } else {
            DEFAULT_RIPPLE_ORIGIN_OFFSET_Y
        };

        Self {
            ripple_duration,
            ripple_lifetime: ripple_lifetime.max(ripple_duration),
            settle: settle.max(ripple_duration),
            origin_offset_y,
        }
    }

    #[must_use]
    pub fn ripple_duration(&self) -> Duration {
        self.ripple_duration
    }

    #[must_use]
    pub fn ripple_lifetime(&self) -> Duration {
        self.ripple_lifetime
    }

    #[must_use]
    pub fn settle(&self) -> Duration {
        self.settle
    }

    #[must_use]
    pub fn origin_offset_y(&self) -> f32 {
        self.origin_offset_y
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self::new(
            Duration::from_millis(DEFAULT_RIPPLE_DURATION_MS),
            Duration::from_millis(DEFAULT_RIPPLE_LIFETIME_MS),
            Duration::from_millis(DEFAULT_THEME_SETTLE_MS),
            DEFAULT_RIPPLE_ORIGIN_OFFSET_Y,
        )
    }
}

/// Messages for the theme engine.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// Toggle button pressed. `origin` is the pointer position, if any.
    Toggle {
        origin: Option<Point>,
        viewport: Viewport,
        now: Instant,
    },
    Tick(Instant),
}

/// Effects produced by the theme engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The theme switched; the root attribute already reflects it.
    Changed(Theme),
    /// The ripple overlay was removed.
    OverlayRemoved,
}

/// Holder of the site-wide theme.
pub struct ThemeEngine {
    theme: Theme,
    root_attribute: Option<Theme>,
    storage: Box<dyn Storage>,
    timing: Timing,
    busy: OneShot,
    overlay: Option<RippleOverlay>,
}

impl fmt::Debug for ThemeEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeEngine")
            .field("theme", &self.theme)
            .field("root_attribute", &self.root_attribute)
            .field("timing", &self.timing)
            .field("busy", &self.busy)
            .field("overlay", &self.overlay)
            .finish_non_exhaustive()
    }
}

impl ThemeEngine {
    /// Creates an engine showing the default (dark) styling.
    ///
    /// Nothing is read until [`ThemeEngine::init`].
    #[must_use]
    pub fn new(storage: Box<dyn Storage>, timing: Timing) -> Self {
        Self {
            theme: Theme::default(),
            root_attribute: None,
            storage,
            timing,
            busy: OneShot::default(),
            overlay: None,
        }
    }

    /// Adopts the persisted theme, if valid, before anything is drawn.
    ///
    /// A missing, invalid or unreadable value leaves the default styling in
    /// place without touching the root attribute.
    pub fn init(&mut self) -> Theme {
        let stored = match self.storage.get(THEME_KEY) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(error = %err, "theme storage unavailable, using default");
                None
            }
        };

        match stored.as_deref().and_then(Theme::parse) {
            Some(theme) => {
                self.theme = theme;
                self.root_attribute = Some(theme);
                tracing::debug!(%theme, "restored persisted theme");
            }
            None => {
                if let Some(raw) = stored {
                    tracing::debug!(value = %raw, "ignoring invalid persisted theme");
                }
                self.theme = Theme::default();
            }
        }

        self.theme
    }

    /// Switches to the other theme unless a transition is still settling.
    ///
    /// Returns `true` if the theme changed. Without a pointer origin the
    /// ripple starts near the top centre of the viewport.
    pub fn toggle(&mut self, origin: Option<Point>, viewport: Viewport, now: Instant) -> bool {
        self.expire(now);

        if self.busy.is_armed() {
            tracing::debug!("theme toggle ignored while settling");
            return false;
        }

        let next = self.theme.other();
        let origin =
            origin.unwrap_or_else(|| viewport.top_center(self.timing.origin_offset_y()));
        self.overlay = Some(RippleOverlay::spawn(
            origin,
            viewport,
            next,
            &self.timing,
            now,
        ));

        self.theme = next;
        self.root_attribute = Some(next);
        if let Err(err) = self.storage.set(THEME_KEY, next.as_str()) {
            tracing::warn!(error = %err, "theme not persisted, keeping it for this session");
        }

        self.busy.arm(now, self.timing.settle());
        tracing::debug!(theme = %next, "theme toggled");
        true
    }

    /// Clears the settle window and removes an expired overlay.
    pub fn tick(&mut self, now: Instant) -> Effect {
        if self.expire(now) {
            Effect::OverlayRemoved
        } else {
            Effect::None
        }
    }

    /// Handle a theme message.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Toggle {
                origin,
                viewport,
                now,
            } => {
                if self.toggle(origin, viewport, now) {
                    Effect::Changed(self.theme)
                } else {
                    Effect::None
                }
            }
            Message::Tick(now) => self.tick(now),
        }
    }

    /// Drops the overlay and the settle window. Safe to call repeatedly.
    pub fn teardown(&mut self) {
        self.overlay = None;
        self.busy.cancel();
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Value of the root-level theme attribute, `None` until first written.
    #[must_use]
    pub fn root_attribute(&self) -> Option<&'static str> {
        self.root_attribute.map(Theme::as_str)
    }

    /// Whether a toggle at `now` would be rejected.
    #[must_use]
    pub fn is_busy(&self, now: Instant) -> bool {
        self.busy.due().is_some_and(|due| now < due)
    }

    #[must_use]
    pub fn overlay(&self) -> Option<&RippleOverlay> {
        self.overlay.as_ref()
    }

    #[must_use]
    pub fn timing(&self) -> &Timing {
        &self.timing
    }

    /// Returns `true` if the overlay was removed.
    fn expire(&mut self, now: Instant) -> bool {
        if self.busy.fire(now) {
            tracing::debug!("theme transition settled");
        }

        if self
            .overlay
            .as_ref()
            .is_some_and(|overlay| overlay.is_expired(now))
        {
            self.overlay = None;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::persisted_state::{DisabledStorage, MemoryStorage};
    use crate::error::Result;
    use crate::test_utils::{assert_abs_diff_eq, ms, Clock, F32_EPSILON};
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Memory storage whose contents stay inspectable after being boxed.
    #[derive(Clone, Default)]
    struct SharedStorage(Rc<RefCell<MemoryStorage>>);

    impl Storage for SharedStorage {
        fn get(&self, key: &str) -> Result<Option<String>> {
            self.0.borrow().get(key)
        }

        fn set(&mut self, key: &str, value: &str) -> Result<()> {
            self.0.borrow_mut().set(key, value)
        }
    }

    fn viewport() -> Viewport {
        Viewport::new(1280.0, 800.0)
    }

    fn engine_with(storage: impl Storage + 'static) -> ThemeEngine {
        ThemeEngine::new(Box::new(storage), Timing::default())
    }

    #[test]
    fn parse_accepts_only_exact_values() {
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse("light"), Some(Theme::Light));
        assert_eq!(Theme::parse("Light"), None);
        assert_eq!(Theme::parse(" dark"), None);
        assert_eq!(Theme::parse(""), None);
    }

    #[test]
    fn init_adopts_valid_stored_theme_and_writes_attribute() {
        let mut engine = engine_with(MemoryStorage::with_entry(THEME_KEY, "light"));
        assert_eq!(engine.root_attribute(), None);

        assert_eq!(engine.init(), Theme::Light);
        assert_eq!(engine.root_attribute(), Some("light"));
    }

    #[test]
    fn init_with_invalid_value_keeps_default_without_writing() {
        let mut engine = engine_with(MemoryStorage::with_entry(THEME_KEY, "sepia"));
        assert_eq!(engine.init(), Theme::Dark);
        assert_eq!(engine.root_attribute(), None);
    }

    #[test]
    fn init_with_disabled_storage_falls_back_to_dark() {
        let mut engine = engine_with(DisabledStorage);
        assert_eq!(engine.init(), Theme::Dark);
        assert_eq!(engine.root_attribute(), None);
    }

    #[test]
    fn toggle_switches_attribute_and_storage_synchronously() {
        let storage = SharedStorage::default();
        let mut engine = engine_with(storage.clone());
        let clock = Clock::new();
        engine.init();

        assert!(engine.toggle(None, viewport(), clock.now()));
        assert_eq!(engine.theme(), Theme::Light);
        assert_eq!(engine.root_attribute(), Some("light"));
        assert_eq!(
            storage.get(THEME_KEY).expect("memory get").as_deref(),
            Some("light")
        );
    }

    #[test]
    fn toggle_while_settling_is_ignored() {
        let mut engine = engine_with(MemoryStorage::new());
        let mut clock = Clock::new();

        assert!(engine.toggle(None, viewport(), clock.now()));
        assert!(!engine.toggle(None, viewport(), clock.advance(749)));
        assert_eq!(engine.theme(), Theme::Light);

        assert!(engine.toggle(None, viewport(), clock.advance(1)));
        assert_eq!(engine.theme(), Theme::Dark);
    }

    #[test]
    fn busy_window_clears_without_animation_events() {
        let mut engine = engine_with(MemoryStorage::new());
        let mut clock = Clock::new();

        engine.toggle(None, viewport(), clock.now());
        assert!(engine.is_busy(clock.now()));
        engine.tick(clock.advance(800));
        assert!(!engine.is_busy(clock.now()));
    }

    #[test]
    fn toggle_with_disabled_storage_still_switches() {
        let mut engine = engine_with(DisabledStorage);
        let clock = Clock::new();
        engine.init();

        assert!(engine.toggle(None, viewport(), clock.now()));
        assert_eq!(engine.theme(), Theme::Light);
        assert_eq!(engine.root_attribute(), Some("light"));
    }

    #[test]
    fn overlay_defaults_to_top_center_origin() {
        let mut engine = engine_with(MemoryStorage::new());
        let clock = Clock::new();
        engine.toggle(None, viewport(), clock.now());

        let origin = engine.overlay().expect("overlay spawned").origin();
        assert_abs_diff_eq!(origin.x, 640.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(origin.y, 80.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn overlay_uses_pointer_origin_and_removes_itself() {
        let mut engine = engine_with(MemoryStorage::new());
        let mut clock = Clock::new();
        let pointer = Point::new(1200.0, 30.0);
        engine.toggle(Some(pointer), viewport(), clock.now());

        assert_eq!(engine.overlay().map(RippleOverlay::origin), Some(pointer));
        assert_eq!(engine.tick(clock.advance(700)), Effect::None);
        assert_eq!(engine.tick(clock.advance(50)), Effect::OverlayRemoved);
        assert!(engine.overlay().is_none());
    }

    #[test]
    fn settle_is_never_shorter_than_ripple() {
        let timing = Timing::new(ms(700), ms(100), ms(200), 80.0);
        assert_eq!(timing.settle(), ms(700));
        assert_eq!(timing.ripple_lifetime(), ms(700));
    }

    #[test]
    fn handle_reports_changes() {
        let mut engine = engine_with(MemoryStorage::new());
        let clock = Clock::new();
        let toggle = Message::Toggle {
            origin: None,
            viewport: viewport(),
            now: clock.now(),
        };

        assert_eq!(engine.handle(toggle), Effect::Changed(Theme::Light));
        assert_eq!(engine.handle(toggle), Effect::None);
    }

    #[test]
    fn teardown_is_idempotent() {
        let mut engine = engine_with(MemoryStorage::new());
        let clock = Clock::new();
        engine.toggle(None, viewport(), clock.now());

        engine.teardown();
        engine.teardown();
        assert!(engine.overlay().is_none());
        assert!(!engine.is_busy(clock.now()));
        assert_eq!(engine.theme(), Theme::Light);
    }
}
