// SPDX-License-Identifier: MPL-2.0
//! Transient radial overlay that masks an instantaneous theme switch.
//!
//! The overlay is a circle centred on the toggle origin, large enough to cover
//! the whole viewport from there. It starts at zero scale and full opacity
//! and grows to full scale while fading out. The overlay removes itself once
//! its lifetime has elapsed; the owner asks [`RippleOverlay::is_expired`].

use crate::config::RIPPLE_COVERAGE_FACTOR;
use crate::easing::{ease, Easing};
use crate::geometry::Viewport;
use crate::ui::design_tokens::{opacity, palette, stops};
use crate::ui::theming::{Theme, Timing};
use iced_core::{Color, Point, Rectangle, Size};
use std::time::{Duration, Instant};

/// One stop of the radial gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    /// Position along the radius, `0.0` at the centre.
    pub offset: f32,
    pub color: Color,
}

/// Animated values at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub scale: f32,
    pub opacity: f32,
}

/// A ripple spawned by one theme toggle.
#[derive(Debug, Clone, PartialEq)]
pub struct RippleOverlay {
    origin: Point,
    diameter: f32,
    stops: [GradientStop; 3],
    started: Instant,
    duration: Duration,
    lifetime: Duration,
}

impl RippleOverlay {
    /// Creates the overlay for a switch towards `next`.
    #[must_use]
    pub fn spawn(
        origin: Point,
        viewport: Viewport,
        next: Theme,
        timing: &Timing,
        now: Instant,
    ) -> Self {
        let diameter = viewport.farthest_corner_distance(origin) * RIPPLE_COVERAGE_FACTOR;

        Self {
            origin,
            diameter,
            stops: gradient_for(next),
            started: now,
            duration: timing.ripple_duration(),
            lifetime: timing.ripple_lifetime(),
        }
    }

    #[must_use]
    pub fn origin(&self) -> Point {
        self.origin
    }

    #[must_use]
    pub fn diameter(&self) -> f32 {
        self.diameter
    }

    /// Square the overlay occupies at full scale, centred on the origin.
    #[must_use]
    pub fn bounds(&self) -> Rectangle {
        let half = self.diameter / 2.0;
        Rectangle::new(
            Point::new(self.origin.x - half, self.origin.y - half),
            Size::new(self.diameter, self.diameter),
        )
    }

    #[must_use]
    pub fn stops(&self) -> &[GradientStop; 3] {
        &self.stops
    }

    /// Scale and opacity at `now` on the standard curve.
    #[must_use]
    pub fn sample(&self, now: Instant) -> Frame {
        let elapsed = now.saturating_duration_since(self.started);
        let progress = if self.duration.is_zero() {
            1.0
        } else {
            elapsed.as_secs_f32() / self.duration.as_secs_f32()
        };
        let eased = ease(Easing::Standard, progress);

        Frame {
            scale: eased,
            opacity: 1.0 - eased,
        }
    }

    /// Whether the overlay should be removed.
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.lifetime
    }
}

fn gradient_for(next: Theme) -> [GradientStop; 3] {
    let (core, core_alpha, halo, halo_alpha) = match next {
        Theme::Light => (
            palette::BLUE_500,
            opacity::RIPPLE_LIGHT_CORE,
            palette::VIOLET_500,
            opacity::RIPPLE_LIGHT_HALO,
        ),
        Theme::Dark => (
            palette::VIOLET_500,
            opacity::RIPPLE_DARK_CORE,
            palette::BLUE_500,
            opacity::RIPPLE_DARK_HALO,
        ),
    };

    [
        GradientStop {
            offset: 0.0,
            color: Color { a: core_alpha, ..core },
        },
        GradientStop {
            offset: stops::RIPPLE_HALO,
            color: Color { a: halo_alpha, ..halo },
        },
        GradientStop {
            offset: stops::RIPPLE_FADE,
            color: Color::TRANSPARENT,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, Clock, F32_EPSILON};

    fn overlay(clock: &Clock, next: Theme) -> RippleOverlay {
        RippleOverlay::spawn(
            Point::new(300.0, 400.0),
            Viewport::new(600.0, 800.0),
            next,
            &Timing::default(),
            clock.now(),
        )
    }

    #[test]
    fn diameter_covers_viewport_from_origin() {
        let clock = Clock::new();
        let ripple = overlay(&clock, Theme::Light);
        // Half diagonal is 500.
        assert_abs_diff_eq!(ripple.diameter(), 1100.0, epsilon = 1e-2);

        let bounds = ripple.bounds();
        assert_abs_diff_eq!(bounds.center_x(), 300.0, epsilon = 1e-3);
        assert_abs_diff_eq!(bounds.center_y(), 400.0, epsilon = 1e-3);
    }

    #[test]
    fn animation_runs_from_zero_scale_to_transparent() {
        let mut clock = Clock::new();
        let ripple = overlay(&clock, Theme::Dark);

        let start = ripple.sample(clock.now());
        assert_abs_diff_eq!(start.scale, 0.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(start.opacity, 1.0, epsilon = F32_EPSILON);

        let midway = ripple.sample(clock.advance(350));
        assert!(midway.scale > 0.5, "standard curve front-loads progress");

        let end = ripple.sample(clock.advance(350));
        assert_abs_diff_eq!(end.scale, 1.0, epsilon = 1e-4);
        assert_abs_diff_eq!(end.opacity, 0.0, epsilon = 1e-4);
    }

    #[test]
    fn expires_after_lifetime_not_duration() {
        let mut clock = Clock::new();
        let ripple = overlay(&clock, Theme::Light);

        assert!(!ripple.is_expired(clock.advance(700)));
        assert!(!ripple.is_expired(clock.advance(49)));
        assert!(ripple.is_expired(clock.advance(1)));
    }

    #[test]
    fn gradient_leads_with_next_theme_accent() {
        let clock = Clock::new();
        let to_light = overlay(&clock, Theme::Light);
        let to_dark = overlay(&clock, Theme::Dark);

        assert_eq!(
            to_light.stops()[0].color,
            Color { a: opacity::RIPPLE_LIGHT_CORE, ..palette::BLUE_500 }
        );
        assert_eq!(
            to_dark.stops()[0].color,
            Color { a: opacity::RIPPLE_DARK_CORE, ..palette::VIOLET_500 }
        );
        assert_eq!(to_light.stops()[2].color, Color::TRANSPARENT);
    }
}
