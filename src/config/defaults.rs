// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by component.

// ==========================================================================
// Theme Transition Defaults
// ==========================================================================

/// Duration of the ripple overlay's expand-and-fade animation.
pub const DEFAULT_RIPPLE_DURATION_MS: u64 = 700;

/// Time after which the ripple overlay removes itself.
pub const DEFAULT_RIPPLE_LIFETIME_MS: u64 = 750;

/// Minimum time between two theme toggles.
///
/// Never shorter than the ripple animation; see `theme::Timing::new`.
pub const DEFAULT_THEME_SETTLE_MS: u64 = 750;

/// Upper bound for the ripple duration, lifetime and settle window.
pub const MAX_THEME_TIMING_MS: u64 = 10_000;

/// Distance from the top of the viewport used as the ripple origin when
/// the toggle was not triggered by a pointer.
pub const DEFAULT_RIPPLE_ORIGIN_OFFSET_Y: f32 = 80.0;

/// Ripple diameter as a multiple of the farthest-corner distance.
pub const RIPPLE_COVERAGE_FACTOR: f32 = 2.2;

// ==========================================================================
// Reveal Defaults
// ==========================================================================

/// Visible fraction at which a section heading starts its entrance.
pub const DEFAULT_REVEAL_THRESHOLD: f32 = 0.15;

/// Delay between consecutive elements of one reveal group.
pub const DEFAULT_REVEAL_STAGGER_MS: u64 = 150;

/// Upper bound for any stagger between consecutive elements.
pub const MAX_STAGGER_MS: u64 = 2_000;

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Delay before the first card of a freshly filtered grid animates in.
pub const DEFAULT_GALLERY_REVEAL_DELAY_MS: u64 = 200;

/// Upper bound for the delay before the first card animates in.
pub const MAX_GALLERY_REVEAL_DELAY_MS: u64 = 5_000;

/// Delay between consecutive cards of a freshly filtered grid.
pub const DEFAULT_GALLERY_REVEAL_STAGGER_MS: u64 = 100;

// ==========================================================================
// Quick View Defaults
// ==========================================================================

/// Time the exit animation gets before the selected item is cleared.
pub const DEFAULT_CLOSE_DELAY_MS: u64 = 300;

/// Minimum quick view close delay.
pub const MIN_CLOSE_DELAY_MS: u64 = 50;

/// Maximum quick view close delay.
pub const MAX_CLOSE_DELAY_MS: u64 = 2_000;

// ==========================================================================
// Carousel Defaults
// ==========================================================================

/// Default autoplay interval.
pub const DEFAULT_AUTOPLAY_INTERVAL_MS: u64 = 5_000;

/// Minimum autoplay interval.
pub const MIN_AUTOPLAY_INTERVAL_MS: u64 = 1_000;

/// Maximum autoplay interval.
pub const MAX_AUTOPLAY_INTERVAL_MS: u64 = 60_000;

/// Idle period used by the `after-idle` resume policy.
pub const DEFAULT_RESUME_IDLE_MS: u64 = 5_000;

/// Upper bound for the `after-idle` resume period.
pub const MAX_RESUME_IDLE_MS: u64 = 60_000;

// ==========================================================================
// Contact Form Defaults
// ==========================================================================

/// Time a failed submission message stays before the form returns to idle.
pub const DEFAULT_ERROR_RESET_MS: u64 = 4_000;

/// Upper bound for how long a failure message stays.
pub const MAX_ERROR_RESET_MS: u64 = 60_000;
