// SPDX-License-Identifier: MPL-2.0
//! Autoplay interval domain type for the testimonial carousel.

use crate::config::{
    DEFAULT_AUTOPLAY_INTERVAL_MS, MAX_AUTOPLAY_INTERVAL_MS, MIN_AUTOPLAY_INTERVAL_MS,
};
use std::time::Duration;

/// Carousel autoplay interval in milliseconds.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (1–60 seconds).
///
/// # Example
///
/// ```
/// use folio_fx::ui::state::AutoplayInterval;
///
/// let interval = AutoplayInterval::new(8_000);
/// assert_eq!(interval.value(), 8_000);
///
/// // Values outside range are clamped
/// let too_fast = AutoplayInterval::new(10);
/// assert_eq!(too_fast.value(), 1_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoplayInterval(u64);

impl AutoplayInterval {
    /// Creates a new interval, clamping to the valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(MIN_AUTOPLAY_INTERVAL_MS, MAX_AUTOPLAY_INTERVAL_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for AutoplayInterval {
    fn default() -> Self {
        Self(DEFAULT_AUTOPLAY_INTERVAL_MS)
    }
}
