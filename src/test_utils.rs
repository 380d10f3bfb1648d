// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and simulated time.
//!
//! This module re-exports the `approx` crate's assertion macros for float comparison,
//! which properly handle floating-point precision issues that `assert_eq!` cannot.

// Re-export approx macros for convenient use in tests
pub use approx::{assert_abs_diff_eq, assert_relative_eq};

use std::time::{Duration, Instant};

/// Default epsilon for f32 comparisons.
/// Suitable for values that should be "exactly equal" but may have minor floating-point errors.
pub const F32_EPSILON: f32 = 1e-6;

/// Shorthand for a millisecond duration.
pub fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

/// Manually advanced clock so timer-driven tests never sleep.
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    now: Instant,
}

impl Clock {
    pub fn new() -> Self {
        Self {
            now: Instant::now(),
        }
    }

    pub fn now(&self) -> Instant {
        self.now
    }

    /// Moves time forward and returns the new instant.
    pub fn advance(&mut self, millis: u64) -> Instant {
        self.now += ms(millis);
        self.now
    }
}
