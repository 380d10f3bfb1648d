// SPDX-License-Identifier: MPL-2.0
//! Close delay domain type for the quick view modal.
//!
//! The delay is how long the exit animation runs before the selected item
//! (and therefore the modal's rendered content) is cleared.

use crate::config::{DEFAULT_CLOSE_DELAY_MS, MAX_CLOSE_DELAY_MS, MIN_CLOSE_DELAY_MS};
use std::time::Duration;

/// Quick view close delay in milliseconds, clamped to 50–2000 ms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloseDelay(u64);

impl CloseDelay {
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(MIN_CLOSE_DELAY_MS, MAX_CLOSE_DELAY_MS))
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for CloseDelay {
    fn default() -> Self {
        Self(DEFAULT_CLOSE_DELAY_MS)
    }
}
