// SPDX-License-Identifier: MPL-2.0
//! Validated value types shared by the UI controllers.
//!
//! Each newtype clamps its input on construction so controllers never see an
//! out-of-range timing or fraction, whatever the settings file contains.

pub mod autoplay_interval;
pub mod close_delay;
pub mod threshold;

pub use autoplay_interval::AutoplayInterval;
pub use close_delay::CloseDelay;
pub use threshold::Threshold;
