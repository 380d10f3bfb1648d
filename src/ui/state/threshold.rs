// SPDX-License-Identifier: MPL-2.0
//! Activation threshold domain type for reveal triggers.

use crate::config::DEFAULT_REVEAL_THRESHOLD;

/// Fraction of an element that must be visible before it reveals.
///
/// Always within `0.0..=1.0`; NaN falls back to the default.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold(f32);

impl Threshold {
    #[must_use]
    pub fn new(fraction: f32) -> Self {
        if fraction.is_nan() {
            return Self::default();
        }
        Self(fraction.clamp(0.0, 1.0))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Whether a visibility ratio reaches this threshold.
    #[must_use]
    pub fn is_met_by(self, ratio: f32) -> bool {
        ratio >= self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self(DEFAULT_REVEAL_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_to_unit_range() {
        assert_eq!(Threshold::new(-0.5).value(), 0.0);
        assert_eq!(Threshold::new(3.0).value(), 1.0);
    }

    #[test]
    fn nan_falls_back_to_default() {
        assert_eq!(Threshold::new(f32::NAN), Threshold::default());
    }

    #[test]
    fn ratio_at_threshold_counts() {
        let threshold = Threshold::new(0.25);
        assert!(threshold.is_met_by(0.25));
        assert!(!threshold.is_met_by(0.24));
    }
}
