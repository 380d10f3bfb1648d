// SPDX-License-Identifier: MPL-2.0
//! Progress curves for the site's transitions.
//!
//! Maps linear progress in `0.0..=1.0` to eased progress. Only the curves the
//! site actually uses are provided.

/// Available easing curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// No easing.
    #[default]
    Linear,
    /// `cubic-bezier(0.4, 0, 0.2, 1)`, the standard material curve.
    Standard,
    /// Strong deceleration, `1 - (1 - t)^4`.
    PowerOut,
    /// Decelerates past the target and settles back (overshoot 1.7).
    BackOut,
}

const BACK_OVERSHOOT: f32 = 1.7;

/// Applies `easing` to progress `t`, clamping `t` to `0.0..=1.0` first.
///
/// ```
/// use folio_fx::easing::{ease, Easing};
///
/// assert_eq!(ease(Easing::Linear, 0.5), 0.5);
/// assert!(ease(Easing::PowerOut, 0.5) > 0.5);
/// ```
#[must_use]
pub fn ease(easing: Easing, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);

    match easing {
        Easing::Linear => t,
        Easing::Standard => cubic_bezier(0.4, 0.0, 0.2, 1.0, t),
        Easing::PowerOut => 1.0 - (1.0 - t).powi(4),
        Easing::BackOut => {
            let c3 = BACK_OVERSHOOT + 1.0;
            let u = t - 1.0;
            1.0 + c3 * u.powi(3) + BACK_OVERSHOOT * u.powi(2)
        }
    }
}

/// Interpolates from `start` to `end` along `easing`.
#[must_use]
pub fn lerp_eased(easing: Easing, start: f32, end: f32, t: f32) -> f32 {
    start + (end - start) * ease(easing, t)
}

/// Evaluates a CSS `cubic-bezier(x1, y1, x2, y2)` timing function at `x`.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, x: f32) -> f32 {
    if x <= 0.0 || x >= 1.0 {
        return x;
    }

    let sample = |a: f32, b: f32, s: f32| {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * a + 3.0 * inv * s * s * b + s * s * s
    };

    // x(s) is monotonic for control points in [0, 1], so bisection converges.
    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    let mut s = x;
    for _ in 0..32 {
        let current = sample(x1, x2, s);
        if (current - x).abs() < 1e-6 {
            break;
        }
        if current < x {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) * 0.5;
    }

    sample(y1, y2, s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    #[test]
    fn every_curve_pins_its_endpoints() {
        for easing in [
            Easing::Linear,
            Easing::Standard,
            Easing::PowerOut,
            Easing::BackOut,
        ] {
            assert_abs_diff_eq!(ease(easing, 0.0), 0.0, epsilon = 1e-4);
            assert_abs_diff_eq!(ease(easing, 1.0), 1.0, epsilon = 1e-4);
        }
    }

    #[test]
    fn input_is_clamped() {
        assert_abs_diff_eq!(ease(Easing::Linear, -3.0), 0.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(ease(Easing::Linear, 7.0), 1.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn standard_curve_is_monotonic() {
        let mut previous = 0.0;
        for step in 1..=20 {
            let value = ease(Easing::Standard, step as f32 / 20.0);
            assert!(value >= previous);
            previous = value;
        }
    }

    #[test]
    fn back_out_overshoots_before_settling() {
        let peak = (1..100)
            .map(|i| ease(Easing::BackOut, i as f32 / 100.0))
            .fold(0.0_f32, f32::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn lerp_eased_spans_the_range() {
        assert_abs_diff_eq!(lerp_eased(Easing::Linear, 60.0, 0.0, 0.5), 30.0, epsilon = F32_EPSILON);
    }
}
