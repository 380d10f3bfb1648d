// SPDX-License-Identifier: MPL-2.0
//! Owned deadlines that replace browser timers.
//!
//! A controller that needs a timeout keeps one of these as a field and asks
//! it whether it has fired whenever the shell delivers a tick. Because the
//! deadline lives inside the controller, tearing the controller down (or
//! dropping it) is enough to guarantee nothing fires afterwards.

use std::time::{Duration, Instant};

/// A timeout that fires at most once per arming.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OneShot {
    due: Option<Instant>,
}

impl OneShot {
    /// Arms (or re-arms) the timer to fire `delay` after `now`.
    pub fn arm(&mut self, now: Instant, delay: Duration) {
        self.due = Some(now + delay);
    }

    /// Disarms the timer. Cancelling an idle timer is a no-op.
    pub fn cancel(&mut self) {
        self.due = None;
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.due.is_some()
    }

    #[must_use]
    pub fn due(&self) -> Option<Instant> {
        self.due
    }

    /// Returns `true` exactly once when `now` has reached the deadline.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.due {
            Some(due) if now >= due => {
                self.due = None;
                true
            }
            _ => false,
        }
    }
}

/// A periodic timer, the equivalent of `setInterval`.
///
/// Missed periods are not replayed: a late poll fires once and schedules the
/// next period from the poll time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Repeating {
    period: Duration,
    next_due: Option<Instant>,
}

impl Repeating {
    #[must_use]
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next_due: None,
        }
    }

    #[must_use]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Starts the timer, first firing one period after `now`.
    pub fn start(&mut self, now: Instant) {
        self.next_due = Some(now + self.period);
    }

    /// Schedules the next firing at an explicit instant.
    pub fn restart_at(&mut self, at: Instant) {
        self.next_due = Some(at);
    }

    pub fn stop(&mut self) {
        self.next_due = None;
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    #[must_use]
    pub fn next_due(&self) -> Option<Instant> {
        self.next_due
    }

    /// Returns `true` when a period elapsed, rescheduling from `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                self.next_due = Some(now + self.period);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn one_shot_fires_once_after_deadline() {
        let t0 = Instant::now();
        let mut timer = OneShot::default();
        timer.arm(t0, 300 * MS);

        assert!(!timer.fire(t0 + 299 * MS));
        assert!(timer.fire(t0 + 300 * MS));
        assert!(!timer.fire(t0 + 900 * MS));
        assert!(!timer.is_armed());
    }

    #[test]
    fn cancelled_one_shot_never_fires() {
        let t0 = Instant::now();
        let mut timer = OneShot::default();
        timer.arm(t0, 10 * MS);
        timer.cancel();
        timer.cancel();

        assert!(!timer.fire(t0 + 50 * MS));
    }

    #[test]
    fn rearming_moves_the_deadline() {
        let t0 = Instant::now();
        let mut timer = OneShot::default();
        timer.arm(t0, 100 * MS);
        timer.arm(t0 + 80 * MS, 100 * MS);

        assert!(!timer.fire(t0 + 120 * MS));
        assert!(timer.fire(t0 + 180 * MS));
    }

    #[test]
    fn repeating_does_not_burst_after_a_late_poll() {
        let t0 = Instant::now();
        let mut timer = Repeating::new(100 * MS);
        timer.start(t0);

        assert!(timer.poll(t0 + 450 * MS));
        assert!(!timer.poll(t0 + 460 * MS));
        assert_eq!(timer.next_due(), Some(t0 + 550 * MS));
    }

    #[test]
    fn stopped_repeating_is_inert() {
        let t0 = Instant::now();
        let mut timer = Repeating::new(100 * MS);
        assert!(!timer.poll(t0 + 1000 * MS));

        timer.start(t0);
        timer.stop();
        assert!(!timer.is_running());
        assert!(!timer.poll(t0 + 1000 * MS));
    }
}
