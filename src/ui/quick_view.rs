// SPDX-License-Identifier: MPL-2.0
//! Quick view modal lifecycle for one selected gallery item.
//!
//! ```text
//! Closed --open--> Opening --entrance finished--> Open --close--> Closing
//!    ^                                                               |
//!    +---------------------- close delay elapsed --------------------+
//! ```
//!
//! The item is kept through `Closing` so the exit animation still has
//! content to show. Opening again while closing cancels the pending clear
//! and goes straight back to `Open`.

use crate::timer::OneShot;
use crate::ui::state::CloseDelay;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

#[derive(Debug, Clone)]
pub enum Message<T> {
    /// Open with this item. `None` is ignored.
    Open(Option<T>),
    /// Entrance animation finished.
    EntranceFinished,
    /// Close button or backdrop click.
    Close { now: Instant },
    Tick(Instant),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Status or selected item changed.
    Updated(Status),
    /// The close delay elapsed and the item was released.
    Cleared,
}

/// Modal state machine. `selected` is `Some` exactly when not `Closed`.
#[derive(Debug, Clone)]
pub struct QuickView<T> {
    status: Status,
    selected: Option<T>,
    close_timer: OneShot,
    close_delay: CloseDelay,
}

impl<T> Default for QuickView<T> {
    fn default() -> Self {
        Self::new(CloseDelay::default())
    }
}

impl<T> QuickView<T> {
    #[must_use]
    pub fn new(close_delay: CloseDelay) -> Self {
        Self {
            status: Status::Closed,
            selected: None,
            close_timer: OneShot::default(),
            close_delay,
        }
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub fn selected(&self) -> Option<&T> {
        self.selected.as_ref()
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        matches!(self.status, Status::Opening | Status::Open)
    }

    /// Shows `item`.
    ///
    /// While already opening or open the item is swapped in place without
    /// restarting the entrance.
    pub fn open(&mut self, item: T) -> Effect {
        match self.status {
            Status::Closed => {
                self.selected = Some(item);
                self.status = Status::Opening;
            }
            Status::Closing => {
                self.close_timer.cancel();
                self.selected = Some(item);
                self.status = Status::Open;
            }
            Status::Opening | Status::Open => {
                self.selected = Some(item);
            }
        }
        tracing::debug!(status = ?self.status, "quick view opened");
        Effect::Updated(self.status)
    }

    /// Marks the entrance animation as done.
    pub fn entrance_finished(&mut self) -> Effect {
        if self.status != Status::Opening {
            return Effect::None;
        }
        self.status = Status::Open;
        Effect::Updated(self.status)
    }

    /// Starts the exit; the item is released once the close delay elapses.
    pub fn close(&mut self, now: Instant) -> Effect {
        if !self.is_visible() {
            return Effect::None;
        }
        self.status = Status::Closing;
        self.close_timer.arm(now, self.close_delay.as_duration());
        tracing::debug!("quick view closing");
        Effect::Updated(self.status)
    }

    pub fn tick(&mut self, now: Instant) -> Effect {
        if !self.close_timer.fire(now) {
            return Effect::None;
        }
        self.selected = None;
        self.status = Status::Closed;
        tracing::debug!("quick view cleared");
        Effect::Cleared
    }

    pub fn handle(&mut self, msg: Message<T>) -> Effect {
        match msg {
            Message::Open(Some(item)) => self.open(item),
            Message::Open(None) => Effect::None,
            Message::EntranceFinished => self.entrance_finished(),
            Message::Close { now } => self.close(now),
            Message::Tick(now) => self.tick(now),
        }
    }

    /// Cancels the close timer and releases the item. Safe to call repeatedly.
    pub fn teardown(&mut self) {
        self.close_timer.cancel();
        self.selected = None;
        self.status = Status::Closed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::Clock;

    fn modal() -> QuickView<&'static str> {
        QuickView::new(CloseDelay::new(300))
    }

    #[test]
    fn open_then_entrance_reaches_open() {
        let mut modal = modal();
        assert_eq!(modal.open("X"), Effect::Updated(Status::Opening));
        assert_eq!(modal.entrance_finished(), Effect::Updated(Status::Open));
        assert_eq!(modal.selected(), Some(&"X"));
    }

    #[test]
    fn second_open_replaces_item_without_restarting() {
        let mut modal = modal();
        modal.open("X");
        modal.open("Y");
        assert_eq!(modal.status(), Status::Opening);
        assert_eq!(modal.selected(), Some(&"Y"));

        modal.entrance_finished();
        modal.open("Z");
        assert_eq!(modal.status(), Status::Open);
        assert_eq!(modal.selected(), Some(&"Z"));
    }

    #[test]
    fn close_keeps_item_until_delay_elapses() {
        let mut modal = modal();
        let mut clock = Clock::new();
        modal.open("X");
        modal.entrance_finished();

        modal.close(clock.now());
        assert_eq!(modal.status(), Status::Closing);
        assert_eq!(modal.tick(clock.advance(299)), Effect::None);
        assert_eq!(modal.selected(), Some(&"X"));

        assert_eq!(modal.tick(clock.advance(1)), Effect::Cleared);
        assert_eq!(modal.status(), Status::Closed);
        assert_eq!(modal.selected(), None);
    }

    #[test]
    fn reopen_while_closing_cancels_clear() {
        let mut modal = modal();
        let mut clock = Clock::new();
        modal.open("X");
        modal.close(clock.now());

        modal.open("Z");
        assert_eq!(modal.status(), Status::Open);
        assert_eq!(modal.selected(), Some(&"Z"));

        assert_eq!(modal.tick(clock.advance(1_000)), Effect::None);
        assert_eq!(modal.selected(), Some(&"Z"));
    }

    #[test]
    fn invalid_requests_are_noops() {
        let mut modal = modal();
        let clock = Clock::new();

        assert_eq!(modal.handle(Message::Open(None)), Effect::None);
        assert_eq!(modal.close(clock.now()), Effect::None);
        assert_eq!(modal.entrance_finished(), Effect::None);
        assert_eq!(modal.status(), Status::Closed);
    }

    #[test]
    fn teardown_is_idempotent() {
        let mut modal = modal();
        let mut clock = Clock::new();
        modal.open("X");
        modal.close(clock.now());

        modal.teardown();
        modal.teardown();
        assert_eq!(modal.status(), Status::Closed);
        assert_eq!(modal.tick(clock.advance(1_000)), Effect::None);
    }
}
