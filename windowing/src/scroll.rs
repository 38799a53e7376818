//! Scroll-activity state: direction, offset, origin, and the debounced `is_scrolling` flag.

use core::cmp::Ordering;

use crate::range::sanitize_offset;
use crate::{ScrollDirection, ScrollState};

/// A single cancellable deadline, driven by host time.
///
/// Scheduling replaces any pending deadline, so at most one reset is ever outstanding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QuietTimer {
    interval_ms: u64,
    deadline_ms: Option<u64>,
}

impl QuietTimer {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            deadline_ms: None,
        }
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    pub fn set_interval_ms(&mut self, interval_ms: u64) {
        self.interval_ms = interval_ms;
    }

    /// Cancels the pending deadline (if any) and schedules a new one `interval_ms` from `now_ms`.
    pub fn restart(&mut self, now_ms: u64) {
        self.deadline_ms = Some(now_ms.saturating_add(self.interval_ms));
    }

    pub fn cancel(&mut self) {
        self.deadline_ms = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline_ms.is_some()
    }

    pub fn deadline_ms(&self) -> Option<u64> {
        self.deadline_ms
    }

    /// Returns `true` exactly once, when `now_ms` reaches the pending deadline.
    pub fn fire_if_due(&mut self, now_ms: u64) -> bool {
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => {
                self.deadline_ms = None;
                true
            }
            _ => false,
        }
    }
}

/// What happened when the quiet timer was polled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Settle {
    /// No deadline reached.
    Pending,
    /// The deadline fired but the machine was already idle (e.g. after a programmatic scroll).
    Quiet,
    /// `Active → Idle` was committed.
    Settled,
}

/// `Idle ⇄ Active` scroll-activity tracking.
#[derive(Clone, Debug)]
pub struct ScrollStateMachine {
    state: ScrollState,
    timer: QuietTimer,
}

impl ScrollStateMachine {
    pub fn new(initial_offset: f64, quiet_interval_ms: u64) -> Self {
        Self {
            state: ScrollState {
                offset: sanitize_offset(initial_offset),
                direction: ScrollDirection::Forward,
                is_scrolling: false,
                was_requested: false,
            },
            timer: QuietTimer::new(quiet_interval_ms),
        }
    }

    pub fn state(&self) -> ScrollState {
        self.state
    }

    pub fn offset(&self) -> f64 {
        self.state.offset
    }

    pub fn direction(&self) -> ScrollDirection {
        self.state.direction
    }

    pub fn is_scrolling(&self) -> bool {
        self.state.is_scrolling
    }

    pub fn timer(&self) -> &QuietTimer {
        &self.timer
    }

    pub fn set_quiet_interval_ms(&mut self, interval_ms: u64) {
        self.timer.set_interval_ms(interval_ms);
    }

    /// User-driven scroll notification.
    ///
    /// Returns `false` (and changes nothing) when `raw_offset` equals the current offset: such
    /// notifications typically echo the engine's own corrective writes.
    pub fn notify_scroll(&mut self, raw_offset: f64, now_ms: u64) -> bool {
        let offset = sanitize_offset(raw_offset);
        if offset == self.state.offset {
            return false;
        }
        if !self.state.is_scrolling {
            wtrace!(offset, now_ms, "scroll state: idle -> active");
        }
        self.state = ScrollState {
            offset,
            direction: direction_between(self.state.offset, offset, self.state.direction),
            is_scrolling: true,
            was_requested: false,
        };
        self.timer.restart(now_ms);
        true
    }

    /// Programmatic scroll. Leaves `is_scrolling` untouched.
    pub fn request_scroll(&mut self, raw_offset: f64, now_ms: u64) {
        let offset = sanitize_offset(raw_offset);
        self.state.direction = direction_between(self.state.offset, offset, self.state.direction);
        self.state.offset = offset;
        self.state.was_requested = true;
        self.timer.restart(now_ms);
    }

    /// Advances host time. Commits `Active → Idle` when the quiet period has elapsed.
    pub fn poll(&mut self, now_ms: u64) -> Settle {
        if !self.timer.fire_if_due(now_ms) {
            return Settle::Pending;
        }
        if !self.state.is_scrolling {
            return Settle::Quiet;
        }
        self.state.is_scrolling = false;
        wtrace!(now_ms, "scroll state: active -> idle");
        Settle::Settled
    }

    /// Cancels the pending quiet timer. No callback can fire afterwards.
    pub fn teardown(&mut self) {
        self.timer.cancel();
    }
}

fn direction_between(prev: f64, next: f64, current: ScrollDirection) -> ScrollDirection {
    match next.partial_cmp(&prev) {
        Some(Ordering::Greater) => ScrollDirection::Forward,
        Some(Ordering::Less) => ScrollDirection::Backward,
        _ => current,
    }
}
