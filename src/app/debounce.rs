//! Deadline-based trailing debounce.
//!
//! [`Debouncer`] coalesces bursts of values: every [`push`](Debouncer::push)
//! replaces the pending value and restarts the quiet window, and only a
//! [`poll`](Debouncer::poll) at or after the deadline releases the latest value.
//! Earlier values in a burst are dropped, never delivered.
//!
//! The debouncer never spawns timers itself. Hosts drive it from their event
//! loop: after each push they may schedule a wake-up at
//! [`next_deadline`](Debouncer::next_deadline) and call `poll` when it arrives.
//! This keeps the component single-threaded and lets tests control time.
//!
//! # Example
//!
//! ```
//! use notes_header::app::Debouncer;
//! use std::time::{Duration, Instant};
//!
//! let start = Instant::now();
//! let mut debouncer = Debouncer::new(Duration::from_millis(500));
//! debouncer.push("a", start);
//! debouncer.push("ab", start + Duration::from_millis(100));
//!
//! assert_eq!(debouncer.poll(start + Duration::from_millis(550)), None);
//! assert_eq!(debouncer.poll(start + Duration::from_millis(600)), Some("ab"));
//! ```

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct Pending<T> {
    value: T,
    deadline: Instant,
}

/// Trailing-edge debouncer owning its pending value.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    window: Duration,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    #[must_use]
    pub const fn new(window: Duration) -> Self {
        Self { window, pending: None }
    }

    #[must_use]
    pub const fn window(&self) -> Duration {
        self.window
    }

    /// Replaces the pending value and restarts the quiet window at `now`.
    pub fn push(&mut self, value: T, now: Instant) {
        self.pending = Some(Pending {
            value,
            deadline: now + self.window,
        });
    }

    /// Releases the pending value if its quiet window has elapsed by `now`.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some(pending) if now >= pending.deadline => self.pending.take().map(|pending| pending.value),
            _ => None,
        }
    }

    /// When the pending value becomes due, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|pending| pending.deadline)
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drops the pending value. Returns whether anything was pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }
}
