//! Trailing debounce driven by explicit time.
//!
//! The plugin runs single-threaded and cannot cancel host timers, so the
//! debouncer owns the deadline instead of the host. Every [`Debouncer::schedule`]
//! replaces the pending deadline with a new one and issues a fresh
//! [`TimerHandle`]; the previous handle is invalidated at that moment. A wake-up
//! from the host only fires the pending entry when its deadline has passed, so a
//! stale wake-up can never run a superseded or cancelled invocation.
//!
//! ```text
//! t=0    schedule ─┐
//! t=100  schedule ─┼─ previous handles invalidated
//! t=150  schedule ─┘
//! t=449  fire_due → None
//! t=450  fire_due → Some(handle #3)
//! ```

use std::time::Duration;

/// Identifies one scheduled invocation.
///
/// Handles are unique per debouncer and never reused, which makes it possible
/// to tell which scheduling a firing belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pending {
    handle: TimerHandle,
    deadline: Duration,
}

/// A single-slot trailing debouncer.
#[derive(Debug, Clone)]
pub struct Debouncer {
    window: Duration,
    pending: Option<Pending>,
    issued: u64,
}

impl Debouncer {
    /// Creates a debouncer with the given quiet window.
    #[must_use]
    pub const fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
            issued: 0,
        }
    }

    /// Schedules an invocation `window` after `now`, replacing any pending one.
    pub fn schedule(&mut self, now: Duration) -> TimerHandle {
        self.issued += 1;
        let handle = TimerHandle(self.issued);
        let deadline = now + self.window;

        if let Some(previous) = self.pending.replace(Pending { handle, deadline }) {
            tracing::trace!(?previous.handle, ?handle, "debounce rescheduled");
        }

        handle
    }

    /// Cancels the pending invocation, returning its handle if there was one.
    pub fn cancel(&mut self) -> Option<TimerHandle> {
        self.pending.take().map(|pending| pending.handle)
    }

    /// Takes the pending invocation if its deadline is at or before `now`.
    pub fn fire_due(&mut self, now: Duration) -> Option<TimerHandle> {
        match self.pending {
            Some(pending) if pending.deadline <= now => {
                self.pending = None;
                Some(pending.handle)
            }
            _ => None,
        }
    }

    /// Deadline of the pending invocation, if any.
    #[must_use]
    pub fn deadline(&self) -> Option<Duration> {
        self.pending.map(|pending| pending.deadline)
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub const fn window(&self) -> Duration {
        self.window
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn fires_only_after_quiet_window() {
        let mut debouncer = Debouncer::new(ms(300));
        let handle = debouncer.schedule(ms(0));

        assert_eq!(debouncer.fire_due(ms(299)), None);
        assert_eq!(debouncer.fire_due(ms(300)), Some(handle));
        assert!(!debouncer.is_pending());
        assert_eq!(debouncer.fire_due(ms(900)), None);
    }

    #[test]
    fn rescheduling_invalidates_previous_handle() {
        let mut debouncer = Debouncer::new(ms(300));
        let first = debouncer.schedule(ms(0));
        let second = debouncer.schedule(ms(100));
        let third = debouncer.schedule(ms(150));

        assert_ne!(first, second);
        assert_ne!(second, third);
        assert_eq!(debouncer.deadline(), Some(ms(450)));
        assert_eq!(debouncer.fire_due(ms(300)), None);
        assert_eq!(debouncer.fire_due(ms(449)), None);
        assert_eq!(debouncer.fire_due(ms(450)), Some(third));
    }

    #[test]
    fn cancel_prevents_firing() {
        let mut debouncer = Debouncer::new(ms(300));
        let handle = debouncer.schedule(ms(10));

        assert_eq!(debouncer.cancel(), Some(handle));
        assert_eq!(debouncer.cancel(), None);
        assert_eq!(debouncer.fire_due(ms(10_000)), None);
    }
}
