//! Application-level one-shot timers.
//!
//! Splash navigation, simulated dashboard loading, leave submission and toast
//! expiry are all "run this once after N seconds" timers. [`Timers`] keeps at
//! most one deadline per [`TimerKind`]; scheduling a kind again replaces its
//! deadline, and cancelling removes it. Deadlines are checked against the time
//! carried by each tick, so host wake-ups for replaced or cancelled deadlines
//! do nothing.

use std::collections::BTreeMap;
use std::time::Duration;

/// Splash screen display time.
pub const SPLASH_DURATION: Duration = Duration::from_secs(2);

/// Simulated dashboard loading time.
pub const DASHBOARD_LOAD: Duration = Duration::from_secs(2);

/// Simulated leave submission time.
pub const LEAVE_SUBMIT_DELAY: Duration = Duration::from_secs(2);

/// Toast visibility window.
pub const TOAST_DURATION: Duration = Duration::from_secs(2);

/// What a timer does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TimerKind {
    SplashDone,
    DashboardLoaded,
    LeaveSubmitted,
    ToastExpired,
}

/// One deadline per timer kind.
#[derive(Debug, Clone, Default)]
pub struct Timers {
    deadlines: BTreeMap<TimerKind, Duration>,
}

impl Timers {
    /// Schedules `kind` to fire `delay` after `now`, replacing an earlier schedule.
    pub fn schedule(&mut self, kind: TimerKind, delay: Duration, now: Duration) {
        let deadline = now + delay;
        if let Some(previous) = self.deadlines.insert(kind, deadline) {
            tracing::trace!(?kind, ?previous, ?deadline, "timer rescheduled");
        }
    }

    /// Cancels `kind`; returns whether it was pending.
    pub fn cancel(&mut self, kind: TimerKind) -> bool {
        self.deadlines.remove(&kind).is_some()
    }

    #[must_use]
    pub fn is_pending(&self, kind: TimerKind) -> bool {
        self.deadlines.contains_key(&kind)
    }

    /// Removes and returns every timer due at `now`, earliest deadline first.
    pub fn take_due(&mut self, now: Duration) -> Vec<TimerKind> {
        let mut due: Vec<(Duration, TimerKind)> = self
            .deadlines
            .iter()
            .filter(|(_, deadline)| **deadline <= now)
            .map(|(kind, deadline)| (*deadline, *kind))
            .collect();
        due.sort_unstable();

        for (_, kind) in &due {
            self.deadlines.remove(kind);
        }

        due.into_iter().map(|(_, kind)| kind).collect()
    }

    /// Earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.deadlines.values().min().copied()
    }
}
