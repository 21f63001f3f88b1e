//! Debounced search over the roster.
//!
//! [`SearchController`] owns the search session of the employee directory:
//! the raw query text, the active status chip, the currently visible results
//! and the debounce timer guarding text recomputation.
//!
//! # Recompute rules
//!
//! - Text changes are recorded immediately but only applied after
//!   [`SEARCH_DEBOUNCE`] of quiet time (trailing debounce).
//! - Status chips apply immediately, combined with the last applied query.
//! - Whichever recomputation happens last determines `visible_results`.
//! - [`SearchController::teardown`] consumes the controller, so no pending
//!   recomputation can run after the screen is gone.

use super::debounce::{Debouncer, TimerHandle};
use super::filter::filter;
use crate::domain::{AttendanceStatus, Employee, Roster};
use std::time::Duration;

/// Quiet period before a text change is applied.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Search session state for one mount of the employee directory.
#[derive(Debug, Clone)]
pub struct SearchController {
    roster: Roster,
    query_text: String,
    applied_query: String,
    status_filter: Option<AttendanceStatus>,
    visible: Vec<Employee>,
    debouncer: Debouncer,
    recomputations: u64,
}

impl SearchController {
    /// Creates a controller showing the full roster with no filters.
    #[must_use]
    pub fn new(roster: Roster) -> Self {
        let visible = roster.to_vec();
        Self {
            roster,
            query_text: String::new(),
            applied_query: String::new(),
            status_filter: None,
            visible,
            debouncer: Debouncer::new(SEARCH_DEBOUNCE),
            recomputations: 0,
        }
    }

    /// Records the full current input text and (re)starts the debounce window.
    ///
    /// Returns the handle of the newly scheduled recomputation; any previously
    /// pending one is invalidated.
    pub fn on_query_text_changed(&mut self, text: impl Into<String>, now: Duration) -> TimerHandle {
        self.query_text = text.into();
        let handle = self.debouncer.schedule(now);
        tracing::trace!(query = %self.query_text, ?handle, "query text changed, debounce scheduled");
        handle
    }

    /// Selects a status chip and recomputes immediately.
    ///
    /// A pending text recomputation stays scheduled; when it fires it applies
    /// the newest text together with this status.
    pub fn on_status_chip_selected(&mut self, status: AttendanceStatus) {
        self.status_filter = Some(status);
        self.recompute();
    }

    /// Removes the status restriction and recomputes immediately.
    pub fn clear_status_filter(&mut self) {
        if self.status_filter.take().is_some() {
            self.recompute();
        }
    }

    /// Applies the debounced text if its window has elapsed at `now`.
    ///
    /// Returns `true` when `visible_results` was recomputed.
    pub fn poll(&mut self, now: Duration) -> bool {
        let Some(handle) = self.debouncer.fire_due(now) else {
            return false;
        };

        tracing::trace!(?handle, query = %self.query_text, "debounce fired");
        self.applied_query.clone_from(&self.query_text);
        self.recompute();
        true
    }

    /// Ends the search session, cancelling any pending recomputation.
    ///
    /// Returns the handle of the cancelled recomputation, if one was pending.
    pub fn teardown(mut self) -> Option<TimerHandle> {
        let cancelled = self.debouncer.cancel();
        tracing::debug!(?cancelled, recomputations = self.recomputations, "search session torn down");
        cancelled
    }

    fn recompute(&mut self) {
        let _span = tracing::debug_span!(
            "recompute_results",
            roster_len = self.roster.len(),
            query_len = self.applied_query.len(),
            status = ?self.status_filter
        )
        .entered();

        self.visible = filter(&self.roster, &self.applied_query, self.status_filter);
        self.recomputations += 1;

        tracing::debug!(visible = self.visible.len(), "results recomputed");
    }

    /// Raw text as typed, including changes still inside the debounce window.
    #[must_use]
    pub fn query_text(&self) -> &str {
        &self.query_text
    }

    /// Text that produced the current results.
    #[must_use]
    pub fn applied_query(&self) -> &str {
        &self.applied_query
    }

    #[must_use]
    pub const fn status_filter(&self) -> Option<AttendanceStatus> {
        self.status_filter
    }

    #[must_use]
    pub fn visible_results(&self) -> &[Employee] {
        &self.visible
    }

    /// Number of times the filter has been evaluated since mount.
    #[must_use]
    pub const fn recomputations(&self) -> u64 {
        self.recomputations
    }

    /// Deadline of the pending text recomputation, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.debouncer.deadline()
    }

    #[must_use]
    pub const fn is_debouncing(&self) -> bool {
        self.debouncer.is_pending()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn ids(controller: &SearchController) -> Vec<u32> {
        controller.visible_results().iter().map(|e| e.id).collect()
    }

    #[test]
    fn starts_with_full_roster() {
        let controller = SearchController::new(Roster::builtin());
        assert_eq!(ids(&controller), vec![1, 2, 3, 4]);
        assert_eq!(controller.query_text(), "");
        assert_eq!(controller.status_filter(), None);
        assert_eq!(controller.recomputations(), 0);
    }

    #[test]
    fn rapid_typing_coalesces_into_one_recomputation() {
        let mut controller = SearchController::new(Roster::builtin());
        controller.on_query_text_changed("A", ms(0));
        controller.on_query_text_changed("Ak", ms(100));
        controller.on_query_text_changed("Aka", ms(150));

        assert_eq!(controller.query_text(), "Aka");
        assert!(!controller.poll(ms(300)));
        assert!(!controller.poll(ms(449)));
        assert_eq!(controller.recomputations(), 0);

        assert!(controller.poll(ms(450)));
        assert_eq!(controller.recomputations(), 1);
        assert_eq!(controller.applied_query(), "Aka");
        assert_eq!(ids(&controller), vec![1]);

        assert!(!controller.poll(ms(2_000)));
        assert_eq!(controller.recomputations(), 1);
    }

    #[test]
    fn chip_applies_immediately() {
        let mut controller = SearchController::new(Roster::builtin());
        controller.on_status_chip_selected(AttendanceStatus::Present);

        assert_eq!(ids(&controller), vec![1, 4]);
        assert_eq!(controller.recomputations(), 1);
    }

    #[test]
    fn pending_text_applies_after_chip_with_both_filters() {
        let mut controller = SearchController::new(Roster::builtin());
        controller.on_query_text_changed("kr", ms(0));
        controller.on_status_chip_selected(AttendanceStatus::Present);
        assert_eq!(ids(&controller), vec![1, 4]);

        assert!(controller.poll(ms(300)));
        assert_eq!(ids(&controller), vec![4]);
    }

    #[test]
    fn clearing_status_restores_text_only_results() {
        let mut controller = SearchController::new(Roster::builtin());
        controller.on_status_chip_selected(AttendanceStatus::Late);
        assert_eq!(ids(&controller), vec![3]);

        controller.clear_status_filter();
        assert_eq!(ids(&controller), vec![1, 2, 3, 4]);
        assert_eq!(controller.recomputations(), 2);

        controller.clear_status_filter();
        assert_eq!(controller.recomputations(), 2);
    }

    #[test]
    fn no_match_yields_empty_results() {
        let mut controller = SearchController::new(Roster::builtin());
        controller.on_query_text_changed("zz", ms(0));
        assert!(controller.poll(ms(300)));
        assert!(controller.visible_results().is_empty());
    }

    #[test]
    fn teardown_cancels_pending_recomputation() {
        let mut controller = SearchController::new(Roster::builtin());
        let handle = controller.on_query_text_changed("Atul", ms(0));

        assert_eq!(controller.recomputations(), 0);
        assert_eq!(controller.teardown(), Some(handle));
    }
}
