//! Employee directory screen state.
//!
//! [`EmployeeDirectory`] is the per-mount state container of the employees
//! screen: the search session, the profile overlay, the row cursor and the
//! refresh indicator. It is created when the screen is entered and consumed by
//! [`EmployeeDirectory::unmount`] when the screen is left.

use super::profile::{ImagePool, ProfileViewer};
use super::search::SearchController;
use crate::domain::{AttendanceStatus, Employee, Roster};
use rand::Rng;
use std::time::Duration;

/// How long the refresh indicator stays on.
pub const REFRESH_INDICATOR: Duration = Duration::from_secs(1);

/// Focus of keyboard input inside the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryFocus {
    /// Keys move the cursor, select chips and trigger actions.
    List,
    /// Keys edit the search text.
    SearchBox,
}

/// Per-mount state of the employee directory.
#[derive(Debug, Clone)]
pub struct EmployeeDirectory {
    search: SearchController,
    profile: ProfileViewer,
    /// Zero-based cursor within the visible results.
    pub selected_index: usize,
    pub focus: DirectoryFocus,
    refresh_until: Option<Duration>,
    /// Employee the profile overlay was opened for.
    profile_subject: Option<Employee>,
}

impl EmployeeDirectory {
    /// Mounts a fresh directory over `roster`.
    #[must_use]
    pub fn mount(roster: Roster, images: ImagePool) -> Self {
        tracing::debug!(roster_len = roster.len(), "employee directory mounted");
        Self {
            search: SearchController::new(roster),
            profile: ProfileViewer::new(images),
            selected_index: 0,
            focus: DirectoryFocus::List,
            refresh_until: None,
            profile_subject: None,
        }
    }

    /// Tears the directory down, cancelling the debounce and refresh timers.
    pub fn unmount(self) {
        let cancelled = self.search.teardown();
        tracing::debug!(
            debounce_cancelled = cancelled.is_some(),
            refresh_cancelled = self.refresh_until.is_some(),
            "employee directory unmounted"
        );
    }

    /// Appends a character to the search text.
    pub fn type_char(&mut self, c: char, now: Duration) {
        let mut text = self.search.query_text().to_string();
        text.push(c);
        self.search.on_query_text_changed(text, now);
    }

    /// Removes the last character of the search text; no-op on empty text.
    pub fn backspace(&mut self, now: Duration) {
        let mut text = self.search.query_text().to_string();
        if text.pop().is_some() {
            self.search.on_query_text_changed(text, now);
        }
    }

    pub fn select_status(&mut self, status: AttendanceStatus) {
        self.search.on_status_chip_selected(status);
        self.after_recompute();
    }

    pub fn clear_status(&mut self) {
        self.search.clear_status_filter();
        self.after_recompute();
    }

    /// Turns the refresh indicator on until `now + REFRESH_INDICATOR`.
    ///
    /// A refresh while already refreshing restarts the window.
    pub fn refresh(&mut self, now: Duration) {
        self.refresh_until = Some(now + REFRESH_INDICATOR);
    }

    #[must_use]
    pub const fn is_refreshing(&self) -> bool {
        self.refresh_until.is_some()
    }

    /// Fires every timer of the screen that is due at `now`.
    ///
    /// Returns `true` if anything visible changed.
    pub fn on_tick(&mut self, now: Duration) -> bool {
        let recomputed = self.search.poll(now);
        if recomputed {
            self.after_recompute();
        }

        let refresh_done = matches!(self.refresh_until, Some(until) if until <= now);
        if refresh_done {
            self.refresh_until = None;
            tracing::debug!("refresh indicator cleared");
        }

        recomputed || refresh_done
    }

    /// Earliest pending deadline of the screen's timers.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        [self.search.next_deadline(), self.refresh_until]
            .into_iter()
            .flatten()
            .min()
    }

    /// Moves the cursor down by one row, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        let len = self.search.visible_results().len();
        if len == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % len;
    }

    /// Moves the cursor up by one row, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        let len = self.search.visible_results().len();
        if len == 0 {
            return;
        }
        self.selected_index = if self.selected_index == 0 {
            len - 1
        } else {
            self.selected_index - 1
        };
    }

    #[must_use]
    pub fn selected_employee(&self) -> Option<&Employee> {
        self.search.visible_results().get(self.selected_index)
    }

    /// Opens the profile overlay for the selected row, if any.
    ///
    /// Returns `false` when the list is empty.
    pub fn open_selected_profile(&mut self) -> bool {
        self.open_selected_profile_with(&mut rand::thread_rng())
    }

    /// Same as [`open_selected_profile`](Self::open_selected_profile) with a
    /// caller-supplied RNG for the image draw.
    pub fn open_selected_profile_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        let Some(employee) = self.selected_employee().cloned() else {
            return false;
        };
        self.profile.open_profile_with(rng);
        self.profile_subject = Some(employee);
        true
    }

    /// Hides the profile overlay; the viewer keeps its last image.
    pub fn close_profile(&mut self) {
        self.profile.close_profile();
        self.profile_subject = None;
    }

    /// Employee shown by the open profile overlay.
    #[must_use]
    pub fn profile_employee(&self) -> Option<&Employee> {
        if self.profile.is_visible() {
            self.profile_subject.as_ref()
        } else {
            None
        }
    }

    /// Keeps the cursor and the overlay consistent with new results.
    ///
    /// The cursor follows the overlay's employee while it is still visible;
    /// the overlay closes once its employee is filtered out.
    fn after_recompute(&mut self) {
        self.clamp_selection();

        let Some(subject_id) = self.profile_employee().map(|employee| employee.id) else {
            return;
        };
        match self
            .search
            .visible_results()
            .iter()
            .position(|employee| employee.id == subject_id)
        {
            Some(index) => self.selected_index = index,
            None => {
                tracing::debug!(employee_id = subject_id, "profile employee filtered out, closing overlay");
                self.close_profile();
            }
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.search.visible_results().len();
        self.selected_index = if len == 0 {
            0
        } else {
            self.selected_index.min(len - 1)
        };
    }

    #[must_use]
    pub const fn search(&self) -> &SearchController {
        &self.search
    }

    #[must_use]
    pub const fn profile(&self) -> &ProfileViewer {
        &self.profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn mounted() -> EmployeeDirectory {
        EmployeeDirectory::mount(Roster::builtin(), ImagePool::default())
    }

    #[test]
    fn typing_builds_full_text_and_debounces() {
        let mut directory = mounted();
        directory.type_char('k', ms(0));
        directory.type_char('r', ms(50));
        directory.backspace(ms(80));
        directory.type_char('R', ms(90));

        assert_eq!(directory.search().query_text(), "kR");
        assert_eq!(directory.next_deadline(), Some(ms(390)));
        assert!(!directory.on_tick(ms(389)));
        assert!(directory.on_tick(ms(390)));
        assert_eq!(directory.selected_employee().map(|e| e.id), Some(4));
    }

    #[test]
    fn backspace_on_empty_text_schedules_nothing() {
        let mut directory = mounted();
        directory.backspace(ms(0));
        assert_eq!(directory.next_deadline(), None);
    }

    #[test]
    fn selection_is_clamped_after_filtering() {
        let mut directory = mounted();
        directory.move_selection_up();
        assert_eq!(directory.selected_index, 3);

        directory.select_status(AttendanceStatus::Late);
        assert_eq!(directory.selected_index, 0);
        assert_eq!(directory.selected_employee().map(|e| e.id), Some(3));
    }

    #[test]
    fn refresh_indicator_clears_after_one_second() {
        let mut directory = mounted();
        directory.refresh(ms(200));
        assert!(directory.is_refreshing());
        assert_eq!(directory.next_deadline(), Some(ms(1_200)));

        assert!(!directory.on_tick(ms(1_199)));
        assert!(directory.is_refreshing());
        assert!(directory.on_tick(ms(1_200)));
        assert!(!directory.is_refreshing());
        assert_eq!(directory.search().recomputations(), 0);
    }

    #[test]
    fn profile_does_not_open_on_empty_list() {
        let mut directory = mounted();
        directory.type_char('z', ms(0));
        directory.on_tick(ms(300));

        assert!(!directory.open_selected_profile());
        assert!(!directory.profile().is_visible());
    }

    #[test]
    fn profile_opens_for_selected_row() {
        let mut directory = mounted();
        assert!(directory.open_selected_profile());
        assert!(directory.profile().is_visible());

        assert_eq!(directory.profile_employee().map(|e| e.id), Some(1));

        directory.close_profile();
        assert!(!directory.profile().is_visible());
        assert!(directory.profile_employee().is_none());
        assert!(directory.profile().selected_image().is_some());
    }

    #[test]
    fn overlay_closes_when_its_employee_is_filtered_out() {
        let mut directory = mounted();
        directory.type_char('z', ms(0));
        directory.type_char('z', ms(10));
        assert!(directory.open_selected_profile());

        assert!(directory.on_tick(ms(310)));

        assert!(directory.selected_employee().is_none());
        assert!(!directory.profile().is_visible());
        assert!(directory.profile_employee().is_none());
    }

    #[test]
    fn overlay_and_cursor_stay_on_the_opened_employee() {
        let mut directory = mounted();
        directory.move_selection_down();
        directory.move_selection_down();
        assert!(directory.open_selected_profile());
        assert_eq!(directory.profile_employee().map(|e| e.name.as_str()), Some("Prashnat"));

        // "sh" keeps Akash, Prashnat and Krishna; Prashnat moves up to index 1.
        directory.type_char('s', ms(0));
        directory.type_char('h', ms(10));
        assert!(directory.on_tick(ms(310)));

        assert!(directory.profile().is_visible());
        assert_eq!(directory.profile_employee().map(|e| e.name.as_str()), Some("Prashnat"));
        assert_eq!(directory.selected_index, 1);
        assert_eq!(directory.selected_employee().map(|e| e.id), Some(3));
    }

    #[test]
    fn chip_that_drops_the_profile_employee_closes_the_overlay() {
        let mut directory = mounted();
        assert!(directory.open_selected_profile());

        directory.select_status(AttendanceStatus::Late);

        assert!(!directory.profile().is_visible());
        assert_eq!(directory.selected_employee().map(|e| e.id), Some(3));
    }
}
