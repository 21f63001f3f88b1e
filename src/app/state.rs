//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the plugin,
//! along with screen navigation, toast handling, wake-up arming and UI view
//! model generation. It is the single source of truth for all transient UI state.
//!
//! # Architecture
//!
//! `AppState` separates data that lives for the whole plugin lifetime (roster,
//! dashboard, leave screen, themes) from per-mount state: the employee
//! directory exists only while the Employees screen is shown. Every deadline
//! lives in the state itself ([`Timers`] plus the directory's own debounce and
//! refresh deadlines); the host is only asked for wake-ups.
//!
//! # State Components
//!
//! - **Roster**: Employees loaded at startup
//! - **Screen**: Page under the tab bar
//! - **Directory**: Search, filters, cursor and profile overlay (Employees only)
//! - **Dashboard / Leave**: Long-lived screen state
//! - **Toast**: Transient message with its own expiry timer
//!
//! # Example
//!
//! ```rust
//! use rollcall::app::AppState;
//! use rollcall::app::modes::Screen;
//! use std::time::Duration;
//!
//! let mut state = AppState::default();
//! state.navigate(Screen::Employees, Duration::ZERO);
//! assert!(state.directory.is_some());
//! let viewmodel = state.compute_viewmodel(24, 80);
//! # let _ = viewmodel;
//! ```

use super::actions::Action;
use super::dashboard::{DashboardPhase, DashboardState};
use super::leave::LeaveScreen;
use super::modes::{InputMode, Screen, TextTarget};
use super::timers::{TimerKind, Timers, DASHBOARD_LOAD, SPLASH_DURATION, TOAST_DURATION};
use crate::directory::{match_range, DirectoryFocus, EmployeeDirectory, ImagePool};
use crate::domain::{AttendanceStatus, Employee, Roster, Shift};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    ChipInfo, DashboardView, DisplayItem, EmployeesView, EmptyState, FooterInfo, LeaveFormView,
    LeaveView, PendingRow, ProfileOverlay, ScreenView, SearchBarInfo, SplashView, SummaryRow, TabBarInfo,
    TabInfo, ToastInfo, UIViewModel,
};
use chrono::NaiveDate;
use std::time::Duration;

/// Severity of a toast message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Error,
}

/// Transient message shown above the footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
}

/// Central application state container.
///
/// Mutated by the event handler in response to user input and timer ticks.
/// View models are computed on demand from state snapshots.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Employees shown by the dashboard and the directory.
    pub roster: Roster,

    /// Images handed to each newly mounted profile viewer.
    pub images: ImagePool,

    /// Page currently displayed.
    pub screen: Screen,

    /// Employee directory, present only while `screen` is `Employees`.
    pub directory: Option<EmployeeDirectory>,

    pub dashboard: DashboardState,

    pub leave: LeaveScreen,

    /// Message currently shown, if any.
    pub toast: Option<Toast>,

    /// Palette used while dark mode is off.
    pub light_theme: Theme,

    /// Palette used while dark mode is on.
    pub dark_theme: Theme,

    /// Application-level one-shot timers.
    pub timers: Timers,

    /// Deadline the host has already been asked to wake us for.
    armed_wakeup: Option<Duration>,
}

impl Default for AppState {
    /// Built-in roster and images, default palettes, light mode, today's date.
    fn default() -> Self {
        Self::new(
            Roster::builtin(),
            ImagePool::default(),
            Theme::default(),
            Theme::dark(),
            false,
            chrono::Local::now().date_naive(),
        )
    }
}

impl AppState {
    /// Creates a new application state on the splash screen.
    ///
    /// # Parameters
    ///
    /// * `roster` - Employees to display
    /// * `images` - Pool the profile viewer picks from
    /// * `light_theme` / `dark_theme` - Palettes for the two theme modes
    /// * `dark_mode` - Initial theme mode
    /// * `today` - Initial date of the leave form
    #[must_use]
    pub fn new(
        roster: Roster,
        images: ImagePool,
        light_theme: Theme,
        dark_theme: Theme,
        dark_mode: bool,
        today: NaiveDate,
    ) -> Self {
        Self {
            roster,
            images,
            screen: Screen::Splash,
            directory: None,
            dashboard: DashboardState::new(dark_mode),
            leave: LeaveScreen::new(today),
            toast: None,
            light_theme,
            dark_theme,
            timers: Timers::default(),
            armed_wakeup: None,
        }
    }

    /// Starts the splash countdown.
    pub fn start(&mut self, now: Duration) {
        self.timers.schedule(TimerKind::SplashDone, SPLASH_DURATION, now);
    }

    /// Palette for the current theme mode.
    #[must_use]
    pub const fn theme(&self) -> &Theme {
        if self.dashboard.dark_mode {
            &self.dark_theme
        } else {
            &self.light_theme
        }
    }

    /// How keystrokes should be interpreted right now.
    #[must_use]
    pub fn input_mode(&self) -> InputMode {
        match self.screen {
            Screen::Employees => match &self.directory {
                Some(directory) if directory.profile().is_visible() => InputMode::Overlay,
                Some(directory) if directory.focus == DirectoryFocus::SearchBox => {
                    InputMode::Typing(TextTarget::SearchBox)
                }
                _ => InputMode::Normal,
            },
            Screen::Leave if self.leave.form_open => InputMode::Typing(TextTarget::LeaveReason),
            _ => InputMode::Normal,
        }
    }

    /// Switches to `screen`, mounting or unmounting the directory as needed.
    ///
    /// Entering the dashboard for the first time starts its loading timer.
    /// Returns `false` if `screen` is already shown.
    pub fn navigate(&mut self, screen: Screen, now: Duration) -> bool {
        if self.screen == screen {
            return false;
        }

        tracing::debug!(from = ?self.screen, to = ?screen, "navigating");

        if let Some(directory) = self.directory.take() {
            directory.unmount();
        }

        match screen {
            Screen::Employees => {
                self.directory = Some(EmployeeDirectory::mount(self.roster.clone(), self.images.clone()));
            }
            Screen::Dashboard => {
                if self.dashboard.begin_loading() {
                    self.timers.schedule(TimerKind::DashboardLoaded, DASHBOARD_LOAD, now);
                }
            }
            Screen::Splash | Screen::Leave => {}
        }

        self.screen = screen;
        true
    }

    /// Shows `message`, replacing any current toast and restarting its timer.
    pub fn show_toast(&mut self, message: impl Into<String>, kind: ToastKind, now: Duration) {
        let message = message.into();
        tracing::debug!(%message, ?kind, "toast shown");
        self.toast = Some(Toast { message, kind });
        self.timers.schedule(TimerKind::ToastExpired, TOAST_DURATION, now);
    }

    /// Earliest deadline across application and directory timers.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        [
            self.timers.next_deadline(),
            self.directory.as_ref().and_then(EmployeeDirectory::next_deadline),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    /// Forgets the armed wake-up once the host has delivered a tick.
    pub fn disarm_wakeup(&mut self) {
        self.armed_wakeup = None;
    }

    /// Requests a host wake-up if the earliest deadline is not already covered.
    ///
    /// A wake-up is covered when one has been armed for the same deadline or an
    /// earlier one; the tick for it re-arms for whatever is still pending.
    pub fn arm_wakeup(&mut self, now: Duration) -> Option<Action> {
        let deadline = self.next_deadline()?;
        if self.armed_wakeup.is_some_and(|armed| armed <= deadline) {
            return None;
        }

        self.armed_wakeup = Some(deadline);
        let after = deadline.saturating_sub(now);
        tracing::trace!(?deadline, ?after, "wake-up armed");
        Some(Action::ScheduleWakeup { after })
    }

    /// Computes a renderable UI view model from current state and terminal dimensions.
    ///
    /// # Parameters
    ///
    /// * `rows` - Terminal height in character cells
    /// * `cols` - Terminal width in character cells
    ///
    /// # Windowing Algorithm
    ///
    /// 1. Calculate rows available to the employee table after UI chrome
    /// 2. Center the window on the selected row
    /// 3. Shift the window back when near the end so it stays full
    /// 4. Compute the selection index relative to the window
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let body = match self.screen {
            Screen::Splash => ScreenView::Splash(SplashView {
                title: "Rollcall".to_string(),
                subtitle: "Employee attendance at a glance".to_string(),
            }),
            Screen::Dashboard => ScreenView::Dashboard(self.compute_dashboard()),
            Screen::Employees => match &self.directory {
                Some(directory) => ScreenView::Employees(Self::compute_employees(directory, rows, cols)),
                None => ScreenView::Splash(SplashView {
                    title: "Employees".to_string(),
                    subtitle: "Loading".to_string(),
                }),
            },
            Screen::Leave => ScreenView::Leave(self.compute_leave()),
        };

        UIViewModel {
            tab_bar: self.compute_tab_bar(),
            body,
            footer: self.compute_footer(),
            toast: self.toast.as_ref().map(|toast| ToastInfo {
                message: toast.message.clone(),
                is_error: toast.kind == ToastKind::Error,
            }),
        }
    }

    fn compute_tab_bar(&self) -> Option<TabBarInfo> {
        if self.screen == Screen::Splash {
            return None;
        }

        let tabs = Screen::TABS
            .iter()
            .map(|screen| TabInfo {
                title: screen.title().to_string(),
                is_active: *screen == self.screen,
            })
            .collect();

        Some(TabBarInfo { tabs })
    }

    fn compute_dashboard(&self) -> DashboardView {
        let DashboardPhase::Ready(summary) = self.dashboard.phase else {
            return DashboardView {
                loading: true,
                dark_mode: self.dashboard.dark_mode,
                rows: vec![],
                total: self.roster.len(),
                shifts: vec![],
                pending: vec![],
            };
        };

        let rows = AttendanceStatus::ALL
            .iter()
            .map(|status| SummaryRow {
                status: *status,
                count: summary.attendance.count(*status),
                fraction: summary.attendance.fraction(*status),
            })
            .collect();

        let shifts = Shift::ALL
            .iter()
            .map(|shift| (*shift, summary.shifts.count(*shift)))
            .collect();

        let pending = vec![
            PendingRow {
                label: "Leave".to_string(),
                count: self.leave.pending_requests(),
            },
            PendingRow {
                label: "Shift Change".to_string(),
                count: summary.shift_changes,
            },
        ];

        DashboardView {
            loading: false,
            dark_mode: self.dashboard.dark_mode,
            rows,
            total: summary.attendance.total,
            shifts,
            pending,
        }
    }

    fn compute_employees(directory: &EmployeeDirectory, rows: usize, cols: usize) -> EmployeesView {
        let search = directory.search();
        let results = search.visible_results();

        let search_bar = SearchBarInfo {
            query: search.query_text().to_string(),
            focused: directory.focus == DirectoryFocus::SearchBox,
            pending: search.is_debouncing(),
        };

        let chips = AttendanceStatus::ALL
            .iter()
            .zip(['1', '2', '3'])
            .map(|(status, key)| ChipInfo {
                status: *status,
                key,
                is_active: search.status_filter() == Some(*status),
            })
            .collect();

        let profile = directory
            .profile_employee()
            .zip(directory.profile().selected_image())
            .map(|(employee, image)| ProfileOverlay {
                employee_name: employee.name.clone(),
                image: image.to_string(),
            });

        if results.is_empty() {
            return EmployeesView {
                search_bar,
                chips,
                display_items: vec![],
                selected_index: 0,
                result_count: 0,
                refreshing: directory.is_refreshing(),
                empty_state: Some(EmptyState {
                    message: "No employees found".to_string(),
                    subtitle: "Edit the search or press 0 to clear the status filter".to_string(),
                }),
                profile,
            };
        }

        let available_rows = Self::calculate_available_rows(rows);

        let mut visible_start = directory.selected_index.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(results.len());

        let actual_count = visible_end - visible_start;
        if actual_count < available_rows && results.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let display_items = results[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, employee)| {
                let is_selected = visible_start + relative_idx == directory.selected_index;
                Self::compute_display_item(employee, is_selected, search.applied_query(), cols)
            })
            .collect();

        EmployeesView {
            search_bar,
            chips,
            display_items,
            selected_index: directory.selected_index.saturating_sub(visible_start),
            result_count: results.len(),
            refreshing: directory.is_refreshing(),
            empty_state: None,
            profile,
        }
    }

    /// Builds one table row, truncating long names to the name column.
    fn compute_display_item(employee: &Employee, is_selected: bool, query: &str, cols: usize) -> DisplayItem {
        const MIN_NAME_WIDTH: usize = 12;
        const FIXED_COLUMNS: usize = 32;

        let name_width = cols.saturating_sub(FIXED_COLUMNS).max(MIN_NAME_WIDTH);
        let name = truncate_chars(&employee.name, name_width);

        // Highlights never cover the "..." of a truncated name.
        let shown_chars = if employee.name.chars().count() > name_width {
            name_width.saturating_sub(ELLIPSIS.len())
        } else {
            name_width
        };
        let highlight_ranges = match_range(&employee.name, query)
            .map(|(start, end)| (start, end.min(shown_chars)))
            .filter(|(start, end)| start < end)
            .into_iter()
            .collect();

        DisplayItem {
            name,
            department: truncate_chars(&employee.department, 16),
            status: employee.status,
            is_selected,
            highlight_ranges,
        }
    }

    fn compute_leave(&self) -> LeaveView {
        let form = self.leave.form_open.then(|| LeaveFormView {
            date: self.leave.date.format("%a %d %b %Y").to_string(),
            reason: self.leave.reason.clone(),
            submitting: self.leave.is_submitting(),
            invalid: self.leave.validation_failed,
        });

        LeaveView {
            form,
            last_submitted: self
                .leave
                .last_submitted()
                .map(|request| format!("{}: {}", request.date.format("%d %b %Y"), request.reason)),
        }
    }

    /// Keybinding hints for the current screen and input mode.
    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match (self.screen, self.input_mode()) {
            (Screen::Splash, _) => "q: quit",
            (_, InputMode::Overlay) => "Esc/Enter: close profile",
            (Screen::Employees, InputMode::Typing(_)) => "Type to search  Backspace: delete  Esc/Enter: done",
            (Screen::Employees, InputMode::Normal) => {
                "j/k: navigate  /: search  1/2/3: status  0: clear  Enter: profile  r: refresh  Tab: next  q: quit"
            }
            (Screen::Dashboard, _) => "t: toggle dark mode  Tab/Shift+Tab: switch tab  q: quit",
            (Screen::Leave, InputMode::Typing(_)) => "Type reason  ←/→: date  Enter: submit  Esc: close",
            (Screen::Leave, InputMode::Normal) => "n: new request  Tab/Shift+Tab: switch tab  q: quit",
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    /// Rows left for table rows after tab bar (2), search box (3), chips (1),
    /// table header (1) and footer (2).
    const fn calculate_available_rows(total_rows: usize) -> usize {
        let rows = total_rows.saturating_sub(9);
        if rows == 0 {
            1
        } else {
            rows
        }
    }
}

const ELLIPSIS: &str = "...";

/// Truncates to `max` characters, ending with `...` when shortened.
fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let keep = max.saturating_sub(ELLIPSIS.len());
    let mut truncated: String = text.chars().take(keep).collect();
    truncated.push_str(ELLIPSIS);
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn employees_view(state: &AppState, rows: usize) -> EmployeesView {
        match state.compute_viewmodel(rows, 80).body {
            ScreenView::Employees(view) => view,
            other => panic!("expected employees view, got {other:?}"),
        }
    }

    #[test]
    fn navigation_mounts_and_unmounts_directory() {
        let mut state = AppState::default();
        assert!(state.navigate(Screen::Employees, ms(0)));
        assert!(state.directory.is_some());
        assert!(!state.navigate(Screen::Employees, ms(10)));

        state.navigate(Screen::Leave, ms(20));
        assert!(state.directory.is_none());
    }

    #[test]
    fn dashboard_loads_once() {
        let mut state = AppState::default();
        state.navigate(Screen::Dashboard, ms(0));
        assert!(state.timers.is_pending(TimerKind::DashboardLoaded));
        assert_eq!(state.next_deadline(), Some(DASHBOARD_LOAD));

        state.timers.cancel(TimerKind::DashboardLoaded);
        state.navigate(Screen::Leave, ms(10));
        state.navigate(Screen::Dashboard, ms(20));
        assert!(!state.timers.is_pending(TimerKind::DashboardLoaded));
    }

    #[test]
    fn wakeup_is_armed_once_per_deadline() {
        let mut state = AppState::default();
        state.start(ms(0));

        assert_eq!(
            state.arm_wakeup(ms(0)),
            Some(Action::ScheduleWakeup { after: SPLASH_DURATION })
        );
        assert_eq!(state.arm_wakeup(ms(5)), None);

        state.show_toast("hello", ToastKind::Info, ms(0));
        assert_eq!(state.arm_wakeup(ms(0)), None);

        state.disarm_wakeup();
        assert_eq!(
            state.arm_wakeup(ms(500)),
            Some(Action::ScheduleWakeup { after: ms(1_500) })
        );
    }

    #[test]
    fn earlier_deadline_rearms() {
        let mut state = AppState::default();
        state.start(ms(0));
        state.arm_wakeup(ms(0));

        state.navigate(Screen::Employees, ms(100));
        if let Some(directory) = state.directory.as_mut() {
            directory.type_char('a', ms(100));
        }

        assert_eq!(
            state.arm_wakeup(ms(100)),
            Some(Action::ScheduleWakeup { after: ms(300) })
        );
    }

    #[test]
    fn input_mode_follows_focus_and_overlay() {
        let mut state = AppState::default();
        state.navigate(Screen::Employees, ms(0));
        assert_eq!(state.input_mode(), InputMode::Normal);

        let directory = state.directory.as_mut().unwrap();
        directory.focus = DirectoryFocus::SearchBox;
        assert_eq!(state.input_mode(), InputMode::Typing(TextTarget::SearchBox));

        let directory = state.directory.as_mut().unwrap();
        directory.focus = DirectoryFocus::List;
        directory.open_selected_profile();
        assert_eq!(state.input_mode(), InputMode::Overlay);

        state.navigate(Screen::Leave, ms(0));
        state.leave.open_form();
        assert_eq!(state.input_mode(), InputMode::Typing(TextTarget::LeaveReason));
    }

    #[test]
    fn window_keeps_selection_visible() {
        let employees = (1..=30)
            .map(|id| Employee::new(id, format!("Employee {id}"), "Ops", AttendanceStatus::Present))
            .collect();
        let mut state = AppState::default();
        state.roster = Roster::new(employees).unwrap();
        state.navigate(Screen::Employees, ms(0));

        let directory = state.directory.as_mut().unwrap();
        for _ in 0..29 {
            directory.move_selection_down();
        }

        let view = employees_view(&state, 19);
        assert_eq!(view.display_items.len(), 10);
        assert_eq!(view.result_count, 30);
        assert_eq!(view.selected_index, 9);
        assert!(view.display_items[9].is_selected);
        assert_eq!(view.display_items[9].name, "Employee 30");
    }

    #[test]
    fn applied_query_is_highlighted() {
        let mut state = AppState::default();
        state.navigate(Screen::Employees, ms(0));
        let directory = state.directory.as_mut().unwrap();
        directory.type_char('k', ms(0));
        directory.type_char('r', ms(0));
        directory.on_tick(ms(300));

        let view = employees_view(&state, 24);
        assert_eq!(view.display_items.len(), 1);
        assert_eq!(view.display_items[0].name, "Krishna");
        assert_eq!(view.display_items[0].highlight_ranges, vec![(0, 2)]);
        assert!(view.empty_state.is_none());
    }

    #[test]
    fn empty_results_show_empty_state() {
        let mut state = AppState::default();
        state.navigate(Screen::Employees, ms(0));
        let directory = state.directory.as_mut().unwrap();
        directory.type_char('z', ms(0));
        directory.type_char('z', ms(0));
        directory.on_tick(ms(300));

        let view = employees_view(&state, 24);
        assert!(view.display_items.is_empty());
        assert!(view.empty_state.is_some());
    }

    #[test]
    fn theme_follows_dark_mode() {
        let mut state = AppState::default();
        assert_eq!(state.theme().name, "catppuccin-latte");
        state.dashboard.toggle_dark_mode();
        assert_eq!(state.theme().name, "catppuccin-mocha");
    }

    #[test]
    fn highlight_stops_before_the_ellipsis() {
        let employee = Employee::new(9, "Abcdefghijklmnopqrstuvwxyz", "IT", AttendanceStatus::Present);

        let hidden = AppState::compute_display_item(&employee, false, "jklmn", 44);
        assert_eq!(hidden.name, "Abcdefghi...");
        assert!(hidden.highlight_ranges.is_empty());

        let partly_shown = AppState::compute_display_item(&employee, false, "hij", 44);
        assert_eq!(partly_shown.highlight_ranges, vec![(7, 9)]);

        let shown = AppState::compute_display_item(&employee, false, "cde", 44);
        assert_eq!(shown.highlight_ranges, vec![(2, 5)]);
    }

    #[test]
    fn truncation_counts_characters() {
        assert_eq!(truncate_chars("Prashnat", 20), "Prashnat");
        assert_eq!(truncate_chars("Ångström Éclair", 8), "Ångst...");
    }
}
