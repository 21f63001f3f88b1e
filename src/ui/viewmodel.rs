//! View model types representing renderable UI state.
//!
//! View models are computed from `AppState` by `AppState::compute_viewmodel()`
//! and consumed by the renderer. They hold display-ready data only: formatted
//! dates, truncated names, highlight ranges and selection flags.
//!
//! # Example
//!
//! ```rust
//! use rollcall::app::AppState;
//! use rollcall::ui::viewmodel::ScreenView;
//!
//! let state = AppState::default();
//! let vm = state.compute_viewmodel(24, 80);
//! assert!(matches!(vm.body, ScreenView::Splash(_)));
//! ```

use crate::domain::{AttendanceStatus, Shift};

/// Complete UI view model for rendering.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Tab bar across the top; `None` on the splash screen.
    pub tab_bar: Option<TabBarInfo>,

    /// Content of the active screen.
    pub body: ScreenView,

    /// Keybinding hints for the bottom line.
    pub footer: FooterInfo,

    /// Transient message, if one is showing.
    pub toast: Option<ToastInfo>,
}

/// Per-screen content.
#[derive(Debug, Clone)]
pub enum ScreenView {
    Splash(SplashView),
    Dashboard(DashboardView),
    Employees(EmployeesView),
    Leave(LeaveView),
}

/// Tab bar entries in display order.
#[derive(Debug, Clone)]
pub struct TabBarInfo {
    pub tabs: Vec<TabInfo>,
}

#[derive(Debug, Clone)]
pub struct TabInfo {
    pub title: String,
    pub is_active: bool,
}

#[derive(Debug, Clone)]
pub struct SplashView {
    pub title: String,
    pub subtitle: String,
}

/// Dashboard content.
#[derive(Debug, Clone)]
pub struct DashboardView {
    /// `true` while the summary is still loading.
    pub loading: bool,
    pub dark_mode: bool,
    /// One row per status; empty while loading.
    pub rows: Vec<SummaryRow>,
    pub total: usize,
    /// Employees per upcoming shift; empty while loading.
    pub shifts: Vec<(Shift, usize)>,
    /// Pending request counts by kind; empty while loading.
    pub pending: Vec<PendingRow>,
}

/// One line of the pending requests card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRow {
    pub label: String,
    pub count: usize,
}

/// One attendance summary line with its progress bar fill.
#[derive(Debug, Clone)]
pub struct SummaryRow {
    pub status: AttendanceStatus,
    pub count: usize,
    /// Bar fill in `0.0..=1.0`.
    pub fraction: f64,
}

/// Employee directory content.
#[derive(Debug, Clone)]
pub struct EmployeesView {
    pub search_bar: SearchBarInfo,
    pub chips: Vec<ChipInfo>,
    /// Rows in the visible window.
    pub display_items: Vec<DisplayItem>,
    /// Index of the selected row within `display_items`.
    pub selected_index: usize,
    /// Total number of matching employees (not just the visible window).
    pub result_count: usize,
    pub refreshing: bool,
    /// Shown instead of the table when nothing matches.
    pub empty_state: Option<EmptyState>,
    /// Profile overlay, when open.
    pub profile: Option<ProfileOverlay>,
}

/// Display information for a single employee row.
#[derive(Debug, Clone)]
pub struct DisplayItem {
    pub name: String,
    pub department: String,
    pub status: AttendanceStatus,
    pub is_selected: bool,

    /// Character ranges of `name` to highlight (search match).
    ///
    /// Each tuple is `(start_index, end_index)` in character indices.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Search box display information.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Raw text as typed.
    pub query: String,
    /// Whether keystrokes currently go to the box.
    pub focused: bool,
    /// Whether a text change is still waiting for its debounce window.
    pub pending: bool,
}

/// Status chip display information.
#[derive(Debug, Clone)]
pub struct ChipInfo {
    pub status: AttendanceStatus,
    /// Key that selects the chip.
    pub key: char,
    pub is_active: bool,
}

/// Empty state message display information.
#[derive(Debug, Clone)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// Profile overlay content.
#[derive(Debug, Clone)]
pub struct ProfileOverlay {
    pub employee_name: String,
    pub image: String,
}

/// Leave screen content.
#[derive(Debug, Clone)]
pub struct LeaveView {
    pub form: Option<LeaveFormView>,
    /// Summary of the last submitted request.
    pub last_submitted: Option<String>,
}

/// Leave form modal content.
#[derive(Debug, Clone)]
pub struct LeaveFormView {
    pub date: String,
    pub reason: String,
    pub submitting: bool,
    pub invalid: bool,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    pub keybindings: String,
}

/// Toast display information.
#[derive(Debug, Clone)]
pub struct ToastInfo {
    pub message: String,
    pub is_error: bool,
}
