//! Composable UI component renderers.
//!
//! Each component draws one part of the interface into a [`Frame`] and, where
//! it occupies whole rows, returns the next free row.
//!
//! # Components
//!
//! - [`tabs`]: Tab bar
//! - [`footer`]: Keybinding hints
//! - [`search`]: Search input box
//! - [`chips`]: Status filter chips
//! - [`table`]: Employee list (NAME, DEPARTMENT, STATUS)
//! - [`empty`]: No-results message
//! - [`dashboard`]: Attendance summary with progress bars
//! - [`leave`]: Leave screen and leave form
//! - [`overlay`]: Profile overlay
//! - [`modal`]: Centered box shared by overlays
//! - [`toast`]: Transient message
//! - [`splash`]: Welcome screen
//!
//! # Layout
//!
//! ```text
//! row 1        tab bar
//! row 2        rule
//! rows 3..     screen body (search, chips, table | dashboard | leave)
//! rows-1       rule (toast drawn over it)
//! rows         footer
//! ```

pub mod chips;
pub mod dashboard;
pub mod empty;
pub mod footer;
pub mod leave;
pub mod modal;
pub mod overlay;
pub mod search;
pub mod splash;
pub mod table;
pub mod tabs;
pub mod toast;

use crate::ui::helpers::Frame;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{EmployeesView, ScreenView, UIViewModel};

/// Lays out and draws a complete view model.
pub fn render_layout(frame: &mut Frame, vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    let mut current_row = 1;

    if let Some(tab_bar) = &vm.tab_bar {
        current_row = tabs::render_tab_bar(frame, current_row, tab_bar, theme, cols);
        current_row = frame.rule(current_row, &theme.colors.border, cols);
    }

    match &vm.body {
        ScreenView::Splash(splash) => splash::render_splash(frame, splash, theme, rows, cols),
        ScreenView::Dashboard(dashboard) => {
            dashboard::render_dashboard(frame, current_row, dashboard, theme, rows, cols);
        }
        ScreenView::Employees(employees) => render_employees(frame, current_row, employees, theme, rows, cols),
        ScreenView::Leave(view) => {
            leave::render_leave(frame, current_row, view, theme, cols);
            if let Some(form) = &view.form {
                leave::render_leave_form(frame, form, theme, rows, cols);
            }
        }
    }

    let footer_row = rows.max(2);
    let rule_row = footer_row - 1;
    frame.rule(rule_row, &theme.colors.border, cols);
    footer::render_footer(frame, footer_row, &vm.footer, theme, cols);

    if let Some(toast) = &vm.toast {
        toast::render_toast(frame, rule_row, toast, theme, cols);
    }
}

fn render_employees(frame: &mut Frame, row: usize, view: &EmployeesView, theme: &Theme, rows: usize, cols: usize) {
    let mut current_row = search::render_search_bar(frame, row, &view.search_bar, theme, cols);
    current_row = chips::render_chips(frame, current_row, &view.chips, theme);

    if view.refreshing {
        frame.position_cursor(current_row - 1, cols.saturating_sub(12).max(1));
        frame.print(&Theme::fg(&theme.colors.text_dim));
        frame.print("Refreshing…");
        frame.print(Theme::reset());
    }

    if let Some(empty) = &view.empty_state {
        empty::render_empty_state(frame, current_row, empty, theme, cols);
    } else {
        current_row = table::render_table_headers(frame, current_row, theme, cols);
        table::render_table_rows(frame, current_row, &view.display_items, theme, cols);
    }

    if let Some(profile) = &view.profile {
        overlay::render_profile_overlay(frame, profile, theme, rows, cols);
    }
}
