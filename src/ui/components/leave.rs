//! Leave screen renderer.

use super::modal::render_modal;
use crate::ui::helpers::Frame;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{LeaveFormView, LeaveView};

pub fn render_leave(frame: &mut Frame, row: usize, leave: &LeaveView, theme: &Theme, cols: usize) -> usize {
    let mut current_row = row + 1;

    frame.position_cursor(current_row, 3);
    frame.print(Theme::bold());
    frame.print(&Theme::fg(&theme.colors.header_fg));
    frame.print("Leave Requests");
    frame.print(Theme::reset());
    current_row += 2;

    frame.position_cursor(current_row, 3);
    frame.print(&Theme::fg(&theme.colors.text_normal));
    match &leave.last_submitted {
        Some(summary) => {
            let line = format!("Last request: {summary}");
            frame.print(&line.chars().take(cols.saturating_sub(4)).collect::<String>());
        }
        None => frame.print("No leave requested yet. Press n to apply."),
    }
    frame.print(Theme::reset());

    current_row + 1
}

/// Draws the leave form as a modal box.
pub fn render_leave_form(frame: &mut Frame, form: &LeaveFormView, theme: &Theme, rows: usize, cols: usize) {
    let (status, status_color) = if form.submitting {
        ("Submitting…", None)
    } else if form.invalid {
        ("A reason is required", Some(theme.colors.error_fg.as_str()))
    } else {
        ("Enter: submit  Esc: close", None)
    };

    let lines = [
        ("Apply for Leave".to_string(), None),
        (String::new(), None),
        (format!("Date:   ◀ {} ▶", form.date), None),
        (format!("Reason: {}▏", form.reason), None),
        (String::new(), None),
        (status.to_string(), status_color),
    ];

    render_modal(frame, &lines, theme, rows, cols);
}
