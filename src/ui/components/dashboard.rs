//! Dashboard renderer: per-status counts with progress bars, followed by the
//! upcoming shifts and pending requests cards.

use crate::ui::helpers::Frame;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DashboardView;

const LABEL_WIDTH: usize = 10;
const MAX_BAR_WIDTH: usize = 40;

/// Number of filled cells for `fraction` of `width`, rounded to nearest.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn filled_cells(fraction: f64, width: usize) -> usize {
    let cells = (fraction.clamp(0.0, 1.0) * width as f64).round() as usize;
    cells.min(width)
}

/// `"1 Employee"`, `"3 Employees"`.
fn counted(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

/// Draws a titled card of `label: value` lines. Returns the next free row, or
/// `None` when the card does not fit above `bottom`.
fn render_card(
    frame: &mut Frame,
    row: usize,
    title: &str,
    lines: &[(String, String)],
    theme: &Theme,
    bottom: usize,
) -> Option<usize> {
    if row + lines.len() >= bottom {
        return None;
    }

    frame.position_cursor(row, 3);
    frame.print(Theme::bold());
    frame.print(&Theme::fg(&theme.colors.header_fg));
    frame.print(title);
    frame.print(Theme::reset());

    let mut current_row = row + 1;
    for (label, value) in lines {
        frame.position_cursor(current_row, 5);
        frame.print(&Theme::fg(&theme.colors.text_normal));
        frame.print(&format!("{label}: {value}"));
        frame.print(Theme::reset());
        current_row += 1;
    }

    Some(current_row + 1)
}

/// Draws the dashboard body starting at `row`; nothing is drawn at or below
/// `rows - 1`, which belongs to the footer.
pub fn render_dashboard(
    frame: &mut Frame,
    row: usize,
    dashboard: &DashboardView,
    theme: &Theme,
    rows: usize,
    cols: usize,
) -> usize {
    let mut current_row = row + 1;

    frame.position_cursor(current_row, 3);
    frame.print(Theme::bold());
    frame.print(&Theme::fg(&theme.colors.header_fg));
    frame.print("Today's Attendance");
    frame.print(Theme::reset());
    current_row += 2;

    if dashboard.loading {
        frame.position_cursor(current_row, 3);
        frame.print(&Theme::fg(&theme.colors.text_dim));
        frame.print("Loading attendance…");
        frame.print(Theme::reset());
        return current_row + 1;
    }

    let bar_width = cols.saturating_sub(LABEL_WIDTH + 16).min(MAX_BAR_WIDTH);

    for summary in &dashboard.rows {
        let color = Theme::fg(theme.colors.status_fg(summary.status));
        let filled = filled_cells(summary.fraction, bar_width);

        frame.position_cursor(current_row, 3);
        frame.print(&color);
        frame.print_padded(summary.status.label(), LABEL_WIDTH);
        frame.print(&"█".repeat(filled));
        frame.print(&Theme::fg(&theme.colors.border));
        frame.print(&"░".repeat(bar_width - filled));
        frame.print(Theme::reset());
        frame.print(&format!(" {}/{}", summary.count, dashboard.total));
        current_row += 1;
    }

    current_row += 1;
    let bottom = rows.saturating_sub(1);

    let shifts: Vec<(String, String)> = dashboard
        .shifts
        .iter()
        .map(|(shift, count)| (shift.label().to_string(), counted(*count, "Employee")))
        .collect();
    let pending: Vec<(String, String)> = dashboard
        .pending
        .iter()
        .map(|row| (row.label.clone(), counted(row.count, "Request")))
        .collect();

    for (title, lines) in [("Upcoming Shift Details", shifts), ("Pending Requests", pending)] {
        match render_card(frame, current_row, title, &lines, theme, bottom) {
            Some(next) => current_row = next,
            None => return current_row,
        }
    }

    if current_row < bottom {
        frame.position_cursor(current_row, 3);
        frame.print(&Theme::fg(&theme.colors.text_dim));
        frame.print(if dashboard.dark_mode { "Dark mode: on" } else { "Dark mode: off" });
        frame.print(Theme::reset());
    }

    current_row + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_are_pluralized() {
        assert_eq!(counted(1, "Request"), "1 Request");
        assert_eq!(counted(0, "Employee"), "0 Employees");
        assert_eq!(counted(5, "Employee"), "5 Employees");
    }

    #[test]
    fn card_is_skipped_when_it_does_not_fit() {
        let theme = Theme::default();
        let mut frame = Frame::new();
        let lines = vec![("Leave".to_string(), "2 Requests".to_string())];

        assert_eq!(render_card(&mut frame, 10, "Pending Requests", &lines, &theme, 11), None);
        assert!(frame.as_str().is_empty());

        assert_eq!(render_card(&mut frame, 10, "Pending Requests", &lines, &theme, 20), Some(13));
        assert!(frame.as_str().contains("Leave: 2 Requests"));
    }

    #[test]
    fn bars_round_to_nearest_cell() {
        assert_eq!(filled_cells(0.5, 40), 20);
        assert_eq!(filled_cells(0.26, 10), 3);
        assert_eq!(filled_cells(1.5, 10), 10);
        assert_eq!(filled_cells(0.0, 0), 0);
    }
}
