//! Employee table renderer.
//!
//! Three columns: NAME (flexible), DEPARTMENT and STATUS (fixed). Selected
//! rows use the selection colors; the search match inside a name is
//! highlighted on the other rows.

use crate::ui::helpers::Frame;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

const DEPARTMENT_WIDTH: usize = 18;
const STATUS_WIDTH: usize = 10;
const MIN_NAME_WIDTH: usize = 12;

fn name_width(cols: usize) -> usize {
    cols.saturating_sub(DEPARTMENT_WIDTH + STATUS_WIDTH + 4).max(MIN_NAME_WIDTH)
}

pub fn render_table_headers(frame: &mut Frame, row: usize, theme: &Theme, cols: usize) -> usize {
    frame.position_cursor(row, 1);
    frame.print(Theme::bold());
    frame.print(&Theme::fg(&theme.colors.header_fg));
    frame.print("  ");
    frame.print_padded("NAME", name_width(cols));
    frame.print_padded("DEPARTMENT", DEPARTMENT_WIDTH);
    frame.print("STATUS");
    frame.print(Theme::reset());
    row + 1
}

pub fn render_table_rows(frame: &mut Frame, row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_table_row(frame, current_row, item, theme, cols);
    }
    current_row
}

fn render_table_row(frame: &mut Frame, row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    frame.position_cursor(row, 1);

    let base = if item.is_selected {
        format!(
            "{}{}",
            Theme::fg(&theme.colors.selection_fg),
            Theme::bg(&theme.colors.selection_bg)
        )
    } else {
        Theme::fg(&theme.colors.text_normal)
    };
    frame.print(&base);
    frame.print(if item.is_selected { "> " } else { "  " });

    let width = name_width(cols);
    if item.is_selected {
        frame.print(&item.name);
    } else {
        frame.render_highlighted_text(&item.name, &item.highlight_ranges, theme, &base);
    }
    frame.spaces(width.saturating_sub(item.name.chars().count()));

    frame.print_padded(&item.department, DEPARTMENT_WIDTH);

    if !item.is_selected {
        frame.print(&Theme::fg(theme.colors.status_fg(item.status)));
    }
    frame.print_padded(item.status.label(), STATUS_WIDTH);

    let line_len = 2 + width + DEPARTMENT_WIDTH + STATUS_WIDTH;
    frame.spaces(cols.saturating_sub(line_len));
    frame.print(Theme::reset());
    row + 1
}
