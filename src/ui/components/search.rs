//! Search box component renderer.

use crate::ui::helpers::Frame;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

const SEARCH_BOX_MARGIN: usize = 2;

/// Renders the three-row search box.
///
/// The border uses the accent color while the box has focus. A trailing `…`
/// marks text still waiting for its debounce window.
pub fn render_search_bar(frame: &mut Frame, row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border = if search.focused {
        Theme::fg(&theme.colors.search_bar_border)
    } else {
        Theme::fg(&theme.colors.border)
    };

    frame.position_cursor(row, 1);
    frame.spaces(SEARCH_BOX_MARGIN);
    frame.print(&border);
    frame.print(&format!("┌{}┐", "─".repeat(inner_width)));
    frame.print(Theme::reset());

    let cursor = if search.focused { "▏" } else { "" };
    let pending = if search.pending { " …" } else { "" };
    let search_text = format!(" Search: {}{cursor}{pending}", search.query);

    frame.position_cursor(row + 1, 1);
    frame.spaces(SEARCH_BOX_MARGIN);
    frame.print(&border);
    frame.print("│");
    frame.print(&Theme::fg(&theme.colors.text_normal));
    frame.print_padded(&search_text, inner_width);
    frame.print(&border);
    frame.print("│");
    frame.print(Theme::reset());

    frame.position_cursor(row + 2, 1);
    frame.spaces(SEARCH_BOX_MARGIN);
    frame.print(&border);
    frame.print(&format!("└{}┘", "─".repeat(inner_width)));
    frame.print(Theme::reset());

    row + 3
}
