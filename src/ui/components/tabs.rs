//! Tab bar component renderer.

use crate::ui::helpers::Frame;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::TabBarInfo;

/// Renders the tabs left to right; the active tab is drawn as a filled pill.
pub fn render_tab_bar(frame: &mut Frame, row: usize, tabs: &TabBarInfo, theme: &Theme, cols: usize) -> usize {
    frame.position_cursor(row, 1);
    if let Some(bg) = &theme.colors.header_bg {
        frame.print(&Theme::bg(bg));
    }

    let mut used = 1;
    frame.print(" ");
    for tab in &tabs.tabs {
        let label = format!(" {} ", tab.title);
        if tab.is_active {
            frame.print(Theme::bold());
            frame.print(&Theme::fg(&theme.colors.tab_active_fg));
            frame.print(&Theme::bg(&theme.colors.tab_active_bg));
            frame.print(&label);
            frame.print(Theme::reset());
            if let Some(bg) = &theme.colors.header_bg {
                frame.print(&Theme::bg(bg));
            }
        } else {
            frame.print(&Theme::fg(&theme.colors.header_fg));
            frame.print(&label);
        }
        frame.print(" ");
        used += label.chars().count() + 1;
    }

    frame.spaces(cols.saturating_sub(used));
    frame.print(Theme::reset());
    row + 1
}
