//! Empty result message renderer.

use crate::ui::helpers::{centered, Frame};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

pub fn render_empty_state(frame: &mut Frame, row: usize, empty: &EmptyState, theme: &Theme, cols: usize) -> usize {
    frame.position_cursor(row + 1, 1);
    frame.print(Theme::bold());
    frame.print(&Theme::fg(&theme.colors.empty_state_fg));
    frame.print(&centered(&empty.message, cols));
    frame.print(Theme::reset());

    frame.position_cursor(row + 2, 1);
    frame.print(&Theme::fg(&theme.colors.text_dim));
    frame.print(&centered(&empty.subtitle, cols));
    frame.print(Theme::reset());

    row + 3
}
