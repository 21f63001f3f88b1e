//! Footer component renderer.

use crate::ui::helpers::Frame;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders keybinding hints in dim text, truncated to the terminal width.
pub fn render_footer(frame: &mut Frame, row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let text: String = footer.keybindings.chars().take(cols).collect();

    frame.position_cursor(row, 1);
    frame.print(Theme::dim());
    frame.print(&Theme::fg(&theme.colors.text_dim));
    frame.print_padded(&text, cols);
    frame.print(Theme::reset());
    row + 1
}
