//! Centered bordered box used by the profile overlay and the leave form.

use crate::ui::helpers::Frame;
use crate::ui::theme::Theme;

/// One line of modal content with an optional hex color override.
pub type ModalLine<'a> = (String, Option<&'a str>);

/// Draws a box of `lines` centered in the screen and returns its top row.
///
/// The first line is the title and is drawn bold. Lines longer than the box
/// are cut.
pub fn render_modal(frame: &mut Frame, lines: &[ModalLine<'_>], theme: &Theme, rows: usize, cols: usize) -> usize {
    let content_width = lines.iter().map(|(text, _)| text.chars().count()).max().unwrap_or(0);
    let inner_width = (content_width + 2).min(cols.saturating_sub(4));
    let height = lines.len() + 2;
    let top = (rows.saturating_sub(height) / 2).max(1);
    let left = (cols.saturating_sub(inner_width + 2) / 2).max(1);
    let border = Theme::fg(&theme.colors.search_bar_border);

    frame.position_cursor(top, left);
    frame.print(&border);
    frame.print(&format!("╭{}╮", "─".repeat(inner_width)));

    for (index, (text, color)) in lines.iter().enumerate() {
        let visible: String = text.chars().take(inner_width.saturating_sub(2)).collect();
        frame.position_cursor(top + 1 + index, left);
        frame.print(&border);
        frame.print("│ ");
        frame.print(&Theme::fg(color.unwrap_or(&theme.colors.text_normal)));
        if index == 0 {
            frame.print(Theme::bold());
        }
        frame.print_padded(&visible, inner_width.saturating_sub(2));
        frame.print(Theme::reset());
        frame.print(&border);
        frame.print(" │");
    }

    frame.position_cursor(top + height - 1, left);
    frame.print(&format!("╰{}╯", "─".repeat(inner_width)));
    frame.print(Theme::reset());

    top
}
