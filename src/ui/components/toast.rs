//! Toast renderer.

use crate::ui::helpers::Frame;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ToastInfo;

/// Draws the toast right-aligned on `row`.
pub fn render_toast(frame: &mut Frame, row: usize, toast: &ToastInfo, theme: &Theme, cols: usize) {
    let label = format!(" {} ", toast.message);
    let width = label.chars().count();
    let col = cols.saturating_sub(width + 1).max(1);

    frame.position_cursor(row, col);
    frame.print(Theme::bold());
    if toast.is_error {
        frame.print(&Theme::fg(&theme.colors.toast_fg));
        frame.print(&Theme::bg(&theme.colors.error_fg));
    } else {
        frame.print(&Theme::fg(&theme.colors.toast_fg));
        frame.print(&Theme::bg(&theme.colors.toast_bg));
    }
    frame.print(&label);
    frame.print(Theme::reset());
}
