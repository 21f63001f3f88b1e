//! Status chip row renderer.

use crate::ui::helpers::Frame;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ChipInfo;

/// Renders `[1] Present  [2] Absent  [3] Late`, filling the active chip.
pub fn render_chips(frame: &mut Frame, row: usize, chips: &[ChipInfo], theme: &Theme) -> usize {
    frame.position_cursor(row, 1);
    frame.print("  ");

    for chip in chips {
        let label = format!(" {} {} ", chip.key, chip.status);
        if chip.is_active {
            frame.print(Theme::bold());
            frame.print(&Theme::fg(&theme.colors.selection_fg));
            frame.print(&Theme::bg(&theme.colors.selection_bg));
        } else {
            frame.print(&Theme::fg(theme.colors.status_fg(chip.status)));
        }
        frame.print(&label);
        frame.print(Theme::reset());
        frame.print(" ");
    }

    if chips.iter().any(|chip| chip.is_active) {
        frame.print(&Theme::fg(&theme.colors.text_dim));
        frame.print(" 0 clear");
        frame.print(Theme::reset());
    }

    row + 1
}
