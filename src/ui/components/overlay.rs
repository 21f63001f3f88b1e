//! Profile overlay renderer.

use super::modal::render_modal;
use crate::ui::helpers::Frame;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ProfileOverlay;

pub fn render_profile_overlay(frame: &mut Frame, profile: &ProfileOverlay, theme: &Theme, rows: usize, cols: usize) {
    let lines = [
        (profile.employee_name.clone(), None),
        (String::new(), None),
        (format!("Photo: {}", profile.image), None),
        (String::new(), None),
        ("Esc/Enter: close".to_string(), Some(theme.colors.text_dim.as_str())),
    ];
    render_modal(frame, &lines, theme, rows, cols);
}
