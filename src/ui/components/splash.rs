//! Splash screen renderer.

use crate::ui::helpers::{centered, Frame};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SplashView;

pub fn render_splash(frame: &mut Frame, splash: &SplashView, theme: &Theme, rows: usize, cols: usize) {
    let middle = (rows / 2).max(1);

    frame.position_cursor(middle, 1);
    frame.print(Theme::bold());
    frame.print(&Theme::fg(&theme.colors.header_fg));
    frame.print(&centered(&splash.title, cols));
    frame.print(Theme::reset());

    frame.position_cursor(middle + 1, 1);
    frame.print(&Theme::fg(&theme.colors.text_dim));
    frame.print(&centered(&splash.subtitle, cols));
    frame.print(Theme::reset());
}
