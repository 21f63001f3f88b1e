//! Top-level rendering coordinator.
//!
//! Rendering is a two-step process:
//!
//! 1. **View Model Computation**: `AppState` → `UIViewModel`
//! 2. **Component Rendering**: `UIViewModel` → ANSI frame, printed to stdout
//!
//! # Example
//!
//! ```rust
//! use rollcall::app::AppState;
//! use rollcall::ui::helpers::strip_ansi;
//! use rollcall::ui::render_to_string;
//!
//! let state = AppState::default();
//! let output = render_to_string(&state, 24, 80);
//! assert!(strip_ansi(&output).contains("Rollcall"));
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::helpers::Frame;

/// Renders the plugin UI to stdout.
///
/// Colors come from the light or dark palette depending on the dashboard's
/// dark mode flag.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    print!("{}", render_to_string(state, rows, cols));
}

/// Renders the plugin UI into an ANSI string.
#[must_use]
pub fn render_to_string(state: &AppState, rows: usize, cols: usize) -> String {
    let viewmodel = state.compute_viewmodel(rows, cols);
    let mut frame = Frame::new();
    components::render_layout(&mut frame, &viewmodel, state.theme(), rows, cols);
    frame.into_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::modes::Screen;
    use crate::ui::helpers::strip_ansi;
    use std::time::Duration;

    #[test]
    fn employees_screen_lists_roster() {
        let mut state = AppState::default();
        state.navigate(Screen::Employees, Duration::ZERO);

        let text = strip_ansi(&render_to_string(&state, 24, 80));
        for name in ["Akash", "Atul", "Prashnat", "Krishna"] {
            assert!(text.contains(name), "missing {name}");
        }
        assert!(text.contains("Search:"));
        assert!(text.contains("Employees"));
    }

    #[test]
    fn dashboard_shows_loading_then_counts() {
        let mut state = AppState::default();
        state.navigate(Screen::Dashboard, Duration::ZERO);
        assert!(strip_ansi(&render_to_string(&state, 24, 80)).contains("Loading"));

        let roster = state.roster.clone();
        state.dashboard.finish_loading(&roster);
        let text = strip_ansi(&render_to_string(&state, 24, 80));
        assert!(text.contains("2/4"));
        assert!(text.contains("Late"));
    }

    #[test]
    fn toast_is_drawn() {
        let mut state = AppState::default();
        state.navigate(Screen::Leave, Duration::ZERO);
        state.show_toast("Leave Request Submitted!", crate::app::ToastKind::Info, Duration::ZERO);

        let text = strip_ansi(&render_to_string(&state, 24, 80));
        assert!(text.contains("Leave Request Submitted!"));
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let mut state = AppState::default();
        state.navigate(Screen::Employees, Duration::ZERO);
        if let Some(directory) = state.directory.as_mut() {
            directory.open_selected_profile();
        }
        let _ = render_to_string(&state, 1, 1);
        let _ = render_to_string(&state, 0, 0);
    }
}
