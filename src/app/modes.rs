//! Screen and input mode state types for the application.
//!
//! [`Screen`] names the page currently shown under the tab bar. [`InputMode`]
//! tells the key mapper how to interpret keystrokes: as navigation commands,
//! as text for an input field, or as commands for an open overlay.
//!
//! # Example
//!
//! ```rust
//! use rollcall::app::modes::{Screen, TextTarget, InputMode};
//!
//! assert_eq!(Screen::Dashboard.next_tab(), Screen::Employees);
//! let mode = InputMode::Typing(TextTarget::SearchBox);
//! assert!(mode.is_typing());
//! ```

/// Page currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Welcome screen shown right after load; leaves by itself.
    Splash,
    /// Attendance summary and dark mode switch.
    Dashboard,
    /// Searchable employee list.
    Employees,
    /// Leave request form launcher.
    Leave,
}

impl Screen {
    /// Screens reachable from the tab bar, in tab order.
    pub const TABS: [Self; 3] = [Self::Dashboard, Self::Employees, Self::Leave];

    /// Tab label.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Splash => "Welcome",
            Self::Dashboard => "Dashboard",
            Self::Employees => "Employees",
            Self::Leave => "Leave",
        }
    }

    /// Next tab, wrapping around. The splash screen has no neighbours.
    #[must_use]
    pub const fn next_tab(self) -> Self {
        match self {
            Self::Splash => Self::Splash,
            Self::Dashboard => Self::Employees,
            Self::Employees => Self::Leave,
            Self::Leave => Self::Dashboard,
        }
    }

    /// Previous tab, wrapping around.
    #[must_use]
    pub const fn prev_tab(self) -> Self {
        match self {
            Self::Splash => Self::Splash,
            Self::Dashboard => Self::Leave,
            Self::Employees => Self::Dashboard,
            Self::Leave => Self::Employees,
        }
    }
}

/// Text field receiving typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextTarget {
    /// Employee search box.
    SearchBox,
    /// Reason field of the leave form.
    LeaveReason,
}

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Keys are commands: tab switching, chips, cursor movement.
    Normal,
    /// Keys edit the given text field.
    Typing(TextTarget),
    /// The profile overlay is open; keys close it.
    Overlay,
}

impl InputMode {
    #[must_use]
    pub const fn is_typing(self) -> bool {
        matches!(self, Self::Typing(_))
    }
}
