//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler never talks to Zellij directly. It returns a list of
//! [`Action`]s that the plugin shim executes after each event, keeping all
//! state transitions testable without a host.
//!
//! # Example
//!
//! ```rust
//! use rollcall::app::Action;
//! use std::time::Duration;
//!
//! let actions = vec![Action::ScheduleWakeup { after: Duration::from_millis(300) }];
//! assert_eq!(actions.len(), 1);
//! ```

use std::time::Duration;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Closes the focused floating pane, hiding the plugin UI.
    CloseFocus,

    /// Asks the host to deliver a timer event after `after`.
    ///
    /// Host timers cannot be cancelled; the application owns all deadlines and
    /// ignores wake-ups for which nothing is due.
    ScheduleWakeup {
        /// Delay until the earliest pending deadline.
        after: Duration,
    },
}
