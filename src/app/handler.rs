//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input and
//! timer ticks, translating them into state changes and action sequences.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. The plugin shim maps keys and host timers to [`Event`]s
//! 2. [`handle_event`] pattern-matches the event against the current screen
//! 3. State mutations occur via `AppState` and screen methods
//! 4. A wake-up is armed for the earliest pending deadline
//! 5. Actions are returned for execution
//!
//! Every call carries `now`, the monotonic time since the plugin loaded. All
//! deadlines are compared against it, which keeps the handler deterministic
//! under a virtual clock.
//!
//! # Event Types
//!
//! - **Lifecycle**: `Started`, `Tick`, `CloseFocus`
//! - **Navigation**: `NextTab`, `PrevTab`, `KeyDown`, `KeyUp`
//! - **Directory**: `FocusSearch`, `LeaveSearch`, `SelectStatus`, `ClearStatus`,
//!   `OpenProfile`, `CloseProfile`, `Refresh`
//! - **Text input**: `Char`, `Backspace`
//! - **Dashboard / Leave**: `ToggleDarkMode`, `OpenLeaveForm`, `CloseLeaveForm`,
//!   `SubmitLeave`, `ShiftLeaveDate`
//!
//! # Example
//!
//! ```rust
//! use rollcall::app::{handle_event, Action, AppState, Event};
//! use std::time::Duration;
//!
//! let mut state = AppState::default();
//! let (_, actions) = handle_event(&mut state, &Event::Started, Duration::ZERO)?;
//! assert_eq!(actions, vec![Action::ScheduleWakeup { after: Duration::from_secs(2) }]);
//! # Ok::<(), rollcall::RollcallError>(())
//! ```

use super::leave::SUBMITTED_MESSAGE;
use super::modes::{InputMode, Screen, TextTarget};
use super::state::ToastKind;
use super::timers::{TimerKind, LEAVE_SUBMIT_DELAY};
use crate::app::{Action, AppState};
use crate::directory::{DirectoryFocus, EmployeeDirectory};
use crate::domain::error::Result;
use crate::domain::AttendanceStatus;
use std::time::Duration;

/// Events triggered by user input or host timers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The plugin finished loading; starts the splash countdown.
    Started,
    /// A host wake-up arrived; fires every deadline that is due.
    Tick,
    /// Closes the floating pane and hides the plugin UI.
    CloseFocus,

    /// Switches to the next tab (wraps).
    NextTab,
    /// Switches to the previous tab (wraps).
    PrevTab,

    /// Moves the directory cursor down (wraps to top).
    KeyDown,
    /// Moves the directory cursor up (wraps to bottom).
    KeyUp,

    /// Sends keystrokes to the search box.
    FocusSearch,
    /// Returns keystrokes to the list, keeping the query.
    LeaveSearch,
    /// Applies a status chip.
    SelectStatus(AttendanceStatus),
    /// Removes the status filter.
    ClearStatus,
    /// Opens the profile overlay for the selected employee.
    OpenProfile,
    /// Closes the profile overlay.
    CloseProfile,
    /// Shows the refresh indicator.
    Refresh,

    /// Appends a character to the focused text field.
    Char(char),
    /// Removes the last character of the focused text field.
    Backspace,

    /// Flips the dark mode flag.
    ToggleDarkMode,
    OpenLeaveForm,
    CloseLeaveForm,
    SubmitLeave,
    /// Moves the leave date by the given number of days.
    ShiftLeaveDate(i64),
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Parameters
///
/// * `state` - Mutable reference to application state
/// * `event` - Event to process
/// * `now` - Monotonic time since the plugin loaded
///
/// # Returns
///
/// Whether the UI needs a re-render, and the actions to execute in sequence.
/// The last action is a [`Action::ScheduleWakeup`] whenever a new earliest
/// deadline appeared.
///
/// # Errors
///
/// Returns errors from state mutation methods.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event type.
pub fn handle_event(state: &mut AppState, event: &Event, now: Duration) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event, now_ms = now.as_millis()).entered();

    if *event == Event::Tick {
        state.disarm_wakeup();
    }

    let (should_render, mut actions) = dispatch(state, event, now)?;

    if let Some(wakeup) = state.arm_wakeup(now) {
        actions.push(wakeup);
    }

    Ok((should_render, actions))
}

#[allow(clippy::too_many_lines)]
fn dispatch(state: &mut AppState, event: &Event, now: Duration) -> Result<(bool, Vec<Action>)> {
    match event {
        Event::Started => {
            state.start(now);
            Ok((true, vec![]))
        }
        Event::Tick => Ok((on_tick(state, now), vec![])),
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::NextTab | Event::PrevTab => {
            if state.screen == Screen::Splash || state.input_mode() != InputMode::Normal {
                tracing::debug!(mode = ?state.input_mode(), "tab switch ignored");
                return Ok((false, vec![]));
            }
            let target = if *event == Event::NextTab {
                state.screen.next_tab()
            } else {
                state.screen.prev_tab()
            };
            Ok((state.navigate(target, now), vec![]))
        }
        Event::KeyDown => Ok((with_directory(state, |d| d.move_selection_down()), vec![])),
        Event::KeyUp => Ok((with_directory(state, |d| d.move_selection_up()), vec![])),
        Event::FocusSearch => Ok((with_directory(state, |d| d.focus = DirectoryFocus::SearchBox), vec![])),
        Event::LeaveSearch => Ok((with_directory(state, |d| d.focus = DirectoryFocus::List), vec![])),
        Event::SelectStatus(status) => {
            let status = *status;
            Ok((with_directory(state, |d| d.select_status(status)), vec![]))
        }
        Event::ClearStatus => Ok((with_directory(state, |d| d.clear_status()), vec![])),
        Event::OpenProfile => {
            let opened = state
                .directory
                .as_mut()
                .is_some_and(|directory| directory.open_selected_profile());
            if !opened {
                tracing::debug!("no employee selected");
            }
            Ok((opened, vec![]))
        }
        Event::CloseProfile => Ok((with_directory(state, EmployeeDirectory::close_profile), vec![])),
        Event::Refresh => Ok((with_directory(state, |d| d.refresh(now)), vec![])),
        Event::Char(c) => match state.input_mode() {
            InputMode::Typing(TextTarget::SearchBox) => {
                tracing::trace!(char = %c, "search text updated");
                Ok((with_directory(state, |d| d.type_char(*c, now)), vec![]))
            }
            InputMode::Typing(TextTarget::LeaveReason) => {
                state.leave.type_char(*c);
                Ok((true, vec![]))
            }
            InputMode::Normal | InputMode::Overlay => Ok((false, vec![])),
        },
        Event::Backspace => match state.input_mode() {
            InputMode::Typing(TextTarget::SearchBox) => {
                Ok((with_directory(state, |d| d.backspace(now)), vec![]))
            }
            InputMode::Typing(TextTarget::LeaveReason) => {
                state.leave.backspace();
                Ok((true, vec![]))
            }
            InputMode::Normal | InputMode::Overlay => Ok((false, vec![])),
        },
        Event::ToggleDarkMode => {
            state.dashboard.toggle_dark_mode();
            tracing::debug!(dark_mode = state.dashboard.dark_mode, "theme mode toggled");
            Ok((true, vec![]))
        }
        Event::OpenLeaveForm => {
            if state.screen != Screen::Leave {
                return Ok((false, vec![]));
            }
            state.leave.open_form();
            Ok((true, vec![]))
        }
        Event::CloseLeaveForm => {
            state.leave.close_form();
            Ok((true, vec![]))
        }
        Event::ShiftLeaveDate(days) => {
            if !state.leave.form_open {
                return Ok((false, vec![]));
            }
            state.leave.shift_date(*days);
            Ok((true, vec![]))
        }
        Event::SubmitLeave => {
            if !state.leave.form_open || state.leave.is_submitting() {
                tracing::debug!("leave submit ignored");
                return Ok((false, vec![]));
            }

            match state.leave.submit() {
                Ok(request) => {
                    tracing::debug!(date = %request.date, "leave request submitting");
                    state.timers.schedule(TimerKind::LeaveSubmitted, LEAVE_SUBMIT_DELAY, now);
                }
                Err(e) => {
                    tracing::debug!(error = %e, "leave request rejected");
                    state.show_toast(
                        super::leave::LeaveScreen::missing_reason_message(),
                        ToastKind::Error,
                        now,
                    );
                }
            }
            Ok((true, vec![]))
        }
    }
}

/// Fires everything due at `now`. Returns whether anything visible changed.
fn on_tick(state: &mut AppState, now: Duration) -> bool {
    let mut changed = state
        .directory
        .as_mut()
        .is_some_and(|directory| directory.on_tick(now));

    for kind in state.timers.take_due(now) {
        tracing::debug!(?kind, "timer fired");
        changed = true;
        match kind {
            TimerKind::SplashDone => {
                state.navigate(Screen::Dashboard, now);
            }
            TimerKind::DashboardLoaded => {
                let roster = state.roster.clone();
                state.dashboard.finish_loading(&roster);
            }
            TimerKind::LeaveSubmitted => {
                if state.leave.complete_submission().is_some() {
                    state.show_toast(SUBMITTED_MESSAGE, ToastKind::Info, now);
                }
            }
            TimerKind::ToastExpired => {
                state.toast = None;
            }
        }
    }

    changed
}

/// Runs `f` on the mounted directory. Returns `false` when none is mounted.
fn with_directory(state: &mut AppState, f: impl FnOnce(&mut EmployeeDirectory)) -> bool {
    state.directory.as_mut().map_or(false, |directory| {
        f(directory);
        true
    })
}
