//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the plugin runtime (main.rs) and the domain and
//! directory layers. It implements the event-driven architecture that powers
//! the interactive UI.
//!
//! # Architecture
//!
//! ```text
//! Keys / Host Timers → Events → Event Handler → State Mutations → Actions → Side Effects
//!                                    ↑                                  ↓
//!                                    └────────── Timer wake-ups ────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Screen and input mode types
//! - [`state`]: Central application state container and view model computation
//! - [`timers`]: Application-level one-shot deadlines
//! - [`dashboard`]: Attendance summary screen
//! - [`leave`]: Leave request screen
//!
//! # Example
//!
//! ```rust
//! use rollcall::app::{handle_event, AppState, Event};
//! use std::time::Duration;
//!
//! let mut state = AppState::default();
//! let (_render, _actions) = handle_event(&mut state, &Event::Started, Duration::ZERO)?;
//! # Ok::<(), rollcall::RollcallError>(())
//! ```

pub mod actions;
pub mod dashboard;
pub mod handler;
pub mod leave;
pub mod modes;
pub mod state;
pub mod timers;

pub use actions::Action;
pub use dashboard::{AttendanceSummary, DashboardPhase, DashboardState, DashboardSummary, ShiftSummary};
pub use handler::{handle_event, Event};
pub use leave::LeaveScreen;
pub use modes::{InputMode, Screen, TextTarget};
pub use state::{AppState, Toast, ToastKind};
pub use timers::{TimerKind, Timers};
