//! Domain layer for the Rollcall plugin.
//!
//! This module contains the core domain types of the plugin, independent of
//! Zellij-specific APIs or rendering concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`employee`]: Employee records and attendance status
//! - [`roster`]: The immutable, validated roster
//! - [`leave`]: Leave request validation
//!
//! # Examples
//!
//! ```
//! use rollcall::domain::{AttendanceStatus, Roster};
//!
//! let roster = Roster::builtin();
//! assert_eq!(roster.count_by_status(AttendanceStatus::Late), 1);
//! ```

pub mod employee;
pub mod error;
pub mod leave;
pub mod roster;

pub use employee::{AttendanceStatus, Employee, EmployeeId, Shift};
pub use error::{Result, RollcallError};
pub use leave::LeaveRequest;
pub use roster::Roster;
