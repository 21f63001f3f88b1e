//! Error types for the Rollcall plugin.
//!
//! This module defines the centralized error type [`RollcallError`] and a type alias
//! [`Result`] for convenient error handling throughout the plugin. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for Rollcall plugin operations.
///
/// Consolidates every failure the plugin can observe: roster loading and
/// validation, filesystem I/O, theme parsing, configuration, and leave request
/// validation. Event handling itself never fails on user input; an empty search
/// result or an empty reason are ordinary states, not errors.
///
/// # Examples
///
/// ```
/// use rollcall::RollcallError;
///
/// fn validate_roster() -> Result<(), RollcallError> {
///     Err(RollcallError::Roster("duplicate employee id 3".to_string()))
/// }
///
/// assert!(validate_roster().is_err());
/// ```
#[derive(Debug, Error)]
pub enum RollcallError {
    /// Roster source could not be parsed or failed validation.
    ///
    /// Covers malformed TOML, zero or duplicate ids, blank names or departments,
    /// and unrecognized attendance statuses.
    #[error("Roster error: {0}")]
    Roster(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or application failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when configuration values are malformed, for example an empty
    /// profile image pool.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A leave request did not pass validation.
    #[error("Leave request rejected: {0}")]
    LeaveRequest(String),
}

/// A specialized `Result` type for Rollcall operations.
///
/// This is a type alias for `std::result::Result<T, RollcallError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, RollcallError>;
