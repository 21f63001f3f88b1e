//! Leave request domain model.
//!
//! A [`LeaveRequest`] is the validated result of submitting the leave form:
//! the requested day and a non-blank reason.

use super::error::{Result, RollcallError};
use chrono::NaiveDate;

/// Message shown when the reason is blank.
pub const MISSING_REASON: &str = "Please enter a reason";

/// A validated leave request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaveRequest {
    pub date: NaiveDate,
    pub reason: String,
}

impl LeaveRequest {
    /// Validates form input into a leave request.
    ///
    /// The reason is trimmed before validation and storage.
    ///
    /// # Errors
    ///
    /// Returns [`RollcallError::LeaveRequest`] when the reason is empty after
    /// trimming.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use rollcall::domain::LeaveRequest;
    ///
    /// let day = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
    /// assert!(LeaveRequest::new(day, "   ").is_err());
    /// assert_eq!(LeaveRequest::new(day, " dentist ").unwrap().reason, "dentist");
    /// ```
    pub fn new(date: NaiveDate, reason: &str) -> Result<Self> {
        let reason = reason.trim();
        if reason.is_empty() {
            return Err(RollcallError::LeaveRequest(MISSING_REASON.to_string()));
        }
        Ok(Self {
            date,
            reason: reason.to_string(),
        })
    }
}
