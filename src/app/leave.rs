//! Leave request screen state.
//!
//! The leave screen holds a modal form with a date and a free-text reason.
//! Submitting validates the reason, then simulates a short submission before
//! closing the form.

use crate::domain::leave::MISSING_REASON;
use crate::domain::{LeaveRequest, Result, RollcallError};
use chrono::{Days, NaiveDate};

/// Toast shown after a successful submission.
pub const SUBMITTED_MESSAGE: &str = "Leave Request Submitted!";

/// Leave screen state, kept for the whole plugin lifetime.
#[derive(Debug, Clone)]
pub struct LeaveScreen {
    pub form_open: bool,
    pub date: NaiveDate,
    pub reason: String,
    /// Request waiting for the simulated submission to finish.
    pub submitting: Option<LeaveRequest>,
    /// Set when the last submit failed validation; cleared by editing.
    pub validation_failed: bool,
    /// Requests submitted this session, oldest first; all await approval.
    pub submitted: Vec<LeaveRequest>,
}

impl LeaveScreen {
    #[must_use]
    pub const fn new(today: NaiveDate) -> Self {
        Self {
            form_open: false,
            date: today,
            reason: String::new(),
            submitting: None,
            validation_failed: false,
            submitted: Vec::new(),
        }
    }

    pub fn open_form(&mut self) {
        self.form_open = true;
    }

    /// Closes the form. A submission in flight still completes.
    pub fn close_form(&mut self) {
        self.form_open = false;
        self.validation_failed = false;
    }

    pub fn type_char(&mut self, c: char) {
        self.reason.push(c);
        self.validation_failed = false;
    }

    pub fn backspace(&mut self) {
        self.reason.pop();
        self.validation_failed = false;
    }

    /// Moves the date by `days`, saturating at the calendar bounds.
    pub fn shift_date(&mut self, days: i64) {
        let step = Days::new(days.unsigned_abs());
        let shifted = if days >= 0 {
            self.date.checked_add_days(step)
        } else {
            self.date.checked_sub_days(step)
        };
        if let Some(date) = shifted {
            self.date = date;
        }
    }

    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        self.submitting.is_some()
    }

    /// Validates the form and starts a submission.
    ///
    /// # Errors
    ///
    /// Returns [`RollcallError::LeaveRequest`] if the reason is blank or a
    /// submission is already in flight. A blank reason also marks the form as
    /// failed.
    pub fn submit(&mut self) -> Result<LeaveRequest> {
        if self.is_submitting() {
            return Err(RollcallError::LeaveRequest("submission already in progress".to_string()));
        }

        match LeaveRequest::new(self.date, &self.reason) {
            Ok(request) => {
                self.submitting = Some(request.clone());
                Ok(request)
            }
            Err(e) => {
                self.validation_failed = true;
                Err(e)
            }
        }
    }

    /// Finishes the in-flight submission: closes the form and clears the reason.
    pub fn complete_submission(&mut self) -> Option<LeaveRequest> {
        let request = self.submitting.take()?;
        self.form_open = false;
        self.reason.clear();
        self.submitted.push(request.clone());
        Some(request)
    }

    /// Most recently submitted request.
    #[must_use]
    pub fn last_submitted(&self) -> Option<&LeaveRequest> {
        self.submitted.last()
    }

    /// Number of submitted requests awaiting approval.
    #[must_use]
    pub fn pending_requests(&self) -> usize {
        self.submitted.len()
    }

    /// Message to show for a failed validation.
    #[must_use]
    pub const fn missing_reason_message() -> &'static str {
        MISSING_REASON
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
    }

    #[test]
    fn blank_reason_fails_validation() {
        let mut leave = LeaveScreen::new(day(16));
        leave.open_form();
        leave.type_char(' ');

        assert!(leave.submit().is_err());
        assert!(leave.validation_failed);
        assert!(!leave.is_submitting());

        leave.type_char('x');
        assert!(!leave.validation_failed);
    }

    #[test]
    fn submission_completes_and_resets_form() {
        let mut leave = LeaveScreen::new(day(16));
        leave.open_form();
        for c in "family event".chars() {
            leave.type_char(c);
        }

        let request = leave.submit().unwrap();
        assert_eq!(request.reason, "family event");
        assert!(leave.submit().is_err());

        let done = leave.complete_submission().unwrap();
        assert_eq!(done, request);
        assert!(!leave.form_open);
        assert!(leave.reason.is_empty());
        assert_eq!(leave.last_submitted(), Some(&request));
        assert_eq!(leave.pending_requests(), 1);
        assert_eq!(leave.complete_submission(), None);
        assert_eq!(leave.pending_requests(), 1);
    }

    #[test]
    fn date_moves_by_days() {
        let mut leave = LeaveScreen::new(day(16));
        leave.shift_date(1);
        leave.shift_date(1);
        leave.shift_date(-3);
        assert_eq!(leave.date, day(15));
    }
}
