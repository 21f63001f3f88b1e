//! Employee domain model and attendance status.
//!
//! An [`Employee`] is one row of the roster: a stable numeric id, a display
//! name, a free-form department label, and today's [`AttendanceStatus`].
//! Employees may also carry their upcoming [`Shift`] and a requested shift
//! change awaiting approval.

use super::error::{Result, RollcallError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stable identity key of an employee.
///
/// Ids are positive and unique within a roster; they are never reused.
pub type EmployeeId = u32;

/// Attendance status of an employee for the current day.
///
/// The set is closed: every employee is in exactly one of these states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
}

impl AttendanceStatus {
    /// All statuses in chip order.
    pub const ALL: [Self; 3] = [Self::Present, Self::Absent, Self::Late];

    /// Returns the display label used by chips and table rows.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Present => "Present",
            Self::Absent => "Absent",
            Self::Late => "Late",
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AttendanceStatus {
    type Err = RollcallError;

    /// Parses a status label, ignoring case and surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`RollcallError::Roster`] for anything outside
    /// `Present | Absent | Late`.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|status| status.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| RollcallError::Roster(format!("unknown attendance status '{trimmed}'")))
    }
}

/// Work shift of an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shift {
    Morning,
    Evening,
    Night,
}

impl Shift {
    pub const ALL: [Self; 3] = [Self::Morning, Self::Evening, Self::Night];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Morning => "Morning",
            Self::Evening => "Evening",
            Self::Night => "Night",
        }
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Shift {
    type Err = RollcallError;

    /// Parses a shift label, ignoring case and surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`RollcallError::Roster`] for anything outside
    /// `Morning | Evening | Night`.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|shift| shift.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| RollcallError::Roster(format!("unknown shift '{trimmed}'")))
    }
}

/// One employee record in the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub department: String,
    pub status: AttendanceStatus,
    /// Upcoming shift, if scheduled.
    #[serde(default)]
    pub shift: Option<Shift>,
    /// Shift change awaiting approval.
    #[serde(default)]
    pub requested_shift: Option<Shift>,
}

impl Employee {
    /// Creates an employee record.
    ///
    /// No validation happens here; [`Roster::new`](super::Roster::new) enforces
    /// the roster invariants over the whole sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use rollcall::domain::{AttendanceStatus, Employee};
    ///
    /// let akash = Employee::new(1, "Akash", "HR", AttendanceStatus::Present);
    /// assert_eq!(akash.name, "Akash");
    /// ```
    pub fn new(
        id: EmployeeId,
        name: impl Into<String>,
        department: impl Into<String>,
        status: AttendanceStatus,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            department: department.into(),
            status,
            shift: None,
            requested_shift: None,
        }
    }

    #[must_use]
    pub fn with_shift(mut self, shift: Shift) -> Self {
        self.shift = Some(shift);
        self
    }

    #[must_use]
    pub fn with_requested_shift(mut self, shift: Shift) -> Self {
        self.requested_shift = Some(shift);
        self
    }

    /// Whether a requested shift change differs from the scheduled shift.
    #[must_use]
    pub fn has_pending_shift_change(&self) -> bool {
        self.requested_shift.is_some() && self.requested_shift != self.shift
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_labels_case_insensitively() {
        assert_eq!("present".parse::<AttendanceStatus>().unwrap(), AttendanceStatus::Present);
        assert_eq!(" LATE ".parse::<AttendanceStatus>().unwrap(), AttendanceStatus::Late);
        assert_eq!("Absent".parse::<AttendanceStatus>().unwrap(), AttendanceStatus::Absent);
    }

    #[test]
    fn rejects_unknown_label() {
        let err = "OnLeave".parse::<AttendanceStatus>().unwrap_err();
        assert!(matches!(err, RollcallError::Roster(_)));
    }

    #[test]
    fn display_matches_label() {
        assert_eq!(AttendanceStatus::Late.to_string(), "Late");
        assert_eq!(Shift::Night.to_string(), "Night");
    }

    #[test]
    fn parses_shifts() {
        assert_eq!(" evening".parse::<Shift>().unwrap(), Shift::Evening);
        assert!(matches!("Graveyard".parse::<Shift>(), Err(RollcallError::Roster(_))));
    }

    #[test]
    fn requesting_the_current_shift_is_not_a_change() {
        let base = Employee::new(2, "Atul", "IT", AttendanceStatus::Absent).with_shift(Shift::Evening);
        assert!(!base.has_pending_shift_change());
        assert!(!base.clone().with_requested_shift(Shift::Evening).has_pending_shift_change());
        assert!(base.with_requested_shift(Shift::Morning).has_pending_shift_change());
    }
}
