//! The immutable employee roster.
//!
//! A [`Roster`] is an ordered, shared, read-only sequence of [`Employee`]
//! records. It is built once at plugin initialization (either the built-in
//! roster or a TOML roster file) and never mutated afterwards. Cloning a roster
//! is cheap: every screen shares the same backing slice.
//!
//! # Roster file format
//!
//! ```toml
//! [[employees]]
//! id = 1
//! name = "Akash"
//! department = "HR"
//! status = "Present"
//! shift = "Morning"            # optional
//! requested_shift = "Evening"  # optional, a shift change awaiting approval
//! ```

use super::employee::{AttendanceStatus, Employee, Shift};
use super::error::{Result, RollcallError};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::ops::Deref;
use std::path::Path;
use std::sync::Arc;

/// Ordered, immutable collection of employees with unique ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    employees: Arc<[Employee]>,
}

/// Raw roster file document before validation.
#[derive(Debug, Deserialize)]
struct RosterFile {
    #[serde(default)]
    employees: Vec<RosterEntry>,
}

/// Raw roster file entry; `status` and shifts stay textual until validated.
#[derive(Debug, Deserialize)]
struct RosterEntry {
    id: u32,
    name: String,
    department: String,
    status: String,
    shift: Option<String>,
    requested_shift: Option<String>,
}

impl Roster {
    /// Builds a roster, enforcing the roster invariants.
    ///
    /// # Errors
    ///
    /// Returns [`RollcallError::Roster`] if an id is zero or repeated, or if a
    /// name or department is blank.
    pub fn new(employees: Vec<Employee>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(employees.len());
        for employee in &employees {
            if employee.id == 0 {
                return Err(RollcallError::Roster(format!(
                    "employee '{}' has id 0; ids must be positive",
                    employee.name
                )));
            }
            if !seen.insert(employee.id) {
                return Err(RollcallError::Roster(format!("duplicate employee id {}", employee.id)));
            }
            if employee.name.trim().is_empty() {
                return Err(RollcallError::Roster(format!("employee {} has an empty name", employee.id)));
            }
            if employee.department.trim().is_empty() {
                return Err(RollcallError::Roster(format!(
                    "employee {} has an empty department",
                    employee.id
                )));
            }
        }

        Ok(Self {
            employees: employees.into(),
        })
    }

    /// The built-in roster shipped with the plugin.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            employees: vec![
                Employee::new(1, "Akash", "HR", AttendanceStatus::Present).with_shift(Shift::Morning),
                Employee::new(2, "Atul", "IT", AttendanceStatus::Absent)
                    .with_shift(Shift::Evening)
                    .with_requested_shift(Shift::Morning),
                Employee::new(3, "Prashnat", "Finance", AttendanceStatus::Late).with_shift(Shift::Night),
                Employee::new(4, "Krishna", "Sales", AttendanceStatus::Present).with_shift(Shift::Morning),
            ]
            .into(),
        }
    }

    /// Parses and validates a roster from TOML text.
    ///
    /// Names and departments are trimmed; statuses are matched
    /// case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`RollcallError::Roster`] on malformed TOML, unknown statuses,
    /// or any violation reported by [`Roster::new`].
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let file: RosterFile = toml::from_str(contents)
            .map_err(|e| RollcallError::Roster(format!("failed to parse roster TOML: {e}")))?;

        let employees = file
            .employees
            .into_iter()
            .map(|entry| {
                let status = entry.status.parse::<AttendanceStatus>()?;
                let mut employee = Employee::new(entry.id, entry.name.trim(), entry.department.trim(), status);
                if let Some(shift) = entry.shift {
                    employee = employee.with_shift(shift.parse()?);
                }
                if let Some(shift) = entry.requested_shift {
                    employee = employee.with_requested_shift(shift.parse()?);
                }
                Ok(employee)
            })
            .collect::<Result<Vec<_>>>()?;

        Self::new(employees)
    }

    /// Reads and validates a roster file.
    ///
    /// # Errors
    ///
    /// Returns [`RollcallError::Io`] if the file cannot be read, otherwise any
    /// error from [`Roster::from_toml_str`].
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Number of employees with the given status.
    #[must_use]
    pub fn count_by_status(&self, status: AttendanceStatus) -> usize {
        self.employees.iter().filter(|e| e.status == status).count()
    }

    /// Number of employees scheduled for `shift`.
    #[must_use]
    pub fn count_by_shift(&self, shift: Shift) -> usize {
        self.employees.iter().filter(|e| e.shift == Some(shift)).count()
    }

    /// Number of shift change requests awaiting approval.
    #[must_use]
    pub fn pending_shift_changes(&self) -> usize {
        self.employees.iter().filter(|e| e.has_pending_shift_change()).count()
    }

    /// Borrows the records in roster order.
    #[must_use]
    pub fn as_slice(&self) -> &[Employee] {
        &self.employees
    }
}

impl Deref for Roster {
    type Target = [Employee];

    fn deref(&self) -> &Self::Target {
        &self.employees
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_roster_keeps_insertion_order() {
        let roster = Roster::builtin();
        let ids: Vec<_> = roster.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(roster.count_by_status(AttendanceStatus::Present), 2);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = Roster::new(vec![
            Employee::new(7, "Asha", "Ops", AttendanceStatus::Late),
            Employee::new(7, "Ravi", "Ops", AttendanceStatus::Present),
        ])
        .unwrap_err();
        assert!(err.to_string().contains("duplicate employee id 7"));
    }

    #[test]
    fn rejects_zero_id_and_blank_fields() {
        assert!(Roster::new(vec![Employee::new(0, "Asha", "Ops", AttendanceStatus::Late)]).is_err());
        assert!(Roster::new(vec![Employee::new(1, "  ", "Ops", AttendanceStatus::Late)]).is_err());
        assert!(Roster::new(vec![Employee::new(1, "Asha", "", AttendanceStatus::Late)]).is_err());
    }

    #[test]
    fn parses_toml_roster() {
        let roster = Roster::from_toml_str(
            r#"
            [[employees]]
            id = 10
            name = " Meera "
            department = "Legal"
            status = "late"

            [[employees]]
            id = 11
            name = "Dev"
            department = "IT"
            status = "Present"
            "#,
        )
        .unwrap();

        assert_eq!(roster.len(), 2);
        assert_eq!(roster[0].name, "Meera");
        assert_eq!(roster[0].status, AttendanceStatus::Late);
    }

    #[test]
    fn builtin_roster_has_shifts() {
        let roster = Roster::builtin();
        assert_eq!(roster.count_by_shift(Shift::Morning), 2);
        assert_eq!(roster.count_by_shift(Shift::Evening), 1);
        assert_eq!(roster.count_by_shift(Shift::Night), 1);
        assert_eq!(roster.pending_shift_changes(), 1);
    }

    #[test]
    fn shifts_are_optional_in_files() {
        let roster = Roster::from_toml_str(
            r#"
            [[employees]]
            id = 1
            name = "Dev"
            department = "IT"
            status = "Present"
            shift = "night"
            requested_shift = "Morning"

            [[employees]]
            id = 2
            name = "Meera"
            department = "Legal"
            status = "Late"
            "#,
        )
        .unwrap();

        assert_eq!(roster[0].shift, Some(Shift::Night));
        assert_eq!(roster[1].shift, None);
        assert_eq!(roster.pending_shift_changes(), 1);

        let err = Roster::from_toml_str(
            "[[employees]]\nid = 1\nname = \"Dev\"\ndepartment = \"IT\"\nstatus = \"Present\"\nshift = \"Dawn\"\n",
        )
        .unwrap_err();
        assert!(matches!(err, RollcallError::Roster(_)));
    }

    #[test]
    fn unknown_status_in_file_is_rejected() {
        let err = Roster::from_toml_str(
            r#"
            [[employees]]
            id = 1
            name = "Dev"
            department = "IT"
            status = "Remote"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, RollcallError::Roster(_)));
    }

    #[test]
    fn loads_roster_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[[employees]]\nid = 3\nname = \"Nina\"\ndepartment = \"Sales\"\nstatus = \"Absent\""
        )
        .unwrap();

        let roster = Roster::from_file(file.path()).unwrap();
        assert_eq!(roster.as_slice()[0].name, "Nina");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Roster::from_file(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, RollcallError::Io(_)));
    }
}
