//! Dashboard screen state.
//!
//! The dashboard shows an attendance summary, the upcoming shift counts and
//! the pending shift change requests, all computed from the roster. They
//! appear after a simulated loading period; until then the screen shows a
//! loading indicator.

use crate::domain::{AttendanceStatus, Roster, Shift};

/// Attendance counts for the current roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttendanceSummary {
    pub present: usize,
    pub absent: usize,
    pub late: usize,
    pub total: usize,
}

impl AttendanceSummary {
    #[must_use]
    pub fn from_roster(roster: &Roster) -> Self {
        Self {
            present: roster.count_by_status(AttendanceStatus::Present),
            absent: roster.count_by_status(AttendanceStatus::Absent),
            late: roster.count_by_status(AttendanceStatus::Late),
            total: roster.len(),
        }
    }

    #[must_use]
    pub const fn count(&self, status: AttendanceStatus) -> usize {
        match status {
            AttendanceStatus::Present => self.present,
            AttendanceStatus::Absent => self.absent,
            AttendanceStatus::Late => self.late,
        }
    }

    /// Share of the roster with `status`, in `0.0..=1.0`; zero for an empty roster.
    #[must_use]
    pub fn fraction(&self, status: AttendanceStatus) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let fraction = self.count(status) as f64 / self.total as f64;
        fraction
    }
}

/// Employees per upcoming shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftSummary {
    pub morning: usize,
    pub evening: usize,
    pub night: usize,
}

impl ShiftSummary {
    #[must_use]
    pub fn from_roster(roster: &Roster) -> Self {
        Self {
            morning: roster.count_by_shift(Shift::Morning),
            evening: roster.count_by_shift(Shift::Evening),
            night: roster.count_by_shift(Shift::Night),
        }
    }

    #[must_use]
    pub const fn count(&self, shift: Shift) -> usize {
        match shift {
            Shift::Morning => self.morning,
            Shift::Evening => self.evening,
            Shift::Night => self.night,
        }
    }
}

/// Everything the dashboard shows once loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardSummary {
    pub attendance: AttendanceSummary,
    pub shifts: ShiftSummary,
    /// Shift change requests awaiting approval.
    pub shift_changes: usize,
}

impl DashboardSummary {
    #[must_use]
    pub fn from_roster(roster: &Roster) -> Self {
        Self {
            attendance: AttendanceSummary::from_roster(roster),
            shifts: ShiftSummary::from_roster(roster),
            shift_changes: roster.pending_shift_changes(),
        }
    }
}

/// Loading lifecycle of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardPhase {
    /// Never shown yet.
    Idle,
    /// Waiting for the simulated load to finish.
    Loading,
    /// Summary available.
    Ready(DashboardSummary),
}

/// Dashboard state, kept for the whole plugin lifetime.
#[derive(Debug, Clone)]
pub struct DashboardState {
    pub phase: DashboardPhase,
    /// In-memory theme flag; not persisted.
    pub dark_mode: bool,
}

impl DashboardState {
    #[must_use]
    pub const fn new(dark_mode: bool) -> Self {
        Self {
            phase: DashboardPhase::Idle,
            dark_mode,
        }
    }

    /// Starts loading on first display. Returns `true` if loading began.
    pub fn begin_loading(&mut self) -> bool {
        if self.phase == DashboardPhase::Idle {
            self.phase = DashboardPhase::Loading;
            return true;
        }
        false
    }

    pub fn finish_loading(&mut self, roster: &Roster) {
        let summary = DashboardSummary::from_roster(roster);
        tracing::debug!(?summary, "dashboard loaded");
        self.phase = DashboardPhase::Ready(summary);
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }
}
