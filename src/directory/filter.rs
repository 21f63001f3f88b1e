//! Pure roster filtering.
//!
//! [`filter`] maps a roster, a free-text query and an optional status to the
//! ordered subsequence of matching employees. The two dimensions compose with
//! logical AND: an employee is kept only if its name contains the query
//! (case-insensitive substring) and its status equals the selected one.

use crate::domain::{AttendanceStatus, Employee};

/// Returns the employees matching both the query and the status filter.
///
/// - An empty `query` matches every name.
/// - `None` for `status` matches every status.
/// - Roster order is preserved; an empty result is a valid outcome.
///
/// The function is pure: calling it twice with the same arguments yields the
/// same sequence.
///
/// # Examples
///
/// ```
/// use rollcall::directory::filter;
/// use rollcall::domain::{AttendanceStatus, Roster};
///
/// let roster = Roster::builtin();
/// let present = filter(&roster, "", Some(AttendanceStatus::Present));
/// let ids: Vec<_> = present.iter().map(|e| e.id).collect();
/// assert_eq!(ids, vec![1, 4]);
/// ```
#[must_use]
pub fn filter(roster: &[Employee], query: &str, status: Option<AttendanceStatus>) -> Vec<Employee> {
    let needle = query.to_lowercase();

    roster
        .iter()
        .filter(|employee| status.map_or(true, |wanted| employee.status == wanted))
        .filter(|employee| needle.is_empty() || employee.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Locates the first case-insensitive occurrence of `query` in `name`.
///
/// Returns a `(start, end)` range in character indices (exclusive end), used
/// by the table to highlight the matched part of a name. Returns `None` for an
/// empty query or when there is no match.
#[must_use]
pub fn match_range(name: &str, query: &str) -> Option<(usize, usize)> {
    if query.is_empty() {
        return None;
    }

    let haystack: Vec<char> = name.chars().flat_map(char::to_lowercase).collect();
    let needle: Vec<char> = query.chars().flat_map(char::to_lowercase).collect();

    // Lowercasing can change the char count (e.g. 'İ'); only map back when it did not.
    if haystack.len() != name.chars().count() {
        return None;
    }

    haystack
        .windows(needle.len())
        .position(|window| window == needle.as_slice())
        .map(|start| (start, start + needle.len()))
}
