//! Employee directory: filtering, debounced search and the profile overlay.
//!
//! # Architecture
//!
//! ```text
//! keystrokes ──► SearchController ──(300ms debounce)──► filter ──► visible results
//! chip taps  ──► SearchController ──(immediate)───────► filter ──► visible results
//! row press  ──► ProfileViewer (random image, overlay visibility)
//! ```
//!
//! # Modules
//!
//! - [`filter`]: Pure AND-composed name/status filtering
//! - [`debounce`]: Deadline-owning trailing debouncer with invalidating handles
//! - [`search`]: Search session state and recompute rules
//! - [`profile`]: Profile image pool and overlay state
//! - [`screen`]: Per-mount state container of the employees screen

pub mod debounce;
pub mod filter;
pub mod profile;
pub mod screen;
pub mod search;

pub use debounce::{Debouncer, TimerHandle};
pub use filter::{filter, match_range};
pub use profile::{ImagePool, ProfileViewer};
pub use screen::{DirectoryFocus, EmployeeDirectory, REFRESH_INDICATOR};
pub use search::{SearchController, SEARCH_DEBOUNCE};
