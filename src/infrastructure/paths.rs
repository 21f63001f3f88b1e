//! Path helpers for the Zellij plugin sandbox.
//!
//! Inside the sandbox the host filesystem is reachable under `/host`, which
//! maps to the directory Zellij was started from (usually the user's home).

use std::path::PathBuf;

/// Returns the plugin data directory, `/host/.local/share/zellij/rollcall`.
///
/// Holds the OTLP trace file.
///
/// # Examples
///
/// ```
/// use rollcall::infrastructure::get_data_dir;
///
/// let data_dir = get_data_dir();
/// assert_eq!(data_dir.to_str().unwrap(), "/host/.local/share/zellij/rollcall");
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("rollcall")
}

/// Rewrites a leading `~` to the sandbox's `/host` mount.
///
/// Used for the `roster_file` and `theme_file` options.
///
/// # Examples
///
/// ```
/// use rollcall::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/staff.toml"), "/host/staff.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/etc/rollcall.toml"), "/etc/rollcall.toml");
/// assert_eq!(expand_tilde("~other/file"), "~other/file");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}
