//! Rollcall: a Zellij plugin for browsing employee attendance.
//!
//! Rollcall is a floating-pane plugin that provides:
//! - An attendance dashboard with per-status counts and progress bars
//! - A searchable employee directory with debounced name search
//! - Attendance status chips composing with the search (logical AND)
//! - A profile overlay showing a randomly chosen image per opening
//! - A leave request form with validation and simulated submission

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling and screen navigation             │
//! │  - One-shot timers and wake-up arming               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                     │
//! ┌───────────────────────────┐   ┌───────────────────────────┐
//! │ Directory (directory/)    │   │ UI Layer (ui/)            │
//! │ - Pure filtering          │   │ - ANSI rendering          │
//! │ - Debounced search        │   │ - Theming                 │
//! │ - Profile viewer          │   │ - Components              │
//! └───────────────────────────┘   └───────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Infrastructure                            │
//! │  - Employee, roster, leave request (domain/)        │
//! │  - Error types (domain/error)                       │
//! │  - Sandbox paths (infrastructure/)                  │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - OpenTelemetry tracing to a rotating OTLP file    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Time
//!
//! The library never reads a clock. Every event carries `now`, the monotonic
//! time since the plugin loaded, and every deadline (search debounce, refresh
//! indicator, splash, loading, submission, toast) is stored in state and
//! compared against it. The shim only turns [`Action::ScheduleWakeup`] into
//! host timers and host timers into [`Event::Tick`]. Tests drive the same code
//! with a virtual clock.
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/rollcall.wasm" {
//!         roster_file "~/staff.toml"
//!         theme "catppuccin-latte"
//!         dark_theme "catppuccin-mocha"
//!         dark_mode "false"
//!         profile_images "https://example.com/a.jpg,https://example.com/b.jpg"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use rollcall::{handle_event, initialize, Config, Event};
//! use std::time::Duration;
//!
//! let today = chrono::NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
//! let mut state = initialize(&Config::default(), today);
//!
//! for event in [Event::Started, Event::NextTab] {
//!     let (_render, _actions) = handle_event(&mut state, &event, Duration::ZERO)?;
//! }
//! # Ok::<(), rollcall::RollcallError>(())
//! ```

pub mod app;
pub mod directory;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, InputMode, Screen, TextTarget};
pub use domain::{AttendanceStatus, Employee, Result, RollcallError, Roster};
pub use ui::Theme;

use chrono::NaiveDate;
use directory::ImagePool;
use std::collections::BTreeMap;
use ui::theme::{DEFAULT_DARK_THEME, DEFAULT_LIGHT_THEME};

/// Plugin configuration parsed from Zellij's configuration system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// TOML roster file; the built-in roster is used when unset or invalid.
    pub roster_file: Option<String>,

    /// Built-in palette for light mode. Ignored if `theme_file` is set.
    pub theme_name: String,

    /// Built-in palette for dark mode.
    pub dark_theme_name: String,

    /// Custom TOML palette for light mode. See [`ui::theme`] for format.
    pub theme_file: Option<String>,

    /// Whether the plugin starts in dark mode.
    pub dark_mode: bool,

    /// Profile image pool; the built-in pool is used when empty.
    pub profile_images: Vec<String>,

    /// Level directive for the tracing filter. Default: `"info"`
    pub trace_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            roster_file: None,
            theme_name: DEFAULT_LIGHT_THEME.to_string(),
            dark_theme_name: DEFAULT_DARK_THEME.to_string(),
            theme_file: None,
            dark_mode: false,
            profile_images: vec![],
            trace_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// # Parsing Rules
    ///
    /// - `roster_file`, `theme_file`: used as given, `~` expanded later
    /// - `theme`, `dark_theme`, `trace_level`: strings with defaults
    /// - `dark_mode`: `"true"`/`"false"`, anything else is `false`
    /// - `profile_images`: comma-separated, blank entries dropped
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use rollcall::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("dark_mode".to_string(), "true".to_string());
    /// map.insert("profile_images".to_string(), "a.jpg, ,b.jpg".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert!(config.dark_mode);
    /// assert_eq!(config.profile_images, vec!["a.jpg", "b.jpg"]);
    /// assert_eq!(config.theme_name, "catppuccin-latte");
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();
        let non_blank = |key: &str| {
            config
                .get(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let profile_images = config
            .get("profile_images")
            .map(|s| {
                s.split(',')
                    .map(str::trim)
                    .filter(|url| !url.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            roster_file: non_blank("roster_file"),
            theme_name: non_blank("theme").unwrap_or(defaults.theme_name),
            dark_theme_name: non_blank("dark_theme").unwrap_or(defaults.dark_theme_name),
            theme_file: non_blank("theme_file"),
            dark_mode: non_blank("dark_mode").and_then(|s| s.parse().ok()).unwrap_or(false),
            profile_images,
            trace_level: non_blank("trace_level").unwrap_or(defaults.trace_level),
        }
    }
}

/// Loads the configured roster.
///
/// # Errors
///
/// Returns the roster file's read or validation error. Without a
/// `roster_file` the built-in roster is returned.
pub fn load_roster(config: &Config) -> Result<Roster> {
    config.roster_file.as_ref().map_or_else(
        || Ok(Roster::builtin()),
        |file| Roster::from_file(infrastructure::expand_tilde(file)),
    )
}

/// Initializes the application state from configuration.
///
/// Configuration problems never abort startup: an unreadable or invalid
/// roster file falls back to the built-in roster, an empty image list to the
/// built-in images, and unknown or broken themes to the built-in palettes.
/// Each fallback is logged as a warning.
///
/// # Parameters
///
/// * `config` - Plugin configuration
/// * `today` - Initial date of the leave form
///
/// # Example
///
/// ```rust
/// use rollcall::{initialize, Config, Screen};
///
/// let today = chrono::NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
/// let state = initialize(&Config::default(), today);
/// assert_eq!(state.screen, Screen::Splash);
/// assert_eq!(state.roster.len(), 4);
/// ```
#[must_use]
pub fn initialize(config: &Config, today: NaiveDate) -> AppState {
    tracing::debug!("initializing rollcall plugin");

    let roster = load_roster(config).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "failed to load roster, using built-in roster");
        Roster::builtin()
    });

    let images = if config.profile_images.is_empty() {
        ImagePool::default()
    } else {
        ImagePool::new(config.profile_images.clone()).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "invalid profile images, using built-in images");
            ImagePool::default()
        })
    };

    let light_theme = config.theme_file.as_ref().map_or_else(
        || {
            Theme::from_name(&config.theme_name).unwrap_or_else(|| {
                tracing::warn!(theme_name = %config.theme_name, "unknown theme, using default");
                Theme::default()
            })
        },
        |theme_file| {
            Theme::from_file(infrastructure::expand_tilde(theme_file)).unwrap_or_else(|e| {
                tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    let dark_theme = Theme::from_name(&config.dark_theme_name).unwrap_or_else(|| {
        tracing::warn!(theme_name = %config.dark_theme_name, "unknown dark theme, using default");
        Theme::dark()
    });

    tracing::debug!(
        employees = roster.len(),
        images = images.images().len(),
        light_theme = %light_theme.name,
        dark_theme = %dark_theme.name,
        "configuration resolved"
    );

    AppState::new(roster, images, light_theme, dark_theme, config.dark_mode, today)
}
