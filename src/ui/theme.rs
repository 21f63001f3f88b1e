//! Theme management and ANSI escape sequence generation.
//!
//! Themes are TOML color palettes. Two Catppuccin variants ship with the
//! plugin: `catppuccin-latte` (light, default) and `catppuccin-mocha` (dark,
//! used when dark mode is on). A custom palette can be loaded from a file.
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#4c4f69"
//! tab_active_fg = "#eff1f5"
//! tab_active_bg = "#1e66f5"
//! selection_fg = "#eff1f5"
//! selection_bg = "#8839ef"
//! text_normal = "#4c4f69"
//! text_dim = "#9ca0b0"
//! border = "#bcc0cc"
//! search_bar_border = "#8839ef"
//! match_highlight_fg = "#eff1f5"
//! match_highlight_bg = "#df8e1d"
//! empty_state_fg = "#1e66f5"
//! present_fg = "#40a02b"
//! absent_fg = "#d20f39"
//! late_fg = "#df8e1d"
//! toast_fg = "#eff1f5"
//! toast_bg = "#40a02b"
//! error_fg = "#d20f39"
//! ```
//!
//! # Example
//!
//! ```rust
//! use rollcall::ui::theme::Theme;
//!
//! let theme = Theme::from_name("catppuccin-mocha").unwrap();
//! println!("{}", Theme::fg(&theme.colors.header_fg));
//! println!("{}Bold Text{}", Theme::bold(), Theme::reset());
//! ```

use crate::domain::{AttendanceStatus, Result, RollcallError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the built-in light theme.
pub const DEFAULT_LIGHT_THEME: &str = "catppuccin-latte";

/// Name of the built-in dark theme.
pub const DEFAULT_DARK_THEME: &str = "catppuccin-mocha";

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements.
///
/// All colors are hex strings (e.g., "#cdd6f4").
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Title and inactive tab text.
    pub header_fg: String,
    /// Optional header background color.
    #[serde(default)]
    pub header_bg: Option<String>,

    pub tab_active_fg: String,
    pub tab_active_bg: String,

    /// Selected row and active chip foreground.
    pub selection_fg: String,
    /// Selected row and active chip background.
    pub selection_bg: String,

    pub text_normal: String,
    /// Footer and secondary info.
    pub text_dim: String,

    /// Border and separator line color.
    pub border: String,

    pub search_bar_border: String,
    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    pub empty_state_fg: String,

    pub present_fg: String,
    pub absent_fg: String,
    pub late_fg: String,

    pub toast_fg: String,
    pub toast_bg: String,

    /// Validation errors and error toasts.
    pub error_fg: String,
}

impl ThemeColors {
    /// Foreground color for a status label or progress bar.
    #[must_use]
    pub fn status_fg(&self, status: AttendanceStatus) -> &str {
        match status {
            AttendanceStatus::Present => &self.present_fg,
            AttendanceStatus::Absent => &self.absent_fg,
            AttendanceStatus::Late => &self.late_fg,
        }
    }
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Supported names: `catppuccin-latte`, `catppuccin-mocha`.
    ///
    /// # Returns
    ///
    /// - `Some(Theme)` if the theme name is recognized
    /// - `None` if the theme name is unknown
    ///
    /// # Example
    ///
    /// ```rust
    /// use rollcall::ui::theme::Theme;
    ///
    /// let theme = Theme::from_name("catppuccin-latte").unwrap();
    /// assert_eq!(theme.name, "catppuccin-latte");
    /// assert!(Theme::from_name("solarized").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`RollcallError::Theme`] if the file cannot be read or the TOML
    /// content cannot be parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| RollcallError::Theme(format!("failed to read theme file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| RollcallError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// The built-in dark palette.
    #[must_use]
    pub fn dark() -> Self {
        Self::from_name(DEFAULT_DARK_THEME).unwrap_or_default()
    }

    /// Converts a hex color to an RGB tuple; white on parse errors.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// Generates an ANSI 24-bit foreground color escape sequence.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rollcall::ui::theme::Theme;
    ///
    /// assert_eq!(Theme::fg("#ff0080"), "\u{1b}[38;2;255;0;128m");
    /// ```
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// Generates an ANSI 24-bit background color escape sequence.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Clears all styling (colors, bold, dim).
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the light palette, or a monochrome fallback if it fails to parse.
    fn default() -> Self {
        Self::from_name(DEFAULT_LIGHT_THEME).unwrap_or_else(Self::monochrome)
    }
}

impl Theme {
    fn monochrome() -> Self {
        let white = || "#ffffff".to_string();
        let black = || "#000000".to_string();
        Self {
            name: "monochrome".to_string(),
            colors: ThemeColors {
                header_fg: white(),
                header_bg: None,
                tab_active_fg: black(),
                tab_active_bg: white(),
                selection_fg: black(),
                selection_bg: white(),
                text_normal: white(),
                text_dim: white(),
                border: white(),
                search_bar_border: white(),
                match_highlight_fg: black(),
                match_highlight_bg: white(),
                empty_state_fg: white(),
                present_fg: white(),
                absent_fg: white(),
                late_fg: white(),
                toast_fg: black(),
                toast_bg: white(),
                error_fg: white(),
            },
        }
    }
}
