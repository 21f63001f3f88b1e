//! Shared rendering utilities.
//!
//! Components draw into a [`Frame`], an ANSI output buffer with absolute
//! cursor positioning. The renderer prints the finished frame in one go, and
//! tests inspect it with [`strip_ansi`].
//!
//! # Example
//!
//! ```rust
//! use rollcall::ui::helpers::{strip_ansi, Frame};
//! use rollcall::ui::Theme;
//!
//! let theme = Theme::default();
//! let mut frame = Frame::new();
//! frame.position_cursor(1, 1);
//! frame.render_highlighted_text("Krishna", &[(0, 2)], &theme, "");
//! assert_eq!(strip_ansi(frame.as_str()), "Krishna");
//! ```

use crate::ui::theme::Theme;

/// ANSI output buffer for one render pass.
#[derive(Debug, Default, Clone)]
pub struct Frame {
    buf: String,
}

impl Frame {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the cursor; coordinates are 1-indexed.
    pub fn position_cursor(&mut self, row: usize, col: usize) {
        self.buf.push_str(&format!("\u{1b}[{row};{col}H"));
    }

    pub fn print(&mut self, text: &str) {
        self.buf.push_str(text);
    }

    /// Prints `text` then pads with spaces up to `width` characters.
    pub fn print_padded(&mut self, text: &str, width: usize) {
        self.print(text);
        self.spaces(width.saturating_sub(text.chars().count()));
    }

    pub fn spaces(&mut self, count: usize) {
        self.buf.push_str(&" ".repeat(count));
    }

    /// Draws a horizontal rule across `cols` columns.
    pub fn rule(&mut self, row: usize, color: &str, cols: usize) -> usize {
        self.position_cursor(row, 1);
        self.print(&Theme::fg(color));
        self.print(&"─".repeat(cols));
        self.print(Theme::reset());
        row + 1
    }

    /// Prints `text` with the character ranges in `ranges` highlighted.
    ///
    /// Ranges are `(start, end)` character indices, exclusive end; ranges past
    /// the end of `text` are clipped. `restore` is re-emitted after each
    /// highlight so the surrounding style continues.
    pub fn render_highlighted_text(&mut self, text: &str, ranges: &[(usize, usize)], theme: &Theme, restore: &str) {
        if ranges.is_empty() {
            self.print(text);
            return;
        }

        let chars: Vec<char> = text.chars().collect();
        let mut current_pos = 0;

        for &(start, end) in ranges {
            let start = start.clamp(current_pos, chars.len());
            let end = end.clamp(start, chars.len());

            self.print(&chars[current_pos..start].iter().collect::<String>());

            self.print(&Theme::fg(&theme.colors.match_highlight_fg));
            self.print(&Theme::bg(&theme.colors.match_highlight_bg));
            self.print(&chars[start..end].iter().collect::<String>());
            self.print(Theme::reset());
            self.print(restore);

            current_pos = end;
        }

        self.print(&chars[current_pos..].iter().collect::<String>());
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.buf
    }
}

/// Removes ANSI escape sequences, leaving the visible text.
#[must_use]
pub fn strip_ansi(text: &str) -> String {
    let mut visible = String::with_capacity(text.len());
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            // CSI sequences end at the first byte in '@'..='~' after '['.
            if chars.next() == Some('[') {
                for c in chars.by_ref() {
                    if ('@'..='~').contains(&c) {
                        break;
                    }
                }
            }
        } else {
            visible.push(c);
        }
    }

    visible
}

/// Left-pads `text` to center it in `width` columns.
#[must_use]
pub fn centered(text: &str, width: usize) -> String {
    let len = text.chars().count();
    let padding = width.saturating_sub(len) / 2;
    format!("{}{text}", " ".repeat(padding))
}
