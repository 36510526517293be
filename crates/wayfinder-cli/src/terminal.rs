//! Terminal styling and color detection.

use std::io::IsTerminal;

/// ANSI escape codes for text styling and colors.
pub mod colors {
    /// Reset all styling.
    pub const RESET: &str = "\x1b[0m";
    /// Bright bold white for location names.
    pub const WHITE_BOLD: &str = "\x1b[1;97m";
    /// Gray for identifiers and decorations.
    pub const GRAY: &str = "\x1b[90m";
    /// Green for distances.
    pub const GREEN: &str = "\x1b[32m";
    /// Cyan for walking time.
    pub const CYAN: &str = "\x1b[36m";
    /// Yellow for notices.
    pub const YELLOW: &str = "\x1b[33m";
}

/// Resolved color codes, either ANSI sequences or empty strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub white_bold: &'static str,
    pub gray: &'static str,
    pub green: &'static str,
    pub cyan: &'static str,
    pub yellow: &'static str,
}

impl ColorPalette {
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: colors::RESET,
            white_bold: colors::WHITE_BOLD,
            gray: colors::GRAY,
            green: colors::GREEN,
            cyan: colors::CYAN,
            yellow: colors::YELLOW,
        }
    }

    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            white_bold: "",
            gray: "",
            green: "",
            cyan: "",
            yellow: "",
        }
    }

    /// `colored()` when stdout supports ANSI colors, otherwise `plain()`.
    #[must_use]
    pub fn detect() -> Self {
        if supports_color() {
            Self::colored()
        } else {
            Self::plain()
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::detect()
    }
}

/// Whether color output should be used.
///
/// Respects `NO_COLOR` (<https://no-color.org/>) and `TERM=dumb`, and never
/// colors output that is not going to a terminal.
#[must_use]
pub fn supports_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if let Ok(term) = std::env::var("TERM") {
        if term.eq_ignore_ascii_case("dumb") {
            return false;
        }
    }
    std::io::stdout().is_terminal()
}
