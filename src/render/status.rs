//! Colored status lines.

use colored::Colorize;

use crate::terminal::{TermError, Terminal};

/// Semantic level of a status message, mapped to a glyph and a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    /// Something completed: green, `✓`.
    Success,
    /// Something failed: red, `x`.
    Error,
    /// Something needs attention: yellow, `!`.
    Warning,
}

impl StatusLevel {
    const fn glyph(self) -> char {
        match self {
            Self::Success => '\u{2713}',
            Self::Error => 'x',
            Self::Warning => '!',
        }
    }
}

/// Renders `message` with its level's glyph and color.
///
/// The coloring uses ANSI sequences that reset at the end of the line, so
/// the terminal's prior color state is restored. Whether color is actually
/// emitted follows the `colored` crate's tty/`NO_COLOR` detection.
///
/// # Examples
///
/// ```rust
/// use termflow::render::{StatusLevel, status_line};
///
/// colored::control::set_override(false);
/// assert_eq!(status_line(StatusLevel::Warning, "low disk"), "! low disk");
/// ```
pub fn status_line(level: StatusLevel, message: &str) -> String {
    let line = format!("{} {message}", level.glyph());
    match level {
        StatusLevel::Success => line.green(),
        StatusLevel::Error => line.red(),
        StatusLevel::Warning => line.yellow(),
    }
    .to_string()
}

/// Writes a status line at the given level.
pub fn write_status<C: Terminal>(
    terminal: &mut C,
    level: StatusLevel,
    message: &str,
) -> Result<(), TermError> {
    terminal.write_line(&status_line(level, message))
}

/// Writes a green `✓` status line.
pub fn write_success<C: Terminal>(terminal: &mut C, message: &str) -> Result<(), TermError> {
    write_status(terminal, StatusLevel::Success, message)
}

/// Writes a red `x` status line.
pub fn write_error<C: Terminal>(terminal: &mut C, message: &str) -> Result<(), TermError> {
    write_status(terminal, StatusLevel::Error, message)
}

/// Writes a yellow `!` status line.
pub fn write_warning<C: Terminal>(terminal: &mut C, message: &str) -> Result<(), TermError> {
    write_status(terminal, StatusLevel::Warning, message)
}
