//! The console seam: a small trait over the terminal device.
//!
//! Readers, menus, and renderers talk to the terminal exclusively through
//! the [`Terminal`] trait. [`Console`] is the real backend over stdin/stdout
//! (raw-mode key reads via crossterm); [`TestTerminal`] is a scripted backend
//! for tests, usable by downstream crates to exercise their own interaction
//! flows without a tty.
//!
//! The crate assumes one interactive session at a time: a single logical
//! reader/writer of the console, no locking. Errors at this layer are
//! [`TermError`]; the readers convert them into `Outcome` failures at the
//! public boundary, so they never escape as panics.

mod console;
mod test;

pub use console::Console;
pub use test::TestTerminal;

use thiserror::Error;

/// A single decoded key press.
///
/// Only the keys the interaction loops care about are distinguished;
/// everything else collapses into [`Key::Other`], which the loops ignore.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A printable (or control) character key.
    Char(char),
    /// The Enter / Return key.
    Enter,
    /// The Backspace key.
    Backspace,
    /// The Up arrow key.
    Up,
    /// The Down arrow key.
    Down,
    /// The Escape key.
    Esc,
    /// Any key without a dedicated variant.
    Other,
}

/// Errors surfaced by a [`Terminal`] backend.
#[derive(Error, Debug)]
pub enum TermError {
    /// The underlying device failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
    /// The input stream is exhausted and can produce no more input.
    #[error("input stream exhausted")]
    Eof,
}

/// The console device as the interaction loops see it.
///
/// Implementations own cursor position and echo behavior; callers own
/// control flow. `read_key` reads exactly one key press without echoing it.
pub trait Terminal {
    /// Writes `text` without a trailing newline, flushing so prompts appear
    /// before the read that follows them.
    fn write(&mut self, text: &str) -> Result<(), TermError>;

    /// Writes `text` followed by a newline.
    fn write_line(&mut self, text: &str) -> Result<(), TermError>;

    /// Reads one line of input, without the trailing line terminator.
    ///
    /// Returns [`TermError::Eof`] if the stream has no more input.
    fn read_line(&mut self) -> Result<String, TermError>;

    /// Blocks until one key press is available and returns it, without echo.
    fn read_key(&mut self) -> Result<Key, TermError>;

    /// Clears the screen and moves the cursor to the top-left corner.
    fn clear(&mut self) -> Result<(), TermError>;
}
