//! A scripted terminal backend for tests.

use std::collections::VecDeque;

use super::{Key, TermError, Terminal};

/// Terminal backend fed from scripted input, capturing all output.
///
/// Lines and keys are consumed in script order; once a script is exhausted,
/// the corresponding read returns [`TermError::Eof`]. Everything written is
/// appended to an output transcript, and screen clears are counted instead
/// of erasing it, so assertions can see the full interaction.
///
/// # Examples
///
/// ```rust
/// use termflow::terminal::{TestTerminal, Terminal};
///
/// let mut terminal = TestTerminal::new().with_lines(["42"]);
/// terminal.write("Enter number: ").unwrap();
/// assert_eq!(terminal.read_line().unwrap(), "42");
/// assert_eq!(terminal.output(), "Enter number: ");
/// ```
#[derive(Debug, Default)]
pub struct TestTerminal {
    lines: VecDeque<String>,
    keys: VecDeque<Key>,
    output: String,
    clears: usize,
}

impl TestTerminal {
    /// Creates a terminal with empty scripts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends scripted lines for `read_line` to return, in order.
    #[must_use]
    pub fn with_lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines.extend(lines.into_iter().map(Into::into));
        self
    }

    /// Appends scripted keys for `read_key` to return, in order.
    #[must_use]
    pub fn with_keys<I>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = Key>,
    {
        self.keys.extend(keys);
        self
    }

    /// Everything written so far, prompts and echoes included.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Number of screen clears requested so far.
    pub const fn clear_count(&self) -> usize {
        self.clears
    }
}

impl Terminal for TestTerminal {
    fn write(&mut self, text: &str) -> Result<(), TermError> {
        self.output.push_str(text);
        Ok(())
    }

    fn write_line(&mut self, text: &str) -> Result<(), TermError> {
        self.output.push_str(text);
        self.output.push('\n');
        Ok(())
    }

    fn read_line(&mut self) -> Result<String, TermError> {
        self.lines.pop_front().ok_or(TermError::Eof)
    }

    fn read_key(&mut self) -> Result<Key, TermError> {
        self.keys.pop_front().ok_or(TermError::Eof)
    }

    fn clear(&mut self) -> Result<(), TermError> {
        self.clears += 1;
        Ok(())
    }
}
