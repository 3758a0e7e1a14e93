//! Masked secret entry.

use crate::input::{MAX_RETRIES_MESSAGE, VALIDATION_FAILED_MESSAGE, input_failure};
use crate::outcome::Outcome;
use crate::terminal::{Console, Key, Terminal};

/// A retry-bounded reader that collects input without echoing it.
///
/// Characters are read one key at a time: each accepted character echoes the
/// mask instead of itself, Backspace removes the last buffered character and
/// erases one mask from the display, and Enter ends the attempt. There is no
/// parse step - the raw buffered string is the candidate value, subject to
/// the same validation and retry accounting as [`Prompt`].
///
/// # Examples
///
/// ```rust
/// use termflow::input::Password;
/// use termflow::terminal::{Key, TestTerminal};
///
/// let mut terminal = TestTerminal::new()
///     .with_keys([Key::Char('h'), Key::Char('i'), Key::Enter]);
/// let outcome = Password::new().read_from(&mut terminal);
/// assert_eq!(outcome.value(), Some("hi".to_string()));
/// assert!(terminal.output().contains("**"));
/// ```
///
/// [`Prompt`]: crate::input::Prompt
pub struct Password<'a> {
    prompt: Option<String>,
    mask: char,
    validator: Option<Box<dyn Fn(&str) -> bool + 'a>>,
    validation_message: Option<String>,
    max_retries: usize,
}

impl Default for Password<'_> {
    fn default() -> Self {
        Self {
            prompt: None,
            mask: '*',
            validator: None,
            validation_message: None,
            max_retries: 0,
        }
    }
}

impl<'a> Password<'a> {
    /// Creates a masked reader with no validation and unlimited retries.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the prompt text (default `"Please enter value: "`).
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    /// Sets the character echoed per accepted input character (default `*`).
    #[must_use]
    pub const fn mask(mut self, mask: char) -> Self {
        self.mask = mask;
        self
    }

    /// Requires entered strings to satisfy `predicate`.
    #[must_use]
    pub fn validate_with<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&str) -> bool + 'a,
    {
        self.validator = Some(Box::new(predicate));
        self
    }

    /// Sets the message echoed when validation rejects an entry
    /// (default `"Validation failed."`).
    #[must_use]
    pub fn validation_message(mut self, message: impl Into<String>) -> Self {
        self.validation_message = Some(message.into());
        self
    }

    /// Bounds the number of attempts; `0` retries without bound
    /// (see [`Prompt::max_retries`]).
    ///
    /// [`Prompt::max_retries`]: crate::input::Prompt::max_retries
    #[must_use]
    pub const fn max_retries(mut self, bound: usize) -> Self {
        self.max_retries = bound;
        self
    }

    /// Runs the attempt loop against `terminal`.
    pub fn read_from<C: Terminal>(self, terminal: &mut C) -> Outcome<String> {
        let mut attempts = 0;
        loop {
            if self.max_retries > 0 && attempts >= self.max_retries {
                return Outcome::failure(MAX_RETRIES_MESSAGE);
            }

            if let Err(error) = terminal.write(self.prompt.as_deref().unwrap_or("Please enter value: ")) {
                return input_failure(&error);
            }

            let entered = match read_masked(terminal, self.mask) {
                Ok(entered) => entered,
                Err(outcome) => return outcome,
            };

            if self.validator.as_ref().is_none_or(|validate| validate(&entered)) {
                return Outcome::success(entered);
            }
            let message = self
                .validation_message
                .as_deref()
                .unwrap_or(VALIDATION_FAILED_MESSAGE);
            if let Err(error) = terminal.write_line(message) {
                return input_failure(&error);
            }

            attempts += 1;
        }
    }

    /// Runs the attempt loop against the real console.
    pub fn interact(self) -> Outcome<String> {
        self.read_from(&mut Console::new())
    }
}

/// Collects one masked entry, ending on Enter. Control characters and keys
/// without a character are ignored.
fn read_masked<C: Terminal>(terminal: &mut C, mask: char) -> Result<String, Outcome<String>> {
    let mut buffer = String::new();
    loop {
        let key = terminal.read_key().map_err(|error| input_failure(&error))?;
        match key {
            Key::Enter => break,
            Key::Backspace => {
                if buffer.pop().is_some() {
                    terminal
                        .write("\u{8} \u{8}")
                        .map_err(|error| input_failure(&error))?;
                }
            }
            Key::Char(character) if !character.is_control() => {
                buffer.push(character);
                terminal
                    .write(&mask.to_string())
                    .map_err(|error| input_failure(&error))?;
            }
            _ => {}
        }
    }
    terminal
        .write_line("")
        .map_err(|error| input_failure(&error))?;
    Ok(buffer)
}
