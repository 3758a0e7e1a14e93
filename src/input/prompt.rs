//! Retry-bounded validated line reading.

use crate::input::{FromInput, MAX_RETRIES_MESSAGE, VALIDATION_FAILED_MESSAGE, input_failure};
use crate::outcome::Outcome;
use crate::terminal::{Console, Terminal};

/// A retry-bounded, validated reader for one value of type `T`.
///
/// Each attempt prompts, reads one line, parses it via [`FromInput`], and
/// runs the optional validation predicate. Parse failures and rejected
/// values are reported to the user and consume one attempt; a valid value
/// returns immediately; exhausting a positive retry bound returns
/// `Failure("Max retries reached.")`. The reader never panics - terminal
/// errors surface as `Failure("Input error: ...")`.
///
/// # Examples
///
/// ```rust
/// use termflow::input::Prompt;
/// use termflow::terminal::TestTerminal;
///
/// let mut terminal = TestTerminal::new().with_lines(["12"]);
/// let outcome = Prompt::<u32>::new()
///     .with_prompt("How many? ")
///     .read_from(&mut terminal);
/// assert_eq!(outcome.value(), Some(12));
/// ```
pub struct Prompt<'a, T> {
    prompt: Option<String>,
    validator: Option<Box<dyn Fn(&T) -> bool + 'a>>,
    validation_message: Option<String>,
    max_retries: usize,
}

impl<T> Default for Prompt<'_, T> {
    fn default() -> Self {
        Self {
            prompt: None,
            validator: None,
            validation_message: None,
            max_retries: 0,
        }
    }
}

impl<'a, T: FromInput> Prompt<'a, T> {
    /// Creates a reader with no validation and unlimited retries.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the prompt text written before each attempt.
    ///
    /// Without one, the prompt is derived from the target type:
    /// `"Please enter <label>: "`.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    /// Requires parsed values to satisfy `predicate`.
    ///
    /// Rejected values echo the validation message and consume one attempt.
    #[must_use]
    pub fn validate_with<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&T) -> bool + 'a,
    {
        self.validator = Some(Box::new(predicate));
        self
    }

    /// Sets the message echoed when validation rejects a value
    /// (default `"Validation failed."`).
    #[must_use]
    pub fn validation_message(mut self, message: impl Into<String>) -> Self {
        self.validation_message = Some(message.into());
        self
    }

    /// Bounds the number of attempts.
    ///
    /// Surprising but deliberate: `0` does NOT mean "no retries" - it means
    /// the reader retries without bound until input parses and validates.
    /// Pass `1` for a single attempt.
    #[must_use]
    pub const fn max_retries(mut self, bound: usize) -> Self {
        self.max_retries = bound;
        self
    }

    /// Runs the attempt loop against `terminal`.
    pub fn read_from<C: Terminal>(self, terminal: &mut C) -> Outcome<T> {
        let mut attempts = 0;
        loop {
            if self.max_retries > 0 && attempts >= self.max_retries {
                return Outcome::failure(MAX_RETRIES_MESSAGE);
            }

            let prompt = self
                .prompt
                .clone()
                .unwrap_or_else(|| format!("Please enter {}: ", T::type_label()));
            if let Err(error) = terminal.write(&prompt) {
                return input_failure(&error);
            }

            let line = match terminal.read_line() {
                Ok(line) => line,
                Err(error) => return input_failure(&error),
            };

            match Result::from(T::from_input(&line)) {
                Ok(value) => {
                    if self.validator.as_ref().is_none_or(|validate| validate(&value)) {
                        return Outcome::success(value);
                    }
                    let message = self
                        .validation_message
                        .as_deref()
                        .unwrap_or(VALIDATION_FAILED_MESSAGE);
                    if let Err(error) = terminal.write_line(message) {
                        return input_failure(&error);
                    }
                }
                Err(message) => {
                    if let Err(error) = terminal.write_line(&format!("Input error: {message}")) {
                        return input_failure(&error);
                    }
                }
            }

            attempts += 1;
        }
    }

    /// Runs the attempt loop against the real console.
    pub fn interact(self) -> Outcome<T> {
        self.read_from(&mut Console::new())
    }
}
