//! Validated input reading.
//!
//! [`Prompt`] reads one line per attempt, parses it through [`FromInput`],
//! applies an optional validation predicate, and retries up to a bound
//! before giving up with a failure. [`Password`] follows the same retry
//! contract but collects input key by key, echoing a mask character instead
//! of the typed one.
//!
//! Retry accounting: a parse failure and a rejected validation each consume
//! one attempt; `max_retries == 0` means unlimited attempts (see
//! [`Prompt::max_retries`]).
//!
//! # Examples
//!
//! ```rust
//! use termflow::input::Prompt;
//! use termflow::terminal::TestTerminal;
//!
//! let mut terminal = TestTerminal::new().with_lines(["abc", "5"]);
//! let outcome = Prompt::<i32>::new()
//!     .validate_with(|n| *n > 0)
//!     .max_retries(3)
//!     .read_from(&mut terminal);
//! assert_eq!(outcome.value(), Some(5));
//! ```

mod parse;
mod password;
mod prompt;

pub use parse::FromInput;
pub use password::Password;
pub use prompt::Prompt;

use crate::outcome::Outcome;
use crate::terminal::TermError;

/// Fixed message returned when a positive retry bound is exhausted.
pub(crate) const MAX_RETRIES_MESSAGE: &str = "Max retries reached.";

/// Default message echoed when a validation predicate rejects a value.
pub(crate) const VALIDATION_FAILED_MESSAGE: &str = "Validation failed.";

/// Converts a terminal-level error into the failure the public contract
/// promises. Retrying cannot help once the device itself has failed, so
/// these abort the attempt loop immediately.
pub(crate) fn input_failure<T>(error: &TermError) -> Outcome<T> {
    Outcome::failure(format!("Input error: {error}"))
}
