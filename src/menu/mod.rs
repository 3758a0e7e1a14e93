//! Selection menus.
//!
//! Two flavors over an ordered sequence of `(label, value)` options:
//!
//! - [`Select`]: prints a 1-based numbered list and delegates to the input
//!   reader for a validated index
//! - [`MultiSelect`]: an interactive keyboard loop with a cursor and
//!   per-option checkboxes, returning every toggled value in original order
//!
//! Both reject an empty option sequence at entry, so the multi-select's
//! wrap-around cursor arithmetic never divides by zero.
//!
//! # Examples
//!
//! ```rust
//! use termflow::menu::Select;
//! use termflow::terminal::TestTerminal;
//!
//! let mut terminal = TestTerminal::new().with_lines(["2"]);
//! let outcome = Select::new()
//!     .item("Alpha", 1)
//!     .item("Beta", 2)
//!     .read_from(&mut terminal);
//! assert_eq!(outcome.value(), Some(2));
//! ```

use crate::input::{Prompt, input_failure};
use crate::outcome::Outcome;
use crate::terminal::{Console, Key, TermError, Terminal};

const NO_OPTIONS_MESSAGE: &str = "No options to select from.";
const INVALID_SELECTION_MESSAGE: &str = "Invalid selection.";

/// A single-choice menu: numbered list plus a validated index read.
///
/// Option order defines both the display order and the 1-based number the
/// user types. Out-of-range numbers are rejected by the reader's validation
/// (`"Invalid selection."`) and consume a retry rather than failing the
/// whole selection.
pub struct Select<T> {
    options: Vec<(String, T)>,
    prompt: String,
    max_retries: usize,
}

impl<T> Default for Select<T> {
    fn default() -> Self {
        Self {
            options: Vec::new(),
            prompt: "Select an option:".to_string(),
            max_retries: 0,
        }
    }
}

impl<T> Select<T> {
    /// Creates an empty single-choice menu.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the heading written above the list
    /// (default `"Select an option:"`).
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Appends one option.
    #[must_use]
    pub fn item(mut self, label: impl Into<String>, value: T) -> Self {
        self.options.push((label.into(), value));
        self
    }

    /// Appends options in iteration order.
    #[must_use]
    pub fn items<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
    {
        self.options
            .extend(options.into_iter().map(|(label, value)| (label.into(), value)));
        self
    }

    /// Bounds the index-read attempts; `0` retries without bound
    /// (see [`Prompt::max_retries`]).
    #[must_use]
    pub const fn max_retries(mut self, bound: usize) -> Self {
        self.max_retries = bound;
        self
    }

    /// Renders the menu on `terminal` and reads one validated choice.
    pub fn read_from<C: Terminal>(self, terminal: &mut C) -> Outcome<T> {
        let Self {
            options,
            prompt,
            max_retries,
        } = self;
        if options.is_empty() {
            return Outcome::failure(NO_OPTIONS_MESSAGE);
        }

        if let Err(error) = terminal.write_line(&prompt) {
            return input_failure(&error);
        }
        for (index, (label, _)) in options.iter().enumerate() {
            if let Err(error) = terminal.write_line(&format!("{}. {label}", index + 1)) {
                return input_failure(&error);
            }
        }

        let count = options.len();
        Prompt::<usize>::new()
            .with_prompt("Enter number: ")
            .validate_with(move |choice| (1..=count).contains(choice))
            .validation_message(INVALID_SELECTION_MESSAGE)
            .max_retries(max_retries)
            .read_from(terminal)
            .bind(move |choice| {
                options.into_iter().nth(choice - 1).map_or_else(
                    || Outcome::failure(INVALID_SELECTION_MESSAGE),
                    |(_, value)| Outcome::success(value),
                )
            })
    }

    /// Renders the menu on the real console and reads one validated choice.
    pub fn interact(self) -> Outcome<T> {
        self.read_from(&mut Console::new())
    }
}

/// A multi-choice menu: keyboard-driven cursor and checkbox loop.
///
/// Up/Down move the cursor with wrap-around, Space toggles the highlighted
/// option, Enter confirms, and every other key is ignored. The loop blocks
/// until Enter; there is no timeout and no way to cancel. Confirming with
/// nothing toggled succeeds with an empty list.
///
/// # Examples
///
/// ```rust
/// use termflow::menu::MultiSelect;
/// use termflow::terminal::{Key, TestTerminal};
///
/// let mut terminal = TestTerminal::new().with_keys([
///     Key::Char(' '),
///     Key::Down,
///     Key::Char(' '),
///     Key::Enter,
/// ]);
/// let outcome = MultiSelect::new()
///     .item("X", 10)
///     .item("Y", 20)
///     .read_from(&mut terminal);
/// assert_eq!(outcome.value(), Some(vec![10, 20]));
/// ```
pub struct MultiSelect<T> {
    options: Vec<(String, T)>,
    prompt: String,
}

impl<T> Default for MultiSelect<T> {
    fn default() -> Self {
        Self {
            options: Vec::new(),
            prompt: "Select items (Space to toggle, Enter to confirm):".to_string(),
        }
    }
}

impl<T> MultiSelect<T> {
    /// Creates an empty multi-choice menu.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the heading written above the list.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Appends one option.
    #[must_use]
    pub fn item(mut self, label: impl Into<String>, value: T) -> Self {
        self.options.push((label.into(), value));
        self
    }

    /// Appends options in iteration order.
    #[must_use]
    pub fn items<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
    {
        self.options
            .extend(options.into_iter().map(|(label, value)| (label.into(), value)));
        self
    }

    /// Runs the selection loop on `terminal` until the user confirms.
    pub fn read_from<C: Terminal>(self, terminal: &mut C) -> Outcome<Vec<T>> {
        if self.options.is_empty() {
            return Outcome::failure(NO_OPTIONS_MESSAGE);
        }

        // Loop-local state, created here and dropped on return; nothing
        // outside the loop ever observes it.
        let mut state = SelectionState::new(self.options.len());
        loop {
            if let Err(error) = render_rows(terminal, &self.prompt, &self.options, &state) {
                return input_failure(&error);
            }
            match terminal.read_key() {
                Ok(Key::Up) => state.move_up(),
                Ok(Key::Down) => state.move_down(),
                Ok(Key::Char(' ')) => state.toggle(),
                Ok(Key::Enter) => break,
                Ok(_) => {}
                Err(error) => return input_failure(&error),
            }
        }

        let values = self
            .options
            .into_iter()
            .zip(state.selected)
            .filter_map(|((_, value), selected)| selected.then_some(value))
            .collect();
        Outcome::success(values)
    }

    /// Runs the selection loop on the real console.
    pub fn interact(self) -> Outcome<Vec<T>> {
        self.read_from(&mut Console::new())
    }
}

fn render_rows<C: Terminal, T>(
    terminal: &mut C,
    prompt: &str,
    options: &[(String, T)],
    state: &SelectionState,
) -> Result<(), TermError> {
    terminal.clear()?;
    terminal.write_line(prompt)?;
    terminal.write_line("")?;
    for (index, (label, _)) in options.iter().enumerate() {
        let cursor = if index == state.cursor { "> " } else { "  " };
        let checkbox = if state.selected[index] { "[x] " } else { "[ ] " };
        terminal.write(cursor)?;
        terminal.write(checkbox)?;
        terminal.write_line(label)?;
    }
    Ok(())
}

/// Transient multi-select loop state: a highlighted row plus one selected
/// flag per option, index-aligned with the option sequence.
struct SelectionState {
    cursor: usize,
    selected: Vec<bool>,
}

impl SelectionState {
    /// `count` must be non-zero; both menus reject empty option sequences
    /// before constructing state.
    fn new(count: usize) -> Self {
        Self {
            cursor: 0,
            selected: vec![false; count],
        }
    }

    fn move_up(&mut self) {
        let count = self.selected.len();
        self.cursor = (self.cursor + count - 1) % count;
    }

    fn move_down(&mut self) {
        self.cursor = (self.cursor + 1) % self.selected.len();
    }

    fn toggle(&mut self) {
        self.selected[self.cursor] = !self.selected[self.cursor];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn cursor_wraps_upward_from_zero() {
        let mut state = SelectionState::new(2);
        state.move_up();
        assert_eq!(state.cursor, 1);
    }

    #[rstest]
    fn up_then_down_returns_to_start() {
        // (0 - 1 + 2) % 2 = 1, then (1 + 1) % 2 = 0.
        let mut state = SelectionState::new(2);
        state.move_up();
        state.move_down();
        assert_eq!(state.cursor, 0);
    }

    #[rstest]
    fn cursor_wraps_downward_from_last() {
        let mut state = SelectionState::new(3);
        state.move_down();
        state.move_down();
        state.move_down();
        assert_eq!(state.cursor, 0);
    }

    #[rstest]
    fn toggle_flips_only_the_highlighted_flag() {
        let mut state = SelectionState::new(3);
        state.move_down();
        state.toggle();
        assert_eq!(state.selected, vec![false, true, false]);
        state.toggle();
        assert_eq!(state.selected, vec![false, false, false]);
    }
}
