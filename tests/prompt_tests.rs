//! Unit tests for the validated line reader and the masked reader.
//!
//! Every test drives the reader through a scripted [`TestTerminal`] and
//! asserts both the returned outcome and the written transcript.

#![cfg(feature = "interact")]

use rstest::rstest;
use termflow::input::{FromInput, Password, Prompt};
use termflow::terminal::{Key, TestTerminal};

// =============================================================================
// Prompt: Parsing and Validation
// =============================================================================

#[rstest]
fn valid_first_attempt_returns_immediately() {
    let mut terminal = TestTerminal::new().with_lines(["42"]);
    let outcome = Prompt::<i32>::new().read_from(&mut terminal);

    assert_eq!(outcome.value(), Some(42));
    assert_eq!(terminal.output(), "Please enter integer: ");
}

#[rstest]
fn unparsable_input_is_reported_and_retried() {
    let mut terminal = TestTerminal::new().with_lines(["abc", "5"]);
    let outcome = Prompt::<i32>::new()
        .with_prompt("Count: ")
        .validate_with(|n| *n > 0)
        .max_retries(3)
        .read_from(&mut terminal);

    assert_eq!(outcome.value(), Some(5));
    assert_eq!(
        terminal.output(),
        "Count: Input error: Cannot parse 'abc' as integer.\nCount: "
    );
}

#[rstest]
fn rejected_value_echoes_the_validation_message() {
    let mut terminal = TestTerminal::new().with_lines(["-3", "7"]);
    let outcome = Prompt::<i32>::new()
        .with_prompt("Count: ")
        .validate_with(|n| *n > 0)
        .validation_message("Must be positive.")
        .read_from(&mut terminal);

    assert_eq!(outcome.value(), Some(7));
    assert!(terminal.output().contains("Must be positive.\n"));
}

#[rstest]
fn default_validation_message_applies() {
    let mut terminal = TestTerminal::new().with_lines(["0", "1"]);
    let outcome = Prompt::<i32>::new()
        .validate_with(|n| *n > 0)
        .read_from(&mut terminal);

    assert_eq!(outcome.value(), Some(1));
    assert!(terminal.output().contains("Validation failed.\n"));
}

#[rstest]
#[case::boolean("true", true)]
#[case::boolean("false", false)]
fn boolean_inputs_parse(#[case] line: &str, #[case] expected: bool) {
    let mut terminal = TestTerminal::new().with_lines([line]);
    let outcome = Prompt::<bool>::new().read_from(&mut terminal);
    assert_eq!(outcome.value(), Some(expected));
}

#[rstest]
fn empty_text_is_rejected() {
    let mut terminal = TestTerminal::new().with_lines(["", "hello"]);
    let outcome = Prompt::<String>::new().read_from(&mut terminal);

    assert_eq!(outcome.value(), Some("hello".to_string()));
    assert!(terminal.output().contains("Input error: Input cannot be empty.\n"));
}

#[rstest]
fn default_prompt_derives_from_the_type_label() {
    let mut terminal = TestTerminal::new().with_lines(["2.5"]);
    let _ = Prompt::<f64>::new().read_from(&mut terminal);
    assert_eq!(terminal.output(), "Please enter decimal: ");
    assert_eq!(f64::type_label(), "decimal");
}

// =============================================================================
// Prompt: Retry Accounting
// =============================================================================

#[rstest]
fn exhausted_retries_fail_with_the_bound_message() {
    let mut terminal = TestTerminal::new().with_lines(["1", "2", "3"]);
    let outcome = Prompt::<i32>::new()
        .with_prompt("n: ")
        .validate_with(|_| false)
        .max_retries(2)
        .read_from(&mut terminal);

    assert_eq!(outcome.error_ref(), Some("Max retries reached."));
    // Two attempts were consumed; the third scripted line was never read.
    assert_eq!(terminal.output().matches("n: ").count(), 2);
}

#[rstest]
fn zero_bound_retries_until_input_passes() {
    let lines = ["x", "y", "z", "w", "9"];
    let mut terminal = TestTerminal::new().with_lines(lines);
    let outcome = Prompt::<i32>::new()
        .with_prompt("n: ")
        .read_from(&mut terminal);

    assert_eq!(outcome.value(), Some(9));
    assert_eq!(terminal.output().matches("n: ").count(), 5);
}

#[rstest]
fn single_attempt_bound_fails_after_one_rejection() {
    let mut terminal = TestTerminal::new().with_lines(["abc"]);
    let outcome = Prompt::<i32>::new().max_retries(1).read_from(&mut terminal);
    assert_eq!(outcome.error_ref(), Some("Max retries reached."));
}

#[rstest]
fn exhausted_script_aborts_with_an_input_error() {
    let mut terminal = TestTerminal::new();
    let outcome = Prompt::<i32>::new().read_from(&mut terminal);

    assert_eq!(outcome.error_ref(), Some("Input error: input stream exhausted"));
}

// =============================================================================
// Password
// =============================================================================

#[rstest]
fn characters_echo_as_masks() {
    let mut terminal = TestTerminal::new().with_keys([
        Key::Char('s'),
        Key::Char('e'),
        Key::Char('c'),
        Key::Enter,
    ]);
    let outcome = Password::new().read_from(&mut terminal);

    assert_eq!(outcome.value(), Some("sec".to_string()));
    assert_eq!(terminal.output(), "Please enter value: ***\n");
}

#[rstest]
fn custom_mask_and_prompt_apply() {
    let mut terminal = TestTerminal::new().with_keys([Key::Char('a'), Key::Enter]);
    let outcome = Password::new()
        .with_prompt("Secret: ")
        .mask('#')
        .read_from(&mut terminal);

    assert_eq!(outcome.value(), Some("a".to_string()));
    assert_eq!(terminal.output(), "Secret: #\n");
}

#[rstest]
fn backspace_removes_the_last_character_and_erases_one_mask() {
    let mut terminal = TestTerminal::new().with_keys([
        Key::Char('a'),
        Key::Char('b'),
        Key::Backspace,
        Key::Char('c'),
        Key::Enter,
    ]);
    let outcome = Password::new().read_from(&mut terminal);

    assert_eq!(outcome.value(), Some("ac".to_string()));
    assert!(terminal.output().contains("**\u{8} \u{8}*"));
}

#[rstest]
fn backspace_on_an_empty_buffer_is_ignored() {
    let mut terminal = TestTerminal::new().with_keys([
        Key::Backspace,
        Key::Char('x'),
        Key::Enter,
    ]);
    let outcome = Password::new().read_from(&mut terminal);

    assert_eq!(outcome.value(), Some("x".to_string()));
    assert!(!terminal.output().contains('\u{8}'));
}

#[rstest]
fn unrelated_keys_are_ignored() {
    let mut terminal = TestTerminal::new().with_keys([
        Key::Up,
        Key::Char('o'),
        Key::Esc,
        Key::Char('k'),
        Key::Other,
        Key::Enter,
    ]);
    let outcome = Password::new().read_from(&mut terminal);

    assert_eq!(outcome.value(), Some("ok".to_string()));
}

#[rstest]
fn rejected_entry_retries_with_the_validation_message() {
    let mut terminal = TestTerminal::new().with_keys([
        Key::Char('a'),
        Key::Enter,
        Key::Char('a'),
        Key::Char('b'),
        Key::Char('c'),
        Key::Enter,
    ]);
    let outcome = Password::new()
        .validate_with(|entered| entered.len() >= 3)
        .validation_message("Too short.")
        .read_from(&mut terminal);

    assert_eq!(outcome.value(), Some("abc".to_string()));
    assert!(terminal.output().contains("Too short.\n"));
}

#[rstest]
fn exhausted_retries_fail_the_masked_reader() {
    let mut terminal = TestTerminal::new().with_keys([Key::Enter, Key::Enter]);
    let outcome = Password::new()
        .validate_with(|entered| !entered.is_empty())
        .max_retries(2)
        .read_from(&mut terminal);

    assert_eq!(outcome.error_ref(), Some("Max retries reached."));
}
