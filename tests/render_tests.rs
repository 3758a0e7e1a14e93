//! Unit tests for the renderers: status lines, tables, and progress bars.

#![cfg(feature = "interact")]

use std::sync::Arc;

use parking_lot::Mutex;
use rstest::rstest;
use termflow::render::{
    ProgressBar, StatusLevel, Table, bar, status_line, write_error, write_success, write_warning,
};
use termflow::terminal::TestTerminal;

// =============================================================================
// Status Lines
// =============================================================================

#[rstest]
#[case::success(StatusLevel::Success, "\u{2713} saved")]
#[case::error(StatusLevel::Error, "x saved")]
#[case::warning(StatusLevel::Warning, "! saved")]
fn status_line_pairs_the_level_glyph_with_the_message(
    #[case] level: StatusLevel,
    #[case] expected: &str,
) {
    colored::control::set_override(false);
    assert_eq!(status_line(level, "saved"), expected);
}

#[rstest]
fn status_writers_append_one_line_each() {
    colored::control::set_override(false);
    let mut terminal = TestTerminal::new();

    write_success(&mut terminal, "done").unwrap();
    write_error(&mut terminal, "broken").unwrap();
    write_warning(&mut terminal, "careful").unwrap();

    assert_eq!(terminal.output(), "\u{2713} done\nx broken\n! careful\n");
}

// =============================================================================
// Tables
// =============================================================================

struct Person {
    name: &'static str,
    age: u32,
}

#[rstest]
fn columns_widen_to_the_longest_cell() {
    let table = Table::new()
        .column("Name", |person: &Person| person.name.to_string())
        .column("Age", |person: &Person| person.age.to_string());
    let people = [
        Person { name: "Alice", age: 30 },
        Person { name: "Bob", age: 7 },
    ];

    assert_eq!(
        table.render(&people),
        "Name   Age  \n\
         ------------\n\
         Alice  30   \n\
         Bob    7    \n"
    );
}

#[rstest]
fn headers_set_the_minimum_column_width() {
    let table = Table::new().column("Identifier", |value: &u8| value.to_string());

    // "Identifier" is wider than any cell, so the cells pad to it.
    assert_eq!(
        table.render(&[1]),
        "Identifier  \n\
         ------------\n\
         1           \n"
    );
}

#[rstest]
fn empty_items_render_headers_and_separator_only() {
    let table = Table::new().column("Name", |value: &String| value.clone());
    assert_eq!(table.render(&[]), "Name  \n------\n");
}

#[rstest]
fn widths_count_characters_not_bytes() {
    let table = Table::new().column("City", |city: &&str| (*city).to_string());

    // "Zürich" is 6 characters (7 bytes); padding must not overrun.
    assert_eq!(
        table.render(&["Zürich", "Oslo"]),
        "City    \n\
         --------\n\
         Zürich  \n\
         Oslo    \n"
    );
}

#[rstest]
fn write_to_routes_through_the_terminal() {
    let mut terminal = TestTerminal::new();
    let table = Table::new().column("N", |value: &i32| value.to_string());

    table.write_to(&mut terminal, &[5]).unwrap();
    assert_eq!(terminal.output(), "N  \n---\n5  \n");
}

// =============================================================================
// Progress Bars
// =============================================================================

#[rstest]
#[case::empty(0.0, "----------")]
#[case::half(50.0, "#####-----")]
#[case::full(100.0, "##########")]
#[case::rounds_down(33.0, "###-------")]
#[case::rounds_up(35.0, "####------")]
fn bar_fills_proportionally(#[case] percent: f64, #[case] expected: &str) {
    assert_eq!(bar(percent, 10, '#', '-'), expected);
}

#[rstest]
fn bar_clamps_out_of_range_percentages() {
    assert_eq!(bar(-20.0, 4, '#', '-'), "----");
    assert_eq!(bar(150.0, 4, '#', '-'), "####");
}

#[rstest]
fn bar_honors_custom_characters() {
    assert_eq!(bar(50.0, 4, '=', ' '), "==  ");
}

#[rstest]
fn reporter_redraws_in_place() {
    let terminal = Arc::new(Mutex::new(TestTerminal::new()));
    let reporter = ProgressBar::new()
        .with_message("Copying")
        .width(10)
        .reporter(Arc::clone(&terminal));

    reporter.report(0.0).unwrap();
    reporter.report(50.0).unwrap();

    assert_eq!(
        terminal.lock().output(),
        "\rCopying: [----------] 0.0% \rCopying: [#####-----] 50.0% "
    );
}

#[rstest]
fn completion_terminates_the_line_exactly_once() {
    let terminal = Arc::new(Mutex::new(TestTerminal::new()));
    let reporter = ProgressBar::new()
        .with_message("Copying")
        .width(4)
        .reporter(Arc::clone(&terminal));

    reporter.report(100.0).unwrap();
    reporter.report(100.0).unwrap();

    let transcript = terminal.lock().output().to_string();
    assert_eq!(transcript.matches('\n').count(), 1);
    assert!(transcript.contains("\rCopying: [####] 100.0% \n"));
}

#[rstest]
fn clones_share_completion_state() {
    let terminal = Arc::new(Mutex::new(TestTerminal::new()));
    let reporter = ProgressBar::new().width(4).reporter(Arc::clone(&terminal));
    let clone = reporter.clone();

    reporter.report(100.0).unwrap();
    clone.report(100.0).unwrap();

    assert_eq!(terminal.lock().output().matches('\n').count(), 1);
}

#[rstest]
fn zero_width_bar_stays_silent_until_completion() {
    let terminal = Arc::new(Mutex::new(TestTerminal::new()));
    let reporter = ProgressBar::new().width(0).reporter(Arc::clone(&terminal));

    reporter.report(50.0).unwrap();
    assert_eq!(terminal.lock().output(), "");

    reporter.report(100.0).unwrap();
    assert_eq!(terminal.lock().output(), "\n");
}

#[rstest]
fn default_configuration_uses_the_processing_label() {
    let terminal = Arc::new(Mutex::new(TestTerminal::new()));
    let reporter = ProgressBar::new().reporter(Arc::clone(&terminal));

    reporter.report(25.0).unwrap();
    assert_eq!(
        terminal.lock().output(),
        "\rProcessing: [#####---------------] 25.0% "
    );
}

#[cfg(feature = "async")]
mod live_operation {
    use super::*;

    #[tokio::test]
    async fn show_hands_the_operation_a_working_reporter() {
        let terminal = Arc::new(Mutex::new(TestTerminal::new()));
        let total = ProgressBar::new()
            .with_message("Syncing")
            .width(4)
            .show(Arc::clone(&terminal), |reporter| async move {
                for step in 0..=2 {
                    reporter.report(f64::from(step) * 50.0).unwrap();
                }
                42
            })
            .await;

        assert_eq!(total, 42);
        let transcript = terminal.lock().output().to_string();
        assert!(transcript.starts_with("\rSyncing: [----] 0.0% "));
        assert!(transcript.ends_with("\rSyncing: [####] 100.0% \n"));
    }
}
