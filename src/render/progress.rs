//! Single-line progress bar rendering.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;

use crate::terminal::{TermError, Terminal};

/// Renders the bar segment for `percent` of a `width`-cell bar.
///
/// The percentage is clamped to `[0, 100]`; the number of filled cells is
/// `width * percent / 100`, rounded to nearest.
///
/// # Examples
///
/// ```rust
/// use termflow::render::bar;
///
/// assert_eq!(bar(0.0, 4, '#', '-'), "----");
/// assert_eq!(bar(50.0, 4, '#', '-'), "##--");
/// assert_eq!(bar(100.0, 4, '#', '-'), "####");
/// ```
pub fn bar(percent: f64, width: usize, fill: char, empty: char) -> String {
    let percent = percent.clamp(0.0, 100.0);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let filled = ((width as f64 * percent / 100.0).round() as usize).min(width);
    let mut rendered = String::with_capacity(width);
    for _ in 0..filled {
        rendered.push(fill);
    }
    for _ in filled..width {
        rendered.push(empty);
    }
    rendered
}

/// Configuration for a redrawing single-line progress bar.
///
/// Defaults match the classic shape: message `"Processing"`, a 20-cell bar
/// of `#` over `-`.
#[derive(Debug, Clone)]
pub struct ProgressBar {
    message: String,
    width: usize,
    fill: char,
    empty: char,
}

impl Default for ProgressBar {
    fn default() -> Self {
        Self {
            message: "Processing".to_string(),
            width: 20,
            fill: '#',
            empty: '-',
        }
    }
}

impl ProgressBar {
    /// Creates a bar with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the label written before the bar.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Sets the bar width in cells; a zero-width bar suppresses the bar line
    /// but still terminates it at 100%.
    #[must_use]
    pub const fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Sets the character for completed cells (default `#`).
    #[must_use]
    pub const fn fill_char(mut self, fill: char) -> Self {
        self.fill = fill;
        self
    }

    /// Sets the character for remaining cells (default `-`).
    #[must_use]
    pub const fn empty_char(mut self, empty: char) -> Self {
        self.empty = empty;
        self
    }

    /// Creates a reporter that redraws this bar on `terminal`.
    ///
    /// The terminal is shared because the reporting operation typically runs
    /// concurrently with other work holding the same device.
    pub fn reporter<C: Terminal>(self, terminal: Arc<Mutex<C>>) -> ProgressReporter<C> {
        ProgressReporter {
            terminal,
            finished: Arc::new(AtomicBool::new(false)),
            config: self,
        }
    }

    /// Runs an asynchronous `operation`, handing it a reporter for this bar.
    ///
    /// The operation drives its own progress; this merely wires the channel.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    /// use parking_lot::Mutex;
    /// use termflow::render::ProgressBar;
    /// use termflow::terminal::Console;
    ///
    /// let terminal = Arc::new(Mutex::new(Console::new()));
    /// ProgressBar::new()
    ///     .with_message("Syncing")
    ///     .show(terminal, |progress| async move {
    ///         for step in 0..=4 {
    ///             progress.report(f64::from(step) * 25.0).ok();
    ///         }
    ///     })
    ///     .await;
    /// ```
    #[cfg(feature = "async")]
    pub async fn show<C, F, Fut, A>(self, terminal: Arc<Mutex<C>>, operation: F) -> A
    where
        C: Terminal,
        F: FnOnce(ProgressReporter<C>) -> Fut,
        Fut: Future<Output = A>,
    {
        operation(self.reporter(terminal)).await
    }
}

/// The percentage channel handed to a reporting operation.
///
/// Each [`report`](ProgressReporter::report) redraws the bar in place with a
/// carriage return; the first report at or above 100% also terminates the
/// line with a newline.
pub struct ProgressReporter<C> {
    terminal: Arc<Mutex<C>>,
    finished: Arc<AtomicBool>,
    config: ProgressBar,
}

impl<C> Clone for ProgressReporter<C> {
    fn clone(&self) -> Self {
        Self {
            terminal: Arc::clone(&self.terminal),
            finished: Arc::clone(&self.finished),
            config: self.config.clone(),
        }
    }
}

impl<C: Terminal> ProgressReporter<C> {
    /// Redraws the bar at `percent` (clamped to `[0, 100]`).
    pub fn report(&self, percent: f64) -> Result<(), TermError> {
        let percent = percent.clamp(0.0, 100.0);
        let mut terminal = self.terminal.lock();
        if self.config.width > 0 {
            let rendered = bar(percent, self.config.width, self.config.fill, self.config.empty);
            terminal.write(&format!(
                "\r{}: [{rendered}] {percent:.1}% ",
                self.config.message
            ))?;
        }
        if percent >= 100.0 && !self.finished.swap(true, Ordering::Relaxed) {
            terminal.write_line("")?;
        }
        Ok(())
    }
}
