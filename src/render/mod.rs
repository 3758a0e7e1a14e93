//! Presentation helpers: status lines, tables, and progress bars.
//!
//! These are stateless renderers. Each has a pure string core (testable
//! without a terminal) and a thin adapter writing through the
//! [`Terminal`](crate::terminal::Terminal) seam. None of them participate in
//! control flow: composing results is the `outcome` module's job, and
//! callers typically emit a final status line from an `on_success` /
//! `on_failure` hook once a chain resolves.

mod progress;
mod status;
mod table;

pub use progress::{ProgressBar, ProgressReporter, bar};
pub use status::{StatusLevel, status_line, write_error, write_status, write_success, write_warning};
pub use table::Table;
