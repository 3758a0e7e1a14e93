//! # termflow
//!
//! Composable terminal interactions: validated prompts, masked secret
//! entry, selection menus, and table/progress rendering, all built on a
//! typed success/failure algebra instead of exception-style control flow.
//!
//! ## Overview
//!
//! Every fallible operation in this crate returns an
//! [`Outcome`](outcome::Outcome) (or, behind the `async` feature, an
//! [`AsyncOutcome`](outcome::AsyncOutcome)). Callers chain reads and
//! selections with `map`/`bind`/`combine` and branch on the final state
//! with the `on_success`/`on_failure` hooks; a chain short-circuits on its
//! first failure and preserves that failure's message exactly.
//!
//! - **`outcome`**: the composition layer
//! - **`terminal`**: the console seam (real backend + scripted test backend)
//! - **`input`**: retry-bounded validated reading, masked entry
//! - **`menu`**: single- and multi-choice selection
//! - **`render`**: status lines, tables, progress bars
//!
//! ## Feature Flags
//!
//! - `interact` (default): terminal backend, readers, menus, renderers
//! - `async` (default): `AsyncOutcome` and the async combinator surface
//!
//! ## Example
//!
//! ```rust
//! use termflow::input::Prompt;
//! use termflow::menu::Select;
//! use termflow::terminal::TestTerminal;
//!
//! // Scripted here; swap in `.interact()` against the real console.
//! let mut terminal = TestTerminal::new().with_lines(["3", "1"]);
//!
//! let outcome = Prompt::<u32>::new()
//!     .with_prompt("Workers: ")
//!     .validate_with(|n| *n > 0)
//!     .read_from(&mut terminal)
//!     .bind(|workers| {
//!         Select::new()
//!             .item("staging", "stg")
//!             .item("production", "prd")
//!             .read_from(&mut terminal)
//!             .map(|env| (workers, env))
//!     });
//! assert_eq!(outcome.value(), Some((3, "stg")));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::redundant_closure_for_method_calls)]

pub mod outcome;

#[cfg(feature = "interact")]
pub mod input;
#[cfg(feature = "interact")]
pub mod menu;
#[cfg(feature = "interact")]
pub mod render;
#[cfg(feature = "interact")]
pub mod terminal;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use termflow::prelude::*;
/// ```
pub mod prelude {
    pub use crate::outcome::Outcome;

    #[cfg(feature = "async")]
    pub use crate::outcome::AsyncOutcome;

    #[cfg(feature = "interact")]
    pub use crate::input::{FromInput, Password, Prompt};
    #[cfg(feature = "interact")]
    pub use crate::menu::{MultiSelect, Select};
    #[cfg(feature = "interact")]
    pub use crate::render::{ProgressBar, StatusLevel, Table};
    #[cfg(feature = "interact")]
    pub use crate::terminal::{Console, Key, TermError, Terminal, TestTerminal};
}
