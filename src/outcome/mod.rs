//! Success/failure composition layer.
//!
//! This module provides the two containers everything else in the crate
//! produces and consumes:
//!
//! - [`Outcome`]: a value that is either a success carrying a value or a
//!   failure carrying a non-empty error message
//! - [`AsyncOutcome`]: an `Outcome` whose availability is deferred behind a
//!   pending asynchronous computation (feature `async`)
//!
//! Fallible operations never panic and never throw across a public boundary;
//! they return one of these containers, and callers chain them with the
//! combinators (`map`, `bind`, `combine`) and the side-effect hooks
//! (`on_success`, `on_failure`). A chain short-circuits on its first failure:
//! no later transform or hook runs, and the final error message is exactly
//! the first failure's message.
//!
//! # Examples
//!
//! ```rust
//! use termflow::outcome::Outcome;
//!
//! let outcome = Outcome::success(20)
//!     .map(|n| n + 1)
//!     .bind(|n| {
//!         if n % 2 == 1 {
//!             Outcome::success(n * 2)
//!         } else {
//!             Outcome::failure("expected an odd number")
//!         }
//!     });
//! assert_eq!(outcome.value(), Some(42));
//! ```

mod container;

#[cfg(feature = "async")]
mod deferred;

pub use container::Outcome;

#[cfg(feature = "async")]
pub use deferred::AsyncOutcome;
