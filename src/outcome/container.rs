//! The `Outcome` container and its synchronous combinators.

use std::fmt;
#[cfg(feature = "async")]
use std::future::Future;

/// Placeholder substituted when a failure is constructed with an empty
/// message, keeping the non-empty invariant without a fallible constructor.
const EMPTY_MESSAGE_PLACEHOLDER: &str = "Unspecified failure.";

/// A value that is either a success or a failure.
///
/// `Outcome<A>` holds exactly one of a success value of type `A` or a failure
/// message. A failure never carries a value, a success never carries a
/// message, and the message is never empty. Outcomes are immutable once
/// constructed: every combinator consumes `self` and produces a new
/// `Outcome`.
///
/// # Examples
///
/// ```rust
/// use termflow::outcome::Outcome;
///
/// let success = Outcome::success(42);
/// assert!(success.is_success());
///
/// let failure: Outcome<i32> = Outcome::failure("something went wrong");
/// assert_eq!(failure.error_ref(), Some("something went wrong"));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Outcome<A> {
    state: State<A>,
}

#[derive(Clone, PartialEq, Eq)]
enum State<A> {
    Success(A),
    Failure(String),
}

// =============================================================================
// Constructors
// =============================================================================

impl<A> Outcome<A> {
    /// Creates a successful outcome holding `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use termflow::outcome::Outcome;
    ///
    /// let outcome = Outcome::success("hello");
    /// assert!(outcome.is_success());
    /// ```
    #[inline]
    pub fn success(value: A) -> Self {
        Self {
            state: State::Success(value),
        }
    }

    /// Creates a failed outcome holding `message`.
    ///
    /// An empty message would break the invariant that failures always carry
    /// an error text, so it is replaced with `"Unspecified failure."` and a
    /// warning is logged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use termflow::outcome::Outcome;
    ///
    /// let failure: Outcome<i32> = Outcome::failure("out of range");
    /// assert_eq!(failure.error_ref(), Some("out of range"));
    ///
    /// let coerced: Outcome<i32> = Outcome::failure("");
    /// assert_eq!(coerced.error_ref(), Some("Unspecified failure."));
    /// ```
    pub fn failure(message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.is_empty() {
            log::warn!("Outcome::failure called with an empty message");
            EMPTY_MESSAGE_PLACEHOLDER.to_string()
        } else {
            message
        };
        Self {
            state: State::Failure(message),
        }
    }

    /// Internal constructor for propagating an already-validated message.
    #[inline]
    pub(crate) fn propagate_failure(message: String) -> Self {
        Self {
            state: State::Failure(message),
        }
    }
}

// =============================================================================
// State Checking
// =============================================================================

impl<A> Outcome<A> {
    /// Returns `true` if this outcome is a success.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use termflow::outcome::Outcome;
    ///
    /// assert!(Outcome::success(1).is_success());
    /// assert!(!Outcome::<i32>::failure("nope").is_success());
    /// ```
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self.state, State::Success(_))
    }

    /// Returns `true` if this outcome is a failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use termflow::outcome::Outcome;
    ///
    /// assert!(Outcome::<i32>::failure("nope").is_failure());
    /// assert!(!Outcome::success(1).is_failure());
    /// ```
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self.state, State::Failure(_))
    }
}

// =============================================================================
// Value Extraction
// =============================================================================

impl<A> Outcome<A> {
    /// Returns the success value, consuming the outcome.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use termflow::outcome::Outcome;
    ///
    /// assert_eq!(Outcome::success(42).value(), Some(42));
    /// assert_eq!(Outcome::<i32>::failure("nope").value(), None);
    /// ```
    #[inline]
    pub fn value(self) -> Option<A> {
        match self.state {
            State::Success(value) => Some(value),
            State::Failure(_) => None,
        }
    }

    /// Returns a reference to the success value if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use termflow::outcome::Outcome;
    ///
    /// assert_eq!(Outcome::success(42).value_ref(), Some(&42));
    /// ```
    #[inline]
    pub const fn value_ref(&self) -> Option<&A> {
        match &self.state {
            State::Success(value) => Some(value),
            State::Failure(_) => None,
        }
    }

    /// Returns the failure message, consuming the outcome.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use termflow::outcome::Outcome;
    ///
    /// let failure: Outcome<i32> = Outcome::failure("nope");
    /// assert_eq!(failure.error(), Some("nope".to_string()));
    /// ```
    #[inline]
    pub fn error(self) -> Option<String> {
        match self.state {
            State::Success(_) => None,
            State::Failure(message) => Some(message),
        }
    }

    /// Returns the failure message as a string slice if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use termflow::outcome::Outcome;
    ///
    /// let failure: Outcome<i32> = Outcome::failure("nope");
    /// assert_eq!(failure.error_ref(), Some("nope"));
    /// assert_eq!(Outcome::success(1).error_ref(), None);
    /// ```
    #[inline]
    pub fn error_ref(&self) -> Option<&str> {
        match &self.state {
            State::Success(_) => None,
            State::Failure(message) => Some(message),
        }
    }

    /// Eliminates the outcome by applying one of two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use termflow::outcome::Outcome;
    ///
    /// let rendered = Outcome::success(42).fold(
    ///     |value| format!("got {value}"),
    ///     |message| format!("failed: {message}"),
    /// );
    /// assert_eq!(rendered, "got 42");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, on_success: F, on_failure: G) -> T
    where
        F: FnOnce(A) -> T,
        G: FnOnce(String) -> T,
    {
        match self.state {
            State::Success(value) => on_success(value),
            State::Failure(message) => on_failure(message),
        }
    }
}

// =============================================================================
// Combinators
// =============================================================================

impl<A> Outcome<A> {
    /// Transforms the success value with `transform`, leaving failures
    /// untouched.
    ///
    /// The function is invoked at most once and never on a failure; a
    /// failure's message propagates unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use termflow::outcome::Outcome;
    ///
    /// assert_eq!(Outcome::success(21).map(|n| n * 2).value(), Some(42));
    ///
    /// let failure: Outcome<i32> = Outcome::failure("nope");
    /// assert_eq!(failure.map(|n| n * 2).error_ref(), Some("nope"));
    /// ```
    #[inline]
    pub fn map<B, F>(self, transform: F) -> Outcome<B>
    where
        F: FnOnce(A) -> B,
    {
        match self.state {
            State::Success(value) => Outcome::success(transform(value)),
            State::Failure(message) => Outcome::propagate_failure(message),
        }
    }

    /// Sequences a fallible step: `operation` runs on success and its outcome
    /// becomes the result; a failure short-circuits without invoking it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use termflow::outcome::Outcome;
    ///
    /// fn half(n: i32) -> Outcome<i32> {
    ///     if n % 2 == 0 {
    ///         Outcome::success(n / 2)
    ///     } else {
    ///         Outcome::failure("odd number")
    ///     }
    /// }
    ///
    /// assert_eq!(Outcome::success(42).bind(half).value(), Some(21));
    /// assert_eq!(Outcome::success(21).bind(half).error_ref(), Some("odd number"));
    /// ```
    #[inline]
    pub fn bind<B, F>(self, operation: F) -> Outcome<B>
    where
        F: FnOnce(A) -> Outcome<B>,
    {
        match self.state {
            State::Success(value) => operation(value),
            State::Failure(message) => Outcome::propagate_failure(message),
        }
    }

    /// Pairs two outcomes: success only if both are successes.
    ///
    /// On failure, the FIRST failing operand wins, evaluated `self` then
    /// `other`: when both have failed, the result carries `self`'s message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use termflow::outcome::Outcome;
    ///
    /// let both = Outcome::success(1).combine(Outcome::success("a"));
    /// assert_eq!(both.value(), Some((1, "a")));
    ///
    /// let first: Outcome<i32> = Outcome::failure("E1");
    /// let second: Outcome<&str> = Outcome::failure("E2");
    /// assert_eq!(first.combine(second).error_ref(), Some("E1"));
    /// ```
    #[inline]
    pub fn combine<B>(self, other: Outcome<B>) -> Outcome<(A, B)> {
        match (self.state, other.state) {
            (State::Success(first), State::Success(second)) => Outcome::success((first, second)),
            (State::Failure(message), _) => Outcome::propagate_failure(message),
            (_, State::Failure(message)) => Outcome::propagate_failure(message),
        }
    }

    /// Invokes `action` with a reference to the value if this is a success,
    /// then returns the outcome unchanged.
    ///
    /// The side effect fires exactly once and only in the success state,
    /// which makes the hook chainable without disturbing the value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use termflow::outcome::Outcome;
    ///
    /// let mut seen = None;
    /// let outcome = Outcome::success(42).on_success(|n| seen = Some(*n));
    /// assert_eq!(seen, Some(42));
    /// assert_eq!(outcome.value(), Some(42));
    /// ```
    #[inline]
    pub fn on_success<F>(self, action: F) -> Self
    where
        F: FnOnce(&A),
    {
        if let State::Success(value) = &self.state {
            action(value);
        }
        self
    }

    /// Invokes `action` with the error message if this is a failure, then
    /// returns the outcome unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use termflow::outcome::Outcome;
    ///
    /// let mut seen = None;
    /// let outcome: Outcome<i32> =
    ///     Outcome::failure("nope").on_failure(|message| seen = Some(message.to_string()));
    /// assert_eq!(seen.as_deref(), Some("nope"));
    /// assert!(outcome.is_failure());
    /// ```
    #[inline]
    pub fn on_failure<F>(self, action: F) -> Self
    where
        F: FnOnce(&str),
    {
        if let State::Failure(message) = &self.state {
            action(message);
        }
        self
    }
}

// =============================================================================
// Async-Callback Combinators
// =============================================================================

#[cfg(feature = "async")]
impl<A> Outcome<A> {
    /// Like [`Outcome::map`], but the transform is asynchronous.
    ///
    /// The future is built and awaited only in the success state.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let outcome = Outcome::success(21).map_async(|n| async move { n * 2 }).await;
    /// assert_eq!(outcome.value(), Some(42));
    /// ```
    pub async fn map_async<B, F, Fut>(self, transform: F) -> Outcome<B>
    where
        F: FnOnce(A) -> Fut,
        Fut: Future<Output = B>,
    {
        match self.state {
            State::Success(value) => Outcome::success(transform(value).await),
            State::Failure(message) => Outcome::propagate_failure(message),
        }
    }

    /// Like [`Outcome::bind`], but the fallible step is asynchronous.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let outcome = Outcome::success(42)
    ///     .bind_async(|n| async move { Outcome::success(n / 2) })
    ///     .await;
    /// assert_eq!(outcome.value(), Some(21));
    /// ```
    pub async fn bind_async<B, F, Fut>(self, operation: F) -> Outcome<B>
    where
        F: FnOnce(A) -> Fut,
        Fut: Future<Output = Outcome<B>>,
    {
        match self.state {
            State::Success(value) => operation(value).await,
            State::Failure(message) => Outcome::propagate_failure(message),
        }
    }

    /// Like [`Outcome::on_success`], but the side effect is asynchronous.
    ///
    /// The callback receives a clone of the value; the original passes
    /// through untouched. It is never invoked on a failure.
    pub async fn on_success_async<F, Fut>(self, action: F) -> Self
    where
        A: Clone,
        F: FnOnce(A) -> Fut,
        Fut: Future<Output = ()>,
    {
        if let State::Success(value) = &self.state {
            action(value.clone()).await;
        }
        self
    }

    /// Like [`Outcome::on_failure`], but the side effect is asynchronous.
    ///
    /// The callback receives a copy of the message; it is never invoked on a
    /// success.
    pub async fn on_failure_async<F, Fut>(self, action: F) -> Self
    where
        F: FnOnce(String) -> Fut,
        Fut: Future<Output = ()>,
    {
        if let State::Failure(message) = &self.state {
            action(message.clone()).await;
        }
        self
    }

    /// Lifts an already-resolved outcome into an [`AsyncOutcome`].
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let outcome = Outcome::success(42).into_deferred().resolve().await;
    /// assert_eq!(outcome.value(), Some(42));
    /// ```
    ///
    /// [`AsyncOutcome`]: crate::outcome::AsyncOutcome
    pub fn into_deferred(self) -> crate::outcome::AsyncOutcome<A>
    where
        A: Send + 'static,
    {
        crate::outcome::AsyncOutcome::from_outcome(self)
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<A: fmt::Debug> fmt::Debug for Outcome<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            State::Success(value) => formatter.debug_tuple("Success").field(value).finish(),
            State::Failure(message) => formatter.debug_tuple("Failure").field(message).finish(),
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl<A> From<Result<A, String>> for Outcome<A> {
    /// Converts a `Result` with a string error into an `Outcome`.
    ///
    /// An empty error message is coerced the same way [`Outcome::failure`]
    /// coerces it.
    #[inline]
    fn from(result: Result<A, String>) -> Self {
        match result {
            Ok(value) => Self::success(value),
            Err(message) => Self::failure(message),
        }
    }
}

impl<A> From<Outcome<A>> for Result<A, String> {
    /// Converts an `Outcome` into a `Result` with a string error.
    #[inline]
    fn from(outcome: Outcome<A>) -> Self {
        match outcome.state {
            State::Success(value) => Ok(value),
            State::Failure(message) => Err(message),
        }
    }
}
