//! `AsyncOutcome` - an [`Outcome`] deferred behind a pending computation.
//!
//! An `AsyncOutcome<A>` owns an asynchronous computation that resolves to an
//! `Outcome<A>`. Nothing runs until the value is awaited (via
//! [`AsyncOutcome::resolve`] or `.await` directly), and it resolves exactly
//! once. Combinators attach continuation steps that execute after resolution,
//! in attachment order, with the same short-circuit semantics as the
//! synchronous container: once a failure appears, no later transform or hook
//! runs.
//!
//! # Examples
//!
//! ```rust,ignore
//! use termflow::outcome::{AsyncOutcome, Outcome};
//!
//! #[tokio::main]
//! async fn main() {
//!     let outcome = AsyncOutcome::new(|| async { Outcome::success(20) })
//!         .map(|n| n + 1)
//!         .bind(|n| Outcome::success(n * 2))
//!         .resolve()
//!         .await;
//!     assert_eq!(outcome.value(), Some(42));
//! }
//! ```

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use crate::outcome::Outcome;

type BoxedOutcomeFuture<A> = Pin<Box<dyn Future<Output = Outcome<A>> + Send>>;
type Thunk<A> = Box<dyn FnOnce() -> BoxedOutcomeFuture<A> + Send>;

/// An [`Outcome`] whose availability is deferred behind an asynchronous
/// computation.
///
/// The computation does not start until the `AsyncOutcome` is awaited, and
/// the result can be observed only once. Every combinator consumes `self`
/// and produces a new `AsyncOutcome` wrapping the extended chain.
///
/// # Examples
///
/// ```rust,ignore
/// use termflow::outcome::AsyncOutcome;
///
/// #[tokio::main]
/// async fn main() {
///     let outcome = AsyncOutcome::success(42).resolve().await;
///     assert_eq!(outcome.value(), Some(42));
/// }
/// ```
pub struct AsyncOutcome<A> {
    state: DeferredState<A>,
}

enum DeferredState<A> {
    /// Not started: holds the thunk that builds the future on first poll.
    Deferred(Thunk<A>),
    /// Started: polling the underlying future.
    Running(BoxedOutcomeFuture<A>),
    /// Resolved and observed; polling again is an invariant violation.
    Completed,
}

// =============================================================================
// Constructors
// =============================================================================

impl<A: 'static> AsyncOutcome<A> {
    /// Creates an `AsyncOutcome` from a closure producing a future.
    ///
    /// The closure is not invoked, and the future not built, until the
    /// `AsyncOutcome` is awaited.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use termflow::outcome::{AsyncOutcome, Outcome};
    ///
    /// let deferred = AsyncOutcome::new(|| async {
    ///     tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    ///     Outcome::success(42)
    /// });
    /// ```
    pub fn new<F, Fut>(operation: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Outcome<A>> + Send + 'static,
    {
        Self {
            state: DeferredState::Deferred(Box::new(move || Box::pin(operation()))),
        }
    }

    /// Creates an `AsyncOutcome` from an existing future.
    ///
    /// The future should not have been polled yet.
    pub fn from_future<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = Outcome<A>> + Send + 'static,
    {
        Self {
            state: DeferredState::Deferred(Box::new(move || Box::pin(future))),
        }
    }
}

impl<A: Send + 'static> AsyncOutcome<A> {
    /// Wraps an already-resolved outcome.
    ///
    /// Awaiting the result completes immediately with `outcome`.
    pub fn from_outcome(outcome: Outcome<A>) -> Self {
        Self::new(move || async move { outcome })
    }

    /// Shorthand for an already-resolved success.
    pub fn success(value: A) -> Self {
        Self::from_outcome(Outcome::success(value))
    }

    /// Shorthand for an already-resolved failure.
    ///
    /// Empty messages are coerced the same way [`Outcome::failure`] coerces
    /// them.
    pub fn failure(message: impl Into<String>) -> Self {
        Self::from_outcome(Outcome::failure(message))
    }
}

// =============================================================================
// Execution
// =============================================================================

impl<A> AsyncOutcome<A> {
    /// Drives the computation to completion and returns its outcome.
    ///
    /// Equivalent to awaiting the `AsyncOutcome` directly; the named form
    /// reads better at the end of a combinator chain.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let outcome = AsyncOutcome::success(42).resolve().await;
    /// assert_eq!(outcome.value(), Some(42));
    /// ```
    pub async fn resolve(self) -> Outcome<A> {
        self.await
    }
}

// =============================================================================
// Future Implementation
// =============================================================================

impl<A> Future for AsyncOutcome<A> {
    type Output = Outcome<A>;

    /// Polls the deferred computation.
    ///
    /// First poll takes the stored thunk, builds the underlying future, and
    /// transitions Deferred -> Running; later polls drive the future until it
    /// yields, transitioning Running -> Completed.
    fn poll(self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        // Every state holds boxed data, so the type is Unpin and the
        // projection is a plain mutable borrow.
        let this = self.get_mut();
        loop {
            match &mut this.state {
                DeferredState::Deferred(_) => {
                    let DeferredState::Deferred(thunk) =
                        std::mem::replace(&mut this.state, DeferredState::Completed)
                    else {
                        unreachable!("state checked immediately above");
                    };
                    this.state = DeferredState::Running(thunk());
                }
                DeferredState::Running(future) => {
                    return match future.as_mut().poll(context) {
                        Poll::Ready(outcome) => {
                            this.state = DeferredState::Completed;
                            Poll::Ready(outcome)
                        }
                        Poll::Pending => Poll::Pending,
                    };
                }
                DeferredState::Completed => panic!(
                    "AsyncOutcome polled after completion: \
                     the result of a deferred computation can be observed only once"
                ),
            }
        }
    }
}

// =============================================================================
// Combinators
// =============================================================================

impl<A: Send + 'static> AsyncOutcome<A> {
    /// Transforms the eventual success value, leaving failures untouched.
    ///
    /// The transform runs after the underlying computation resolves and
    /// never runs on a failure.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let outcome = AsyncOutcome::success(21).map(|n| n * 2).resolve().await;
    /// assert_eq!(outcome.value(), Some(42));
    /// ```
    pub fn map<B, F>(self, transform: F) -> AsyncOutcome<B>
    where
        B: Send + 'static,
        F: FnOnce(A) -> B + Send + 'static,
    {
        AsyncOutcome::new(move || async move { self.await.map(transform) })
    }

    /// Sequences a synchronous fallible step after the eventual resolution.
    ///
    /// A failure short-circuits without invoking `operation`.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let outcome = AsyncOutcome::success(42)
    ///     .bind(|n| Outcome::success(n / 2))
    ///     .resolve()
    ///     .await;
    /// assert_eq!(outcome.value(), Some(21));
    /// ```
    pub fn bind<B, F>(self, operation: F) -> AsyncOutcome<B>
    where
        B: Send + 'static,
        F: FnOnce(A) -> Outcome<B> + Send + 'static,
    {
        AsyncOutcome::new(move || async move { self.await.bind(operation) })
    }

    /// Like [`AsyncOutcome::map`], but the transform itself is asynchronous.
    pub fn map_async<B, F, Fut>(self, transform: F) -> AsyncOutcome<B>
    where
        B: Send + 'static,
        F: FnOnce(A) -> Fut + Send + 'static,
        Fut: Future<Output = B> + Send + 'static,
    {
        AsyncOutcome::new(move || async move { self.await.map_async(transform).await })
    }

    /// Like [`AsyncOutcome::bind`], but the fallible step is asynchronous.
    ///
    /// An `AsyncOutcome<B>` is itself a future resolving to `Outcome<B>`, so
    /// a step producing another deferred chain composes directly:
    ///
    /// ```rust,ignore
    /// let outcome = AsyncOutcome::success(42)
    ///     .bind_async(|n| AsyncOutcome::success(n / 2))
    ///     .resolve()
    ///     .await;
    /// assert_eq!(outcome.value(), Some(21));
    /// ```
    pub fn bind_async<B, F, Fut>(self, operation: F) -> AsyncOutcome<B>
    where
        B: Send + 'static,
        F: FnOnce(A) -> Fut + Send + 'static,
        Fut: Future<Output = Outcome<B>> + Send + 'static,
    {
        AsyncOutcome::new(move || async move { self.await.bind_async(operation).await })
    }

    /// Pairs two deferred outcomes, awaiting both CONCURRENTLY.
    ///
    /// Completion order does not affect the result: after both resolve,
    /// [`Outcome::combine`] applies, so the first failing operand in
    /// `self`-then-`other` order wins.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let outcome = AsyncOutcome::success(1)
    ///     .combine(AsyncOutcome::success("a"))
    ///     .resolve()
    ///     .await;
    /// assert_eq!(outcome.value(), Some((1, "a")));
    /// ```
    pub fn combine<B>(self, other: AsyncOutcome<B>) -> AsyncOutcome<(A, B)>
    where
        B: Send + 'static,
    {
        AsyncOutcome::new(move || async move {
            let (first, second) = tokio::join!(self, other);
            first.combine(second)
        })
    }

    /// Attaches a success hook to run after resolution.
    ///
    /// The hook receives a reference to the value, fires exactly once and
    /// only on success, and the outcome passes through unchanged.
    pub fn on_success<F>(self, action: F) -> Self
    where
        F: FnOnce(&A) + Send + 'static,
    {
        Self::new(move || async move { self.await.on_success(action) })
    }

    /// Attaches a failure hook to run after resolution.
    ///
    /// The hook receives the error message, fires exactly once and only on
    /// failure, and the outcome passes through unchanged.
    pub fn on_failure<F>(self, action: F) -> Self
    where
        F: FnOnce(&str) + Send + 'static,
    {
        Self::new(move || async move { self.await.on_failure(action) })
    }

    /// Like [`AsyncOutcome::on_success`], but the hook is asynchronous.
    ///
    /// The hook receives a clone of the value; the original passes through.
    pub fn on_success_async<F, Fut>(self, action: F) -> Self
    where
        A: Clone,
        F: FnOnce(A) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        Self::new(move || async move { self.await.on_success_async(action).await })
    }

    /// Like [`AsyncOutcome::on_failure`], but the hook is asynchronous.
    pub fn on_failure_async<F, Fut>(self, action: F) -> Self
    where
        F: FnOnce(String) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        Self::new(move || async move { self.await.on_failure_async(action).await })
    }
}
