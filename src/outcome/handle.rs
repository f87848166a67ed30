use std::panic::{self, UnwindSafe};

use super::Caught;
use super::Outcome::{self, Failure, Success};

/// Invokes a zero-argument operation, converting a panic into a
/// [`Failure`] carrying the panic payload as a [`Caught`] value.
///
/// A returning operation always yields a [`Success`] with its return value,
/// even when that value is itself an [`Outcome`] - no implicit flattening
/// happens here.
///
/// # Examples
/// ```
/// # use outcomes::outcome::handle;
/// let lengths: Vec<usize> = Vec::new();
/// let shortest = handle(move || lengths[0]);
/// assert!(shortest.is_failure());
/// ```
pub fn handle<T, F>(op: F) -> Outcome<T, Caught>
where
    F: FnOnce() -> T + UnwindSafe,
{
    match panic::catch_unwind(op) {
        Ok(value) => Success(value),
        Err(payload) => Failure(Caught::new(payload)),
    }
}

/// The asynchronous counterpart of [`handle`]: invokes an operation that
/// produces a future, awaits it, and converts a panic raised at either stage
/// into a [`Failure`].
///
/// The returned future's output is always an [`Outcome`]; an operation-level
/// panic never escapes as a panic of the returned future, whether it happened
/// while constructing the future or while polling it.
///
/// # Examples
/// ```
/// # use futures::executor::block_on;
/// # use outcomes::outcome::handle_async;
/// let doubled = block_on(handle_async(|| async { 21 * 2 }));
/// assert_eq!(doubled.unwrap(), 42);
///
/// let exploded = block_on(handle_async(|| async { panic!("lost the plot") }));
/// assert_eq!(exploded.map(|()| ()).unwrap_failure().message(), Some("lost the plot"));
/// ```
#[cfg(feature = "future")]
pub async fn handle_async<T, F, Fut>(op: F) -> Outcome<T, Caught>
where
    F: FnOnce() -> Fut + UnwindSafe,
    Fut: Future<Output = T>,
{
    use std::panic::AssertUnwindSafe;

    use futures::FutureExt;

    let fut = match panic::catch_unwind(op) {
        Ok(fut) => fut,
        Err(payload) => return Failure(Caught::new(payload)),
    };
    // The operation itself was unwind-safe; the future it built inherits that.
    match AssertUnwindSafe(fut).catch_unwind().await {
        Ok(value) => Success(value),
        Err(payload) => Failure(Caught::new(payload)),
    }
}
