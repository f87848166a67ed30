use futures::future::join_all;

use super::{Partition, all};
use crate::outcome::Outcome;

/// The asynchronous counterpart of [`all`]: awaits every pending Outcome
/// concurrently, then applies the same fail-fast reduction to the resolved
/// sequence.
///
/// Missing entries are filtered out before anything is awaited. Every future
/// is started before any is awaited - a fan-out followed by a single fan-in -
/// so independent work genuinely overlaps; resolving one future at a time
/// would serialise it.
///
/// A future that panics is a programmer error, not a modeled [`Failure`]: the
/// panic propagates out of the aggregate await untouched.
///
/// # Examples
/// ```
/// # use futures::executor::block_on;
/// # use futures::future::ready;
/// # use outcomes::Outcome::{self, Success};
/// # use outcomes::batch::all_async;
/// let pending = vec![ready(Success::<_, &str>(1)), ready(Success(2))];
/// assert_eq!(block_on(all_async(pending)), Success(vec![1, 2]));
/// ```
///
/// [`Failure`]: crate::outcome::Outcome::Failure
pub async fn all_async<T, E, I, F>(futures: I) -> Outcome<Vec<T>, E>
where
    I: IntoIterator,
    I::Item: Into<Option<F>>,
    F: Future<Output = Outcome<T, E>>,
{
    let pending: Vec<F> = futures.into_iter().filter_map(Into::into).collect();
    all(join_all(pending).await)
}

/// Awaits every pending Outcome concurrently and partitions the resolved
/// sequence, never short-circuiting on a modeled [`Failure`].
///
/// The same fan-out-then-fan-in start order as [`all_async`] applies, and a
/// modeled failure in one resolved Outcome never disturbs the others - it
/// simply lands in [`Partition::errors`]. A future that panics, however,
/// still aborts the entire aggregation: per-item capture stops at modeled
/// failures and does not extend to programmer errors.
///
/// # Examples
/// ```
/// # use futures::executor::block_on;
/// # use futures::future::ready;
/// # use outcomes::Outcome::{Failure, Success};
/// # use outcomes::batch::all_settled_async;
/// let pending = vec![ready(Success(1)), ready(Failure("e")), ready(Success(2))];
/// let parts = block_on(all_settled_async(pending));
/// assert_eq!(parts.oks, vec![1, 2]);
/// assert_eq!(parts.errors, vec!["e"]);
/// ```
///
/// [`Failure`]: crate::outcome::Outcome::Failure
pub async fn all_settled_async<T, E, I, F>(futures: I) -> Partition<T, E>
where
    I: IntoIterator,
    I::Item: Into<Option<F>>,
    F: Future<Output = Outcome<T, E>>,
{
    let pending: Vec<F> = futures.into_iter().filter_map(Into::into).collect();
    join_all(pending).await.into_iter().collect()
}
