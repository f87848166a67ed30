//! Single-pass operations over ordered sequences of [`Outcome`] values.
//!
//! Every operation here visits each input element exactly once, computing all
//! of its outputs during that visit: [`partition`] builds both variant lists
//! together rather than traversing twice, [`analyze`] counts everything it
//! will ever report in one sweep, and [`all`] stops scanning the moment it
//! meets a [`Failure`](crate::outcome::Outcome::Failure).
//!
//! # Sparse sequences
//! Inputs may be sparse: every operation accepts items convertible into
//! `Option<Outcome<T, E>>`, so a plain `Vec<Outcome<T, E>>` and a
//! `Vec<Option<Outcome<T, E>>>` both work. A `None` entry is treated as
//! absent - skipped without incrementing any variant counter and without
//! being an error - except that the raw sequence length reported as `total`
//! by [`analyze`] and [`partition_with`] does include missing entries. This
//! tolerance is a contract, not an accident: callers commonly materialise
//! sparse result slots and fill them as work completes.
//!
//! # Panics
//! None of these operations panic on well-formed input, including empty and
//! all-`None` sequences. Panics raised by caller-supplied closures or futures
//! are programmer errors and propagate untouched.
//!
//! [`Outcome`]: crate::outcome::Outcome

#[cfg(feature = "future")]
mod future;
mod partition;
mod reducers;
mod stats;
mod tests;

#[cfg(feature = "future")]
pub use future::*;
pub use partition::*;
pub use reducers::*;
pub use stats::*;
