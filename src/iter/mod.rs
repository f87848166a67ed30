//! Iteration over [`Outcome`](crate::outcome::Outcome) values.
//!
//! A single Outcome iterates like a collection of zero or one success
//! payloads, borrowed or owned, through [`Iter`], [`IterMut`] and
//! [`IntoIter`]. For whole sequences, the [`SparseOutcomes`] extension trait
//! offers lazy adapters that transform success payloads in place while
//! passing failures and missing entries through unchanged.

mod adapt;
mod iter;

pub use adapt::*;
pub use iter::*;
