//! Short-circuiting composition of Outcome-producing steps.
//!
//! [`safe`] drives a step-wise routine through an external runner loop,
//! stopping at the first failure, so multi-stage computations read as a flat
//! sequence of steps instead of nested branches. [`zip`] and its wider
//! siblings combine independent Outcomes positionally, and [`apply`] applies
//! a wrapped function to a wrapped argument.
#![warn(missing_docs)]

mod safe;
mod zip;

pub use safe::*;
pub use zip::*;
