//! Success-or-failure values ([`Outcome`]) and a library of pure functions for
//! working with whole batches of them at once.
//!
//! # Purpose
//! Plenty of code produces many fallible results at a time: a page of form
//! fields, a directory of parsed entries, a fan-out of requests. Handling each
//! [`Outcome`] on its own leads to repeated bookkeeping loops, so this crate
//! collects the loops in one place: partitioning, counting, fail-fast
//! reduction and first-match searches, each written as a single left-to-right
//! pass. Sequences are allowed to be sparse - a missing entry is an explicit
//! `None`, skipped silently rather than treated as a defect - because callers
//! commonly materialise result slots before all of them are filled.
//!
//! # Layers
//! The crate is split into independently compiled layers so that consumers
//! only pay for what they use. [`outcome`] is always present; the rest sit
//! behind Cargo features:
//! - `batch` (default): single-pass operations over sequences of Outcomes.
//! - `iter` (default): iteration over single Outcomes and lazy adapters over
//!   sparse sequences.
//! - `pattern` (default): step-wise short-circuiting composition and
//!   positional combination.
//! - `future` (default): concurrent aggregation of pending Outcomes and the
//!   async exception adapter, via the `futures` crate.
//! - `schema` (opt-in): bridges `jsonschema` validation outcomes into
//!   [`Outcome`] values.
//!
//! # Error Handling
//! Two error universes exist here and are deliberately kept apart. A
//! [`Failure`](Outcome::Failure) is ordinary data: it is returned, stored,
//! partitioned and counted, and never raised. Panics are reserved for
//! programmer errors, and no batch operation will intercept one. The two
//! bridges between the universes are explicit: [`Outcome::unwrap`] turns a
//! modeled failure into a panic on request, and [`handle`](outcome::handle)
//! turns a panic into a modeled failure.

#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod outcome;

#[cfg(feature = "batch")]
pub mod batch;
#[cfg(feature = "iter")]
pub mod iter;
#[cfg(feature = "pattern")]
pub mod pattern;
#[cfg(feature = "schema")]
pub mod schema;

pub(crate) mod util;

#[doc(inline)]
pub use outcome::Outcome;
