use crate::outcome::Outcome::{self, Failure, Success};

/// Counts describing one pass over a sequence of Outcomes, produced by
/// [`analyze`]. Plain derived data with no retained payloads; recomputed on
/// every call.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchStats {
    /// Number of [`Success`] entries.
    pub ok_count: usize,
    /// Number of [`Failure`] entries.
    pub error_count: usize,
    /// Length of the raw input sequence, missing entries included.
    pub total: usize,
}

impl BatchStats {
    /// Whether the sequence contained at least one failure.
    pub const fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    /// Whether the raw sequence was empty.
    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// Counts the variants of a sequence in a single pass.
///
/// Missing entries contribute to `total` but to neither variant count, so
/// `ok_count + error_count` only equals `total` for dense input.
///
/// # Examples
/// ```
/// # use outcomes::Outcome::{Failure, Success};
/// # use outcomes::batch::analyze;
/// let stats = analyze(vec![Some(Success(1)), None, Some(Failure("e"))]);
/// assert_eq!((stats.ok_count, stats.error_count, stats.total), (1, 1, 3));
/// assert!(stats.has_errors());
/// assert!(!stats.is_empty());
/// ```
pub fn analyze<T, E, I>(results: I) -> BatchStats
where
    I: IntoIterator,
    I::Item: Into<Option<Outcome<T, E>>>,
{
    let mut stats = BatchStats::default();
    for entry in results {
        stats.total += 1;
        match entry.into() {
            Some(Success(_)) => stats.ok_count += 1,
            Some(Failure(_)) => stats.error_count += 1,
            None => {},
        }
    }
    stats
}
