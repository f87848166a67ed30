use crate::outcome::Outcome::{self, Failure, Success};

/// Reduces a sequence of Outcomes to a single Outcome over all of their
/// success payloads, failing fast.
///
/// Scanning left to right, missing entries are skipped; the first
/// [`Failure`] stops the scan immediately and is returned exactly as
/// encountered, discarding any success payloads accumulated before it. If no
/// failure is met, the result is a [`Success`] of every success payload in
/// original order. An empty or all-`None` sequence reduces to
/// `Success(vec![])`.
///
/// # Examples
/// ```
/// # use outcomes::Outcome::{self, Failure, Success};
/// # use outcomes::batch::all;
/// let dense: Vec<Outcome<i32, &str>> = vec![Success(1), Success(2), Success(3)];
/// assert_eq!(all(dense), Success(vec![1, 2, 3]));
///
/// let sparse = vec![Some(Success(1)), None, Some(Failure("e")), Some(Success(3))];
/// assert_eq!(all(sparse), Failure("e"));
/// ```
pub fn all<T, E, I>(results: I) -> Outcome<Vec<T>, E>
where
    I: IntoIterator,
    I::Item: Into<Option<Outcome<T, E>>>,
{
    let mut values = Vec::new();
    for entry in results {
        match entry.into() {
            Some(Success(value)) => values.push(value),
            Some(Failure(error)) => return Failure(error),
            None => {},
        }
    }
    Success(values)
}

/// Returns the first [`Success`] in the sequence, unmodified, short-circuiting
/// the scan. If there is none, returns a [`Failure`] of every failure payload
/// collected along the way, in original order.
///
/// # Examples
/// ```
/// # use outcomes::Outcome::{self, Failure, Success};
/// # use outcomes::batch::first;
/// let recovered: Vec<Outcome<&str, &str>> = vec![Failure("e1"), Failure("e2"), Success("s")];
/// assert_eq!(first(recovered), Success("s"));
///
/// let exhausted: Vec<Outcome<&str, &str>> = vec![Failure("e1"), Failure("e2")];
/// assert_eq!(first(exhausted), Failure(vec!["e1", "e2"]));
/// ```
pub fn first<T, E, I>(results: I) -> Outcome<T, Vec<E>>
where
    I: IntoIterator,
    I::Item: Into<Option<Outcome<T, E>>>,
{
    let mut errors = Vec::new();
    for entry in results {
        match entry.into() {
            Some(Success(value)) => return Success(value),
            Some(Failure(error)) => errors.push(error),
            None => {},
        }
    }
    Failure(errors)
}

/// Collects every success payload in the sequence, in original order.
///
/// # Examples
/// ```
/// # use outcomes::Outcome::{Failure, Success};
/// # use outcomes::batch::oks;
/// let mixed = vec![Some(Success(1)), Some(Failure("e")), None, Some(Success(2))];
/// assert_eq!(oks(mixed), vec![1, 2]);
/// ```
pub fn oks<T, E, I>(results: I) -> Vec<T>
where
    I: IntoIterator,
    I::Item: Into<Option<Outcome<T, E>>>,
{
    results
        .into_iter()
        .filter_map(|entry| entry.into().and_then(Outcome::success))
        .collect()
}

/// Collects every failure payload in the sequence, in original order.
///
/// # Examples
/// ```
/// # use outcomes::Outcome::{Failure, Success};
/// # use outcomes::batch::errs;
/// let mixed = vec![Some(Success(1)), Some(Failure("e")), None, Some(Success(2))];
/// assert_eq!(errs(mixed), vec!["e"]);
/// ```
pub fn errs<T, E, I>(results: I) -> Vec<E>
where
    I: IntoIterator,
    I::Item: Into<Option<Outcome<T, E>>>,
{
    results
        .into_iter()
        .filter_map(|entry| entry.into().and_then(Outcome::failure))
        .collect()
}

/// The first success and first failure of a sequence, located independently by
/// [`find_first`], each paired with its raw positional index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FirstOfEach<T, E> {
    /// Index and payload of the first [`Success`], if any.
    pub first_success: Option<(usize, T)>,
    /// Index and payload of the first [`Failure`], if any.
    pub first_failure: Option<(usize, E)>,
}

impl<T, E> Default for FirstOfEach<T, E> {
    fn default() -> FirstOfEach<T, E> {
        FirstOfEach {
            first_success: None,
            first_failure: None,
        }
    }
}

/// Locates the first success and the first failure of the sequence
/// independently, each with its positional index in the raw input (missing
/// entries count toward the index).
///
/// The scan stops early only once both have been found; while either side is
/// still outstanding the pass continues to the end of the sequence.
///
/// # Examples
/// ```
/// # use outcomes::Outcome::{self, Failure, Success};
/// # use outcomes::batch::find_first;
/// let scanned: Vec<Outcome<&str, &str>> =
///     vec![Failure("e1"), Success("s1"), Failure("e2"), Success("s2")];
/// let found = find_first(scanned);
/// assert_eq!(found.first_success, Some((1, "s1")));
/// assert_eq!(found.first_failure, Some((0, "e1")));
/// ```
pub fn find_first<T, E, I>(results: I) -> FirstOfEach<T, E>
where
    I: IntoIterator,
    I::Item: Into<Option<Outcome<T, E>>>,
{
    let mut found = FirstOfEach::default();
    for (index, entry) in results.into_iter().enumerate() {
        match entry.into() {
            Some(Success(value)) if found.first_success.is_none() => {
                found.first_success = Some((index, value));
            },
            Some(Failure(error)) if found.first_failure.is_none() => {
                found.first_failure = Some((index, error));
            },
            _ => {},
        }
        if found.first_success.is_some() && found.first_failure.is_some() {
            break;
        }
    }
    found
}

/// Folds the sequence left to right with one handler per variant.
///
/// `on_success` receives `(accumulator, payload, index)` for every success and
/// `on_failure` the same for every failure, in original order. The index is
/// the position in the raw input, so missing entries advance it without
/// invoking either handler.
///
/// # Examples
/// ```
/// # use outcomes::Outcome::{self, Failure, Success};
/// # use outcomes::batch::reduce;
/// let totals: Vec<Outcome<i32, &str>> = vec![Success(5), Failure("x"), Success(10)];
/// let sum = reduce(totals, 0, |acc, value, _| acc + value, |acc, _, _| acc);
/// assert_eq!(sum, 15);
/// ```
pub fn reduce<T, E, A, I, S, F>(results: I, init: A, mut on_success: S, mut on_failure: F) -> A
where
    I: IntoIterator,
    I::Item: Into<Option<Outcome<T, E>>>,
    S: FnMut(A, T, usize) -> A,
    F: FnMut(A, E, usize) -> A,
{
    let mut acc = init;
    for (index, entry) in results.into_iter().enumerate() {
        acc = match entry.into() {
            Some(Success(value)) => on_success(acc, value, index),
            Some(Failure(error)) => on_failure(acc, error, index),
            None => acc,
        };
    }
    acc
}
