use crate::outcome::Outcome::{self, Failure, Success};

/// Combines two Outcomes positionally: a [`Success`] of the pair if both
/// succeeded, otherwise the first [`Failure`] left to right.
///
/// # Examples
/// ```
/// # use outcomes::Outcome::{self, Failure, Success};
/// # use outcomes::pattern::zip;
/// assert_eq!(zip(Success::<_, &str>(1), Success("a")), Success((1, "a")));
/// assert_eq!(zip(Failure::<i32, _>("e1"), Failure::<&str, _>("e2")), Failure("e1"));
/// ```
pub fn zip<A, B, E>(a: Outcome<A, E>, b: Outcome<B, E>) -> Outcome<(A, B), E> {
    match (a, b) {
        (Success(a), Success(b)) => Success((a, b)),
        (Failure(error), _) | (_, Failure(error)) => Failure(error),
    }
}

/// [`zip`] over three Outcomes.
pub fn zip3<A, B, C, E>(
    a: Outcome<A, E>,
    b: Outcome<B, E>,
    c: Outcome<C, E>,
) -> Outcome<(A, B, C), E> {
    match (a, b, c) {
        (Success(a), Success(b), Success(c)) => Success((a, b, c)),
        (Failure(error), _, _) | (_, Failure(error), _) | (_, _, Failure(error)) => Failure(error),
    }
}

/// [`zip`] over four Outcomes.
pub fn zip4<A, B, C, D, E>(
    a: Outcome<A, E>,
    b: Outcome<B, E>,
    c: Outcome<C, E>,
    d: Outcome<D, E>,
) -> Outcome<(A, B, C, D), E> {
    match (a, b, c, d) {
        (Success(a), Success(b), Success(c), Success(d)) => Success((a, b, c, d)),
        (Failure(error), _, _, _)
        | (_, Failure(error), _, _)
        | (_, _, Failure(error), _)
        | (_, _, _, Failure(error)) => Failure(error),
    }
}

/// Applies a wrapped function to a wrapped argument: a [`Success`] of the
/// application if both operands succeeded, otherwise the first [`Failure`]
/// with the function side checked first.
///
/// # Examples
/// ```
/// # use outcomes::Outcome::{self, Failure, Success};
/// # use outcomes::pattern::apply;
/// let double: Outcome<_, &str> = Success(|n: i32| n * 2);
/// assert_eq!(apply(double, Success(21)), Success(42));
///
/// let broken: Outcome<fn(i32) -> i32, &str> = Failure("no function");
/// assert_eq!(apply(broken, Failure("no argument")), Failure("no function"));
/// ```
pub fn apply<T, U, E, F>(func: Outcome<F, E>, arg: Outcome<T, E>) -> Outcome<U, E>
where
    F: FnOnce(T) -> U,
{
    match (func, arg) {
        (Success(func), Success(arg)) => Success(func(arg)),
        (Failure(error), _) | (_, Failure(error)) => Failure(error),
    }
}
