use std::fmt::Debug;

use derive_more::IsVariant;

use self::Outcome::{Failure, Success};

/// A value that is exactly one of two things: a success carrying a payload of
/// type `T`, or a failure carrying a payload of type `E`.
///
/// The discriminant is fixed at construction and the value has no identity
/// beyond its content, so an Outcome can be copied, compared and hashed
/// whenever its payloads can. Both payload types are unconstrained; an Outcome
/// may even carry another Outcome, which is treated as any other payload and
/// never unwrapped implicitly.
///
/// Unlike [`Result`], a [`Failure`] is never raised anywhere in this crate: it
/// travels as plain data through every operation except [`Outcome::unwrap`],
/// which is the one deliberate bridge into a panic.
///
/// # Examples
/// ```
/// use outcomes::Outcome::{self, Failure, Success};
///
/// let parsed: Outcome<i32, String> = Success(42);
/// assert!(parsed.is_success());
/// assert_eq!(parsed.unwrap_or(0), 42);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, IsVariant)]
#[must_use]
pub enum Outcome<T, E> {
    /// The operation produced a value.
    Success(T),
    /// The operation produced an error.
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    /// Converts into an [`Option`] over the success payload, discarding a
    /// failure payload.
    ///
    /// # Examples
    /// ```
    /// # use outcomes::Outcome::{self, Failure, Success};
    /// assert_eq!(Success::<_, &str>(5).success(), Some(5));
    /// assert_eq!(Failure::<i32, _>("e").success(), None);
    /// ```
    pub fn success(self) -> Option<T> {
        match self {
            Success(value) => Some(value),
            Failure(_) => None,
        }
    }

    /// Converts into an [`Option`] over the failure payload, discarding a
    /// success payload.
    ///
    /// # Examples
    /// ```
    /// # use outcomes::Outcome::{self, Failure, Success};
    /// assert_eq!(Failure::<i32, _>("e").failure(), Some("e"));
    /// assert_eq!(Success::<_, &str>(5).failure(), None);
    /// ```
    pub fn failure(self) -> Option<E> {
        match self {
            Success(_) => None,
            Failure(error) => Some(error),
        }
    }

    /// Borrows the payload, producing an `Outcome<&T, &E>` with the same
    /// discriminant.
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Success(value) => Success(value),
            Failure(error) => Failure(error),
        }
    }

    /// Mutably borrows the payload, producing an `Outcome<&mut T, &mut E>`
    /// with the same discriminant.
    pub const fn as_mut(&mut self) -> Outcome<&mut T, &mut E> {
        match self {
            Success(value) => Success(value),
            Failure(error) => Failure(error),
        }
    }

    /// Returns the success payload.
    ///
    /// Callers reach for this either after having established the Outcome is a
    /// [`Success`], or accepting the crash as the correct response to a
    /// failure they can't handle.
    ///
    /// # Panics
    /// Panics if the Outcome is a [`Failure`], with the failure payload
    /// included in the message.
    ///
    /// # Examples
    /// ```
    /// # use outcomes::Outcome::{self, Success};
    /// let fetched: Outcome<&str, u8> = Success("ready");
    /// assert_eq!(fetched.unwrap(), "ready");
    /// ```
    pub fn unwrap(self) -> T
    where
        E: Debug,
    {
        match self {
            Success(value) => value,
            Failure(error) => panic!("called `Outcome::unwrap` on a `Failure` value: {error:?}"),
        }
    }

    /// Returns the failure payload, the dual of [`Outcome::unwrap`].
    ///
    /// # Panics
    /// Panics if the Outcome is a [`Success`], with the success payload
    /// included in the message.
    pub fn unwrap_failure(self) -> E
    where
        T: Debug,
    {
        match self {
            Success(value) => {
                panic!("called `Outcome::unwrap_failure` on a `Success` value: {value:?}")
            },
            Failure(error) => error,
        }
    }

    /// Returns the success payload, or the provided default for a failure.
    /// Never panics.
    ///
    /// # Examples
    /// ```
    /// # use outcomes::Outcome::{self, Failure, Success};
    /// assert_eq!(Success::<_, &str>(2).unwrap_or(0), 2);
    /// assert_eq!(Failure::<i32, _>("e").unwrap_or(0), 0);
    /// ```
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Success(value) => value,
            Failure(_) => default,
        }
    }

    /// Returns the success payload, or computes a fallback from the failure
    /// payload. Never panics.
    pub fn unwrap_or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Success(value) => value,
            Failure(error) => fallback(error),
        }
    }

    /// Invokes exactly one of the two handlers on the payload and returns its
    /// result. This is the exhaustive two-way branch; there is no fallthrough
    /// and no default.
    ///
    /// # Examples
    /// ```
    /// # use outcomes::Outcome::{self, Failure, Success};
    /// let label = Failure::<u32, _>("offline").fold(
    ///     |count| format!("{count} items"),
    ///     |error| format!("unavailable: {error}"),
    /// );
    /// assert_eq!(label, "unavailable: offline");
    /// ```
    pub fn fold<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(E) -> R,
    {
        match self {
            Success(value) => on_success(value),
            Failure(error) => on_failure(error),
        }
    }

    /// Applies a function to the success payload, passing a [`Failure`]
    /// through unchanged.
    ///
    /// # Examples
    /// ```
    /// # use outcomes::Outcome::{self, Failure, Success};
    /// assert_eq!(Success::<_, &str>(2).map(|n| n * 10), Success(20));
    /// assert_eq!(Failure::<i32, _>("e").map(|n| n * 10), Failure("e"));
    /// ```
    pub fn map<U, F>(self, op: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Success(value) => Success(op(value)),
            Failure(error) => Failure(error),
        }
    }

    /// Applies a function to the failure payload, passing a [`Success`]
    /// through unchanged.
    pub fn map_failure<F, O>(self, op: O) -> Outcome<T, F>
    where
        O: FnOnce(E) -> F,
    {
        match self {
            Success(value) => Success(value),
            Failure(error) => Failure(op(error)),
        }
    }

    /// Chains a further Outcome-producing step onto the success payload,
    /// passing a [`Failure`] through unchanged. Because `op` itself returns an
    /// Outcome, steps compose without nesting one Outcome inside another.
    ///
    /// # Examples
    /// ```
    /// # use outcomes::Outcome::{self, Failure, Success};
    /// fn half(n: i32) -> Outcome<i32, String> {
    ///     if n % 2 == 0 { Success(n / 2) } else { Failure(format!("{n} is odd")) }
    /// }
    ///
    /// assert_eq!(Success(8).and_then(half).and_then(half), Success(2));
    /// assert_eq!(Success(8).and_then(half).and_then(half).and_then(half), Failure("1 is odd".to_string()));
    /// ```
    pub fn and_then<U, F>(self, op: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Success(value) => op(value),
            Failure(error) => Failure(error),
        }
    }

    /// Chains a recovery step onto the failure payload, passing a [`Success`]
    /// through unchanged. The dual of [`Outcome::and_then`].
    pub fn or_else<F, O>(self, op: O) -> Outcome<T, F>
    where
        O: FnOnce(E) -> Outcome<T, F>,
    {
        match self {
            Success(value) => Success(value),
            Failure(error) => op(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Outcome<T, E> {
        match result {
            Ok(value) => Success(value),
            Err(error) => Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Result<T, E> {
        match outcome {
            Success(value) => Ok(value),
            Failure(error) => Err(error),
        }
    }
}
