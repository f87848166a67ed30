use std::any::Any;
use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

/// The payload of a caught panic, carried as an ordinary failure value by
/// [`handle`](super::handle) and [`handle_async`](super::handle_async).
///
/// Panic payloads are usually the message strings produced by [`panic!`], and
/// [`Caught::message`] exposes those directly. Anything else a panic was
/// raised with is still preserved and can be recovered through
/// [`Caught::into_payload`].
pub struct Caught {
    payload: Box<dyn Any + Send>,
}

impl Caught {
    pub(crate) fn new(payload: Box<dyn Any + Send>) -> Caught {
        Caught { payload }
    }

    /// Returns the panic message, if the panic carried a string payload.
    ///
    /// # Examples
    /// ```
    /// # use outcomes::outcome::handle;
    /// let caught = handle(|| -> u8 { panic!("division by zero") }).unwrap_failure();
    /// assert_eq!(caught.message(), Some("division by zero"));
    /// ```
    pub fn message(&self) -> Option<&str> {
        if let Some(message) = self.payload.downcast_ref::<&'static str>() {
            Some(message)
        } else if let Some(message) = self.payload.downcast_ref::<String>() {
            Some(message)
        } else {
            None
        }
    }

    /// Recovers the raw panic payload.
    pub fn into_payload(self) -> Box<dyn Any + Send> {
        self.payload
    }
}

impl Debug for Caught {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Caught")
            .field(&self.message().unwrap_or("<non-string payload>"))
            .finish()
    }
}

impl Display for Caught {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(message) => write!(f, "operation panicked: {message}"),
            None => write!(f, "operation panicked with a non-string payload"),
        }
    }
}

impl Error for Caught {}
