use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// A single rule violation reported against a validated document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Violation {
    /// JSON pointer to the offending part of the document (empty for the
    /// document root).
    pub path: String,
    /// Description of the violated rule.
    pub message: String,
}

/// Every violation a document produced, in schema evaluation order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Violations(pub Vec<Violation>);

impl Display for Violations {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "document violated {} schema rule(s)!", self.0.len())
    }
}

impl Error for Violations {}

/// The provided schema could not be compiled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidSchema {
    /// The compiler's description of what is wrong with the schema.
    pub message: String,
}

impl Display for InvalidSchema {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "schema failed to compile: {}", self.message)
    }
}

impl Error for InvalidSchema {}

/// Either failure of one-shot validation: a schema that never compiled, or a
/// document that broke its rules.
#[derive(Debug, Display, Error, From, TryInto, IsVariant)]
pub enum SchemaError {
    /// The schema itself was rejected.
    InvalidSchema(InvalidSchema),
    /// The document was rejected.
    Violations(Violations),
}
