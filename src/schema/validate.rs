use jsonschema::{Draft, JSONSchema};
use serde_json::Value;

use super::{InvalidSchema, SchemaError, Violation, Violations};
use crate::outcome::Outcome::{self, Failure, Success};

/// A compiled draft-7 schema, reusable across any number of documents.
pub struct SchemaValidator {
    schema: JSONSchema,
}

impl SchemaValidator {
    /// Compiles the schema once up front.
    ///
    /// # Examples
    /// ```
    /// # use serde_json::json;
    /// # use outcomes::schema::SchemaValidator;
    /// let validator = SchemaValidator::new(&json!({"type": "integer"}));
    /// assert!(validator.is_ok());
    /// ```
    pub fn new(schema: &Value) -> Result<SchemaValidator, InvalidSchema> {
        let schema = JSONSchema::options()
            .with_draft(Draft::Draft7)
            .compile(schema)
            .map_err(|error| InvalidSchema {
                message: error.to_string(),
            })?;
        Ok(SchemaValidator { schema })
    }

    /// Validates a document, returning it untouched on success or every
    /// violation it produced on failure.
    ///
    /// # Examples
    /// ```
    /// # use serde_json::json;
    /// # use outcomes::Outcome::{Failure, Success};
    /// # use outcomes::schema::SchemaValidator;
    /// # let validator = SchemaValidator::new(&json!({"type": "integer"})).unwrap();
    /// assert_eq!(validator.validate(json!(4)), Success(json!(4)));
    /// assert!(validator.validate(json!("four")).is_failure());
    /// ```
    pub fn validate(&self, document: Value) -> Outcome<Value, Violations> {
        if let Err(errors) = self.schema.validate(&document) {
            let violations = errors
                .map(|error| Violation {
                    path: error.instance_path.to_string(),
                    message: error.to_string(),
                })
                .collect();
            return Failure(Violations(violations));
        }
        Success(document)
    }
}

/// One-shot validation of a document against a schema, compiling the schema
/// on the spot. Prefer [`SchemaValidator`] when the same schema is applied
/// repeatedly.
pub fn validate(schema: &Value, document: Value) -> Outcome<Value, SchemaError> {
    match SchemaValidator::new(schema) {
        Ok(validator) => validator.validate(document).map_failure(SchemaError::from),
        Err(error) => Failure(SchemaError::from(error)),
    }
}
