use std::collections::HashMap;

use crate::errors::Violation;

/// Outcome of one check against one field value.
///
/// Invariant: a valid result carries an empty message and an invalid result
/// carries a non-empty one. The constructors are the only way to build a
/// result, so the invariant holds everywhere.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    is_valid: bool,
    message: String,
}

impl ValidationResult {
    /// A passing result with no message.
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            message: String::new(),
        }
    }

    /// A failing result carrying a user-facing message.
    pub fn fail(message: impl Into<String>) -> Self {
        let message = message.into();
        debug_assert!(!message.is_empty());
        Self {
            is_valid: false,
            message,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<Result<(), Violation>> for ValidationResult {
    fn from(result: Result<(), Violation>) -> Self {
        match result {
            Ok(()) => ValidationResult::ok(),
            Err(violation) => ValidationResult::fail(violation.to_string()),
        }
    }
}

/// Aggregated outcome of validating a whole form.
///
/// Only failing fields appear in `errors`; `is_valid` is true exactly when
/// the map is empty.
#[derive(Debug, Clone, PartialEq)]
pub struct FormValidationResult {
    errors: HashMap<String, String>,
}

impl FormValidationResult {
    pub fn new(errors: HashMap<String, String>) -> Self {
        Self { errors }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &HashMap<String, String> {
        &self.errors
    }

    /// The message recorded for a field, if that field failed.
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }
}
