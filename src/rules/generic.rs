use crate::errors::Violation;
use crate::results::ValidationResult;
use crate::rules::{fail_with, Rule};
use crate::types::FieldValue;

/// Validate a list field: at least `min_items` entries with non-whitespace
/// content after trimming. Blank entries do not count.
pub fn validate_array_field(
    value: &FieldValue,
    field_name: &str,
    min_items: usize,
) -> ValidationResult {
    let FieldValue::List(items) = value else {
        return ValidationResult::fail(Violation::NotAnArray(field_name.to_string()).to_string());
    };
    let filled = items.iter().filter(|s| !s.trim().is_empty()).count();
    if filled < min_items {
        return ValidationResult::fail(
            Violation::TooFewItems(field_name.to_string(), min_items).to_string(),
        );
    }
    ValidationResult::ok()
}

/// Rule: the field must be present.
///
/// Fails on null, empty string and empty list; `0` and `false` pass. The
/// only rule that rejects absence, so every other rule can stay lenient
/// about empty values.
pub struct Required {
    message: Option<String>,
}

impl Required {
    pub fn new(message: Option<String>) -> Self {
        Self { message }
    }
}

impl Rule for Required {
    fn name(&self) -> &'static str {
        "Required"
    }

    fn apply(&self, value: &FieldValue) -> ValidationResult {
        if value.is_empty() {
            fail_with(&self.message, Violation::EmptyField)
        } else {
            ValidationResult::ok()
        }
    }
}
