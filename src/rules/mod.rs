pub mod composite;
pub mod date;
pub mod generic;
pub mod numeric;
pub mod string;

pub use composite::{validate_salary, validate_stipend};
pub use date::{validate_date, validate_date_at, FutureDate, PastDate};
pub use generic::{validate_array_field, Required};
pub use numeric::{validate_integer, validate_number, IntegerRange, NumberRange};
pub use string::{
    validate_email, validate_password, validate_phone, validate_text, validate_url, Email,
    MaxLength, MinLength, Phone, UrlField,
};

use crate::errors::Violation;
use crate::results::ValidationResult;
use crate::types::FieldValue;

/// A single executable check against one field value.
///
/// Rules are built once (closing over their constraints) and applied many
/// times; they hold no mutable state, so one rule set can validate any
/// number of forms.
pub trait Rule: Send + Sync {
    /// Returns the name of the rule.
    fn name(&self) -> &'static str;
    /// Checks one field value.
    fn apply(&self, value: &FieldValue) -> ValidationResult;
}

pub type BoxedRule = Box<dyn Rule>;

/// Ordered list of rules for one field, applied left to right with
/// first-failure short-circuit.
pub type RuleSet = Vec<BoxedRule>;

/// Failure result using the caller's message override when one was given.
pub(crate) fn fail_with(message: &Option<String>, violation: Violation) -> ValidationResult {
    match message {
        Some(m) => ValidationResult::fail(m.clone()),
        None => ValidationResult::fail(violation.to_string()),
    }
}
