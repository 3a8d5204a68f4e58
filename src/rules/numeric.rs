use crate::errors::Violation;
use crate::results::ValidationResult;
use crate::rules::{fail_with, Rule};
use crate::types::FieldValue;

/// Parse a field as a float and check it against closed bounds.
///
/// Returns `Ok(None)` for an absent optional value. Zero is a present
/// value, never a missing one.
pub(crate) fn check_number(
    value: &FieldValue,
    min: Option<f64>,
    max: Option<f64>,
    required: bool,
) -> Result<Option<f64>, Violation> {
    if value.is_empty() {
        return if required {
            Err(Violation::EmptyField)
        } else {
            Ok(None)
        };
    }
    let parsed = match value {
        FieldValue::Number(n) => *n,
        FieldValue::Str(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| Violation::NotANumber)?,
        _ => return Err(Violation::NotANumber),
    };
    if !parsed.is_finite() {
        return Err(Violation::NotANumber);
    }
    if let Some(min) = min {
        if parsed < min {
            return Err(Violation::BelowMin(min));
        }
    }
    if let Some(max) = max {
        if parsed > max {
            return Err(Violation::AboveMax(max));
        }
    }
    Ok(Some(parsed))
}

pub(crate) fn check_integer(
    value: &FieldValue,
    min: Option<f64>,
    max: Option<f64>,
    required: bool,
) -> Result<Option<f64>, Violation> {
    // Whole-number check comes before the range check, so 2.5 reports
    // NotAnInteger even when it sits inside [min, max].
    let parsed = match check_number(value, None, None, required)? {
        Some(v) => v,
        None => return Ok(None),
    };
    if parsed.fract() != 0.0 {
        return Err(Violation::NotAnInteger);
    }
    check_number(value, min, max, required)
}

/// Validate a numeric field against an optional closed interval.
pub fn validate_number(
    value: &FieldValue,
    min: Option<f64>,
    max: Option<f64>,
    required: bool,
) -> ValidationResult {
    check_number(value, min, max, required).map(|_| ()).into()
}

/// Validate a whole-number field against an optional closed interval.
pub fn validate_integer(
    value: &FieldValue,
    min: Option<f64>,
    max: Option<f64>,
    required: bool,
) -> ValidationResult {
    check_integer(value, min, max, required).map(|_| ()).into()
}

/// A non-negative amount, as used by salary and stipend validation.
pub(crate) fn check_amount(value: &FieldValue) -> Result<f64, Violation> {
    match check_number(value, Some(0.0), None, true)? {
        Some(v) => Ok(v),
        None => Err(Violation::EmptyField),
    }
}

/// Rule: numeric and inside `[min, max]` when present.
pub struct NumberRange {
    min: Option<f64>,
    max: Option<f64>,
    message: Option<String>,
}

impl NumberRange {
    pub fn new(min: Option<f64>, max: Option<f64>, message: Option<String>) -> Self {
        Self { min, max, message }
    }
}

impl Rule for NumberRange {
    fn name(&self) -> &'static str {
        "NumberRange"
    }

    fn apply(&self, value: &FieldValue) -> ValidationResult {
        match check_number(value, self.min, self.max, false) {
            Ok(_) => ValidationResult::ok(),
            Err(v) => fail_with(&self.message, v),
        }
    }
}

/// Rule: whole number inside `[min, max]` when present.
pub struct IntegerRange {
    min: Option<f64>,
    max: Option<f64>,
    message: Option<String>,
}

impl IntegerRange {
    pub fn new(min: Option<f64>, max: Option<f64>, message: Option<String>) -> Self {
        Self { min, max, message }
    }
}

impl Rule for IntegerRange {
    fn name(&self) -> &'static str {
        "IntegerRange"
    }

    fn apply(&self, value: &FieldValue) -> ValidationResult {
        match check_integer(value, self.min, self.max, false) {
            Ok(_) => ValidationResult::ok(),
            Err(v) => fail_with(&self.message, v),
        }
    }
}
