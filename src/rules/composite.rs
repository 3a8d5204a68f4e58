//! Composite validators for structured pay objects.
//!
//! Salary and stipend arrive as one form object; validating them needs the
//! violation kind, not just the message, so labeled messages can name the
//! failing sub-field.

use crate::errors::Violation;
use crate::results::ValidationResult;
use crate::rules::numeric::check_amount;
use crate::types::{Salary, Stipend};

/// Turn an amount violation into a message naming the sub-field.
fn labeled(label: &str, violation: &Violation) -> String {
    match violation {
        Violation::EmptyField => format!("{label} is required"),
        Violation::NotANumber => format!("{label} must be a valid number"),
        Violation::BelowMin(min) => format!("{label} must be at least {min}"),
        other => format!("{label}: {other}"),
    }
}

fn has_period(period: &Option<String>) -> bool {
    period.as_deref().is_some_and(|p| !p.trim().is_empty())
}

/// Validate a job posting's salary.
///
/// `Range` needs a non-negative min and max with `max > min` strictly,
/// `Fixed` needs a non-negative amount, and anything except `Negotiable`
/// needs a pay period.
pub fn validate_salary(salary: &Salary) -> ValidationResult {
    match salary {
        Salary::Negotiable => ValidationResult::ok(),
        Salary::Range { min, max, period } => {
            let min_amount = match check_amount(min) {
                Ok(v) => v,
                Err(v) => return ValidationResult::fail(labeled("Minimum salary", &v)),
            };
            let max_amount = match check_amount(max) {
                Ok(v) => v,
                Err(v) => return ValidationResult::fail(labeled("Maximum salary", &v)),
            };
            if max_amount <= min_amount {
                return ValidationResult::fail(Violation::MaxNotGreaterThanMin.to_string());
            }
            if !has_period(period) {
                return ValidationResult::fail(Violation::MissingPeriod.to_string());
            }
            ValidationResult::ok()
        }
        Salary::Fixed { amount, period } => {
            if let Err(v) = check_amount(amount) {
                return ValidationResult::fail(labeled("Salary amount", &v));
            }
            if !has_period(period) {
                return ValidationResult::fail(Violation::MissingPeriod.to_string());
            }
            ValidationResult::ok()
        }
    }
}

/// Validate an internship's stipend. An `Unpaid` period passes outright,
/// with no amount required.
pub fn validate_stipend(stipend: &Stipend) -> ValidationResult {
    if stipend.period.as_deref() == Some("Unpaid") {
        return ValidationResult::ok();
    }
    if let Err(v) = check_amount(&stipend.amount) {
        return ValidationResult::fail(labeled("Stipend amount", &v));
    }
    if !has_period(&stipend.period) {
        return ValidationResult::fail(Violation::MissingPeriod.to_string());
    }
    ValidationResult::ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FieldValue;

    fn range(min: impl Into<FieldValue>, max: impl Into<FieldValue>) -> Salary {
        Salary::Range {
            min: min.into(),
            max: max.into(),
            period: Some("Year".to_string()),
        }
    }

    #[test]
    fn test_salary_range_happy() {
        assert!(validate_salary(&range(50.0, 100.0)).is_valid());
    }

    #[test]
    fn test_salary_range_max_not_greater() {
        let result = validate_salary(&range(100.0, 50.0));
        assert_eq!(result.message(), "Maximum must be greater than minimum");
        // Equal bounds fail too: the comparison is strict
        assert!(!validate_salary(&range(50.0, 50.0)).is_valid());
    }

    #[test]
    fn test_salary_range_missing_min() {
        let result = validate_salary(&range(FieldValue::Null, 100.0));
        assert_eq!(result.message(), "Minimum salary is required");
    }

    #[test]
    fn test_salary_range_negative_max() {
        let result = validate_salary(&range(0.0, -5.0));
        assert_eq!(result.message(), "Maximum salary must be at least 0");
    }

    #[test]
    fn test_salary_range_unparseable() {
        let result = validate_salary(&range("lots", 100.0));
        assert_eq!(result.message(), "Minimum salary must be a valid number");
    }

    #[test]
    fn test_salary_range_missing_period() {
        let salary = Salary::Range {
            min: 50.0.into(),
            max: 100.0.into(),
            period: None,
        };
        assert_eq!(validate_salary(&salary).message(), "Pay period is required");
    }

    #[test]
    fn test_salary_fixed() {
        let salary = Salary::Fixed {
            amount: 80.0.into(),
            period: Some("Month".to_string()),
        };
        assert!(validate_salary(&salary).is_valid());

        let salary = Salary::Fixed {
            amount: FieldValue::Null,
            period: Some("Month".to_string()),
        };
        assert_eq!(
            validate_salary(&salary).message(),
            "Salary amount is required"
        );
    }

    #[test]
    fn test_salary_negotiable_needs_nothing() {
        assert!(validate_salary(&Salary::Negotiable).is_valid());
    }

    #[test]
    fn test_stipend_unpaid_skips_amount() {
        let stipend = Stipend {
            amount: FieldValue::Null,
            period: Some("Unpaid".to_string()),
        };
        assert!(validate_stipend(&stipend).is_valid());
    }

    #[test]
    fn test_stipend_zero_amount_is_present() {
        let stipend = Stipend {
            amount: 0.0.into(),
            period: Some("Month".to_string()),
        };
        assert!(validate_stipend(&stipend).is_valid());
    }

    #[test]
    fn test_stipend_missing_amount() {
        let stipend = Stipend {
            amount: FieldValue::Null,
            period: Some("Month".to_string()),
        };
        assert_eq!(
            validate_stipend(&stipend).message(),
            "Stipend amount is required"
        );
    }
}
