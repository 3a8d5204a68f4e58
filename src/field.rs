//! Rule builders.
//!
//! Each builder closes over its constraints and an optional message
//! override and returns a boxed [`Rule`](crate::rules::Rule). Every builder
//! except [`required`]
//! lets an absent value pass, so "optional but well-formed when present"
//! is expressed by simply leaving `required` out of a field's rule list.

use crate::rules::{
    BoxedRule, Email, FutureDate, IntegerRange, MaxLength, MinLength, NumberRange, PastDate,
    Phone, Required, UrlField,
};

fn owned(message: Option<&str>) -> Option<String> {
    message.map(str::to_string)
}

/// The field must be present. `0` and `false` count as present.
pub fn required(message: Option<&str>) -> BoxedRule {
    Box::new(Required::new(owned(message)))
}

/// Well-formed email address, when present.
pub fn email(message: Option<&str>) -> BoxedRule {
    Box::new(Email::new(owned(message)))
}

/// Well-formed phone number, when present.
pub fn phone(message: Option<&str>) -> BoxedRule {
    Box::new(Phone::new(owned(message)))
}

/// Trimmed length at least `min`, when present.
pub fn min_length(min: usize, message: Option<&str>) -> BoxedRule {
    Box::new(MinLength::new(min, owned(message)))
}

/// Trimmed length at most `max`, when present.
pub fn max_length(max: usize, message: Option<&str>) -> BoxedRule {
    Box::new(MaxLength::new(max, owned(message)))
}

/// Numeric value inside the closed interval `[min, max]`, when present.
/// Either bound may be `None` for unbounded.
pub fn number(min: Option<f64>, max: Option<f64>, message: Option<&str>) -> BoxedRule {
    Box::new(NumberRange::new(min, max, owned(message)))
}

/// Whole number inside the closed interval `[min, max]`, when present.
pub fn integer(min: Option<f64>, max: Option<f64>, message: Option<&str>) -> BoxedRule {
    Box::new(IntegerRange::new(min, max, owned(message)))
}

/// Date strictly after today, when present.
pub fn future_date(message: Option<&str>) -> BoxedRule {
    Box::new(FutureDate::new(owned(message)))
}

/// Date strictly before today, when present.
pub fn past_date(message: Option<&str>) -> BoxedRule {
    Box::new(PastDate::new(owned(message)))
}

/// Well-formed http/https URL, when present.
pub fn url(message: Option<&str>) -> BoxedRule {
    Box::new(UrlField::new(owned(message)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FieldValue;

    #[test]
    fn test_short_circuit_order() {
        let rules = vec![required(None), email(None)];
        let empty = FieldValue::Str(String::new());
        let first = rules
            .iter()
            .map(|r| r.apply(&empty))
            .find(|r| !r.is_valid())
            .unwrap();
        assert_eq!(first.message(), "This field is required");

        let malformed = FieldValue::from("not-an-email");
        let first = rules
            .iter()
            .map(|r| r.apply(&malformed))
            .find(|r| !r.is_valid())
            .unwrap();
        assert_eq!(first.message(), "Please enter a valid email address");
    }

    #[test]
    fn test_builders_are_optional_without_required() {
        let absent = FieldValue::Null;
        for rule in [
            email(None),
            phone(None),
            min_length(5, None),
            max_length(5, None),
            number(Some(0.0), Some(1.0), None),
            integer(None, None, None),
            future_date(None),
            past_date(None),
            url(None),
        ] {
            assert!(rule.apply(&absent).is_valid(), "{} failed", rule.name());
        }
    }
}
