use chrono::{DateTime, Local, NaiveDate};

use crate::errors::Violation;
use crate::results::ValidationResult;
use crate::rules::{fail_with, Rule};
use crate::types::FieldValue;

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];

/// Parse a form-submitted date string. Accepts plain dates in the formats
/// above, or an RFC 3339 date-time whose date part is taken.
pub(crate) fn parse_form_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return Some(date);
        }
    }
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.date_naive())
}

pub(crate) fn check_date_at(
    value: &FieldValue,
    today: NaiveDate,
    is_future: bool,
    is_past: bool,
    required: bool,
) -> Result<(), Violation> {
    if value.is_empty() {
        return if required {
            Err(Violation::EmptyField)
        } else {
            Ok(())
        };
    }
    let date = value
        .as_str()
        .and_then(parse_form_date)
        .ok_or(Violation::InvalidDate)?;
    // Day granularity: a future date must be strictly after today, a past
    // date strictly before.
    if is_future && date <= today {
        return Err(Violation::NotFuture);
    }
    if is_past && date >= today {
        return Err(Violation::NotPast);
    }
    Ok(())
}

/// Validate a date against an explicit `today`, at day granularity.
pub fn validate_date_at(
    value: &FieldValue,
    today: NaiveDate,
    is_future: bool,
    is_past: bool,
) -> ValidationResult {
    check_date_at(value, today, is_future, is_past, true).into()
}

/// Validate a date against the current local date.
pub fn validate_date(value: &FieldValue, is_future: bool, is_past: bool) -> ValidationResult {
    validate_date_at(value, Local::now().date_naive(), is_future, is_past)
}

/// Rule: a date strictly after today, when present.
pub struct FutureDate {
    message: Option<String>,
}

impl FutureDate {
    pub fn new(message: Option<String>) -> Self {
        Self { message }
    }
}

impl Rule for FutureDate {
    fn name(&self) -> &'static str {
        "FutureDate"
    }

    fn apply(&self, value: &FieldValue) -> ValidationResult {
        match check_date_at(value, Local::now().date_naive(), true, false, false) {
            Ok(()) => ValidationResult::ok(),
            Err(v) => fail_with(&self.message, v),
        }
    }
}

/// Rule: a date strictly before today, when present.
pub struct PastDate {
    message: Option<String>,
}

impl PastDate {
    pub fn new(message: Option<String>) -> Self {
        Self { message }
    }
}

impl Rule for PastDate {
    fn name(&self) -> &'static str {
        "PastDate"
    }

    fn apply(&self, value: &FieldValue) -> ValidationResult {
        match check_date_at(value, Local::now().date_naive(), false, true, false) {
            Ok(()) => ValidationResult::ok(),
            Err(v) => fail_with(&self.message, v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 15).unwrap()
    }

    #[test]
    fn test_parse_formats() {
        assert_eq!(
            parse_form_date("2026-03-15"),
            NaiveDate::from_ymd_opt(2026, 3, 15)
        );
        assert_eq!(
            parse_form_date("2026/03/15"),
            NaiveDate::from_ymd_opt(2026, 3, 15)
        );
        assert_eq!(
            parse_form_date("2026-03-15T10:30:00+00:00"),
            NaiveDate::from_ymd_opt(2026, 3, 15)
        );
        assert_eq!(parse_form_date("15 March"), None);
        assert_eq!(parse_form_date("2026-02-30"), None);
    }

    #[test]
    fn test_future_date() {
        assert!(validate_date_at(&"2026-03-16".into(), today(), true, false).is_valid());
        let result = validate_date_at(&"2026-03-15".into(), today(), true, false);
        assert!(!result.is_valid());
        assert_eq!(result.message(), "Date must be in the future");
        assert!(!validate_date_at(&"2026-03-14".into(), today(), true, false).is_valid());
    }

    #[test]
    fn test_past_date() {
        assert!(validate_date_at(&"2026-03-14".into(), today(), false, true).is_valid());
        let result = validate_date_at(&"2026-03-15".into(), today(), false, true);
        assert_eq!(result.message(), "Date must be in the past");
        assert!(!validate_date_at(&"2026-03-16".into(), today(), false, true).is_valid());
    }

    #[test]
    fn test_no_flags_only_checks_parse() {
        assert!(validate_date_at(&"2026-03-15".into(), today(), false, false).is_valid());
        let result = validate_date_at(&"next tuesday".into(), today(), false, false);
        assert_eq!(result.message(), "Please enter a valid date");
    }

    #[test]
    fn test_empty_date_is_required() {
        let result = validate_date_at(&FieldValue::Null, today(), true, false);
        assert_eq!(result.message(), "This field is required");
    }

    #[test]
    fn test_rules_pass_on_empty() {
        assert!(FutureDate::new(None).apply(&FieldValue::Null).is_valid());
        assert!(PastDate::new(None).apply(&"".into()).is_valid());
    }
}
