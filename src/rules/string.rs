use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::Violation;
use crate::results::ValidationResult;
use crate::rules::{fail_with, Rule};
use crate::types::FieldValue;

// Simple local@domain.tld shape: no whitespace, one '@', a dot after it.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

// Applied after stripping spaces, parentheses and hyphens.
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?[1-9][0-9]{0,15}$").unwrap());

static URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").unwrap());

pub(crate) fn check_email(value: &FieldValue, required: bool) -> Result<(), Violation> {
    if value.is_empty() {
        return if required {
            Err(Violation::EmptyField)
        } else {
            Ok(())
        };
    }
    match value.as_str() {
        Some(s) if EMAIL_RE.is_match(s) => Ok(()),
        _ => Err(Violation::InvalidEmail),
    }
}

/// Validate an email address. The field is mandatory.
pub fn validate_email(value: &FieldValue) -> ValidationResult {
    check_email(value, true).into()
}

pub(crate) fn check_phone(value: &FieldValue, required: bool) -> Result<(), Violation> {
    if value.is_empty() {
        return if required {
            Err(Violation::EmptyField)
        } else {
            Ok(())
        };
    }
    let Some(raw) = value.as_str() else {
        return Err(Violation::InvalidPhone);
    };
    let stripped: String = raw
        .chars()
        .filter(|c| !matches!(c, ' ' | '(' | ')' | '-'))
        .collect();
    if stripped.len() >= 10 && PHONE_RE.is_match(&stripped) {
        Ok(())
    } else {
        Err(Violation::InvalidPhone)
    }
}

/// Validate a phone number. Spaces, parentheses and hyphens are ignored;
/// the remainder must be an optional `+` followed by 10 to 16 digits with
/// no leading zero.
pub fn validate_phone(value: &FieldValue) -> ValidationResult {
    check_phone(value, true).into()
}

pub(crate) fn check_text(
    value: &FieldValue,
    min_length: usize,
    max_length: Option<usize>,
    required: bool,
) -> Result<(), Violation> {
    let trimmed = match value {
        FieldValue::Str(s) => s.trim(),
        FieldValue::Null => "",
        // Non-text values are not this rule's concern
        _ => return Ok(()),
    };
    if trimmed.is_empty() {
        return if required {
            Err(Violation::EmptyField)
        } else {
            Ok(())
        };
    }
    let len = trimmed.chars().count();
    if len < min_length {
        return Err(Violation::TooShort(min_length));
    }
    if let Some(max) = max_length {
        if len > max {
            return Err(Violation::TooLong(max));
        }
    }
    Ok(())
}

/// Validate free text against trimmed-length bounds.
pub fn validate_text(
    value: &FieldValue,
    min_length: usize,
    max_length: Option<usize>,
    required: bool,
) -> ValidationResult {
    check_text(value, min_length, max_length, required).into()
}

pub(crate) fn check_url(value: &FieldValue, required: bool) -> Result<(), Violation> {
    if value.is_empty() {
        return if required {
            Err(Violation::EmptyField)
        } else {
            Ok(())
        };
    }
    match value.as_str() {
        Some(s) if URL_RE.is_match(s.trim()) => Ok(()),
        _ => Err(Violation::InvalidUrl),
    }
}

/// Validate an http/https URL. Optional by default: an empty value passes
/// unless `required` is set.
pub fn validate_url(value: &FieldValue, required: bool) -> ValidationResult {
    check_url(value, required).into()
}

/// Validate a password: minimum length plus at least one uppercase letter,
/// one lowercase letter and one digit. This is the one canonical password
/// policy for the whole application.
pub fn validate_password(value: &FieldValue, min_length: usize) -> ValidationResult {
    if value.is_empty() {
        return ValidationResult::fail(Violation::EmptyField.to_string());
    }
    let Some(s) = value.as_str() else {
        return ValidationResult::fail(Violation::WeakPassword.to_string());
    };
    if s.chars().count() < min_length {
        return ValidationResult::fail(Violation::TooShort(min_length).to_string());
    }
    let has_upper = s.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = s.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = s.chars().any(|c| c.is_ascii_digit());
    if has_upper && has_lower && has_digit {
        ValidationResult::ok()
    } else {
        ValidationResult::fail(Violation::WeakPassword.to_string())
    }
}

/// Rule: well-formed email address when present.
pub struct Email {
    message: Option<String>,
}

impl Email {
    pub fn new(message: Option<String>) -> Self {
        Self { message }
    }
}

impl Rule for Email {
    fn name(&self) -> &'static str {
        "Email"
    }

    fn apply(&self, value: &FieldValue) -> ValidationResult {
        match check_email(value, false) {
            Ok(()) => ValidationResult::ok(),
            Err(v) => fail_with(&self.message, v),
        }
    }
}

/// Rule: well-formed phone number when present.
pub struct Phone {
    message: Option<String>,
}

impl Phone {
    pub fn new(message: Option<String>) -> Self {
        Self { message }
    }
}

impl Rule for Phone {
    fn name(&self) -> &'static str {
        "Phone"
    }

    fn apply(&self, value: &FieldValue) -> ValidationResult {
        match check_phone(value, false) {
            Ok(()) => ValidationResult::ok(),
            Err(v) => fail_with(&self.message, v),
        }
    }
}

/// Rule: trimmed length at least `min` when present.
pub struct MinLength {
    min: usize,
    message: Option<String>,
}

impl MinLength {
    pub fn new(min: usize, message: Option<String>) -> Self {
        Self { min, message }
    }
}

impl Rule for MinLength {
    fn name(&self) -> &'static str {
        "MinLength"
    }

    fn apply(&self, value: &FieldValue) -> ValidationResult {
        match check_text(value, self.min, None, false) {
            Ok(()) => ValidationResult::ok(),
            Err(v) => fail_with(&self.message, v),
        }
    }
}

/// Rule: trimmed length at most `max` when present.
pub struct MaxLength {
    max: usize,
    message: Option<String>,
}

impl MaxLength {
    pub fn new(max: usize, message: Option<String>) -> Self {
        Self { max, message }
    }
}

impl Rule for MaxLength {
    fn name(&self) -> &'static str {
        "MaxLength"
    }

    fn apply(&self, value: &FieldValue) -> ValidationResult {
        match check_text(value, 0, Some(self.max), false) {
            Ok(()) => ValidationResult::ok(),
            Err(v) => fail_with(&self.message, v),
        }
    }
}

/// Rule: well-formed http/https URL when present.
pub struct UrlField {
    message: Option<String>,
}

impl UrlField {
    pub fn new(message: Option<String>) -> Self {
        Self { message }
    }
}

impl Rule for UrlField {
    fn name(&self) -> &'static str {
        "Url"
    }

    fn apply(&self, value: &FieldValue) -> ValidationResult {
        match check_url(value, false) {
            Ok(()) => ValidationResult::ok(),
            Err(v) => fail_with(&self.message, v),
        }
    }
}
