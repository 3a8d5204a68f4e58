//! Dynamic form values and composite pay structures.
//!
//! Form inputs arrive untyped: a field may hold text, a number, a list of
//! tags, or a structured pay object. `FieldValue` is the single type every
//! rule accepts, so one rule set can drive an arbitrary form payload.

/// A single form field value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Absent or explicitly null field
    Null,
    Str(String),
    Number(f64),
    Bool(bool),
    List(Vec<String>),
    Salary(Box<Salary>),
    Stipend(Box<Stipend>),
}

impl FieldValue {
    /// A field is empty when it is null, an empty string, or an empty list.
    ///
    /// `0` and `false` are present values, not empty ones.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Null => true,
            FieldValue::Str(s) => s.is_empty(),
            FieldValue::List(items) => items.is_empty(),
            _ => false,
        }
    }

    /// Borrow the string content, if this is a string field.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Str(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Str(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(value as f64)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        FieldValue::List(value)
    }
}

impl From<Vec<&str>> for FieldValue {
    fn from(value: Vec<&str>) -> Self {
        FieldValue::List(value.into_iter().map(str::to_string).collect())
    }
}

impl From<Salary> for FieldValue {
    fn from(value: Salary) -> Self {
        FieldValue::Salary(Box::new(value))
    }
}

impl From<Stipend> for FieldValue {
    fn from(value: Stipend) -> Self {
        FieldValue::Stipend(Box::new(value))
    }
}

/// Compensation offered by a job posting.
///
/// The variant is the pay model; amounts stay as `FieldValue` so that a
/// missing amount, a zero amount, and an unparseable amount remain
/// distinguishable when the composite validator runs.
#[derive(Debug, Clone, PartialEq)]
pub enum Salary {
    Range {
        min: FieldValue,
        max: FieldValue,
        period: Option<String>,
    },
    Fixed {
        amount: FieldValue,
        period: Option<String>,
    },
    Negotiable,
}

/// Compensation offered by an internship posting.
#[derive(Debug, Clone, PartialEq)]
pub struct Stipend {
    pub amount: FieldValue,
    pub period: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_empty() {
        assert!(FieldValue::Null.is_empty());
        assert!(FieldValue::Str(String::new()).is_empty());
        assert!(FieldValue::List(vec![]).is_empty());
        assert!(!FieldValue::Number(0.0).is_empty());
        assert!(!FieldValue::Bool(false).is_empty());
        assert!(!FieldValue::Str(" ".to_string()).is_empty());
    }

    #[test]
    fn test_from_conversions() {
        assert_eq!(FieldValue::from("hi"), FieldValue::Str("hi".to_string()));
        assert_eq!(FieldValue::from(3i64), FieldValue::Number(3.0));
        assert_eq!(
            FieldValue::from(vec!["a", "b"]),
            FieldValue::List(vec!["a".to_string(), "b".to_string()])
        );
    }
}
