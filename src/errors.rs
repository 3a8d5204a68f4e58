use thiserror::Error;

/// A single failed check on a field value.
///
/// The `Display` string of each variant is the default user-facing message.
/// Rules may replace it with a caller-supplied override, but the variant is
/// what tests and composite validators match on.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Violation {
    /// A mandatory field was null, empty, or missing
    #[error("This field is required")]
    EmptyField,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Please enter a valid phone number")]
    InvalidPhone,

    #[error("Must be a valid number")]
    NotANumber,

    #[error("Must be a whole number")]
    NotAnInteger,

    #[error("Must be at least {0}")]
    BelowMin(f64),

    #[error("Must be at most {0}")]
    AboveMax(f64),

    #[error("Please enter a valid date")]
    InvalidDate,

    #[error("Date must be in the future")]
    NotFuture,

    #[error("Date must be in the past")]
    NotPast,

    #[error("Must be at least {0} characters long")]
    TooShort(usize),

    #[error("Must be no more than {0} characters long")]
    TooLong(usize),

    #[error("Please enter a valid URL starting with http:// or https://")]
    InvalidUrl,

    #[error("Password must contain an uppercase letter, a lowercase letter, and a number")]
    WeakPassword,

    #[error("{0} must be a list")]
    NotAnArray(String),

    /// Message is pluralized by the minimum item count
    #[error("{}", too_few_items_message(.0, *.1))]
    TooFewItems(String, usize),

    #[error("Maximum must be greater than minimum")]
    MaxNotGreaterThanMin,

    #[error("Pay period is required")]
    MissingPeriod,
}

fn too_few_items_message(field: &str, min_items: usize) -> String {
    if min_items == 1 {
        format!("At least 1 {field} is required")
    } else {
        format!("At least {min_items} {field}s are required")
    }
}
