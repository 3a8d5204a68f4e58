pub mod errors;
pub mod field;
pub mod results;
pub mod rules;
pub mod types;
pub mod validator;

pub use errors::Violation;
pub use field::{
    email, future_date, integer, max_length, min_length, number, past_date, phone, required, url,
};
pub use results::{FormValidationResult, ValidationResult};
pub use rules::{
    validate_array_field, validate_date, validate_date_at, validate_email, validate_integer,
    validate_number, validate_password, validate_phone, validate_salary, validate_stipend,
    validate_text, validate_url, BoxedRule, Rule, RuleSet,
};
pub use types::{FieldValue, Salary, Stipend};
pub use validator::{validate_form, FormData, FormValidator, ValidationRules};
