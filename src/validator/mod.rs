pub mod validation;

pub use validation::{validate_form, FormData, FormValidator, ValidationRules};
