//! Form driver.
//!
//! This module provides the main entry point (`FormValidator`) for binding
//! rule sets to named fields and running them against a submitted form, as
//! well as the free `validate_form` function the validator delegates to.

use std::collections::HashMap;

use crate::results::FormValidationResult;
use crate::rules::RuleSet;
use crate::types::FieldValue;

/// Field name to rule set. Each field's rules run in order with
/// first-failure short-circuit.
pub type ValidationRules = HashMap<String, RuleSet>;

static NULL: FieldValue = FieldValue::Null;

/// A submitted form: field names mapped to dynamic values.
///
/// Fields never written read as `Null`, which is what lets `required`
/// report a missing field instead of the driver erroring out.
#[derive(Debug, Clone, Default)]
pub struct FormData {
    fields: HashMap<String, FieldValue>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> &mut Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> &FieldValue {
        self.fields.get(name).unwrap_or(&NULL)
    }
}

/// Run every field's rule set against the form.
///
/// Per field, rules apply in order and stop at the first failure; that
/// failure's message is recorded under the field name. Fields in the form
/// with no rules are ignored, and fields with rules but no submitted value
/// validate against `Null`.
pub fn validate_form(data: &FormData, rules: &ValidationRules) -> FormValidationResult {
    let mut errors = HashMap::new();
    for (field, rule_set) in rules {
        let value = data.get(field);
        for rule in rule_set {
            let result = rule.apply(value);
            if !result.is_valid() {
                errors.insert(field.clone(), result.message().to_string());
                break;
            }
        }
    }
    FormValidationResult::new(errors)
}

/// Registry of per-field rule sets for one form.
///
/// Built once when a form screen is set up, then reused for every submit.
/// Rules hold no mutable state, so a validator can be shared freely.
#[derive(Default)]
pub struct FormValidator {
    rules: ValidationRules,
}

impl FormValidator {
    /// Create a new empty validator. Fields are added via `add_field()`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a rule set to a field. A field already present is replaced.
    pub fn add_field(&mut self, name: impl Into<String>, rules: RuleSet) -> &mut Self {
        self.rules.insert(name.into(), rules);
        self
    }

    pub fn rules(&self) -> &ValidationRules {
        &self.rules
    }

    /// Validate a submitted form against all registered fields.
    pub fn validate(&self, data: &FormData) -> FormValidationResult {
        validate_form(data, &self.rules)
    }
}
