//! Field descriptors handed to a form engine.
//!
//! The form engine itself lives outside the domain; this module only describes
//! the fields a form needs and the checks attached to them.

use std::collections::HashMap;

pub const CODE_FIELD: &str = "code";

/// Custom check run after the required rule; returns a user-facing message.
pub type FieldValidator = fn(&str) -> Result<(), String>;

#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub label: &'static str,
    pub placeholder: Option<&'static str>,
    pub required: bool,
    pub required_error: &'static str,
    pub validator: Option<FieldValidator>,
}

impl FieldDescriptor {
    /// Returns every error message the value produces; empty means valid.
    pub fn check(&self, value: &str) -> Vec<String> {
        if value.trim().is_empty() {
            return if self.required {
                vec![self.required_error.to_string()]
            } else {
                Vec::new()
            };
        }

        match self.validator {
            Some(validate) => validate(value).err().into_iter().collect(),
            None => Vec::new(),
        }
    }
}

/// Values keyed by field name, as produced by a form engine on submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues(HashMap<String, String>);

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// The single-field form used on the "verify code" step.
pub fn verification_code_form() -> Vec<FieldDescriptor> {
    vec![FieldDescriptor {
        name: CODE_FIELD,
        label: "Verification code",
        placeholder: Some("Enter the code shown in your authenticator app"),
        required: true,
        required_error: "Verification code is required",
        validator: None,
    }]
}
