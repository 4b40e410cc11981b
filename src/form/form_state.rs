use serde::Serialize;
use std::collections::BTreeMap;
use tracing::warn;

use crate::form::FieldErrors;

/// Current value of every field of one form, plus the errors on display.
///
/// The set of fields is fixed at construction; input for names the form does
/// not declare is ignored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormState {
    values: BTreeMap<String, String>,
    errors: FieldErrors,
}

impl FormState {
    pub fn new(fields: &[&str]) -> Self {
        FormState {
            values: fields.iter().map(|f| (f.to_string(), String::new())).collect(),
            errors: FieldErrors::new(),
        }
    }

    /// Input event: store the value and drop any error shown for that field.
    pub fn set(&mut self, field: &str, value: impl Into<String>) -> bool {
        match self.values.get_mut(field) {
            Some(slot) => {
                *slot = value.into();
                self.errors.clear_field(field);
                true
            }
            None => {
                warn!(field, "Ignoring input for undeclared form field");
                false
            }
        }
    }

    /// Overwrites `field` only with a non-empty value.
    pub fn prefill(&mut self, field: &str, value: Option<&str>) {
        if let Some(v) = value.filter(|v| !v.trim().is_empty()) {
            if let Some(slot) = self.values.get_mut(field) {
                *slot = v.to_string();
            }
        }
    }

    pub fn value(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or("")
    }

    pub fn values(&self) -> &BTreeMap<String, String> {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn set_errors(&mut self, errors: FieldErrors) {
        self.errors = errors;
    }

    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }

    /// Every field back to the empty string, no errors.
    pub fn reset(&mut self) {
        for v in self.values.values_mut() {
            v.clear();
        }
        self.errors.clear();
    }
}

