// SPDX-License-Identifier: MPL-2.0
//! Rule-driven form state.
//!
//! The `FormValidator` owns the per-field value/error/touched state for a
//! fixed set of named string fields and keeps errors consistent with the
//! configured rules: an error is only ever the result of re-running the
//! field's rule against its current value.

use std::collections::BTreeMap;

use super::rules::{validate_value, ValidationRule};
use crate::diagnostics::DiagnosticsHandle;
use crate::error::{Error, Result};

/// Per-field state driving form UI.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldState {
    /// Current text value.
    pub value: String,
    /// Error from the last validation pass, if any.
    pub error: Option<String>,
    /// Whether the user has interacted with the field.
    pub touched: bool,
}

/// Borrowed snapshot of one field, bindable to a text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldProps<'a> {
    pub value: &'a str,
    pub error: Option<&'a str>,
    pub touched: bool,
}

/// Declarative validation engine for a named set of string fields.
///
/// Construction is strict: every rule must target a field present in the
/// initial values, otherwise [`Error::Config`] is returned. Runtime writes
/// are permissive: setting a value for an unknown name creates an un-ruled
/// field (always valid); [`reset`](Self::reset) drops such fields again.
#[derive(Debug, Clone)]
pub struct FormValidator {
    initial: BTreeMap<String, String>,
    rules: BTreeMap<String, ValidationRule>,
    fields: BTreeMap<String, FieldState>,
    diagnostics: Option<DiagnosticsHandle>,
}

impl FormValidator {
    /// Creates a validator from initial values and per-field rules.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if a rule is keyed by a field name absent
    /// from `initial_values`.
    pub fn new(
        initial_values: BTreeMap<String, String>,
        rules: BTreeMap<String, ValidationRule>,
    ) -> Result<Self> {
        for name in rules.keys() {
            if !initial_values.contains_key(name) {
                return Err(Error::Config(format!(
                    "validation rule references unknown field '{name}'"
                )));
            }
        }

        let fields = pristine_fields(&initial_values);
        Ok(Self {
            initial: initial_values,
            rules,
            fields,
            diagnostics: None,
        })
    }

    /// Sets the diagnostics handle. Rejected [`validate_all`](Self::validate_all)
    /// passes are logged through it.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Updates a field's value, revalidates it, and marks it touched.
    ///
    /// An unknown name creates a new un-ruled field.
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        let error = self.check(name, &value);
        let field = self.fields.entry(name.to_string()).or_default();
        field.value = value;
        field.error = error;
        field.touched = true;
    }

    /// Marks a field touched and revalidates its current value.
    ///
    /// Used for blur-triggered validation; the value is unchanged.
    pub fn set_touched(&mut self, name: &str) {
        let value = self
            .fields
            .get(name)
            .map(|f| f.value.clone())
            .unwrap_or_default();
        let error = self.check(name, &value);
        let field = self.fields.entry(name.to_string()).or_default();
        field.error = error;
        field.touched = true;
    }

    /// Revalidates and touches every field; true iff no field has an error.
    ///
    /// This is the authoritative pre-submission check.
    pub fn validate_all(&mut self) -> bool {
        let names: Vec<String> = self.fields.keys().cloned().collect();
        let mut ok = true;
        for name in names {
            let value = self
                .fields
                .get(&name)
                .map(|f| f.value.clone())
                .unwrap_or_default();
            let error = self.check(&name, &value);
            if let Some(message) = &error {
                ok = false;
                if let Some(handle) = &self.diagnostics {
                    handle.log_validation_rejected(&name, message);
                }
            }
            if let Some(field) = self.fields.get_mut(&name) {
                field.error = error;
                field.touched = true;
            }
        }
        ok
    }

    /// Restores every field to its initial value with no error, untouched.
    ///
    /// Fields created dynamically via [`set_value`](Self::set_value) are
    /// dropped, since they have no initial value.
    pub fn reset(&mut self) {
        self.fields = pristine_fields(&self.initial);
    }

    /// True iff no field currently has an error, touched or not.
    ///
    /// A pristine form with empty required fields is valid until validated.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.fields.values().all(|f| f.error.is_none())
    }

    /// True iff some *touched* field currently has an error.
    ///
    /// Differs from `!is_valid()` deliberately: pristine fields never show
    /// red state until the user has interacted with them.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.fields.values().any(|f| f.touched && f.error.is_some())
    }

    /// Returns the state of one field, if it exists.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldState> {
        self.fields.get(name)
    }

    /// Returns a bindable snapshot of one field, if it exists.
    #[must_use]
    pub fn field_props(&self, name: &str) -> Option<FieldProps<'_>> {
        self.fields.get(name).map(|f| FieldProps {
            value: &f.value,
            error: f.error.as_deref(),
            touched: f.touched,
        })
    }

    /// Returns all fields keyed by name.
    #[must_use]
    pub fn fields(&self) -> &BTreeMap<String, FieldState> {
        &self.fields
    }

    fn check(&self, name: &str, value: &str) -> Option<String> {
        self.rules
            .get(name)
            .and_then(|rule| validate_value(name, value, rule))
    }
}

fn pristine_fields(initial: &BTreeMap<String, String>) -> BTreeMap<String, FieldState> {
    initial
        .iter()
        .map(|(name, value)| {
            (
                name.clone(),
                FieldState {
                    value: value.clone(),
                    error: None,
                    touched: false,
                },
            )
        })
        .collect()
}
