// File: src/engine.rs
// Purpose: Form-state engine tracking values, errors and touched flags

use crate::error::FormError;
use rusty_forms_validation::{Errors, FieldValue, Schema, Values};
use std::collections::BTreeMap;

/// Touched flags keyed by field name
pub type Touched = BTreeMap<String, bool>;

/// When the engine re-runs validation on its own
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineOptions {
    pub validate_on_change: bool,
    pub validate_on_blur: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            validate_on_change: false,
            validate_on_blur: true,
        }
    }
}

/// Snapshot of a form's state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub values: Values,
    pub errors: Errors,
    pub touched: Touched,
    pub submit_count: u32,
}

impl FormState {
    pub fn value(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors.get(name).map(String::as_str)
    }

    pub fn is_touched(&self, name: &str) -> bool {
        self.touched.get(name).copied().unwrap_or(false)
    }

    /// Message to display for a field: only once the field has been touched
    pub fn visible_error(&self, name: &str) -> Option<&str> {
        self.error(name).filter(|_| self.is_touched(name))
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Validation passed; the callback received these values
    Submitted(Values),
    /// Validation failed; the callback was not called
    Rejected(Errors),
}

impl SubmitOutcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmitOutcome::Submitted(_))
    }
}

/// Controlled form state for one mounted form
#[derive(Debug, Clone)]
pub struct FormEngine {
    initial_values: Values,
    schema: Schema,
    options: EngineOptions,
    state: FormState,
}

impl FormEngine {
    pub fn new(initial_values: Values, schema: Schema, options: EngineOptions) -> Self {
        let state = FormState {
            values: initial_values.clone(),
            ..FormState::default()
        };

        Self {
            initial_values,
            schema,
            options,
            state,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn values(&self) -> &Values {
        &self.state.values
    }

    pub fn errors(&self) -> &Errors {
        &self.state.errors
    }

    pub fn touched(&self) -> &Touched {
        &self.state.touched
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn options(&self) -> EngineOptions {
        self.options
    }

    /// Store a new value for a registered field
    pub fn handle_change(&mut self, name: &str, value: impl Into<FieldValue>) -> Result<(), FormError> {
        self.set_field_value(name, value)?;
        if self.options.validate_on_change {
            self.validate();
        }
        Ok(())
    }

    /// Mark a field touched, validating when `validate_on_blur` is set
    pub fn handle_blur(&mut self, name: &str) -> Result<(), FormError> {
        self.set_field_touched(name, true)?;
        if self.options.validate_on_blur {
            self.validate();
        }
        Ok(())
    }

    pub fn set_field_value(&mut self, name: &str, value: impl Into<FieldValue>) -> Result<(), FormError> {
        let slot = self
            .state
            .values
            .get_mut(name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))?;
        *slot = value.into();
        Ok(())
    }

    pub fn set_field_touched(&mut self, name: &str, touched: bool) -> Result<(), FormError> {
        if !self.state.values.contains_key(name) {
            return Err(FormError::UnknownField(name.to_string()));
        }
        self.state.touched.insert(name.to_string(), touched);
        Ok(())
    }

    pub fn set_errors(&mut self, errors: Errors) {
        self.state.errors = errors;
    }

    /// Run the schema over the current values; true when nothing failed
    pub fn validate(&mut self) -> bool {
        self.state.errors = self.schema.validate(&self.state.values);
        self.state.errors.is_empty()
    }

    /// Touch every field, validate, and hand the values to `on_submit` if valid
    pub fn submit<F>(&mut self, on_submit: F) -> SubmitOutcome
    where
        F: FnOnce(&Values),
    {
        self.state.submit_count += 1;
        self.state.touched = self
            .state
            .values
            .keys()
            .map(|name| (name.clone(), true))
            .collect();

        if self.validate() {
            tracing::debug!(
                submit_count = self.state.submit_count,
                fields = self.state.values.len(),
                "form submitted"
            );
            on_submit(&self.state.values);
            SubmitOutcome::Submitted(self.state.values.clone())
        } else {
            tracing::debug!(
                submit_count = self.state.submit_count,
                errors = self.state.errors.len(),
                "form submit rejected"
            );
            SubmitOutcome::Rejected(self.state.errors.clone())
        }
    }

    /// Back to the initial values with no errors, touches or submits
    pub fn reset(&mut self) {
        self.state = FormState {
            values: self.initial_values.clone(),
            ..FormState::default()
        };
    }

    /// Adopt the initial values and schema of a new descriptor set
    ///
    /// Current values of fields that still exist are kept, new fields start
    /// at their initial value, and state of removed fields is dropped.
    pub fn reconcile(&mut self, initial_values: Values, schema: Schema) {
        let state = &mut self.state;
        state.values.retain(|name, _| initial_values.contains_key(name));
        state.errors.retain(|name, _| initial_values.contains_key(name));
        state.touched.retain(|name, _| initial_values.contains_key(name));

        for (name, value) in &initial_values {
            state
                .values
                .entry(name.clone())
                .or_insert_with(|| value.clone());
        }

        self.initial_values = initial_values;
        self.schema = schema;
    }
}
