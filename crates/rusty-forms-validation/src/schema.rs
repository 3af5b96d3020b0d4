//! Form-level validation schema

use crate::validator::Validator;
use crate::value::{FieldValue, Values};
use std::collections::BTreeMap;

/// Validation messages keyed by field name, at most one per field
pub type Errors = BTreeMap<String, String>;

/// Maps field names to their validators
///
/// Values whose name has no validator are ignored. A validator whose field is
/// missing from the values is checked against the empty value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    fields: BTreeMap<String, Validator>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, name: impl Into<String>, validator: Validator) -> Self {
        self.insert(name, validator);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, validator: Validator) {
        self.fields.insert(name.into(), validator);
    }

    pub fn get(&self, name: &str) -> Option<&Validator> {
        self.fields.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Validate every field in the schema against `values`
    pub fn validate(&self, values: &Values) -> Errors {
        let empty = FieldValue::empty();

        self.fields
            .iter()
            .filter_map(|(name, validator)| {
                let value = values.get(name).unwrap_or(&empty);
                validator.check(value).err().map(|msg| (name.clone(), msg))
            })
            .collect()
    }

    /// Validate a single field; `None` when the field has no validator or passes
    pub fn validate_field(&self, name: &str, value: &FieldValue) -> Option<String> {
        self.fields.get(name)?.check(value).err()
    }
}

impl FromIterator<(String, Validator)> for Schema {
    fn from_iter<I: IntoIterator<Item = (String, Validator)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn signup_schema() -> Schema {
        Schema::new()
            .field("email", Validator::new().required().email())
            .field("age", Validator::new().min(18.0))
    }

    #[test]
    fn test_validate_collects_one_message_per_field() {
        let mut values = Values::new();
        values.insert("email".into(), FieldValue::from("bad"));
        values.insert("age".into(), FieldValue::from("12"));

        let errors = signup_schema().validate(&values);

        let mut expected = Errors::new();
        expected.insert("age".into(), "Must be 18 or more".into());
        expected.insert("email".into(), "Invalid email address".into());
        assert_eq!(errors, expected);
    }

    #[test]
    fn test_missing_value_checked_as_empty() {
        let errors = signup_schema().validate(&Values::new());
        assert_eq!(errors.get("email").map(String::as_str), Some("This field is required"));
        assert!(!errors.contains_key("age"));
    }

    #[test]
    fn test_unknown_values_ignored() {
        let mut values = Values::new();
        values.insert("email".into(), FieldValue::from("a@b.io"));
        values.insert("nickname".into(), FieldValue::from(""));

        assert!(signup_schema().validate(&values).is_empty());
    }

    #[test]
    fn test_validate_field() {
        let schema = signup_schema();
        assert_eq!(
            schema.validate_field("email", &FieldValue::empty()),
            Some("This field is required".to_string())
        );
        assert_eq!(schema.validate_field("nickname", &FieldValue::empty()), None);
    }
}
