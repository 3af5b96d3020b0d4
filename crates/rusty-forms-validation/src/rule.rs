//! Single validation rules
//!
//! A [`Rule`] is one check applied to a [`FieldValue`]. Rules are plain data
//! so they can be written in form definition files:
//!
//! ```toml
//! validator = [
//!     { rule = "required" },
//!     { rule = "min_length", min = 3, message = "Too short" },
//! ]
//! ```

use crate::collection::{validate_max_items, validate_min_items};
use crate::email::{is_public_domain, is_valid_email};
use crate::numeric::{parse_number, validate_max, validate_min};
use crate::password::{validate_password, PasswordStrength};
use crate::string::{
    contains, ends_with, is_one_of, is_valid_url, starts_with, validate_max_length,
    validate_min_length,
};
use crate::value::FieldValue;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::Arc;

/// One validation rule with an optional message override
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    #[serde(flatten)]
    pub kind: RuleKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// The check a rule performs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum RuleKind {
    Required,
    MinLength { min: usize },
    MaxLength { max: usize },
    Email,
    NoPublicDomain,
    Url,
    Pattern { pattern: Pattern },
    OneOf { values: Vec<String> },
    Equals { value: FieldValue },
    NotEquals { value: FieldValue },
    Contains { text: String },
    StartsWith { prefix: String },
    EndsWith { suffix: String },
    Password { strength: PasswordStrength },
    Min { min: f64 },
    Max { max: f64 },
    Checked,
    MinItems { min: usize },
    MaxItems { max: usize },
    #[serde(skip)]
    Custom(CustomRule),
}

impl Rule {
    pub fn new(kind: RuleKind) -> Self {
        Self { kind, message: None }
    }

    /// Replace the default failure message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Check a value, returning the failure message on error
    ///
    /// Empty values only reach the rules that are about emptiness
    /// (`required`, `checked`, `min_items` and custom rules); every other rule
    /// accepts an empty value so optional fields are only checked once filled.
    pub fn check(&self, value: &FieldValue) -> Result<(), String> {
        if value.is_empty() && !self.kind.checks_empty() {
            return Ok(());
        }

        self.kind
            .check(value)
            .map_err(|default| self.message.clone().unwrap_or(default))
    }
}

impl From<RuleKind> for Rule {
    fn from(kind: RuleKind) -> Self {
        Rule::new(kind)
    }
}

impl RuleKind {
    fn checks_empty(&self) -> bool {
        matches!(
            self,
            RuleKind::Required | RuleKind::Checked | RuleKind::MinItems { .. } | RuleKind::Custom(_)
        )
    }

    fn check(&self, value: &FieldValue) -> Result<(), String> {
        match self {
            RuleKind::Required => match value {
                FieldValue::Bool(_) => Ok(()),
                v if v.is_empty() => Err("This field is required".to_string()),
                _ => Ok(()),
            },
            RuleKind::MinLength { min } => validate_min_length(text(value)?, *min),
            RuleKind::MaxLength { max } => validate_max_length(text(value)?, *max),
            RuleKind::Email => is_valid_email(text(value)?.trim())
                .then_some(())
                .ok_or_else(|| "Invalid email address".to_string()),
            RuleKind::NoPublicDomain => (!is_public_domain(text(value)?.trim()))
                .then_some(())
                .ok_or_else(|| "Public email domains are not allowed".to_string()),
            RuleKind::Url => is_valid_url(text(value)?.trim())
                .then_some(())
                .ok_or_else(|| "Invalid URL".to_string()),
            RuleKind::Pattern { pattern } => pattern
                .is_match(text(value)?)
                .then_some(())
                .ok_or_else(|| "Invalid format".to_string()),
            RuleKind::OneOf { values } => is_one_of(text(value)?, values)
                .then_some(())
                .ok_or_else(|| format!("Must be one of: {}", values.join(", "))),
            RuleKind::Equals { value: expected } => (value == expected)
                .then_some(())
                .ok_or_else(|| format!("Must be {}", expected)),
            RuleKind::NotEquals { value: forbidden } => (value != forbidden)
                .then_some(())
                .ok_or_else(|| format!("Must not be {}", forbidden)),
            RuleKind::Contains { text: needle } => contains(text(value)?, needle)
                .then_some(())
                .ok_or_else(|| format!("Must contain \"{}\"", needle)),
            RuleKind::StartsWith { prefix } => starts_with(text(value)?, prefix)
                .then_some(())
                .ok_or_else(|| format!("Must start with \"{}\"", prefix)),
            RuleKind::EndsWith { suffix } => ends_with(text(value)?, suffix)
                .then_some(())
                .ok_or_else(|| format!("Must end with \"{}\"", suffix)),
            RuleKind::Password { strength } => validate_password(text(value)?, *strength),
            RuleKind::Min { min } => validate_min(parse_number(text(value)?)?, *min),
            RuleKind::Max { max } => validate_max(parse_number(text(value)?)?, *max),
            RuleKind::Checked => match value {
                FieldValue::Bool(true) => Ok(()),
                _ => Err("Must be checked".to_string()),
            },
            RuleKind::MinItems { min } => validate_min_items(list(value)?, *min),
            RuleKind::MaxItems { max } => validate_max_items(list(value)?, *max),
            RuleKind::Custom(custom) => custom.call(value),
        }
    }
}

fn text(value: &FieldValue) -> Result<&str, String> {
    value.as_text().ok_or_else(|| "Must be text".to_string())
}

fn list(value: &FieldValue) -> Result<&[String], String> {
    value.as_list().ok_or_else(|| "Must be a list".to_string())
}

/// Compiled regular expression used by `pattern` rules
///
/// Compiled when the rule is built or deserialized, so an invalid pattern is
/// rejected up front instead of failing every check.
#[derive(Clone)]
pub struct Pattern(Regex);

impl Pattern {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Regex::new(pattern).map(Pattern)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn is_match(&self, value: &str) -> bool {
        self.0.is_match(value)
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pattern").field(&self.as_str()).finish()
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Serialize for Pattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Pattern {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Pattern::new(&raw).map_err(serde::de::Error::custom)
    }
}

type CustomFn = dyn Fn(&FieldValue) -> Result<(), String> + Send + Sync;

/// Caller-supplied check; only available when building validators in code
#[derive(Clone)]
pub struct CustomRule(Arc<CustomFn>);

impl CustomRule {
    pub fn new<F>(check: F) -> Self
    where
        F: Fn(&FieldValue) -> Result<(), String> + Send + Sync + 'static,
    {
        CustomRule(Arc::new(check))
    }

    fn call(&self, value: &FieldValue) -> Result<(), String> {
        (self.0)(value)
    }
}

impl fmt::Debug for CustomRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CustomRule(..)")
    }
}

impl PartialEq for CustomRule {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}
