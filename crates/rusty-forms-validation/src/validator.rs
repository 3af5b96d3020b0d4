//! Ordered rule lists attached to a single field

use crate::password::PasswordStrength;
use crate::rule::{CustomRule, Pattern, Rule, RuleKind};
use crate::value::FieldValue;
use serde::{Deserialize, Serialize};

/// All the rules for one field, checked in order
///
/// Built fluently in code, or deserialized from a list of rules:
///
/// ```
/// use rusty_forms_validation::{FieldValue, Validator};
///
/// let email = Validator::new().required().email().message("Enter a work email");
/// assert_eq!(email.check(&FieldValue::from("")), Err("This field is required".to_string()));
/// assert_eq!(email.check(&FieldValue::from("nope")), Err("Enter a work email".to_string()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Validator {
    rules: Vec<Rule>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Check a value, returning the message of the first failing rule
    pub fn check(&self, value: &FieldValue) -> Result<(), String> {
        self.rules.iter().try_for_each(|rule| rule.check(value))
    }

    /// Append a rule
    pub fn rule(mut self, rule: impl Into<Rule>) -> Self {
        self.rules.push(rule.into());
        self
    }

    /// Override the message of the most recently added rule
    pub fn message(mut self, message: impl Into<String>) -> Self {
        if let Some(last) = self.rules.last_mut() {
            last.message = Some(message.into());
        }
        self
    }

    pub fn required(self) -> Self {
        self.rule(RuleKind::Required)
    }

    pub fn min_length(self, min: usize) -> Self {
        self.rule(RuleKind::MinLength { min })
    }

    pub fn max_length(self, max: usize) -> Self {
        self.rule(RuleKind::MaxLength { max })
    }

    pub fn email(self) -> Self {
        self.rule(RuleKind::Email)
    }

    pub fn no_public_domain(self) -> Self {
        self.rule(RuleKind::NoPublicDomain)
    }

    pub fn url(self) -> Self {
        self.rule(RuleKind::Url)
    }

    /// Add a regex rule; fails if the pattern does not compile
    pub fn pattern(self, pattern: &str) -> Result<Self, regex::Error> {
        Ok(self.rule(RuleKind::Pattern { pattern: Pattern::new(pattern)? }))
    }

    pub fn one_of<I, S>(self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rule(RuleKind::OneOf {
            values: values.into_iter().map(Into::into).collect(),
        })
    }

    pub fn equals(self, value: impl Into<FieldValue>) -> Self {
        self.rule(RuleKind::Equals { value: value.into() })
    }

    pub fn not_equals(self, value: impl Into<FieldValue>) -> Self {
        self.rule(RuleKind::NotEquals { value: value.into() })
    }

    pub fn contains(self, text: impl Into<String>) -> Self {
        self.rule(RuleKind::Contains { text: text.into() })
    }

    pub fn starts_with(self, prefix: impl Into<String>) -> Self {
        self.rule(RuleKind::StartsWith { prefix: prefix.into() })
    }

    pub fn ends_with(self, suffix: impl Into<String>) -> Self {
        self.rule(RuleKind::EndsWith { suffix: suffix.into() })
    }

    pub fn password(self, strength: PasswordStrength) -> Self {
        self.rule(RuleKind::Password { strength })
    }

    pub fn min(self, min: f64) -> Self {
        self.rule(RuleKind::Min { min })
    }

    pub fn max(self, max: f64) -> Self {
        self.rule(RuleKind::Max { max })
    }

    pub fn checked(self) -> Self {
        self.rule(RuleKind::Checked)
    }

    pub fn min_items(self, min: usize) -> Self {
        self.rule(RuleKind::MinItems { min })
    }

    pub fn max_items(self, max: usize) -> Self {
        self.rule(RuleKind::MaxItems { max })
    }

    pub fn custom<F>(self, check: F) -> Self
    where
        F: Fn(&FieldValue) -> Result<(), String> + Send + Sync + 'static,
    {
        self.rule(RuleKind::Custom(CustomRule::new(check)))
    }
}

impl FromIterator<Rule> for Validator {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}
