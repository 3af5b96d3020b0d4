// File: src/definition.rs
// Purpose: Form definitions loaded from TOML files

use crate::config::FormConfig;
use crate::descriptor::FieldDescriptor;
use crate::form::FormBuilder;
use crate::Form;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A whole form written as data
///
/// ```toml
/// name = "signup"
/// submit_button_text = "Create account"
///
/// [[fields]]
/// name = "email"
/// type = "email"
/// label = "Email"
/// validator = [{ rule = "required" }, { rule = "email" }]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submit_button_text: Option<String>,

    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
}

impl FormDefinition {
    /// Parse a definition, rejecting keys no descriptor understands
    pub fn from_toml(content: &str) -> Result<Self> {
        let raw: toml::Table = toml::from_str(content).context("Failed to parse form definition")?;
        check_field_keys(&raw)?;

        toml::from_str(content).context("Failed to parse form definition")
    }

    /// Load a definition file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read form definition: {:?}", path))?;

        Self::from_toml(&content).with_context(|| format!("Invalid form definition: {:?}", path))
    }

    /// Builder with this definition applied over `config`
    pub fn into_builder(self, config: FormConfig) -> FormBuilder {
        let mut builder = Form::builder().config(config).fields(self.fields);
        if let Some(name) = self.name {
            builder = builder.name(name);
        }
        if let Some(text) = self.submit_button_text {
            builder = builder.submit_button_text(text);
        }
        builder
    }
}

/// Flattened descriptor props let unknown keys through serde; catch them here
fn check_field_keys(raw: &toml::Table) -> Result<()> {
    let Some(fields) = raw.get("fields").and_then(toml::Value::as_array) else {
        return Ok(());
    };

    for (index, field) in fields.iter().enumerate() {
        let Some(table) = field.as_table() else {
            continue;
        };
        if let Some(key) = table.keys().find(|k| !FieldDescriptor::KEYS.contains(&k.as_str())) {
            let field = table
                .get("name")
                .and_then(toml::Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| format!("#{}", index));
            anyhow::bail!("Unknown key `{}` in field `{}`", key, field);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::FieldKind;
    use rusty_forms_validation::FieldValue;

    const SIGNUP: &str = r#"
        name = "signup"

        [[fields]]
        name = "email"
        type = "email"
        validator = [{ rule = "required" }, { rule = "email" }]

        [[fields]]
        name = "plan"
        type = "select"
        value = "free"
        options = [{ value = "free" }, { value = "paid" }]

        [[fields]]
        name = "promo_code"
        show_if = ["plan", "paid"]
    "#;

    #[test]
    fn test_parse_definition() {
        let definition = FormDefinition::from_toml(SIGNUP).unwrap();

        assert_eq!(definition.name.as_deref(), Some("signup"));
        assert_eq!(definition.submit_button_text, None);
        assert_eq!(definition.fields.len(), 3);
        assert_eq!(definition.fields[1].kind, FieldKind::Select);
        assert_eq!(definition.fields[2].kind, FieldKind::Text);
    }

    #[test]
    fn test_into_builder_applies_config_defaults() {
        let mut config = FormConfig::default();
        config.form.submit_button_text = "Go".into();

        let form = FormDefinition::from_toml(SIGNUP)
            .unwrap()
            .into_builder(config)
            .mount()
            .unwrap();

        assert_eq!(form.name(), "signup");
        assert_eq!(form.submit_button_text(), "Go");
        assert_eq!(form.values().get("plan"), Some(&FieldValue::from("free")));
        assert_eq!(form.engine().schema().names().collect::<Vec<_>>(), vec!["email"]);
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let err = FormDefinition::from_toml(
            r#"
            [[fields]]
            name = "promo"
            show_iff = ["plan", "paid"]
            "#,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Unknown key `show_iff` in field `promo`");

        let err = FormDefinition::from_toml("[[fields]]\nvalidtor = []\n").unwrap_err();
        assert_eq!(err.to_string(), "Unknown key `validtor` in field `#0`");

        assert!(FormDefinition::from_toml("title = \"x\"").is_err());
    }

    #[test]
    fn test_bad_definition_reports_error() {
        let result = FormDefinition::from_toml("fields = 3");
        assert!(result.is_err());
    }
}
