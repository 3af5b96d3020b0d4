// File: src/config.rs
// Purpose: Configuration parsing from rusty-forms.toml

use crate::engine::EngineOptions;
use crate::registry::RegistryOptions;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default config file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "rusty-forms.toml";

/// Form configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FormConfig {
    #[serde(default)]
    pub form: FormDefaults,

    #[serde(default)]
    pub behavior: BehaviorConfig,

    #[serde(default)]
    pub layout: LayoutConfig,
}

/// Defaults for forms that do not set these themselves
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormDefaults {
    #[serde(default = "default_form_name")]
    pub name: String,

    #[serde(default = "default_submit_button_text")]
    pub submit_button_text: String,
}

/// Validation timing and descriptor checks
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BehaviorConfig {
    /// Re-validate on every change (default: false, validation waits for submit)
    #[serde(default = "default_false")]
    pub validate_on_change: bool,

    /// Re-validate when a field loses focus (default: true)
    #[serde(default = "default_true")]
    pub validate_on_blur: bool,

    /// Reject `show_if` gates naming fields that do not exist (default: false,
    /// such gates are logged and keep their field hidden)
    #[serde(default = "default_false")]
    pub strict_show_if: bool,
}

/// Layout configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LayoutConfig {
    /// Grid gap step
    #[serde(default = "default_spacing")]
    pub spacing: u8,

    /// Prefix of generated element ids
    #[serde(default = "default_id_prefix")]
    pub id_prefix: String,
}

// Default values
fn default_form_name() -> String {
    "form".to_string()
}

fn default_submit_button_text() -> String {
    "Submit".to_string()
}

fn default_spacing() -> u8 {
    2
}

fn default_id_prefix() -> String {
    "field".to_string()
}

fn default_true() -> bool {
    true
}

fn default_false() -> bool {
    false
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            name: default_form_name(),
            submit_button_text: default_submit_button_text(),
        }
    }
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            validate_on_change: false,
            validate_on_blur: true,
            strict_show_if: false,
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            spacing: default_spacing(),
            id_prefix: default_id_prefix(),
        }
    }
}

impl BehaviorConfig {
    pub fn engine_options(&self) -> EngineOptions {
        EngineOptions {
            validate_on_change: self.validate_on_change,
            validate_on_blur: self.validate_on_blur,
        }
    }

    pub fn registry_options(&self) -> RegistryOptions {
        RegistryOptions {
            strict_show_if: self.strict_show_if,
        }
    }
}

impl FormConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Missing file means defaults
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: FormConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from default path (./rusty-forms.toml)
    pub fn load_default() -> Result<Self> {
        Self::load(DEFAULT_CONFIG_FILE)
    }
}
