pub mod check;
pub mod render;

use anyhow::{Context, Result};
use rusty_forms::{Form, FormConfig, FormDefinition, Values};
use std::fs;
use std::path::Path;

/// Mount the form described by `definition`
pub fn mount(config: FormConfig, definition: &Path) -> Result<Form> {
    FormDefinition::load(definition)?
        .into_builder(config)
        .mount()
        .with_context(|| format!("Invalid form definition: {:?}", definition))
}

/// Read a JSON object of field values
pub fn load_values(path: &Path) -> Result<Values> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read values file: {:?}", path))?;

    serde_json::from_str(&content).with_context(|| format!("Failed to parse values file: {:?}", path))
}

/// Feed each value through the form's change handler
pub fn apply_values(form: &mut Form, values: Values) -> Result<()> {
    for (name, value) in values {
        form.handle_change(&name, value)
            .with_context(|| format!("Cannot set value for '{}'", name))?;
    }
    Ok(())
}
