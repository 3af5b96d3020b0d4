use anyhow::{Context, Result};
use colored::Colorize;
use rusty_forms::FormConfig;
use std::fs;
use std::path::Path;

pub fn execute(
    config: FormConfig,
    definition: &Path,
    values: Option<&Path>,
    touch_all: bool,
    out: Option<&Path>,
) -> Result<()> {
    let mut form = super::mount(config, definition)?;

    if let Some(path) = values {
        super::apply_values(&mut form, super::load_values(path)?)?;
    }

    if touch_all {
        let outcome = form.submit();
        tracing::debug!(submitted = outcome.is_submitted(), "touched all fields");
    }

    let html = form.to_html();

    match out {
        Some(path) => {
            fs::write(path, &html).with_context(|| format!("Failed to write {:?}", path))?;
            eprintln!("  {} {} -> {}", "✓".green(), form.name(), path.display());
        }
        None => println!("{}", html),
    }

    Ok(())
}
