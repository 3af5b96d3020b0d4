use anyhow::Result;
use colored::Colorize;
use rusty_forms::{FormConfig, SubmitOutcome};
use std::path::Path;

pub fn execute(config: FormConfig, definition: &Path, values: &Path) -> Result<()> {
    let mut form = super::mount(config, definition)?;
    super::apply_values(&mut form, super::load_values(values)?)?;

    match form.submit() {
        SubmitOutcome::Submitted(values) => {
            println!("{}", "Submitted".green().bold());
            println!("{}", serde_json::to_string_pretty(&values)?);
            Ok(())
        }
        SubmitOutcome::Rejected(errors) => {
            println!("{}", "Rejected".red().bold());
            println!("{}", serde_json::to_string_pretty(&errors)?);
            anyhow::bail!("{} field(s) failed validation", errors.len())
        }
    }
}
