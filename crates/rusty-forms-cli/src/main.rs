mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rusty-forms")]
#[command(version, about = "rusty-forms CLI - render and check form definitions", long_about = None)]
struct Cli {
    /// More log output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Config file
    #[arg(long, global = true, default_value = rusty_forms::config::DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a form definition to HTML
    Render {
        /// Form definition (TOML)
        definition: PathBuf,

        /// JSON object of field values to apply before rendering
        #[arg(long)]
        values: Option<PathBuf>,

        /// Render as after a submit attempt, with every error shown
        #[arg(long)]
        touch_all: bool,

        /// Write the HTML here instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Submit a set of values against a form definition
    Check {
        /// Form definition (TOML)
        definition: PathBuf,

        /// JSON object of field values
        #[arg(long)]
        values: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = rusty_forms::FormConfig::load(&cli.config)?;

    match cli.command {
        Commands::Render {
            definition,
            values,
            touch_all,
            out,
        } => {
            commands::render::execute(config, &definition, values.as_deref(), touch_all, out.as_deref())?;
        }
        Commands::Check { definition, values } => {
            commands::check::execute(config, &definition, &values)?;
        }
    }

    Ok(())
}

/// Logs go to stderr; RUST_LOG takes precedence over -v
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}
