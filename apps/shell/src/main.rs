pub mod handlers;
pub mod models;

use crate::handlers::{label, locale, merge, risk};
use crate::models::args::{AppCommands, Cli};

use allergo_domain::config::LoggingConfig;
use allergo_kernel::config::load_app_config;
use allergo_logger::{LevelFilter, Logger};
use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use std::str::FromStr;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_app_config(cli.config.as_deref())?;
    let _logger = init_logger(&config.logging, cli.verbose)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        AppCommands::Risk { file, allergies } => risk::rate_entities(&file, &allergies, &mut out)?,
        AppCommands::Merge { base, overrides } => merge::merge(&base, &overrides, &mut out)?,
        AppCommands::Country { text } => locale::country(&text, &mut out)?,
        AppCommands::Locale { tag } => locale::locale(&tag, &mut out)?,
        AppCommands::Label { proba, languages } => {
            label::label(proba, &languages, &config.localization.preferred_languages, &mut out)?;
        },
    }

    out.flush()?;
    Ok(())
}

fn init_logger(logging: &LoggingConfig, verbose: u8) -> Result<Logger> {
    let level = LevelFilter::from_str(&logging.level)
        .with_context(|| format!("Invalid log level '{}'", logging.level))?;

    let builder = Logger::builder().name(env!("CARGO_BIN_NAME")).level(level).verbosity(verbose);

    let logger = match &logging.directory {
        Some(directory) => builder.path(directory).json(logging.json).init()?,
        None => builder.init()?,
    };
    Ok(logger)
}
