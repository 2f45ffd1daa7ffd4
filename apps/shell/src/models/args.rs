//! # CLI Argument Definitions

use allergo_domain::Proba;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Top-level command line.
#[derive(Debug, Parser)]
#[command(name = "allergo")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Allergy risk, correction and locale rules over Allergomat documents")]
pub struct Cli {
    /// Configuration file (TOML, JSON or YAML); defaults plus ALLERGO__* overrides otherwise
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log detail on stderr (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: AppCommands,
}

#[derive(Debug, Subcommand)]
pub enum AppCommands {
    /// Rate entities (ingredients, keywords, allergens) against a set of allergies
    Risk {
        /// JSON array of entities; `null` entries count as missing
        #[arg(short, long)]
        file: PathBuf,

        /// Allergy id to check (repeatable)
        #[arg(short, long = "allergy", required = true)]
        allergies: Vec<String>,
    },
    /// Apply override associations on top of base associations
    Merge {
        /// Base associations as JSON, or `@path` to read a file
        #[arg(long)]
        base: String,

        /// Override associations as JSON, or `@path` to read a file
        #[arg(long)]
        overrides: String,
    },
    /// Resolve a free-text country name to its ISO 3166-1 alpha-2 code
    Country {
        /// Country name in any supported language (e.g. 'Sverige')
        text: String,
    },
    /// Show the ISO code, market and locale of a language tag
    Locale {
        /// ISO 639-1 tag (e.g. 'sv')
        tag: String,
    },
    /// Show the display label of a probability
    Label {
        /// none, low, medium or high
        proba: Proba,

        /// Preferred language tag (repeatable); configured preference when omitted
        #[arg(short, long = "lang")]
        languages: Vec<String>,
    },
}
