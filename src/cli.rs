//! CLI definition using clap

use crate::types::PricingUnit;
use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Output format for results
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Parser)]
#[command(name = "karat-checker")]
#[command(version)]
#[command(about = "Jewelry appraisal calculator - material costing and quoted-price diagnosis")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute an appraisal from a JSON input file
    Appraise {
        /// Path to an appraisal context JSON file
        file: PathBuf,

        /// Save the computed snapshot to the history list
        #[arg(long)]
        save: bool,

        /// Description stored with the saved snapshot
        #[arg(long, short = 'd')]
        description: Option<String>,
    },

    /// Show saved appraisal history
    History {
        /// Limit number of entries shown
        #[arg(long, short = 'n', default_value = "20")]
        limit: usize,
    },

    /// Export the history list as CSV
    Export {
        /// Output CSV file path
        #[arg(long, short = 'o')]
        output: PathBuf,
    },

    /// Render the history list as a paginated printable report
    Report {
        /// Output file path; prints to stdout when omitted
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Manage the material catalog
    Materials {
        #[command(subcommand)]
        action: MaterialsAction,
    },

    /// Resolve an engraving/alias string to a catalog material
    Alias {
        /// Free-text alias, e.g. "750/1000" or "925"
        text: String,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set preferred currency (USD, EUR, GBP, MXN, JPY)
        #[arg(long)]
        set_currency: Option<String>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,
    },
}

#[derive(Subcommand)]
pub enum MaterialsAction {
    /// List built-in and custom materials
    List,

    /// Add a custom material
    Add {
        /// Display label, e.g. "Tanzanite"
        #[arg(long)]
        label: String,

        /// Pricing unit
        #[arg(long, value_enum)]
        unit: PricingUnit,

        /// Reference density in g/cm3; defaults to 2.7 when omitted
        #[arg(long)]
        density: Option<f64>,
    },
}
