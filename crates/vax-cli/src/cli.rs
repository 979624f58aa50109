//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Immunization scheduling-window helper.
///
/// Computes minimum/maximum/recommended age windows for vaccine doses from a
/// patient's birth date and dose history, evaluated against named test
/// scenarios.
#[derive(Debug, Parser)]
#[command(name = "vaxplan", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Evaluate scheduling windows for named test scenarios.
    Run {
        /// Scenario names; defaults to the configured scenario list.
        case: Vec<String>,
    },

    /// List the known test scenarios.
    Cases,

    /// Parse an informal time span and show its components.
    Parse {
        /// Text such as "4 months, 2 weeks".
        text: String,
    },

    /// Describe the dose series for an antigen or a vaccine product code.
    Series {
        /// Antigen name (e.g., DTaP).
        #[arg(long, conflicts_with = "cvx")]
        antigen: Option<String>,

        /// CVX vaccine product code (e.g., 20).
        #[arg(long)]
        cvx: Option<String>,
    },
}
