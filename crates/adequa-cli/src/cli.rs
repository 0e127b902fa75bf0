//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Adequa: validate and resolve ERAA analysis requests
#[derive(Parser)]
#[command(name = "adequa")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate an analysis params file and resolve its time window
    Check {
        /// Path to the analysis params file (JSON)
        #[arg(value_name = "PARAMS")]
        file: PathBuf,

        /// Output the validated request as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the valid analysis kinds and data types
    Catalog,
}
