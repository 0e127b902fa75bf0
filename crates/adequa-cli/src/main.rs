//! Adequa CLI - validate and resolve ERAA analysis request params.

mod cli;
mod commands;
mod config;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check { file, json } => commands::check::run(file, json, cli.verbose),
        Commands::Catalog => commands::catalog::run(),
    };

    if let Err(e) = result {
        commands::report_failure(e.as_ref());
        std::process::exit(1);
    }
}
