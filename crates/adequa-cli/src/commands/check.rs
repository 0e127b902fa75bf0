//! Check command - validate a params file and resolve its analysis window.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use colored::Colorize;
use indexmap::IndexMap;
use serde_json::Value;

use adequa::{AdequaError, AnalysisRequest};

use crate::config::{AVAILABLE_DATA_TYPES, PERIOD_BOUNDS};

use super::print_diagnostic;

pub fn run(
    file: PathBuf,
    json_output: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("Params file not found: {}", file.display()).into());
    }

    let params = load_params(&file)?;
    if verbose {
        println!(
            "{} {} fields from {}",
            "Loaded".cyan().bold(),
            params.len(),
            file.display()
        );
    }

    let mut request = AnalysisRequest::from_params(&params)?;
    request.check_data_type(&AVAILABLE_DATA_TYPES)?;
    let warnings = request.resolve_period(&PERIOD_BOUNDS)?;

    for warning in &warnings {
        print_diagnostic(warning);
    }

    if json_output {
        println!("{}", serde_json::to_string_pretty(&request)?);
        return Ok(());
    }

    println!("{request}");
    if let Some(period) = request.resolved_period() {
        println!("- period: {} to {}", period.start.date(), period.end.date());
    }
    println!();
    println!("{}", "Params OK - request is ready to run".green().bold());

    Ok(())
}

/// Load the raw parameter mapping, preserving field order.
fn load_params(path: &Path) -> adequa::Result<IndexMap<String, Value>> {
    let file = File::open(path)
        .map_err(|e| AdequaError::Params(format!("failed to open '{}': {}", path.display(), e)))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .map_err(|e| AdequaError::Params(format!("failed to parse '{}': {}", path.display(), e)))
}
