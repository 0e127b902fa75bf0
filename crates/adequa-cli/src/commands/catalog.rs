//! Catalog command - list the valid analysis kinds and data types.

use colored::Colorize;

use adequa::AnalysisKind;

use crate::config::AVAILABLE_DATA_TYPES;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", "Analysis kinds:".cyan().bold());
    for kind in AnalysisKind::ALL {
        println!("  {kind}");
    }

    println!();
    println!("{}", "Data types:".cyan().bold());
    for data_type in AVAILABLE_DATA_TYPES {
        println!("  {data_type}");
    }

    Ok(())
}
