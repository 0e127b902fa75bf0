//! CLI command implementations.

pub mod catalog;
pub mod check;

use adequa::{AdequaError, Diagnostic, Severity};
use colored::Colorize;

/// Render a diagnostic with its severity tag.
pub fn print_diagnostic(diag: &Diagnostic) {
    let tag = format!("[{}]", diag.severity.label());
    let tag = match diag.severity {
        Severity::Warning => tag.yellow().bold(),
        Severity::Error => tag.red().bold(),
    };
    eprintln!("{} {}", tag, diag.message);
}

/// Report a command failure; fatal request errors get an explicit stop notice.
pub fn report_failure(error: &(dyn std::error::Error + 'static)) {
    print_diagnostic(&Diagnostic::error(error.to_string()));
    if error
        .downcast_ref::<AdequaError>()
        .is_some_and(AdequaError::is_fatal)
    {
        eprintln!("{}", "Unrecoverable analysis params - stopping".red().bold());
    }
}
