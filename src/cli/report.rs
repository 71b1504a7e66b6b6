//! CLI command for the finance report
//!
//! Generates the text report, writes it to the reports directory, and echoes
//! it to the terminal.

use crate::error::ExpenseResult;
use crate::reports::{generate_report, Currency};

use super::Session;

/// Handle `report`
///
/// An invalid expense date is returned as an error; a failed write is not.
pub fn handle_report_command(session: &Session, name: Option<String>) -> ExpenseResult<()> {
    let name = name.unwrap_or_else(|| session.settings.default_report_name.clone());

    let outcome = generate_report(
        &session.expenses,
        &name,
        &session.paths.reports_dir(),
        Currency::from(&session.settings),
    )?;

    let Some(outcome) = outcome else {
        println!("No expenses recorded to generate a report.");
        return Ok(());
    };

    match &outcome.path {
        Some(path) => println!("Report saved successfully to {}", path.display()),
        None => println!("Report could not be saved; showing it below."),
    }
    println!("{}", "-".repeat(50));
    print!("{}", outcome.report.format_text());
    println!("{}", "-".repeat(50));

    Ok(())
}
