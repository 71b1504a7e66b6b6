//! Expense Report
//!
//! Generates the text finance report: analysis period, grand total, and the
//! category breakdown. Reports are written to
//! `reports/<slug>_<YYYYMMDD_HHMMSS>.txt` and never read back.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate, NaiveDateTime};
use tracing::{error, info};

use crate::config::paths::{unique_path, FILE_TIMESTAMP_FORMAT};
use crate::config::Settings;
use crate::display::report::{format_category_table, format_money, separator};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;

use super::summary::{date_range, summarize, ExpenseSummary};

/// Currency shown in the report body and footer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Currency {
    pub symbol: String,
    pub name: String,
}

impl Default for Currency {
    fn default() -> Self {
        Self::from(&Settings::default())
    }
}

impl From<&Settings> for Currency {
    fn from(settings: &Settings) -> Self {
        Self {
            symbol: settings.currency_symbol.clone(),
            name: settings.currency_name.clone(),
        }
    }
}

/// A generated finance report
#[derive(Debug, Clone)]
pub struct ExpenseReport {
    /// Report title as given by the user
    pub name: String,
    /// Earliest expense date
    pub start_date: NaiveDate,
    /// Latest expense date
    pub end_date: NaiveDate,
    /// Category totals and grand total
    pub summary: ExpenseSummary,
    /// When the report was generated (local time)
    pub generated_at: NaiveDateTime,
    /// Currency used for formatting
    pub currency: Currency,
}

/// Result of generating and saving a report
#[derive(Debug, Clone)]
pub struct ReportOutcome {
    /// The generated report
    pub report: ExpenseReport,
    /// Where it was written, or `None` if the write failed
    pub path: Option<PathBuf>,
}

impl ExpenseReport {
    /// Generate a report over `expenses`
    ///
    /// Returns `Ok(None)` for an empty list. Fails if any expense date is not
    /// a valid `YYYY-MM-DD` date, since the analysis period cannot be computed.
    pub fn generate(
        expenses: &[Expense],
        name: &str,
        currency: Currency,
    ) -> ExpenseResult<Option<Self>> {
        Self::generate_at(expenses, name, currency, Local::now().naive_local())
    }

    /// Generate a report with an explicit generation time
    pub fn generate_at(
        expenses: &[Expense],
        name: &str,
        currency: Currency,
        generated_at: NaiveDateTime,
    ) -> ExpenseResult<Option<Self>> {
        let summary = summarize(expenses);
        let Some((start_date, end_date)) = date_range(expenses)? else {
            return Ok(None);
        };

        Ok(Some(Self {
            name: name.to_string(),
            start_date,
            end_date,
            summary,
            generated_at,
            currency,
        }))
    }

    /// Grand total over all expenses
    pub fn grand_total(&self) -> f64 {
        self.summary.grand_total
    }

    /// Format the report as text
    pub fn format_text(&self) -> String {
        let symbol = &self.currency.symbol;
        let mut output = String::new();

        // Header
        output.push_str(&"=".repeat(50));
        output.push('\n');
        output.push_str(&format!(
            "           FINANCE REPORT: {}\n",
            self.name.to_uppercase()
        ));
        output.push_str(&"=".repeat(50));
        output.push('\n');
        output.push_str(&format!(
            "Analysis Period: {} to {}\n\n",
            self.start_date, self.end_date
        ));
        output.push_str(&format!(
            "TOTAL EXPENSES: {}\n",
            format_money(self.summary.grand_total, symbol)
        ));
        output.push_str(&separator(50));
        output.push('\n');
        output.push_str("CATEGORY-WISE BREAKDOWN:\n\n");

        // Category table
        output.push_str(&format_category_table(&self.summary, symbol, 60));

        // Footer
        output.push('\n');
        output.push_str(&separator(50));
        output.push('\n');
        output.push_str(&format!(
            "Note: All figures are in {} ({}).\n",
            self.currency.name, symbol
        ));
        output.push_str(&format!(
            "Report Generated On: {}\n",
            self.generated_at.format("%Y-%m-%d %H:%M:%S")
        ));

        output
    }

    /// File name for this report: `<slug>_<YYYYMMDD_HHMMSS>.txt`
    pub fn file_name(&self) -> String {
        format!(
            "{}_{}.txt",
            slugify(&self.name),
            self.generated_at.format(FILE_TIMESTAMP_FORMAT)
        )
    }

    /// Write the report into `reports_dir`, returning the file path
    pub fn save(&self, reports_dir: &Path) -> ExpenseResult<PathBuf> {
        fs::create_dir_all(reports_dir).map_err(|e| {
            ExpenseError::Report(format!(
                "Failed to create directory {}: {}",
                reports_dir.display(),
                e
            ))
        })?;

        let path = unique_path(reports_dir.join(self.file_name()));
        fs::write(&path, self.format_text()).map_err(|e| {
            ExpenseError::Report(format!("Failed to write {}: {}", path.display(), e))
        })?;

        Ok(path)
    }
}

/// Generate a report and write it into `reports_dir`
///
/// An empty expense list yields `Ok(None)`. A failed write is logged and
/// leaves `path` empty; the computed report is still returned. Only an invalid
/// expense date is an error.
pub fn generate_report(
    expenses: &[Expense],
    name: &str,
    reports_dir: &Path,
    currency: Currency,
) -> ExpenseResult<Option<ReportOutcome>> {
    if expenses.is_empty() {
        info!("No expenses recorded to generate a report.");
        return Ok(None);
    }

    let Some(report) = ExpenseReport::generate(expenses, name, currency)? else {
        return Ok(None);
    };

    let path = match report.save(reports_dir) {
        Ok(path) => {
            info!("Report saved successfully to {}", path.display());
            Some(path)
        }
        Err(e) => {
            error!("Could not save report file: {}", e);
            None
        }
    };

    Ok(Some(ReportOutcome { report, path }))
}

/// Lowercase the name and replace spaces with underscores
pub fn slugify(name: &str) -> String {
    name.to_lowercase().replace(' ', "_")
}
