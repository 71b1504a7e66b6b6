//! Reports module for the expense tracker
//!
//! Provides the category summary (totals, percentages, date range) and the
//! text finance report built on top of it.

pub mod expense_report;
pub mod summary;

pub use expense_report::{generate_report, slugify, Currency, ExpenseReport, ReportOutcome};
pub use summary::{date_range, percentage, summarize, CategoryTotal, ExpenseSummary};
