//! Display formatting for terminal output
//!
//! Provides utilities for formatting expenses and summaries for terminal
//! display.

pub mod expense;
pub mod report;

pub use expense::{format_expense_list, format_search_results};
pub use report::{format_category_summary, format_category_table, format_money, separator};
