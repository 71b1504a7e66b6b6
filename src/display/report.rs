//! Summary formatting utilities for terminal output
//!
//! Provides the money formatting and the category table shared by the
//! summary view and the text report.

use crate::reports::ExpenseSummary;

/// Format an amount with a currency symbol, thousands separators and 2 decimals
pub fn format_money(amount: f64, symbol: &str) -> String {
    format!("{}{}", symbol, format_amount(amount))
}

/// Format an amount with thousands separators and 2 decimals
pub fn format_amount(amount: f64) -> String {
    format_num::format_num!(",.2", amount)
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "-".repeat(width)
}

/// Format the category table header, separator, and one row per category
///
/// Rows are `Category | Total Amount | Percentage`, in summary order.
pub fn format_category_table(summary: &ExpenseSummary, symbol: &str, rule_width: usize) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{:<20} | {:<20} | {:<10}\n",
        "Category",
        format!("Total Amount ({})", symbol),
        "Percentage (%)"
    ));
    output.push_str(&separator(rule_width));
    output.push('\n');

    for row in &summary.categories {
        output.push_str(&format!(
            "{:<20} | {:>20} | {:>10.2}\n",
            row.category,
            format_amount(row.total),
            row.percentage
        ));
    }

    output
}

/// Format the category-wise summary view
pub fn format_category_summary(summary: &ExpenseSummary, symbol: &str) -> String {
    if summary.is_empty() {
        return "No expenses recorded yet.".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "Total Expenses: {}\n\n",
        format_money(summary.grand_total, symbol)
    ));
    output.push_str(&format_category_table(summary, symbol, 55));
    output
}
