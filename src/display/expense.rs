//! Expense display formatting
//!
//! Formats expense lists and search results for terminal output.

use crate::models::Expense;

use super::report::separator;

/// Format all expenses as a numbered list
pub fn format_expense_list(expenses: &[Expense], symbol: &str) -> String {
    if expenses.is_empty() {
        return "No expenses recorded yet.".to_string();
    }

    let mut output = String::new();
    for (i, expense) in expenses.iter().enumerate() {
        output.push_str(&format!(
            "{:3}. {}\n",
            i + 1,
            expense.display_with_symbol(symbol)
        ));
    }
    output
}

/// Format the expenses matching a search term
pub fn format_search_results(results: &[&Expense], term: &str, symbol: &str) -> String {
    if results.is_empty() {
        return format!("No expenses found matching '{}'.", term);
    }

    let mut output = String::new();
    output.push_str(&format!(
        "Found {} expenses matching '{}':\n",
        results.len(),
        term
    ));
    output.push_str(&separator(45));
    output.push('\n');

    for expense in results {
        output.push_str(&expense.display_with_symbol(symbol));
        output.push('\n');
    }

    output.push_str(&separator(45));
    output.push('\n');
    output
}
