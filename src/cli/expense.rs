//! Expense CLI commands
//!
//! Implements the add, list, search, and summary commands.

use chrono::Local;

use crate::display::{format_category_summary, format_expense_list, format_search_results};
use crate::error::ExpenseResult;
use crate::reports::summarize;
use crate::services::{CreateExpenseInput, ExpenseService};
use crate::validation::DATE_FORMAT;

use super::Session;

/// Handle `add`: validate, append, and save
pub fn handle_add_command(
    session: &mut Session,
    amount: String,
    category: String,
    date: Option<String>,
    description: Option<String>,
) -> ExpenseResult<()> {
    let date = date.unwrap_or_else(|| Local::now().date_naive().format(DATE_FORMAT).to_string());
    let symbol = session.settings.currency_symbol.clone();

    let added = {
        let mut service = ExpenseService::new(&mut session.expenses);
        service
            .add(CreateExpenseInput {
                amount,
                category,
                date,
                description,
            })?
            .display_with_symbol(&symbol)
    };

    session.save()?;

    println!("Expense added successfully!");
    println!("  {}", added);
    Ok(())
}

/// Handle `list`: print every expense
pub fn handle_list_command(session: &Session) -> ExpenseResult<()> {
    println!("{}", format_expense_list(&session.expenses, session.symbol()).trim_end());
    Ok(())
}

/// Handle `search`: print expenses matching a term
pub fn handle_search_command(session: &Session, term: &str) -> ExpenseResult<()> {
    let results = crate::services::search(&session.expenses, term)?;
    let term = term.trim().to_lowercase();
    println!(
        "{}",
        format_search_results(&results, &term, session.symbol()).trim_end()
    );
    Ok(())
}

/// Handle `summary`: print category totals and percentages
pub fn handle_summary_command(session: &Session) -> ExpenseResult<()> {
    let summary = summarize(&session.expenses);
    println!("{}", format_category_summary(&summary, session.symbol()).trim_end());
    Ok(())
}
