//! Expense model
//!
//! A single dated, categorized expense, and its conversion to and from the
//! flat four-column row stored in `expenses.csv`.

use csv::StringRecord;
use std::fmt;

use crate::display::format_money;
use crate::error::{ExpenseError, ExpenseResult};

/// Column names of the persisted record file, in row order
pub const HEADER: [&str; 4] = ["Date", "Category", "Amount", "Description"];

/// Currency symbol used by the plain `Display` impl
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

/// A single expense entry
///
/// No invariants are checked here; amounts, categories and dates are validated
/// by [`crate::validation`] when an expense is entered.
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    /// Expense date as entered (`YYYY-MM-DD`)
    pub date: String,

    /// Category name
    pub category: String,

    /// Amount spent
    pub amount: f64,

    /// Free-text description
    pub description: String,
}

impl Expense {
    /// Create a new expense
    pub fn new(
        amount: f64,
        category: impl Into<String>,
        date: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            category: category.into(),
            amount,
            description: description.into(),
        }
    }

    /// Create an expense from a textual amount
    ///
    /// Fails with [`ExpenseError::Parse`] if the amount is not numeric.
    pub fn from_raw(
        amount: &str,
        category: impl Into<String>,
        date: impl Into<String>,
        description: impl Into<String>,
    ) -> ExpenseResult<Self> {
        let amount = parse_amount(amount)?;
        Ok(Self::new(amount, category, date, description))
    }

    /// Convert to the persisted row shape `[date, category, amount, description]`
    pub fn to_row(&self) -> [String; 4] {
        [
            self.date.clone(),
            self.category.clone(),
            self.amount.to_string(),
            self.description.clone(),
        ]
    }

    /// Build an expense from a persisted row
    ///
    /// Callers are expected to have checked that the row has exactly four fields.
    pub fn from_row(row: &StringRecord) -> ExpenseResult<Self> {
        let field = |idx: usize| {
            row.get(idx).ok_or_else(|| {
                ExpenseError::Parse(format!("Missing {} column", HEADER[idx]))
            })
        };

        Self::from_raw(field(2)?, field(1)?, field(0)?, field(3)?)
    }

    /// Format for display using the given currency symbol
    pub fn display_with_symbol(&self, symbol: &str) -> String {
        format!(
            "{} | {:<15}: {} - {}",
            self.date,
            self.category,
            format_money(self.amount, symbol),
            self.description
        )
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_with_symbol(DEFAULT_CURRENCY_SYMBOL))
    }
}

fn parse_amount(raw: &str) -> ExpenseResult<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|e| ExpenseError::Parse(format!("Invalid amount '{}': {}", raw, e)))
}
