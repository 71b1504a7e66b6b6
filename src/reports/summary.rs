//! Category summary
//!
//! Aggregates an expense list into per-category totals, percentages of the
//! grand total, and the span of dates it covers.

use chrono::NaiveDate;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;
use crate::validation::DATE_FORMAT;

/// Spending total for one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    /// Category name
    pub category: String,
    /// Sum of amounts in this category
    pub total: f64,
    /// Share of the grand total, 0-100
    pub percentage: f64,
}

/// Category totals sorted by descending total, plus the grand total
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseSummary {
    /// Per-category totals, largest first
    pub categories: Vec<CategoryTotal>,
    /// Sum of all amounts
    pub grand_total: f64,
}

impl ExpenseSummary {
    /// Look up the total for a category
    pub fn get(&self, category: &str) -> Option<&CategoryTotal> {
        self.categories.iter().find(|c| c.category == category)
    }

    /// Check if there are no categories
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Sum amounts per category
///
/// Categories with equal totals keep the order in which they first appear.
pub fn summarize(expenses: &[Expense]) -> ExpenseSummary {
    let mut categories: Vec<CategoryTotal> = Vec::new();
    let mut grand_total = 0.0;

    for expense in expenses {
        grand_total += expense.amount;

        match categories.iter_mut().find(|c| c.category == expense.category) {
            Some(entry) => entry.total += expense.amount,
            None => categories.push(CategoryTotal {
                category: expense.category.clone(),
                total: expense.amount,
                percentage: 0.0,
            }),
        }
    }

    for entry in &mut categories {
        entry.percentage = percentage(entry.total, grand_total);
    }

    // Stable sort, so ties stay in encounter order
    categories.sort_by(|a, b| b.total.total_cmp(&a.total));

    ExpenseSummary {
        categories,
        grand_total,
    }
}

/// `total` as a percentage of `grand_total`, or 0 when the grand total is 0
pub fn percentage(total: f64, grand_total: f64) -> f64 {
    if grand_total == 0.0 {
        0.0
    } else {
        total / grand_total * 100.0
    }
}

/// Earliest and latest expense date
///
/// Every date must parse as `YYYY-MM-DD`; the first one that does not is
/// returned as [`ExpenseError::InvalidDate`]. Returns `None` for an empty list.
pub fn date_range(expenses: &[Expense]) -> ExpenseResult<Option<(NaiveDate, NaiveDate)>> {
    let mut range: Option<(NaiveDate, NaiveDate)> = None;

    for expense in expenses {
        let date = NaiveDate::parse_from_str(&expense.date, DATE_FORMAT)
            .map_err(|e| ExpenseError::invalid_date(&expense.date, e))?;

        range = Some(match range {
            None => (date, date),
            Some((start, end)) => (start.min(date), end.max(date)),
        });
    }

    Ok(range)
}
