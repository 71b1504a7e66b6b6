//! Expense service
//!
//! Business logic over the in-memory expense list: adding validated entries
//! and searching by category or description.

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;
use crate::validation::{valid_amount, valid_category, valid_date};

/// Input for creating a new expense, as entered by the user
#[derive(Debug, Clone, Default)]
pub struct CreateExpenseInput {
    pub amount: String,
    pub category: String,
    pub date: String,
    pub description: Option<String>,
}

/// Service for expense management
///
/// Borrows the session's expense list; persisting it is up to the caller.
pub struct ExpenseService<'a> {
    expenses: &'a mut Vec<Expense>,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(expenses: &'a mut Vec<Expense>) -> Self {
        Self { expenses }
    }

    /// Validate the input and append a new expense, returning it
    pub fn add(&mut self, input: CreateExpenseInput) -> ExpenseResult<Expense> {
        let amount = valid_amount(&input.amount)?;
        let category = valid_category(&input.category)?;
        let date = valid_date(&input.date)?;
        let description = input.description.unwrap_or_default().trim().to_string();

        let expense = Expense::new(amount, category.name(), date, description);
        self.expenses.push(expense.clone());
        Ok(expense)
    }
}

/// Case-insensitive substring search over category and description
pub fn search<'e>(expenses: &'e [Expense], term: &str) -> ExpenseResult<Vec<&'e Expense>> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return Err(ExpenseError::Validation(
            "Search term cannot be empty.".into(),
        ));
    }

    Ok(expenses
        .iter()
        .filter(|e| {
            e.category.to_lowercase().contains(&term)
                || e.description.to_lowercase().contains(&term)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(amount: &str, category: &str, date: &str) -> CreateExpenseInput {
        CreateExpenseInput {
            amount: amount.into(),
            category: category.into(),
            date: date.into(),
            description: Some("  Weekly shop ".into()),
        }
    }

    #[test]
    fn test_add_expense() {
        let mut expenses = Vec::new();
        let mut service = ExpenseService::new(&mut expenses);

        let added = service.add(input("12.5", "food", "2024-01-01")).unwrap();
        assert_eq!(added.category, "Food");
        assert_eq!(added.description, "Weekly shop");

        service.add(input("3", "Transport", "2024-01-02")).unwrap();
        assert_eq!(expenses.len(), 2);
        assert_eq!(expenses[0].description, "Weekly shop");
        assert_eq!(expenses[1].category, "Transport");
    }

    #[test]
    fn test_add_rejects_invalid_input() {
        let mut expenses = Vec::new();
        let mut service = ExpenseService::new(&mut expenses);

        assert!(service.add(input("-1", "Food", "2024-01-01")).is_err());
        assert!(service.add(input("1", "Rent", "2024-01-01")).is_err());
        assert!(service.add(input("1", "Food", "2024-13-01")).is_err());
        assert!(expenses.is_empty());
    }

    #[test]
    fn test_search() {
        let expenses = vec![
            Expense::new(10.0, "Food", "2024-01-01", "Pizza night"),
            Expense::new(20.0, "Entertainment", "2024-01-02", "Cinema"),
            Expense::new(30.0, "Other", "2024-01-03", "Gift for a foodie"),
        ];

        let results = search(&expenses, "FOOD").unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].description, "Pizza night");
        assert_eq!(results[1].description, "Gift for a foodie");

        assert!(search(&expenses, "rent").unwrap().is_empty());
        assert!(search(&expenses, "  ").unwrap_err().is_validation());
    }
}
