//! Input validation for new expenses
//!
//! Checks the raw strings supplied by the user before an [`Expense`] is
//! created. Stored records are not passed through here again on load.
//!
//! [`Expense`]: crate::models::Expense

use chrono::NaiveDate;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Category;

/// Date format for expense dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a non-negative amount
pub fn valid_amount(input: &str) -> ExpenseResult<f64> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ExpenseError::Validation("Amount cannot be empty.".into()));
    }

    let value: f64 = input.parse().map_err(|_| {
        ExpenseError::Validation(format!(
            "Invalid amount '{}'. Please enter a numerical amount.",
            input
        ))
    })?;

    if !value.is_finite() {
        return Err(ExpenseError::Validation(format!(
            "Invalid amount '{}'. Please enter a numerical amount.",
            input
        )));
    }

    if value < 0.0 {
        return Err(ExpenseError::Validation(
            "Amount must be a non-negative number.".into(),
        ));
    }

    Ok(value)
}

/// Parse a category name from the fixed set (case-insensitive)
pub fn valid_category(input: &str) -> ExpenseResult<Category> {
    input
        .parse::<Category>()
        .map_err(|e| ExpenseError::Validation(e.to_string()))
}

/// Check that `input` is a `YYYY-MM-DD` calendar date and return it trimmed
pub fn valid_date(input: &str) -> ExpenseResult<String> {
    let input = input.trim();
    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|_| {
        ExpenseError::Validation(format!(
            "Invalid date '{}'. Please use YYYY-MM-DD.",
            input
        ))
    })?;
    Ok(input.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_amount() {
        assert_eq!(valid_amount("42").unwrap(), 42.0);
        assert_eq!(valid_amount(" 0.5 ").unwrap(), 0.5);
        assert_eq!(valid_amount("0").unwrap(), 0.0);
    }

    #[test]
    fn test_invalid_amounts() {
        assert!(valid_amount("").unwrap_err().is_validation());
        assert!(valid_amount("   ").unwrap_err().is_validation());
        assert!(valid_amount("ten").unwrap_err().is_validation());
        assert!(valid_amount("NaN").unwrap_err().is_validation());
        assert!(valid_amount("inf").unwrap_err().is_validation());

        let err = valid_amount("-1").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation error: Amount must be a non-negative number."
        );
    }

    #[test]
    fn test_valid_category() {
        assert_eq!(valid_category("shopping").unwrap(), Category::Shopping);
        assert!(valid_category("Rent").unwrap_err().is_validation());
    }

    #[test]
    fn test_valid_date() {
        assert_eq!(valid_date(" 2024-02-29 ").unwrap(), "2024-02-29");
        assert!(valid_date("2023-02-29").is_err());
        assert!(valid_date("01/02/2024").is_err());
        assert!(valid_date("not-a-date").is_err());
    }
}
