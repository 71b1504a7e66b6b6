//! Custom error types for the expense tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// CSV reading/writing errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// A value could not be converted (e.g. a non-numeric amount)
    #[error("Parse error: {0}")]
    Parse(String),

    /// A record's date is not a valid calendar date
    #[error("Invalid date '{date}': {reason}")]
    InvalidDate { date: String, reason: String },

    /// Validation errors for user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Report generation errors
    #[error("Report error: {0}")]
    Report(String),
}

impl ExpenseError {
    /// Create an invalid date error
    pub fn invalid_date(date: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidDate {
            date: date.into(),
            reason: reason.to_string(),
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is an invalid date error
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, Self::InvalidDate { .. })
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for ExpenseError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

impl From<std::num::ParseFloatError> for ExpenseError {
    fn from(err: std::num::ParseFloatError) -> Self {
        Self::Parse(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ExpenseError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_invalid_date_error() {
        let err = ExpenseError::invalid_date("not-a-date", "input contains invalid characters");
        assert_eq!(
            err.to_string(),
            "Invalid date 'not-a-date': input contains invalid characters"
        );
        assert!(err.is_invalid_date());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ExpenseError = io_err.into();
        assert!(matches!(err, ExpenseError::Io(_)));
    }

    #[test]
    fn test_from_csv_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "disk gone");
        let err: ExpenseError = csv::Error::from(io_err).into();
        assert!(matches!(err, ExpenseError::Csv(_)));
    }

    #[test]
    fn test_from_parse_float_error() {
        let parse_err = "abc".parse::<f64>().unwrap_err();
        let err: ExpenseError = parse_err.into();
        assert!(matches!(err, ExpenseError::Parse(_)));
    }
}
