//! Expense Tracker - personal expense tracking from the terminal
//!
//! This library provides the core functionality for the `expenses` CLI. It
//! records expenses in a local CSV file, summarizes spending by category, and
//! writes plain-text finance reports.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: The expense record and the category set
//! - `validation`: Checks for user-entered amounts, categories, and dates
//! - `storage`: CSV file storage layer
//! - `backup`: Timestamped copies of the expenses file
//! - `services`: Adding and searching expenses
//! - `reports`: Category aggregation and the text report
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::config::ExpensePaths;
//! use expense_tracker::reports::summarize;
//! use expense_tracker::storage::ExpenseStore;
//!
//! let paths = ExpensePaths::new()?;
//! let expenses = ExpenseStore::new(paths.expenses_file()).load();
//! let summary = summarize(&expenses);
//! ```

pub mod backup;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod validation;

pub use error::{ExpenseError, ExpenseResult};
