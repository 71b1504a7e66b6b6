//! Service layer for the expense tracker
//!
//! The service layer provides business logic on top of the in-memory expense
//! list, handling input validation and search.

pub mod expense;

pub use expense::{search, CreateExpenseInput, ExpenseService};
