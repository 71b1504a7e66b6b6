//! Storage layer for the expense tracker
//!
//! Provides CSV file storage with atomic writes, tolerant loading, and
//! automatic directory creation.

pub mod expenses;
pub mod file_io;
pub mod init;

pub use expenses::{ExpenseStore, LoadReport, SkippedRow};
pub use file_io::write_csv_atomic;
pub use init::initialize_storage;
