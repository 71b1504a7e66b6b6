//! Backup system for the expense tracker
//!
//! A backup is a byte-identical copy of `expenses.csv` taken at a point in
//! time, written next to it as `expenses_backup_<YYYYMMDD_HHMMSS>.csv`.
//!
//! Timestamps have one-second resolution. When a backup with the same name
//! already exists, a `_<n>` counter is appended instead of overwriting it.
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::backup::BackupManager;
//! use expense_tracker::config::ExpensePaths;
//!
//! let paths = ExpensePaths::new()?;
//! let manager = BackupManager::new(paths.expenses_file());
//!
//! if let Some(path) = manager.create_backup()? {
//!     println!("Backed up to {}", path.display());
//! }
//! ```

mod manager;

pub use manager::{BackupInfo, BackupManager};
