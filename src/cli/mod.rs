//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the clap
//! argument parsing with the store, services, and reports.

pub mod backup;
pub mod expense;
pub mod report;

pub use backup::{handle_backup_command, BackupCommands};
pub use expense::{handle_add_command, handle_list_command, handle_search_command, handle_summary_command};
pub use report::handle_report_command;

use tracing::{debug, warn};

use crate::config::{ExpensePaths, Settings};
use crate::error::ExpenseResult;
use crate::models::Expense;
use crate::storage::ExpenseStore;

/// State for one CLI invocation
///
/// Owns the in-memory expense list: it is loaded once when the session opens
/// and written back only through [`Session::save`].
pub struct Session {
    pub paths: ExpensePaths,
    pub settings: Settings,
    pub store: ExpenseStore,
    pub expenses: Vec<Expense>,
}

impl Session {
    /// Load settings and all expenses
    ///
    /// Unreadable settings fall back to the defaults.
    pub fn open(paths: ExpensePaths) -> ExpenseResult<Self> {
        let settings = match Settings::load_or_create(&paths) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("{}. Using default settings.", e);
                Settings::default()
            }
        };
        let store = ExpenseStore::new(paths.expenses_file());
        let expenses = store.load();
        debug!("Session opened with {} expenses", expenses.len());

        Ok(Self {
            paths,
            settings,
            store,
            expenses,
        })
    }

    /// Currency symbol from settings
    pub fn symbol(&self) -> &str {
        &self.settings.currency_symbol
    }

    /// Write the expense list back to disk
    pub fn save(&self) -> ExpenseResult<()> {
        self.store.save(&self.expenses)
    }
}
