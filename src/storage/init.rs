//! Storage initialization
//!
//! Handles first-run setup: directories, an empty record file, and settings.

use crate::config::paths::ExpensePaths;
use crate::config::settings::Settings;
use crate::error::ExpenseError;

use super::expenses::ExpenseStore;

/// Initialize storage for a fresh installation
///
/// Creates the data and reports directories and a header-only `expenses.csv`.
/// Settings are written only if no settings file exists yet.
pub fn initialize_storage(paths: &ExpensePaths) -> Result<(), ExpenseError> {
    paths.ensure_directories()?;

    ExpenseStore::new(paths.expenses_file()).ensure_backing()?;

    if !paths.is_initialized() {
        Settings::default().save(paths)?;
    }

    Ok(())
}
