//! Path management for the expense tracker
//!
//! Provides XDG-compliant path resolution for the record file, backups,
//! reports, and settings.
//!
//! ## Path Resolution Order
//!
//! 1. `EXPENSE_TRACKER_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_DATA_HOME/expense-tracker` or `~/.local/share/expense-tracker`
//! 3. Windows: `%APPDATA%\expense-tracker`

use std::path::{Path, PathBuf};

use crate::error::ExpenseError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "EXPENSE_TRACKER_DATA_DIR";

/// Timestamp format embedded in backup and report file names
pub const FILE_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Manages all paths used by the expense tracker
#[derive(Debug, Clone)]
pub struct ExpensePaths {
    /// Base directory for all expense tracker data
    base_dir: PathBuf,
}

impl ExpensePaths {
    /// Create a new ExpensePaths instance
    ///
    /// Path resolution:
    /// 1. `EXPENSE_TRACKER_DATA_DIR` env var (explicit override)
    /// 2. Unix: `$XDG_DATA_HOME/expense-tracker` or `~/.local/share/expense-tracker`
    /// 3. Windows: `%APPDATA%\expense-tracker`
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, ExpenseError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create ExpensePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (`<base>/data/`)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the reports directory (`<base>/reports/`)
    pub fn reports_dir(&self) -> PathBuf {
        self.base_dir.join("reports")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to expenses.csv
    pub fn expenses_file(&self) -> PathBuf {
        self.data_dir().join("expenses.csv")
    }

    /// Ensure all required directories exist
    ///
    /// Creates:
    /// - Base directory
    /// - Data directory (`<base>/data/`)
    /// - Reports directory (`<base>/reports/`)
    pub fn ensure_directories(&self) -> Result<(), ExpenseError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ExpenseError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| ExpenseError::Io(format!("Failed to create data directory: {}", e)))?;

        std::fs::create_dir_all(self.reports_dir()).map_err(|e| {
            ExpenseError::Io(format!("Failed to create reports directory: {}", e))
        })?;

        Ok(())
    }

    /// Check if the tracker has been initialized (settings file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Return `path` if it is free, otherwise the first free `<stem>_<n>.<ext>`
///
/// File names only carry second resolution, so two backups or reports in the
/// same second would otherwise overwrite each other.
pub fn unique_path(path: PathBuf) -> PathBuf {
    if !path.exists() {
        return path;
    }

    let parent = path.parent().map(Path::to_path_buf).unwrap_or_default();
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let ext = path
        .extension()
        .map(|s| format!(".{}", s.to_string_lossy()))
        .unwrap_or_default();

    let mut counter = 1;
    loop {
        let candidate = parent.join(format!("{}_{}{}", stem, counter, ext));
        if !candidate.exists() {
            return candidate;
        }
        counter += 1;
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, ExpenseError> {
    // Unix (Linux/macOS): Use XDG_DATA_HOME if set, otherwise ~/.local/share
    let data_base = match std::env::var("XDG_DATA_HOME") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => {
            let home = std::env::var("HOME").map_err(|_| {
                ExpenseError::Config("HOME environment variable not set".into())
            })?;
            PathBuf::from(home).join(".local").join("share")
        }
    };
    Ok(data_base.join("expense-tracker"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, ExpenseError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| ExpenseError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("expense-tracker"))
}
