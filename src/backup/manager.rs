//! Backup manager for the expense tracker
//!
//! Takes byte-for-byte snapshots of the record file and lists the snapshots
//! that exist. Backups are named `<stem>_backup_<YYYYMMDD_HHMMSS>.<ext>` and
//! live next to the record file.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use tracing::{debug, error, info};

use crate::config::paths::{unique_path, FILE_TIMESTAMP_FORMAT};
use crate::error::{ExpenseError, ExpenseResult};

/// Metadata about a backup
#[derive(Debug, Clone)]
pub struct BackupInfo {
    /// Backup filename
    pub filename: String,
    /// Full path to backup
    pub path: PathBuf,
    /// When the backup was created (local time, from the filename)
    pub created_at: NaiveDateTime,
    /// Size in bytes
    pub size_bytes: u64,
}

/// Creates and lists backups of a single file
pub struct BackupManager {
    /// File being backed up
    source: PathBuf,
    /// Directory the backups are written to
    backup_dir: PathBuf,
}

impl BackupManager {
    /// Create a BackupManager that stores backups alongside `source`
    pub fn new(source: PathBuf) -> Self {
        let backup_dir = source
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        Self { source, backup_dir }
    }

    /// Copy the current contents of the source file to a timestamped backup
    ///
    /// Returns `Ok(None)` when there is no source file to back up.
    pub fn create_backup(&self) -> ExpenseResult<Option<PathBuf>> {
        if !self.source.exists() {
            info!("No data file to backup.");
            return Ok(None);
        }

        let now = Local::now().naive_local();
        let filename = format!(
            "{}{}.{}",
            self.prefix(),
            now.format(FILE_TIMESTAMP_FORMAT),
            self.extension()
        );
        let backup_path = unique_path(self.backup_dir.join(filename));

        fs::create_dir_all(&self.backup_dir).map_err(|e| {
            ExpenseError::Io(format!("Failed to create backup directory: {}", e))
        })?;

        if let Err(e) = fs::copy(&self.source, &backup_path) {
            error!("Backup failed: {}", e);
            return Err(ExpenseError::Io(format!("Failed to write backup file: {}", e)));
        }

        info!("Data successfully backed up to {}", backup_path.display());
        Ok(Some(backup_path))
    }

    /// List all available backups, newest first
    pub fn list_backups(&self) -> ExpenseResult<Vec<BackupInfo>> {
        if !self.backup_dir.exists() {
            return Ok(Vec::new());
        }

        let mut backups = Vec::new();

        for entry in fs::read_dir(&self.backup_dir).map_err(|e| {
            ExpenseError::Io(format!("Failed to read backup directory: {}", e))
        })? {
            let entry = entry.map_err(|e| {
                ExpenseError::Io(format!("Failed to read directory entry: {}", e))
            })?;

            if let Some(info) = self.parse_backup_info(&entry.path()) {
                backups.push(info);
            }
        }

        backups.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.filename.cmp(&a.filename))
        });
        debug!("Found {} backups in {}", backups.len(), self.backup_dir.display());

        Ok(backups)
    }

    /// Parse backup info from a file in the backup directory
    fn parse_backup_info(&self, path: &Path) -> Option<BackupInfo> {
        let filename = path.file_name()?.to_string_lossy().to_string();

        // <stem>_backup_YYYYMMDD_HHMMSS[_n].<ext>
        let rest = filename.strip_prefix(&self.prefix())?;
        let rest = rest.strip_suffix(&format!(".{}", self.extension()))?;
        let created_at = parse_backup_timestamp(rest)?;

        let metadata = fs::metadata(path).ok()?;

        Some(BackupInfo {
            filename,
            path: path.to_path_buf(),
            created_at,
            size_bytes: metadata.len(),
        })
    }

    fn prefix(&self) -> String {
        let stem = self
            .source
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        format!("{}_backup_", stem)
    }

    fn extension(&self) -> String {
        self.source
            .extension()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "bak".to_string())
    }
}

/// Parse the timestamp part of a backup filename
///
/// Accepts `YYYYMMDD_HHMMSS` optionally followed by a `_<n>` collision counter.
fn parse_backup_timestamp(s: &str) -> Option<NaiveDateTime> {
    let (stamp, counter) = match s.get(15..) {
        Some(counter) => (s.get(..15)?, counter),
        None => return None,
    };

    if !counter.is_empty() {
        let n = counter.strip_prefix('_')?;
        if n.is_empty() || !n.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
    }

    NaiveDateTime::parse_from_str(stamp, FILE_TIMESTAMP_FORMAT).ok()
}
