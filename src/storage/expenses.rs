//! Expense store for CSV storage
//!
//! Loads the full expense list from `expenses.csv` into memory and writes it
//! back out wholesale. Loading is tolerant: a malformed row is skipped with a
//! warning and never aborts the load.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use csv::{ErrorKind, ReaderBuilder, StringRecord};
use tracing::{debug, error, info, warn};

use crate::backup::{BackupInfo, BackupManager};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, HEADER};

use super::file_io::write_csv_atomic;

/// A row that was skipped while loading
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRow {
    /// Line number in the file (1-based, header is line 1)
    pub line: u64,
    /// Raw field values of the row, if they could be read
    pub fields: Vec<String>,
    /// Why the row was skipped
    pub reason: String,
}

/// Outcome of a tolerant load
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    /// Expenses that were read successfully, in file order
    pub expenses: Vec<Expense>,
    /// Rows that were skipped
    pub skipped: Vec<SkippedRow>,
}

/// Store for expense persistence
pub struct ExpenseStore {
    path: PathBuf,
}

impl ExpenseStore {
    /// Create a store backed by the CSV file at `path`
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the backing file with only a header row if it does not exist
    ///
    /// Returns `true` if the file was created.
    pub fn ensure_backing(&self) -> ExpenseResult<bool> {
        if self.path.exists() {
            return Ok(false);
        }

        write_csv_atomic(&self.path, HEADER, Vec::<[String; 4]>::new()).map_err(|e| {
            error!("Could not create data file {}: {}", self.path.display(), e);
            e
        })?;

        debug!("Created data file {}", self.path.display());
        Ok(true)
    }

    /// Load all expenses, skipping malformed rows
    pub fn load(&self) -> Vec<Expense> {
        self.load_detailed().expenses
    }

    /// Load all expenses and report which rows were skipped
    ///
    /// Never fails: a missing or unreadable file yields an empty list.
    pub fn load_detailed(&self) -> LoadReport {
        // A failure here is already logged; the open below reports the outcome
        let _ = self.ensure_backing();

        let mut report = LoadReport::default();

        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) => {
                info!(
                    "Data file not found or could not be read ({}). Starting with an empty list.",
                    e
                );
                return report;
            }
        };

        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(BufReader::new(file));

        let mut records = reader.records();

        // Header row; an empty file has none and that is not an error
        match records.next() {
            None => return report,
            Some(Ok(_)) => {}
            Some(Err(e)) => warn!("Could not read header row: {}", e),
        }

        for result in records {
            match result {
                Ok(record) => match parse_record(&record) {
                    Ok(expense) => report.expenses.push(expense),
                    Err(reason) => {
                        let skipped = SkippedRow {
                            line: line_of(&record),
                            fields: record.iter().map(str::to_string).collect(),
                            reason,
                        };
                        warn!(
                            "Skipping malformed row {} in CSV: {:?}. Error: {}",
                            skipped.line, skipped.fields, skipped.reason
                        );
                        report.skipped.push(skipped);
                    }
                },
                Err(e) => {
                    if matches!(e.kind(), ErrorKind::Io(_)) {
                        info!("Data file could not be read further: {}", e);
                        break;
                    }

                    let line = e.position().map(|p| p.line()).unwrap_or_default();
                    warn!("Skipping unreadable row {} in CSV: {}", line, e);
                    report.skipped.push(SkippedRow {
                        line,
                        fields: Vec::new(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        debug!(
            "Loaded {} expenses from {} ({} skipped)",
            report.expenses.len(),
            self.path.display(),
            report.skipped.len()
        );
        report
    }

    /// Overwrite the backing file with `expenses`, in order
    ///
    /// The write goes through a temp file, so a failure leaves the previous
    /// file intact.
    pub fn save(&self, expenses: &[Expense]) -> ExpenseResult<()> {
        write_csv_atomic(&self.path, HEADER, expenses.iter().map(Expense::to_row)).map_err(
            |e| {
                error!("Could not save data to file: {}", e);
                e
            },
        )?;

        debug!("Saved {} expenses to {}", expenses.len(), self.path.display());
        Ok(())
    }

    /// Snapshot the backing file to `expenses_backup_<timestamp>.csv`
    ///
    /// Returns `Ok(None)` if there is no backing file yet.
    pub fn backup(&self) -> ExpenseResult<Option<PathBuf>> {
        self.backups().create_backup()
    }

    /// Backup manager for the backing file
    pub fn backups(&self) -> BackupManager {
        BackupManager::new(self.path.clone())
    }

    /// Existing backups of the backing file, newest first
    pub fn list_backups(&self) -> ExpenseResult<Vec<BackupInfo>> {
        self.backups().list_backups()
    }
}

fn parse_record(record: &StringRecord) -> Result<Expense, String> {
    if record.len() != HEADER.len() {
        return Err(format!(
            "expected {} fields, found {}",
            HEADER.len(),
            record.len()
        ));
    }

    Expense::from_row(record).map_err(|e: ExpenseError| e.to_string())
}

fn line_of(record: &StringRecord) -> u64 {
    record.position().map(|p| p.line()).unwrap_or_default()
}
