//! File I/O utilities with atomic writes
//!
//! Provides safe CSV file operations that won't corrupt data on failure.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::error::ExpenseError;

/// Write a header and rows to a CSV file atomically (write to temp, then rename)
///
/// This ensures that the file is either completely written or not modified at all,
/// preventing corruption on crashes or power failures.
pub fn write_csv_atomic<P, H, R, I>(path: P, header: H, rows: R) -> Result<(), ExpenseError>
where
    P: AsRef<Path>,
    H: IntoIterator,
    H::Item: AsRef<[u8]>,
    R: IntoIterator<Item = I>,
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            ExpenseError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file must live in the same directory for the rename to be atomic
    let temp_path = path.with_extension("csv.tmp");

    let result = write_rows(&temp_path, header, rows).and_then(|()| {
        fs::rename(&temp_path, path)
            .map_err(|e| ExpenseError::Storage(format!("Failed to rename temp file: {}", e)))
    });

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }

    result
}

fn write_rows<H, R, I>(temp_path: &Path, header: H, rows: R) -> Result<(), ExpenseError>
where
    H: IntoIterator,
    H::Item: AsRef<[u8]>,
    R: IntoIterator<Item = I>,
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
{
    let file = File::create(temp_path)
        .map_err(|e| ExpenseError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = csv::Writer::from_writer(file);
    writer.write_record(header)?;

    for row in rows {
        writer.write_record(row)?;
    }

    let mut file = writer
        .into_inner()
        .map_err(|e| ExpenseError::Storage(format!("Failed to flush data: {}", e)))?;

    file.flush()
        .map_err(|e| ExpenseError::Storage(format!("Failed to flush data: {}", e)))?;

    // Sync to disk before rename
    file.sync_all()
        .map_err(|e| ExpenseError::Storage(format!("Failed to sync data: {}", e)))?;

    Ok(())
}
