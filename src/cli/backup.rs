//! Backup CLI commands
//!
//! Implements CLI commands for backup management.

use clap::Subcommand;

use crate::error::ExpenseResult;

use super::Session;

/// Backup subcommands
#[derive(Subcommand, Debug)]
pub enum BackupCommands {
    /// Copy expenses.csv to a timestamped backup
    Create,

    /// List all available backups
    List,
}

/// Handle a backup command
pub fn handle_backup_command(session: &Session, cmd: BackupCommands) -> ExpenseResult<()> {
    match cmd {
        BackupCommands::Create => match session.store.backup()? {
            Some(path) => println!("Data successfully backed up to {}", path.display()),
            None => println!("No data file to backup."),
        },

        BackupCommands::List => {
            let backups = session.store.list_backups()?;

            if backups.is_empty() {
                println!("No backups found.");
                println!("Create one with: expenses backup create");
                return Ok(());
            }

            println!("Available Backups");
            println!("=================");
            for (i, backup) in backups.iter().enumerate() {
                println!(
                    "  {}. {} ({}, {})",
                    i + 1,
                    backup.filename,
                    backup.created_at.format("%Y-%m-%d %H:%M:%S"),
                    format_size(backup.size_bytes),
                );
            }
            println!();
            println!("Total: {} backup(s)", backups.len());
        }
    }

    Ok(())
}

/// Format a byte count for display
fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
