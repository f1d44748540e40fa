//! Backup CLI commands
//!
//! Implements CLI commands for backup management.

use chrono::{DateTime, Local};
use clap::Subcommand;

use crate::backup::BackupManager;
use crate::error::LivrariaResult;

/// Backup subcommands
#[derive(Subcommand)]
pub enum BackupCommands {
    /// Create a new snapshot of the database
    Create,

    /// List all snapshots, newest first
    List,

    /// Delete snapshots beyond the retention policy
    Prune,
}

/// Handle a backup command
pub fn handle_backup_command(manager: &BackupManager, cmd: BackupCommands) -> LivrariaResult<()> {
    match cmd {
        BackupCommands::Create => {
            let (backup_path, report) = manager.create_backup_with_retention()?;
            println!("Backup created: {}", backup_path.display());
            if !report.deleted.is_empty() {
                println!("Pruned {} old snapshot(s).", report.deleted.len());
            }
            for (path, reason) in &report.failed {
                eprintln!("warning: could not delete {}: {}", path.display(), reason);
            }
        }

        BackupCommands::List => {
            let backups = manager.list_backups()?;

            if backups.is_empty() {
                println!("No backups found.");
                println!("Create one with: livraria backup create");
                return Ok(());
            }

            for (i, backup) in backups.iter().enumerate() {
                let created: DateTime<Local> = backup.modified.into();
                println!(
                    "  {}. {} ({}, {})",
                    i + 1,
                    backup.filename,
                    created.format("%Y-%m-%d %H:%M:%S"),
                    format_size(backup.size_bytes),
                );
            }

            println!();
            println!("Total: {} backup(s)", backups.len());
        }

        BackupCommands::Prune => {
            let report = manager.prune()?;
            if report.deleted.is_empty() && report.failed.is_empty() {
                println!("Nothing to prune.");
            }
            for path in &report.deleted {
                println!("Deleted {}", path.display());
            }
            for (path, reason) in &report.failed {
                eprintln!("warning: could not delete {}: {}", path.display(), reason);
            }
        }
    }

    Ok(())
}

/// Human-readable byte count
fn format_size(bytes: u64) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    } else if bytes >= 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{} B", bytes)
    }
}
