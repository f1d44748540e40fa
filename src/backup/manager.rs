//! Backup manager for livraria-cli
//!
//! Creates timestamped snapshots of the SQLite database file and enforces a
//! keep-N retention policy. Every mutating store operation triggers
//! [`BackupManager::create_backup_with_retention`] synchronously after its
//! write commits.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::Local;

use crate::config::paths::LivrariaPaths;
use crate::config::settings::BackupRetention;
use crate::error::{LivrariaError, LivrariaResult};

/// Prefix shared by every snapshot filename
const BACKUP_PREFIX: &str = "backup_livraria_";

/// Timestamp layout embedded in snapshot filenames. Second granularity:
/// two backups within the same second collide on the same name and the
/// later one overwrites the earlier. That is the documented contract.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Metadata about a snapshot on disk
#[derive(Debug, Clone)]
pub struct BackupInfo {
    /// Snapshot filename
    pub filename: String,
    /// Full path to the snapshot
    pub path: PathBuf,
    /// File modification time, which orders the retention set
    pub modified: SystemTime,
    /// Size in bytes
    pub size_bytes: u64,
}

/// Outcome of a prune pass
///
/// Failing to delete a stale snapshot never aborts the backup that
/// triggered the prune; failures are collected here for the caller to
/// report.
#[derive(Debug, Default)]
pub struct PruneReport {
    /// Snapshots successfully deleted
    pub deleted: Vec<PathBuf>,
    /// Snapshots that could not be deleted, with the error text
    pub failed: Vec<(PathBuf, String)>,
}

/// Manages snapshot creation and retention
pub struct BackupManager {
    /// Path to the live database file
    db_path: PathBuf,
    /// Directory holding the snapshots
    backup_dir: PathBuf,
    /// Retention policy
    retention: BackupRetention,
}

impl BackupManager {
    /// Create a new BackupManager
    pub fn new(paths: &LivrariaPaths, retention: BackupRetention) -> Self {
        Self {
            db_path: paths.db_file(),
            backup_dir: paths.backup_dir(),
            retention,
        }
    }

    /// Copy the current database file into the backup directory, named with
    /// the current wall-clock time at second precision.
    ///
    /// Returns the path to the created snapshot. Fails with
    /// [`LivrariaError::Backup`] if the database file does not exist - a
    /// snapshot of a missing store is meaningless.
    pub fn create_backup(&self) -> LivrariaResult<PathBuf> {
        fs::create_dir_all(&self.backup_dir).map_err(|e| {
            LivrariaError::Backup(format!("Failed to create backup directory: {}", e))
        })?;

        if !self.db_path.exists() {
            return Err(LivrariaError::Backup(format!(
                "Database file not found: {}",
                self.db_path.display()
            )));
        }

        let stamp = Local::now().format(TIMESTAMP_FORMAT);
        let filename = format!("{}{}.db", BACKUP_PREFIX, stamp);
        let backup_path = self.backup_dir.join(&filename);

        fs::copy(&self.db_path, &backup_path)
            .map_err(|e| LivrariaError::Backup(format!("Failed to copy database: {}", e)))?;

        Ok(backup_path)
    }

    /// List all snapshots, newest first
    ///
    /// Ordering is by file modification time descending; entries with equal
    /// mtimes keep their directory-listing order (the sort is stable).
    pub fn list_backups(&self) -> LivrariaResult<Vec<BackupInfo>> {
        if !self.backup_dir.exists() {
            return Ok(Vec::new());
        }

        let mut backups = Vec::new();

        for entry in fs::read_dir(&self.backup_dir)
            .map_err(|e| LivrariaError::Backup(format!("Failed to read backup directory: {}", e)))?
        {
            let entry = entry.map_err(|e| {
                LivrariaError::Backup(format!("Failed to read directory entry: {}", e))
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "db") {
                if let Some(info) = snapshot_info(&path) {
                    backups.push(info);
                }
            }
        }

        backups.sort_by(|a, b| b.modified.cmp(&a.modified));

        Ok(backups)
    }

    /// Delete every snapshot beyond the retention count
    ///
    /// Deletion failures are tolerated: the offending snapshot is skipped
    /// and recorded in the report instead of aborting the prune.
    pub fn prune(&self) -> LivrariaResult<PruneReport> {
        let backups = self.list_backups()?;
        let mut report = PruneReport::default();

        for backup in backups
            .into_iter()
            .skip(self.retention.keep_count as usize)
        {
            match fs::remove_file(&backup.path) {
                Ok(()) => report.deleted.push(backup.path),
                Err(e) => report.failed.push((backup.path, e.to_string())),
            }
        }

        Ok(report)
    }

    /// Create a snapshot and then enforce the retention policy
    ///
    /// This is the entry point used after every store mutation.
    pub fn create_backup_with_retention(&self) -> LivrariaResult<(PathBuf, PruneReport)> {
        let backup_path = self.create_backup()?;
        let report = self.prune()?;
        Ok((backup_path, report))
    }

}

/// Build snapshot metadata for a directory entry, skipping entries whose
/// metadata cannot be read.
fn snapshot_info(path: &Path) -> Option<BackupInfo> {
    let filename = path.file_name()?.to_string_lossy().to_string();
    let metadata = fs::metadata(path).ok()?;

    Some(BackupInfo {
        filename,
        path: path.to_path_buf(),
        modified: metadata.modified().ok()?,
        size_bytes: metadata.len(),
    })
}
