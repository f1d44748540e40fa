//! Automatic backup management
//!
//! Snapshot-and-prune lifecycle for the SQLite database file. Snapshots
//! are full byte-for-byte copies named with a sortable timestamp; the
//! retention policy keeps only the most recent N (default 5).

pub mod manager;

pub use manager::{BackupInfo, BackupManager, PruneReport};
