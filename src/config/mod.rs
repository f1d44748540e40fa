//! Configuration and path management
//!
//! This module handles path resolution for the database, backups, and
//! exports, plus user settings persisted in `config.json`.

pub mod paths;
pub mod settings;

pub use paths::LivrariaPaths;
pub use settings::{BackupRetention, Settings};
