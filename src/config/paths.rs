//! Path management for livraria-cli
//!
//! Provides XDG-compliant path resolution for the database, backups, and
//! CSV exports.
//!
//! ## Path Resolution Order
//!
//! 1. `LIVRARIA_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/livraria-cli` or `~/.config/livraria-cli`
//! 3. Windows: `%APPDATA%\livraria-cli`

use std::path::PathBuf;

use crate::error::LivrariaError;

/// Manages all paths used by livraria-cli
#[derive(Debug, Clone)]
pub struct LivrariaPaths {
    /// Base directory for all livraria-cli data
    base_dir: PathBuf,
}

impl LivrariaPaths {
    /// Create a new LivrariaPaths instance
    ///
    /// Path resolution:
    /// 1. `LIVRARIA_DATA_DIR` env var (explicit override)
    /// 2. Unix: `$XDG_CONFIG_HOME/livraria-cli` or `~/.config/livraria-cli`
    /// 3. Windows: `%APPDATA%\livraria-cli`
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, LivrariaError> {
        let base_dir = if let Ok(custom) = std::env::var("LIVRARIA_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create LivrariaPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/livraria-cli/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/livraria-cli/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the backup directory (~/.config/livraria-cli/backups/)
    pub fn backup_dir(&self) -> PathBuf {
        self.base_dir.join("backups")
    }

    /// Get the export directory (~/.config/livraria-cli/exports/)
    pub fn export_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    /// Get the path to the SQLite database file
    pub fn db_file(&self) -> PathBuf {
        self.data_dir().join("livraria.db")
    }

    /// Get the default path for CSV exports
    pub fn default_export_file(&self) -> PathBuf {
        self.export_dir().join("livros_exportados.csv")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure all required directories exist
    ///
    /// Creates:
    /// - Base directory (~/.config/livraria-cli/)
    /// - Data directory (~/.config/livraria-cli/data/)
    /// - Backup directory (~/.config/livraria-cli/backups/)
    /// - Export directory (~/.config/livraria-cli/exports/)
    pub fn ensure_directories(&self) -> Result<(), LivrariaError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| LivrariaError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| LivrariaError::Io(format!("Failed to create data directory: {}", e)))?;

        std::fs::create_dir_all(self.backup_dir())
            .map_err(|e| LivrariaError::Io(format!("Failed to create backup directory: {}", e)))?;

        std::fs::create_dir_all(self.export_dir())
            .map_err(|e| LivrariaError::Io(format!("Failed to create export directory: {}", e)))?;

        Ok(())
    }

    /// Check if livraria-cli has been initialized (database file exists)
    pub fn is_initialized(&self) -> bool {
        self.db_file().exists()
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, LivrariaError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
    Ok(config_base.join("livraria-cli"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, LivrariaError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| LivrariaError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("livraria-cli"))
}
