//! User settings for livraria-cli
//!
//! Manages user preferences, currently limited to the backup retention
//! policy. Settings live in `config.json` under the base directory.

use serde::{Deserialize, Serialize};

use super::paths::LivrariaPaths;
use crate::error::LivrariaError;

/// Backup retention settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupRetention {
    /// Number of snapshots to keep; older ones are pruned after each backup
    pub keep_count: u32,
}

impl Default for BackupRetention {
    fn default() -> Self {
        Self { keep_count: 5 }
    }
}

/// User settings for livraria-cli
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Settings file format version
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Backup retention policy
    #[serde(default)]
    pub backup_retention: BackupRetention,
}

fn default_schema_version() -> u32 {
    1
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            backup_retention: BackupRetention::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, creating the file with defaults if absent
    pub fn load_or_create(paths: &LivrariaPaths) -> Result<Self, LivrariaError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| LivrariaError::Io(format!("Failed to read settings: {}", e)))?;
            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| LivrariaError::Json(format!("Failed to parse settings: {}", e)))?;
            Ok(settings)
        } else {
            let settings = Settings::default();
            settings.save(paths)?;
            Ok(settings)
        }
    }

    /// Persist settings to disk as pretty-printed JSON
    pub fn save(&self, paths: &LivrariaPaths) -> Result<(), LivrariaError> {
        if let Some(parent) = paths.settings_file().parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| LivrariaError::Io(format!("Failed to create config dir: {}", e)))?;
        }

        let json = serde_json::to_string_pretty(self)
            .map_err(|e| LivrariaError::Json(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), json)
            .map_err(|e| LivrariaError::Io(format!("Failed to write settings: {}", e)))?;

        Ok(())
    }
}
