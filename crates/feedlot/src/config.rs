//! Application configuration stored in `config.yaml`.

use std::fs;
use std::path::{Path, PathBuf};

use feedlot_core::analysis::SweepSettings;
use serde::{Deserialize, Serialize};

use crate::platform::StorageError;
use crate::util::io::atomic_write;

/// Configuration file name inside the data directory
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Preferences that shape the reports
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Grid ranges for the sensitivity curve and the margin map
    pub sweep: SweepSettings,
}

impl AppConfig {
    pub fn path(data_dir: &Path) -> PathBuf {
        data_dir.join(CONFIG_FILE_NAME)
    }

    /// Load the configuration, writing the defaults on first run
    pub fn load_or_create(data_dir: &Path) -> Result<Self, StorageError> {
        let path = Self::path(data_dir);
        if !path.exists() {
            let config = Self::default();
            config.save(data_dir)?;
            tracing::info!(path = %path.display(), "Created default configuration");
            return Ok(config);
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| StorageError::Io(format!("Failed to read config: {e}")))?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_saphyr::from_str(&content)
            .map_err(|e| StorageError::Parse(format!("Failed to parse config: {e}")))
    }

    pub fn save(&self, data_dir: &Path) -> Result<(), StorageError> {
        fs::create_dir_all(data_dir)
            .map_err(|e| StorageError::Io(format!("Failed to create data directory: {e}")))?;
        let yaml = serde_saphyr::to_string(self)
            .map_err(|e| StorageError::Serialize(format!("Failed to serialize config: {e}")))?;
        atomic_write(&Self::path(data_dir), &yaml)
            .map_err(|e| StorageError::Io(format!("Failed to write config: {e}")))
    }
}
