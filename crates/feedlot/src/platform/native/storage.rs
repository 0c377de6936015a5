//! Filesystem storage rooted at the data directory.
//!
//! Directory structure:
//! ~/.feedlot/
//!   settings.yaml        # Keyed settings, including the last inputs
//!   scenario_ids.yaml    # Highest scenario id ever handed out
//!   scenarios/
//!     1.yaml
//!     2.yaml

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use feedlot_core::ScenarioInputs;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::platform::storage::{
    ScenarioId, ScenarioListing, ScenarioRecord, Storage, StorageError, resolve_name,
    sort_newest_first,
};
use crate::util::io::atomic_write;

type Settings = BTreeMap<String, ScenarioInputs>;

/// Last scenario id handed out; ids below it are never reused
#[derive(Debug, Default, Serialize, Deserialize)]
struct IdCounter {
    last_id: u64,
}

/// Storage backed by YAML files in a data directory
pub struct NativeStorage {
    root: PathBuf,
}

impl NativeStorage {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// The default data directory (~/.feedlot/)
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".feedlot")
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn settings_path(&self) -> PathBuf {
        self.root.join("settings.yaml")
    }

    fn counter_path(&self) -> PathBuf {
        self.root.join("scenario_ids.yaml")
    }

    fn scenarios_dir(&self) -> PathBuf {
        self.root.join("scenarios")
    }

    fn scenario_path(&self, id: ScenarioId) -> PathBuf {
        self.scenarios_dir().join(format!("{id}.yaml"))
    }

    /// Create the directory structure if it is missing
    pub fn init(&self) -> Result<(), StorageError> {
        fs::create_dir_all(self.scenarios_dir())
            .map_err(|e| StorageError::Io(format!("Failed to create data directory: {e}")))
    }

    fn load_settings(&self) -> Result<Settings, StorageError> {
        let path = self.settings_path();
        if !path.exists() {
            return Ok(Settings::new());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| StorageError::Io(format!("Failed to read settings: {e}")))?;
        if content.trim().is_empty() {
            return Ok(Settings::new());
        }

        serde_saphyr::from_str(&content)
            .map_err(|e| StorageError::Parse(format!("Failed to parse settings: {e}")))
    }

    /// Last id handed out. An unreadable counter counts as zero; the files
    /// present still bound the next id from below.
    fn load_counter(&self) -> IdCounter {
        let path = self.counter_path();
        if !path.exists() {
            return IdCounter::default();
        }

        fs::read_to_string(&path)
            .map_err(|e| StorageError::Io(format!("Failed to read id counter: {e}")))
            .and_then(|content| {
                serde_saphyr::from_str(&content)
                    .map_err(|e| StorageError::Parse(format!("Failed to parse id counter: {e}")))
            })
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Rebuilding scenario id counter");
                IdCounter::default()
            })
    }

    fn write_yaml<T: Serialize>(
        &self,
        path: &Path,
        value: &T,
        what: &str,
    ) -> Result<(), StorageError> {
        self.init()?;
        let yaml = serde_saphyr::to_string(value)
            .map_err(|e| StorageError::Serialize(format!("Failed to serialize {what}: {e}")))?;
        atomic_write(path, &yaml)
            .map_err(|e| StorageError::Io(format!("Failed to write {what}: {e}")))
    }

    fn read_record(path: &Path) -> Result<ScenarioRecord, StorageError> {
        let content = fs::read_to_string(path)
            .map_err(|e| StorageError::Io(format!("Failed to read scenario: {e}")))?;
        serde_saphyr::from_str(&content)
            .map_err(|e| StorageError::Parse(format!("Failed to parse scenario: {e}")))
    }

    /// Ids of every scenario file present, in no particular order
    fn scenario_ids(&self) -> Result<Vec<ScenarioId>, StorageError> {
        let dir = self.scenarios_dir();
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&dir)
            .map_err(|e| StorageError::Io(format!("Failed to read scenarios directory: {e}")))?;

        Ok(entries
            .flatten()
            .filter_map(|entry| {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "yaml") {
                    path.file_stem()
                        .and_then(|s| s.to_str())
                        .and_then(|s| s.parse().ok())
                        .map(ScenarioId)
                } else {
                    None
                }
            })
            .collect())
    }
}

impl Storage for NativeStorage {
    fn load_setting(&self, key: &str) -> Result<Option<ScenarioInputs>, StorageError> {
        Ok(self.load_settings()?.remove(key))
    }

    fn save_setting(&mut self, key: &str, inputs: &ScenarioInputs) -> Result<(), StorageError> {
        // A corrupt settings file is replaced rather than blocking every save
        let mut settings = self.load_settings().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Discarding unreadable settings file");
            Settings::new()
        });
        settings.insert(key.to_string(), *inputs);
        self.write_yaml(&self.settings_path(), &settings, "settings")
    }

    fn add_scenario(
        &mut self,
        name: &str,
        inputs: &ScenarioInputs,
    ) -> Result<ScenarioId, StorageError> {
        let largest_file = self
            .scenario_ids()?
            .into_iter()
            .map(|id| id.0)
            .max()
            .unwrap_or(0);
        let counter = IdCounter {
            last_id: self.load_counter().last_id.max(largest_file) + 1,
        };
        // Counter first: a failed record write leaves a gap, never a reused id
        self.write_yaml(&self.counter_path(), &counter, "id counter")?;

        let id = ScenarioId(counter.last_id);
        let now = Timestamp::now();

        let record = ScenarioRecord {
            id,
            name: resolve_name(name, now),
            inputs: *inputs,
            created_at: now,
            updated_at: now,
        };
        self.write_yaml(&self.scenario_path(id), &record, "scenario")?;

        tracing::debug!(id = %id, name = %record.name, "Saved scenario");
        Ok(id)
    }

    fn get_scenario(&self, id: ScenarioId) -> Result<Option<ScenarioRecord>, StorageError> {
        let path = self.scenario_path(id);
        if !path.exists() {
            return Ok(None);
        }
        Self::read_record(&path).map(Some)
    }

    fn list_scenarios(&self) -> Result<Vec<ScenarioListing>, StorageError> {
        let mut listings = Vec::new();
        for id in self.scenario_ids()? {
            match Self::read_record(&self.scenario_path(id)) {
                Ok(record) => listings.push(ScenarioListing::from(&record)),
                Err(e) => {
                    tracing::warn!(id = %id, error = %e, "Skipping unreadable scenario");
                }
            }
        }
        sort_newest_first(&mut listings);
        Ok(listings)
    }

    fn delete_scenario(&mut self, id: ScenarioId) -> Result<(), StorageError> {
        let path = self.scenario_path(id);
        if path.exists() {
            fs::remove_file(path)
                .map_err(|e| StorageError::Io(format!("Failed to delete scenario: {e}")))?;
        }
        Ok(())
    }
}
