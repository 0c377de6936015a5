//! Storage abstraction for the current inputs and saved scenarios.

use std::fmt;

use feedlot_core::ScenarioInputs;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Settings key holding the inputs of the last session
pub const INPUTS_SETTING_KEY: &str = "risk.inputs";

/// Error types for storage operations
#[derive(Debug)]
pub enum StorageError {
    /// I/O error (file not found, permission denied, etc.)
    Io(String),
    /// Stored data could not be read back (invalid YAML, corrupted file)
    Parse(String),
    /// Serialization error
    Serialize(String),
    /// No scenario with this id
    NotFound(ScenarioId),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Io(msg) => write!(f, "IO error: {msg}"),
            StorageError::Parse(msg) => write!(f, "Parse error: {msg}"),
            StorageError::Serialize(msg) => write!(f, "Serialization error: {msg}"),
            StorageError::NotFound(id) => write!(f, "Scenario {id} not found"),
        }
    }
}

impl std::error::Error for StorageError {}

/// Identifier of a saved scenario, assigned by the store starting at 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScenarioId(pub u64);

impl fmt::Display for ScenarioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named snapshot of scenario inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioRecord {
    pub id: ScenarioId,
    pub name: String,
    pub inputs: ScenarioInputs,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Summary row for listing saved scenarios
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioListing {
    pub id: ScenarioId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<&ScenarioRecord> for ScenarioListing {
    fn from(record: &ScenarioRecord) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// Persistence interface for the application.
///
/// Settings are whole input sets stored under a string key. Scenarios are
/// append-only records with store-assigned ids.
pub trait Storage {
    /// Inputs saved under `key`, if any
    fn load_setting(&self, key: &str) -> Result<Option<ScenarioInputs>, StorageError>;

    /// Store `inputs` under `key`, replacing any previous value
    fn save_setting(&mut self, key: &str, inputs: &ScenarioInputs) -> Result<(), StorageError>;

    /// Save a new scenario. A blank name is replaced by a generated one.
    fn add_scenario(
        &mut self,
        name: &str,
        inputs: &ScenarioInputs,
    ) -> Result<ScenarioId, StorageError>;

    fn get_scenario(&self, id: ScenarioId) -> Result<Option<ScenarioRecord>, StorageError>;

    /// All scenarios, most recently updated first (ties by descending id)
    fn list_scenarios(&self) -> Result<Vec<ScenarioListing>, StorageError>;

    /// Remove a scenario. Deleting an unknown id is not an error.
    fn delete_scenario(&mut self, id: ScenarioId) -> Result<(), StorageError>;
}

/// Name given to a scenario saved without one
pub fn generated_scenario_name(at: Timestamp) -> String {
    format!("Scenario {}", at.strftime("%Y-%m-%d %H:%M:%S"))
}

/// Order listings by `updated_at` descending, then id descending
pub fn sort_newest_first(listings: &mut [ScenarioListing]) {
    listings.sort_by(|a, b| {
        b.updated_at
            .cmp(&a.updated_at)
            .then_with(|| b.id.cmp(&a.id))
    });
}

/// Trimmed `name`, or a generated one when blank
pub(crate) fn resolve_name(name: &str, now: Timestamp) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        generated_scenario_name(now)
    } else {
        trimmed.to_string()
    }
}
