//! In-memory storage.

use std::collections::{BTreeMap, HashMap};

use feedlot_core::ScenarioInputs;
use jiff::Timestamp;

use super::storage::{
    ScenarioId, ScenarioListing, ScenarioRecord, Storage, StorageError, resolve_name,
    sort_newest_first,
};

/// Storage that lives only as long as the value
#[derive(Debug, Default)]
pub struct MemoryStorage {
    settings: HashMap<String, ScenarioInputs>,
    scenarios: BTreeMap<ScenarioId, ScenarioRecord>,
    last_id: u64,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn load_setting(&self, key: &str) -> Result<Option<ScenarioInputs>, StorageError> {
        Ok(self.settings.get(key).copied())
    }

    fn save_setting(&mut self, key: &str, inputs: &ScenarioInputs) -> Result<(), StorageError> {
        self.settings.insert(key.to_string(), *inputs);
        Ok(())
    }

    fn add_scenario(
        &mut self,
        name: &str,
        inputs: &ScenarioInputs,
    ) -> Result<ScenarioId, StorageError> {
        // Ids are never reused, even after deletes
        self.last_id += 1;
        let id = ScenarioId(self.last_id);
        let now = Timestamp::now();
        self.scenarios.insert(
            id,
            ScenarioRecord {
                id,
                name: resolve_name(name, now),
                inputs: *inputs,
                created_at: now,
                updated_at: now,
            },
        );
        Ok(id)
    }

    fn get_scenario(&self, id: ScenarioId) -> Result<Option<ScenarioRecord>, StorageError> {
        Ok(self.scenarios.get(&id).cloned())
    }

    fn list_scenarios(&self) -> Result<Vec<ScenarioListing>, StorageError> {
        let mut listings: Vec<ScenarioListing> =
            self.scenarios.values().map(ScenarioListing::from).collect();
        sort_newest_first(&mut listings);
        Ok(listings)
    }

    fn delete_scenario(&mut self, id: ScenarioId) -> Result<(), StorageError> {
        self.scenarios.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_not_reused() {
        let mut storage = MemoryStorage::new();
        let inputs = ScenarioInputs::default();
        let first = storage.add_scenario("one", &inputs).unwrap();
        storage.delete_scenario(first).unwrap();
        let second = storage.add_scenario("two", &inputs).unwrap();
        assert!(second > first);
    }

    #[test]
    fn test_listing_and_delete() {
        let mut storage = MemoryStorage::new();
        let inputs = ScenarioInputs::default();
        let a = storage.add_scenario("a", &inputs).unwrap();
        let b = storage.add_scenario("b", &inputs).unwrap();

        let ids: Vec<ScenarioId> = storage
            .list_scenarios()
            .unwrap()
            .iter()
            .map(|l| l.id)
            .collect();
        assert_eq!(ids, vec![b, a]);

        storage.delete_scenario(a).unwrap();
        storage.delete_scenario(a).unwrap();
        assert_eq!(storage.list_scenarios().unwrap().len(), 1);
        assert_eq!(storage.get_scenario(a).unwrap(), None);
    }

    #[test]
    fn test_settings_are_keyed() {
        let mut storage = MemoryStorage::new();
        let inputs = ScenarioInputs {
            mortality_percent: 3.0,
            ..Default::default()
        };
        storage.save_setting("risk.inputs", &inputs).unwrap();
        assert_eq!(storage.load_setting("risk.inputs").unwrap(), Some(inputs));
        assert_eq!(storage.load_setting("missing").unwrap(), None);
    }
}
