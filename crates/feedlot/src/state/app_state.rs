use feedlot_core::{ScenarioDocument, ScenarioInputs};

use crate::cli::InputOverrides;
use crate::platform::{
    INPUTS_SETTING_KEY, ScenarioId, ScenarioListing, Storage, StorageError,
};

/// The inputs being worked on and the saved scenarios
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub inputs: ScenarioInputs,
    /// Saved scenarios, newest first
    pub scenarios: Vec<ScenarioListing>,
}

impl AppState {
    /// Restore the last session. Anything storage cannot provide falls back
    /// to defaults with a warning.
    pub fn restore(storage: &dyn Storage) -> Self {
        let inputs = match storage.load_setting(INPUTS_SETTING_KEY) {
            Ok(Some(inputs)) => inputs,
            Ok(None) => {
                tracing::debug!("No saved inputs, starting from defaults");
                ScenarioInputs::default()
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to restore inputs, using defaults");
                ScenarioInputs::default()
            }
        };

        let scenarios = storage.list_scenarios().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Failed to list scenarios");
            Vec::new()
        });

        Self { inputs, scenarios }
    }

    /// The current inputs with command-line overrides applied. The state
    /// itself is left as it is until [`AppState::commit_inputs`].
    pub fn overridden_inputs(&self, overrides: &InputOverrides) -> (ScenarioInputs, usize) {
        let mut inputs = self.inputs;
        let applied = overrides.apply(&mut inputs);
        if applied > 0 {
            tracing::debug!(applied, "Applied input overrides");
        }
        (inputs, applied)
    }

    /// Make `inputs` the current inputs once storage has accepted them
    pub fn commit_inputs(
        &mut self,
        storage: &mut dyn Storage,
        inputs: ScenarioInputs,
    ) -> Result<(), StorageError> {
        storage.save_setting(INPUTS_SETTING_KEY, &inputs)?;
        self.inputs = inputs;
        Ok(())
    }

    /// Save the current inputs as the session inputs
    pub fn persist(&self, storage: &mut dyn Storage) -> Result<(), StorageError> {
        storage.save_setting(INPUTS_SETTING_KEY, &self.inputs)
    }

    /// Replace the current inputs with an imported document; fields the
    /// document leaves out take their defaults
    pub fn import_document(&mut self, document: ScenarioDocument) {
        self.inputs = document.into_inputs();
    }

    /// Save the current inputs as a named scenario
    pub fn save_scenario(
        &mut self,
        storage: &mut dyn Storage,
        name: &str,
    ) -> Result<ScenarioId, StorageError> {
        let id = storage.add_scenario(name, &self.inputs)?;
        self.refresh_scenarios(storage)?;
        Ok(id)
    }

    /// Make a saved scenario the current inputs
    pub fn load_scenario(
        &mut self,
        storage: &dyn Storage,
        id: ScenarioId,
    ) -> Result<String, StorageError> {
        let record = storage
            .get_scenario(id)?
            .ok_or(StorageError::NotFound(id))?;
        self.inputs = record.inputs;
        Ok(record.name)
    }

    pub fn delete_scenario(
        &mut self,
        storage: &mut dyn Storage,
        id: ScenarioId,
    ) -> Result<(), StorageError> {
        storage.delete_scenario(id)?;
        self.refresh_scenarios(storage)
    }

    pub fn refresh_scenarios(&mut self, storage: &dyn Storage) -> Result<(), StorageError> {
        self.scenarios = storage.list_scenarios()?;
        Ok(())
    }
}
