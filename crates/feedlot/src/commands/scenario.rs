use color_eyre::Result;

use crate::cli::ScenarioCommand;
use crate::platform::{ScenarioId, Storage};
use crate::report::scenarios_text;
use crate::state::AppState;

/// Save, list, load or delete named scenarios
pub fn scenario(
    command: ScenarioCommand,
    state: &mut AppState,
    storage: &mut dyn Storage,
) -> Result<String> {
    match command {
        ScenarioCommand::Save { name } => {
            let id = state.save_scenario(storage, name.as_deref().unwrap_or(""))?;
            let saved = state
                .scenarios
                .iter()
                .find(|s| s.id == id)
                .map_or_else(String::new, |s| s.name.clone());
            tracing::info!(%id, name = %saved, "Saved scenario");
            Ok(format!("Saved scenario {id}: {saved}\n"))
        }
        ScenarioCommand::List { json } => {
            state.refresh_scenarios(storage)?;
            if json {
                Ok(serde_json::to_string_pretty(&state.scenarios)? + "\n")
            } else {
                Ok(scenarios_text(&state.scenarios))
            }
        }
        ScenarioCommand::Load { id } => {
            let id = ScenarioId(id);
            let name = state.load_scenario(storage, id)?;
            state.persist(storage)?;
            tracing::info!(%id, %name, "Loaded scenario");
            Ok(format!("Loaded scenario {id}: {name}\n"))
        }
        ScenarioCommand::Delete { id } => {
            let id = ScenarioId(id);
            state.delete_scenario(storage, id)?;
            tracing::info!(%id, "Deleted scenario");
            Ok(format!("Deleted scenario {id}\n"))
        }
    }
}
