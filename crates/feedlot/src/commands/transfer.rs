//! Import and export of flat scenario documents.

use std::fs;
use std::path::Path;

use color_eyre::Result;
use color_eyre::eyre::WrapErr;
use feedlot_core::ScenarioDocument;
use feedlot_core::error::DocumentError;
use feedlot_core::model::to_json_pretty;

use crate::platform::Storage;
use crate::state::AppState;

/// Write the current inputs as a JSON document
pub fn export(path: &Path, state: &AppState) -> Result<String> {
    let json = to_json_pretty(&state.inputs)?;
    fs::write(path, json + "\n")
        .wrap_err_with(|| format!("Failed to write {}", path.display()))?;

    tracing::info!(path = %path.display(), "Exported inputs");
    Ok(format!("Exported inputs to {}\n", path.display()))
}

/// Replace the current inputs with a document read from `path`.
///
/// The current inputs are untouched unless the whole document is valid.
pub fn import(path: &Path, state: &mut AppState, storage: &mut dyn Storage) -> Result<String> {
    let text = fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read {}", path.display()))?;

    let document = parse_document(path, &text)
        .wrap_err_with(|| format!("Invalid scenario document {}", path.display()))?;
    let provided = document.provided_count();

    state.import_document(document);
    state.persist(storage)?;

    tracing::info!(path = %path.display(), provided, "Imported inputs");
    Ok(format!(
        "Imported {provided} field(s) from {}; missing fields use defaults\n",
        path.display()
    ))
}

/// Parse a document as YAML when the extension says so, JSON otherwise
fn parse_document(path: &Path, text: &str) -> Result<ScenarioDocument, DocumentError> {
    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

    if is_yaml {
        let value: serde_json::Value =
            serde_saphyr::from_str(text).map_err(|e| DocumentError::Parse(e.to_string()))?;
        ScenarioDocument::from_value(&value)
    } else {
        ScenarioDocument::from_json(text)
    }
}
