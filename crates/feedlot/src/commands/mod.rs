//! Command handlers.
//!
//! Each handler mutates the [`AppState`] it is given, talks to storage only
//! through the [`Storage`] trait, and returns the text to print.

mod evaluate;
mod scenario;
mod sweep;
mod transfer;

use color_eyre::Result;

use crate::cli::Command;
use crate::config::AppConfig;
use crate::platform::Storage;
use crate::state::AppState;

pub use evaluate::evaluate;
pub use scenario::scenario;
pub use sweep::{heatmap, sensitivity};
pub use transfer::{export, import};

/// Run one command to completion
pub fn execute(
    command: Command,
    state: &mut AppState,
    storage: &mut dyn Storage,
    config: &AppConfig,
) -> Result<String> {
    match command {
        Command::Evaluate(args) => evaluate(&args, state, storage, config),
        Command::Sensitivity(args) => sensitivity(&args, state, storage, config),
        Command::Heatmap(args) => heatmap(&args, state, storage, config),
        Command::Export { path } => export(&path, state),
        Command::Import { path } => import(&path, state, storage),
        Command::Scenario(command) => scenario(command, state, storage),
    }
}
