//! Persistence layer.
//!
//! [`Storage`] abstracts where the current inputs and saved scenarios live:
//! - [`NativeStorage`]: YAML files under the data directory
//! - [`MemoryStorage`]: an in-process store for tests and one-off runs

mod memory;
mod storage;

pub mod native;

pub use memory::MemoryStorage;
pub use native::NativeStorage;
pub use storage::{
    INPUTS_SETTING_KEY, ScenarioId, ScenarioListing, ScenarioRecord, Storage, StorageError,
    generated_scenario_name, sort_newest_first,
};
