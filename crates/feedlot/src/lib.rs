//! Feedlot profitability simulator application
//!
//! Command-line front end for `feedlot_core`. It provides:
//! - Per-head and whole-lot evaluation reports
//! - Sensitivity curves and net margin maps as text, CSV or JSON
//! - Persistence of the current inputs and of named scenarios
//! - Import and export of flat scenario documents

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod platform;
pub mod report;
pub mod state;
pub mod util;

pub use config::AppConfig;
pub use logging::init_logging;
pub use platform::{MemoryStorage, NativeStorage, Storage, StorageError};
pub use state::AppState;
