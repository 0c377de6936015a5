//! Application state owned by the caller and handed to every command.

mod app_state;

pub use app_state::AppState;
