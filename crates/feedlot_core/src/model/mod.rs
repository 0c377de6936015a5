mod document;
mod inputs;
mod results;

pub use document::{ScenarioDocument, parse_amount, to_json_pretty};
pub use inputs::{InputField, MIN_DAILY_GAIN, MIN_EXIT_WEIGHT, ScenarioInputs, ValidatedInputs};
pub use results::{PopulationSummary, ProfitResult};
