use color_eyre::Result;
use feedlot_core::analysis::aggregate_population;
use feedlot_core::evaluate as evaluate_inputs;

use crate::cli::EvaluateArgs;
use crate::config::AppConfig;
use crate::platform::Storage;
use crate::report::EvaluationReport;
use crate::state::AppState;

/// Evaluate the current inputs and save them as the session inputs
pub fn evaluate(
    args: &EvaluateArgs,
    state: &mut AppState,
    storage: &mut dyn Storage,
    config: &AppConfig,
) -> Result<String> {
    let (raw, _) = state.overridden_inputs(&args.overrides);

    let inputs = raw
        .validate()
        .with_min_daily_gain(config.sweep.min_daily_gain);
    let per_head = evaluate_inputs(&inputs);
    let population =
        aggregate_population(&per_head, inputs.head_count(), inputs.mortality_percent());

    state.commit_inputs(storage, raw)?;
    tracing::info!(
        net_margin = per_head.net_margin,
        days_on_feed = per_head.days_on_feed,
        "Evaluated scenario"
    );

    let report = EvaluationReport {
        inputs: &state.inputs,
        per_head: &per_head,
        population: &population,
    };
    if args.json {
        Ok(report.to_json()? + "\n")
    } else {
        Ok(report.to_text())
    }
}
