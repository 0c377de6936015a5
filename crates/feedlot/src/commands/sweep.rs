use color_eyre::Result;
use feedlot_core::analysis::{breakeven_locus, sweep_1d, sweep_2d};

use crate::cli::{HeatmapArgs, OutputFormat, SensitivityArgs};
use crate::config::AppConfig;
use crate::platform::Storage;
use crate::report::{CurveReport, MapReport};
use crate::state::AppState;

/// Net margin along one axis
pub fn sensitivity(
    args: &SensitivityArgs,
    state: &mut AppState,
    storage: &mut dyn Storage,
    config: &AppConfig,
) -> Result<String> {
    let (inputs, applied) = state.overridden_inputs(&args.overrides);
    let base = inputs
        .validate()
        .with_min_daily_gain(config.sweep.min_daily_gain);
    let range = args.range(&config.sweep.curve, &inputs);
    tracing::debug!(?range, "Sweeping sensitivity curve");

    let curve = sweep_1d(&base, &range)?;
    if applied > 0 {
        state.commit_inputs(storage, inputs)?;
    }

    let current_value = base.to_raw().get(range.axis.field());
    let elasticity = curve.elasticity_at(current_value).unwrap_or(0.0);

    let report = CurveReport {
        curve: &curve,
        current_value,
        elasticity,
    };
    Ok(match args.output.format() {
        OutputFormat::Text => report.to_text(),
        OutputFormat::Csv => report.to_csv(),
        OutputFormat::Json => report.to_json()? + "\n",
    })
}

/// Net margin over a two-axis grid
pub fn heatmap(
    args: &HeatmapArgs,
    state: &mut AppState,
    storage: &mut dyn Storage,
    config: &AppConfig,
) -> Result<String> {
    let (inputs, applied) = state.overridden_inputs(&args.overrides);
    let base = inputs
        .validate()
        .with_min_daily_gain(config.sweep.min_daily_gain);
    let (rows, cols) = args.ranges(&config.sweep.map_rows, &config.sweep.map_cols, &inputs);
    tracing::debug!(?rows, ?cols, "Sweeping margin map");

    let map = sweep_2d(&base, &rows, &cols)?;
    if applied > 0 {
        state.commit_inputs(storage, inputs)?;
    }
    let locus = breakeven_locus(&base, map.row_axis, &map.row_values);

    let report = MapReport {
        map: &map,
        breakeven_locus: &locus,
        profitable_share: map.profitable_share(),
    };
    Ok(match args.output.format() {
        OutputFormat::Text => report.to_text(),
        OutputFormat::Csv => report.to_csv(),
        OutputFormat::Json => report.to_json()? + "\n",
    })
}
