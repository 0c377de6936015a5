//! Parameter sweep evaluator - evaluates the profit model across grids.
//!
//! Every grid point is an independent call to [`evaluate`] on the base inputs
//! with one or two fields substituted. Nothing is shared between points, so the
//! 2D sweep runs cell-parallel when the `parallel` feature is enabled.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::Serialize;

use crate::error::AnalysisError;
use crate::model::{PopulationSummary, ProfitResult, ScenarioInputs, ValidatedInputs};
use crate::profit::{evaluate, safe_div};

use super::{AxisRange, SweepAxis, SweepGrid, SweepSettings, aggregate_population};

/// Results of a one-dimensional sweep: the sensitivity curve of one axis
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SensitivityCurve {
    pub axis: SweepAxis,
    /// Grid values, in sweep order
    pub values: Vec<f64>,
    /// One full result per grid value
    pub results: Vec<ProfitResult>,
}

impl SensitivityCurve {
    /// Number of points on the curve
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Net margin at each grid value
    #[must_use]
    pub fn net_margins(&self) -> Vec<f64> {
        self.results.iter().map(|r| r.net_margin).collect()
    }

    /// Local slope of net margin with respect to the axis near `target`
    #[must_use]
    pub fn elasticity_at(&self, target: f64) -> Option<f64> {
        elasticity_at(&self.values, &self.net_margins(), target)
    }

    /// Iterate over (axis value, result) pairs
    pub fn points(&self) -> impl Iterator<Item = (f64, &ProfitResult)> {
        self.values.iter().copied().zip(self.results.iter())
    }
}

/// Net margins over a two-dimensional grid
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarginMap {
    pub row_axis: SweepAxis,
    pub col_axis: SweepAxis,
    pub row_values: Vec<f64>,
    pub col_values: Vec<f64>,
    /// `[rows, cols]` grid of net margins per head
    pub margins: SweepGrid<f64>,
}

impl MarginMap {
    /// Net margin at (row, col)
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.margins.get(&[row, col]).copied()
    }

    /// Fraction of cells with a positive margin
    #[must_use]
    pub fn profitable_share(&self) -> f64 {
        if self.margins.is_empty() {
            return 0.0;
        }
        let profitable = self.margins.data().iter().filter(|m| **m > 0.0).count();
        profitable as f64 / self.margins.len() as f64
    }
}

/// Sweep one axis over its grid, holding every other field at the base value.
pub fn sweep_1d(
    base: &ValidatedInputs,
    range: &AxisRange,
) -> Result<SensitivityCurve, AnalysisError> {
    let values = range.sweep_values()?;
    let field = range.axis.field();
    let results = values
        .iter()
        .map(|&v| evaluate(&base.with_field(field, v)))
        .collect();

    Ok(SensitivityCurve {
        axis: range.axis,
        values,
        results,
    })
}

/// Slope Δy/Δx of a sampled curve near `target`.
///
/// Picks the grid point nearest to `target` (the first one on ties), then
/// takes a forward difference to the next point, or to itself at the last
/// point. The Δx magnitude is floored so the result is always finite.
/// Returns `None` when the series are empty or of different lengths.
#[must_use]
pub fn elasticity_at(xs: &[f64], ys: &[f64], target: f64) -> Option<f64> {
    if xs.is_empty() || xs.len() != ys.len() {
        return None;
    }

    let mut nearest = 0;
    for (i, x) in xs.iter().enumerate().skip(1) {
        if (x - target).abs() < (xs[nearest] - target).abs() {
            nearest = i;
        }
    }

    let next = (nearest + 1).min(xs.len() - 1);
    Some(safe_div(ys[next] - ys[nearest], xs[next] - xs[nearest]))
}

/// Evaluate the model on every cell of `rows × cols`.
///
/// Each cell substitutes the row value then the column value into the base
/// inputs and runs a full evaluation.
pub fn sweep_2d(
    base: &ValidatedInputs,
    rows: &AxisRange,
    cols: &AxisRange,
) -> Result<MarginMap, AnalysisError> {
    if rows.axis == cols.axis {
        return Err(AnalysisError::DuplicateAxis(rows.axis));
    }

    let row_values = rows.sweep_values()?;
    let col_values = cols.sweep_values()?;
    let row_field = rows.axis.field();
    let col_field = cols.axis.field();

    let row_bases: Vec<ValidatedInputs> = row_values
        .iter()
        .map(|&v| base.with_field(row_field, v))
        .collect();
    let n_cols = col_values.len();
    let total = row_bases.len() * n_cols;

    let cell = |flat: usize| -> f64 {
        let row_base = &row_bases[flat / n_cols];
        evaluate(&row_base.with_field(col_field, col_values[flat % n_cols])).net_margin
    };

    #[cfg(feature = "parallel")]
    let data: Vec<f64> = (0..total).into_par_iter().map(cell).collect();

    #[cfg(not(feature = "parallel"))]
    let data: Vec<f64> = (0..total).map(cell).collect();

    let margins = SweepGrid::from_data(vec![row_values.len(), n_cols], data)?;

    Ok(MarginMap {
        row_axis: rows.axis,
        col_axis: cols.axis,
        row_values,
        col_values,
        margins,
    })
}

/// Breakeven sale price at each value of `row_axis`.
///
/// This is the zero-margin line of a margin map whose columns are sale
/// prices: a closed-form projection of the model, not a search of the grid.
#[must_use]
pub fn breakeven_locus(
    base: &ValidatedInputs,
    row_axis: SweepAxis,
    row_values: &[f64],
) -> Vec<f64> {
    let field = row_axis.field();
    row_values
        .iter()
        .map(|&v| evaluate(&base.with_field(field, v)).breakeven_sale_price)
        .collect()
}

/// Everything the dashboard shows for one set of inputs
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioAnalysis {
    /// Inputs after validation and the daily gain floor
    pub inputs: ValidatedInputs,
    pub per_head: ProfitResult,
    pub population: PopulationSummary,
    pub curve: SensitivityCurve,
    /// Slope of the curve at the current value of its axis
    pub elasticity: f64,
    pub map: MarginMap,
    /// Breakeven sale price for each map row
    pub breakeven_locus: Vec<f64>,
}

/// Run the full analysis: per-head result, lot totals, sensitivity curve,
/// margin map and breakeven locus.
pub fn analyze(
    inputs: &ScenarioInputs,
    settings: &SweepSettings,
) -> Result<ScenarioAnalysis, AnalysisError> {
    let base = inputs.validate().with_min_daily_gain(settings.min_daily_gain);

    let per_head = evaluate(&base);
    let population =
        aggregate_population(&per_head, base.head_count(), base.mortality_percent());

    let curve = sweep_1d(&base, &settings.curve)?;
    let current = base.to_raw().get(settings.curve.axis.field());
    let elasticity = curve.elasticity_at(current).unwrap_or(0.0);

    let map = sweep_2d(&base, &settings.map_rows, &settings.map_cols)?;
    let locus = breakeven_locus(&base, map.row_axis, &map.row_values);

    Ok(ScenarioAnalysis {
        inputs: base,
        per_head,
        population,
        curve,
        elasticity,
        map,
        breakeven_locus: locus,
    })
}
