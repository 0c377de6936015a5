//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use feedlot_core::analysis::{AxisRange, SweepAxis};
use feedlot_core::model::{InputField, ScenarioInputs, parse_amount};

#[derive(Parser, Debug)]
#[command(name = "feedlot")]
#[command(about = "A feedlot profitability simulator", version)]
pub struct Cli {
    /// Path to the data directory (default: ~/.feedlot/)
    #[arg(short, long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info", global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Per-head economics and lot totals for the current inputs
    Evaluate(EvaluateArgs),
    /// Net margin along one axis, with the local elasticity
    Sensitivity(SensitivityArgs),
    /// Net margin over a two-axis grid, with the breakeven line
    Heatmap(HeatmapArgs),
    /// Write the current inputs to a JSON document
    Export {
        /// Destination file
        path: PathBuf,
    },
    /// Replace the current inputs with a JSON or YAML document
    Import {
        /// Source file (.json, .yaml or .yml)
        path: PathBuf,
    },
    /// Manage saved scenarios
    #[command(subcommand)]
    Scenario(ScenarioCommand),
}

#[derive(Subcommand, Debug)]
pub enum ScenarioCommand {
    /// Save the current inputs under a name
    Save {
        /// Scenario name (generated from the current time when omitted)
        name: Option<String>,
    },
    /// List saved scenarios, newest first
    List {
        #[arg(long)]
        json: bool,
    },
    /// Make a saved scenario the current inputs
    Load { id: u64 },
    /// Delete a saved scenario
    Delete { id: u64 },
}

/// Parse a non-negative amount, tolerating spaces and thousands separators
pub fn parse_non_negative(text: &str) -> Result<f64, String> {
    match parse_amount(text) {
        Some(v) if v >= 0.0 => Ok(v),
        Some(_) => Err(format!("'{text}' must not be negative")),
        None => Err(format!("'{text}' is not a number")),
    }
}

/// Per-run changes to the current inputs
#[derive(Args, Debug, Clone, Default)]
pub struct InputOverrides {
    /// Purchase price ($/kg)
    #[arg(long, value_parser = parse_non_negative)]
    pub purchase_price: Option<f64>,
    /// Sale price ($/kg)
    #[arg(long, value_parser = parse_non_negative)]
    pub sale_price: Option<f64>,
    /// Head count
    #[arg(long, value_parser = parse_non_negative)]
    pub head_count: Option<f64>,
    /// Purchase weight (kg)
    #[arg(long, value_parser = parse_non_negative)]
    pub purchase_weight: Option<f64>,
    /// Exit weight (kg)
    #[arg(long, value_parser = parse_non_negative)]
    pub exit_weight: Option<f64>,
    /// Feed price ($/t)
    #[arg(long, value_parser = parse_non_negative)]
    pub feed_price: Option<f64>,
    /// Feed conversion (kg feed per kg gained)
    #[arg(long, value_parser = parse_non_negative)]
    pub feed_conversion: Option<f64>,
    /// Mortality (%)
    #[arg(long, value_parser = parse_non_negative)]
    pub mortality: Option<f64>,
    /// Average daily gain (kg/day)
    #[arg(long, value_parser = parse_non_negative)]
    pub daily_gain: Option<f64>,
    /// Yard fee ($/head/day)
    #[arg(long, value_parser = parse_non_negative)]
    pub overhead: Option<f64>,
    /// Health cost ($/head)
    #[arg(long, value_parser = parse_non_negative)]
    pub health_cost: Option<f64>,
}

impl InputOverrides {
    fn pairs(&self) -> [(InputField, Option<f64>); 11] {
        [
            (InputField::PurchasePrice, self.purchase_price),
            (InputField::SalePrice, self.sale_price),
            (InputField::HeadCount, self.head_count),
            (InputField::PurchaseWeight, self.purchase_weight),
            (InputField::ExitWeight, self.exit_weight),
            (InputField::FeedPricePerTon, self.feed_price),
            (InputField::FeedConversionRatio, self.feed_conversion),
            (InputField::MortalityPercent, self.mortality),
            (InputField::AverageDailyGain, self.daily_gain),
            (InputField::OverheadPerDay, self.overhead),
            (InputField::HealthCostPerHead, self.health_cost),
        ]
    }

    /// Write every given override into `inputs`, returning how many were set
    pub fn apply(&self, inputs: &mut ScenarioInputs) -> usize {
        let mut applied = 0;
        for (field, value) in self.pairs() {
            if let Some(v) = value {
                inputs.set(field, v);
                applied += 1;
            }
        }
        applied
    }
}

/// Output format of a sweep report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}

#[derive(Args, Debug, Clone, Copy, Default)]
pub struct OutputArgs {
    /// Print JSON
    #[arg(long, conflicts_with = "csv")]
    pub json: bool,
    /// Print CSV
    #[arg(long)]
    pub csv: bool,
}

impl OutputArgs {
    pub fn format(self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else if self.csv {
            OutputFormat::Csv
        } else {
            OutputFormat::Text
        }
    }
}

#[derive(Args, Debug)]
pub struct EvaluateArgs {
    #[command(flatten)]
    pub overrides: InputOverrides,
    /// Print JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct SensitivityArgs {
    #[command(flatten)]
    pub overrides: InputOverrides,
    /// Axis to sweep (purchase-price, sale-price, feed-price, ...)
    #[arg(long)]
    pub axis: Option<SweepAxis>,
    /// First grid value
    #[arg(long, value_parser = parse_non_negative)]
    pub min: Option<f64>,
    /// Last grid value
    #[arg(long, value_parser = parse_non_negative)]
    pub max: Option<f64>,
    /// Number of grid points
    #[arg(long)]
    pub steps: Option<usize>,
    #[command(flatten)]
    pub output: OutputArgs,
}

impl SensitivityArgs {
    /// The curve range after applying command-line choices to `configured`
    pub fn range(&self, configured: &AxisRange, inputs: &ScenarioInputs) -> AxisRange {
        resolve_range(
            configured,
            inputs,
            RangeChoice {
                axis: self.axis,
                min: self.min,
                max: self.max,
                steps: self.steps,
            },
        )
    }
}

#[derive(Args, Debug)]
pub struct HeatmapArgs {
    #[command(flatten)]
    pub overrides: InputOverrides,
    /// Row axis
    #[arg(long)]
    pub rows: Option<SweepAxis>,
    #[arg(long, value_parser = parse_non_negative)]
    pub row_min: Option<f64>,
    #[arg(long, value_parser = parse_non_negative)]
    pub row_max: Option<f64>,
    #[arg(long)]
    pub row_steps: Option<usize>,
    /// Column axis
    #[arg(long)]
    pub cols: Option<SweepAxis>,
    #[arg(long, value_parser = parse_non_negative)]
    pub col_min: Option<f64>,
    #[arg(long, value_parser = parse_non_negative)]
    pub col_max: Option<f64>,
    #[arg(long)]
    pub col_steps: Option<usize>,
    #[command(flatten)]
    pub output: OutputArgs,
}

impl HeatmapArgs {
    /// Row and column ranges after applying command-line choices
    pub fn ranges(
        &self,
        configured_rows: &AxisRange,
        configured_cols: &AxisRange,
        inputs: &ScenarioInputs,
    ) -> (AxisRange, AxisRange) {
        let rows = resolve_range(
            configured_rows,
            inputs,
            RangeChoice {
                axis: self.rows,
                min: self.row_min,
                max: self.row_max,
                steps: self.row_steps,
            },
        );
        let cols = resolve_range(
            configured_cols,
            inputs,
            RangeChoice {
                axis: self.cols,
                min: self.col_min,
                max: self.col_max,
                steps: self.col_steps,
            },
        );
        (rows, cols)
    }
}

struct RangeChoice {
    axis: Option<SweepAxis>,
    min: Option<f64>,
    max: Option<f64>,
    steps: Option<usize>,
}

/// Span around the current value used when switching to an unconfigured axis
const DEFAULT_SPAN: (f64, f64) = (0.5, 1.5);

/// Start from the configured range. Switching to another axis without bounds
/// sweeps from half to one and a half times the current value of that field.
fn resolve_range(configured: &AxisRange, inputs: &ScenarioInputs, choice: RangeChoice) -> AxisRange {
    let axis = choice.axis.unwrap_or(configured.axis);
    let (default_min, default_max) = if axis == configured.axis {
        (configured.min_value, configured.max_value)
    } else {
        let current = inputs.get(axis.field());
        (current * DEFAULT_SPAN.0, current * DEFAULT_SPAN.1)
    };

    AxisRange::new(
        axis,
        choice.min.unwrap_or(default_min),
        choice.max.unwrap_or(default_max),
        choice.steps.unwrap_or(configured.step_count),
    )
}
