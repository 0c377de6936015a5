//! Scaling a per-head result to the whole lot.

use crate::model::{PopulationSummary, ProfitResult};

/// Aggregate per-head economics over `head_count` animals.
///
/// Mortality reduces the heads that reach sale, and therefore the margin,
/// but never the investment: capital is committed for every purchased head.
/// Non-finite counts or percentages are read as zero.
#[must_use]
pub fn aggregate_population(
    per_head: &ProfitResult,
    head_count: f64,
    mortality_percent: f64,
) -> PopulationSummary {
    let head_count = if head_count.is_finite() { head_count } else { 0.0 };
    let mortality_percent = if mortality_percent.is_finite() {
        mortality_percent
    } else {
        0.0
    };

    let survival_rate = (1.0 - mortality_percent / 100.0).clamp(0.0, 1.0);
    let realized_heads = head_count * survival_rate;

    PopulationSummary {
        survival_rate,
        realized_heads,
        aggregate_net_margin: per_head.net_margin * realized_heads,
        aggregate_investment: per_head.total_investment * head_count,
    }
}
