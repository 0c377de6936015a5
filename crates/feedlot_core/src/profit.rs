//! Per-head profit model.
//!
//! [`evaluate`] is a pure, total function: any [`ValidatedInputs`] yields a
//! [`ProfitResult`] whose fields are all finite. Divisions by quantities that
//! can reach zero go through [`safe_div`] instead of branching.

use crate::model::{ProfitResult, ScenarioInputs, ValidatedInputs};

/// Smallest denominator magnitude used by the model
pub const DENOMINATOR_FLOOR: f64 = 1e-9;

/// Kilograms per metric ton
const KG_PER_TON: f64 = 1_000.0;
/// Days per month used to annualize returns
const DAYS_PER_MONTH: f64 = 30.0;
const MONTHS_PER_YEAR: f64 = 12.0;

/// Clamp a denominator away from zero, keeping its sign.
///
/// Zero is treated as positive.
#[must_use]
pub fn floor_magnitude(denominator: f64) -> f64 {
    if denominator.abs() >= DENOMINATOR_FLOOR {
        denominator
    } else if denominator < 0.0 {
        -DENOMINATOR_FLOOR
    } else {
        DENOMINATOR_FLOOR
    }
}

/// `numerator / denominator` with the denominator magnitude floored
#[must_use]
pub fn safe_div(numerator: f64, denominator: f64) -> f64 {
    numerator / floor_magnitude(denominator)
}

/// Evaluate the economics of one head over one fattening cycle.
#[must_use]
pub fn evaluate(inputs: &ValidatedInputs) -> ProfitResult {
    let purchase_price = inputs.purchase_price();
    let sale_price = inputs.sale_price();
    let purchase_weight = inputs.purchase_weight();
    let exit_weight = inputs.exit_weight();
    let daily_gain = inputs.average_daily_gain();
    let overhead_per_day = inputs.overhead_per_day();
    let health_cost = inputs.health_cost_per_head();

    let weight_gained = exit_weight - purchase_weight;
    // daily_gain is strictly positive after validation
    let days_on_feed = weight_gained / daily_gain;

    let feed_cost_per_kg_gained =
        inputs.feed_conversion_ratio() * (inputs.feed_price_per_ton() / KG_PER_TON);
    let total_feed_cost = weight_gained * feed_cost_per_kg_gained;
    let overhead_cost = overhead_per_day * days_on_feed;
    let purchase_cost = purchase_price * purchase_weight;
    let revenue = sale_price * exit_weight;

    let total_investment = purchase_cost + total_feed_cost + overhead_cost + health_cost;
    let net_margin = revenue - total_investment;

    let breakeven_sale_price = safe_div(total_investment, exit_weight);
    let breakeven_purchase_price = safe_div(
        revenue - total_feed_cost - overhead_cost - health_cost,
        purchase_weight,
    );

    let return_on_investment_percent = safe_div(net_margin, total_investment) * 100.0;
    let monthly_return_percent = if days_on_feed > 0.0 {
        safe_div(return_on_investment_percent, days_on_feed / DAYS_PER_MONTH)
    } else {
        0.0
    };

    ProfitResult {
        net_purchase_price: purchase_price,
        net_sale_price: sale_price,
        weight_gained,
        feed_cost_per_kg_gained,
        total_feed_cost,
        overhead_cost,
        purchase_cost,
        revenue,
        feed_margin: weight_gained * (sale_price - feed_cost_per_kg_gained),
        net_margin,
        purchase_to_sale_ratio: safe_div(purchase_price, sale_price),
        breakeven_purchase_price,
        breakeven_sale_price,
        sale_drop_to_breakeven_percent: safe_div(sale_price - breakeven_sale_price, sale_price)
            * 100.0,
        cost_per_kg_produced: safe_div(
            total_feed_cost + overhead_cost + health_cost,
            weight_gained,
        ),
        overhead_per_kg: overhead_per_day / daily_gain,
        total_investment,
        return_on_investment_percent,
        monthly_return_percent,
        annual_return_percent: monthly_return_percent * MONTHS_PER_YEAR,
        days_on_feed,
    }
}

/// Validate raw inputs and evaluate them
#[must_use]
pub fn evaluate_scenario(inputs: &ScenarioInputs) -> ProfitResult {
    evaluate(&inputs.validate())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_magnitude_keeps_sign() {
        assert_eq!(floor_magnitude(0.0), DENOMINATOR_FLOOR);
        assert_eq!(floor_magnitude(1e-12), DENOMINATOR_FLOOR);
        assert_eq!(floor_magnitude(-1e-12), -DENOMINATOR_FLOOR);
        assert_eq!(floor_magnitude(-4.0), -4.0);
        assert_eq!(floor_magnitude(2.5), 2.5);
    }

    #[test]
    fn test_safe_div_by_zero_is_finite() {
        let v = safe_div(5.0, 0.0);
        assert!(v.is_finite());
        assert_eq!(v, 5.0 / DENOMINATOR_FLOOR);
    }
}
