//! Scenario Builder
//!
//! The ScenarioBuilder provides a fluent API for creating scenario inputs,
//! starting from the documented defaults.
//!
//! # Example
//!
//! ```ignore
//! use feedlot_core::config::ScenarioBuilder;
//!
//! let inputs = ScenarioBuilder::new()
//!     // Buy 200 kg steers at $3,000/kg
//!     .purchase(3_000.0, 200.0)
//!     // Sell at 460 kg for $3,500/kg
//!     .sale(3_500.0, 460.0)
//!     // Feed at $64,000/t with 8:1 conversion
//!     .feed(64_000.0, 8.0)
//!     .daily_gain(1.2)
//!     .herd(100, 1.0)
//!     .build();
//! ```

use crate::model::{InputField, ScenarioInputs};

/// Builder for scenario inputs
#[derive(Debug, Clone, Default)]
pub struct ScenarioBuilder {
    inputs: ScenarioInputs,
}

impl ScenarioBuilder {
    /// Create a new builder seeded with the default scenario
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from existing inputs
    #[must_use]
    pub fn from_inputs(inputs: ScenarioInputs) -> Self {
        Self { inputs }
    }

    // =========================================================================
    // Prices and weights
    // =========================================================================

    /// Set the purchase price ($/kg) and purchase weight (kg)
    #[must_use]
    pub fn purchase(mut self, price: f64, weight: f64) -> Self {
        self.inputs.purchase_price = price;
        self.inputs.purchase_weight = weight;
        self
    }

    /// Set the sale price ($/kg) and exit weight (kg)
    #[must_use]
    pub fn sale(mut self, price: f64, weight: f64) -> Self {
        self.inputs.sale_price = price;
        self.inputs.exit_weight = weight;
        self
    }

    // =========================================================================
    // Production
    // =========================================================================

    /// Set the feed price ($/t) and conversion ratio (kg feed / kg gain)
    #[must_use]
    pub fn feed(mut self, price_per_ton: f64, conversion_ratio: f64) -> Self {
        self.inputs.feed_price_per_ton = price_per_ton;
        self.inputs.feed_conversion_ratio = conversion_ratio;
        self
    }

    #[must_use]
    pub fn daily_gain(mut self, kg_per_day: f64) -> Self {
        self.inputs.average_daily_gain = kg_per_day;
        self
    }

    #[must_use]
    pub fn overhead_per_day(mut self, amount: f64) -> Self {
        self.inputs.overhead_per_day = amount;
        self
    }

    #[must_use]
    pub fn health_cost(mut self, per_head: f64) -> Self {
        self.inputs.health_cost_per_head = per_head;
        self
    }

    // =========================================================================
    // Herd
    // =========================================================================

    /// Set the lot size and expected mortality (%)
    #[must_use]
    pub fn herd(mut self, head_count: u32, mortality_percent: f64) -> Self {
        self.inputs.head_count = f64::from(head_count);
        self.inputs.mortality_percent = mortality_percent;
        self
    }

    /// Set any field by identifier
    #[must_use]
    pub fn field(mut self, field: InputField, value: f64) -> Self {
        self.inputs.set(field, value);
        self
    }

    #[must_use]
    pub fn build(self) -> ScenarioInputs {
        self.inputs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_starts_from_defaults() {
        assert_eq!(ScenarioBuilder::new().build(), ScenarioInputs::default());
    }

    #[test]
    fn test_builder_sets_fields() {
        let inputs = ScenarioBuilder::new()
            .purchase(2_900.0, 180.0)
            .sale(3_600.0, 420.0)
            .feed(58_000.0, 7.5)
            .daily_gain(1.4)
            .overhead_per_day(25.0)
            .health_cost(900.0)
            .herd(250, 2.0)
            .field(InputField::SalePrice, 3_700.0)
            .build();

        assert_eq!(inputs.purchase_price, 2_900.0);
        assert_eq!(inputs.purchase_weight, 180.0);
        assert_eq!(inputs.sale_price, 3_700.0);
        assert_eq!(inputs.exit_weight, 420.0);
        assert_eq!(inputs.feed_price_per_ton, 58_000.0);
        assert_eq!(inputs.feed_conversion_ratio, 7.5);
        assert_eq!(inputs.average_daily_gain, 1.4);
        assert_eq!(inputs.overhead_per_day, 25.0);
        assert_eq!(inputs.health_cost_per_head, 900.0);
        assert_eq!(inputs.head_count, 250.0);
        assert_eq!(inputs.mortality_percent, 2.0);
    }
}
