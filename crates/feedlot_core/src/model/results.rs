use serde::{Deserialize, Serialize};

/// Per-head economics of one fattening cycle.
///
/// Produced fresh by [`crate::profit::evaluate`]; every field is finite.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfitResult {
    /// Purchase price used ($/kg)
    pub net_purchase_price: f64,
    /// Sale price used ($/kg)
    pub net_sale_price: f64,

    // Cost breakdown
    /// Exit weight minus purchase weight (kg), negative for weight loss
    pub weight_gained: f64,
    /// Feed cost of one kg of gain
    pub feed_cost_per_kg_gained: f64,
    pub total_feed_cost: f64,
    pub overhead_cost: f64,
    pub purchase_cost: f64,
    pub revenue: f64,

    /// Gain valued at the sale price, minus its feed cost
    pub feed_margin: f64,
    /// Revenue minus all costs. The primary output.
    pub net_margin: f64,
    pub purchase_to_sale_ratio: f64,
    /// Purchase price at which the net margin is zero, sale price held fixed
    pub breakeven_purchase_price: f64,
    /// Sale price at which the net margin is zero, purchase price held fixed
    pub breakeven_sale_price: f64,
    /// Drop in sale price (%) that would erase the margin
    pub sale_drop_to_breakeven_percent: f64,
    /// Feed, overhead and health cost per kg of gain
    pub cost_per_kg_produced: f64,
    pub overhead_per_kg: f64,
    pub total_investment: f64,
    pub return_on_investment_percent: f64,
    pub monthly_return_percent: f64,
    pub annual_return_percent: f64,
    pub days_on_feed: f64,
}

impl ProfitResult {
    /// True when the cycle has a positive duration.
    ///
    /// Monthly and annual returns are reported as zero otherwise.
    #[must_use]
    pub fn has_feeding_period(&self) -> bool {
        self.days_on_feed > 0.0
    }

    /// True when the cycle loses money
    #[must_use]
    pub fn is_loss(&self) -> bool {
        self.net_margin < 0.0
    }

    /// All numeric fields, in declaration order, paired with their names.
    pub fn fields(&self) -> [(&'static str, f64); 21] {
        [
            ("netPurchasePrice", self.net_purchase_price),
            ("netSalePrice", self.net_sale_price),
            ("weightGained", self.weight_gained),
            ("feedCostPerKgGained", self.feed_cost_per_kg_gained),
            ("totalFeedCost", self.total_feed_cost),
            ("overheadCost", self.overhead_cost),
            ("purchaseCost", self.purchase_cost),
            ("revenue", self.revenue),
            ("feedMargin", self.feed_margin),
            ("netMargin", self.net_margin),
            ("purchaseToSaleRatio", self.purchase_to_sale_ratio),
            ("breakevenPurchasePrice", self.breakeven_purchase_price),
            ("breakevenSalePrice", self.breakeven_sale_price),
            ("saleDropToBreakevenPercent", self.sale_drop_to_breakeven_percent),
            ("costPerKgProduced", self.cost_per_kg_produced),
            ("overheadPerKg", self.overhead_per_kg),
            ("totalInvestment", self.total_investment),
            ("returnOnInvestmentPercent", self.return_on_investment_percent),
            ("monthlyReturnPercent", self.monthly_return_percent),
            ("annualReturnPercent", self.annual_return_percent),
            ("daysOnFeed", self.days_on_feed),
        ]
    }

    /// True when every field is a finite number
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.fields().iter().all(|(_, v)| v.is_finite())
    }
}

/// Herd-level totals derived from a per-head result
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PopulationSummary {
    /// Fraction of head that reach sale, in [0, 1]
    pub survival_rate: f64,
    pub realized_heads: f64,
    pub aggregate_net_margin: f64,
    /// Capital committed for every purchased head, survivors or not
    pub aggregate_investment: f64,
}
