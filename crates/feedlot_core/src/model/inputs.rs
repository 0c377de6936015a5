//! Scenario inputs and the validation boundary in front of the profit model.

use serde::{Deserialize, Serialize};

/// Replacement for a non-positive exit weight
pub const MIN_EXIT_WEIGHT: f64 = 1e-9;
/// Replacement for a non-positive average daily gain
pub const MIN_DAILY_GAIN: f64 = 1e-6;

/// Raw scenario parameters as entered by a user or read from a document.
///
/// Nothing here is guaranteed finite or positive. Call [`ScenarioInputs::validate`]
/// to obtain the sanitized form consumed by the profit model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScenarioInputs {
    /// Purchase price, currency per kg
    #[serde(alias = "precioCompra")]
    pub purchase_price: f64,
    /// Sale price, currency per kg
    #[serde(alias = "precioVenta")]
    pub sale_price: f64,
    /// Live weight at purchase, kg
    #[serde(alias = "pesoCompra")]
    pub purchase_weight: f64,
    /// Live weight at exit, kg
    #[serde(alias = "pesoSalida")]
    pub exit_weight: f64,
    /// Feed price, currency per metric ton
    #[serde(alias = "precioPorTn")]
    pub feed_price_per_ton: f64,
    /// kg of feed per kg of weight gained
    #[serde(alias = "conversion")]
    pub feed_conversion_ratio: f64,
    /// kg gained per day
    #[serde(alias = "adpv")]
    pub average_daily_gain: f64,
    /// Yard fee, currency per head per day
    #[serde(alias = "estadia")]
    pub overhead_per_day: f64,
    /// Fixed health cost per head
    #[serde(alias = "sanidad")]
    pub health_cost_per_head: f64,
    /// Number of head purchased
    #[serde(alias = "numCabezas")]
    pub head_count: f64,
    /// Expected deaths over the cycle, percent of head count
    #[serde(alias = "mortandad")]
    pub mortality_percent: f64,
}

impl Default for ScenarioInputs {
    fn default() -> Self {
        Self {
            purchase_price: 3_000.0,
            sale_price: 3_500.0,
            purchase_weight: 200.0,
            exit_weight: 460.0,
            feed_price_per_ton: 64_000.0,
            feed_conversion_ratio: 8.0,
            average_daily_gain: 1.2,
            overhead_per_day: 30.0,
            health_cost_per_head: 1_200.0,
            head_count: 100.0,
            mortality_percent: 1.0,
        }
    }
}

impl ScenarioInputs {
    /// Sanitize every field once, producing inputs the model can divide by safely.
    #[must_use]
    pub fn validate(&self) -> ValidatedInputs {
        ValidatedInputs {
            purchase_price: finite_or_zero(self.purchase_price),
            sale_price: finite_or_zero(self.sale_price),
            purchase_weight: finite_or_zero(self.purchase_weight),
            exit_weight: positive_or(self.exit_weight, MIN_EXIT_WEIGHT),
            feed_price_per_ton: finite_or_zero(self.feed_price_per_ton),
            feed_conversion_ratio: finite_or_zero(self.feed_conversion_ratio),
            average_daily_gain: positive_or(self.average_daily_gain, MIN_DAILY_GAIN),
            overhead_per_day: finite_or_zero(self.overhead_per_day),
            health_cost_per_head: finite_or_zero(self.health_cost_per_head),
            head_count: finite_or_zero(self.head_count),
            mortality_percent: finite_or_zero(self.mortality_percent),
        }
    }

    /// Read a field by its identifier
    #[must_use]
    pub fn get(&self, field: InputField) -> f64 {
        match field {
            InputField::PurchasePrice => self.purchase_price,
            InputField::SalePrice => self.sale_price,
            InputField::PurchaseWeight => self.purchase_weight,
            InputField::ExitWeight => self.exit_weight,
            InputField::FeedPricePerTon => self.feed_price_per_ton,
            InputField::FeedConversionRatio => self.feed_conversion_ratio,
            InputField::AverageDailyGain => self.average_daily_gain,
            InputField::OverheadPerDay => self.overhead_per_day,
            InputField::HealthCostPerHead => self.health_cost_per_head,
            InputField::HeadCount => self.head_count,
            InputField::MortalityPercent => self.mortality_percent,
        }
    }

    /// Overwrite a field by its identifier
    pub fn set(&mut self, field: InputField, value: f64) {
        let slot = match field {
            InputField::PurchasePrice => &mut self.purchase_price,
            InputField::SalePrice => &mut self.sale_price,
            InputField::PurchaseWeight => &mut self.purchase_weight,
            InputField::ExitWeight => &mut self.exit_weight,
            InputField::FeedPricePerTon => &mut self.feed_price_per_ton,
            InputField::FeedConversionRatio => &mut self.feed_conversion_ratio,
            InputField::AverageDailyGain => &mut self.average_daily_gain,
            InputField::OverheadPerDay => &mut self.overhead_per_day,
            InputField::HealthCostPerHead => &mut self.health_cost_per_head,
            InputField::HeadCount => &mut self.head_count,
            InputField::MortalityPercent => &mut self.mortality_percent,
        };
        *slot = value;
    }
}

/// Identifies one field of [`ScenarioInputs`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InputField {
    PurchasePrice,
    SalePrice,
    PurchaseWeight,
    ExitWeight,
    FeedPricePerTon,
    FeedConversionRatio,
    AverageDailyGain,
    OverheadPerDay,
    HealthCostPerHead,
    HeadCount,
    MortalityPercent,
}

impl InputField {
    pub const ALL: [InputField; 11] = [
        InputField::PurchasePrice,
        InputField::SalePrice,
        InputField::HeadCount,
        InputField::PurchaseWeight,
        InputField::ExitWeight,
        InputField::FeedPricePerTon,
        InputField::FeedConversionRatio,
        InputField::MortalityPercent,
        InputField::AverageDailyGain,
        InputField::OverheadPerDay,
        InputField::HealthCostPerHead,
    ];

    /// Document key
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            InputField::PurchasePrice => "purchasePrice",
            InputField::SalePrice => "salePrice",
            InputField::PurchaseWeight => "purchaseWeight",
            InputField::ExitWeight => "exitWeight",
            InputField::FeedPricePerTon => "feedPricePerTon",
            InputField::FeedConversionRatio => "feedConversionRatio",
            InputField::AverageDailyGain => "averageDailyGain",
            InputField::OverheadPerDay => "overheadPerDay",
            InputField::HealthCostPerHead => "healthCostPerHead",
            InputField::HeadCount => "headCount",
            InputField::MortalityPercent => "mortalityPercent",
        }
    }

    /// Key used by documents exported from the legacy dashboard
    #[must_use]
    pub fn legacy_key(self) -> &'static str {
        match self {
            InputField::PurchasePrice => "precioCompra",
            InputField::SalePrice => "precioVenta",
            InputField::PurchaseWeight => "pesoCompra",
            InputField::ExitWeight => "pesoSalida",
            InputField::FeedPricePerTon => "precioPorTn",
            InputField::FeedConversionRatio => "conversion",
            InputField::AverageDailyGain => "adpv",
            InputField::OverheadPerDay => "estadia",
            InputField::HealthCostPerHead => "sanidad",
            InputField::HeadCount => "numCabezas",
            InputField::MortalityPercent => "mortandad",
        }
    }

    /// Resolve a document key, accepting both naming schemes
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|f| f.key() == key || f.legacy_key() == key)
    }

    /// Human-readable label with units
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            InputField::PurchasePrice => "Purchase price ($/kg)",
            InputField::SalePrice => "Sale price ($/kg)",
            InputField::PurchaseWeight => "Purchase weight (kg)",
            InputField::ExitWeight => "Exit weight (kg)",
            InputField::FeedPricePerTon => "Feed price ($/t)",
            InputField::FeedConversionRatio => "Feed conversion (kg/kg)",
            InputField::AverageDailyGain => "Average daily gain (kg/day)",
            InputField::OverheadPerDay => "Yard fee ($/day)",
            InputField::HealthCostPerHead => "Health cost ($/head)",
            InputField::HeadCount => "Head count",
            InputField::MortalityPercent => "Mortality (%)",
        }
    }
}

/// Sanitized scenario inputs.
///
/// Every field is finite; `exit_weight` and `average_daily_gain` are strictly
/// positive. Only constructible through [`ScenarioInputs::validate`] or
/// [`ValidatedInputs::with_field`], so the invariant holds everywhere the model
/// sees one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedInputs {
    purchase_price: f64,
    sale_price: f64,
    purchase_weight: f64,
    exit_weight: f64,
    feed_price_per_ton: f64,
    feed_conversion_ratio: f64,
    average_daily_gain: f64,
    overhead_per_day: f64,
    health_cost_per_head: f64,
    head_count: f64,
    mortality_percent: f64,
}

impl ValidatedInputs {
    pub fn purchase_price(&self) -> f64 {
        self.purchase_price
    }

    pub fn sale_price(&self) -> f64 {
        self.sale_price
    }

    pub fn purchase_weight(&self) -> f64 {
        self.purchase_weight
    }

    pub fn exit_weight(&self) -> f64 {
        self.exit_weight
    }

    pub fn feed_price_per_ton(&self) -> f64 {
        self.feed_price_per_ton
    }

    pub fn feed_conversion_ratio(&self) -> f64 {
        self.feed_conversion_ratio
    }

    pub fn average_daily_gain(&self) -> f64 {
        self.average_daily_gain
    }

    pub fn overhead_per_day(&self) -> f64 {
        self.overhead_per_day
    }

    pub fn health_cost_per_head(&self) -> f64 {
        self.health_cost_per_head
    }

    pub fn head_count(&self) -> f64 {
        self.head_count
    }

    pub fn mortality_percent(&self) -> f64 {
        self.mortality_percent
    }

    /// Substitute one field, applying the same sanitation as [`ScenarioInputs::validate`].
    #[must_use]
    pub fn with_field(&self, field: InputField, value: f64) -> Self {
        let mut raw = self.to_raw();
        raw.set(field, value);
        raw.validate()
    }

    /// Raise the daily gain to at least `floor`.
    ///
    /// The interactive dashboard never sweeps below a realistic gain even though
    /// the model itself accepts anything above [`MIN_DAILY_GAIN`].
    #[must_use]
    pub fn with_min_daily_gain(&self, floor: f64) -> Self {
        if floor.is_finite() && self.average_daily_gain < floor {
            Self {
                average_daily_gain: floor,
                ..*self
            }
        } else {
            *self
        }
    }

    /// Back to the raw form (for storage or display)
    #[must_use]
    pub fn to_raw(&self) -> ScenarioInputs {
        ScenarioInputs {
            purchase_price: self.purchase_price,
            sale_price: self.sale_price,
            purchase_weight: self.purchase_weight,
            exit_weight: self.exit_weight,
            feed_price_per_ton: self.feed_price_per_ton,
            feed_conversion_ratio: self.feed_conversion_ratio,
            average_daily_gain: self.average_daily_gain,
            overhead_per_day: self.overhead_per_day,
            health_cost_per_head: self.health_cost_per_head,
            head_count: self.head_count,
            mortality_percent: self.mortality_percent,
        }
    }
}

impl From<&ScenarioInputs> for ValidatedInputs {
    fn from(inputs: &ScenarioInputs) -> Self {
        inputs.validate()
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

fn positive_or(value: f64, floor: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        floor
    }
}
