//! Flat key-value scenario documents.
//!
//! Documents are read leniently: every field is optional, numbers may be
//! written as strings with thousands separators, and the key names of the
//! legacy dashboard export are accepted alongside the current ones.
//! Anything that cannot be read as a number is rejected as a whole.

use serde::Serialize;
use serde_json::{Map, Value};

use super::inputs::{InputField, ScenarioInputs};
use crate::error::DocumentError;

/// A partially specified scenario.
///
/// `None` marks a field the document did not provide.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioDocument {
    pub purchase_price: Option<f64>,
    pub sale_price: Option<f64>,
    pub purchase_weight: Option<f64>,
    pub exit_weight: Option<f64>,
    pub feed_price_per_ton: Option<f64>,
    pub feed_conversion_ratio: Option<f64>,
    pub average_daily_gain: Option<f64>,
    pub overhead_per_day: Option<f64>,
    pub health_cost_per_head: Option<f64>,
    pub head_count: Option<f64>,
    pub mortality_percent: Option<f64>,
}

impl ScenarioDocument {
    /// Parse a JSON document
    pub fn from_json(text: &str) -> Result<Self, DocumentError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(&value)
    }

    /// Read a document from an already parsed tree (JSON or YAML).
    ///
    /// Unknown keys are ignored; `null` counts as missing.
    pub fn from_value(value: &Value) -> Result<Self, DocumentError> {
        let Value::Object(map) = value else {
            return Err(DocumentError::NotAnObject);
        };

        let mut doc = Self::default();
        for (key, raw) in map {
            let Some(field) = InputField::from_key(key) else {
                continue;
            };
            let parsed = read_number(raw).map_err(|reason| DocumentError::InvalidField {
                field: key.clone(),
                reason,
            })?;
            if let Some(v) = parsed {
                doc.set(field, v);
            }
        }
        Ok(doc)
    }

    /// Value of a field, if the document provided one
    #[must_use]
    pub fn get(&self, field: InputField) -> Option<f64> {
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
        *slot = Some(value);
    }

    /// Number of fields the document provided
    #[must_use]
    pub fn provided_count(&self) -> usize {
        InputField::ALL
            .iter()
            .filter(|f| self.get(**f).is_some())
            .count()
    }

    /// Resolve against the documented defaults
    #[must_use]
    pub fn into_inputs(self) -> ScenarioInputs {
        let mut inputs = ScenarioInputs::default();
        self.apply_to(&mut inputs);
        inputs
    }

    /// Overwrite only the fields this document provides
    pub fn apply_to(&self, inputs: &mut ScenarioInputs) {
        for field in InputField::ALL {
            if let Some(v) = self.get(field) {
                inputs.set(field, v);
            }
        }
    }
}

impl From<&ScenarioInputs> for ScenarioDocument {
    fn from(inputs: &ScenarioInputs) -> Self {
        let mut doc = Self::default();
        for field in InputField::ALL {
            doc.set(field, inputs.get(field));
        }
        doc
    }
}

/// Serialize inputs as a pretty-printed flat JSON document
pub fn to_json_pretty(inputs: &ScenarioInputs) -> Result<String, DocumentError> {
    let mut map = Map::new();
    for field in InputField::ALL {
        map.insert(field.key().to_string(), Value::from(inputs.get(field)));
    }
    Ok(serde_json::to_string_pretty(&Value::Object(map))?)
}

/// Parse a user-typed amount such as `"64,000"` or `" 1 200.5 "`.
///
/// Whitespace and commas are stripped before parsing. Returns `None` for
/// anything that does not yield a finite number.
#[must_use]
pub fn parse_amount(text: &str) -> Option<f64> {
    let cleaned: String = text
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn read_number(value: &Value) -> Result<Option<f64>, String> {
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => n
            .as_f64()
            .map(Some)
            .ok_or_else(|| format!("{n} is not representable")),
        Value::String(s) => parse_amount(s)
            .map(Some)
            .ok_or_else(|| format!("'{s}' is not a number")),
        Value::Bool(_) => Err("expected a number, found a boolean".to_string()),
        Value::Array(_) => Err("expected a number, found a list".to_string()),
        Value::Object(_) => Err("expected a number, found an object".to_string()),
    }
}
