//! Configuration types for parameter sweep analysis.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;
use crate::model::InputField;

/// Model field that a sweep can vary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SweepAxis {
    PurchasePrice,
    SalePrice,
    PurchaseWeight,
    ExitWeight,
    #[serde(rename = "feed-price")]
    FeedPricePerTon,
    #[serde(rename = "feed-conversion")]
    FeedConversionRatio,
    #[serde(rename = "daily-gain")]
    AverageDailyGain,
    #[serde(rename = "overhead")]
    OverheadPerDay,
    #[serde(rename = "health-cost")]
    HealthCostPerHead,
}

impl SweepAxis {
    pub const ALL: [SweepAxis; 9] = [
        SweepAxis::PurchasePrice,
        SweepAxis::SalePrice,
        SweepAxis::PurchaseWeight,
        SweepAxis::ExitWeight,
        SweepAxis::FeedPricePerTon,
        SweepAxis::FeedConversionRatio,
        SweepAxis::AverageDailyGain,
        SweepAxis::OverheadPerDay,
        SweepAxis::HealthCostPerHead,
    ];

    /// The input field this axis substitutes
    #[must_use]
    pub fn field(self) -> InputField {
        match self {
            SweepAxis::PurchasePrice => InputField::PurchasePrice,
            SweepAxis::SalePrice => InputField::SalePrice,
            SweepAxis::PurchaseWeight => InputField::PurchaseWeight,
            SweepAxis::ExitWeight => InputField::ExitWeight,
            SweepAxis::FeedPricePerTon => InputField::FeedPricePerTon,
            SweepAxis::FeedConversionRatio => InputField::FeedConversionRatio,
            SweepAxis::AverageDailyGain => InputField::AverageDailyGain,
            SweepAxis::OverheadPerDay => InputField::OverheadPerDay,
            SweepAxis::HealthCostPerHead => InputField::HealthCostPerHead,
        }
    }

    /// Get a descriptive label for display
    #[must_use]
    pub fn label(self) -> &'static str {
        self.field().label()
    }

    /// Command-line name
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            SweepAxis::PurchasePrice => "purchase-price",
            SweepAxis::SalePrice => "sale-price",
            SweepAxis::PurchaseWeight => "purchase-weight",
            SweepAxis::ExitWeight => "exit-weight",
            SweepAxis::FeedPricePerTon => "feed-price",
            SweepAxis::FeedConversionRatio => "feed-conversion",
            SweepAxis::AverageDailyGain => "daily-gain",
            SweepAxis::OverheadPerDay => "overhead",
            SweepAxis::HealthCostPerHead => "health-cost",
        }
    }
}

impl fmt::Display for SweepAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SweepAxis {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SweepAxis::ALL
            .into_iter()
            .find(|axis| axis.name() == s)
            .ok_or_else(|| {
                let names: Vec<&str> = SweepAxis::ALL.iter().map(|a| a.name()).collect();
                format!("unknown axis '{s}' (expected one of: {})", names.join(", "))
            })
    }
}

/// `count` evenly spaced values from `start` to `end`, both inclusive.
///
/// A single point yields `[start]`. Zero points is a precondition violation.
pub fn linear_space(start: f64, end: f64, count: usize) -> Result<Vec<f64>, AnalysisError> {
    if count < 1 {
        return Err(AnalysisError::EmptyGrid { count });
    }
    let step = if count > 1 {
        (end - start) / (count - 1) as f64
    } else {
        0.0
    };
    Ok((0..count).map(|i| start + step * i as f64).collect())
}

/// One swept dimension: which field, over what range, at what resolution
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub axis: SweepAxis,
    /// First grid value
    pub min_value: f64,
    /// Last grid value
    pub max_value: f64,
    /// Number of points (including both ends)
    pub step_count: usize,
}

impl AxisRange {
    #[must_use]
    pub fn new(axis: SweepAxis, min_value: f64, max_value: f64, step_count: usize) -> Self {
        Self {
            axis,
            min_value,
            max_value,
            step_count,
        }
    }

    /// Generate the sweep values
    pub fn sweep_values(&self) -> Result<Vec<f64>, AnalysisError> {
        linear_space(self.min_value, self.max_value, self.step_count)
    }
}

/// N-dimensional grid storage with flat backing array and stride-based indexing.
///
/// Stores values in row-major order where the last dimension varies fastest.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepGrid<T> {
    /// The data stored in row-major order
    data: Vec<T>,
    /// Shape of each dimension (e.g., [60, 81] for a 60x81 map)
    shape: Vec<usize>,
    /// Precomputed strides for index calculation
    #[serde(skip)]
    strides: Vec<usize>,
}

impl<T> SweepGrid<T> {
    /// Create a grid from existing data. Data must be in row-major order.
    pub fn from_data(shape: Vec<usize>, data: Vec<T>) -> Result<Self, AnalysisError> {
        let total_size: usize = shape.iter().product();
        if data.len() != total_size {
            return Err(AnalysisError::ShapeMismatch {
                expected: total_size,
                actual: data.len(),
            });
        }
        let strides = compute_strides(&shape);
        Ok(Self {
            data,
            shape,
            strides,
        })
    }

    /// Get the shape of the grid
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Get the number of dimensions
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Get the total number of elements
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the grid is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Convert multi-dimensional indices to flat index
    pub fn flat_index(&self, indices: &[usize]) -> Option<usize> {
        if indices.len() != self.shape.len() {
            return None;
        }
        let mut flat = 0;
        for (i, (&idx, &size)) in indices.iter().zip(&self.shape).enumerate() {
            if idx >= size {
                return None;
            }
            flat += idx * self.strides[i];
        }
        Some(flat)
    }

    /// Get a reference to the value at the given indices
    pub fn get(&self, indices: &[usize]) -> Option<&T> {
        self.flat_index(indices).map(|i| &self.data[i])
    }

    /// Get a reference to the underlying data
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Contiguous slice for one row of a 2D grid
    pub fn row(&self, row: usize) -> Option<&[T]> {
        if self.ndim() != 2 || row >= self.shape[0] {
            return None;
        }
        let cols = self.shape[1];
        Some(&self.data[row * cols..(row + 1) * cols])
    }

    /// Iterate over the rows of a 2D grid
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        let (rows, cols) = match *self.shape.as_slice() {
            [rows, cols] => (rows, cols),
            _ => (0, 1),
        };
        self.data.chunks(cols.max(1)).take(rows)
    }
}

impl SweepGrid<f64> {
    /// Smallest and largest value
    pub fn min_max(&self) -> Option<(f64, f64)> {
        let mut values = self.data.iter().copied();
        let first = values.next()?;
        Some(values.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }
}

/// Compute strides for row-major order
fn compute_strides(shape: &[usize]) -> Vec<usize> {
    if shape.is_empty() {
        return Vec::new();
    }
    let mut strides = vec![1; shape.len()];
    for i in (0..shape.len() - 1).rev() {
        strides[i] = strides[i + 1] * shape[i + 1];
    }
    strides
}

/// Grid ranges used by the dashboard analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepSettings {
    /// Range of the sensitivity curve
    pub curve: AxisRange,
    /// Rows of the margin map
    pub map_rows: AxisRange,
    /// Columns of the margin map
    pub map_cols: AxisRange,
    /// Daily gain floor applied before any sweep (kg/day)
    pub min_daily_gain: f64,
}

impl Default for SweepSettings {
    fn default() -> Self {
        Self {
            curve: AxisRange::new(SweepAxis::SalePrice, 2_000.0, 6_000.0, 81),
            map_rows: AxisRange::new(SweepAxis::PurchasePrice, 2_000.0, 6_000.0, 60),
            map_cols: AxisRange::new(SweepAxis::SalePrice, 2_000.0, 6_000.0, 81),
            min_daily_gain: 0.01,
        }
    }
}

impl SweepSettings {
    /// Total number of model evaluations one analysis performs
    #[must_use]
    pub fn total_points(&self) -> usize {
        self.curve.step_count
            + self.map_rows.step_count * self.map_cols.step_count
            + self.map_rows.step_count
    }
}
