//! Parameter sweep sensitivity analysis module.
//!
//! This module evaluates the profit model over grids of input values to show
//! how margins respond to prices and production parameters.
//!
//! # One-Dimensional Sweeps
//!
//! ```ignore
//! use feedlot_core::analysis::{AxisRange, SweepAxis, sweep_1d};
//!
//! let range = AxisRange::new(SweepAxis::SalePrice, 2_000.0, 6_000.0, 81);
//! let curve = sweep_1d(&inputs.validate(), &range)?;
//! let slope = curve.elasticity_at(3_500.0);
//! ```
//!
//! # Margin Maps
//!
//! `sweep_2d` evaluates every cell of a rows × cols grid and stores the net
//! margins in a row-major [`SweepGrid`]. `breakeven_locus` gives the sale
//! price that zeroes the margin for each row, to overlay on the map.
//!
//! # Combined Mode
//!
//! `analyze` runs everything the dashboard needs in one call, driven by
//! [`SweepSettings`].

mod config;
mod evaluator;
mod population;

pub use config::*;
pub use evaluator::*;
pub use population::*;
