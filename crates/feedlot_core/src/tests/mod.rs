//! Integration tests for the feedlot profit model and sweep engine
//!
//! Tests are organized by topic:
//! - `profit_model` - Per-head economics, golden values, degenerate inputs
//! - `sweeps` - Sensitivity curves, elasticity, margin maps, breakeven locus
//! - `analysis` - The combined dashboard analysis

mod analysis;
mod sweeps;
