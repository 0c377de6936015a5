//! Feedlot profitability simulation library
//!
//! This crate provides the deterministic economics of a cattle fattening cycle.
//! It supports:
//! - A per-head profit model (margins, breakeven prices, returns, days on feed)
//! - One-dimensional price sweeps (sensitivity curves and local elasticity)
//! - Two-dimensional price sweeps (net margin maps) with a breakeven locus
//! - Population aggregation with mortality
//! - Flat scenario documents with defaults for missing fields
//!
//! # Builder DSL
//!
//! Use the fluent builder API for ergonomic scenario setup:
//!
//! ```ignore
//! use feedlot_core::config::ScenarioBuilder;
//! use feedlot_core::profit::evaluate;
//!
//! let inputs = ScenarioBuilder::new()
//!     .purchase(3_000.0, 200.0)
//!     .sale(3_500.0, 300.0)
//!     .feed(60_000.0, 8.0)
//!     .daily_gain(1.5)
//!     .overhead_per_day(20.0)
//!     .health_cost(1_000.0)
//!     .build();
//!
//! let result = evaluate(&inputs.validate());
//! println!("Net margin per head: {:.2}", result.net_margin);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod analysis;
pub mod error;
pub mod profit;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use config::ScenarioBuilder;
pub use model::{ProfitResult, ScenarioDocument, ScenarioInputs, ValidatedInputs};
pub use profit::{evaluate, evaluate_scenario};
