//! Kelly-criterion strategy sweep engine
//!
//! This crate lets an operator author an arbitrary numeric strategy
//! function of named parameters and brute-force-sweeps a grid of
//! parameter values, searching for the combination that maximizes the
//! long-run *median* geometric growth rate of repeatedly-applied
//! multiplicative outcomes — a simulation-based analogue of the Kelly
//! criterion.
//!
//! The pipeline: parameter ranges expand into the cartesian product of
//! concrete tuples; the strategy source compiles once per execution
//! context; each tuple runs a Monte Carlo trial (log-space wealth
//! accumulation, ruin detection, median aggregation); a fixed pool of
//! threads processes statically partitioned slices of the grid and the
//! results merge into one collection, or the whole run fails with the
//! first error.
//!
//! # Example
//!
//! ```ignore
//! use kellylab_core::{ParameterRange, SimulationConfig, grid_size, run_sweep, best_result};
//!
//! let ranges = vec![ParameterRange::new("bet", 0.0, 1.0, 0.05)];
//! let source = r#"
//!     // 50% chance to win 80%, 50% to lose 50%
//!     let win = random() < 0.5;
//!     let edge = if win { 0.8 } else { -0.5 };
//!     1.0 + edge * bet
//! "#;
//!
//! assert_eq!(grid_size(&ranges), 21);
//! let config = SimulationConfig { num_threads: 4, ..Default::default() };
//! let results = run_sweep(&ranges, source, &config)?;
//! let best = best_result(&results).unwrap();
//! println!("optimal bet: {}", best.tuple);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod config;
pub mod error;
pub mod grid;
pub mod strategy;
pub mod sweep;
pub mod trial;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use config::SimulationConfig;
pub use error::{CompileError, GridError, SweepError};
pub use grid::{LARGE_GRID_THRESHOLD, generate_tuples, grid_size};
pub use model::{ParameterRange, ParameterTuple, SimulationResult, best_result};
pub use strategy::{Strategy, compile_check};
pub use sweep::run_sweep;
