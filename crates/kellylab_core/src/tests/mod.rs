//! Integration tests for the sweep engine
//!
//! Tests are organized by topic:
//! - `grid` - Grid generation across multiple ranges
//! - `strategy` - Compilation and evaluation of strategy scripts
//! - `trial` - Monte Carlo trial semantics (growth, ruin, medians)
//! - `sweep` - End-to-end runs, parallelism, and failure aggregation

mod grid;
