//! Data types shared across the engine.

pub mod range;
pub mod results;

pub use range::ParameterRange;
pub use results::{ParameterTuple, SimulationResult, best_result};
