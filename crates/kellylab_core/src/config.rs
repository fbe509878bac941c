//! Simulation configuration.

use serde::{Deserialize, Serialize};

use crate::error::SweepError;

fn default_num_experiments() -> usize {
    100
}

fn default_num_rounds() -> usize {
    5000
}

fn default_num_threads() -> usize {
    1
}

/// How much Monte Carlo work to spend on every parameter tuple, and how
/// many execution contexts to spread the grid across.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Independent experiments per tuple; the median is taken over these
    #[serde(default = "default_num_experiments")]
    pub num_experiments: usize,
    /// Rounds per experiment; one strategy invocation per round
    #[serde(default = "default_num_rounds")]
    pub num_rounds: usize,
    /// Execution contexts the grid is partitioned across
    #[serde(default = "default_num_threads")]
    pub num_threads: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            num_experiments: default_num_experiments(),
            num_rounds: default_num_rounds(),
            num_threads: default_num_threads(),
        }
    }
}

impl SimulationConfig {
    /// Reject zero counts before any resources are committed
    pub fn validate(&self) -> Result<(), SweepError> {
        if self.num_experiments == 0 {
            return Err(SweepError::Config(
                "num_experiments must be at least 1".to_string(),
            ));
        }
        if self.num_rounds == 0 {
            return Err(SweepError::Config(
                "num_rounds must be at least 1".to_string(),
            ));
        }
        if self.num_threads == 0 {
            return Err(SweepError::Config(
                "num_threads must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
