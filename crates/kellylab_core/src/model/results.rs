//! Result types produced by a sweep run.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One concrete assignment of values to all swept parameters, in declared
/// order. Immutable once produced; doubles as the identity/label of its
/// result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterTuple {
    entries: Vec<(String, f64)>,
}

impl ParameterTuple {
    pub fn new(entries: Vec<(String, f64)>) -> Self {
        Self { entries }
    }

    /// An empty tuple: the single grid point of a zero-dimensional sweep
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Parameter values in declared order, the order the strategy
    /// function receives them
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().map(|(_, v)| *v)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| *v)
    }

    pub fn entries(&self) -> &[(String, f64)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for ParameterTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name}={value}")?;
        }
        Ok(())
    }
}

/// Outcome of the Monte Carlo trial for one parameter tuple.
///
/// `median_growth_rate` is a signed per-round fraction: `-1` is total
/// ruin, `0` break-even, positive is growth. Percentage conversion is the
/// consumer's concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub tuple: ParameterTuple,
    pub median_growth_rate: f64,
    pub median_terminal_wealth: f64,
}

/// The result with the highest median growth rate. Ties keep the earliest
/// result, so the output is stable for flat regions of the surface.
pub fn best_result(results: &[SimulationResult]) -> Option<&SimulationResult> {
    results.iter().reduce(|best, candidate| {
        if candidate.median_growth_rate > best.median_growth_rate {
            candidate
        } else {
            best
        }
    })
}
