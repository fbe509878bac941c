//! The Monte Carlo trial: one parameter tuple reduced to a median growth
//! rate and terminal wealth.
//!
//! Wealth is a product of up to thousands of per-round multipliers, so
//! everything runs in log space; the terminal log-wealth of each
//! experiment is `sum(ln(m))`, and ruin is `-inf`. The median (not the
//! mean) of the experiment outcomes is the objective: multiplicative
//! growth is right-skewed, and median growth is what a typical path
//! experiences.

use crate::config::SimulationConfig;
use crate::error::SweepError;
use crate::model::{ParameterTuple, SimulationResult};
use crate::strategy::Strategy;

/// Run the full trial for one tuple.
///
/// A strategy evaluation error aborts the trial and propagates; a logic
/// bug likely affects every tuple, so skipping would mislead the
/// comparison. A non-finite multiplier is not an error: it clamps to `0`
/// and the experiment is ruined.
pub fn run_trial(
    strategy: &Strategy,
    tuple: &ParameterTuple,
    config: &SimulationConfig,
) -> Result<SimulationResult, SweepError> {
    let values: Vec<f64> = tuple.values().collect();
    let mut outcomes = Vec::with_capacity(config.num_experiments);

    for _ in 0..config.num_experiments {
        let mut log_wealth = 0.0;
        let mut ruined = false;

        for _ in 0..config.num_rounds {
            let mut m = strategy.evaluate(&values)?;
            if !m.is_finite() {
                m = 0.0;
            }
            if m <= 0.0 {
                // Permanent ruin: ln(0) is -inf, no recovery
                ruined = true;
                break;
            }
            log_wealth += m.ln();
        }

        outcomes.push(if ruined { f64::NEG_INFINITY } else { log_wealth });
    }

    // total_cmp gives -inf a definite place; NaN cannot occur here
    outcomes.sort_by(f64::total_cmp);
    let median_log = median_log_wealth(&outcomes);

    let (median_growth_rate, median_terminal_wealth) = if median_log == f64::NEG_INFINITY {
        (-1.0, 0.0)
    } else {
        (
            (median_log / config.num_rounds as f64).exp() - 1.0,
            median_log.exp(),
        )
    };

    Ok(SimulationResult {
        tuple: tuple.clone(),
        median_growth_rate,
        median_terminal_wealth,
    })
}

/// Median of sorted per-experiment log outcomes.
///
/// Even counts average the two central values, except that either central
/// value being `-inf` forces the median to `-inf` rather than a finite
/// blend.
pub(crate) fn median_log_wealth(sorted: &[f64]) -> f64 {
    let mid = sorted.len() / 2;
    if sorted.len() % 2 != 0 {
        sorted[mid]
    } else {
        let lo = sorted[mid - 1];
        let hi = sorted[mid];
        if lo == f64::NEG_INFINITY || hi == f64::NEG_INFINITY {
            f64::NEG_INFINITY
        } else {
            (lo + hi) / 2.0
        }
    }
}
