//! Grid generation: expanding parameter ranges into the cartesian
//! product of concrete value tuples.
//!
//! Generation is pure and cheap relative to simulation, so the grid is
//! regenerated wholesale on every run and `grid_size` doubles as a
//! pre-flight preview before the caller commits resources.

use rustc_hash::FxHashSet;

use crate::error::GridError;
use crate::model::{ParameterRange, ParameterTuple};

/// Grid sizes above this warrant a caller-side confirmation before a run
/// is dispatched. The engine only publishes the number; the decision
/// belongs to the caller.
pub const LARGE_GRID_THRESHOLD: usize = 50_000;

/// Number of tuples `generate_tuples` would produce: the product of the
/// per-range counts, `1` for an empty range list.
pub fn grid_size(ranges: &[ParameterRange]) -> usize {
    ranges.iter().map(ParameterRange::count).product()
}

/// Expand ranges into the full cartesian product of parameter tuples.
///
/// Tuples are produced in row-major order: the last range varies fastest.
/// An empty range list yields one empty tuple; any range with
/// `max < min` collapses the whole grid to empty.
pub fn generate_tuples(ranges: &[ParameterRange]) -> Result<Vec<ParameterTuple>, GridError> {
    let mut seen = FxHashSet::default();
    for range in ranges {
        range.validate()?;
        if !seen.insert(range.name.as_str()) {
            return Err(GridError::DuplicateParameter(range.name.clone()));
        }
    }

    if ranges.is_empty() {
        return Ok(vec![ParameterTuple::empty()]);
    }

    let values: Vec<Vec<f64>> = ranges.iter().map(ParameterRange::values).collect();
    if values.iter().any(Vec::is_empty) {
        return Ok(Vec::new());
    }

    let total: usize = values.iter().map(Vec::len).product();
    let mut tuples = Vec::with_capacity(total);
    let mut indices = vec![0usize; ranges.len()];

    loop {
        let entries: Vec<(String, f64)> = ranges
            .iter()
            .zip(values.iter())
            .zip(indices.iter())
            .map(|((range, vals), &idx)| (range.name.clone(), vals[idx]))
            .collect();
        tuples.push(ParameterTuple::new(entries));

        // Odometer increment, last dimension fastest
        let mut dim = ranges.len();
        loop {
            if dim == 0 {
                return Ok(tuples);
            }
            dim -= 1;
            indices[dim] += 1;
            if indices[dim] < values[dim].len() {
                break;
            }
            indices[dim] = 0;
        }
    }
}
