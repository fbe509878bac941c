//! Parameter ranges and per-range value generation.

use serde::{Deserialize, Serialize};

use crate::error::GridError;

/// Tolerance for the inclusive upper bound when counting grid points
const RANGE_EPSILON: f64 = 1e-7;

/// One swept parameter: a named inclusive `[min, max]` interval walked in
/// increments of `step`.
///
/// A non-positive `step` degenerates to a single step spanning the whole
/// range (`max - min`, or `1` if that is also non-positive), so a
/// misconfigured range can never iterate forever.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterRange {
    /// Parameter name; must be a valid identifier, unique within a sweep
    pub name: String,
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl ParameterRange {
    pub fn new(name: impl Into<String>, min: f64, max: f64, step: f64) -> Self {
        Self {
            name: name.into(),
            min,
            max,
            step,
        }
    }

    /// The step actually used for iteration
    pub fn effective_step(&self) -> f64 {
        if self.step > 0.0 {
            self.step
        } else if self.max - self.min > 0.0 {
            self.max - self.min
        } else {
            1.0
        }
    }

    /// Number of grid points this range contributes.
    ///
    /// `max < min` contributes zero points, collapsing the whole grid.
    pub fn count(&self) -> usize {
        if self.max < self.min {
            return 0;
        }
        (((self.max - self.min) / self.effective_step()) + RANGE_EPSILON) as usize + 1
    }

    /// Grid values, computed index-based (`min + k*step`) so long sweeps
    /// cannot drift, each rounded to 4 decimal places.
    pub fn values(&self) -> Vec<f64> {
        let step = self.effective_step();
        (0..self.count())
            .map(|k| round4(self.min + step * k as f64))
            .collect()
    }

    /// Reject empty or non-identifier names before tuple generation
    pub fn validate(&self) -> Result<(), GridError> {
        if !is_valid_identifier(&self.name) {
            return Err(GridError::InvalidParameterName(self.name.clone()));
        }
        Ok(())
    }
}

/// Round to 4 decimal places; suppresses floating-point noise so tuple
/// values compare and display cleanly
pub(crate) fn round4(v: f64) -> f64 {
    (v * 10_000.0).round() / 10_000.0
}

fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}
