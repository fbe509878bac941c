//! Tests for grid generation across multiple ranges
//!
//! These tests verify that:
//! - Grid size follows `floor((max-min)/effectiveStep)+1` per dimension
//! - Multi-range grids are the product across dimensions
//! - Generated values stay in bounds and rounded to 4 decimals
//! - Degenerate and inverted ranges behave as documented

use crate::grid::{generate_tuples, grid_size};
use crate::model::ParameterRange;

#[test]
fn test_single_range_size_formula() {
    let cases = [
        (0.0, 1.0, 0.1, 11),
        (0.0, 1.0, 0.25, 5),
        (0.0, 1.0, 0.3, 4),
        (0.0, 10.0, 1.0, 11),
        (5.0, 5.0, 0.5, 1),
        // step <= 0 degenerates to one whole-range step: both endpoints
        (2.0, 5.0, 0.0, 2),
        (2.0, 5.0, -1.0, 2),
        // min == max with non-positive step: a single point
        (3.0, 3.0, 0.0, 1),
    ];

    for (min, max, step, expected) in cases {
        let ranges = vec![ParameterRange::new("x", min, max, step)];
        assert_eq!(
            grid_size(&ranges),
            expected,
            "range [{min}, {max}] step {step}"
        );
        assert_eq!(generate_tuples(&ranges).unwrap().len(), expected);
    }
}

#[test]
fn test_grid_size_is_product_of_dimensions() {
    let ranges = vec![
        ParameterRange::new("a", 0.0, 1.0, 0.1),  // 11
        ParameterRange::new("b", 0.0, 1.0, 0.25), // 5
        ParameterRange::new("c", 0.0, 2.0, 1.0),  // 3
    ];
    assert_eq!(grid_size(&ranges), 11 * 5 * 3);
    assert_eq!(generate_tuples(&ranges).unwrap().len(), 11 * 5 * 3);
}

#[test]
fn test_inverted_dimension_empties_whole_grid() {
    let ranges = vec![
        ParameterRange::new("a", 0.0, 1.0, 0.1),
        ParameterRange::new("b", 2.0, 1.0, 0.1),
        ParameterRange::new("c", 0.0, 1.0, 0.1),
    ];
    assert_eq!(grid_size(&ranges), 0);
    assert!(generate_tuples(&ranges).unwrap().is_empty());
}

#[test]
fn test_values_in_bounds_and_rounded() {
    let ranges = vec![
        ParameterRange::new("bet", 0.0, 1.0, 0.07),
        ParameterRange::new("lev", 1.0, 3.0, 0.6),
    ];
    let tuples = generate_tuples(&ranges).unwrap();
    assert_eq!(tuples.len(), grid_size(&ranges));

    for tuple in &tuples {
        for (range, value) in [
            (&ranges[0], tuple.get("bet").unwrap()),
            (&ranges[1], tuple.get("lev").unwrap()),
        ] {
            assert!(value >= range.min - 1e-7, "{} below min", tuple);
            assert!(value <= range.max + 1e-7, "{} above max", tuple);
            // Rounded to 4 decimals
            assert!(((value * 10_000.0).round() / 10_000.0 - value).abs() < 1e-12);
        }
    }
}

#[test]
fn test_tuples_carry_names_in_declared_order() {
    let ranges = vec![
        ParameterRange::new("first", 0.0, 0.0, 1.0),
        ParameterRange::new("second", 1.0, 1.0, 1.0),
    ];
    let tuples = generate_tuples(&ranges).unwrap();
    assert_eq!(tuples.len(), 1);
    let names: Vec<&str> = tuples[0].names().collect();
    assert_eq!(names, vec!["first", "second"]);
    let values: Vec<f64> = tuples[0].values().collect();
    assert_eq!(values, vec![0.0, 1.0]);
}
