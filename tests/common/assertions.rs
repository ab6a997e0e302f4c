//! Assertion utilities for testing.
//!
//! This module provides helper functions for making assertions in tests,
//! particularly for floating-point comparisons and fields with undefined cells.

use pollenfield::Field;

/// Default epsilon for floating-point comparisons
pub const DEFAULT_EPSILON: f64 = 1e-9;

/// Assert that two floating-point values are approximately equal.
///
/// # Arguments
///
/// * `actual` - The actual value
/// * `expected` - The expected value
/// * `epsilon` - The maximum allowed difference (default: 1e-9)
///
/// # Panics
///
/// Panics if the absolute difference between `actual` and `expected` is greater than `epsilon`.
pub fn assert_approx_eq(actual: f64, expected: f64, epsilon: Option<f64>) {
    let epsilon = epsilon.unwrap_or(DEFAULT_EPSILON);
    let diff = (actual - expected).abs();

    assert!(
        diff <= epsilon,
        "Values not approximately equal: actual = {}, expected = {}, diff = {}, epsilon = {}",
        actual,
        expected,
        diff,
        epsilon
    );
}

/// Assert that two sequences are element-wise equal, treating `NaN == NaN`.
pub fn assert_series_eq(actual: &[f64], expected: &[f64]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "Series have different lengths: actual = {}, expected = {}",
        actual.len(),
        expected.len()
    );

    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        assert!(
            (a.is_nan() && e.is_nan()) || a.to_bits() == e.to_bits(),
            "Series differ at index {}: actual = {}, expected = {}",
            i,
            a,
            e
        );
    }
}

/// Assert that two fields have the same shape and the same cells, with
/// undefined cells matching undefined cells.
pub fn assert_fields_eq(actual: &Field, expected: &Field) {
    assert_eq!(actual.dim(), expected.dim(), "Fields have different shapes");
    for ((idx, a), e) in actual.indexed_iter().zip(expected.iter()) {
        assert!(
            (a.is_nan() && e.is_nan()) || a == e,
            "Fields differ at {:?}: actual = {}, expected = {}",
            idx,
            a,
            e
        );
    }
}

/// Assert that every defined cell of `field` equals `value`
pub fn assert_constant_where_defined(field: &Field, value: f64) {
    let mut defined = 0;
    for (idx, v) in field.indexed_iter() {
        if v.is_nan() {
            continue;
        }
        defined += 1;
        assert!(
            (v - value).abs() <= DEFAULT_EPSILON,
            "Cell {:?} is {}, expected {}",
            idx,
            v,
            value
        );
    }
    assert!(defined > 0, "Field has no defined cells");
}
