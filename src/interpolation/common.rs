//! Common utilities for interpolation algorithms.
//!
//! This module provides the grid-walking helpers shared by the methods.

use ndarray::Array2;
use rayon::prelude::*;

use crate::grid::{Field, Grid};

/// Evaluate `f(lon, lat)` at every cell, rows in parallel
pub fn evaluate_cells<F>(grid: &Grid, f: F) -> Field
where
    F: Fn(f64, f64) -> f64 + Sync,
{
    let (rows, cols) = grid.shape();
    let data: Vec<f64> = (0..rows)
        .into_par_iter()
        .flat_map_iter(|row| {
            let f = &f;
            (0..cols).map(move |col| {
                let (lon, lat) = grid.coord(row, col);
                f(lon, lat)
            })
        })
        .collect();

    // rows * cols elements were produced in row-major order
    Array2::from_shape_vec((rows, cols), data).unwrap_or_else(|_| grid.filled(f64::NAN))
}

/// Inclusive range of tick indices covering `[lo, hi]` given fractional
/// positions, clamped to `0..len`. `None` when the span misses the axis.
pub fn index_span(lo_pos: f64, hi_pos: f64, len: usize) -> Option<(usize, usize)> {
    const EPS: f64 = 1e-9;
    if len == 0 {
        return None;
    }
    let first = (lo_pos - EPS).ceil().max(0.0);
    let last = (hi_pos + EPS).floor().min((len - 1) as f64);
    if first > last {
        return None;
    }
    Some((first as usize, last as usize))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::build_grid;

    #[test]
    fn test_index_span() {
        assert_eq!(index_span(0.5, 2.5, 10), Some((1, 2)));
        assert_eq!(index_span(-3.0, 1.0, 10), Some((0, 1)));
        assert_eq!(index_span(8.2, 20.0, 10), Some((9, 9)));
        assert_eq!(index_span(0.2, 0.8, 10), None);
        assert_eq!(index_span(11.0, 12.0, 10), None);
    }

    #[test]
    fn test_evaluate_cells_layout() {
        let grid = build_grid(0.0, 3.0, 10.0, 12.0, 1.0).unwrap();
        let field = evaluate_cells(&grid, |lon, lat| lon + 100.0 * lat);
        assert_eq!(field.dim(), (2, 3));
        assert_eq!(field[[0, 0]], 1000.0);
        assert_eq!(field[[1, 2]], 1102.0);
    }
}
