//! Nearest neighbor interpolation.
//!
//! Each grid cell takes the value of the closest sample (Euclidean distance
//! in lon/lat space). The result is piecewise constant over Voronoi cells and
//! is defined everywhere for any non-empty input.

use super::common::evaluate_cells;
use super::kdtree::KdTree;
use super::{Interpolator, SamplePoint};
use crate::error::{PollenError, Result};
use crate::grid::{Field, Grid};

/// Nearest neighbor interpolator
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestInterpolator;

impl Interpolator for NearestInterpolator {
    fn estimate(&self, points: &[SamplePoint], grid: &Grid) -> Result<Field> {
        if points.is_empty() {
            return Err(PollenError::InsufficientData {
                message: "nearest neighbor needs at least one point".to_string(),
            });
        }

        let tree = KdTree::build(points);
        Ok(evaluate_cells(grid, |lon, lat| {
            tree.nearest(lon, lat).map_or(f64::NAN, |n| n.point.value)
        }))
    }

    fn name(&self) -> &str {
        "nearest"
    }
}
