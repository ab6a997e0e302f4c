//! Piecewise-linear interpolation over the Delaunay triangulation.
//!
//! Cells outside the convex hull of the samples are left undefined.

use super::triangulation::Triangulation;
use super::{Interpolator, SamplePoint};
use crate::error::Result;
use crate::grid::{Field, Grid};

/// Barycentric linear interpolator
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearInterpolator;

impl Interpolator for LinearInterpolator {
    fn estimate(&self, points: &[SamplePoint], grid: &Grid) -> Result<Field> {
        let tri = Triangulation::build(points)?;
        let vertices = tri.points();
        let triangles = tri.triangles();

        Ok(tri.rasterize(grid, |t, [l0, l1, l2]| {
            let [a, b, c] = triangles[t];
            l0 * vertices[a].value + l1 * vertices[b].value + l2 * vertices[c].value
        }))
    }

    fn name(&self) -> &str {
        "linear"
    }
}
