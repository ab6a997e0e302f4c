//! Clough-Tocher piecewise-cubic interpolation.
//!
//! Each Delaunay triangle is split at its centroid into three sub-triangles
//! carrying a cubic Bernstein-Bézier patch. The patches are C1 across all
//! edges given vertex gradients, which are estimated globally by minimising
//! the curvature of the surface over the triangulation edges
//! (Nielson's method, solved with Gauss-Seidel sweeps).
//!
//! Like linear interpolation, cells outside the convex hull stay undefined.

use tracing::debug;

use super::triangulation::Triangulation;
use super::{Interpolator, SamplePoint};
use crate::error::{PollenError, Result};
use crate::grid::{Field, Grid};

pub const DEFAULT_MAX_ITERATIONS: usize = 400;
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// C1 piecewise-cubic interpolator over the Delaunay triangulation
#[derive(Debug, Clone, PartialEq)]
pub struct CloughTocherInterpolator {
    max_iterations: usize,
    tolerance: f64,
}

impl Default for CloughTocherInterpolator {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl CloughTocherInterpolator {
    /// Interpolator with custom gradient-estimation limits
    pub fn new(max_iterations: usize, tolerance: f64) -> Result<Self> {
        if max_iterations == 0 {
            return Err(PollenError::invalid_parameter(
                "max_iterations",
                "must be at least 1",
            ));
        }
        if !(tolerance.is_finite() && tolerance > 0.0) {
            return Err(PollenError::invalid_parameter(
                "tolerance",
                format!("must be positive, got {}", tolerance),
            ));
        }
        Ok(Self {
            max_iterations,
            tolerance,
        })
    }
}

impl Interpolator for CloughTocherInterpolator {
    fn estimate(&self, points: &[SamplePoint], grid: &Grid) -> Result<Field> {
        let tri = Triangulation::build(points)?;
        let gradients = estimate_gradients(&tri, self.max_iterations, self.tolerance);
        let patches: Vec<CubicPatch> = (0..tri.triangles().len())
            .map(|t| CubicPatch::new(&tri, &gradients, t))
            .collect();

        Ok(tri.rasterize(grid, |t, bary| patches[t].evaluate(bary)))
    }

    fn name(&self) -> &str {
        "clough_tocher"
    }
}

/// Vertex gradients minimising the global second-derivative energy.
///
/// Starts from zero and sweeps the vertices until the largest relative
/// change drops below `tolerance` or `max_iterations` is reached.
pub(crate) fn estimate_gradients(
    tri: &Triangulation,
    max_iterations: usize,
    tolerance: f64,
) -> Vec<[f64; 2]> {
    let points = tri.points();
    let adjacent = tri.vertex_neighbors();
    let mut grad = vec![[0.0_f64; 2]; points.len()];

    for iteration in 0..max_iterations {
        let mut err = 0.0_f64;

        for (i, p) in points.iter().enumerate() {
            let mut q = [0.0_f64; 3];
            let mut s = [0.0_f64; 2];

            for &j in &adjacent[i] {
                let ex = points[j].lon - p.lon;
                let ey = points[j].lat - p.lat;
                let l = (ex * ex + ey * ey).sqrt();
                let l3 = l * l * l;

                let df2 = -ex * grad[j][0] - ey * grad[j][1];
                let rhs = 6.0 * (p.value - points[j].value) - 2.0 * df2;

                q[0] += 4.0 * ex * ex / l3;
                q[1] += 4.0 * ex * ey / l3;
                q[2] += 4.0 * ey * ey / l3;
                s[0] += rhs * ex / l3;
                s[1] += rhs * ey / l3;
            }

            let det = q[0] * q[2] - q[1] * q[1];
            if det.abs() < f64::EPSILON {
                continue;
            }
            let r0 = (q[2] * s[0] - q[1] * s[1]) / det;
            let r1 = (-q[1] * s[0] + q[0] * s[1]) / det;

            let change = (grad[i][0] + r0).abs().max((grad[i][1] + r1).abs());
            grad[i] = [-r0, -r1];
            err = err.max(change / r0.abs().max(r1.abs()).max(1.0));
        }

        if err < tolerance {
            debug!(iterations = iteration + 1, "Gradient estimation converged");
            return grad;
        }
    }

    debug!(
        max_iterations,
        "Gradient estimation stopped before converging"
    );
    grad
}

/// Bézier control net of one split triangle
#[derive(Debug, Clone, Copy)]
struct CubicPatch {
    c3000: f64,
    c0300: f64,
    c0030: f64,
    c2100: f64,
    c2010: f64,
    c1200: f64,
    c0210: f64,
    c1020: f64,
    c0120: f64,
    c2001: f64,
    c0201: f64,
    c0021: f64,
    c1101: f64,
    c1011: f64,
    c0111: f64,
    c1002: f64,
    c0102: f64,
    c0012: f64,
    c0003: f64,
}

impl CubicPatch {
    fn new(tri: &Triangulation, grad: &[[f64; 2]], t: usize) -> Self {
        let points = tri.points();
        let [i1, i2, i3] = tri.triangles()[t];
        let (p1, p2, p3) = (&points[i1], &points[i2], &points[i3]);
        let (g1, g2, g3) = (grad[i1], grad[i2], grad[i3]);

        let e12 = [p2.lon - p1.lon, p2.lat - p1.lat];
        let e23 = [p3.lon - p2.lon, p3.lat - p2.lat];
        let e31 = [p1.lon - p3.lon, p1.lat - p3.lat];
        let dot = |g: [f64; 2], e: [f64; 2]| g[0] * e[0] + g[1] * e[1];

        let df12 = dot(g1, e12);
        let df21 = -dot(g2, e12);
        let df23 = dot(g2, e23);
        let df32 = -dot(g3, e23);
        let df31 = dot(g3, e31);
        let df13 = -dot(g1, e31);

        let c3000 = p1.value;
        let c2100 = (df12 + 3.0 * c3000) / 3.0;
        let c2010 = (df13 + 3.0 * c3000) / 3.0;
        let c0300 = p2.value;
        let c1200 = (df21 + 3.0 * c0300) / 3.0;
        let c0210 = (df23 + 3.0 * c0300) / 3.0;
        let c0030 = p3.value;
        let c1020 = (df31 + 3.0 * c0030) / 3.0;
        let c0120 = (df32 + 3.0 * c0030) / 3.0;

        let c2001 = (c2100 + c2010 + c3000) / 3.0;
        let c0201 = (c1200 + c0300 + c0210) / 3.0;
        let c0021 = (c1020 + c0120 + c0030) / 3.0;

        // Cross-boundary derivative factor per edge, opposite vertex k
        let mut g = [-0.5_f64; 3];
        for (k, neighbor) in tri.neighbors()[t].iter().enumerate() {
            let Some(n) = *neighbor else {
                continue;
            };
            let [a, b, c] = tri.triangles()[n];
            let cx = (points[a].lon + points[b].lon + points[c].lon) / 3.0;
            let cy = (points[a].lat + points[b].lat + points[c].lat) / 3.0;
            let l = tri.barycentric(t, cx, cy);
            g[k] = match k {
                0 => (2.0 * l[2] + l[1] - 1.0) / (2.0 - 3.0 * l[2] - 3.0 * l[1]),
                1 => (2.0 * l[0] + l[2] - 1.0) / (2.0 - 3.0 * l[0] - 3.0 * l[2]),
                _ => (2.0 * l[1] + l[0] - 1.0) / (2.0 - 3.0 * l[1] - 3.0 * l[0]),
            };
        }

        let c0111 = (g[0] * (-c0300 + 3.0 * c0210 - 3.0 * c0120 + c0030)
            + (-c0300 + 2.0 * c0210 - c0120 + c0021 + c0201))
            / 2.0;
        let c1011 = (g[1] * (-c0030 + 3.0 * c1020 - 3.0 * c2010 + c3000)
            + (-c0030 + 2.0 * c1020 - c2010 + c2001 + c0021))
            / 2.0;
        let c1101 = (g[2] * (-c3000 + 3.0 * c2100 - 3.0 * c1200 + c0300)
            + (-c3000 + 2.0 * c2100 - c1200 + c2001 + c0201))
            / 2.0;

        let c1002 = (c1101 + c1011 + c2001) / 3.0;
        let c0102 = (c1101 + c0111 + c0201) / 3.0;
        let c0012 = (c1011 + c0111 + c0021) / 3.0;
        let c0003 = (c1002 + c0102 + c0012) / 3.0;

        Self {
            c3000,
            c0300,
            c0030,
            c2100,
            c2010,
            c1200,
            c0210,
            c1020,
            c0120,
            c2001,
            c0201,
            c0021,
            c1101,
            c1011,
            c0111,
            c1002,
            c0102,
            c0012,
            c0003,
        }
    }

    /// Value at barycentric coordinates `bary` of the outer triangle
    fn evaluate(&self, bary: [f64; 3]) -> f64 {
        // Extended coordinates: the centroid vertex takes the shared minimum
        let min = bary[0].min(bary[1]).min(bary[2]);
        let b1 = bary[0] - min;
        let b2 = bary[1] - min;
        let b3 = bary[2] - min;
        let b4 = 3.0 * min;

        b1.powi(3) * self.c3000
            + 3.0 * b1 * b1 * b2 * self.c2100
            + 3.0 * b1 * b1 * b3 * self.c2010
            + 3.0 * b1 * b1 * b4 * self.c2001
            + 3.0 * b1 * b2 * b2 * self.c1200
            + 6.0 * b1 * b2 * b4 * self.c1101
            + 3.0 * b1 * b3 * b3 * self.c1020
            + 6.0 * b1 * b3 * b4 * self.c1011
            + 3.0 * b1 * b4 * b4 * self.c1002
            + b2.powi(3) * self.c0300
            + 3.0 * b2 * b2 * b3 * self.c0210
            + 3.0 * b2 * b2 * b4 * self.c0201
            + 3.0 * b2 * b3 * b3 * self.c0120
            + 6.0 * b2 * b3 * b4 * self.c0111
            + 3.0 * b2 * b4 * b4 * self.c0102
            + b3.powi(3) * self.c0030
            + 3.0 * b3 * b3 * b4 * self.c0021
            + 3.0 * b3 * b4 * b4 * self.c0012
            + b4.powi(3) * self.c0003
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::build_grid;
    use crate::interpolation::interpolate;

    fn scattered(f: impl Fn(f64, f64) -> f64) -> Vec<SamplePoint> {
        [
            (0.0, 0.0),
            (10.0, 0.0),
            (0.0, 10.0),
            (10.0, 10.0),
            (4.0, 6.0),
            (7.0, 3.0),
            (2.5, 2.0),
        ]
        .iter()
        .map(|&(x, y)| SamplePoint::new(x, y, f(x, y)))
        .collect()
    }

    #[test]
    fn test_constant_data_gives_constant_field() {
        let points = scattered(|_, _| 4.0);
        let grid = build_grid(0.0, 10.5, 0.0, 10.5, 0.5).unwrap();
        let field = interpolate(&points, &grid, &CloughTocherInterpolator::default()).unwrap();
        for v in field.iter() {
            assert!((v - 4.0).abs() < 1e-9, "got {}", v);
        }
    }

    #[test]
    fn test_gradients_recover_plane_slope() {
        let points = scattered(|x, y| 1.0 + 0.3 * x - 0.2 * y);
        let tri = Triangulation::build(&points).unwrap();
        let grads = estimate_gradients(&tri, DEFAULT_MAX_ITERATIONS, 1e-10);
        for g in grads {
            assert!((g[0] - 0.3).abs() < 1e-6);
            assert!((g[1] + 0.2).abs() < 1e-6);
        }
    }

    #[test]
    fn test_reproduces_plane() {
        let plane = |x: f64, y: f64| 5.0 + 0.3 * x + 0.2 * y;
        let points = scattered(plane);
        let grid = build_grid(-1.0, 11.0, -1.0, 11.0, 0.5).unwrap();
        let field = interpolate(&points, &grid, &CloughTocherInterpolator::default()).unwrap();

        for ((row, col), &v) in field.indexed_iter() {
            let (lon, lat) = grid.coord(row, col);
            if (0.0..=10.0).contains(&lon) && (0.0..=10.0).contains(&lat) {
                assert!((v - plane(lon, lat)).abs() < 1e-3, "({}, {}) = {}", lon, lat, v);
            } else {
                assert!(v.is_nan());
            }
        }
    }

    #[test]
    fn test_passes_through_samples() {
        let points = scattered(|x, y| (x * 0.4).sin() + (y * 0.3).cos() + 2.0);
        let grid = build_grid(0.0, 10.5, 0.0, 10.5, 0.5).unwrap();
        let field = interpolate(&points, &grid, &CloughTocherInterpolator::default()).unwrap();
        for p in &points {
            let row = (p.lat / 0.5).round() as usize;
            let col = (p.lon / 0.5).round() as usize;
            assert!((field[[row, col]] - p.value).abs() < 1e-9);
        }
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(CloughTocherInterpolator::new(0, 1e-6).is_err());
        assert!(CloughTocherInterpolator::new(10, 0.0).is_err());
        assert!(CloughTocherInterpolator::new(10, 1e-4).is_ok());
    }

    #[test]
    fn test_degenerate_input() {
        let grid = build_grid(0.0, 3.0, 0.0, 3.0, 1.0).unwrap();
        let points = [SamplePoint::new(0.0, 0.0, 1.0), SamplePoint::new(1.0, 1.0, 2.0)];
        assert!(matches!(
            interpolate(&points, &grid, &CloughTocherInterpolator::default()),
            Err(PollenError::DegenerateGeometry { .. })
        ));
    }
}
