//! Multiquadric radial basis function interpolation.
//!
//! Fits `f(x) = Σ wᵢ φ(‖x - xᵢ‖)` with `φ(r) = sqrt((r/ε)² + 1)` by solving
//! the dense system `(Φ - λI) w = v`, where `λ` is the smoothing factor and
//! `ε` the average sample spacing. The fitted surface is evaluated at every
//! cell, including outside the convex hull, which makes this the only
//! extrapolating method and the one most prone to overshoot at the edges.
//!
//! The solve is O(n³) in the number of samples.

use ndarray::{Array1, Array2};

use super::common::evaluate_cells;
use super::{Interpolator, SamplePoint};
use crate::error::{PollenError, Result};
use crate::grid::{Field, Grid};
use crate::linalg::solve;

/// Smoothing factor subtracted from the kernel diagonal
pub const DEFAULT_SMOOTHING: f64 = 0.3;

/// Multiquadric RBF interpolator
#[derive(Debug, Clone, PartialEq)]
pub struct RadialBasisInterpolator {
    smoothing: f64,
}

impl Default for RadialBasisInterpolator {
    fn default() -> Self {
        Self {
            smoothing: DEFAULT_SMOOTHING,
        }
    }
}

/// A fitted multiquadric surface
#[derive(Debug, Clone)]
pub struct RbfModel {
    centers: Vec<SamplePoint>,
    weights: Array1<f64>,
    epsilon: f64,
}

impl RbfModel {
    /// Unclipped surface value at `(lon, lat)`
    pub fn evaluate(&self, lon: f64, lat: f64) -> f64 {
        self.centers
            .iter()
            .zip(self.weights.iter())
            .map(|(c, w)| w * multiquadric(c.dist(lon, lat), self.epsilon))
            .sum()
    }
}

#[inline]
fn multiquadric(r: f64, epsilon: f64) -> f64 {
    let s = r / epsilon;
    (s * s + 1.0).sqrt()
}

/// Average spacing: `(product of non-zero bbox edges / n)^(1 / edge count)`
fn average_spacing(points: &[SamplePoint]) -> f64 {
    let span = |f: fn(&SamplePoint) -> f64| {
        let (lo, hi) = points
            .iter()
            .map(f)
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });
        hi - lo
    };
    let edges: Vec<f64> = [span(|p| p.lon), span(|p| p.lat)]
        .into_iter()
        .filter(|&e| e > 0.0)
        .collect();
    if edges.is_empty() {
        return 1.0;
    }
    let volume: f64 = edges.iter().product();
    (volume / points.len() as f64).powf(1.0 / edges.len() as f64)
}

impl RadialBasisInterpolator {
    /// Solve for the weights through `points`
    pub fn fit(&self, points: &[SamplePoint]) -> Result<RbfModel> {
        let n = points.len();
        if n == 0 {
            return Err(PollenError::InsufficientData {
                message: "radial basis fit needs at least one point".to_string(),
            });
        }

        let epsilon = average_spacing(points);
        let mut a = Array2::from_shape_fn((n, n), |(i, j)| {
            let p = &points[i];
            multiquadric(p.dist(points[j].lon, points[j].lat), epsilon)
        });
        for i in 0..n {
            a[[i, i]] -= self.smoothing;
        }
        let b = Array1::from_iter(points.iter().map(|p| p.value));

        let weights = solve(a, b).ok_or_else(|| PollenError::DegenerateGeometry {
            message: "radial basis system is singular".to_string(),
        })?;

        Ok(RbfModel {
            centers: points.to_vec(),
            weights,
            epsilon,
        })
    }
}

impl Interpolator for RadialBasisInterpolator {
    fn estimate(&self, points: &[SamplePoint], grid: &Grid) -> Result<Field> {
        // One sample carries no spatial information: the surface is flat
        if let [only] = points {
            return Ok(grid.filled(only.value));
        }

        let model = self.fit(points)?;
        Ok(evaluate_cells(grid, |lon, lat| model.evaluate(lon, lat)))
    }

    fn name(&self) -> &str {
        "radial_basis"
    }
}
