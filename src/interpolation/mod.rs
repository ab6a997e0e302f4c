//! Scattered-point interpolation onto the evaluation grid.
//!
//! Methods:
//! - `nearest`: value of the closest sample (Voronoi cells)
//! - `linear`: barycentric interpolation over a Delaunay triangulation
//! - `radial_basis`: multiquadric RBF fit, the only method that extrapolates
//! - `clough_tocher`: C1 piecewise-cubic patches over the triangulation
//!
//! Whatever the method, negative estimates are floored at zero before a
//! field is returned, and a failed call never yields a partial field.

pub mod clough_tocher;
mod common;
pub mod kdtree;
pub mod linear;
pub mod nearest;
pub mod radial_basis;
pub mod triangulation;

use serde::{Deserialize, Serialize};

use crate::error::{PollenError, Result};
use crate::grid::{Field, Grid};

pub use clough_tocher::CloughTocherInterpolator;
pub use linear::LinearInterpolator;
pub use nearest::NearestInterpolator;
pub use radial_basis::RadialBasisInterpolator;

/// A sample with a longitude, latitude and value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplePoint {
    pub lon: f64,
    pub lat: f64,
    pub value: f64,
}

impl SamplePoint {
    pub fn new(lon: f64, lat: f64, value: f64) -> Self {
        Self { lon, lat, value }
    }

    /// Squared Euclidean distance in lon/lat space
    #[inline]
    pub fn dist_sq(&self, lon: f64, lat: f64) -> f64 {
        let dx = self.lon - lon;
        let dy = self.lat - lat;
        dx * dx + dy * dy
    }

    #[inline]
    pub fn dist(&self, lon: f64, lat: f64) -> f64 {
        self.dist_sq(lon, lat).sqrt()
    }
}

/// Trait for interpolation methods
pub trait Interpolator: Send + Sync {
    /// Estimate a raw field over `grid` from `points`.
    ///
    /// Callers go through [`interpolate`], which validates the input and
    /// applies the non-negativity floor.
    fn estimate(&self, points: &[SamplePoint], grid: &Grid) -> Result<Field>;

    /// Get the name of this interpolation method
    fn name(&self) -> &str;
}

/// Get an interpolator by name
pub fn get_interpolator(name: &str) -> Result<Box<dyn Interpolator>> {
    match name.to_lowercase().as_str() {
        "nearest" | "nn" => Ok(Box::new(NearestInterpolator)),
        "linear" => Ok(Box::new(LinearInterpolator)),
        "radial_basis" | "rbf" => Ok(Box::new(RadialBasisInterpolator::default())),
        "clough_tocher" | "cloughtocher" => Ok(Box::new(CloughTocherInterpolator::default())),
        _ => Err(PollenError::UnknownMethod {
            kind: "interpolation".to_string(),
            name: name.to_string(),
        }),
    }
}

/// Interpolate `points` onto `grid` and floor negative values at zero.
///
/// Undefined cells (outside the convex hull for the triangulation methods)
/// are `NaN`.
pub fn interpolate(
    points: &[SamplePoint],
    grid: &Grid,
    interpolator: &dyn Interpolator,
) -> Result<Field> {
    if points.is_empty() {
        return Err(PollenError::InsufficientData {
            message: "no sample points to interpolate".to_string(),
        });
    }
    if let Some(p) = points
        .iter()
        .find(|p| !(p.lon.is_finite() && p.lat.is_finite() && p.value.is_finite()))
    {
        return Err(PollenError::invalid_parameter(
            "points",
            format!("non-finite sample ({}, {}, {})", p.lon, p.lat, p.value),
        ));
    }

    let mut field = interpolator.estimate(points, grid)?;
    if field.dim() != grid.shape() {
        return Err(PollenError::invalid_parameter(
            "field",
            format!(
                "{} produced shape {:?}, grid is {:?}",
                interpolator.name(),
                field.dim(),
                grid.shape()
            ),
        ));
    }

    // NaN compares false and passes through undefined
    field.mapv_inplace(|v| if v < 0.0 { 0.0 } else { v });
    Ok(field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::build_grid;

    #[test]
    fn test_get_interpolator_names() {
        assert_eq!(get_interpolator("nn").unwrap().name(), "nearest");
        assert_eq!(get_interpolator("Linear").unwrap().name(), "linear");
        assert_eq!(get_interpolator("rbf").unwrap().name(), "radial_basis");
        assert_eq!(
            get_interpolator("cloughtocher").unwrap().name(),
            "clough_tocher"
        );
        assert!(matches!(
            get_interpolator("kriging"),
            Err(PollenError::UnknownMethod { .. })
        ));
    }

    #[test]
    fn test_empty_points() {
        let grid = build_grid(0.0, 2.0, 0.0, 2.0, 1.0).unwrap();
        let result = interpolate(&[], &grid, &NearestInterpolator);
        assert!(matches!(result, Err(PollenError::InsufficientData { .. })));
    }

    #[test]
    fn test_non_finite_point() {
        let grid = build_grid(0.0, 2.0, 0.0, 2.0, 1.0).unwrap();
        let points = [SamplePoint::new(0.0, 0.0, f64::NAN)];
        assert!(interpolate(&points, &grid, &NearestInterpolator).is_err());
    }
}
