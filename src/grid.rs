//! Regular evaluation mesh shared by every frame.
//!
//! The grid is a pure function of its bounds and resolution. It is built once
//! per process and only read afterwards, so it can be shared across threads
//! without locking.

use ndarray::Array2;
use serde::Serialize;

use crate::error::{PollenError, Result};

/// Western edge of the continental US extent
pub const DEFAULT_LON_MIN: f64 = -125.0;
/// Eastern edge of the continental US extent
pub const DEFAULT_LON_MAX: f64 = -66.5;
/// Southern edge of the continental US extent
pub const DEFAULT_LAT_MIN: f64 = 24.0;
/// Northern edge of the continental US extent
pub const DEFAULT_LAT_MAX: f64 = 50.0;
/// Default cell size in degrees
pub const DEFAULT_RESOLUTION: f64 = 0.15;
/// Largest number of ticks allowed along one axis
pub const MAX_TICKS_PER_AXIS: usize = 100_000;

/// A 2-D array of values aligned to a [`Grid`]; `NaN` marks undefined cells.
///
/// Rows follow latitude ticks and columns follow longitude ticks.
pub type Field = Array2<f64>;

/// Immutable, regularly spaced (longitude, latitude) mesh.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Grid {
    lon_ticks: Vec<f64>,
    lat_ticks: Vec<f64>,
    resolution: f64,
}

impl Grid {
    /// Grid over the continental US at the default resolution
    pub fn continental_us() -> Result<Self> {
        build_grid(
            DEFAULT_LON_MIN,
            DEFAULT_LON_MAX,
            DEFAULT_LAT_MIN,
            DEFAULT_LAT_MAX,
            DEFAULT_RESOLUTION,
        )
    }

    /// Longitude ticks, one per column
    pub fn lon_ticks(&self) -> &[f64] {
        &self.lon_ticks
    }

    /// Latitude ticks, one per row
    pub fn lat_ticks(&self) -> &[f64] {
        &self.lat_ticks
    }

    pub fn resolution(&self) -> f64 {
        self.resolution
    }

    /// Number of latitude ticks
    pub fn rows(&self) -> usize {
        self.lat_ticks.len()
    }

    /// Number of longitude ticks
    pub fn cols(&self) -> usize {
        self.lon_ticks.len()
    }

    /// `(rows, cols)`, the shape every [`Field`] on this grid must have
    pub fn shape(&self) -> (usize, usize) {
        (self.rows(), self.cols())
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.rows() * self.cols()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `(lon, lat)` of the cell at `(row, col)`
    #[inline]
    pub fn coord(&self, row: usize, col: usize) -> (f64, f64) {
        (self.lon_ticks[col], self.lat_ticks[row])
    }

    /// Longitude mesh, every row a copy of the longitude ticks
    pub fn lon_mesh(&self) -> Array2<f64> {
        Array2::from_shape_fn(self.shape(), |(_, col)| self.lon_ticks[col])
    }

    /// Latitude mesh, every column a copy of the latitude ticks
    pub fn lat_mesh(&self) -> Array2<f64> {
        Array2::from_shape_fn(self.shape(), |(row, _)| self.lat_ticks[row])
    }

    /// A field of this grid's shape with every cell set to `value`
    pub fn filled(&self, value: f64) -> Field {
        Array2::from_elem(self.shape(), value)
    }

    /// Fractional column index of a longitude
    pub(crate) fn col_position(&self, lon: f64) -> f64 {
        (lon - self.lon_ticks[0]) / self.resolution
    }

    /// Fractional row index of a latitude
    pub(crate) fn row_position(&self, lat: f64) -> f64 {
        (lat - self.lat_ticks[0]) / self.resolution
    }
}

/// Build the evaluation mesh for the half-open box `[lon_min, lon_max) x [lat_min, lat_max)`.
pub fn build_grid(
    lon_min: f64,
    lon_max: f64,
    lat_min: f64,
    lat_max: f64,
    resolution: f64,
) -> Result<Grid> {
    if !resolution.is_finite() || resolution <= 0.0 {
        return Err(PollenError::invalid_parameter(
            "resolution",
            format!("must be a positive number, got {}", resolution),
        ));
    }
    check_bounds("lon", lon_min, lon_max)?;
    check_bounds("lat", lat_min, lat_max)?;
    check_tick_count("lon", lon_min, lon_max, resolution)?;
    check_tick_count("lat", lat_min, lat_max, resolution)?;

    Ok(Grid {
        lon_ticks: ticks(lon_min, lon_max, resolution),
        lat_ticks: ticks(lat_min, lat_max, resolution),
        resolution,
    })
}

fn check_bounds(axis: &str, min: f64, max: f64) -> Result<()> {
    if !min.is_finite() || !max.is_finite() {
        return Err(PollenError::invalid_parameter(
            axis,
            format!("bounds must be finite, got [{}, {})", min, max),
        ));
    }
    if min >= max {
        return Err(PollenError::invalid_parameter(
            axis,
            format!("{}_min ({}) must be < {}_max ({})", axis, min, axis, max),
        ));
    }
    Ok(())
}

fn check_tick_count(axis: &str, min: f64, max: f64, step: f64) -> Result<()> {
    let count = ((max - min) / step).ceil();
    if !count.is_finite() || count > MAX_TICKS_PER_AXIS as f64 {
        return Err(PollenError::invalid_parameter(
            "resolution",
            format!(
                "{} span {} at resolution {} needs more than {} ticks",
                axis,
                max - min,
                step,
                MAX_TICKS_PER_AXIS
            ),
        ));
    }
    Ok(())
}

/// `min, min + step, ...` strictly below `max`
fn ticks(min: f64, max: f64, step: f64) -> Vec<f64> {
    let count = ((max - min) / step).ceil() as usize;
    (0..count)
        .map(|i| min + i as f64 * step)
        .filter(|&t| t < max)
        .collect()
}
