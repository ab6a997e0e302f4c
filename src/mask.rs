//! Geographic masking of fields.
//!
//! Cells whose centre lies outside the boundary become `NaN`; cells inside
//! pass through unchanged. Points exactly on the boundary ring count as
//! outside (interior containment), for every cell and every frame alike.

use geo::{BoundingRect, Contains, LineString, MultiPolygon, Point, Polygon, Rect};
use ndarray::Array2;
use rayon::prelude::*;

use crate::error::{PollenError, Result};
use crate::grid::{Field, Grid};

/// The region to retain, as a (multi-)polygon in lon/lat degrees
#[derive(Debug, Clone, PartialEq)]
pub struct Boundary {
    shape: MultiPolygon<f64>,
    bbox: Option<Rect<f64>>,
}

impl Boundary {
    pub fn from_multi_polygon(shape: MultiPolygon<f64>) -> Self {
        let bbox = shape.bounding_rect();
        Self { shape, bbox }
    }

    pub fn from_polygon(polygon: Polygon<f64>) -> Self {
        Self::from_multi_polygon(MultiPolygon::new(vec![polygon]))
    }

    /// Axis-aligned rectangle `[min_lon, max_lon] x [min_lat, max_lat]`
    pub fn rectangle(min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> Self {
        Self::from_polygon(Polygon::new(
            LineString::from(vec![
                (min_lon, min_lat),
                (max_lon, min_lat),
                (max_lon, max_lat),
                (min_lon, max_lat),
                (min_lon, min_lat),
            ]),
            vec![],
        ))
    }

    pub fn shape(&self) -> &MultiPolygon<f64> {
        &self.shape
    }

    /// Strict interior containment of `(lon, lat)`
    pub fn contains(&self, lon: f64, lat: f64) -> bool {
        match &self.bbox {
            Some(rect) => {
                let (min, max) = (rect.min(), rect.max());
                if lon < min.x || lon > max.x || lat < min.y || lat > max.y {
                    return false;
                }
                self.shape.contains(&Point::new(lon, lat))
            }
            None => false,
        }
    }
}

/// Inside/outside flags for one grid and boundary, computed once and applied
/// to every frame.
#[derive(Debug, Clone)]
pub struct RegionMask {
    inside: Array2<bool>,
}

impl RegionMask {
    pub fn new(grid: &Grid, boundary: &Boundary) -> Result<Self> {
        let (rows, cols) = grid.shape();
        let flags: Vec<bool> = (0..rows)
            .into_par_iter()
            .flat_map_iter(|row| {
                (0..cols).map(move |col| {
                    let (lon, lat) = grid.coord(row, col);
                    boundary.contains(lon, lat)
                })
            })
            .collect();

        let inside = Array2::from_shape_vec((rows, cols), flags)
            .map_err(|e| PollenError::invalid_parameter("grid", e.to_string()))?;
        Ok(Self { inside })
    }

    /// Number of cells inside the boundary
    pub fn inside_count(&self) -> usize {
        self.inside.iter().filter(|&&b| b).count()
    }

    /// A copy of `field` with outside cells set to `NaN`
    pub fn apply(&self, field: &Field) -> Result<Field> {
        if field.dim() != self.inside.dim() {
            return Err(PollenError::invalid_parameter(
                "field",
                format!(
                    "shape {:?} does not match mask shape {:?}",
                    field.dim(),
                    self.inside.dim()
                ),
            ));
        }

        let mut out = field.clone();
        out.zip_mut_with(&self.inside, |v, &inside| {
            if !inside {
                *v = f64::NAN;
            }
        });
        Ok(out)
    }
}

/// Mask `field` to `boundary` in one step.
///
/// When masking many frames over the same grid, build a [`RegionMask`] once
/// instead.
pub fn mask(field: &Field, grid: &Grid, boundary: &Boundary) -> Result<Field> {
    if field.dim() != grid.shape() {
        return Err(PollenError::invalid_parameter(
            "field",
            format!(
                "shape {:?} does not match grid shape {:?}",
                field.dim(),
                grid.shape()
            ),
        ));
    }
    RegionMask::new(grid, boundary)?.apply(field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::build_grid;

    fn same_cells(a: &Field, b: &Field) -> bool {
        a.iter()
            .zip(b.iter())
            .all(|(x, y)| (x.is_nan() && y.is_nan()) || x == y)
    }

    #[test]
    fn test_rectangle_mask() {
        let grid = build_grid(0.0, 10.0, 0.0, 10.0, 1.0).unwrap();
        let field = grid.filled(2.0);
        let boundary = Boundary::rectangle(2.5, 2.5, 6.5, 4.5);
        let masked = mask(&field, &grid, &boundary).unwrap();

        for ((row, col), &v) in masked.indexed_iter() {
            let (lon, lat) = grid.coord(row, col);
            let inside = lon > 2.5 && lon < 6.5 && lat > 2.5 && lat < 4.5;
            if inside {
                assert_eq!(v, 2.0);
            } else {
                assert!(v.is_nan());
            }
        }
    }

    #[test]
    fn test_boundary_points_are_outside() {
        let boundary = Boundary::rectangle(0.0, 0.0, 2.0, 2.0);
        assert!(boundary.contains(1.0, 1.0));
        assert!(!boundary.contains(0.0, 1.0));
        assert!(!boundary.contains(2.0, 2.0));
        assert!(!boundary.contains(3.0, 1.0));
    }

    #[test]
    fn test_mask_is_idempotent() {
        let grid = build_grid(-3.0, 3.0, -3.0, 3.0, 0.5).unwrap();
        let field = grid.lon_mesh() + grid.lat_mesh();
        let boundary = Boundary::from_polygon(Polygon::new(
            LineString::from(vec![(-2.0, -2.0), (2.5, -1.0), (0.0, 2.2), (-2.0, -2.0)]),
            vec![],
        ));

        let region = RegionMask::new(&grid, &boundary).unwrap();
        let once = region.apply(&field).unwrap();
        let twice = region.apply(&once).unwrap();
        assert!(same_cells(&once, &twice));
        assert!(region.inside_count() > 0);
        assert!(region.inside_count() < grid.len());
    }

    #[test]
    fn test_multi_polygon() {
        let left = Boundary::rectangle(0.0, 0.0, 1.0, 1.0).shape().0[0].clone();
        let right = Boundary::rectangle(5.0, 0.0, 6.0, 1.0).shape().0[0].clone();
        let boundary = Boundary::from_multi_polygon(MultiPolygon::new(vec![left, right]));
        assert!(boundary.contains(0.5, 0.5));
        assert!(boundary.contains(5.5, 0.5));
        assert!(!boundary.contains(3.0, 0.5));
    }

    #[test]
    fn test_undefined_cells_stay_undefined() {
        let grid = build_grid(0.0, 4.0, 0.0, 4.0, 1.0).unwrap();
        let mut field = grid.filled(1.0);
        field[[2, 2]] = f64::NAN;
        let boundary = Boundary::rectangle(-1.0, -1.0, 5.0, 5.0);
        let masked = mask(&field, &grid, &boundary).unwrap();
        assert!(same_cells(&field, &masked));
    }

    #[test]
    fn test_shape_mismatch() {
        let grid = build_grid(0.0, 4.0, 0.0, 4.0, 1.0).unwrap();
        let other = build_grid(0.0, 2.0, 0.0, 2.0, 1.0).unwrap();
        let boundary = Boundary::rectangle(0.0, 0.0, 1.0, 1.0);
        assert!(mask(&other.filled(1.0), &grid, &boundary).is_err());
    }
}
