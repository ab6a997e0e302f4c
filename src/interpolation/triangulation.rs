//! Delaunay triangulation of sample points.
//!
//! Incremental Bowyer-Watson insertion inside a large enclosing triangle.
//! Coincident samples are merged (first one wins) before insertion, and
//! input that is entirely coincident or colinear is rejected, since no
//! 2-D surface can be built over it.
//!
//! Triangles are stored counter-clockwise; `neighbors[t][k]` is the triangle
//! across the edge opposite vertex `k` of triangle `t`, `None` on the hull.

use std::collections::HashMap;

use super::common::index_span;
use super::SamplePoint;
use crate::error::{PollenError, Result};
use crate::grid::{Field, Grid};

/// Barycentric coordinates slightly below zero still count as inside, so
/// cells exactly on shared edges are always claimed by some triangle.
const INSIDE_TOLERANCE: f64 = -1e-10;

/// Delaunay triangulation with triangle adjacency
#[derive(Debug, Clone)]
pub struct Triangulation {
    points: Vec<SamplePoint>,
    triangles: Vec<[usize; 3]>,
    neighbors: Vec<[Option<usize>; 3]>,
}

impl Triangulation {
    /// Triangulate `points`, merging coincident samples first
    pub fn build(points: &[SamplePoint]) -> Result<Self> {
        let points = dedup_coincident(points);
        check_spread(&points)?;

        let triangles = bowyer_watson(&points);
        if triangles.is_empty() {
            return Err(PollenError::DegenerateGeometry {
                message: "triangulation produced no triangles".to_string(),
            });
        }
        let neighbors = adjacency(&triangles);

        Ok(Self {
            points,
            triangles,
            neighbors,
        })
    }

    /// The (deduplicated) vertices
    pub fn points(&self) -> &[SamplePoint] {
        &self.points
    }

    pub fn triangles(&self) -> &[[usize; 3]] {
        &self.triangles
    }

    pub fn neighbors(&self) -> &[[Option<usize>; 3]] {
        &self.neighbors
    }

    /// For every vertex, the vertices it shares an edge with
    pub fn vertex_neighbors(&self) -> Vec<Vec<usize>> {
        let mut out = vec![Vec::new(); self.points.len()];
        for tri in &self.triangles {
            for k in 0..3 {
                let a = tri[k];
                let b = tri[(k + 1) % 3];
                if !out[a].contains(&b) {
                    out[a].push(b);
                }
                if !out[b].contains(&a) {
                    out[b].push(a);
                }
            }
        }
        out
    }

    /// Barycentric coordinates of `(x, y)` in triangle `t`
    pub fn barycentric(&self, t: usize, x: f64, y: f64) -> [f64; 3] {
        let [a, b, c] = self.corners(t);
        barycentric(x, y, a, b, c)
    }

    fn corners(&self, t: usize) -> [&SamplePoint; 3] {
        let [i, j, k] = self.triangles[t];
        [&self.points[i], &self.points[j], &self.points[k]]
    }

    /// Walk every triangle's cells and fill them with `f(triangle, bary)`.
    ///
    /// Cells outside the convex hull stay `NaN`. A cell on a shared edge
    /// takes the value from the first triangle that reaches it.
    pub fn rasterize<F>(&self, grid: &Grid, f: F) -> Field
    where
        F: Fn(usize, [f64; 3]) -> f64,
    {
        let mut field = grid.filled(f64::NAN);
        let (rows, cols) = grid.shape();

        for t in 0..self.triangles.len() {
            let [a, b, c] = self.corners(t);
            if signed_area(a, b, c).abs() < 1e-14 {
                continue;
            }
            let min_lon = a.lon.min(b.lon).min(c.lon);
            let max_lon = a.lon.max(b.lon).max(c.lon);
            let min_lat = a.lat.min(b.lat).min(c.lat);
            let max_lat = a.lat.max(b.lat).max(c.lat);

            let Some((c0, c1)) =
                index_span(grid.col_position(min_lon), grid.col_position(max_lon), cols)
            else {
                continue;
            };
            let Some((r0, r1)) =
                index_span(grid.row_position(min_lat), grid.row_position(max_lat), rows)
            else {
                continue;
            };

            for row in r0..=r1 {
                for col in c0..=c1 {
                    if !field[[row, col]].is_nan() {
                        continue;
                    }
                    let (lon, lat) = grid.coord(row, col);
                    let bary = barycentric(lon, lat, a, b, c);
                    if bary.iter().all(|&l| l >= INSIDE_TOLERANCE) {
                        field[[row, col]] = f(t, bary);
                    }
                }
            }
        }

        field
    }
}

/// Twice the signed area; positive for counter-clockwise order
fn signed_area(a: &SamplePoint, b: &SamplePoint, c: &SamplePoint) -> f64 {
    (b.lon - a.lon) * (c.lat - a.lat) - (c.lon - a.lon) * (b.lat - a.lat)
}

fn barycentric(x: f64, y: f64, a: &SamplePoint, b: &SamplePoint, c: &SamplePoint) -> [f64; 3] {
    let det = (b.lat - c.lat) * (a.lon - c.lon) + (c.lon - b.lon) * (a.lat - c.lat);
    let l0 = ((b.lat - c.lat) * (x - c.lon) + (c.lon - b.lon) * (y - c.lat)) / det;
    let l1 = ((c.lat - a.lat) * (x - c.lon) + (a.lon - c.lon) * (y - c.lat)) / det;
    [l0, l1, 1.0 - l0 - l1]
}

fn dedup_coincident(points: &[SamplePoint]) -> Vec<SamplePoint> {
    let mut out: Vec<SamplePoint> = Vec::with_capacity(points.len());
    for p in points {
        if !out.iter().any(|q| q.lon == p.lon && q.lat == p.lat) {
            out.push(*p);
        }
    }
    out
}

/// Reject fewer than three distinct points or an all-colinear set
fn check_spread(points: &[SamplePoint]) -> Result<()> {
    if points.len() < 3 {
        return Err(PollenError::DegenerateGeometry {
            message: format!(
                "triangulation needs at least 3 distinct points, got {}",
                points.len()
            ),
        });
    }

    let origin = &points[0];
    let far = points
        .iter()
        .max_by(|a, b| {
            a.dist_sq(origin.lon, origin.lat)
                .total_cmp(&b.dist_sq(origin.lon, origin.lat))
        })
        .unwrap_or(origin);
    let span_sq = far.dist_sq(origin.lon, origin.lat);

    let has_area = points
        .iter()
        .any(|p| signed_area(origin, far, p).abs() > 1e-10 * span_sq);
    if !has_area {
        return Err(PollenError::DegenerateGeometry {
            message: "all points are colinear".to_string(),
        });
    }
    Ok(())
}

#[derive(Debug, Clone, Copy)]
struct Circumcircle {
    cx: f64,
    cy: f64,
    radius_sq: f64,
}

fn circumcircle(a: &SamplePoint, b: &SamplePoint, c: &SamplePoint) -> Option<Circumcircle> {
    let d = 2.0 * (a.lon * (b.lat - c.lat) + b.lon * (c.lat - a.lat) + c.lon * (a.lat - b.lat));
    if d.abs() < 1e-12 {
        return None;
    }
    let a2 = a.lon * a.lon + a.lat * a.lat;
    let b2 = b.lon * b.lon + b.lat * b.lat;
    let c2 = c.lon * c.lon + c.lat * c.lat;
    let cx = (a2 * (b.lat - c.lat) + b2 * (c.lat - a.lat) + c2 * (a.lat - b.lat)) / d;
    let cy = (a2 * (c.lon - b.lon) + b2 * (a.lon - c.lon) + c2 * (b.lon - a.lon)) / d;
    let dx = a.lon - cx;
    let dy = a.lat - cy;
    Some(Circumcircle {
        cx,
        cy,
        radius_sq: dx * dx + dy * dy,
    })
}

/// Triangles as counter-clockwise vertex index triples into `points`
fn bowyer_watson(points: &[SamplePoint]) -> Vec<[usize; 3]> {
    let (mut min_x, mut min_y) = (f64::INFINITY, f64::INFINITY);
    let (mut max_x, mut max_y) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
    for p in points {
        min_x = min_x.min(p.lon);
        min_y = min_y.min(p.lat);
        max_x = max_x.max(p.lon);
        max_y = max_y.max(p.lat);
    }
    let dx = max_x - min_x;
    let delta = dx.max(max_y - min_y).max(1e-9);
    let reach = 100.0 * delta;

    // Enclosing triangle occupies indices 0..3
    let mut vertices = vec![
        SamplePoint::new(min_x - reach, min_y - delta, 0.0),
        SamplePoint::new(max_x + reach, min_y - delta, 0.0),
        SamplePoint::new(min_x + 0.5 * dx, max_y + reach, 0.0),
    ];
    vertices.extend_from_slice(points);

    let mut triangles: Vec<([usize; 3], Option<Circumcircle>)> = vec![(
        [0, 1, 2],
        circumcircle(&vertices[0], &vertices[1], &vertices[2]),
    )];

    for vi in 3..vertices.len() {
        let p = vertices[vi];

        let (bad, good): (Vec<_>, Vec<_>) = triangles.into_iter().partition(|(_, cc)| match cc {
            Some(cc) => {
                let dx = p.lon - cc.cx;
                let dy = p.lat - cc.cy;
                dx * dx + dy * dy <= cc.radius_sq
            }
            None => false,
        });
        triangles = good;

        // Edges of the cavity: those that belong to exactly one bad triangle
        let mut edge_count: HashMap<(usize, usize), usize> = HashMap::new();
        for (tri, _) in &bad {
            for k in 0..3 {
                let (a, b) = (tri[k], tri[(k + 1) % 3]);
                *edge_count.entry((a.min(b), a.max(b))).or_default() += 1;
            }
        }
        for (tri, _) in &bad {
            for k in 0..3 {
                let (a, b) = (tri[k], tri[(k + 1) % 3]);
                if edge_count[&(a.min(b), a.max(b))] == 1 {
                    let cc = circumcircle(&vertices[a], &vertices[b], &p);
                    triangles.push(([a, b, vi], cc));
                }
            }
        }
    }

    triangles
        .into_iter()
        .map(|(tri, _)| tri)
        .filter(|tri| tri.iter().all(|&v| v >= 3))
        .map(|[a, b, c]| {
            let (a, b, c) = (a - 3, b - 3, c - 3);
            if signed_area(&points[a], &points[b], &points[c]) < 0.0 {
                [a, c, b]
            } else {
                [a, b, c]
            }
        })
        .collect()
}

fn adjacency(triangles: &[[usize; 3]]) -> Vec<[Option<usize>; 3]> {
    let mut edges: HashMap<(usize, usize), Vec<(usize, usize)>> = HashMap::new();
    for (t, tri) in triangles.iter().enumerate() {
        for k in 0..3 {
            let a = tri[(k + 1) % 3];
            let b = tri[(k + 2) % 3];
            edges.entry((a.min(b), a.max(b))).or_default().push((t, k));
        }
    }

    let mut neighbors = vec![[None; 3]; triangles.len()];
    for sharing in edges.values() {
        if let [(t0, k0), (t1, k1)] = sharing[..] {
            neighbors[t0][k0] = Some(t1);
            neighbors[t1][k1] = Some(t0);
        }
    }
    neighbors
}
