//! 2D k-d tree over sample points for nearest-neighbour queries.
//!
//! Built once per interpolation call and queried once per grid cell.

use super::SamplePoint;

/// A 2D k-d tree over sample points
#[derive(Debug)]
pub struct KdTree {
    nodes: Vec<KdNode>,
    points: Vec<SamplePoint>,
}

#[derive(Debug)]
struct KdNode {
    /// Index into `points`
    point_idx: usize,
    /// Split axis: 0 = lon, 1 = lat
    axis: u8,
    left: Option<usize>,
    right: Option<usize>,
}

/// Result of a nearest-neighbour query
#[derive(Debug, Clone, Copy)]
pub struct Nearest {
    pub point: SamplePoint,
    pub distance_sq: f64,
    /// Position of the point in the slice the tree was built from
    pub index: usize,
}

impl KdTree {
    /// Build with median splits, O(n log n)
    pub fn build(points: &[SamplePoint]) -> Self {
        let mut indices: Vec<usize> = (0..points.len()).collect();
        let mut nodes = Vec::with_capacity(points.len());
        if !points.is_empty() {
            build_recursive(points, &mut indices, 0, &mut nodes);
        }
        Self {
            nodes,
            points: points.to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Closest point to `(lon, lat)`.
    ///
    /// Ties go to the point that appears first in the input.
    pub fn nearest(&self, lon: f64, lat: f64) -> Option<Nearest> {
        if self.nodes.is_empty() {
            return None;
        }
        let mut best = (f64::INFINITY, usize::MAX);
        self.nearest_recursive(0, lon, lat, &mut best);
        Some(Nearest {
            point: self.points[best.1],
            distance_sq: best.0,
            index: best.1,
        })
    }

    fn nearest_recursive(&self, node_idx: usize, lon: f64, lat: f64, best: &mut (f64, usize)) {
        let node = &self.nodes[node_idx];
        let p = &self.points[node.point_idx];
        let dist_sq = p.dist_sq(lon, lat);

        if dist_sq < best.0 || (dist_sq == best.0 && node.point_idx < best.1) {
            *best = (dist_sq, node.point_idx);
        }

        let diff = if node.axis == 0 { lon - p.lon } else { lat - p.lat };
        let (near, far) = if diff < 0.0 {
            (node.left, node.right)
        } else {
            (node.right, node.left)
        };

        if let Some(child) = near {
            self.nearest_recursive(child, lon, lat, best);
        }
        // Equal distances on the far side can still win the tie-break
        if diff * diff <= best.0 {
            if let Some(child) = far {
                self.nearest_recursive(child, lon, lat, best);
            }
        }
    }
}

fn build_recursive(
    points: &[SamplePoint],
    indices: &mut [usize],
    depth: usize,
    nodes: &mut Vec<KdNode>,
) -> usize {
    let axis = (depth % 2) as u8;
    let key = |i: usize| if axis == 0 { points[i].lon } else { points[i].lat };
    indices.sort_by(|&a, &b| key(a).total_cmp(&key(b)).then(a.cmp(&b)));

    let mid = indices.len() / 2;
    let node_idx = nodes.len();
    nodes.push(KdNode {
        point_idx: indices[mid],
        axis,
        left: None,
        right: None,
    });

    let (left, rest) = indices.split_at_mut(mid);
    let right = &mut rest[1..];

    if !left.is_empty() {
        let child = build_recursive(points, left, depth + 1, nodes);
        nodes[node_idx].left = Some(child);
    }
    if !right.is_empty() {
        let child = build_recursive(points, right, depth + 1, nodes);
        nodes[node_idx].right = Some(child);
    }

    node_idx
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brute_force(points: &[SamplePoint], lon: f64, lat: f64) -> usize {
        let mut best = (f64::INFINITY, 0);
        for (i, p) in points.iter().enumerate() {
            let d = p.dist_sq(lon, lat);
            if d < best.0 {
                best = (d, i);
            }
        }
        best.1
    }

    #[test]
    fn test_matches_brute_force() {
        let points: Vec<SamplePoint> = (0..60)
            .map(|i| {
                let t = i as f64;
                SamplePoint::new((t * 7.3) % 13.0, (t * 3.1) % 9.0, t)
            })
            .collect();
        let tree = KdTree::build(&points);
        assert_eq!(tree.len(), 60);

        for qi in 0..40 {
            let q = qi as f64;
            let (lon, lat) = ((q * 1.7) % 13.0 + 0.05, (q * 2.9) % 9.0 + 0.05);
            let found = tree.nearest(lon, lat).unwrap();
            let expected = brute_force(&points, lon, lat);
            assert_eq!(
                found.distance_sq,
                points[expected].dist_sq(lon, lat),
                "query ({}, {})",
                lon,
                lat
            );
        }
    }

    #[test]
    fn test_tie_goes_to_first_point() {
        let points = vec![
            SamplePoint::new(1.0, 0.0, 10.0),
            SamplePoint::new(-1.0, 0.0, 20.0),
        ];
        let tree = KdTree::build(&points);
        assert_eq!(tree.nearest(0.0, 0.0).unwrap().index, 0);
    }

    #[test]
    fn test_empty_tree() {
        let tree = KdTree::build(&[]);
        assert!(tree.is_empty());
        assert!(tree.nearest(0.0, 0.0).is_none());
    }
}
