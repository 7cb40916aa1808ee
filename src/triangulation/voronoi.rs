//! Finite Voronoi ridges from the Delaunay dual.
//!
//! Every Delaunay edge shared by two triangles corresponds to a finite
//! Voronoi ridge joining the two circumcenters. Hull edges correspond to
//! unbounded rays, which are never needed for centerlines and are skipped.

use super::delaunay::{delaunay_triangulation, edge_key, triangle_circumcenter};
use crate::primitives::{Point2, Segment2};
use num_traits::Float;
use std::collections::HashMap;

/// Computes the finite ridges of the Voronoi diagram of `sites`.
///
/// Ridges are returned in triangle order, so the output is stable for a
/// given input. Ridges touching a collinear (sliver) triangle are dropped.
///
/// # Example
///
/// ```
/// use pavewidth::triangulation::voronoi_ridges;
/// use pavewidth::Point2;
///
/// let sites: Vec<Point2<f64>> = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(2.0, 0.0),
///     Point2::new(1.0, 2.0),
///     Point2::new(1.0, -2.0),
/// ];
///
/// // Two triangles share the edge (0,0)-(2,0): one finite ridge.
/// assert_eq!(voronoi_ridges(&sites).len(), 1);
/// ```
pub fn voronoi_ridges<F: Float>(sites: &[Point2<F>]) -> Vec<Segment2<F>> {
    let triangles = delaunay_triangulation(sites);
    if triangles.len() < 2 {
        return Vec::new();
    }

    let centers: Vec<Option<Point2<F>>> = triangles
        .iter()
        .map(|tri| triangle_circumcenter(sites[tri.a], sites[tri.b], sites[tri.c]))
        .collect();

    let mut owners: HashMap<(usize, usize), usize> = HashMap::with_capacity(triangles.len() * 2);
    let mut ridges = Vec::new();

    for (index, tri) in triangles.iter().enumerate() {
        for (u, v) in tri.edges() {
            let Some(neighbor) = owners.insert(edge_key(u, v), index) else {
                continue;
            };
            if let (Some(a), Some(b)) = (centers[neighbor], centers[index]) {
                ridges.push(Segment2::new(a, b));
            }
        }
    }

    ridges
}
