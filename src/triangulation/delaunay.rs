//! Delaunay triangulation using the Bowyer-Watson algorithm.
//!
//! The triangulation of the densified polygon boundary is the dual of the
//! Voronoi diagram whose interior ridges form the centerline.
//!
//! # Algorithm
//!
//! 1. Start with a super-triangle containing all points
//! 2. Insert points one at a time, re-triangulating the cavity of triangles
//!    whose circumcircle contains the new point
//! 3. Remove triangles connected to the super-triangle vertices
//!
//! The output order depends only on the input, never on hash iteration, so
//! repeated runs over the same points produce identical triangle lists.
//!
//! # Complexity
//!
//! - Time: O(n²) worst case
//! - Space: O(n)

use crate::primitives::Point2;
use num_traits::Float;

/// A triangle represented by indices into a point array.
///
/// Vertices are stored in counter-clockwise order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Triangle {
    pub a: usize,
    pub b: usize,
    pub c: usize,
}

impl Triangle {
    #[inline]
    pub fn new(a: usize, b: usize, c: usize) -> Self {
        Self { a, b, c }
    }

    /// Returns the three directed edges of this triangle.
    #[inline]
    pub fn edges(&self) -> [(usize, usize); 3] {
        [(self.a, self.b), (self.b, self.c), (self.c, self.a)]
    }

    #[inline]
    pub fn contains_vertex(&self, v: usize) -> bool {
        self.a == v || self.b == v || self.c == v
    }
}

/// Undirected edge key with the smaller index first.
#[inline]
pub(crate) fn edge_key(a: usize, b: usize) -> (usize, usize) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Tests if `p` lies strictly inside the circumcircle of the CCW triangle `a, b, c`.
pub fn in_circumcircle<F: Float>(p: Point2<F>, a: Point2<F>, b: Point2<F>, c: Point2<F>) -> bool {
    let (ax, ay) = (a.x - p.x, a.y - p.y);
    let (bx, by) = (b.x - p.x, b.y - p.y);
    let (cx, cy) = (c.x - p.x, c.y - p.y);

    let aa = ax * ax + ay * ay;
    let bb = bx * bx + by * by;
    let cc = cx * cx + cy * cy;

    let det = ax * (by * cc - cy * bb) - ay * (bx * cc - cx * bb) + aa * (bx * cy - cx * by);

    det > F::zero()
}

/// Circumcenter of a triangle, or `None` when the vertices are collinear.
///
/// Computed relative to `a` to keep the intermediate squares small.
pub fn triangle_circumcenter<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> Option<Point2<F>> {
    let ab = b - a;
    let ac = c - a;
    let d = (ab.cross(ac)) * (F::one() + F::one());

    if d.abs() <= F::epsilon() * (ab.magnitude_squared() + ac.magnitude_squared()) {
        return None;
    }

    let ab2 = ab.magnitude_squared();
    let ac2 = ac.magnitude_squared();
    let ux = (ac.y * ab2 - ab.y * ac2) / d;
    let uy = (ab.x * ac2 - ac.x * ab2) / d;

    let center = Point2::new(a.x + ux, a.y + uy);
    center.is_finite().then_some(center)
}

/// Computes the Delaunay triangulation of a set of points.
///
/// Returns an empty vector for fewer than 3 points or all-collinear input.
/// Each triangle holds indices into `points` in counter-clockwise order.
pub fn delaunay_triangulation<F: Float>(points: &[Point2<F>]) -> Vec<Triangle> {
    if points.len() < 3 {
        return Vec::new();
    }

    let first = points[0];
    let (min, max) = points.iter().fold((first, first), |(min, max), p| {
        (
            Point2::new(min.x.min(p.x), min.y.min(p.y)),
            Point2::new(max.x.max(p.x), max.y.max(p.y)),
        )
    });

    let delta = (max.x - min.x).max(max.y - min.y);
    if !(delta > F::zero()) {
        return Vec::new();
    }
    let mid = min.midpoint(max);
    let margin = F::from(20.0).unwrap_or_else(F::one);

    let n = points.len();
    let mut all_points: Vec<Point2<F>> = points.to_vec();
    all_points.push(Point2::new(mid.x - margin * delta, mid.y - delta));
    all_points.push(Point2::new(mid.x + margin * delta, mid.y - delta));
    all_points.push(Point2::new(mid.x, mid.y + margin * delta));

    let mut triangles: Vec<Triangle> = vec![Triangle::new(n, n + 1, n + 2)];
    let mut cavity_edges: Vec<((usize, usize), (usize, usize))> = Vec::new();

    for (i, &p) in points.iter().enumerate() {
        cavity_edges.clear();

        let mut kept = Vec::with_capacity(triangles.len() + 2);
        for tri in triangles.drain(..) {
            if in_circumcircle(p, all_points[tri.a], all_points[tri.b], all_points[tri.c]) {
                cavity_edges.extend(tri.edges().iter().map(|&(u, v)| (edge_key(u, v), (u, v))));
            } else {
                kept.push(tri);
            }
        }
        triangles = kept;

        // Edges shared by two cavity triangles are interior; the rest bound the hole
        cavity_edges.sort_by_key(|(key, _)| *key);
        let mut k = 0;
        while k < cavity_edges.len() {
            let (key, (u, v)) = cavity_edges[k];
            let mut run = k + 1;
            while run < cavity_edges.len() && cavity_edges[run].0 == key {
                run += 1;
            }
            if run - k == 1 {
                let cross = (all_points[v] - all_points[u]).cross(p - all_points[u]);
                if cross > F::zero() {
                    triangles.push(Triangle::new(u, v, i));
                } else if cross < F::zero() {
                    triangles.push(Triangle::new(v, u, i));
                }
            }
            k = run;
        }
    }

    triangles.retain(|tri| !(tri.a >= n || tri.b >= n || tri.c >= n));
    triangles
}
