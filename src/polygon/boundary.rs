//! Polygon boundary as a multi-part line for nearest-point queries.

use super::core::{ring_edges, Polygon};
use crate::primitives::{Point2, Segment2};
use num_traits::Float;

/// The exterior ring plus every hole, flattened into edges.
///
/// Distance queries consider all rings, so a point next to a hole measures
/// against that hole rather than the exterior.
#[derive(Debug, Clone)]
pub struct Boundary<F> {
    edges: Vec<Segment2<F>>,
}

impl<F: Float> Boundary<F> {
    /// Collects the edges of every ring of `polygon`.
    pub fn from_polygon(polygon: &Polygon<F>) -> Self {
        let edges = polygon
            .rings()
            .filter(|ring| ring.len() >= 2)
            .flat_map(|ring| ring_edges(ring).map(Segment2::from))
            .collect();
        Self { edges }
    }

    /// All boundary edges, exterior ring first.
    pub fn edges(&self) -> &[Segment2<F>] {
        &self.edges
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Closest boundary point to `p` and its distance.
    ///
    /// Returns `None` for an empty boundary.
    pub fn nearest_point(&self, p: Point2<F>) -> Option<(Point2<F>, F)> {
        let mut best: Option<(Point2<F>, F)> = None;

        for edge in &self.edges {
            let (candidate, _) = edge.closest_point(p);
            let dist_sq = candidate.distance_squared(p);
            match best {
                Some((_, best_sq)) if best_sq <= dist_sq => {}
                _ => best = Some((candidate, dist_sq)),
            }
        }

        best.map(|(point, dist_sq)| (point, dist_sq.sqrt()))
    }

    /// Minimum distance from `p` to any ring; infinity for an empty boundary.
    pub fn distance_to(&self, p: Point2<F>) -> F {
        self.nearest_point(p)
            .map_or_else(F::infinity, |(_, distance)| distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_edges_cover_all_rings() {
        let poly: Polygon<f64> = Polygon::with_holes(
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(10.0, 0.0),
                Point2::new(10.0, 10.0),
                Point2::new(0.0, 10.0),
            ],
            vec![vec![
                Point2::new(4.0, 4.0),
                Point2::new(6.0, 4.0),
                Point2::new(5.0, 6.0),
            ]],
        );
        let boundary = Boundary::from_polygon(&poly);
        assert_eq!(boundary.edges().len(), 7);
    }

    #[test]
    fn test_nearest_point_prefers_hole() {
        let poly: Polygon<f64> = Polygon::with_holes(
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(20.0, 0.0),
                Point2::new(20.0, 20.0),
                Point2::new(0.0, 20.0),
            ],
            vec![vec![
                Point2::new(9.0, 9.0),
                Point2::new(11.0, 9.0),
                Point2::new(11.0, 11.0),
                Point2::new(9.0, 11.0),
            ]],
        );
        let boundary = Boundary::from_polygon(&poly);

        let (nearest, distance) = boundary.nearest_point(Point2::new(10.0, 7.5)).unwrap();
        assert_relative_eq!(distance, 1.5, epsilon = 1e-12);
        assert_relative_eq!(nearest.y, 9.0, epsilon = 1e-12);
    }

    #[test]
    fn test_empty_boundary() {
        let boundary = Boundary::from_polygon(&Polygon::<f64>::empty());
        assert!(boundary.is_empty());
        assert!(boundary.nearest_point(Point2::origin()).is_none());
        assert!(boundary.distance_to(Point2::origin()).is_infinite());
    }
}
