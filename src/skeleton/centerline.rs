//! Voronoi-based centerline extraction.
//!
//! The polygon rings are densified into evenly spaced sites, the Voronoi
//! diagram of those sites is computed, and every finite ridge lying inside
//! the polygon becomes a piece of the raw centerline.

use super::{crossing_tolerance, Skeleton};
use crate::error::{Result, WidthError};
use crate::polygon::{ring_edges, ring_perimeter, Polygon};
use crate::primitives::{LineString, Point2, Segment2};
use crate::tolerance::segments_cross;
use crate::triangulation::voronoi_ridges;
use num_traits::Float;

/// A polygon-to-centerline strategy.
pub trait Skeletonize<F: Float> {
    /// Extracts a raw centerline lying inside `polygon`.
    fn skeletonize(&self, polygon: &Polygon<F>) -> Result<Skeleton<F>>;
}

/// Medial-axis approximation from the Voronoi diagram of boundary sites.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoronoiCenterline<F> {
    /// Spacing of sites along each ring.
    pub interpolation_distance: F,
}

impl<F: Float> VoronoiCenterline<F> {
    pub fn new(interpolation_distance: F) -> Self {
        Self {
            interpolation_distance: interpolation_distance.abs(),
        }
    }
}

impl<F: Float> Skeletonize<F> for VoronoiCenterline<F> {
    /// Fails with [`WidthError::TooFewRidges`] when fewer than two ridges
    /// lie inside the polygon.
    fn skeletonize(&self, polygon: &Polygon<F>) -> Result<Skeleton<F>> {
        let (origin, _) = polygon.bounding_box().ok_or(WidthError::EmptyGeometry)?;
        let local = polygon.translated(-origin.to_vec());

        let sites: Vec<Point2<F>> = local
            .rings()
            .flat_map(|ring| densify_ring(ring, self.interpolation_distance))
            .collect();

        let boundary: Vec<Segment2<F>> = local
            .rings()
            .flat_map(|ring| ring_edges(ring).map(Segment2::from))
            .collect();

        let eps = crossing_tolerance::<F>();
        let ridges: Vec<LineString<F>> = voronoi_ridges(&sites)
            .into_iter()
            .filter(|ridge| !ridge.is_degenerate(eps))
            .filter(|ridge| ridge_within(ridge, &local, &boundary, eps))
            .map(|ridge| LineString::new(vec![ridge.start + origin.to_vec(), ridge.end + origin.to_vec()]))
            .collect();

        if ridges.len() < 2 {
            return Err(WidthError::TooFewRidges {
                ridges: ridges.len(),
            });
        }

        Ok(Skeleton::Multi(ridges))
    }
}

/// True if both endpoints are inside the polygon and the ridge crosses no ring.
fn ridge_within<F: Float>(
    ridge: &Segment2<F>,
    polygon: &Polygon<F>,
    boundary: &[Segment2<F>],
    eps: F,
) -> bool {
    polygon.contains(ridge.start)
        && polygon.contains(ridge.end)
        && !boundary.iter().any(|edge| segments_cross(*ridge, *edge, eps))
}

/// Samples an open ring as a closed line: its first vertex, then points
/// every `distance` units while short of the ring length.
///
/// Original vertices other than the first are not kept, and the closing
/// vertex is not repeated.
pub fn densify_ring<F: Float>(ring: &[Point2<F>], distance: F) -> Vec<Point2<F>> {
    let Some(&first) = ring.first() else {
        return Vec::new();
    };
    if ring.len() < 2 || !(distance > F::zero()) {
        return ring.to_vec();
    }

    let length = ring_perimeter(ring);
    let mut sites = vec![first];
    let mut edges = ring_edges(ring).map(Segment2::from).peekable();
    let mut edge_start = F::zero();
    let mut along = distance;

    while along < length {
        // Advance to the edge containing `along`
        while let Some(edge) = edges.peek() {
            let edge_end = edge_start + edge.length();
            if along <= edge_end {
                break;
            }
            edge_start = edge_end;
            edges.next();
        }
        match edges.peek() {
            Some(edge) => sites.push(edge.point_along(along - edge_start)),
            None => break,
        }
        along = along + distance;
    }

    sites
}

/// Retries a strategy with a denser one when too few ridges were found.
///
/// Any other failure, or a failure of the retry, is reported as
/// [`WidthError::Skeletonization`].
#[derive(Debug, Clone)]
pub struct RetryDensified<S> {
    pub primary: S,
    pub fallback: S,
}

impl<S> RetryDensified<S> {
    pub fn new(primary: S, fallback: S) -> Self {
        Self { primary, fallback }
    }
}

impl<F: Float> RetryDensified<VoronoiCenterline<F>> {
    /// Voronoi centerlines at the two site spacings.
    pub fn voronoi(interpolation_distance: F, fallback_interpolation_distance: F) -> Self {
        Self::new(
            VoronoiCenterline::new(interpolation_distance),
            VoronoiCenterline::new(fallback_interpolation_distance),
        )
    }
}

impl<F: Float, S: Skeletonize<F>> Skeletonize<F> for RetryDensified<S> {
    fn skeletonize(&self, polygon: &Polygon<F>) -> Result<Skeleton<F>> {
        match self.primary.skeletonize(polygon) {
            Ok(skeleton) => Ok(skeleton),
            Err(WidthError::TooFewRidges { ridges }) => {
                log::debug!("Only {} ridges found, retrying with denser boundary", ridges);
                self.fallback
                    .skeletonize(polygon)
                    .map_err(WidthError::skeletonization)
            }
            Err(other) => Err(WidthError::skeletonization(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::cell::Cell;

    fn rectangle(width: f64, height: f64) -> Polygon<f64> {
        Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(width, 0.0),
            Point2::new(width, height),
            Point2::new(0.0, height),
        ])
    }

    #[test]
    fn test_densify_square() {
        let square = rectangle(2.0, 2.0);
        let sites = densify_ring(&square.exterior, 0.5);

        // Perimeter 8 at spacing 0.5: start plus 15 interior points
        assert_eq!(sites.len(), 16);
        assert_eq!(sites[0], Point2::new(0.0, 0.0));
        assert_relative_eq!(sites[3].x, 1.5, epsilon = 1e-12);
        assert_relative_eq!(sites[5].y, 0.5, epsilon = 1e-12);
        assert_relative_eq!(sites[5].x, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_densify_walks_the_closing_edge() {
        // Perimeter 3.41; samples at 1, 2 and 3, the last on the closing edge
        let triangle = [
            Point2::new(0.0_f64, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
        ];
        let sites = densify_ring(&triangle, 1.0);
        assert_eq!(sites.len(), 4);

        let last = *sites.last().unwrap();
        assert_relative_eq!(last.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(last.y, 2.0_f64.sqrt() - 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_rectangle_ridges_lie_inside() {
        let rect = rectangle(10.0, 2.0);
        let skeleton = VoronoiCenterline::new(0.5).skeletonize(&rect).unwrap();

        assert!(skeleton.branch_count() >= 2);
        for line in skeleton.lines() {
            for p in &line.points {
                assert!(rect.contains(*p), "{:?} outside rectangle", p);
            }
        }

        // The bulk of the ridges run along the long axis y = 1
        let on_axis = skeleton
            .lines()
            .iter()
            .filter(|l| l.points.iter().all(|p| (p.y - 1.0).abs() < 1e-6))
            .map(LineString::length)
            .sum::<f64>();
        assert!(on_axis > 6.0, "axis length {}", on_axis);
    }

    #[test]
    fn test_translation_does_not_change_shape() {
        let near = rectangle(6.0, 2.0);
        let far = near.translated(crate::Vec2::new(500_000.0, 180_000.0));

        let a = VoronoiCenterline::new(0.5).skeletonize(&near).unwrap();
        let b = VoronoiCenterline::new(0.5).skeletonize(&far).unwrap();

        assert_eq!(a.branch_count(), b.branch_count());
        assert_relative_eq!(a.total_length(), b.total_length(), epsilon = 1e-6);
    }

    #[test]
    fn test_ridges_avoid_holes() {
        let ring = Polygon::with_holes(
            rectangle(12.0, 12.0).exterior,
            vec![vec![
                Point2::new(3.0, 3.0),
                Point2::new(3.0, 9.0),
                Point2::new(9.0, 9.0),
                Point2::new(9.0, 3.0),
            ]],
        );

        let skeleton = VoronoiCenterline::new(0.5).skeletonize(&ring).unwrap();
        for line in skeleton.lines() {
            for p in &line.points {
                assert!(ring.contains(*p), "{:?} inside hole or outside", p);
            }
        }
    }

    #[test]
    fn test_empty_polygon_is_rejected() {
        let err = VoronoiCenterline::new(0.5)
            .skeletonize(&Polygon::<f64>::empty())
            .unwrap_err();
        assert_eq!(err, WidthError::EmptyGeometry);
    }

    /// Fails with TooFewRidges until its budget of failures is spent.
    struct Flaky {
        failures_left: Cell<usize>,
    }

    impl Skeletonize<f64> for Flaky {
        fn skeletonize(&self, _polygon: &Polygon<f64>) -> Result<Skeleton<f64>> {
            if self.failures_left.get() == 0 {
                return Ok(Skeleton::empty());
            }
            self.failures_left.set(self.failures_left.get() - 1);
            Err(WidthError::TooFewRidges { ridges: 0 })
        }
    }

    #[test]
    fn test_retry_recovers_from_too_few_ridges() {
        let strategy = RetryDensified::new(
            Flaky {
                failures_left: Cell::new(1),
            },
            Flaky {
                failures_left: Cell::new(0),
            },
        );
        assert!(strategy.skeletonize(&rectangle(1.0, 1.0)).is_ok());
    }

    #[test]
    fn test_retry_failure_is_skeletonization_error() {
        let strategy = RetryDensified::new(
            Flaky {
                failures_left: Cell::new(1),
            },
            Flaky {
                failures_left: Cell::new(1),
            },
        );
        let err = strategy.skeletonize(&rectangle(1.0, 1.0)).unwrap_err();
        assert_eq!(
            err,
            WidthError::skeletonization(WidthError::TooFewRidges { ridges: 0 })
        );
    }

    #[test]
    fn test_retry_does_not_retry_other_errors() {
        let strategy = RetryDensified::voronoi(0.5, 0.1);
        let err = strategy.skeletonize(&Polygon::empty()).unwrap_err();
        assert_eq!(err, WidthError::skeletonization(WidthError::EmptyGeometry));
    }
}
