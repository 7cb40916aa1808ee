//! Width sampling along centerline segments.
//!
//! Each sample measures the distance from a point on the centerline to the
//! nearest polygon edge, holes included. Twice that distance is the local
//! pavement width.

use crate::polygon::Boundary;
use crate::primitives::{Point2, Segment2};
use num_traits::Float;

/// Evenly spaced sample points along `segment`, both ends included.
///
/// The count is `round(length / spacing) + 1`. When that comes to a single
/// point, the segment midpoint is used instead of its start so the sample
/// does not lean toward one end. Points that would fall past the end are
/// clamped onto it.
///
/// # Example
///
/// ```
/// use pavewidth::sampling::sample_points;
/// use pavewidth::Segment2;
///
/// let segment = Segment2::from_coords(0.0_f64, 0.0, 4.2, 0.0);
/// assert_eq!(sample_points(segment, 1.0).len(), 5);
///
/// let short = Segment2::from_coords(0.0_f64, 0.0, 0.3, 0.0);
/// let only = sample_points(short, 1.0);
/// assert_eq!(only.len(), 1);
/// assert!((only[0].x - 0.15).abs() < 1e-12);
/// ```
pub fn sample_points<F: Float>(segment: Segment2<F>, spacing: F) -> Vec<Point2<F>> {
    let count = sample_count(segment.length(), spacing);
    if count <= 1 {
        return vec![segment.midpoint()];
    }

    (0..count)
        .map(|i| {
            let along = F::from(i).map_or(F::infinity(), |i| i * spacing);
            segment.point_along(along)
        })
        .collect()
}

/// Distance from each sample point to the nearest boundary edge.
///
/// Never empty: even a zero-length segment yields one sample.
pub fn sample_distances<F: Float>(segment: Segment2<F>, boundary: &Boundary<F>, spacing: F) -> Vec<F> {
    sample_points(segment, spacing)
        .into_iter()
        .map(|p| boundary.distance_to(p))
        .collect()
}

/// `round(length / spacing) + 1`, rounding halves away from zero.
fn sample_count<F: Float>(length: F, spacing: F) -> usize {
    if !(spacing > F::zero()) {
        return 1;
    }
    (length / spacing)
        .round()
        .to_usize()
        .map_or(1, |steps| steps.saturating_add(1))
}
