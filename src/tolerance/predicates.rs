//! Segment predicates with explicit tolerance.

use crate::primitives::{Point2, Segment2};
use num_traits::Float;

/// Returns `true` if `p` is within distance `eps` of `segment`.
#[inline]
pub fn point_on_segment<F: Float>(p: Point2<F>, segment: Segment2<F>, eps: F) -> bool {
    segment.distance_squared_to_point(p) <= eps * eps
}

/// Result of a segment intersection test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentIntersection<F> {
    /// Segments do not intersect.
    None,
    /// Segments meet at a single point.
    Point {
        /// The intersection point.
        point: Point2<F>,
        /// Parameter along the first segment (0 = start, 1 = end).
        t1: F,
        /// Parameter along the second segment (0 = start, 1 = end).
        t2: F,
    },
    /// Segments are collinear and share a stretch of positive length.
    Overlapping {
        start: Point2<F>,
        end: Point2<F>,
    },
}

/// Tests if two segments intersect, with tolerance `eps` used for the
/// parallel test and for the parameter range checks.
pub fn segments_intersect<F: Float>(
    s1: Segment2<F>,
    s2: Segment2<F>,
    eps: F,
) -> SegmentIntersection<F> {
    let d1 = s1.direction();
    let d2 = s2.direction();
    let cross = d1.cross(d2);
    let offset = s2.start - s1.start;

    if cross.abs() > eps {
        // Cramer's rule on s1.start + t1 * d1 = s2.start + t2 * d2
        let t1 = offset.cross(d2) / cross;
        let t2 = offset.cross(d1) / cross;
        let in_range = |t: F| t >= -eps && t <= F::one() + eps;

        if !(in_range(t1) && in_range(t2)) {
            return SegmentIntersection::None;
        }
        let t1 = t1.max(F::zero()).min(F::one());
        return SegmentIntersection::Point {
            point: s1.point_at(t1),
            t1,
            t2: t2.max(F::zero()).min(F::one()),
        };
    }

    collinear_overlap(s1, s2, eps)
}

/// Parallel case: either disjoint, touching at a point, or overlapping.
fn collinear_overlap<F: Float>(s1: Segment2<F>, s2: Segment2<F>, eps: F) -> SegmentIntersection<F> {
    let d1 = s1.direction();
    let len_sq = d1.magnitude_squared();
    if len_sq <= eps * eps {
        return if point_on_segment(s1.start, s2, eps) {
            let (_, t2) = s2.closest_point(s1.start);
            SegmentIntersection::Point {
                point: s1.start,
                t1: F::zero(),
                t2,
            }
        } else {
            SegmentIntersection::None
        };
    }

    // Parallel lines that are not the same line never meet
    if d1.cross(s2.start - s1.start).abs() / len_sq.sqrt() > eps {
        return SegmentIntersection::None;
    }

    // Project s2 onto s1's parameter space and clip to [0, 1]
    let a = (s2.start - s1.start).dot(d1) / len_sq;
    let b = (s2.end - s1.start).dot(d1) / len_sq;
    let lo = a.min(b).max(F::zero());
    let hi = a.max(b).min(F::one());

    if lo > hi + eps {
        SegmentIntersection::None
    } else if (hi - lo).abs() <= eps {
        let (_, t2) = s2.closest_point(s1.point_at(lo));
        SegmentIntersection::Point {
            point: s1.point_at(lo),
            t1: lo,
            t2,
        }
    } else {
        SegmentIntersection::Overlapping {
            start: s1.point_at(lo),
            end: s1.point_at(hi),
        }
    }
}

/// Returns `true` if the segments cross away from their endpoints or overlap
/// along a stretch. Touching at a shared endpoint does not count.
pub fn segments_cross<F: Float>(s1: Segment2<F>, s2: Segment2<F>, eps: F) -> bool {
    let interior = |t: F| t > eps && t < F::one() - eps;
    match segments_intersect(s1, s2, eps) {
        SegmentIntersection::None => false,
        SegmentIntersection::Overlapping { .. } => true,
        SegmentIntersection::Point { t1, t2, .. } => interior(t1) || interior(t2),
    }
}
