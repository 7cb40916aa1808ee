//! Decomposition of a skeleton into two-point segments.

use crate::primitives::Segment2;
use crate::skeleton::Skeleton;
use num_traits::Float;

/// Splits every branch into consecutive vertex pairs.
///
/// Branches are visited in order and each contributes `len - 1` segments,
/// so the output is stable for a given skeleton.
///
/// # Example
///
/// ```
/// use pavewidth::segment::skeleton_segments;
/// use pavewidth::skeleton::Skeleton;
/// use pavewidth::{LineString, Point2};
///
/// let skeleton = Skeleton::Single(LineString::new(vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(1.0, 1.0),
/// ]));
/// assert_eq!(skeleton_segments(&skeleton).len(), 2);
/// ```
pub fn skeleton_segments<F: Float>(skeleton: &Skeleton<F>) -> Vec<Segment2<F>> {
    skeleton
        .lines()
        .iter()
        .flat_map(|line| line.segments())
        .collect()
}
