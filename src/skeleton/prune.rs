//! Removal of short dead-end branches.

use super::Skeleton;
use crate::primitives::{LineString, Point2};
use num_traits::Float;

/// Drops branches that have a free end and are no longer than `min_length`.
///
/// An end is free when it lies farther than `tolerance` from every other
/// branch. Free ends are judged against the skeleton as given, so removing
/// one spur never exposes another within the same call. A single-line
/// skeleton is returned unchanged.
///
/// # Example
///
/// ```
/// use pavewidth::skeleton::{prune_dead_ends, Skeleton};
/// use pavewidth::{LineString, Point2};
///
/// let skeleton = Skeleton::Multi(vec![
///     LineString::new(vec![Point2::new(0.0, 0.0), Point2::new(3.0, 0.0)]),
///     LineString::new(vec![Point2::new(3.0, 0.0), Point2::new(9.0, 0.0)]),
/// ]);
///
/// // Both ends are free, and only the 6-unit branch is long enough to stay
/// let pruned = prune_dead_ends(skeleton, 5.0, 1e-6);
/// assert_eq!(pruned.total_length(), 6.0);
/// ```
pub fn prune_dead_ends<F: Float>(skeleton: Skeleton<F>, min_length: F, tolerance: F) -> Skeleton<F> {
    let lines = match skeleton {
        Skeleton::Single(line) => return Skeleton::Single(line),
        Skeleton::Multi(lines) => lines,
    };

    let keep: Vec<bool> = (0..lines.len())
        .map(|index| !has_free_end(&lines, index, tolerance) || lines[index].length() > min_length)
        .collect();

    let kept: Vec<LineString<F>> = lines
        .into_iter()
        .zip(keep)
        .filter_map(|(line, keep)| keep.then_some(line))
        .collect();

    Skeleton::Multi(kept)
}

fn has_free_end<F: Float>(lines: &[LineString<F>], index: usize, tolerance: F) -> bool {
    let line = &lines[index];
    [line.first(), line.last()]
        .into_iter()
        .flatten()
        .any(|end| is_free(end, lines, index, tolerance))
}

/// True if `end` is farther than `tolerance` from every line except `own`.
fn is_free<F: Float>(end: Point2<F>, lines: &[LineString<F>], own: usize, tolerance: F) -> bool {
    lines
        .iter()
        .enumerate()
        .filter(|&(other, _)| other != own)
        .all(|(_, line)| line.distance_to_point(end) > tolerance)
}
