//! Topology-preserving Douglas-Peucker simplification of skeleton branches.
//!
//! Plain Douglas-Peucker may replace a run of vertices by a shortcut that
//! crosses another branch or another part of the same line. Here such a
//! shortcut is refused and the run is split at its farthest vertex instead,
//! exactly as if the tolerance had been exceeded.

use super::{crossing_tolerance, Skeleton};
use crate::primitives::{LineString, Point2, Segment2};
use crate::tolerance::segments_cross;
use num_traits::Float;

/// Simplifies one line, refusing shortcuts that cross `obstacles` or the
/// rest of the line itself.
///
/// The first and last points are always kept. A closed line that would
/// shrink below four points is returned unchanged.
///
/// # Example
///
/// ```
/// use pavewidth::skeleton::simplify_line;
/// use pavewidth::{LineString, Point2};
///
/// let line = LineString::new(vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(5.0, 0.5),
///     Point2::new(10.0, 0.0),
/// ]);
///
/// assert_eq!(simplify_line(&line, 1.0, &[]).len(), 2);
/// ```
pub fn simplify_line<F: Float>(line: &LineString<F>, tolerance: F, obstacles: &[Segment2<F>]) -> LineString<F> {
    let points = &line.points;
    let n = points.len();
    if n < 3 {
        return line.clone();
    }

    let mut keep = vec![false; n];
    keep[0] = true;
    keep[n - 1] = true;

    let context = Context {
        points,
        obstacles,
        tolerance,
        eps: crossing_tolerance(),
    };
    context.simplify_range(0, n - 1, &mut keep);

    let simplified: Vec<Point2<F>> = keep
        .iter()
        .zip(points)
        .filter_map(|(&k, &p)| k.then_some(p))
        .collect();

    if line.is_closed() && simplified.len() < 4 {
        return line.clone();
    }
    LineString::new(simplified)
}

/// Simplifies every branch of a skeleton so that no branch crosses another.
///
/// Branches are processed in order; each one is checked against the
/// current state of all the others.
pub fn simplify_skeleton<F: Float>(skeleton: &Skeleton<F>, tolerance: F) -> Skeleton<F> {
    match skeleton {
        Skeleton::Single(line) => Skeleton::Single(simplify_line(line, tolerance, &[])),
        Skeleton::Multi(lines) => {
            let mut current = lines.clone();
            for index in 0..current.len() {
                let obstacles: Vec<Segment2<F>> = current
                    .iter()
                    .enumerate()
                    .filter(|&(other, _)| other != index)
                    .flat_map(|(_, line)| line.segments())
                    .collect();
                current[index] = simplify_line(&current[index], tolerance, &obstacles);
            }
            Skeleton::Multi(current)
        }
    }
}

struct Context<'a, F> {
    points: &'a [Point2<F>],
    obstacles: &'a [Segment2<F>],
    tolerance: F,
    eps: F,
}

impl<F: Float> Context<'_, F> {
    /// Processes the run from `start` to `end` (inclusive).
    fn simplify_range(&self, start: usize, end: usize, keep: &mut [bool]) {
        if end <= start + 1 {
            return;
        }

        let shortcut = Segment2::new(self.points[start], self.points[end]);
        let mut max_dist = F::zero();
        let mut max_idx = start + 1;

        for i in (start + 1)..end {
            let dist = shortcut.distance_to_point(self.points[i]);
            if dist > max_dist {
                max_dist = dist;
                max_idx = i;
            }
        }

        if max_dist > self.tolerance || self.shortcut_crosses(shortcut, start, end) {
            keep[max_idx] = true;
            self.simplify_range(start, max_idx, keep);
            self.simplify_range(max_idx, end, keep);
        }
    }

    fn shortcut_crosses(&self, shortcut: Segment2<F>, start: usize, end: usize) -> bool {
        let outside_run = self
            .points
            .windows(2)
            .enumerate()
            .filter(|&(k, _)| k < start || k >= end)
            .map(|(_, pair)| Segment2::new(pair[0], pair[1]));

        self.obstacles
            .iter()
            .copied()
            .chain(outside_run)
            .any(|other| segments_cross(shortcut, other, self.eps))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(coords: &[(f64, f64)]) -> LineString<f64> {
        LineString::new(coords.iter().map(|&(x, y)| Point2::new(x, y)).collect())
    }

    #[test]
    fn test_two_points_unchanged() {
        let l = line(&[(0.0, 0.0), (3.0, 3.0)]);
        assert_eq!(simplify_line(&l, 1.0, &[]), l);
    }

    #[test]
    fn test_small_wiggles_removed() {
        let l = line(&[(0.0, 0.0), (2.0, 0.3), (4.0, -0.2), (6.0, 0.4), (8.0, 0.0)]);
        let simplified = simplify_line(&l, 1.0, &[]);
        assert_eq!(simplified, line(&[(0.0, 0.0), (8.0, 0.0)]));
    }

    #[test]
    fn test_large_deviation_kept() {
        let l = line(&[(0.0, 0.0), (5.0, 3.0), (10.0, 0.0)]);
        assert_eq!(simplify_line(&l, 1.0, &[]).len(), 3);
    }

    #[test]
    fn test_shortcut_across_obstacle_refused() {
        let l = line(&[(0.0, 0.0), (5.0, 0.5), (10.0, 0.0)]);
        // Hangs below the bend, so the straight shortcut would cut it
        let obstacle = Segment2::from_coords(5.0, 0.2, 5.0, -3.0);

        assert_eq!(simplify_line(&l, 1.0, &[]).len(), 2);
        assert_eq!(simplify_line(&l, 1.0, &[obstacle]).len(), 3);
    }

    #[test]
    fn test_touching_obstacle_at_endpoint_is_allowed() {
        let l = line(&[(0.0, 0.0), (5.0, 0.5), (10.0, 0.0)]);
        let obstacle = Segment2::from_coords(10.0, 0.0, 10.0, 5.0);
        assert_eq!(simplify_line(&l, 1.0, &[obstacle]).len(), 2);
    }

    #[test]
    fn test_small_closed_line_reverts() {
        let ring = line(&[(0.0, 0.0), (0.5, 0.0), (0.5, 0.5), (0.0, 0.5), (0.0, 0.0)]);
        assert_eq!(simplify_line(&ring, 10.0, &[]), ring);
    }

    #[test]
    fn test_large_closed_line_simplifies() {
        let ring = line(&[
            (0.0, 0.0),
            (5.0, 0.1),
            (10.0, 0.0),
            (10.0, 10.0),
            (0.0, 10.0),
            (0.0, 0.0),
        ]);
        let simplified = simplify_line(&ring, 1.0, &[]);
        assert!(simplified.is_closed());
        assert_eq!(simplified.len(), 5);
    }

    #[test]
    fn test_skeleton_branches_never_cross() {
        // A short neighbour hangs under the bend, across the straight shortcut
        let skeleton = Skeleton::Multi(vec![
            line(&[(0.0, 0.0), (5.0, 0.8), (10.0, 0.0)]),
            line(&[(5.0, 0.5), (5.0, -0.5)]),
        ]);

        let simplified = simplify_skeleton(&skeleton, 1.0);
        let lines = simplified.lines();
        assert_eq!(lines[0].len(), 3);
        assert_eq!(lines[1].len(), 2);

        for a in lines[0].segments() {
            for b in lines[1].segments() {
                assert!(!segments_cross(a, b, 1e-9));
            }
        }
    }

    #[test]
    fn test_single_variant_is_preserved() {
        let skeleton = Skeleton::Single(line(&[(0.0, 0.0), (1.0, 0.1), (2.0, 0.0)]));
        let simplified = simplify_skeleton(&skeleton, 1.0);
        assert!(matches!(simplified, Skeleton::Single(ref l) if l.len() == 2));
    }
}
