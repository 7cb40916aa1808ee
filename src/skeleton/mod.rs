//! Centerline skeletons and their cleanup.
//!
//! A [`Skeleton`] is either one branch or several. It is produced by a
//! [`Skeletonize`] strategy and then cleaned by [`clean_skeleton`]:
//!
//! 1. [`merge_lines`] joins touching pieces into maximal lines
//! 2. [`prune_dead_ends`] drops short branches with a free end
//! 3. [`simplify_skeleton`] applies topology-preserving Douglas-Peucker
//!
//! # Example
//!
//! ```
//! use pavewidth::skeleton::{clean_skeleton, CleanOptions, Skeleton};
//! use pavewidth::{LineString, Point2};
//!
//! let raw = Skeleton::from_lines(vec![
//!     LineString::new(vec![Point2::new(0.0, 0.0), Point2::new(4.0, 0.0)]),
//!     LineString::new(vec![Point2::new(4.0, 0.0), Point2::new(9.0, 0.0)]),
//! ]);
//!
//! let cleaned = clean_skeleton(&raw, &CleanOptions::default());
//! assert_eq!(cleaned.branch_count(), 1);
//! ```

mod centerline;
mod merge;
mod prune;
mod simplify;

pub use centerline::{densify_ring, RetryDensified, Skeletonize, VoronoiCenterline};
pub use merge::merge_lines;
pub use prune::prune_dead_ends;
pub use simplify::{simplify_line, simplify_skeleton};

use crate::primitives::LineString;
use num_traits::Float;

/// Endpoints closer than this are treated as the same skeleton node.
pub(crate) fn snap_tolerance<F: Float>() -> F {
    F::from(1e-6).unwrap_or_else(F::epsilon)
}

/// Tolerance for segment crossing tests.
pub(crate) fn crossing_tolerance<F: Float>() -> F {
    F::from(1e-9).unwrap_or_else(F::epsilon)
}

/// A centerline made of one or more line branches.
///
/// An empty skeleton is `Multi` with no branches.
#[derive(Debug, Clone, PartialEq)]
pub enum Skeleton<F> {
    /// A single connected line.
    Single(LineString<F>),
    /// Several branches, possibly touching at their endpoints.
    Multi(Vec<LineString<F>>),
}

impl<F: Float> Skeleton<F> {
    /// A skeleton with no branches.
    pub fn empty() -> Self {
        Skeleton::Multi(Vec::new())
    }

    /// Wraps `lines`, using `Single` when there is exactly one.
    pub fn from_lines(mut lines: Vec<LineString<F>>) -> Self {
        if lines.len() == 1 {
            if let Some(line) = lines.pop() {
                return Skeleton::Single(line);
            }
        }
        Skeleton::Multi(lines)
    }

    /// All branches as a slice.
    pub fn lines(&self) -> &[LineString<F>] {
        match self {
            Skeleton::Single(line) => std::slice::from_ref(line),
            Skeleton::Multi(lines) => lines,
        }
    }

    pub fn branch_count(&self) -> usize {
        self.lines().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines().iter().all(LineString::is_empty)
    }

    /// Sum of branch lengths.
    pub fn total_length(&self) -> F {
        self.lines()
            .iter()
            .fold(F::zero(), |acc, line| acc + line.length())
    }
}

/// Thresholds for [`clean_skeleton`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CleanOptions<F> {
    /// Dead-end branches longer than this are kept.
    pub dead_end_length: F,
    /// Douglas-Peucker tolerance.
    pub simplify_tolerance: F,
}

impl<F: Float> Default for CleanOptions<F> {
    fn default() -> Self {
        Self {
            dead_end_length: F::from(5.0).unwrap_or_else(F::zero),
            simplify_tolerance: F::one(),
        }
    }
}

/// Merges, prunes and simplifies a raw skeleton.
pub fn clean_skeleton<F: Float>(raw: &Skeleton<F>, options: &CleanOptions<F>) -> Skeleton<F> {
    let merged = merge_lines(raw.lines(), snap_tolerance());
    let branches = merged.branch_count();

    let pruned = prune_dead_ends(merged, options.dead_end_length, snap_tolerance());
    if pruned.is_empty() && branches > 0 {
        log::debug!("Dead-end pruning removed all {} skeleton branches", branches);
    }

    simplify_skeleton(&pruned, options.simplify_tolerance)
}
