//! Epsilon-aware geometric predicates.
//!
//! All functions in this module take explicit tolerance parameters.

mod predicates;

pub use predicates::{point_on_segment, segments_cross, segments_intersect, SegmentIntersection};
