//! Error types for pavement width estimation.

use thiserror::Error;

/// Errors that can occur while turning a polygon into width records.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WidthError {
    /// The polygon has no usable area (too few distinct vertices, zero area
    /// or non-finite coordinates).
    #[error("empty or degenerate polygon geometry")]
    EmptyGeometry,

    /// Too few Voronoi ridges fell inside the polygon to form a centerline.
    #[error("too few ridges inside polygon: found {ridges}, need at least 2")]
    TooFewRidges {
        /// Number of ridges that survived the containment filter.
        ridges: usize,
    },

    /// Centerline extraction failed, including after the densified retry.
    #[error("skeletonization failed: {source}")]
    Skeletonization {
        /// Cause reported by the last attempt.
        source: Box<WidthError>,
    },

    /// A configuration value is out of range.
    #[error("invalid configuration: {name} = {value} ({reason})")]
    InvalidConfig {
        name: &'static str,
        value: String,
        reason: &'static str,
    },
}

impl WidthError {
    /// Wraps `cause` as a skeletonization failure.
    pub fn skeletonization(cause: WidthError) -> Self {
        WidthError::Skeletonization {
            source: Box::new(cause),
        }
    }
}

/// Result alias for width operations.
pub type Result<T> = std::result::Result<T, WidthError>;
