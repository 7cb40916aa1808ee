//! pavewidth - Pavement width estimation from paved-area polygons
//!
//! Each polygon (a sidewalk, a path, a plaza) is reduced to an approximate
//! centerline from the Voronoi diagram of its densified boundary. The
//! centerline is cleaned, cut into two-point segments, and every segment is
//! sampled against the polygon boundary. The mean distance gives a width and
//! a corridor polygon per segment.
//!
//! # Example
//!
//! ```
//! use pavewidth::{Crs, PavementBatch, PavementFeature, Point2, Polygon, WidthConfig, WidthPipeline};
//!
//! let strip = Polygon::new(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(30.0, 0.0),
//!     Point2::new(30.0, 3.0),
//!     Point2::new(0.0, 3.0),
//! ]);
//! let batch = PavementBatch::new(
//!     Some(Crs::new("EPSG:2263")),
//!     vec![PavementFeature::new("walk-1", strip)],
//! );
//!
//! let pipeline = WidthPipeline::<f64>::new(&WidthConfig::default()).unwrap();
//! let output = pipeline.process_batch(&batch);
//!
//! let summary = output.summary().unwrap();
//! assert!((summary.mean_width - 3.0).abs() < 0.2);
//! assert!(output.failures.is_empty());
//! ```

pub mod batch;
pub mod config;
pub mod error;
pub mod parallel;
pub mod pipeline;
pub mod polygon;
pub mod primitives;
pub mod sampling;
pub mod segment;
pub mod skeleton;
pub mod tolerance;
pub mod triangulation;
pub mod width;

pub use batch::{Crs, PavementBatch, PavementFeature, PolygonFailure, WidthBatch};
pub use config::WidthConfig;
pub use error::{Result, WidthError};
pub use parallel::ProcessingMode;
pub use pipeline::{DefaultSkeletonizer, WidthPipeline};
pub use polygon::{Boundary, Polygon};
pub use primitives::{LineString, Point2, Segment2, Vec2};
pub use skeleton::{RetryDensified, Skeleton, Skeletonize, VoronoiCenterline};
pub use tolerance::{point_on_segment, segments_cross, segments_intersect, SegmentIntersection};
pub use width::{WidthRecord, WidthSummary};
