//! Polygons with holes, their boundaries, and segment buffering.
//!
//! # Example
//!
//! ```
//! use pavewidth::polygon::{Boundary, Polygon};
//! use pavewidth::Point2;
//!
//! let rect = Polygon::new(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(10.0, 0.0),
//!     Point2::new(10.0, 2.0),
//!     Point2::new(0.0, 2.0),
//! ]);
//!
//! let boundary = Boundary::from_polygon(&rect);
//! assert_eq!(boundary.distance_to(Point2::new(5.0, 1.0)), 1.0);
//! ```

mod boundary;
mod buffer;
mod core;

pub use boundary::Boundary;
pub use buffer::buffer_segment;
pub use core::{ring_contains, ring_edges, ring_perimeter, ring_signed_area, Polygon};
