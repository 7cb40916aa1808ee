//! Floating-point planar primitives.

mod linestring;
mod point2;
mod segment2;
mod vec2;

pub use linestring::LineString;
pub use point2::Point2;
pub use segment2::Segment2;
pub use vec2::Vec2;
