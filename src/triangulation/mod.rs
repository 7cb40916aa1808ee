//! Delaunay triangulation and its Voronoi dual.

mod delaunay;
mod voronoi;

pub use delaunay::{delaunay_triangulation, in_circumcircle, triangle_circumcenter, Triangle};
pub use voronoi::voronoi_ridges;
