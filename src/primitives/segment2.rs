//! 2D line segment type.

use super::{Point2, Vec2};
use num_traits::Float;
use serde::{Deserialize, Serialize};

/// A straight two-point line piece.
///
/// Generic over floating-point types (`f32` or `f64`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment2<F> {
    pub start: Point2<F>,
    pub end: Point2<F>,
}

impl<F: Float> Segment2<F> {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(start: Point2<F>, end: Point2<F>) -> Self {
        Self { start, end }
    }

    /// Creates a segment from coordinate pairs.
    #[inline]
    pub fn from_coords(x1: F, y1: F, x2: F, y2: F) -> Self {
        Self {
            start: Point2::new(x1, y1),
            end: Point2::new(x2, y2),
        }
    }

    /// Returns the direction vector from start to end.
    #[inline]
    pub fn direction(self) -> Vec2<F> {
        self.end - self.start
    }

    #[inline]
    pub fn length_squared(self) -> F {
        self.start.distance_squared(self.end)
    }

    #[inline]
    pub fn length(self) -> F {
        self.start.distance(self.end)
    }

    #[inline]
    pub fn midpoint(self) -> Point2<F> {
        self.start.midpoint(self.end)
    }

    /// Returns the point at parameter `t` along the segment (unclamped).
    #[inline]
    pub fn point_at(self, t: F) -> Point2<F> {
        self.start.lerp(self.end, t)
    }

    /// Returns the point `distance` units from `start`, measured along the
    /// segment. Distances outside `[0, length]` clamp to the endpoints.
    pub fn point_along(self, distance: F) -> Point2<F> {
        let length = self.length();
        if length <= F::zero() || distance <= F::zero() {
            return self.start;
        }
        if distance >= length {
            return self.end;
        }
        self.point_at(distance / length)
    }

    /// Computes the closest point on the segment to `p`.
    ///
    /// Returns `(closest_point, t)` with `t` in `[0, 1]`.
    pub fn closest_point(self, p: Point2<F>) -> (Point2<F>, F) {
        let v = self.direction();
        let len_sq = v.magnitude_squared();

        if len_sq <= F::epsilon() {
            return (self.start, F::zero());
        }

        let t = (p - self.start).dot(v) / len_sq;
        let t_clamped = t.max(F::zero()).min(F::one());

        (self.point_at(t_clamped), t_clamped)
    }

    #[inline]
    pub fn distance_squared_to_point(self, p: Point2<F>) -> F {
        let (closest, _) = self.closest_point(p);
        p.distance_squared(closest)
    }

    #[inline]
    pub fn distance_to_point(self, p: Point2<F>) -> F {
        self.distance_squared_to_point(p).sqrt()
    }

    /// Returns `true` if start and end coincide within `eps`.
    #[inline]
    pub fn is_degenerate(self, eps: F) -> bool {
        self.length_squared() <= eps * eps
    }
}

impl<F: Float> From<(Point2<F>, Point2<F>)> for Segment2<F> {
    fn from((start, end): (Point2<F>, Point2<F>)) -> Self {
        Self::new(start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_length_and_midpoint() {
        let s: Segment2<f64> = Segment2::from_coords(0.0, 0.0, 3.0, 4.0);
        assert_eq!(s.length(), 5.0);
        assert_eq!(s.midpoint(), Point2::new(1.5, 2.0));
    }

    #[test]
    fn test_point_along_clamps() {
        let s: Segment2<f64> = Segment2::from_coords(0.0, 0.0, 4.2, 0.0);

        assert_eq!(s.point_along(0.0), s.start);
        assert_relative_eq!(s.point_along(2.0).x, 2.0, epsilon = 1e-12);
        assert_eq!(s.point_along(5.0), s.end);
        assert_eq!(s.point_along(-1.0), s.start);
    }

    #[test]
    fn test_point_along_degenerate() {
        let s: Segment2<f64> = Segment2::from_coords(1.0, 1.0, 1.0, 1.0);
        assert_eq!(s.point_along(0.5), Point2::new(1.0, 1.0));
    }

    #[test]
    fn test_closest_point() {
        let s: Segment2<f64> = Segment2::from_coords(0.0, 0.0, 10.0, 0.0);

        let (c, t) = s.closest_point(Point2::new(5.0, 5.0));
        assert_relative_eq!(c.x, 5.0, epsilon = 1e-12);
        assert_relative_eq!(t, 0.5, epsilon = 1e-12);

        let (c, t) = s.closest_point(Point2::new(15.0, -2.0));
        assert_eq!(c, s.end);
        assert_eq!(t, 1.0);
    }

    #[test]
    fn test_distance_to_point() {
        let s: Segment2<f64> = Segment2::from_coords(0.0, 0.0, 10.0, 0.0);
        assert_relative_eq!(s.distance_to_point(Point2::new(5.0, 3.0)), 3.0, epsilon = 1e-12);
        assert_relative_eq!(s.distance_to_point(Point2::new(13.0, 4.0)), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_is_degenerate() {
        assert!(Segment2::from_coords(1.0_f64, 1.0, 1.0, 1.0).is_degenerate(1e-10));
        assert!(!Segment2::from_coords(0.0_f64, 0.0, 1.0, 0.0).is_degenerate(1e-10));
    }
}
