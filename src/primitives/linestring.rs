//! Open or closed polyline type.

use super::{Point2, Segment2};
use num_traits::Float;
use serde::{Deserialize, Serialize};

/// An ordered sequence of vertices joined by straight edges.
///
/// A line whose first and last vertices coincide is closed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineString<F> {
    pub points: Vec<Point2<F>>,
}

impl<F: Float> LineString<F> {
    #[inline]
    pub fn new(points: Vec<Point2<F>>) -> Self {
        Self { points }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First vertex, if any.
    #[inline]
    pub fn first(&self) -> Option<Point2<F>> {
        self.points.first().copied()
    }

    /// Last vertex, if any.
    #[inline]
    pub fn last(&self) -> Option<Point2<F>> {
        self.points.last().copied()
    }

    /// Returns `true` if the line has at least one edge and ends where it starts.
    pub fn is_closed(&self) -> bool {
        self.points.len() > 2 && self.points.first() == self.points.last()
    }

    /// Total length of all edges.
    pub fn length(&self) -> F {
        self.segments()
            .fold(F::zero(), |acc, segment| acc + segment.length())
    }

    /// Iterates over consecutive vertex pairs as segments.
    pub fn segments(&self) -> impl Iterator<Item = Segment2<F>> + '_ {
        self.points
            .windows(2)
            .map(|pair| Segment2::new(pair[0], pair[1]))
    }

    /// Distance from `p` to the nearest edge (or the single vertex).
    ///
    /// Returns infinity for an empty line.
    pub fn distance_to_point(&self, p: Point2<F>) -> F {
        match self.points.as_slice() {
            [] => F::infinity(),
            [only] => only.distance(p),
            _ => self
                .segments()
                .fold(F::infinity(), |best, s| best.min(s.distance_to_point(p))),
        }
    }
}

impl<F: Float> From<Vec<Point2<F>>> for LineString<F> {
    fn from(points: Vec<Point2<F>>) -> Self {
        Self::new(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn l_shape() -> LineString<f64> {
        LineString::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(3.0, 0.0),
            Point2::new(3.0, 4.0),
        ])
    }

    #[test]
    fn test_length() {
        assert_relative_eq!(l_shape().length(), 7.0, epsilon = 1e-12);
        assert_eq!(LineString::<f64>::new(vec![]).length(), 0.0);
    }

    #[test]
    fn test_segments() {
        let segments: Vec<_> = l_shape().segments().collect();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[1].start, Point2::new(3.0, 0.0));
    }

    #[test]
    fn test_is_closed() {
        assert!(!l_shape().is_closed());

        let mut ring = l_shape();
        ring.points.push(Point2::new(0.0, 0.0));
        assert!(ring.is_closed());
    }

    #[test]
    fn test_distance_to_point() {
        let line = l_shape();
        assert_relative_eq!(line.distance_to_point(Point2::new(5.0, 2.0)), 2.0, epsilon = 1e-12);
        assert_relative_eq!(line.distance_to_point(Point2::new(1.0, 0.0)), 0.0, epsilon = 1e-12);
        assert!(LineString::<f64>::new(vec![]).distance_to_point(Point2::origin()).is_infinite());
    }
}
