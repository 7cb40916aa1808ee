//! Core polygon type and ring operations.

use crate::primitives::{Point2, Vec2};
use num_traits::Float;
use serde::{Deserialize, Serialize};

/// A planar region bounded by one exterior ring and zero or more holes.
///
/// Rings are stored open: the closing edge from the last vertex back to the
/// first is implicit. A duplicated closing vertex is dropped on construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon<F> {
    /// The outer ring.
    pub exterior: Vec<Point2<F>>,
    /// Interior rings (holes).
    pub holes: Vec<Vec<Point2<F>>>,
}

impl<F: Float> Polygon<F> {
    /// Creates a polygon without holes.
    #[inline]
    pub fn new(exterior: Vec<Point2<F>>) -> Self {
        Self::with_holes(exterior, Vec::new())
    }

    /// Creates a polygon with interior rings.
    pub fn with_holes(exterior: Vec<Point2<F>>, holes: Vec<Vec<Point2<F>>>) -> Self {
        Self {
            exterior: open_ring(exterior),
            holes: holes.into_iter().map(open_ring).collect(),
        }
    }

    /// Creates an empty polygon.
    #[inline]
    pub fn empty() -> Self {
        Self {
            exterior: Vec::new(),
            holes: Vec::new(),
        }
    }

    /// Returns true if the exterior ring has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.exterior.is_empty()
    }

    /// Iterates over all rings, exterior first.
    pub fn rings(&self) -> impl Iterator<Item = &[Point2<F>]> + '_ {
        std::iter::once(self.exterior.as_slice()).chain(self.holes.iter().map(Vec::as_slice))
    }

    /// Area of the exterior minus the area of every hole.
    pub fn area(&self) -> F {
        let holes = self
            .holes
            .iter()
            .fold(F::zero(), |acc, hole| acc + ring_signed_area(hole).abs());
        ring_signed_area(&self.exterior).abs() - holes
    }

    /// Returns true when the polygon cannot enclose any area: fewer than three
    /// distinct exterior vertices, non-finite coordinates, or zero area.
    pub fn is_degenerate(&self) -> bool {
        if self.rings().flatten().any(|p| !p.is_finite()) {
            return true;
        }
        let mut distinct = self.exterior.clone();
        distinct.dedup();
        if distinct.len() < 3 {
            return true;
        }
        self.area() <= F::epsilon()
    }

    /// Tests if a point lies inside the exterior and outside every hole.
    ///
    /// Points exactly on a ring may return either true or false.
    pub fn contains(&self, point: Point2<F>) -> bool {
        ring_contains(&self.exterior, point)
            && !self.holes.iter().any(|hole| ring_contains(hole, point))
    }

    /// Returns the exterior bounding box as (min, max) points.
    pub fn bounding_box(&self) -> Option<(Point2<F>, Point2<F>)> {
        let first = *self.exterior.first()?;
        let (min, max) = self.exterior[1..].iter().fold((first, first), |(min, max), v| {
            (
                Point2::new(min.x.min(v.x), min.y.min(v.y)),
                Point2::new(max.x.max(v.x), max.y.max(v.y)),
            )
        });
        Some((min, max))
    }

    /// Returns a copy with every vertex shifted by `offset`.
    pub fn translated(&self, offset: Vec2<F>) -> Self {
        let shift = |ring: &Vec<Point2<F>>| ring.iter().map(|&p| p + offset).collect::<Vec<_>>();
        Self {
            exterior: shift(&self.exterior),
            holes: self.holes.iter().map(shift).collect(),
        }
    }
}

/// Drops a trailing vertex equal to the first one.
fn open_ring<F: Float>(mut ring: Vec<Point2<F>>) -> Vec<Point2<F>> {
    if ring.len() > 1 && ring.first() == ring.last() {
        ring.pop();
    }
    ring
}

/// Signed area of an open ring using the shoelace formula.
///
/// Positive for CCW winding, negative for CW winding.
pub fn ring_signed_area<F: Float>(ring: &[Point2<F>]) -> F {
    if ring.len() < 3 {
        return F::zero();
    }

    let mut area = F::zero();
    let n = ring.len();

    for i in 0..n {
        let j = (i + 1) % n;
        area = area + ring[i].x * ring[j].y;
        area = area - ring[j].x * ring[i].y;
    }

    area / (F::one() + F::one())
}

/// Length of an open ring including its closing edge.
pub fn ring_perimeter<F: Float>(ring: &[Point2<F>]) -> F {
    if ring.len() < 2 {
        return F::zero();
    }
    ring_edges(ring).fold(F::zero(), |acc, (a, b)| acc + a.distance(b))
}

/// Iterates over the edges of an open ring, closing edge last.
pub fn ring_edges<F: Float>(ring: &[Point2<F>]) -> impl Iterator<Item = (Point2<F>, Point2<F>)> + '_ {
    let n = ring.len();
    (0..n).map(move |i| (ring[i], ring[(i + 1) % n]))
}

/// Ray-casting point-in-ring test.
///
/// Points on the ring may return either true or false.
pub fn ring_contains<F: Float>(ring: &[Point2<F>], point: Point2<F>) -> bool {
    if ring.len() < 3 {
        return false;
    }

    let mut inside = false;
    let n = ring.len();

    let mut j = n - 1;
    for i in 0..n {
        let vi = ring[i];
        let vj = ring[j];

        if ((vi.y > point.y) != (vj.y > point.y))
            && (point.x < (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x)
        {
            inside = !inside;
        }
        j = i;
    }

    inside
}
