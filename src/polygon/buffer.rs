//! Round-capped corridor around a segment.

use super::core::Polygon;
use crate::primitives::{Point2, Segment2, Vec2};
use num_traits::Float;

/// Buffers `segment` by `distance`, producing a stadium-shaped polygon.
///
/// Both ends get a semicircular cap approximated with `resolution` edges per
/// quarter circle. The outline is counter-clockwise. A non-positive or
/// non-finite distance produces an empty polygon, and a degenerate segment
/// produces a circle around its start point.
pub fn buffer_segment<F: Float>(segment: Segment2<F>, distance: F, resolution: usize) -> Polygon<F> {
    if !(distance > F::zero()) || !distance.is_finite() {
        return Polygon::empty();
    }
    let resolution = resolution.max(1);
    let half_turn = F::from(std::f64::consts::PI).unwrap_or_else(F::zero);
    let quarter_turn = half_turn / (F::one() + F::one());

    let Some(direction) = segment.direction().normalize() else {
        return Polygon::new(arc(
            segment.start,
            distance,
            F::zero(),
            half_turn + half_turn,
            4 * resolution,
            false,
        ));
    };

    let heading = direction.angle();
    let mut outline = arc(
        segment.end,
        distance,
        heading - quarter_turn,
        half_turn,
        2 * resolution,
        true,
    );
    outline.extend(arc(
        segment.start,
        distance,
        heading + quarter_turn,
        half_turn,
        2 * resolution,
        true,
    ));

    Polygon::new(outline)
}

/// Points on a CCW arc of `sweep` radians starting at `start_angle`.
///
/// With `inclusive` the final angle is emitted too (`steps + 1` points);
/// otherwise the arc stops one step short, which closes a full circle
/// without duplicating its first point.
fn arc<F: Float>(
    center: Point2<F>,
    radius: F,
    start_angle: F,
    sweep: F,
    steps: usize,
    inclusive: bool,
) -> Vec<Point2<F>> {
    let count = if inclusive { steps + 1 } else { steps };
    let step = sweep / F::from(steps).unwrap_or_else(F::one);

    (0..count)
        .map(|i| {
            let angle = start_angle + step * F::from(i).unwrap_or_else(F::zero);
            center + Vec2::from_angle(angle) * radius
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_buffer_area_matches_stadium() {
        let segment: Segment2<f64> = Segment2::from_coords(0.0, 0.0, 10.0, 0.0);
        let corridor = buffer_segment(segment, 1.0, 64);

        let expected = 10.0 * 2.0 + std::f64::consts::PI;
        assert_relative_eq!(corridor.area(), expected, epsilon = 1e-2);
        assert!(super::super::core::ring_signed_area(&corridor.exterior) > 0.0);
    }

    #[test]
    fn test_buffer_vertices_are_at_radius() {
        let segment: Segment2<f64> = Segment2::from_coords(1.0, 1.0, 4.0, 5.0);
        let corridor = buffer_segment(segment, 0.75, 16);

        assert_eq!(corridor.exterior.len(), 2 * (2 * 16 + 1));
        for vertex in &corridor.exterior {
            assert_relative_eq!(segment.distance_to_point(*vertex), 0.75, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_buffer_contains_segment() {
        let segment: Segment2<f64> = Segment2::from_coords(-3.0, 2.0, 3.0, -1.0);
        let corridor = buffer_segment(segment, 0.5, 8);

        assert!(corridor.contains(segment.midpoint()));
        assert!(corridor.contains(segment.point_at(0.05)));
        assert!(!corridor.contains(Point2::new(10.0, 10.0)));
    }

    #[test]
    fn test_zero_distance_is_empty() {
        let segment: Segment2<f64> = Segment2::from_coords(0.0, 0.0, 1.0, 0.0);
        assert!(buffer_segment(segment, 0.0, 16).is_empty());
        assert!(buffer_segment(segment, f64::NAN, 16).is_empty());
    }

    #[test]
    fn test_degenerate_segment_is_circle() {
        let segment: Segment2<f64> = Segment2::from_coords(2.0, 2.0, 2.0, 2.0);
        let circle = buffer_segment(segment, 1.0, 16);

        assert_eq!(circle.exterior.len(), 64);
        assert_relative_eq!(circle.area(), std::f64::consts::PI, epsilon = 1e-2);
    }
}
