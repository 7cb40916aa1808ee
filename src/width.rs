//! Per-segment width records and their summary.

use crate::polygon::{buffer_segment, Polygon};
use crate::primitives::Segment2;
use num_traits::Float;
use serde::{Deserialize, Serialize};

/// The estimated pavement width around one centerline segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidthRecord<F> {
    /// The segment buffered by half the width.
    pub geometry: Polygon<F>,
    /// Twice the mean distance from the segment to the boundary.
    pub width: F,
    /// The centerline segment the width was measured on.
    pub segment: Segment2<F>,
}

impl<F: Float> WidthRecord<F> {
    /// Builds the record for `segment` from its sampled boundary distances.
    ///
    /// Returns `None` when `distances` is empty. A zero mean produces an
    /// empty geometry with zero width.
    ///
    /// # Example
    ///
    /// ```
    /// use pavewidth::{Segment2, WidthRecord};
    ///
    /// let segment = Segment2::from_coords(0.0_f64, 1.0, 4.0, 1.0);
    /// let record = WidthRecord::from_distances(segment, &[0.9, 1.0, 1.1], 16).unwrap();
    /// assert!((record.width - 2.0).abs() < 1e-12);
    /// ```
    pub fn from_distances(segment: Segment2<F>, distances: &[F], resolution: usize) -> Option<Self> {
        let count = F::from(distances.len())?;
        if distances.is_empty() {
            return None;
        }
        let mean = distances.iter().fold(F::zero(), |acc, &d| acc + d) / count;

        Some(Self {
            geometry: buffer_segment(segment, mean, resolution),
            width: mean + mean,
            segment,
        })
    }

    /// Length of the centerline segment.
    #[inline]
    pub fn length(&self) -> F {
        self.segment.length()
    }
}

/// Aggregate statistics over a set of width records.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WidthSummary<F> {
    /// Number of records.
    pub count: usize,
    /// Summed centerline length.
    pub total_length: F,
    /// Mean width weighted by segment length, or the plain mean when every
    /// segment has zero length.
    pub mean_width: F,
    pub min_width: F,
    pub max_width: F,
}

impl<F: Float> WidthSummary<F> {
    /// Summarises `records`, or `None` if there are none.
    pub fn from_records(records: &[WidthRecord<F>]) -> Option<Self> {
        let first = records.first()?;

        let mut total_length = F::zero();
        let mut weighted = F::zero();
        let mut plain = F::zero();
        let mut min_width = first.width;
        let mut max_width = first.width;

        for record in records {
            let length = record.length();
            total_length = total_length + length;
            weighted = weighted + record.width * length;
            plain = plain + record.width;
            min_width = min_width.min(record.width);
            max_width = max_width.max(record.width);
        }

        let mean_width = if total_length > F::zero() {
            weighted / total_length
        } else {
            plain / F::from(records.len())?
        };

        Some(Self {
            count: records.len(),
            total_length,
            mean_width,
            min_width,
            max_width,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::Point2;
    use approx::assert_relative_eq;

    #[test]
    fn test_record_width_is_twice_mean() {
        let segment = Segment2::from_coords(0.0_f64, 0.0, 3.0, 0.0);
        let record = WidthRecord::from_distances(segment, &[1.0, 2.0, 3.0], 4).unwrap();

        assert_relative_eq!(record.width, 4.0);
        assert_eq!(record.segment, segment);
        assert_relative_eq!(record.length(), 3.0);
        // Corridor of half-width 2 around the segment
        assert_relative_eq!(record.geometry.area(), 3.0 * 4.0 + std::f64::consts::PI * 4.0, max_relative = 0.05);
        assert!(record.geometry.contains(Point2::new(1.5, 1.9)));
        assert!(!record.geometry.contains(Point2::new(1.5, 2.1)));
    }

    #[test]
    fn test_no_distances_no_record() {
        let segment = Segment2::from_coords(0.0_f64, 0.0, 1.0, 0.0);
        assert!(WidthRecord::from_distances(segment, &[], 16).is_none());
    }

    #[test]
    fn test_zero_mean_gives_empty_geometry() {
        let segment = Segment2::from_coords(0.0_f64, 0.0, 1.0, 0.0);
        let record = WidthRecord::from_distances(segment, &[0.0, 0.0], 16).unwrap();
        assert_eq!(record.width, 0.0);
        assert!(record.geometry.is_empty());
    }

    #[test]
    fn test_summary_weights_by_length() {
        let records = vec![
            WidthRecord::from_distances(Segment2::from_coords(0.0_f64, 0.0, 3.0, 0.0), &[1.0], 4).unwrap(),
            WidthRecord::from_distances(Segment2::from_coords(3.0, 0.0, 4.0, 0.0), &[3.0], 4).unwrap(),
        ];

        let summary = WidthSummary::from_records(&records).unwrap();
        assert_eq!(summary.count, 2);
        assert_relative_eq!(summary.total_length, 4.0);
        // (2 * 3 + 6 * 1) / 4
        assert_relative_eq!(summary.mean_width, 3.0);
        assert_relative_eq!(summary.min_width, 2.0);
        assert_relative_eq!(summary.max_width, 6.0);
    }

    #[test]
    fn test_summary_of_nothing() {
        assert!(WidthSummary::<f64>::from_records(&[]).is_none());
    }
}
