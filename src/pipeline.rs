//! The per-polygon width pipeline and its batch driver.
//!
//! For each polygon:
//!
//! 1. A [`Skeletonize`] strategy extracts a raw centerline
//! 2. [`clean_skeleton`] merges, prunes and simplifies it
//! 3. The cleaned skeleton is split into two-point segments
//! 4. Each segment is sampled against the polygon boundary
//! 5. Each segment becomes a [`WidthRecord`]
//!
//! Polygons are independent, so batches fan out over rayon.
//!
//! # Example
//!
//! ```
//! use pavewidth::{Point2, Polygon, WidthConfig, WidthPipeline};
//!
//! let pipeline = WidthPipeline::<f64>::new(&WidthConfig::default()).unwrap();
//! let strip = Polygon::new(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(20.0, 0.0),
//!     Point2::new(20.0, 2.0),
//!     Point2::new(0.0, 2.0),
//! ]);
//!
//! let records = pipeline.process(&strip).unwrap();
//! assert!(!records.is_empty());
//! assert!(records.iter().all(|r| (r.width - 2.0).abs() < 0.25));
//! ```

use crate::batch::{PavementBatch, PolygonFailure, WidthBatch};
use crate::config::WidthConfig;
use crate::error::{Result, WidthError};
use crate::parallel::ProcessingMode;
use crate::polygon::{Boundary, Polygon};
use crate::sampling::sample_distances;
use crate::segment::skeleton_segments;
use crate::skeleton::{clean_skeleton, CleanOptions, RetryDensified, Skeletonize, VoronoiCenterline};
use crate::width::WidthRecord;
use num_traits::Float;

/// The default centerline strategy: Voronoi with one denser retry.
pub type DefaultSkeletonizer<F> = RetryDensified<VoronoiCenterline<F>>;

/// Turns paved-area polygons into per-segment width records.
#[derive(Debug, Clone)]
pub struct WidthPipeline<F, S = DefaultSkeletonizer<F>> {
    skeletonizer: S,
    clean: CleanOptions<F>,
    sample_spacing: F,
    buffer_resolution: usize,
    mode: ProcessingMode,
}

impl<F: Float> WidthPipeline<F> {
    /// Builds the default pipeline from a validated configuration.
    pub fn new(config: &WidthConfig) -> Result<Self> {
        config.validate()?;
        let skeletonizer = RetryDensified::voronoi(
            cast("interpolation_distance", config.interpolation_distance)?,
            cast(
                "fallback_interpolation_distance",
                config.fallback_interpolation_distance,
            )?,
        );
        Self::with_skeletonizer(skeletonizer, config)
    }
}

impl<F: Float, S: Skeletonize<F>> WidthPipeline<F, S> {
    /// Builds a pipeline around a custom centerline strategy.
    ///
    /// The interpolation distances in `config` are not used.
    pub fn with_skeletonizer(skeletonizer: S, config: &WidthConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            skeletonizer,
            clean: CleanOptions {
                dead_end_length: cast("dead_end_length", config.dead_end_length)?,
                simplify_tolerance: cast("simplify_tolerance", config.simplify_tolerance)?,
            },
            sample_spacing: cast("sample_spacing", config.sample_spacing)?,
            buffer_resolution: config.buffer_resolution,
            mode: ProcessingMode::default(),
        })
    }

    /// Sets how [`process_batch`](Self::process_batch) schedules polygons.
    pub fn with_processing_mode(mut self, mode: ProcessingMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn processing_mode(&self) -> ProcessingMode {
        self.mode
    }

    /// Computes width records for one polygon, in segment order.
    ///
    /// A degenerate polygon fails with [`WidthError::EmptyGeometry`]. A
    /// polygon whose whole skeleton is pruned away yields no records.
    pub fn process(&self, polygon: &Polygon<F>) -> Result<Vec<WidthRecord<F>>> {
        if polygon.is_degenerate() {
            return Err(WidthError::EmptyGeometry);
        }

        let raw = self.skeletonizer.skeletonize(polygon)?;
        let skeleton = clean_skeleton(&raw, &self.clean);
        let boundary = Boundary::from_polygon(polygon);

        let records = skeleton_segments(&skeleton)
            .into_iter()
            .filter_map(|segment| {
                let distances = sample_distances(segment, &boundary, self.sample_spacing);
                WidthRecord::from_distances(segment, &distances, self.buffer_resolution)
            })
            .collect();

        Ok(records)
    }
}

impl<F, S> WidthPipeline<F, S>
where
    F: Float + Send + Sync,
    S: Skeletonize<F> + Sync,
{
    /// Processes every feature, skipping and reporting the ones that fail.
    ///
    /// The batch itself never fails. Records are concatenated in input
    /// order regardless of the processing mode, and the CRS is carried over.
    pub fn process_batch(&self, batch: &PavementBatch<F>) -> WidthBatch<F> {
        let features = &batch.features;
        let results = self
            .mode
            .par_map(features.len(), |i| self.process(&features[i].polygon));

        let mut records = Vec::new();
        let mut failures = Vec::new();
        for (feature, result) in features.iter().zip(results) {
            match result {
                Ok(feature_records) => records.extend(feature_records),
                Err(error) => {
                    log::warn!("Skipping polygon {}: {}", feature.id, error);
                    failures.push(PolygonFailure {
                        id: feature.id.clone(),
                        error,
                    });
                }
            }
        }

        log::info!(
            "Processed {} polygons: {} width records, {} skipped",
            features.len(),
            records.len(),
            failures.len()
        );

        WidthBatch {
            crs: batch.crs.clone(),
            records,
            failures,
        }
    }
}

fn cast<F: Float>(name: &'static str, value: f64) -> Result<F> {
    F::from(value).ok_or_else(|| WidthError::InvalidConfig {
        name,
        value: value.to_string(),
        reason: "not representable in the coordinate type",
    })
}
