//! Feature batches in and width batches out.

use crate::error::WidthError;
use crate::polygon::Polygon;
use crate::width::{WidthRecord, WidthSummary};
use num_traits::Float;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque coordinate reference system tag, passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Crs(pub String);

impl Crs {
    pub fn new(tag: impl Into<String>) -> Self {
        Crs(tag.into())
    }
}

impl fmt::Display for Crs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A paved-area polygon with the identifier used when reporting failures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PavementFeature<F> {
    pub id: String,
    pub polygon: Polygon<F>,
}

impl<F> PavementFeature<F> {
    pub fn new(id: impl Into<String>, polygon: Polygon<F>) -> Self {
        Self {
            id: id.into(),
            polygon,
        }
    }
}

/// Input to batch processing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PavementBatch<F> {
    pub crs: Option<Crs>,
    pub features: Vec<PavementFeature<F>>,
}

impl<F> PavementBatch<F> {
    pub fn new(crs: Option<Crs>, features: Vec<PavementFeature<F>>) -> Self {
        Self { crs, features }
    }
}

/// A polygon that was skipped, and why.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonFailure {
    pub id: String,
    pub error: WidthError,
}

/// Output of batch processing.
///
/// Records from all successful polygons are concatenated in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct WidthBatch<F> {
    /// The input batch's CRS.
    pub crs: Option<Crs>,
    pub records: Vec<WidthRecord<F>>,
    pub failures: Vec<PolygonFailure>,
}

impl<F: Float> WidthBatch<F> {
    /// Statistics over all records, or `None` if there are none.
    pub fn summary(&self) -> Option<WidthSummary<F>> {
        WidthSummary::from_records(&self.records)
    }
}
