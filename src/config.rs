//! Tunable parameters for the width pipeline.
//!
//! All distances are in the units of the input coordinate system. The
//! defaults assume a projected, metric CRS where one unit is one meter.

use serde::{Deserialize, Serialize};

use crate::error::{Result, WidthError};

/// Configuration for centerline extraction, cleaning and width sampling.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidthConfig {
    /// Spacing of Voronoi sites along every polygon ring.
    /// Default: 0.5
    pub interpolation_distance: f64,

    /// Denser site spacing used once when the first attempt yields too few
    /// ridges.
    /// Default: 0.1
    pub fallback_interpolation_distance: f64,

    /// Douglas-Peucker tolerance applied to the merged centerline.
    /// Default: 1.0
    pub simplify_tolerance: f64,

    /// Dead-end branches longer than this survive pruning.
    /// Default: 5.0
    pub dead_end_length: f64,

    /// Distance between width samples along a segment.
    /// Default: 1.0
    pub sample_spacing: f64,

    /// Arc segments per quarter circle in the output corridor polygons.
    /// Default: 16
    pub buffer_resolution: usize,
}

impl Default for WidthConfig {
    fn default() -> Self {
        Self {
            interpolation_distance: 0.5,
            fallback_interpolation_distance: 0.1,
            simplify_tolerance: 1.0,
            dead_end_length: 5.0,
            sample_spacing: 1.0,
            buffer_resolution: 16,
        }
    }
}

impl WidthConfig {
    /// Checks that every distance is positive and finite (the simplify
    /// tolerance and dead-end length may be zero) and that the buffer
    /// resolution is non-zero.
    pub fn validate(&self) -> Result<()> {
        positive("interpolation_distance", self.interpolation_distance)?;
        positive(
            "fallback_interpolation_distance",
            self.fallback_interpolation_distance,
        )?;
        positive("sample_spacing", self.sample_spacing)?;
        non_negative("simplify_tolerance", self.simplify_tolerance)?;
        non_negative("dead_end_length", self.dead_end_length)?;

        if self.buffer_resolution == 0 {
            return Err(WidthError::InvalidConfig {
                name: "buffer_resolution",
                value: "0".to_string(),
                reason: "must be at least 1",
            });
        }
        Ok(())
    }
}

fn positive(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(WidthError::InvalidConfig {
            name,
            value: value.to_string(),
            reason: "must be positive and finite",
        })
    }
}

fn non_negative(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(WidthError::InvalidConfig {
            name,
            value: value.to_string(),
            reason: "must be non-negative and finite",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = WidthConfig::default();
        assert_eq!(config.interpolation_distance, 0.5);
        assert_eq!(config.fallback_interpolation_distance, 0.1);
        assert_eq!(config.simplify_tolerance, 1.0);
        assert_eq!(config.dead_end_length, 5.0);
        assert_eq!(config.sample_spacing, 1.0);
        assert_eq!(config.buffer_resolution, 16);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_spacing() {
        let config = WidthConfig {
            sample_spacing: 0.0,
            ..WidthConfig::default()
        };
        match config.validate() {
            Err(WidthError::InvalidConfig { name, .. }) => assert_eq!(name, "sample_spacing"),
            other => panic!("expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_nan_and_zero_resolution() {
        let nan = WidthConfig {
            interpolation_distance: f64::NAN,
            ..WidthConfig::default()
        };
        assert!(nan.validate().is_err());

        let coarse = WidthConfig {
            buffer_resolution: 0,
            ..WidthConfig::default()
        };
        assert!(coarse.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: WidthConfig = serde_json::from_str(r#"{ "dead_end_length": 8.0 }"#).unwrap();
        assert_eq!(config.dead_end_length, 8.0);
        assert_eq!(config.sample_spacing, 1.0);
    }
}
