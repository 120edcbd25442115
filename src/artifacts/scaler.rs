//! Standard scaler artifact
//!
//! JSON re-encoding of a fitted standardization transform: per-feature mean
//! and scale, applied as `(x - mean) / scale`.

use crate::artifacts::FeatureScaler;
use crate::error::InferenceError;
use crate::features::FEATURE_COUNT;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Fitted standardization parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    /// Per-feature mean, in fitted column order
    pub mean: Vec<f64>,
    /// Per-feature scale (standard deviation), in fitted column order
    pub scale: Vec<f64>,
}

impl StandardScaler {
    /// Load and validate a scaler artifact from a JSON file
    pub fn from_file(path: &Path) -> Result<Self, InferenceError> {
        let raw = fs::read_to_string(path)?;
        let scaler: StandardScaler = serde_json::from_str(&raw)?;
        scaler.validate()?;
        Ok(scaler)
    }

    /// Identity transform: zero mean, unit scale
    pub fn identity() -> Self {
        Self {
            mean: vec![0.0; FEATURE_COUNT],
            scale: vec![1.0; FEATURE_COUNT],
        }
    }

    fn validate(&self) -> Result<(), InferenceError> {
        if self.mean.len() != FEATURE_COUNT || self.scale.len() != FEATURE_COUNT {
            return Err(InferenceError::ScalingError(format!(
                "scaler fitted on {} features, expected {}",
                self.mean.len().max(self.scale.len()),
                FEATURE_COUNT
            )));
        }
        Ok(())
    }
}

impl FeatureScaler for StandardScaler {
    fn transform(
        &self,
        features: &[f64; FEATURE_COUNT],
    ) -> Result<[f64; FEATURE_COUNT], InferenceError> {
        self.validate()?;

        let mut scaled = [0.0; FEATURE_COUNT];
        for (i, value) in features.iter().enumerate() {
            if self.scale[i] <= 0.0 {
                return Err(InferenceError::ScalingError(format!(
                    "non-positive scale {} for feature {}",
                    self.scale[i], i
                )));
            }
            scaled[i] = (value - self.mean[i]) / self.scale[i];
        }
        Ok(scaled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_transform_standardizes() {
        let scaler = StandardScaler {
            mean: vec![50.0, 20.0, 4000.0],
            scale: vec![10.0, 5.0, 2000.0],
        };

        let scaled = scaler.transform(&[60.0, 25.0, 8000.0]).unwrap();
        assert_eq!(scaled, [1.0, 1.0, 2.0]);
    }

    #[test]
    fn test_identity_is_noop() {
        let scaler = StandardScaler::identity();
        let scaled = scaler.transform(&[45.0, 23.9, 5000.0]).unwrap();
        assert_eq!(scaled, [45.0, 23.9, 5000.0]);
    }

    #[test]
    fn test_dimension_mismatch_is_scaling_error() {
        let scaler = StandardScaler {
            mean: vec![0.0, 0.0],
            scale: vec![1.0, 1.0],
        };

        let err = scaler.transform(&[1.0, 2.0, 3.0]).unwrap_err();
        assert!(matches!(err, InferenceError::ScalingError(_)));
        assert!(err.to_string().contains("expected 3"));
    }

    #[test]
    fn test_zero_scale_is_scaling_error() {
        let scaler = StandardScaler {
            mean: vec![0.0; 3],
            scale: vec![1.0, 0.0, 1.0],
        };

        let err = scaler.transform(&[1.0, 2.0, 3.0]).unwrap_err();
        assert!(matches!(err, InferenceError::ScalingError(_)));
    }
}
