//! Model and scaler artifacts
//!
//! The scaler and classifier are externally trained, opaque artifacts. This
//! module defines the capability contracts the engine consumes them through
//! (`transform` and `predict`), the concrete file-backed implementations, and
//! the proactive existence check that keeps missing-file reporting specific.

pub mod classifier;
pub mod scaler;

pub use classifier::SoftmaxClassifier;
pub use scaler::StandardScaler;

use crate::error::InferenceError;
use crate::features::FEATURE_COUNT;
use std::path::{Path, PathBuf};

/// Default classifier artifact file name
pub const DEFAULT_MODEL_FILE: &str = "model_stres.json";

/// Default scaler artifact file name
pub const DEFAULT_SCALER_FILE: &str = "scaler_stres.json";

/// Fitted feature scaler capability.
///
/// Implementations are deterministic and stateless after load. Failures
/// (shape mismatch, degenerate fitted parameters) surface as
/// [`InferenceError::ScalingError`] carrying the underlying message.
pub trait FeatureScaler {
    fn transform(&self, features: &[f64; FEATURE_COUNT])
        -> Result<[f64; FEATURE_COUNT], InferenceError>;
}

/// Trained classifier capability.
///
/// `predict` returns the raw class id; label mapping happens in the engine.
/// Failures surface as [`InferenceError::Other`] carrying the underlying
/// message.
pub trait Classifier {
    fn predict(&self, features: &[f64; FEATURE_COUNT]) -> Result<i64, InferenceError>;
}

/// Locations of the two artifact files
#[derive(Debug, Clone)]
pub struct ArtifactPaths {
    pub model: PathBuf,
    pub scaler: PathBuf,
}

impl Default for ArtifactPaths {
    fn default() -> Self {
        Self {
            model: PathBuf::from(DEFAULT_MODEL_FILE),
            scaler: PathBuf::from(DEFAULT_SCALER_FILE),
        }
    }
}

impl ArtifactPaths {
    pub fn new(model: impl Into<PathBuf>, scaler: impl Into<PathBuf>) -> Self {
        Self {
            model: model.into(),
            scaler: scaler.into(),
        }
    }

    /// Resolve both artifact files under a common directory, using the
    /// default file names.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            model: dir.join(DEFAULT_MODEL_FILE),
            scaler: dir.join(DEFAULT_SCALER_FILE),
        }
    }

    /// Check that both files exist before anything tries to decode them.
    ///
    /// A missing file is reported as [`InferenceError::ArtifactNotFound`]
    /// with the specific path, rather than surfacing later as a generic
    /// read error.
    pub fn check(&self) -> Result<(), InferenceError> {
        for path in [&self.model, &self.scaler] {
            if !path.is_file() {
                return Err(InferenceError::ArtifactNotFound { path: path.clone() });
            }
        }
        Ok(())
    }

    /// Load both artifacts, checking existence first.
    pub fn load(&self) -> Result<(StandardScaler, SoftmaxClassifier), InferenceError> {
        self.check()?;
        let scaler = StandardScaler::from_file(&self.scaler)?;
        let classifier = SoftmaxClassifier::from_file(&self.model)?;
        Ok((scaler, classifier))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("stresslens-{}-{}", name, uuid::Uuid::new_v4()))
    }

    #[test]
    fn test_check_reports_missing_model() {
        let dir = temp_path("missing");
        let paths = ArtifactPaths::in_dir(&dir);

        let err = paths.check().unwrap_err();
        match err {
            InferenceError::ArtifactNotFound { path } => {
                assert_eq!(path, dir.join(DEFAULT_MODEL_FILE));
            }
            other => panic!("expected ArtifactNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_check_reports_missing_scaler() {
        let dir = temp_path("partial");
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join(DEFAULT_MODEL_FILE),
            serde_json::to_string(&SoftmaxClassifier::constant(1)).unwrap(),
        )
        .unwrap();

        let paths = ArtifactPaths::in_dir(&dir);
        let err = paths.check().unwrap_err();
        match err {
            InferenceError::ArtifactNotFound { path } => {
                assert_eq!(path, dir.join(DEFAULT_SCALER_FILE));
            }
            other => panic!("expected ArtifactNotFound, got {:?}", other),
        }

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_corrupt_artifact_is_tagged_error() {
        let dir = temp_path("corrupt");
        fs::create_dir_all(&dir).unwrap();

        let paths = ArtifactPaths::in_dir(&dir);
        fs::write(&paths.scaler, "{ not json").unwrap();
        fs::write(&paths.model, "{ not json").unwrap();

        let err = paths.load().err().unwrap();
        assert!(matches!(err, InferenceError::JsonError(_)));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_round_trip() {
        let dir = temp_path("roundtrip");
        fs::create_dir_all(&dir).unwrap();

        let paths = ArtifactPaths::in_dir(&dir);
        fs::write(
            &paths.scaler,
            serde_json::to_string(&StandardScaler::identity()).unwrap(),
        )
        .unwrap();
        fs::write(
            &paths.model,
            serde_json::to_string(&SoftmaxClassifier::constant(2)).unwrap(),
        )
        .unwrap();

        let (scaler, classifier) = paths.load().unwrap();
        let scaled = scaler.transform(&[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(scaled, [1.0, 2.0, 3.0]);
        assert_eq!(classifier.predict(&scaled).unwrap(), 2);

        fs::remove_dir_all(&dir).unwrap();
    }
}
