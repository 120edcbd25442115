//! Inference orchestration
//!
//! This module provides the public prediction API. It runs the request flow
//! for one reading: unit normalization → feature vector → scaling →
//! classification → label mapping.

use crate::artifacts::{ArtifactPaths, Classifier, FeatureScaler};
use crate::error::InferenceError;
use crate::features::FeatureVector;
use crate::types::{Prediction, PredictionOutcome, Producer, Provenance, Reading};
use crate::{ENGINE_VERSION, PRODUCER_NAME};
use chrono::Utc;
use uuid::Uuid;

/// Load the artifacts and predict a single reading.
///
/// One-shot convenience for callers that predict once and exit. Anything
/// serving repeated requests should hold a [`StressEngine`] instead, so the
/// artifacts are loaded once and reused.
///
/// # Example
/// ```ignore
/// let paths = ArtifactPaths::default();
/// let reading = Reading::new(45.0, 25.0, TemperatureUnit::Celsius, 5000);
/// let prediction = predict_reading(&paths, &reading)?;
/// ```
pub fn predict_reading(
    paths: &ArtifactPaths,
    reading: &Reading,
) -> Result<Prediction, InferenceError> {
    StressEngine::load(paths)?.predict(reading)
}

/// Stateful engine holding the loaded scaler and classifier.
///
/// Artifacts are loaded once and treated as immutable afterwards; [`reload`]
/// is the only way to pick up newly deployed artifact files.
///
/// [`reload`]: StressEngine::reload
pub struct StressEngine {
    scaler: Box<dyn FeatureScaler>,
    classifier: Box<dyn Classifier>,
    paths: Option<ArtifactPaths>,
    instance_id: String,
}

impl StressEngine {
    /// Load both artifacts from disk.
    ///
    /// Existence of both files is checked before any decoding, so a missing
    /// file reports as [`InferenceError::ArtifactNotFound`] with the exact
    /// path.
    pub fn load(paths: &ArtifactPaths) -> Result<Self, InferenceError> {
        let (scaler, classifier) = paths.load()?;
        Ok(Self {
            scaler: Box::new(scaler),
            classifier: Box::new(classifier),
            paths: Some(paths.clone()),
            instance_id: Uuid::new_v4().to_string(),
        })
    }

    /// Build an engine from in-memory artifacts. Used for stubs in tests.
    pub fn from_parts(scaler: Box<dyn FeatureScaler>, classifier: Box<dyn Classifier>) -> Self {
        Self {
            scaler,
            classifier,
            paths: None,
            instance_id: Uuid::new_v4().to_string(),
        }
    }

    /// Re-read the artifact files this engine was loaded from.
    pub fn reload(&mut self) -> Result<(), InferenceError> {
        let paths = self.paths.as_ref().ok_or_else(|| {
            InferenceError::Other("engine was built from in-memory artifacts".to_string())
        })?;
        let (scaler, classifier) = paths.load()?;
        self.scaler = Box::new(scaler);
        self.classifier = Box::new(classifier);
        Ok(())
    }

    /// Predict the stress category for one reading.
    ///
    /// Pure with respect to the loaded artifacts: identical readings yield
    /// identical labels, and failures carry a tagged variant instead of
    /// crossing the boundary as a panic. An out-of-set class id is not a
    /// failure; it maps to the unrecognized fallback.
    pub fn predict(&self, reading: &Reading) -> Result<Prediction, InferenceError> {
        let features = FeatureVector::from_reading(reading);
        let scaled = self.scaler.transform(features.as_array())?;
        let class = self.classifier.predict(&scaled)?;
        let outcome = PredictionOutcome::from_class(class);

        Ok(Prediction {
            outcome,
            class,
            features: *features.as_array(),
            scaled_features: scaled,
            producer: Producer {
                name: PRODUCER_NAME.to_string(),
                version: ENGINE_VERSION.to_string(),
                instance_id: self.instance_id.clone(),
            },
            provenance: Provenance {
                model_path: self
                    .paths
                    .as_ref()
                    .map(|p| p.model.to_string_lossy().into_owned()),
                scaler_path: self
                    .paths
                    .as_ref()
                    .map(|p| p.scaler.to_string_lossy().into_owned()),
                predicted_at_utc: Utc::now().to_rfc3339(),
            },
        })
    }
}
