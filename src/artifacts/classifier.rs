//! Classifier artifact
//!
//! JSON re-encoding of a trained linear multi-class classifier: one weight
//! row and intercept per class, prediction by argmax of the linear scores.
//! Class ids come from the artifact's `classes` list, so a model trained
//! with unexpected ids surfaces downstream as an unrecognized label rather
//! than a crash.

use crate::artifacts::Classifier;
use crate::error::InferenceError;
use crate::features::FEATURE_COUNT;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Trained linear classifier parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoftmaxClassifier {
    /// Per-class weight rows, each in fitted column order
    pub coefficients: Vec<Vec<f64>>,
    /// Per-class intercepts
    pub intercepts: Vec<f64>,
    /// Class ids, aligned with `coefficients` and `intercepts`
    pub classes: Vec<i64>,
}

impl SoftmaxClassifier {
    /// Load and validate a classifier artifact from a JSON file
    pub fn from_file(path: &Path) -> Result<Self, InferenceError> {
        let raw = fs::read_to_string(path)?;
        let classifier: SoftmaxClassifier = serde_json::from_str(&raw)?;
        classifier.validate()?;
        Ok(classifier)
    }

    /// Degenerate classifier that always predicts `class`. Used for stub
    /// artifacts in tests and demo deployments.
    pub fn constant(class: i64) -> Self {
        Self {
            coefficients: vec![vec![0.0; FEATURE_COUNT]],
            intercepts: vec![0.0],
            classes: vec![class],
        }
    }

    fn validate(&self) -> Result<(), InferenceError> {
        if self.classes.is_empty() {
            return Err(InferenceError::Other(
                "classifier artifact has no classes".to_string(),
            ));
        }
        if self.coefficients.len() != self.classes.len()
            || self.intercepts.len() != self.classes.len()
        {
            return Err(InferenceError::Other(format!(
                "classifier artifact misaligned: {} classes, {} weight rows, {} intercepts",
                self.classes.len(),
                self.coefficients.len(),
                self.intercepts.len()
            )));
        }
        for (i, row) in self.coefficients.iter().enumerate() {
            if row.len() != FEATURE_COUNT {
                return Err(InferenceError::Other(format!(
                    "weight row {} has {} features, expected {}",
                    i,
                    row.len(),
                    FEATURE_COUNT
                )));
            }
        }
        Ok(())
    }
}

impl Classifier for SoftmaxClassifier {
    fn predict(&self, features: &[f64; FEATURE_COUNT]) -> Result<i64, InferenceError> {
        self.validate()?;

        let mut best = 0;
        let mut best_score = f64::NEG_INFINITY;
        for (i, (row, intercept)) in self.coefficients.iter().zip(&self.intercepts).enumerate() {
            let score: f64 = row.iter().zip(features).map(|(w, x)| w * x).sum::<f64>() + intercept;
            if score > best_score {
                best_score = score;
                best = i;
            }
        }

        Ok(self.classes[best])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_class_classifier() -> SoftmaxClassifier {
        // Scores depend only on the temperature column: cold → 0, mild → 1,
        // hot → 2 for inputs standardized around zero.
        SoftmaxClassifier {
            coefficients: vec![
                vec![0.0, -2.0, 0.0],
                vec![0.0, 0.0, 0.0],
                vec![0.0, 2.0, 0.0],
            ],
            intercepts: vec![-1.0, 0.5, -1.0],
            classes: vec![0, 1, 2],
        }
    }

    #[test]
    fn test_predict_argmax() {
        let classifier = three_class_classifier();

        assert_eq!(classifier.predict(&[0.0, -2.0, 0.0]).unwrap(), 0);
        assert_eq!(classifier.predict(&[0.0, 0.0, 0.0]).unwrap(), 1);
        assert_eq!(classifier.predict(&[0.0, 2.0, 0.0]).unwrap(), 2);
    }

    #[test]
    fn test_constant_classifier() {
        let classifier = SoftmaxClassifier::constant(1);
        assert_eq!(classifier.predict(&[45.0, 23.9, 5000.0]).unwrap(), 1);
    }

    #[test]
    fn test_artifact_class_ids_pass_through() {
        // A model trained with out-of-set ids predicts them verbatim; the
        // engine maps them to the unrecognized fallback.
        let classifier = SoftmaxClassifier::constant(7);
        assert_eq!(classifier.predict(&[0.0, 0.0, 0.0]).unwrap(), 7);
    }

    #[test]
    fn test_misaligned_artifact_rejected() {
        let classifier = SoftmaxClassifier {
            coefficients: vec![vec![0.0; FEATURE_COUNT]],
            intercepts: vec![0.0, 1.0],
            classes: vec![0, 1],
        };

        let err = classifier.predict(&[0.0, 0.0, 0.0]).unwrap_err();
        assert!(matches!(err, InferenceError::Other(_)));
        assert!(err.to_string().contains("misaligned"));
    }

    #[test]
    fn test_wrong_feature_width_rejected() {
        let classifier = SoftmaxClassifier {
            coefficients: vec![vec![0.0, 0.0]],
            intercepts: vec![0.0],
            classes: vec![0],
        };

        let err = classifier.predict(&[0.0, 0.0, 0.0]).unwrap_err();
        assert!(matches!(err, InferenceError::Other(_)));
    }
}
