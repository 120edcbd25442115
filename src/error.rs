//! Error types for Stresslens

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during artifact loading or inference
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("model or scaler file not found: {}", path.display())]
    ArtifactNotFound { path: PathBuf },

    #[error("confusion matrix image not found: {}", path.display())]
    ImageNotFound { path: PathBuf },

    #[error("scaling failed: {0}")]
    ScalingError(String),

    #[error("invalid artifact JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("artifact I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("prediction failed: {0}")]
    Other(String),
}
