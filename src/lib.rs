//! Stresslens - On-device inference engine for three-level stress classification
//!
//! Stresslens takes three sensor-like readings (humidity, temperature, daily
//! step count), feeds them through pre-trained scaler and classifier
//! artifacts, and produces a stress category through a deterministic flow:
//! unit normalization → feature vector → scaling → classification → label
//! mapping.
//!
//! ## Modules
//!
//! - **Inference Engine**: the request flow from a validated reading to a label
//! - **Artifacts**: opaque model/scaler files consumed through capability traits
//! - **Visualization**: static confusion matrix diagnostic asset

pub mod artifacts;
pub mod engine;
pub mod error;
pub mod features;
pub mod render;
pub mod types;
pub mod viz;

pub use artifacts::{ArtifactPaths, Classifier, FeatureScaler};
pub use engine::{predict_reading, StressEngine};
pub use error::InferenceError;
pub use types::{Prediction, PredictionOutcome, Reading, StressLabel, TemperatureUnit};

/// Engine version embedded in all prediction reports
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Producer name for prediction reports
pub const PRODUCER_NAME: &str = "stresslens";
