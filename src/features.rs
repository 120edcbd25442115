//! Feature vector construction
//!
//! This module builds the model input from a raw reading:
//! - Unit normalization (Fahrenheit readings converted to Celsius)
//! - Column ordering matching the scaler's fitted feature space

use crate::types::{Reading, TemperatureUnit};
use serde::{Deserialize, Serialize};

/// Number of model input features
pub const FEATURE_COUNT: usize = 3;

/// Fitted column order of the scaler and classifier artifacts.
///
/// The order and units here are a deployment contract with the artifacts:
/// a vector that deviates from it produces silently wrong predictions, so
/// every feature vector goes through [`FeatureVector::from_reading`].
pub const FEATURE_ORDER: [&str; FEATURE_COUNT] = ["humidity_pct", "temperature_c", "step_count"];

/// Convert Fahrenheit to Celsius
pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

/// Single-row model input in the fitted column order
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector(pub [f64; FEATURE_COUNT]);

impl FeatureVector {
    /// Build the feature vector for a reading.
    ///
    /// Fahrenheit temperatures are converted to Celsius here, and the
    /// converted value is what enters the vector.
    pub fn from_reading(reading: &Reading) -> Self {
        let temperature_c = match reading.temperature_unit {
            TemperatureUnit::Celsius => reading.temperature,
            TemperatureUnit::Fahrenheit => fahrenheit_to_celsius(reading.temperature),
        };

        FeatureVector([
            reading.humidity_pct,
            temperature_c,
            reading.step_count as f64,
        ])
    }

    pub fn as_array(&self) -> &[f64; FEATURE_COUNT] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fahrenheit_to_celsius_anchors() {
        assert_eq!(fahrenheit_to_celsius(32.0), 0.0);
        assert_eq!(fahrenheit_to_celsius(212.0), 100.0);
        assert!((fahrenheit_to_celsius(98.6) - 37.0).abs() < 0.01);
    }

    #[test]
    fn test_celsius_reading_passes_through() {
        let reading = Reading::new(45.0, 25.0, TemperatureUnit::Celsius, 5000);
        let vector = FeatureVector::from_reading(&reading);
        assert_eq!(vector.0, [45.0, 25.0, 5000.0]);
    }

    #[test]
    fn test_fahrenheit_reading_is_converted() {
        let reading = Reading::new(45.0, 75.0, TemperatureUnit::Fahrenheit, 5000);
        let vector = FeatureVector::from_reading(&reading);

        assert_eq!(vector.0[0], 45.0);
        // 75°F = 23.888...°C; the converted value must be the one that
        // lands in the vector, not the raw Fahrenheit input.
        assert!((vector.0[1] - 23.8889).abs() < 0.001);
        assert_eq!(vector.0[2], 5000.0);
    }

    #[test]
    fn test_feature_order_is_stable() {
        assert_eq!(
            FEATURE_ORDER,
            ["humidity_pct", "temperature_c", "step_count"]
        );
    }
}
