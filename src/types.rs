//! Core types for the Stresslens inference flow
//!
//! This module defines the data structures that flow through a prediction
//! request: the raw reading, the categorical stress label, and the
//! prediction report payload.

use serde::{Deserialize, Serialize};

/// Temperature unit reported by the input surface.
///
/// The scaler artifact is fitted on Celsius values; Fahrenheit readings are
/// converted before the feature vector is built. Which unit the input surface
/// reports is a deployment choice, not a per-request one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
}

impl Default for TemperatureUnit {
    fn default() -> Self {
        TemperatureUnit::Celsius
    }
}

impl TemperatureUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "celsius",
            TemperatureUnit::Fahrenheit => "fahrenheit",
        }
    }

    /// Valid input range for this unit, matching the input widget bounds
    pub fn valid_range(&self) -> (f64, f64) {
        match self {
            TemperatureUnit::Celsius => (0.0, 100.0),
            TemperatureUnit::Fahrenheit => (30.0, 130.0),
        }
    }
}

/// Humidity input range (percent)
pub const HUMIDITY_RANGE: (f64, f64) = (0.0, 100.0);

/// One set of sensor readings for a single prediction request.
///
/// Transient: a `Reading` exists only for the duration of one request and is
/// never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reading {
    /// Relative humidity (percent, 0-100)
    pub humidity_pct: f64,
    /// Temperature in `temperature_unit`
    pub temperature: f64,
    /// Unit of `temperature`
    #[serde(default)]
    pub temperature_unit: TemperatureUnit,
    /// Daily step count
    pub step_count: u32,
}

impl Reading {
    /// Build a reading with input-widget semantics: out-of-range values are
    /// clamped, never rejected.
    pub fn new(
        humidity_pct: f64,
        temperature: f64,
        temperature_unit: TemperatureUnit,
        step_count: u32,
    ) -> Self {
        Self {
            humidity_pct,
            temperature,
            temperature_unit,
            step_count,
        }
        .clamped()
    }

    /// Clamp humidity and temperature to their widget ranges.
    ///
    /// Used by [`Reading::new`] and by callers that deserialize readings from
    /// untrusted input (NDJSON streams).
    pub fn clamped(mut self) -> Self {
        self.humidity_pct = self.humidity_pct.clamp(HUMIDITY_RANGE.0, HUMIDITY_RANGE.1);
        let (lo, hi) = self.temperature_unit.valid_range();
        self.temperature = self.temperature.clamp(lo, hi);
        self
    }
}

/// Three-level stress category produced by the classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StressLabel {
    Low,
    Medium,
    High,
}

impl StressLabel {
    /// Map a raw class id to a label. The mapping is closed: anything other
    /// than 0, 1, 2 has no label.
    pub fn from_class(class: i64) -> Option<Self> {
        match class {
            0 => Some(StressLabel::Low),
            1 => Some(StressLabel::Medium),
            2 => Some(StressLabel::High),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StressLabel::Low => "Low",
            StressLabel::Medium => "Medium",
            StressLabel::High => "High",
        }
    }
}

/// Outcome of label mapping.
///
/// An out-of-set class id is not an error: it renders as an explicit
/// fallback so unexpected model output never crashes the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "label")]
pub enum PredictionOutcome {
    Label(StressLabel),
    Unrecognized,
}

impl PredictionOutcome {
    pub fn from_class(class: i64) -> Self {
        match StressLabel::from_class(class) {
            Some(label) => PredictionOutcome::Label(label),
            None => PredictionOutcome::Unrecognized,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PredictionOutcome::Label(label) => label.as_str(),
            PredictionOutcome::Unrecognized => "unrecognized",
        }
    }
}

/// Producer metadata embedded in prediction reports
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Producer {
    pub name: String,
    pub version: String,
    pub instance_id: String,
}

/// Provenance of a single prediction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Provenance {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scaler_path: Option<String>,
    pub predicted_at_utc: String,
}

/// Complete prediction report for one reading
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    /// Mapped label or the unrecognized fallback
    pub outcome: PredictionOutcome,
    /// Raw class id returned by the classifier
    pub class: i64,
    /// Feature vector after unit normalization: [humidity_pct, temperature_c, step_count]
    pub features: [f64; 3],
    /// Feature vector after scaling, as seen by the classifier
    pub scaled_features: [f64; 3],
    pub producer: Producer,
    pub provenance: Provenance,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_label_mapping_closed_set() {
        assert_eq!(StressLabel::from_class(0), Some(StressLabel::Low));
        assert_eq!(StressLabel::from_class(1), Some(StressLabel::Medium));
        assert_eq!(StressLabel::from_class(2), Some(StressLabel::High));
        assert_eq!(StressLabel::from_class(3), None);
        assert_eq!(StressLabel::from_class(-1), None);
    }

    #[test]
    fn test_unrecognized_fallback() {
        assert_eq!(
            PredictionOutcome::from_class(7),
            PredictionOutcome::Unrecognized
        );
        assert_eq!(PredictionOutcome::from_class(7).as_str(), "unrecognized");
        assert_eq!(
            PredictionOutcome::from_class(1),
            PredictionOutcome::Label(StressLabel::Medium)
        );
        assert_eq!(PredictionOutcome::from_class(2).as_str(), "High");
    }

    #[test]
    fn test_reading_clamps_humidity() {
        let reading = Reading::new(150.0, 25.0, TemperatureUnit::Celsius, 100);
        assert_eq!(reading.humidity_pct, 100.0);

        let reading = Reading::new(-3.0, 25.0, TemperatureUnit::Celsius, 100);
        assert_eq!(reading.humidity_pct, 0.0);
    }

    #[test]
    fn test_reading_clamps_temperature_per_unit() {
        let reading = Reading::new(50.0, 20.0, TemperatureUnit::Fahrenheit, 0);
        assert_eq!(reading.temperature, 30.0);

        let reading = Reading::new(50.0, 140.0, TemperatureUnit::Fahrenheit, 0);
        assert_eq!(reading.temperature, 130.0);

        let reading = Reading::new(50.0, 120.0, TemperatureUnit::Celsius, 0);
        assert_eq!(reading.temperature, 100.0);
    }

    #[test]
    fn test_reading_deserializes_with_default_unit() {
        let reading: Reading =
            serde_json::from_str(r#"{"humidity_pct": 45.0, "temperature": 25.0, "step_count": 5000}"#)
                .unwrap();
        assert_eq!(reading.temperature_unit, TemperatureUnit::Celsius);
    }
}
