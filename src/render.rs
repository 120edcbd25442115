//! Presentation rendering
//!
//! Text rendering for the three user-facing views (home, prediction result,
//! visualization). All page chrome lives in a [`PageConfig`] value passed
//! into the render functions; there is no process-wide presentation state.

use crate::types::{Prediction, PredictionOutcome};
use crate::viz::ConfusionMatrix;

/// Page chrome configuration
#[derive(Debug, Clone)]
pub struct PageConfig {
    pub app_title: String,
    pub home_blurb: String,
    pub result_heading: String,
    pub matrix_caption: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            app_title: "Stress Level Prediction".to_string(),
            home_blurb: "Predicts a three-level stress category from humidity, \
                         temperature, and daily step count. Use the predict view \
                         to enter readings, or the visualize view for the model's \
                         confusion matrix."
                .to_string(),
            result_heading: "Predicted stress level".to_string(),
            matrix_caption: "Confusion matrix of the stress prediction model".to_string(),
        }
    }
}

pub fn render_home(config: &PageConfig) -> String {
    format!("{}\n\n{}\n", config.app_title, config.home_blurb)
}

/// One line naming the predicted category, or the fallback line when the
/// model returned something outside the label set.
pub fn render_prediction(config: &PageConfig, prediction: &Prediction) -> String {
    match prediction.outcome {
        PredictionOutcome::Label(label) => {
            format!("{}: {}\n", config.result_heading, label.as_str())
        }
        PredictionOutcome::Unrecognized => format!(
            "{}: unrecognized result (class {})\n",
            config.result_heading, prediction.class
        ),
    }
}

pub fn render_visualization(config: &PageConfig, asset: &ConfusionMatrix) -> String {
    format!(
        "{} ({}, {} bytes)\n",
        config.matrix_caption,
        asset.path.display(),
        asset.size_bytes
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PredictionOutcome, Producer, Provenance, StressLabel};

    fn make_prediction(outcome: PredictionOutcome, class: i64) -> Prediction {
        Prediction {
            outcome,
            class,
            features: [45.0, 23.9, 5000.0],
            scaled_features: [45.0, 23.9, 5000.0],
            producer: Producer {
                name: "stresslens".to_string(),
                version: "0.1.0".to_string(),
                instance_id: "test".to_string(),
            },
            provenance: Provenance {
                model_path: None,
                scaler_path: None,
                predicted_at_utc: "2024-01-15T00:00:00Z".to_string(),
            },
        }
    }

    #[test]
    fn test_render_label_line() {
        let config = PageConfig::default();
        let line = render_prediction(
            &config,
            &make_prediction(PredictionOutcome::Label(StressLabel::High), 2),
        );
        assert_eq!(line, "Predicted stress level: High\n");
    }

    #[test]
    fn test_render_unrecognized_line() {
        let config = PageConfig::default();
        let line = render_prediction(&config, &make_prediction(PredictionOutcome::Unrecognized, 7));
        assert!(line.contains("unrecognized result (class 7)"));
    }
}
