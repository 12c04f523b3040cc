//! The classifier capability and result formatting.
//!
//! The model behind the web form is an external collaborator with exactly two
//! operations over a fixed-shape numeric input. Everything downstream of the
//! form talks to [`SurvivalClassifier`], never to a concrete model type, so
//! tests can substitute a deterministic stub.

use lifeboat_core::FeatureVector;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("model expects {expected} features, got {got}")]
    Shape { expected: usize, got: usize },

    #[error("inference failed: {0}")]
    Failed(String),
}

/// Binary survival label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    NotSurvived,
    Survived,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotSurvived => "Not Survived",
            Self::Survived => "Survived",
        }
    }

    /// Index of this outcome in a `[not-survived, survived]` distribution.
    pub fn class_index(&self) -> usize {
        match self {
            Self::NotSurvived => 0,
            Self::Survived => 1,
        }
    }
}

/// A pre-trained binary survival classifier.
///
/// Probabilities are ordered `[not-survived, survived]`.
pub trait SurvivalClassifier: Send + Sync {
    fn predict(&self, features: &FeatureVector) -> Result<Outcome, InferenceError>;

    fn predict_probability(&self, features: &FeatureVector) -> Result<[f64; 2], InferenceError>;
}

/// A label together with the confidence of that label, as a percentage.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub outcome: Outcome,
    /// Probability of the predicted class, in percent.
    pub confidence: f64,
}

impl Prediction {
    /// The one sentence shown to the user.
    pub fn summary(&self) -> String {
        format!(
            "Prediction: {} ({:.1}% confidence)",
            self.outcome.as_str(),
            self.confidence
        )
    }
}

/// Run both classifier operations and report the predicted label with the
/// confidence of that label.
pub fn predict_survival(
    model: &dyn SurvivalClassifier,
    features: &FeatureVector,
) -> Result<Prediction, InferenceError> {
    let outcome = model.predict(features)?;
    let probabilities = model.predict_probability(features)?;
    let confidence = probabilities[outcome.class_index()] * 100.0;
    Ok(Prediction {
        outcome,
        confidence,
    })
}
