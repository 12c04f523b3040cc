//! Inference layer: the classifier capability and the artifact that backs it.

pub mod artifact;
pub mod classifier;

pub use artifact::{LogisticModel, MODEL_FILE, ModelError};
pub use classifier::{InferenceError, Outcome, Prediction, SurvivalClassifier, predict_survival};
