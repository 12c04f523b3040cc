//! The serialized classifier artifact.
//!
//! Training happens elsewhere; this process only deserializes the artifact the
//! trainer wrote and evaluates it. The artifact is a logistic regression over
//! the eight-column feature contract: one weight per column plus an intercept,
//! stored as JSON at a fixed filename next to the binary.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use lifeboat_core::{FEATURE_COUNT, FeatureVector};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::classifier::{InferenceError, Outcome, SurvivalClassifier};

/// Fixed artifact filename, read once at process start.
pub const MODEL_FILE: &str = "titanic_survival.json";

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("model artifact not found: {0}")]
    NotFound(PathBuf),

    #[error("reading model artifact: {0}")]
    Io(#[from] io::Error),

    #[error("parsing model artifact: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("model artifact has {got} weights, expected {expected}")]
    Shape { expected: usize, got: usize },
}

/// Logistic-regression parameters produced by the external trainer.
///
/// `predict_probability` applies the sigmoid to the weighted sum; `predict`
/// reports survived whenever the survived-class probability reaches 0.5.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticModel {
    weights: Vec<f64>,
    intercept: f64,
}

impl LogisticModel {
    pub fn new(weights: Vec<f64>, intercept: f64) -> Result<Self, ModelError> {
        check_shape(weights.len())?;
        Ok(Self { weights, intercept })
    }

    /// Deserialize the artifact from disk.
    ///
    /// A missing file is reported as [`ModelError::NotFound`] so the caller
    /// can name the expected path; every other failure carries its cause.
    pub fn from_file(path: &Path) -> Result<Self, ModelError> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(ModelError::NotFound(path.to_path_buf()));
            }
            Err(err) => return Err(err.into()),
        };

        let model: Self = serde_json::from_str(&raw)?;
        check_shape(model.weights.len())?;

        info!(path = %path.display(), weights = model.weights.len(), "loaded classifier artifact");
        Ok(model)
    }

    fn decision(&self, features: &FeatureVector) -> f64 {
        let dot: f64 = self
            .weights
            .iter()
            .zip(features.as_slice())
            .map(|(w, x)| w * x)
            .sum();
        self.intercept + dot
    }
}

fn check_shape(got: usize) -> Result<(), ModelError> {
    if got != FEATURE_COUNT {
        return Err(ModelError::Shape {
            expected: FEATURE_COUNT,
            got,
        });
    }
    Ok(())
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

impl SurvivalClassifier for LogisticModel {
    fn predict(&self, features: &FeatureVector) -> Result<Outcome, InferenceError> {
        let [_, survived] = self.predict_probability(features)?;
        Ok(if survived >= 0.5 {
            Outcome::Survived
        } else {
            Outcome::NotSurvived
        })
    }

    fn predict_probability(&self, features: &FeatureVector) -> Result<[f64; 2], InferenceError> {
        let survived = sigmoid(self.decision(features));
        Ok([1.0 - survived, survived])
    }
}
