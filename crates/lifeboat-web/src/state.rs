//! Per-process application state.
//!
//! The classifier is loaded once at startup and never mutated or reloaded, so
//! the state is a cheap clone handed to every request handler. A failed load
//! leaves the state degraded: the process keeps serving, every request gets
//! the fixed unavailable response, and the failure is logged exactly once.

use std::path::Path;
use std::sync::Arc;

use lifeboat_ai::{LogisticModel, SurvivalClassifier};
use tracing::error;

#[derive(Clone)]
pub struct AppState {
    classifier: Option<Arc<dyn SurvivalClassifier>>,
    model_file: Arc<str>,
}

impl AppState {
    /// Load the classifier artifact, falling back to degraded mode on any
    /// failure. This is the only place a load failure is logged.
    pub fn from_artifact(path: &Path) -> Self {
        let model_file = path.display().to_string();
        match LogisticModel::from_file(path) {
            Ok(model) => Self::ready(Arc::new(model), &model_file),
            Err(err) => {
                error!(
                    artifact = %model_file,
                    %err,
                    "classifier artifact unavailable, serving in degraded mode"
                );
                Self::degraded(&model_file)
            }
        }
    }

    /// State with a working classifier.
    pub fn ready(classifier: Arc<dyn SurvivalClassifier>, model_file: &str) -> Self {
        Self {
            classifier: Some(classifier),
            model_file: model_file.into(),
        }
    }

    /// State with no classifier; every request answers the fixed error page.
    pub fn degraded(model_file: &str) -> Self {
        Self {
            classifier: None,
            model_file: model_file.into(),
        }
    }

    pub fn classifier(&self) -> Option<&dyn SurvivalClassifier> {
        self.classifier.as_deref()
    }

    /// The artifact path requests should name when the classifier is missing.
    pub fn model_file(&self) -> &str {
        &self.model_file
    }
}
