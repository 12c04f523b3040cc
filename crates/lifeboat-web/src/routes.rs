//! The two-route app: `GET /` renders the form, `POST /predict` runs the
//! pipeline and re-renders the form with the result sentence inserted.
//!
//! Failures split into two tiers. A missing classifier is a fixed 500 on both
//! routes. Everything that goes wrong inside a single request (missing field,
//! malformed number, inference failure) stays inside that request: the page
//! renders normally with HTTP 200 and the error sentence in the result slot.

use axum::Router;
use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::{get, post};
use lifeboat_ai::{InferenceError, Prediction, SurvivalClassifier, predict_survival};
use lifeboat_core::{FeatureVector, ParseError, PassengerForm};
use thiserror::Error;
use tracing::debug;

use crate::page;
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/predict", post(predict))
        .with_state(state)
}

#[derive(Debug, Error)]
enum PredictError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Inference(#[from] InferenceError),
}

async fn index(State(state): State<AppState>) -> (StatusCode, Html<String>) {
    if state.classifier().is_none() {
        return unavailable(&state);
    }
    (StatusCode::OK, Html(page::page("")))
}

async fn predict(
    State(state): State<AppState>,
    Form(form): Form<PassengerForm>,
) -> (StatusCode, Html<String>) {
    let Some(classifier) = state.classifier() else {
        return unavailable(&state);
    };

    let text = match run_pipeline(classifier, &form) {
        Ok(prediction) => {
            debug!(outcome = prediction.outcome.as_str(), confidence = prediction.confidence, "prediction served");
            prediction.summary()
        }
        Err(err) => {
            debug!(%err, "prediction request failed");
            format!("Error during prediction: {err}")
        }
    };

    (StatusCode::OK, Html(page::page(&text)))
}

fn run_pipeline(
    classifier: &dyn SurvivalClassifier,
    form: &PassengerForm,
) -> Result<Prediction, PredictError> {
    let passenger = form.parse()?;
    let features = FeatureVector::encode(&passenger);
    Ok(predict_survival(classifier, &features)?)
}

fn unavailable(state: &AppState) -> (StatusCode, Html<String>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Html(page::unavailable(state.model_file())),
    )
}
