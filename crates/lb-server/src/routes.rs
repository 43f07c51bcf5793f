use axum::{
    body::Bytes,
    extract::State,
    routing::{get, post},
    Json, Router,
};
use lb_core::{LbError, PassengerInput};
use lb_scorer::FALLBACK_MODEL_TYPE;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::state::AppState;

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

pub fn predict_routes() -> Router<AppState> {
    Router::new()
        .route("/api/predict", post(predict))
        .route("/api/model", get(model_info))
}

async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "lifeboat",
        "version": env!("CARGO_PKG_VERSION"),
        "delegate": if state.predictor.has_remote() { "remote" } else { "disabled" },
        "uptime_secs": state.start_time.elapsed().as_secs(),
    }))
}

/// Body is read raw so that a non-JSON payload gets our error shape rather
/// than the extractor's plain-text rejection.
async fn predict(State(state): State<AppState>, body: Bytes) -> Result<Json<Value>, ApiError> {
    let input = PassengerInput::from_slice(&body)?;
    let response = state.predictor.predict(&input).await?;
    let value = serde_json::to_value(&response).map_err(LbError::from)?;
    Ok(Json(value))
}

async fn model_info(State(state): State<AppState>) -> Json<Value> {
    let delegate = &state.config.delegate;
    Json(json!({
        "model_type": FALLBACK_MODEL_TYPE,
        "model": "logistic_regression",
        "weights": state.predictor.weights(),
        "validation": state.predictor.validation(),
        "delegate": {
            "enabled": state.predictor.has_remote(),
            "endpoint": delegate.endpoint(),
            "timeout_ms": delegate.timeout_ms,
        },
    }))
}
