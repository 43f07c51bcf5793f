//! Lifeboat HTTP API server (Axum).
//!
//! One scoring endpoint resolves a passenger through the remote classifier,
//! falling back to the local model, plus health and model description routes.

pub mod cli;
pub mod compose;
pub mod error;
pub mod predictor;
pub mod routes;
pub mod state;

use axum::Router;
use lb_core::ServiceConfig;
use state::AppState;
use tower_http::catch_panic::CatchPanicLayer;

/// Build the application router from a configuration.
pub fn app(config: ServiceConfig) -> lb_core::Result<Router> {
    let state = AppState::from_config(config)?;
    Ok(app_with_state(state))
}

/// Build the application router with a custom state. A panicking handler
/// answers with the generic JSON error instead of dropping the connection.
pub fn app_with_state(state: AppState) -> Router {
    Router::new()
        .merge(routes::health_routes())
        .merge(routes::predict_routes())
        .layer(CatchPanicLayer::custom(error::panic_response))
        .with_state(state)
}
