//! Feedback form web server
//!
//! Thin HTTP shell over the populator and dispatcher crates: serves the
//! questionnaire, runs each submission through populate then send, and
//! reports the outcome as notices.

pub mod commands;
pub mod error;
pub mod form;
pub mod notice;
pub mod page;
pub mod routes;
pub mod state;

use axum::routing::{get, post};
use axum::Router;
use state::AppState;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Initialize tracing subscriber for logging
pub fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,feedback=debug"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(filter)
        .init();
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/submit", post(routes::submit_form))
        .route("/api/submissions", post(routes::create_submission))
        .route("/api/health", get(routes::health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
