//! # nricheck-api — Axum API Service for the NRICHECK Stack
//!
//! The HTTP surface over the compliance engine: assessment submission and
//! retrieval (through the report service) and the deadline calendar.
//!
//! ## API Surface
//!
//! | Route                          | Module                   |
//! |--------------------------------|--------------------------|
//! | `POST /v1/assessments`         | [`routes::assessments`]  |
//! | `GET /v1/assessments/{contact}`| [`routes::assessments`]  |
//! | `GET /v1/calendar`             | [`routes::calendar`]     |
//! | `GET /health`                  | liveness probe           |
//!
//! Boundary errors (malformed bodies, unknown enum values) are rejected
//! with 422 before anything reaches the engine; the engine itself never
//! fails for well-typed input.

pub mod error;
pub mod routes;
pub mod state;

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Assemble the application router with all routes and middleware.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::assessments::router())
        .merge(routes::calendar::router())
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness probe.
async fn health() -> &'static str {
    "ok"
}
