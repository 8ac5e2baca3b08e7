//! Axum router construction for the HTTP API.
//!
//! Assembles all routes into a single [`Router`] with CORS and request
//! tracing middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router.
///
/// The router includes:
/// - `GET /health` -- liveness probe
/// - `POST /employee` -- create employee
/// - `GET /employee/{id}` / `PUT /employee/{id}` -- read / replace employee
/// - `GET /reporting/{id}` -- reporting structure
/// - `POST /compensation` -- create compensation
/// - `GET /compensation/{id}` -- read compensation
///
/// CORS is configured to allow any origin for development. In
/// production this should be restricted.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health))
        // Employees
        .route("/employee", post(handlers::create_employee))
        .route(
            "/employee/{id}",
            get(handlers::get_employee).put(handlers::update_employee),
        )
        .route("/reporting/{id}", get(handlers::get_reporting_structure))
        // Compensation
        .route("/compensation", post(handlers::create_compensation))
        .route("/compensation/{id}", get(handlers::get_compensation))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
