pub mod check;
pub mod endpoints;
pub mod health;
pub mod price;
pub mod static_files;

use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

/// Builds the application router over the shared state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/endpoints", get(endpoints::list_endpoints))
        .route("/api/status", get(endpoints::status_snapshot))
        .route("/api/check", post(check::check_endpoint))
        .route("/api/price", post(price::mock_price))
        .fallback(static_files::serve_static)
        .with_state(state)
}
