//! API route configuration.

use crate::api::handlers::{health_handler, lookup_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Public API routes.
///
/// # Endpoints
///
/// - `POST /gen`          - Shorten a link
/// - `GET  /lnk/{code}`   - Resolve a short code
/// - `GET  /health`       - Storage health check
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/gen", post(shorten_handler))
        .route("/lnk/{code}", get(lookup_handler))
        .route("/health", get(health_handler))
}
