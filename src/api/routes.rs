//! API route configuration.

use axum::{
    Router,
    routing::{get, post},
};

use crate::api::handlers::{links_handler, shorten_handler, stats_handler};
use crate::state::AppState;

/// All REST API routes.
///
/// # Endpoints
///
/// - `POST /shorten`      - Create a shortened URL
/// - `GET  /stats/{code}` - Full record for a specific mapping
/// - `GET  /links`        - List live mappings (most recent first)
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/stats/{code}", get(stats_handler))
        .route("/links", get(links_handler))
}
