//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{code}`  - Short link redirect
//! - `GET  /health`  - Health check
//! - `/api/*`        - REST API (shorten, stats, links)
//!
//! Wrong-method requests get 405 from Axum's method routing; unknown paths
//! fall through to the redirect route and surface as 404 for dead codes.

use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::LatencyUnit;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/{code}", get(redirect_handler))
        .route("/health", get(health_handler))
        .nest("/api", api::routes::routes())
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .latency_unit(LatencyUnit::Millis),
                ),
        );

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
