//! Handler for listing live mappings.

use axum::{Json, extract::State};

use crate::api::dto::links::ListLinksResponse;
use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all live mappings, most recently created first.
///
/// Expired rows are purged before the listing is taken, so the response
/// never contains a dead mapping.
///
/// # Endpoint
///
/// `GET /api/links`
pub async fn links_handler(
    State(state): State<AppState>,
) -> Result<Json<ListLinksResponse>, AppError> {
    let mappings = state.shortener.list_live().await?;

    Ok(Json(ListLinksResponse {
        total: mappings.len(),
        items: mappings.into_iter().map(StatsResponse::from).collect(),
    }))
}
