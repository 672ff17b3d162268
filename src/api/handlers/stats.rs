//! Handler for link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the full record for a live mapping.
///
/// # Endpoint
///
/// `GET /api/stats/{code}`
///
/// # Errors
///
/// Returns 404 Not Found if the code is absent or expired. Reading an
/// expired code removes it from storage, same as the redirect path.
pub async fn stats_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<StatsResponse>, AppError> {
    let mapping = state.shortener.stats(&code).await?;

    Ok(Json(StatsResponse::from(mapping)))
}
