//! Handler for the shorten endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::format_timestamp;
use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a shortened URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "code": "aB3xYz",
///   "short_url": "http://localhost:8080/aB3xYz",
///   "long_url": "https://example.com",
///   "expires_at": "2026-08-30 17:00:00"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the URL is empty or whitespace-only.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let mapping = state.shortener.shorten(&payload.url).await?;

    let short_url = format!(
        "{}/{}",
        state.base_url.trim_end_matches('/'),
        mapping.code
    );

    Ok(Json(ShortenResponse {
        short_url,
        code: mapping.code,
        long_url: mapping.long_url,
        expires_at: format_timestamp(mapping.expires_at),
    }))
}
