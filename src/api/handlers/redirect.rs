//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};
use tracing::warn;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Click Tracking
///
/// The click counter is incremented after resolution. A failed increment is
/// logged and swallowed; it must never block or fail the redirect itself.
///
/// # Errors
///
/// Returns 404 Not Found if the code is absent or expired.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let long_url = state.shortener.resolve(&code).await?;

    if let Err(e) = state.shortener.record_click(&code).await {
        warn!(code, error = %e, "failed to record click");
    }

    Ok(Redirect::temporary(&long_url))
}
