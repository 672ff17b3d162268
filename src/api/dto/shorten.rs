//! DTOs for the shorten endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a single URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL. Must be non-empty; no further validation is applied.
    #[validate(length(min = 1, message = "URL must not be empty"))]
    pub url: String,
}

/// Response for a successfully created mapping.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub code: String,
    pub short_url: String,
    pub long_url: String,
    pub expires_at: String,
}
