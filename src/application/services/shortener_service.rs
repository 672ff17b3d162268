//! Mapping creation and lookup service.

use std::sync::Arc;

use serde_json::json;
use tracing::debug;

use crate::domain::entities::{NewMapping, UrlMapping};
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;

/// Upper bound on code regeneration attempts when an insert collides.
const MAX_SAVE_ATTEMPTS: usize = 5;

/// Service for creating and querying shortened URLs.
///
/// This is the only surface request handlers talk to; the repository behind
/// it is swappable without touching any call site.
pub struct ShortenerService<R: MappingRepository> {
    repository: Arc<R>,
    code_length: usize,
}

impl<R: MappingRepository> ShortenerService<R> {
    /// Creates a new service generating codes of `code_length` characters.
    pub fn new(repository: Arc<R>, code_length: usize) -> Self {
        Self {
            repository,
            code_length,
        }
    }

    /// Creates a mapping for `long_url` under a freshly generated code.
    ///
    /// # Collision Handling
    ///
    /// Uniqueness is enforced by the store, not hoped for by the generator:
    /// a conflicting insert is retried with a new code, up to five times,
    /// before failing.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an empty or whitespace-only URL;
    /// nothing is written in that case. Returns [`AppError::Internal`] when
    /// the retry budget is exhausted.
    pub async fn shorten(&self, long_url: &str) -> Result<UrlMapping, AppError> {
        let long_url = long_url.trim();
        if long_url.is_empty() {
            return Err(AppError::bad_request("URL must not be empty", json!({})));
        }

        for _ in 0..MAX_SAVE_ATTEMPTS {
            let code = generate_code(self.code_length)?;

            match self
                .repository
                .save(NewMapping {
                    code,
                    long_url: long_url.to_string(),
                })
                .await
            {
                Ok(mapping) => return Ok(mapping),
                Err(AppError::Conflict { .. }) => {
                    debug!("short code collision, regenerating");
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::internal(
            "Failed to generate unique code",
            json!({ "attempts": MAX_SAVE_ATTEMPTS }),
        ))
    }

    /// Resolves a short code to its long URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is absent or expired.
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        self.repository
            .find_live(code)
            .await?
            .map(|mapping| mapping.long_url)
            .ok_or_else(|| not_found(code))
    }

    /// Records one click against a live mapping.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is absent or expired; the
    /// increment is never applied to such a mapping.
    pub async fn record_click(&self, code: &str) -> Result<(), AppError> {
        if self.repository.increment_clicks(code).await? {
            Ok(())
        } else {
            Err(not_found(code))
        }
    }

    /// Returns the full record for a live mapping.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is absent or expired.
    pub async fn stats(&self, code: &str) -> Result<UrlMapping, AppError> {
        self.repository
            .find_live(code)
            .await?
            .ok_or_else(|| not_found(code))
    }

    /// Lists all live mappings, most recently created first.
    pub async fn list_live(&self) -> Result<Vec<UrlMapping>, AppError> {
        self.repository.list_live().await
    }

    /// Reports whether the backing store answers queries.
    pub async fn storage_healthy(&self) -> bool {
        self.repository.ping().await.is_ok()
    }
}

fn not_found(code: &str) -> AppError {
    AppError::not_found("Short link not found", json!({ "code": code }))
}
