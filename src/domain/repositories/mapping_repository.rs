//! Repository trait for URL mapping storage.

use crate::domain::entities::{NewMapping, UrlMapping};
use crate::error::AppError;
use async_trait::async_trait;

/// The single write/read authority for code→URL mappings.
///
/// All mutation of the mapping table goes through this trait; handlers and
/// the sweeper reach it only through [`crate::application::services::ShortenerService`]
/// or [`crate::domain::sweeper`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteMappingRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingRepository: Send + Sync {
    /// Inserts a new mapping with `created_at = now`, `expires_at = now + TTL`
    /// and a zero click counter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the code already denotes a row,
    /// including an expired row that has not been purged yet. The caller is
    /// expected to retry with a freshly generated code.
    ///
    /// Returns [`AppError::Unavailable`] or [`AppError::Internal`] on
    /// storage errors.
    async fn save(&self, new_mapping: NewMapping) -> Result<UrlMapping, AppError>;

    /// Finds a live mapping by its short code.
    ///
    /// An expired row is deleted as a side effect and reported as `None`;
    /// expiry is observationally equivalent to absence.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] or [`AppError::Internal`] on
    /// storage errors.
    async fn find_live(&self, code: &str) -> Result<Option<UrlMapping>, AppError>;

    /// Atomically increments the click counter of a live mapping.
    ///
    /// Implemented as a single update-by-key statement so that concurrent
    /// increments never lose updates. Returns `false` when the code is
    /// absent or expired; no row is ever created or resurrected.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] or [`AppError::Internal`] on
    /// storage errors.
    async fn increment_clicks(&self, code: &str) -> Result<bool, AppError>;

    /// Deletes all rows whose expiry has passed and returns the count removed.
    ///
    /// Idempotent and safe to call concurrently with reads and writes.
    async fn purge_expired(&self) -> Result<u64, AppError>;

    /// Purges expired rows, then returns all remaining mappings ordered by
    /// `created_at` descending (most recent first).
    async fn list_live(&self) -> Result<Vec<UrlMapping>, AppError>;

    /// Verifies that the backing store is reachable.
    async fn ping(&self) -> Result<(), AppError>;
}
