//! URL mapping entity and the shared expiry predicate.

use chrono::{DateTime, Duration, Utc};

/// Fixed lifetime in seconds applied to every mapping at creation.
///
/// There is no per-mapping override; every mapping expires exactly
/// five hours after it was created.
pub const MAPPING_TTL_SECONDS: i64 = 5 * 3600;

/// The mapping TTL as a [`chrono::Duration`].
pub fn mapping_ttl() -> Duration {
    Duration::seconds(MAPPING_TTL_SECONDS)
}

/// A short code to long URL mapping with click accounting.
///
/// `code` and `long_url` are immutable once created; `clicks` only grows
/// while the mapping is live.
#[derive(Debug, Clone, PartialEq)]
pub struct UrlMapping {
    pub id: i64,
    pub code: String,
    pub long_url: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl UrlMapping {
    /// Returns true if the mapping is expired at `now`.
    ///
    /// This is the single definition of the expiry predicate; both the
    /// lazy delete-on-read path and the eager sweep use `now >= expires_at`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Returns true if the mapping has passed its expiry time.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

/// Input data for creating a new mapping.
///
/// Timestamps and the click counter are assigned by the store at insert time.
#[derive(Debug, Clone)]
pub struct NewMapping {
    pub code: String,
    pub long_url: String,
}
