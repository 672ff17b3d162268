//! DTOs for link statistics.

use serde::Serialize;

use super::format_timestamp;
use crate::domain::entities::UrlMapping;

/// Full record of a live mapping, including its click count.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub code: String,
    pub long_url: String,
    pub clicks: i64,
    pub created_at: String,
    pub expires_at: String,
}

impl From<UrlMapping> for StatsResponse {
    fn from(mapping: UrlMapping) -> Self {
        StatsResponse {
            code: mapping.code,
            long_url: mapping.long_url,
            clicks: mapping.clicks,
            created_at: format_timestamp(mapping.created_at),
            expires_at: format_timestamp(mapping.expires_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_timestamps_are_formatted() {
        let created_at = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        let mapping = UrlMapping {
            id: 1,
            code: "abc123".to_string(),
            long_url: "https://example.com".to_string(),
            clicks: 7,
            created_at,
            expires_at: created_at + chrono::Duration::hours(5),
        };

        let response = StatsResponse::from(mapping);
        assert_eq!(response.created_at, "2026-01-02 03:04:05");
        assert_eq!(response.expires_at, "2026-01-02 08:04:05");
        assert_eq!(response.clicks, 7);
    }
}
