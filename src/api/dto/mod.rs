//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation.

pub mod health;
pub mod links;
pub mod shorten;
pub mod stats;

use chrono::{DateTime, Utc};

/// Renders a timestamp the way stats consumers expect it: `YYYY-MM-DD HH:MM:SS`.
pub(crate) fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
}
