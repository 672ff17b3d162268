//! DTOs for the live mapping listing.

use serde::Serialize;

use super::stats::StatsResponse;

/// All live mappings, most recently created first.
#[derive(Debug, Serialize)]
pub struct ListLinksResponse {
    pub total: usize,
    pub items: Vec<StatsResponse>,
}
