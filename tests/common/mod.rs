#![allow(dead_code)]

use chrono::{Duration, Utc};
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use std::sync::Arc;

use shortly::application::services::ShortenerService;
use shortly::infrastructure::persistence::SqliteMappingRepository;
use shortly::state::AppState;

/// In-memory database for a single test.
///
/// Capped at one connection: every connection to `sqlite::memory:` would
/// otherwise open its own private database.
pub async fn test_pool() -> SqlitePool {
    SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap()
}

pub async fn test_repository(pool: &SqlitePool) -> Arc<SqliteMappingRepository> {
    let repository = Arc::new(SqliteMappingRepository::new(pool.clone()));
    repository.ensure_schema().await.unwrap();
    repository
}

pub fn test_state(repository: Arc<SqliteMappingRepository>) -> AppState {
    AppState {
        shortener: Arc::new(ShortenerService::new(repository, 6)),
        base_url: "http://localhost:8080".to_string(),
    }
}

pub async fn insert_mapping_at(
    pool: &SqlitePool,
    code: &str,
    url: &str,
    created_at: i64,
    expires_at: i64,
) {
    sqlx::query("INSERT INTO urls (code, long_url, created_at, expires_at) VALUES (?, ?, ?, ?)")
        .bind(code)
        .bind(url)
        .bind(created_at)
        .bind(expires_at)
        .execute(pool)
        .await
        .unwrap();
}

/// Inserts a mapping that is still live for roughly an hour.
pub async fn insert_live_mapping(pool: &SqlitePool, code: &str, url: &str) {
    let now = Utc::now().timestamp();
    insert_mapping_at(pool, code, url, now, now + 3600).await;
}

/// Inserts a mapping whose expiry passed an hour ago.
pub async fn insert_expired_mapping(pool: &SqlitePool, code: &str, url: &str) {
    let now = Utc::now();
    insert_mapping_at(
        pool,
        code,
        url,
        (now - Duration::hours(6)).timestamp(),
        (now - Duration::hours(1)).timestamp(),
    )
    .await;
}

/// Total row count, bypassing every expiry-aware read path.
pub async fn count_rows(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM urls")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn row_exists(pool: &SqlitePool, code: &str) -> bool {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM urls WHERE code = ?")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap();
    count > 0
}
