mod common;

use chrono::{Duration, Utc};
use shortly::domain::entities::{MAPPING_TTL_SECONDS, NewMapping};
use shortly::domain::repositories::MappingRepository;
use shortly::error::AppError;

fn new_mapping(code: &str, url: &str) -> NewMapping {
    NewMapping {
        code: code.to_string(),
        long_url: url.to_string(),
    }
}

#[tokio::test]
async fn test_save_then_find_live_round_trips() {
    let pool = common::test_pool().await;
    let repo = common::test_repository(&pool).await;

    let saved = repo
        .save(new_mapping("abc123", "https://example.com"))
        .await
        .unwrap();
    assert_eq!(saved.clicks, 0);
    assert_eq!(
        saved.expires_at - saved.created_at,
        Duration::seconds(MAPPING_TTL_SECONDS)
    );

    let found = repo.find_live("abc123").await.unwrap().unwrap();
    assert_eq!(found.long_url, "https://example.com");
    assert_eq!(found.created_at, saved.created_at);
    assert_eq!(found.expires_at, saved.expires_at);
}

#[tokio::test]
async fn test_find_live_unknown_code_is_none() {
    let pool = common::test_pool().await;
    let repo = common::test_repository(&pool).await;

    assert!(repo.find_live("missing").await.unwrap().is_none());
}

#[tokio::test]
async fn test_save_duplicate_code_is_conflict() {
    let pool = common::test_pool().await;
    let repo = common::test_repository(&pool).await;

    repo.save(new_mapping("dup123", "https://example.com"))
        .await
        .unwrap();

    let result = repo.save(new_mapping("dup123", "https://other.com")).await;
    assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
}

#[tokio::test]
async fn test_save_conflicts_even_with_stale_unpurged_row() {
    let pool = common::test_pool().await;
    let repo = common::test_repository(&pool).await;

    common::insert_expired_mapping(&pool, "stale1", "https://old.example.com").await;

    let result = repo.save(new_mapping("stale1", "https://new.example.com")).await;
    assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
}

#[tokio::test]
async fn test_find_live_deletes_expired_row() {
    let pool = common::test_pool().await;
    let repo = common::test_repository(&pool).await;

    common::insert_expired_mapping(&pool, "gone12", "https://example.com").await;
    assert!(common::row_exists(&pool, "gone12").await);

    assert!(repo.find_live("gone12").await.unwrap().is_none());
    assert!(!common::row_exists(&pool, "gone12").await);
}

#[tokio::test]
async fn test_mapping_live_until_expiry_boundary() {
    let pool = common::test_pool().await;
    let repo = common::test_repository(&pool).await;

    // Expires in two seconds: still live.
    let now = Utc::now().timestamp();
    common::insert_mapping_at(&pool, "soon12", "https://example.com", now, now + 2).await;
    assert!(repo.find_live("soon12").await.unwrap().is_some());

    // Expired one second ago: gone.
    common::insert_mapping_at(&pool, "past12", "https://example.com", now - 10, now - 1).await;
    assert!(repo.find_live("past12").await.unwrap().is_none());
}

#[tokio::test]
async fn test_increment_clicks_counts_up() {
    let pool = common::test_pool().await;
    let repo = common::test_repository(&pool).await;

    repo.save(new_mapping("clicks", "https://example.com"))
        .await
        .unwrap();

    for _ in 0..3 {
        assert!(repo.increment_clicks("clicks").await.unwrap());
    }

    let mapping = repo.find_live("clicks").await.unwrap().unwrap();
    assert_eq!(mapping.clicks, 3);
}

#[tokio::test]
async fn test_increment_clicks_unknown_code_is_noop() {
    let pool = common::test_pool().await;
    let repo = common::test_repository(&pool).await;

    assert!(!repo.increment_clicks("missing").await.unwrap());
    assert_eq!(common::count_rows(&pool).await, 0);
}

#[tokio::test]
async fn test_increment_clicks_expired_code_is_noop() {
    let pool = common::test_pool().await;
    let repo = common::test_repository(&pool).await;

    common::insert_expired_mapping(&pool, "dead12", "https://example.com").await;

    assert!(!repo.increment_clicks("dead12").await.unwrap());
}

#[tokio::test]
async fn test_concurrent_increments_lose_no_updates() {
    let pool = common::test_pool().await;
    let repo = common::test_repository(&pool).await;

    repo.save(new_mapping("race12", "https://example.com"))
        .await
        .unwrap();

    let mut handles = Vec::new();
    for _ in 0..100 {
        let repo = repo.clone();
        handles.push(tokio::spawn(async move {
            repo.increment_clicks("race12").await.unwrap()
        }));
    }
    for handle in handles {
        assert!(handle.await.unwrap());
    }

    let mapping = repo.find_live("race12").await.unwrap().unwrap();
    assert_eq!(mapping.clicks, 100);
}

#[tokio::test]
async fn test_purge_expired_removes_exactly_the_expired_set() {
    let pool = common::test_pool().await;
    let repo = common::test_repository(&pool).await;

    common::insert_expired_mapping(&pool, "old001", "https://a.example.com").await;
    common::insert_expired_mapping(&pool, "old002", "https://b.example.com").await;
    common::insert_live_mapping(&pool, "new001", "https://c.example.com").await;

    assert_eq!(repo.purge_expired().await.unwrap(), 2);
    assert!(common::row_exists(&pool, "new001").await);
    assert!(!common::row_exists(&pool, "old001").await);

    // Idempotent: a second sweep finds nothing.
    assert_eq!(repo.purge_expired().await.unwrap(), 0);
}

#[tokio::test]
async fn test_list_live_purges_and_orders_most_recent_first() {
    let pool = common::test_pool().await;
    let repo = common::test_repository(&pool).await;

    let now = Utc::now().timestamp();
    common::insert_mapping_at(&pool, "first1", "https://a.example.com", now - 300, now + 3600)
        .await;
    common::insert_mapping_at(&pool, "second", "https://b.example.com", now - 200, now + 3600)
        .await;
    common::insert_mapping_at(&pool, "third1", "https://c.example.com", now - 100, now + 3600)
        .await;
    common::insert_expired_mapping(&pool, "dead01", "https://d.example.com").await;

    let live = repo.list_live().await.unwrap();

    let codes: Vec<&str> = live.iter().map(|m| m.code.as_str()).collect();
    assert_eq!(codes, vec!["third1", "second", "first1"]);
    assert!(!common::row_exists(&pool, "dead01").await);
}

#[tokio::test]
async fn test_legacy_table_gains_expiry_column_with_backfill() {
    let pool = common::test_pool().await;

    // A database created before expiry support.
    sqlx::query(
        r#"
        CREATE TABLE urls (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            code TEXT NOT NULL UNIQUE,
            long_url TEXT NOT NULL,
            clicks INTEGER NOT NULL DEFAULT 0,
            created_at INTEGER NOT NULL
        )
        "#,
    )
    .execute(&pool)
    .await
    .unwrap();

    let created_at = Utc::now().timestamp() - 60;
    sqlx::query("INSERT INTO urls (code, long_url, clicks, created_at) VALUES (?, ?, 5, ?)")
        .bind("legacy")
        .bind("https://example.com")
        .bind(created_at)
        .execute(&pool)
        .await
        .unwrap();

    let repo = common::test_repository(&pool).await;

    let mapping = repo.find_live("legacy").await.unwrap().unwrap();
    assert_eq!(mapping.clicks, 5);
    assert_eq!(
        mapping.expires_at.timestamp(),
        created_at + MAPPING_TTL_SECONDS
    );
}

#[tokio::test]
async fn test_ensure_schema_is_idempotent() {
    let pool = common::test_pool().await;
    let repo = common::test_repository(&pool).await;

    repo.save(new_mapping("keep12", "https://example.com"))
        .await
        .unwrap();

    repo.ensure_schema().await.unwrap();

    assert!(repo.find_live("keep12").await.unwrap().is_some());
}
