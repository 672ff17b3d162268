//! SQLite implementation of the mapping repository.
//!
//! Timestamps are stored as unix seconds so that expiry comparisons are
//! plain integer comparisons both in SQL and in Rust.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{Row, SqlitePool};
use tracing::{debug, info};

use crate::domain::entities::{MAPPING_TTL_SECONDS, NewMapping, UrlMapping, mapping_ttl};
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;

/// SQLite repository for mapping storage and retrieval.
///
/// Per-code atomicity comes from SQLite's statement-level atomicity; no
/// application locks are held across operations.
pub struct SqliteMappingRepository {
    pool: SqlitePool,
}

/// Raw row shape of the `urls` table.
#[derive(sqlx::FromRow)]
struct MappingRow {
    id: i64,
    code: String,
    long_url: String,
    clicks: i64,
    created_at: i64,
    expires_at: i64,
}

impl From<MappingRow> for UrlMapping {
    fn from(row: MappingRow) -> Self {
        UrlMapping {
            id: row.id,
            code: row.code,
            long_url: row.long_url,
            clicks: row.clicks,
            created_at: from_unix(row.created_at),
            expires_at: from_unix(row.expires_at),
        }
    }
}

fn from_unix(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap_or(DateTime::UNIX_EPOCH)
}

const SELECT_MAPPING: &str =
    "SELECT id, code, long_url, clicks, created_at, expires_at FROM urls WHERE code = ?";

impl SqliteMappingRepository {
    /// Creates a new repository backed by the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Creates the `urls` table if needed and migrates legacy databases.
    ///
    /// A table created before expiry support lacks the `expires_at` column;
    /// it is added here and NULL rows are backfilled with
    /// `created_at + TTL`, so legacy mappings get the same fixed lifetime.
    ///
    /// Called once at startup; a failure here is fatal to the process.
    pub async fn ensure_schema(&self) -> Result<(), AppError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS urls (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                code TEXT NOT NULL UNIQUE,
                long_url TEXT NOT NULL,
                clicks INTEGER NOT NULL DEFAULT 0,
                created_at INTEGER NOT NULL,
                expires_at INTEGER
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        if !self.has_expires_at_column().await? {
            info!("adding expires_at column to legacy urls table");
            sqlx::query("ALTER TABLE urls ADD COLUMN expires_at INTEGER")
                .execute(&self.pool)
                .await?;
        }

        // Backfill runs unconditionally so an interrupted migration heals.
        let backfilled = sqlx::query(
            "UPDATE urls SET expires_at = created_at + ? WHERE expires_at IS NULL",
        )
        .bind(MAPPING_TTL_SECONDS)
        .execute(&self.pool)
        .await?
        .rows_affected();

        if backfilled > 0 {
            info!(backfilled, "backfilled expiry for legacy mappings");
        }

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_urls_expires_at ON urls (expires_at)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn has_expires_at_column(&self) -> Result<bool, AppError> {
        let columns = sqlx::query("PRAGMA table_info(urls)")
            .fetch_all(&self.pool)
            .await?;

        Ok(columns
            .iter()
            .any(|row| row.get::<String, _>("name") == "expires_at"))
    }

    /// Deletes a row only while it is still expired, so a racing re-create
    /// of the same code is never clobbered.
    async fn delete_expired_by_code(&self, code: &str) -> Result<(), AppError> {
        sqlx::query("DELETE FROM urls WHERE code = ? AND expires_at <= ?")
            .bind(code)
            .bind(Utc::now().timestamp())
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl MappingRepository for SqliteMappingRepository {
    async fn save(&self, new_mapping: NewMapping) -> Result<UrlMapping, AppError> {
        // Truncate to whole seconds so the returned entity round-trips
        // exactly with what later reads decode from storage.
        let created_at = from_unix(Utc::now().timestamp());
        let expires_at = created_at + mapping_ttl();

        let result = sqlx::query(
            "INSERT INTO urls (code, long_url, clicks, created_at, expires_at) VALUES (?, ?, 0, ?, ?)",
        )
        .bind(&new_mapping.code)
        .bind(&new_mapping.long_url)
        .bind(created_at.timestamp())
        .bind(expires_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(UrlMapping {
            id: result.last_insert_rowid(),
            code: new_mapping.code,
            long_url: new_mapping.long_url,
            clicks: 0,
            created_at,
            expires_at,
        })
    }

    async fn find_live(&self, code: &str) -> Result<Option<UrlMapping>, AppError> {
        let row = sqlx::query_as::<_, MappingRow>(SELECT_MAPPING)
            .bind(code)
            .fetch_optional(&self.pool)
            .await?;

        let Some(mapping) = row.map(UrlMapping::from) else {
            return Ok(None);
        };

        if mapping.is_expired() {
            self.delete_expired_by_code(code).await?;
            debug!(code, "deleted expired mapping on read");
            return Ok(None);
        }

        Ok(Some(mapping))
    }

    async fn increment_clicks(&self, code: &str) -> Result<bool, AppError> {
        let updated = sqlx::query(
            "UPDATE urls SET clicks = clicks + 1 WHERE code = ? AND expires_at > ?",
        )
        .bind(code)
        .bind(Utc::now().timestamp())
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(updated > 0)
    }

    async fn purge_expired(&self) -> Result<u64, AppError> {
        let removed = sqlx::query("DELETE FROM urls WHERE expires_at <= ?")
            .bind(Utc::now().timestamp())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(removed)
    }

    async fn list_live(&self) -> Result<Vec<UrlMapping>, AppError> {
        self.purge_expired().await?;

        let rows = sqlx::query_as::<_, MappingRow>(
            "SELECT id, code, long_url, clicks, created_at, expires_at FROM urls \
             ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(UrlMapping::from).collect())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
