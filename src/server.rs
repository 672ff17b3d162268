//! HTTP server initialization and runtime setup.
//!
//! Handles the database connection, schema preparation, sweeper spawning,
//! and Axum server lifecycle including graceful shutdown.

use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};

use crate::application::services::ShortenerService;
use crate::config::Config;
use crate::domain::sweeper::run_sweeper;
use crate::infrastructure::persistence::SqliteMappingRepository;
use crate::routes::app_router;
use crate::state::AppState;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQLite connection pool (created on first use, WAL journal)
/// - Database schema, including the legacy expiry migration
/// - Background expiry sweeper
/// - Axum HTTP server
///
/// A schema or connection failure is fatal; the process must not accept
/// requests without a working store. On shutdown the sweeper is stopped and
/// the pool is closed.
pub async fn run(config: Config) -> Result<()> {
    let connect_options = SqliteConnectOptions::from_str(&config.database_url)
        .context("Invalid DATABASE_URL")?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(config.db_busy_timeout));

    let pool = SqlitePoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect_with(connect_options)
        .await
        .context("Failed to open database")?;
    tracing::info!("Connected to database");

    let repository = Arc::new(SqliteMappingRepository::new(pool.clone()));
    repository
        .ensure_schema()
        .await
        .context("Failed to prepare database schema")?;

    let sweeper = tokio::spawn(run_sweeper(
        repository.clone(),
        Duration::from_secs(config.sweep_interval_seconds),
    ));
    tracing::info!(
        interval_seconds = config.sweep_interval_seconds,
        "Expiry sweeper started"
    );

    let shortener = Arc::new(ShortenerService::new(repository, config.code_length));
    let state = AppState {
        shortener,
        base_url: config.base_url.clone(),
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    sweeper.abort();
    pool.close().await;
    tracing::info!("Shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutdown signal received");
}
