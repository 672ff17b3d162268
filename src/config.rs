//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and passed down explicitly; no
//! component reads the environment after that.
//!
//! ## Variables
//!
//! - `DATABASE_URL` - SQLite database URL (default: `sqlite://shortly.db`)
//! - `LISTEN` - Bind address (default: `0.0.0.0:8080`)
//! - `BASE_URL` - Public base URL used when building short links
//!   (default: `http://localhost:8080`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `SWEEP_INTERVAL_SECONDS` - Period of the expiry sweeper (default: 3600)
//! - `CODE_LENGTH` - Length of generated short codes (default: 6)
//! - `DB_MAX_CONNECTIONS` - Connection pool size (default: 5)
//! - `DB_BUSY_TIMEOUT` - SQLite busy timeout in seconds (default: 5)

use anyhow::Result;
use std::env;

use crate::utils::code_generator::DEFAULT_CODE_LENGTH;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub base_url: String,
    pub log_level: String,
    pub log_format: String,
    /// Period of the background expiry sweep in seconds.
    pub sweep_interval_seconds: u64,
    /// Length of generated short codes.
    pub code_length: usize,
    /// Maximum number of connections in the pool.
    pub db_max_connections: u32,
    /// How long SQLite waits on a locked database before failing, in seconds.
    pub db_busy_timeout: u64,
}

impl Config {
    /// Loads configuration from environment variables, applying defaults
    /// for anything unset.
    pub fn from_env() -> Result<Self> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://shortly.db".to_string());
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        let base_url =
            env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let sweep_interval_seconds = env::var("SWEEP_INTERVAL_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3600);

        let code_length = env::var("CODE_LENGTH")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|len| *len >= 1)
            .unwrap_or(DEFAULT_CODE_LENGTH);

        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        let db_busy_timeout = env::var("DB_BUSY_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        Ok(Self {
            database_url,
            listen_addr,
            base_url,
            log_level,
            log_format,
            sweep_interval_seconds,
            code_length,
            db_max_connections,
            db_busy_timeout,
        })
    }
}
