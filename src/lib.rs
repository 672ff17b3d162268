//! # Shortly
//!
//! A URL shortening service with click tracking and TTL-based expiry,
//! built with Axum and SQLite.
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - The mapping entity, repository trait,
//!   and the background expiry sweeper
//! - **Application Layer** ([`application`]) - The shortener service that
//!   handlers consume
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite storage
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and routes
//!
//! ## Behavior
//!
//! Every mapping lives for a fixed five hours. Expiry is enforced on two
//! independent paths sharing one predicate: reads delete expired rows
//! lazily, and a background sweeper purges them eagerly so storage stays
//! bounded without read traffic. Click counts are incremented with a single
//! atomic update and only while a mapping is live.
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional; defaults to sqlite://shortly.db
//! export DATABASE_URL="sqlite://shortly.db"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::ShortenerService;
    pub use crate::domain::entities::{NewMapping, UrlMapping, mapping_ttl};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
