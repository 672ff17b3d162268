//! Domain layer containing business entities and logic.
//!
//! This layer has no dependencies on infrastructure or presentation code.
//!
//! - [`entities`] - Core business data structures and the expiry predicate
//! - [`repositories`] - Data access trait definitions
//! - [`sweeper`] - Background purge loop for expired mappings

pub mod entities;
pub mod repositories;
pub mod sweeper;
