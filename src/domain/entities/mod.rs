//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures; the only behavior they carry is the
//! expiry predicate, which is defined once on [`UrlMapping`] so that the
//! read path and the sweeper cannot drift apart.

pub mod mapping;

pub use mapping::{MAPPING_TTL_SECONDS, NewMapping, UrlMapping, mapping_ttl};
