//! SQLite repository implementations.

pub mod sqlite_mapping_repository;

pub use sqlite_mapping_repository::SqliteMappingRepository;
