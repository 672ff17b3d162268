//! API layer: DTOs, request handlers and route configuration.

pub mod dto;
pub mod handlers;
pub mod routes;
