//! Application layer orchestrating domain operations.
//!
//! Services consume repository traits and provide the only API the HTTP
//! handlers are allowed to call.

pub mod services;
