//! Utility functions shared across the application.

pub mod code_generator;
