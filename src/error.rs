//! Application error type and HTTP response mapping.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use std::fmt;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload included in every error response.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

/// Typed failures surfaced by the storage core and mapped to HTTP statuses
/// at the API boundary.
#[derive(Debug)]
pub enum AppError {
    /// Malformed input, e.g. an empty URL. Maps to 400.
    Validation { message: String, details: Value },
    /// Absent or expired mapping. Maps to 404.
    NotFound { message: String, details: Value },
    /// Unique-key collision on insert. Maps to 409; the shorten path
    /// retries with a regenerated code before this ever reaches a client.
    Conflict { message: String, details: Value },
    /// Storage engine not reachable. Maps to 500.
    Unavailable { message: String, details: Value },
    /// Any other failure. Maps to 500.
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }
    pub fn unavailable(message: impl Into<String>, details: Value) -> Self {
        Self::Unavailable {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    fn parts(self) -> (StatusCode, &'static str, String, Value) {
        match self {
            AppError::Validation { message, details } => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                message,
                details,
            ),
            AppError::NotFound { message, details } => {
                (StatusCode::NOT_FOUND, "not_found", message, details)
            }
            AppError::Conflict { message, details } => {
                (StatusCode::CONFLICT, "conflict", message, details)
            }
            AppError::Unavailable { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "unavailable",
                message,
                details,
            ),
            AppError::Internal { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                message,
                details,
            ),
        }
    }

    /// Converts into the serializable error payload, for embedding errors
    /// in otherwise successful response bodies.
    pub fn to_error_info(self) -> ErrorInfo {
        let (_, code, message, details) = self.parts();
        ErrorInfo {
            code,
            message,
            details,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (kind, message) = match self {
            AppError::Validation { message, .. } => ("validation_error", message),
            AppError::NotFound { message, .. } => ("not_found", message),
            AppError::Conflict { message, .. } => ("conflict", message),
            AppError::Unavailable { message, .. } => ("unavailable", message),
            AppError::Internal { message, .. } => ("internal_error", message),
        };
        write!(f, "{kind}: {message}")
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = self.parts();

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error() {
            if db.is_unique_violation() {
                return AppError::conflict(
                    "Short code already exists",
                    json!({ "constraint": db.constraint() }),
                );
            }
        }

        match e {
            sqlx::Error::PoolClosed | sqlx::Error::PoolTimedOut | sqlx::Error::Io(_) => {
                AppError::unavailable("Storage unavailable", json!({}))
            }
            _ => AppError::internal("Database error", json!({})),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::bad_request(
            "Validation failed",
            serde_json::to_value(&errors).unwrap_or_default(),
        )
    }
}
