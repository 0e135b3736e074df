//! API error types with IntoResponse
//!
//! Errors become a status code plus a plain-text message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::db::repos::DbError;
use crate::models::ValidationError;

/// Message returned for any storage failure; the cause is only logged.
const UNAVAILABLE_MESSAGE: &str = "Cannot get data from db";

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Bad id or undecodable body (400)
    Validation(ValidationError),

    /// No row matches the id (404)
    NotFound { resource: &'static str, id: String },

    /// Connection or statement failure (500, logged)
    Unavailable(DbError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Unavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            Self::Validation(e) => {
                tracing::debug!(detail = e.detail(), "rejected request: {}", e);
                e.to_string()
            }
            Self::NotFound { resource, id } => format!("{} '{}' not found", resource, id),
            Self::Unavailable(e) => {
                // Log the actual error, return generic message
                tracing::error!("Database error: {}", e);
                UNAVAILABLE_MESSAGE.to_string()
            }
        };

        (status, message).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, id } => Self::NotFound { resource, id },
            _ => Self::Unavailable(e),
        }
    }
}
