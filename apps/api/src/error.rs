//! Error handling for the Catalog API
//!
//! A single error type built with thiserror, mapped to HTTP status codes via
//! Axum's IntoResponse and to GraphQL error extensions via async-graphql's
//! ErrorExtensions.

use async_graphql::ErrorExtensions;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// API error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for client-side handling
    pub code: &'static str,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Main API error type
#[derive(Error, Debug)]
pub enum ApiError {
    // ========== Validation Errors ==========
    /// An identifier argument is not a valid 24 character hex ObjectId
    #[error("invalid identifier for '{field}': {value:?}")]
    InvalidId { field: &'static str, value: String },

    // ========== Database Errors ==========
    /// MongoDB operation failed
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),

    /// The backing store did not answer a ping
    #[error("database connection unavailable")]
    DatabaseUnavailable,

    // ========== Configuration Errors ==========
    /// Configuration error
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl ApiError {
    /// Build an invalid identifier error for the named argument field
    pub fn invalid_id(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidId {
            field,
            value: value.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidId { .. } => StatusCode::BAD_REQUEST,
            Self::DatabaseUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::Database(_) | Self::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code string for client-side handling
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidId { .. } => "INVALID_ID",
            Self::Database(_) => "DATABASE_ERROR",
            Self::DatabaseUnavailable => "DATABASE_UNAVAILABLE",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
        }
    }

    /// Log the error with appropriate severity based on status code
    pub fn log(&self) {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(
                error = %self,
                code = self.error_code(),
                status = status.as_u16(),
                "Server error occurred"
            );
        } else {
            tracing::debug!(
                error = %self,
                code = self.error_code(),
                status = status.as_u16(),
                "Client error"
            );
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.log();

        let status = self.status_code();
        let error_response = ErrorResponse {
            code: self.error_code(),
            message: self.to_string(),
            details: None,
        };

        (status, Json(error_response)).into_response()
    }
}

impl ErrorExtensions for ApiError {
    fn extend(&self) -> async_graphql::Error {
        self.log();

        async_graphql::Error::new(self.to_string()).extend_with(|_, extensions| {
            extensions.set("code", self.error_code());
            if let Self::InvalidId { field, value } = self {
                extensions.set("field", *field);
                extensions.set("value", value.as_str());
            }
        })
    }
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

impl From<catalog_shared_config::ConfigError> for ApiError {
    fn from(err: catalog_shared_config::ConfigError) -> Self {
        Self::Configuration(err.to_string())
    }
}
