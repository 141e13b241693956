//! Typed error handling for the player registry
//!
//! Every failure the service can report falls into one of three categories:
//!
//! - [`PlayerError::InvalidField`]: an identifier, filter parameter or player
//!   attribute broke its rule. Reported as `400 Bad Request`.
//! - [`PlayerError::NotFound`]: the targeted player does not exist. Reported
//!   as `404 Not Found`.
//! - [`PlayerError::Storage`]: the store failed. The error is opaque to the
//!   service and reported as `500 Internal Server Error`.
//!
//! # Example
//!
//! ```rust,ignore
//! match service.get(id).await {
//!     Ok(player) => println!("{}", player.name),
//!     Err(PlayerError::NotFound { id }) => println!("no player {}", id),
//!     Err(e) => eprintln!("other error: {}", e),
//! }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// A single attribute failing its validation rule
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("invalid value for '{field}': {message}")]
pub struct InvalidField {
    /// Name of the offending attribute, as it appears on the wire
    pub field: String,
    /// Human-readable reason
    pub message: String,
}

impl InvalidField {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// The main error type of the player registry
#[derive(Debug, Error)]
pub enum PlayerError {
    /// A supplied value failed validation
    #[error(transparent)]
    InvalidField(#[from] InvalidField),

    /// No player is stored under the given id
    #[error("player with id '{id}' not found")]
    NotFound { id: i64 },

    /// The backing store failed
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl PlayerError {
    /// Shorthand for an [`InvalidField`] failure
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        PlayerError::InvalidField(InvalidField::new(field, message))
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            PlayerError::InvalidField(_) => StatusCode::BAD_REQUEST,
            PlayerError::NotFound { .. } => StatusCode::NOT_FOUND,
            PlayerError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            PlayerError::InvalidField(_) => "INVALID_FIELD",
            PlayerError::NotFound { .. } => "PLAYER_NOT_FOUND",
            PlayerError::Storage(_) => "STORAGE_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            PlayerError::InvalidField(invalid) => Some(serde_json::json!({
                "field": invalid.field,
            })),
            PlayerError::NotFound { id } => Some(serde_json::json!({ "id": id })),
            PlayerError::Storage(_) => None,
        }
    }
}

impl IntoResponse for PlayerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

/// A specialized Result type for player registry operations
pub type PlayerResult<T> = Result<T, PlayerError>;
