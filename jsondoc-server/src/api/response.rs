//! Response envelope and error-to-status mapping.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use jsondoc::error::DocumentServiceError;
use serde::Serialize;

/// Standard API response wrapper for all endpoints
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Whether the operation was successful
    pub success: bool,
    /// Optional human-readable note
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Response data (if successful)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error description (if unsuccessful)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Create a successful API response with data
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
            error: None,
        }
    }

    /// Create a successful API response with data and message
    pub fn success_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: Some(data),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    /// Create a failed API response
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: None,
            data: None,
            error: Some(error.into()),
        }
    }
}

/// Everything a handler can fail with.
#[derive(Debug)]
pub enum ApiError {
    /// The request body could not be decoded.
    Payload(JsonRejection),
    /// The document service rejected the request.
    Service(DocumentServiceError),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Payload(rejection)
    }
}

impl From<DocumentServiceError> for ApiError {
    fn from(err: DocumentServiceError) -> Self {
        ApiError::Service(err)
    }
}

/// Maps a service failure to its HTTP status.
pub fn status_for(err: &DocumentServiceError) -> StatusCode {
    match err {
        DocumentServiceError::InvalidId | DocumentServiceError::InvalidData => {
            StatusCode::BAD_REQUEST
        }
        DocumentServiceError::DocumentNotFound(_) => StatusCode::NOT_FOUND,
        DocumentServiceError::DocumentAlreadyExists(_)
        | DocumentServiceError::VersionConflict { .. } => StatusCode::CONFLICT,
        DocumentServiceError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Payload(rejection) => (
                StatusCode::BAD_REQUEST,
                format!("invalid JSON payload: {}", rejection.body_text()),
            ),
            ApiError::Service(err) => {
                let status = status_for(&err);
                if status.is_server_error() {
                    tracing::error!(error = %err, "document operation failed");
                }
                (status, err.to_string())
            }
        };

        (status, Json(ApiResponse::failure(message))).into_response()
    }
}
