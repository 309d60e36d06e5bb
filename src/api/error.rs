//! API error types for the NeuronLab REST API client.

use std::fmt;

use serde::Deserialize;
use thiserror::Error;

use crate::api::types::RequestPayload;

/// Message used when an error body carries no `error.message`.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error";

/// Coarse classification of an [`ApiError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Rejected locally before any request was sent.
    InvalidArgument,
    /// HTTP 400.
    BadRequest,
    /// HTTP 403: the token is valid but has no account behind it.
    UserNotFound,
    /// Any other non-2xx status.
    InternalServerError,
    /// Connection, timeout or send failure that outlived every retry.
    Transport,
    /// A 2xx body that could not be decoded.
    Deserialize,
    /// Invalid client or environment configuration.
    Configuration,
}

/// A non-2xx answer from the service, with the request that caused it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceError {
    /// HTTP status code
    pub status: u16,
    /// Message from the error body (or [`UNKNOWN_ERROR_MESSAGE`])
    pub message: String,
    /// Query parameters of the failed request
    pub payload: RequestPayload,
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (HTTP {}", self.message, self.status)?;
        if !self.payload.is_empty() {
            write!(f, ", request: {}", self.payload)?;
        }
        write!(f, ")")
    }
}

/// Error type for the NeuronLab REST API client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Invalid call arguments, detected before any network I/O
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Malformed request (400)
    #[error("Bad request: {0}")]
    BadRequest(ServiceError),

    /// Token accepted but no user is associated with it (403)
    #[error("User not found: {0}")]
    UserNotFound(ServiceError),

    /// Every other non-2xx status
    #[error("Internal server error: {0}")]
    InternalServerError(ServiceError),

    /// Transport failure after all retry attempts
    #[error("Request failed after {attempts} attempt(s): {source}")]
    Transport {
        attempts: u32,
        #[source]
        source: reqwest::Error,
    },

    /// Success body that is not the expected JSON envelope
    #[error("Deserialization error: {0}")]
    Deserialize(String),

    /// Invalid builder input or environment
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ApiError {
    /// The kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            ApiError::BadRequest(_) => ErrorKind::BadRequest,
            ApiError::UserNotFound(_) => ErrorKind::UserNotFound,
            ApiError::InternalServerError(_) => ErrorKind::InternalServerError,
            ApiError::Transport { .. } => ErrorKind::Transport,
            ApiError::Deserialize(_) => ErrorKind::Deserialize,
            ApiError::Configuration(_) => ErrorKind::Configuration,
        }
    }

    /// The service error, if the server answered with a non-2xx status.
    pub fn service_error(&self) -> Option<&ServiceError> {
        match self {
            ApiError::BadRequest(e)
            | ApiError::UserNotFound(e)
            | ApiError::InternalServerError(e) => Some(e),
            _ => None,
        }
    }

    /// HTTP status code, if the server answered.
    pub fn status_code(&self) -> Option<u16> {
        self.service_error().map(|e| e.status)
    }

    /// Request payload that triggered a service error.
    pub fn payload(&self) -> Option<&RequestPayload> {
        self.service_error().map(|e| &e.payload)
    }

    /// Human-readable message without the kind prefix.
    pub fn message(&self) -> String {
        match self {
            ApiError::InvalidArgument(msg)
            | ApiError::Deserialize(msg)
            | ApiError::Configuration(msg) => msg.clone(),
            ApiError::BadRequest(e)
            | ApiError::UserNotFound(e)
            | ApiError::InternalServerError(e) => e.message.clone(),
            ApiError::Transport { source, .. } => source.to_string(),
        }
    }

    /// Whether the server was reached and answered.
    pub fn is_service_error(&self) -> bool {
        self.service_error().is_some()
    }
}

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Error body returned by the service: `{ "error": { "message": "..." } }`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub error: Option<ErrorDetail>,
}

/// Inner object of [`ErrorResponse`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorResponse {
    /// Decode an error body. Anything that is not the expected shape becomes an empty response.
    pub fn from_body(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_else(|e| {
            tracing::warn!("Error body is not the expected JSON: {}", e);
            Self::default()
        })
    }

    /// The error message, or [`UNKNOWN_ERROR_MESSAGE`] when absent.
    pub fn get_message(&self) -> String {
        self.error
            .as_ref()
            .and_then(|e| e.message.clone())
            .unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_string())
    }
}
