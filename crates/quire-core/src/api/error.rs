//! Error taxonomy for the articles API.

use std::fmt;

use serde_json::Value;

/// Message shown when the server supplied no usable error text.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// Error category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// The server rejected the credentials (HTTP 401).
    Unauthorized,
    /// Any other non-success HTTP status.
    HttpStatus,
    /// No response: connection refused, DNS failure, broken request.
    Transport,
    /// Success status but the body did not match the expected shape.
    Parse,
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiErrorKind::Unauthorized => write!(f, "unauthorized"),
            ApiErrorKind::HttpStatus => write!(f, "http_status"),
            ApiErrorKind::Transport => write!(f, "transport"),
            ApiErrorKind::Parse => write!(f, "parse"),
        }
    }
}

/// Structured error from an API call.
///
/// `message` is always suitable for display: the server's own text when it
/// sent one, [`GENERIC_FAILURE_MESSAGE`] otherwise.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    pub kind: ApiErrorKind,
    /// HTTP status, when a response was received.
    pub status: Option<u16>,
    pub message: String,
    /// Raw body or transport error, for logs.
    pub details: Option<String>,
}

impl ApiError {
    /// Builds an error from a non-success response.
    ///
    /// Extracts the `message` field of a JSON body when present.
    pub fn http_status(status: u16, body: &str) -> Self {
        let kind = if status == 401 {
            ApiErrorKind::Unauthorized
        } else {
            ApiErrorKind::HttpStatus
        };

        let server_message = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|json| {
                json.get("message")
                    .and_then(Value::as_str)
                    .map(str::trim)
                    .filter(|msg| !msg.is_empty())
                    .map(str::to_string)
            });

        Self {
            kind,
            status: Some(status),
            message: server_message.unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string()),
            details: (!body.is_empty()).then(|| body.to_string()),
        }
    }

    /// Creates a transport error (no server body available).
    pub fn transport(details: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Transport,
            status: None,
            message: GENERIC_FAILURE_MESSAGE.to_string(),
            details: Some(details.into()),
        }
    }

    /// Creates a parse error for an unexpected success body.
    pub fn parse(status: u16, details: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Parse,
            status: Some(status),
            message: GENERIC_FAILURE_MESSAGE.to_string(),
            details: Some(details.into()),
        }
    }

    /// Returns true for authentication rejections.
    pub fn is_unauthorized(&self) -> bool {
        self.kind == ApiErrorKind::Unauthorized
    }
}

/// Result type for API operations.
pub type ApiResult<T> = std::result::Result<T, ApiError>;
