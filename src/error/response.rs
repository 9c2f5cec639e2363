//! Normalized request failure handed to the UI layer.

use std::fmt;

use crate::traits::HttpError;

/// Status reported when a request failed before any HTTP response was received.
pub const NO_RESPONSE_STATUS: u16 = 500;

/// Uniform shape for every provider failure.
///
/// Created once at the point a request fails and never mutated afterwards.
/// List controllers use [`ErrorResponse::is_network_error`] to pick between the
/// configured network-error text and the generic error text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorResponse {
    is_network_error: bool,
    reason: String,
    http_status: u16,
}

impl ErrorResponse {
    /// A failure where the server answered with a non-2xx status.
    pub fn http(status: u16, reason: impl Into<String>) -> Self {
        Self {
            is_network_error: false,
            reason: reason.into(),
            http_status: status,
        }
    }

    /// A failure where no response was received.
    pub fn network(reason: impl Into<String>) -> Self {
        Self {
            is_network_error: true,
            reason: reason.into(),
            http_status: NO_RESPONSE_STATUS,
        }
    }

    /// A 2xx response whose body could not be decoded.
    pub fn decode(err: &serde_json::Error) -> Self {
        Self {
            is_network_error: false,
            reason: format!("Malformed response: {}", err),
            http_status: NO_RESPONSE_STATUS,
        }
    }

    /// Whether the request never got a response (connectivity, timeout, I/O).
    pub fn is_network_error(&self) -> bool {
        self.is_network_error
    }

    /// Human-readable failure reason.
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// HTTP status, or [`NO_RESPONSE_STATUS`] when no response was received.
    pub fn http_status(&self) -> u16 {
        self.http_status
    }
}

impl From<HttpError> for ErrorResponse {
    fn from(err: HttpError) -> Self {
        Self {
            is_network_error: err.is_network(),
            reason: err.to_string(),
            http_status: NO_RESPONSE_STATUS,
        }
    }
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_network_error {
            write!(f, "network error: {}", self.reason)
        } else {
            write!(f, "HTTP {}: {}", self.http_status, self.reason)
        }
    }
}

impl std::error::Error for ErrorResponse {}
