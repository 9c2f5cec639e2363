//! Error category classification.
//!
//! Categories let the host decide how to present a failure without matching on
//! every concrete variant.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// No response reached us (connectivity loss, DNS, timeout).
    Network,

    /// The API rejected our credentials (HTTP 401/403).
    Auth,

    /// Backend errors (HTTP 5xx) or undecodable responses.
    Server,

    /// Integration bugs: misuse of the SDK such as submitting an invalid form.
    Client,

    /// Caller-supplied input was rejected by the API (HTTP 4xx other than auth).
    User,

    /// Missing or invalid SDK configuration.
    Configuration,
}

impl ErrorCategory {
    /// Returns true if a user-initiated retry may succeed.
    ///
    /// The SDK itself never retries; this only drives presentation.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorCategory::Network | ErrorCategory::Server)
    }

    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Auth => "auth",
            ErrorCategory::Server => "server",
            ErrorCategory::Client => "client",
            ErrorCategory::User => "user",
            ErrorCategory::Configuration => "configuration",
        }
    }

    /// Returns suggested recovery actions for this category.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "Check your internet connection and try again",
            ErrorCategory::Auth => "Check the API token configured for the support center",
            ErrorCategory::Server => "The support center may be having issues. Please try again later",
            ErrorCategory::Client => "This is an integration bug. Please report it",
            ErrorCategory::User => "Please check your input and try again",
            ErrorCategory::Configuration => "Check the desk.properties settings",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
