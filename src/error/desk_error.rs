//! Unified error type for the SDK.

use std::fmt;

use super::category::ErrorCategory;
use super::config::ConfigError;
use super::context::ErrorContext;
use super::form::FormError;
use super::response::ErrorResponse;

/// Unified error type.
///
/// Provider operations return [`ErrorResponse`] directly because that is the
/// shape the list controllers consume; `DeskError` is what the composition root
/// and the `desk` binary deal with.
#[derive(Debug)]
pub enum DeskError {
    /// A request to the help-desk API failed.
    Request(ErrorResponse),

    /// Configuration was missing or invalid.
    Config(ConfigError),

    /// The contact form was misused.
    Form(FormError),

    /// Persisted view state could not be encoded or decoded.
    State(serde_json::Error),

    /// Wrapped error with additional context.
    WithContext {
        error: Box<DeskError>,
        context: ErrorContext,
    },
}

impl DeskError {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            DeskError::Request(err) if err.is_network_error() => ErrorCategory::Network,
            DeskError::Request(err) => match err.http_status() {
                401 | 403 => ErrorCategory::Auth,
                400..=499 => ErrorCategory::User,
                _ => ErrorCategory::Server,
            },
            DeskError::Config(_) => ErrorCategory::Configuration,
            DeskError::Form(_) => ErrorCategory::Client,
            DeskError::State(_) => ErrorCategory::Client,
            DeskError::WithContext { error, .. } => error.category(),
        }
    }

    /// Whether a user-initiated retry may succeed.
    pub fn is_retryable(&self) -> bool {
        self.category().is_retryable()
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            DeskError::Request(_) => match self.category() {
                ErrorCategory::Network => "E_REQ_NETWORK",
                ErrorCategory::Auth => "E_REQ_AUTH",
                ErrorCategory::User => "E_REQ_CLIENT",
                _ => "E_REQ_SERVER",
            },
            DeskError::Config(_) => "E_CONFIG",
            DeskError::Form(_) => "E_FORM",
            DeskError::State(_) => "E_STATE",
            DeskError::WithContext { error, .. } => error.error_code(),
        }
    }

    /// Attach context to this error.
    pub fn with_context(self, ctx: ErrorContext) -> Self {
        DeskError::WithContext {
            error: Box::new(self),
            context: ctx,
        }
    }

    /// Get the context if this error has one attached.
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            DeskError::WithContext { context, .. } => Some(context),
            _ => None,
        }
    }

    /// Get the inner error without context.
    pub fn inner(&self) -> &DeskError {
        match self {
            DeskError::WithContext { error, .. } => error.inner(),
            _ => self,
        }
    }

    /// Get the recovery hint for this error.
    pub fn recovery_hint(&self) -> &'static str {
        self.category().recovery_hint()
    }
}

impl fmt::Display for DeskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeskError::Request(err) => write!(f, "{}", err),
            DeskError::Config(err) => write!(f, "{}", err),
            DeskError::Form(err) => write!(f, "{}", err),
            DeskError::State(err) => write!(f, "view state error: {}", err),
            DeskError::WithContext { error, context } => write!(f, "{} ({})", error, context),
        }
    }
}

impl std::error::Error for DeskError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DeskError::Request(err) => Some(err),
            DeskError::Config(err) => Some(err),
            DeskError::Form(err) => Some(err),
            DeskError::State(err) => Some(err),
            DeskError::WithContext { error, .. } => error.source(),
        }
    }
}

impl From<ErrorResponse> for DeskError {
    fn from(err: ErrorResponse) -> Self {
        DeskError::Request(err)
    }
}

impl From<ConfigError> for DeskError {
    fn from(err: ConfigError) -> Self {
        DeskError::Config(err)
    }
}

impl From<FormError> for DeskError {
    fn from(err: FormError) -> Self {
        DeskError::Form(err)
    }
}

impl From<serde_json::Error> for DeskError {
    fn from(err: serde_json::Error) -> Self {
        DeskError::State(err)
    }
}
