//! Result type alias for SDK operations.

use super::context::ErrorContext;
use super::desk_error::DeskError;
use super::response::ErrorResponse;

/// Type alias for Results using DeskError.
pub type DeskResult<T> = Result<T, DeskError>;

/// Extension trait for Result types to add context to errors.
pub trait ResultExt<T> {
    /// Add context to an error if the result is Err.
    fn context(self, ctx: ErrorContext) -> DeskResult<T>;

    /// Add context using a closure (only called on error).
    fn with_context<F>(self, f: F) -> DeskResult<T>
    where
        F: FnOnce() -> ErrorContext;
}

impl<T> ResultExt<T> for DeskResult<T> {
    fn context(self, ctx: ErrorContext) -> DeskResult<T> {
        self.map_err(|e| e.with_context(ctx))
    }

    fn with_context<F>(self, f: F) -> DeskResult<T>
    where
        F: FnOnce() -> ErrorContext,
    {
        self.map_err(|e| e.with_context(f()))
    }
}

impl<T> ResultExt<T> for Result<T, ErrorResponse> {
    fn context(self, ctx: ErrorContext) -> DeskResult<T> {
        self.map_err(|e| DeskError::from(e).with_context(ctx))
    }

    fn with_context<F>(self, f: F) -> DeskResult<T>
    where
        F: FnOnce() -> ErrorContext,
    {
        self.map_err(|e| DeskError::from(e).with_context(f()))
    }
}
