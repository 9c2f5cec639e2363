//! Error handling for the SDK.
//!
//! - [`ErrorResponse`]: the single shape every provider failure is funneled into
//! - [`ConfigError`], [`FormError`]: integration bugs, returned immediately
//! - [`DeskError`]: unified error with [`ErrorCategory`] and optional [`ErrorContext`]
//! - [`DeskResult`] / [`ResultExt`]: result alias and context helpers
//!
//! | Category | Description | Retryable |
//! |----------|-------------|-----------|
//! | Network | No response received | Yes |
//! | Auth | HTTP 401/403 | No |
//! | Server | HTTP 5xx, undecodable body | Yes |
//! | User | Other HTTP 4xx | No |
//! | Client | SDK misuse | No |
//! | Configuration | Missing/invalid settings | No |
//!
//! "Retryable" only informs presentation; the SDK never retries by itself.

mod category;
mod config;
mod context;
mod desk_error;
mod form;
mod response;
mod result;

pub use category::ErrorCategory;
pub use config::ConfigError;
pub use context::ErrorContext;
pub use desk_error::DeskError;
pub use form::FormError;
pub use response::{ErrorResponse, NO_RESPONSE_STATUS};
pub use result::{DeskResult, ResultExt};
