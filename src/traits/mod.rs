//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP client operations (GET, POST)
//! - [`PageSource`] - one page of list content for a controller

pub mod http;
pub mod page_source;

pub use http::{Headers, HttpClient, HttpError, Response};
pub use page_source::PageSource;
