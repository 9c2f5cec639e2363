//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`CachedHttpClient`] - shared response cache in front of any [`HttpClient`](crate::traits::HttpClient)
//!
//! # Mock Implementations
//!
//! - [`mock::MockHttpClient`] - Configurable HTTP responses with request recording

pub mod cached_http;
pub mod mock;
pub mod reqwest_http;

pub use cached_http::{CachedHttpClient, DEFAULT_CACHE_SIZE_BYTES};
pub use mock::{MockHttpClient, MockResponse};
pub use reqwest_http::ReqwestHttpClient;
