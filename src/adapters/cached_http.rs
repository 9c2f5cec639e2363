//! Response cache decorator for [`HttpClient`].
//!
//! One instance is shared by every provider of a [`Desk`](crate::Desk). Only
//! successful GET responses that carry `Cache-Control: max-age=N` are stored,
//! and the total body size is kept under a fixed byte budget with LRU eviction.

use async_trait::async_trait;
use lru::LruCache;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// Default cache budget: 20 MB.
pub const DEFAULT_CACHE_SIZE_BYTES: usize = 20 * 1024 * 1024;

#[derive(Debug)]
struct CacheEntry {
    response: Response,
    expires_at: Instant,
}

struct CacheState {
    entries: LruCache<String, CacheEntry>,
    total_bytes: usize,
}

impl CacheState {
    fn remove(&mut self, key: &str) {
        if let Some(entry) = self.entries.pop(key) {
            self.total_bytes -= entry.response.body.len();
        }
    }
}

/// Caching wrapper around another [`HttpClient`].
pub struct CachedHttpClient {
    inner: Arc<dyn HttpClient>,
    max_bytes: usize,
    state: Mutex<CacheState>,
}

impl CachedHttpClient {
    /// Wrap `inner` with the default 20 MB budget.
    pub fn new(inner: Arc<dyn HttpClient>) -> Self {
        Self::with_capacity(inner, DEFAULT_CACHE_SIZE_BYTES)
    }

    /// Wrap `inner` with a custom byte budget. A budget of 0 disables caching.
    pub fn with_capacity(inner: Arc<dyn HttpClient>, max_bytes: usize) -> Self {
        Self {
            inner,
            max_bytes,
            state: Mutex::new(CacheState {
                entries: LruCache::unbounded(),
                total_bytes: 0,
            }),
        }
    }

    /// Bytes currently held by cached bodies.
    pub fn cached_bytes(&self) -> usize {
        self.state.lock().map(|s| s.total_bytes).unwrap_or(0)
    }

    /// Number of cached responses.
    pub fn len(&self) -> usize {
        self.state.lock().map(|s| s.entries.len()).unwrap_or(0)
    }

    /// True when nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every cached response.
    pub fn clear(&self) {
        if let Ok(mut state) = self.state.lock() {
            state.entries.clear();
            state.total_bytes = 0;
        }
    }

    fn lookup(&self, url: &str) -> Option<Response> {
        let mut state = self.state.lock().ok()?;
        match state.entries.get(url) {
            Some(entry) if entry.expires_at > Instant::now() => {
                return Some(entry.response.clone());
            }
            Some(_) => {}
            None => return None,
        }
        state.remove(url);
        None
    }

    fn store(&self, url: &str, response: &Response) {
        let Some(max_age) = cache_lifetime(response) else {
            return;
        };
        let size = response.body.len();
        if size > self.max_bytes {
            return;
        }
        let Ok(mut state) = self.state.lock() else {
            return;
        };
        state.remove(url);
        while state.total_bytes + size > self.max_bytes {
            match state.entries.pop_lru() {
                Some((_, evicted)) => state.total_bytes -= evicted.response.body.len(),
                None => break,
            }
        }
        state.total_bytes += size;
        state.entries.put(
            url.to_string(),
            CacheEntry {
                response: response.clone(),
                expires_at: Instant::now() + max_age,
            },
        );
    }
}

/// How long a response may be served from cache, if at all.
fn cache_lifetime(response: &Response) -> Option<Duration> {
    if !response.is_success() {
        return None;
    }
    let header = response.header("cache-control")?.to_ascii_lowercase();
    let mut max_age = None;
    for directive in header.split(',').map(str::trim) {
        if directive == "no-store" || directive == "no-cache" {
            return None;
        }
        if let Some(value) = directive.strip_prefix("max-age=") {
            max_age = value.trim_matches('"').parse::<u64>().ok();
        }
    }
    max_age.filter(|secs| *secs > 0).map(Duration::from_secs)
}

#[async_trait]
impl HttpClient for CachedHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        if let Some(hit) = self.lookup(url) {
            tracing::debug!("cache hit: {}", url);
            return Ok(hit);
        }
        let response = self.inner.get(url, headers).await?;
        self.store(url, &response);
        Ok(response)
    }

    async fn post(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.inner.post(url, body, headers).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use bytes::Bytes;

    fn cacheable(body: &str, cache_control: &str) -> MockResponse {
        let mut headers = Headers::new();
        headers.insert("Cache-Control".to_string(), cache_control.to_string());
        MockResponse::Success(Response::with_headers(200, headers, Bytes::from(body.to_string())))
    }

    #[tokio::test]
    async fn test_fresh_response_served_from_cache() {
        let mock = MockHttpClient::new();
        mock.set_response("https://example.com/a", cacheable("hello", "public, max-age=60"));
        let cached = CachedHttpClient::new(Arc::new(mock.clone()));

        cached.get("https://example.com/a", &Headers::new()).await.unwrap();
        let second = cached.get("https://example.com/a", &Headers::new()).await.unwrap();

        assert_eq!(second.body, Bytes::from("hello"));
        assert_eq!(mock.request_count(), 1);
        assert_eq!(cached.cached_bytes(), 5);
    }

    #[tokio::test]
    async fn test_no_store_not_cached() {
        let mock = MockHttpClient::new();
        mock.set_response("https://example.com/a", cacheable("hello", "no-store"));
        let cached = CachedHttpClient::new(Arc::new(mock.clone()));

        cached.get("https://example.com/a", &Headers::new()).await.unwrap();
        cached.get("https://example.com/a", &Headers::new()).await.unwrap();

        assert_eq!(mock.request_count(), 2);
        assert!(cached.is_empty());
    }

    #[tokio::test]
    async fn test_responses_without_cache_control_not_cached() {
        let mock = MockHttpClient::new();
        mock.set_response("https://example.com/a", MockResponse::json(200, serde_json::json!({})));
        let cached = CachedHttpClient::new(Arc::new(mock.clone()));

        cached.get("https://example.com/a", &Headers::new()).await.unwrap();
        cached.get("https://example.com/a", &Headers::new()).await.unwrap();

        assert_eq!(mock.request_count(), 2);
    }

    #[tokio::test]
    async fn test_budget_evicts_least_recently_used() {
        let mock = MockHttpClient::new();
        mock.set_response("https://example.com/a", cacheable("aaaa", "max-age=60"));
        mock.set_response("https://example.com/b", cacheable("bbbb", "max-age=60"));
        mock.set_response("https://example.com/c", cacheable("cccc", "max-age=60"));
        let cached = CachedHttpClient::with_capacity(Arc::new(mock.clone()), 8);

        cached.get("https://example.com/a", &Headers::new()).await.unwrap();
        cached.get("https://example.com/b", &Headers::new()).await.unwrap();
        cached.get("https://example.com/c", &Headers::new()).await.unwrap();

        assert_eq!(cached.len(), 2);
        assert!(cached.cached_bytes() <= 8);

        mock.clear_requests();
        cached.get("https://example.com/a", &Headers::new()).await.unwrap();
        assert_eq!(mock.request_count(), 1, "evicted entry must be refetched");
    }

    #[tokio::test]
    async fn test_posts_bypass_cache() {
        let mock = MockHttpClient::new();
        mock.set_response("https://example.com/cases", cacheable("{}", "max-age=60"));
        let cached = CachedHttpClient::new(Arc::new(mock.clone()));

        cached.post("https://example.com/cases", "{}", &Headers::new()).await.unwrap();
        cached.post("https://example.com/cases", "{}", &Headers::new()).await.unwrap();

        assert_eq!(mock.request_count(), 2);
        assert!(cached.is_empty());
    }

    #[test]
    fn test_cache_lifetime_parsing() {
        let mut headers = Headers::new();
        headers.insert("cache-control".to_string(), "private, max-age=120".to_string());
        let response = Response::with_headers(200, headers.clone(), Bytes::new());
        assert_eq!(cache_lifetime(&response), Some(Duration::from_secs(120)));

        let not_ok = Response::with_headers(500, headers, Bytes::new());
        assert_eq!(cache_lifetime(&not_ok), None);
    }
}
