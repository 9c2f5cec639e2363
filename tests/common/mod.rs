//! Shared fixtures for integration tests.
//!
//! Every helper builds SDK objects over the real [`ReqwestHttpClient`] so the
//! tests exercise actual HTTP against a `wiremock` server.

#![allow(dead_code)]

use std::net::TcpListener;
use std::sync::Arc;

use desk_sdk::adapters::ReqwestHttpClient;
use desk_sdk::api::DeskClient;
use desk_sdk::{Desk, DeskConfig};
use serde_json::{json, Value};
use wiremock::MockServer;

pub const TEST_TOKEN: &str = "test-api-token";

pub fn test_config(server: &MockServer) -> DeskConfig {
    DeskConfig::new(server.uri(), TEST_TOKEN)
}

/// A `Desk` without the response cache, so every call reaches the server.
pub fn uncached_desk(config: DeskConfig) -> Desk {
    Desk::with_http_client(config, Arc::new(ReqwestHttpClient::new())).with_language("en")
}

pub fn test_client(server: &MockServer) -> Arc<DeskClient> {
    client_for(server.uri())
}

pub fn client_for(base_url: String) -> Arc<DeskClient> {
    Arc::new(
        DeskClient::new(Arc::new(ReqwestHttpClient::new()), base_url, TEST_TOKEN)
            .with_language("en"),
    )
}

/// Base URL of a local port nothing listens on.
///
/// Dropping a `MockServer` does not free its port (wiremock pools servers),
/// so bind and release a plain listener instead.
pub fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind listener");
    let port = listener.local_addr().expect("No local address").port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

pub fn article_json(id: u64, subject: &str) -> Value {
    json!({
        "subject": subject,
        "body": format!("<p>{}</p>", subject),
        "in_support_center": true,
        "_links": {
            "self": {"href": format!("/api/v2/articles/{}", id), "class": "article"},
            "topic": {"href": "/api/v2/topics/7", "class": "topic"}
        }
    })
}

pub fn topic_json(id: u64, name: &str) -> Value {
    json!({
        "name": name,
        "in_support_center": true,
        "_links": {"self": {"href": format!("/api/v2/topics/{}", id), "class": "topic"}}
    })
}

/// Page envelope. `has_next` controls whether a `next` link is advertised.
pub fn page_json(entries: Vec<Value>, page: u32, has_next: bool) -> Value {
    let next = if has_next {
        json!({"href": format!("/api/v2/articles?page={}", page + 1), "class": "page"})
    } else {
        Value::Null
    };
    json!({
        "total_entries": entries.len(),
        "page": page,
        "_links": {"next": next},
        "_embedded": {"entries": entries}
    })
}

/// Query parameters of the `index`-th request the server received.
pub async fn received_query(server: &MockServer, index: usize) -> Vec<(String, String)> {
    let requests = server.received_requests().await.unwrap_or_default();
    requests[index]
        .url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

pub fn has_param(params: &[(String, String)], key: &str) -> bool {
    params.iter().any(|(k, _)| k == key)
}

pub fn param<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}
