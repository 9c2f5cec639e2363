//! Help-desk REST API client.
//!
//! [`DeskClient`] owns the base URL, credentials and language, and turns one
//! call into exactly one HTTP request. Every failure comes back as an
//! [`ErrorResponse`].

mod query;

pub use query::Query;

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::DeskConfig;
use crate::error::{ErrorResponse, NO_RESPONSE_STATUS};
use crate::locale;
use crate::traits::{Headers, HttpClient, Response};

pub const TOPICS_PATH: &str = "/api/v2/topics";
pub const ARTICLES_PATH: &str = "/api/v2/articles";
pub const ARTICLE_SEARCH_PATH: &str = "/api/v2/articles/search";
pub const CASES_PATH: &str = "/api/v2/cases";
pub const INBOUND_MAILBOXES_PATH: &str = "/api/v2/mailboxes/inbound";

/// Client for the help-desk API.
pub struct DeskClient {
    http: Arc<dyn HttpClient>,
    base_url: String,
    api_token: String,
    language: String,
}

impl DeskClient {
    /// Create a client using the process locale's language.
    pub fn new(http: Arc<dyn HttpClient>, base_url: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_token: api_token.into(),
            language: locale::language_code(),
        }
    }

    pub fn from_config(config: &DeskConfig, http: Arc<dyn HttpClient>) -> Self {
        Self::new(http, config.base_url(), config.api_token.clone())
    }

    /// Override the language sent as `locale`.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for `path` with an optional query string.
    pub fn url(&self, path: &str, query: &Query) -> String {
        if query.is_empty() {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}{}?{}", self.base_url, path, query.encode())
        }
    }

    fn headers(&self) -> Headers {
        let mut headers = Headers::new();
        headers.insert("Authorization".to_string(), format!("Bearer {}", self.api_token));
        headers.insert("Accept".to_string(), "application/json".to_string());
        headers
    }

    /// GET and decode a JSON body. `Ok(None)` means the server answered 2xx
    /// with an empty or `null` body.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &Query,
    ) -> Result<Option<T>, ErrorResponse> {
        let url = self.url(path, query);
        debug!("GET {}", url);

        let response = self.http.get(&url, &self.headers()).await.map_err(|e| {
            warn!("GET {} failed: {}", url, e);
            ErrorResponse::from(e)
        })?;
        decode_body(&url, response)
    }

    /// POST a JSON body and decode the JSON reply.
    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Option<T>, ErrorResponse> {
        let url = self.url(path, &Query::new());
        let payload = serde_json::to_string(body).map_err(|e| {
            ErrorResponse::http(NO_RESPONSE_STATUS, format!("Could not encode request: {}", e))
        })?;
        debug!("POST {}", url);

        let mut headers = self.headers();
        headers.insert("Content-Type".to_string(), "application/json".to_string());

        let response = self.http.post(&url, &payload, &headers).await.map_err(|e| {
            warn!("POST {} failed: {}", url, e);
            ErrorResponse::from(e)
        })?;
        decode_body(&url, response)
    }
}

fn decode_body<T: DeserializeOwned>(url: &str, response: Response) -> Result<Option<T>, ErrorResponse> {
    if !response.is_success() {
        let reason = error_reason(&response);
        warn!("{} returned HTTP {}: {}", url, response.status, reason);
        return Err(ErrorResponse::http(response.status, reason));
    }

    if response.is_blank() {
        debug!("{} returned an empty body", url);
        return Ok(None);
    }

    response.json::<Option<T>>().map_err(|e| {
        warn!("Could not decode response from {}: {}", url, e);
        ErrorResponse::decode(&e)
    })
}

/// Best-effort reason for a non-2xx response: the API's `message` field, else
/// the raw body, else the status line.
fn error_reason(response: &Response) -> String {
    #[derive(serde::Deserialize)]
    struct ApiMessage {
        message: String,
    }

    if let Ok(ApiMessage { message }) = response.json::<ApiMessage>() {
        return message;
    }

    match response.text() {
        Ok(text) if !text.trim().is_empty() => text.trim().chars().take(200).collect(),
        _ => format!("HTTP {}", response.status),
    }
}
