use std::sync::Arc;

use async_trait::async_trait;

use crate::api::{DeskClient, Query, ARTICLES_PATH, ARTICLE_SEARCH_PATH};
use crate::error::ErrorResponse;
use crate::models::{Article, PageResult};
use crate::state::{ListMode, ListQuery};
use crate::traits::PageSource;

use super::{fetch_page, support_center_query, ARTICLES_PER_PAGE};

/// Article listing and search.
#[derive(Clone)]
pub struct ArticleProvider {
    client: Arc<DeskClient>,
}

impl ArticleProvider {
    pub fn new(client: Arc<DeskClient>) -> Self {
        Self { client }
    }

    /// One page of support-center articles, optionally scoped to a topic
    /// and/or brand (`0` = unscoped).
    pub async fn get_articles(
        &self,
        topic_id: u64,
        brand_id: u64,
        page: u32,
    ) -> Result<PageResult<Article>, ErrorResponse> {
        let query = self.page_query(topic_id, brand_id, page);
        fetch_page(&self.client, ARTICLES_PATH, &query).await
    }

    /// One page of articles matching `text` in subject, body, keywords,
    /// question or answer.
    pub async fn find_articles(
        &self,
        topic_id: u64,
        brand_id: u64,
        text: &str,
        page: u32,
    ) -> Result<PageResult<Article>, ErrorResponse> {
        let query = self.page_query(topic_id, brand_id, page).push("text", text);
        fetch_page(&self.client, ARTICLE_SEARCH_PATH, &query).await
    }

    fn page_query(&self, topic_id: u64, brand_id: u64, page: u32) -> Query {
        Query::new()
            .push_scope("topic_ids", topic_id)
            .push_scope("brand_ids", brand_id)
            .push("per_page", ARTICLES_PER_PAGE)
            .push("page", page)
            .merge(support_center_query(&self.client))
    }
}

#[async_trait]
impl PageSource<Article> for ArticleProvider {
    async fn fetch_page(
        &self,
        query: &ListQuery,
        page: u32,
    ) -> Result<PageResult<Article>, ErrorResponse> {
        match &query.mode {
            ListMode::Topic => self.get_articles(query.topic_id, query.brand_id, page).await,
            ListMode::Search { query: text } => {
                self.find_articles(query.topic_id, query.brand_id, text, page)
                    .await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use crate::providers::{ALL_BRANDS, ALL_TOPICS};
    use crate::traits::HttpError;
    use serde_json::json;

    fn provider(mock: &MockHttpClient) -> ArticleProvider {
        let client = DeskClient::new(Arc::new(mock.clone()), "https://desk.test", "t").with_language("fr");
        ArticleProvider::new(Arc::new(client))
    }

    fn articles_page(page: u32, subjects: &[&str], next: bool) -> serde_json::Value {
        let entries: Vec<_> = subjects
            .iter()
            .enumerate()
            .map(|(i, s)| json!({"subject": s, "body": "", "_links": {"self": {"href": format!("/api/v2/articles/{}", i + 1)}}}))
            .collect();
        let next_link = if next {
            json!({"href": format!("/api/v2/articles?page={}", page + 1)})
        } else {
            serde_json::Value::Null
        };
        json!({"page": page, "total_entries": subjects.len(), "_links": {"next": next_link}, "_embedded": {"entries": entries}})
    }

    #[tokio::test]
    async fn test_unscoped_request_omits_filters() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::json(200, articles_page(1, &["A"], false)));

        provider(&mock).get_articles(ALL_TOPICS, ALL_BRANDS, 1).await.unwrap();

        let request = &mock.get_requests()[0];
        assert_eq!(request.path(), "/api/v2/articles");
        assert_eq!(request.query_param("topic_ids"), None);
        assert_eq!(request.query_param("brand_ids"), None);
        assert_eq!(request.query_param("per_page").as_deref(), Some("25"));
        assert_eq!(request.query_param("page").as_deref(), Some("1"));
        assert_eq!(request.query_param("sort_field").as_deref(), Some("position"));
        assert_eq!(request.query_param("sort_direction").as_deref(), Some("asc"));
        assert_eq!(request.query_param("in_support_center").as_deref(), Some("true"));
        assert_eq!(request.query_param("locale").as_deref(), Some("fr"));
    }

    #[tokio::test]
    async fn test_scoped_request_includes_filters() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::json(200, articles_page(2, &["A"], true)));

        let result = provider(&mock).get_articles(17, 3, 2).await.unwrap();
        assert_eq!(result.page, 2);
        assert!(result.has_more);

        let request = &mock.get_requests()[0];
        assert_eq!(request.query_param("topic_ids").as_deref(), Some("17"));
        assert_eq!(request.query_param("brand_ids").as_deref(), Some("3"));
    }

    #[tokio::test]
    async fn test_empty_body_is_soft_empty() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::empty());

        let result = provider(&mock).get_articles(ALL_TOPICS, ALL_BRANDS, 1).await;
        assert_eq!(result, Ok(PageResult::empty()));
        assert_eq!(mock.request_count(), 1);
    }

    #[tokio::test]
    async fn test_null_envelope_fields_are_soft_empty() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::json(
            200,
            json!({"page": null, "_links": null, "_embedded": null}),
        ));

        let result = provider(&mock).get_articles(ALL_TOPICS, ALL_BRANDS, 1).await;
        assert_eq!(result, Ok(PageResult::empty()));
    }

    #[tokio::test]
    async fn test_search_adds_text() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::json(200, articles_page(1, &["Reset password"], false)));

        let result = provider(&mock)
            .find_articles(ALL_TOPICS, 9, "reset password", 1)
            .await
            .unwrap();
        assert_eq!(result.items[0].subject, "Reset password");

        let request = &mock.get_requests()[0];
        assert_eq!(request.path(), "/api/v2/articles/search");
        assert_eq!(request.query_param("text").as_deref(), Some("reset password"));
        assert_eq!(request.query_param("topic_ids"), None);
        assert_eq!(request.query_param("brand_ids").as_deref(), Some("9"));
    }

    #[tokio::test]
    async fn test_page_source_dispatches_on_mode() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::json(200, articles_page(1, &[], false)));
        let provider = provider(&mock);

        provider.fetch_page(&ListQuery::topic(2, 0), 1).await.unwrap();
        let search = ListQuery::search(2, 0, "wifi").unwrap();
        provider.fetch_page(&search, 3).await.unwrap();

        let requests = mock.get_requests();
        assert_eq!(requests[0].path(), "/api/v2/articles");
        assert_eq!(requests[1].path(), "/api/v2/articles/search");
        assert_eq!(requests[1].query_param("page").as_deref(), Some("3"));
        assert_eq!(requests[1].query_param("text").as_deref(), Some("wifi"));
    }

    #[tokio::test]
    async fn test_failures_normalized() {
        let mock = MockHttpClient::new();
        mock.push_response("https://desk.test", MockResponse::json(404, json!({"message": "Not Found"})));
        mock.push_response(
            "https://desk.test",
            MockResponse::Error(HttpError::Timeout("30s".to_string())),
        );
        let provider = provider(&mock);

        let err = provider.get_articles(5, 0, 1).await.unwrap_err();
        assert_eq!(err.http_status(), 404);
        assert!(!err.is_network_error());

        let err = provider.get_articles(5, 0, 1).await.unwrap_err();
        assert_eq!(err.http_status(), 500);
        assert!(err.is_network_error());
    }
}
