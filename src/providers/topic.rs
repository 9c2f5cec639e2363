use std::sync::Arc;

use async_trait::async_trait;

use crate::api::{DeskClient, Query, TOPICS_PATH};
use crate::error::ErrorResponse;
use crate::models::{PageResult, Topic};
use crate::state::ListQuery;
use crate::traits::PageSource;

use super::{fetch_page, support_center_query};

/// Largest page the API serves; topics are fetched in one request.
pub const TOPICS_PER_PAGE: u32 = 100;

/// Support-center topic listing.
#[derive(Clone)]
pub struct TopicProvider {
    client: Arc<DeskClient>,
}

impl TopicProvider {
    pub fn new(client: Arc<DeskClient>) -> Self {
        Self { client }
    }

    /// All support-center topics for a brand (`0` = every brand).
    pub async fn get_topics(&self, brand_id: u64) -> Result<Vec<Topic>, ErrorResponse> {
        let query = Query::new()
            .push_scope("brand_ids", brand_id)
            .push("per_page", TOPICS_PER_PAGE)
            .merge(support_center_query(&self.client));
        let result = fetch_page(&self.client, TOPICS_PATH, &query).await?;
        Ok(result.items)
    }
}

/// Topics arrive as a single page with nothing after it.
#[async_trait]
impl PageSource<Topic> for TopicProvider {
    async fn fetch_page(&self, query: &ListQuery, page: u32) -> Result<PageResult<Topic>, ErrorResponse> {
        let items = self.get_topics(query.brand_id).await?;
        Ok(PageResult {
            items,
            page,
            has_more: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use crate::providers::ALL_BRANDS;
    use serde_json::json;

    fn provider(mock: &MockHttpClient) -> TopicProvider {
        let client = DeskClient::new(Arc::new(mock.clone()), "https://desk.test", "t").with_language("de");
        TopicProvider::new(Arc::new(client))
    }

    #[tokio::test]
    async fn test_get_topics() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::json(
            200,
            json!({"page": 1, "_links": {"next": null}, "_embedded": {"entries": [
                {"name": "Billing", "position": 1},
                {"name": "Shipping", "position": 2}
            ]}}),
        ));

        let topics = provider(&mock).get_topics(ALL_BRANDS).await.unwrap();
        assert_eq!(topics.len(), 2);
        assert_eq!(topics[0].name, "Billing");

        let request = &mock.get_requests()[0];
        assert_eq!(request.path(), "/api/v2/topics");
        assert_eq!(request.query_param("brand_ids"), None);
        assert_eq!(request.query_param("page"), None);
        assert_eq!(request.query_param("locale").as_deref(), Some("de"));
        assert_eq!(request.query_param("in_support_center").as_deref(), Some("true"));
    }

    #[tokio::test]
    async fn test_brand_filter_and_soft_empty() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::empty());

        let topics = provider(&mock).get_topics(4).await.unwrap();
        assert!(topics.is_empty());
        assert_eq!(mock.get_requests()[0].query_param("brand_ids").as_deref(), Some("4"));
    }
}
