use std::sync::Arc;

use tracing::debug;

use crate::api::{DeskClient, Query, INBOUND_MAILBOXES_PATH};
use crate::error::ErrorResponse;
use crate::models::{Mailbox, PageResult};

use super::{fetch_page, MAILBOXES_PER_PAGE};

/// Upper bound on pages walked by [`InboundMailboxProvider::find_enabled_address`].
pub const MAX_MAILBOX_PAGES: u32 = 50;

/// Inbound mailbox lookup, used to find a recipient when none is configured.
#[derive(Clone)]
pub struct InboundMailboxProvider {
    client: Arc<DeskClient>,
}

impl InboundMailboxProvider {
    pub fn new(client: Arc<DeskClient>) -> Self {
        Self { client }
    }

    /// One mailbox per page.
    pub async fn get_mailboxes(&self, page: u32) -> Result<PageResult<Mailbox>, ErrorResponse> {
        let query = Query::new()
            .push("per_page", MAILBOXES_PER_PAGE)
            .push("page", page);
        fetch_page(&self.client, INBOUND_MAILBOXES_PATH, &query).await
    }

    /// Address of the first enabled mailbox, walking pages until one is found
    /// or the server reports no more.
    pub async fn find_enabled_address(&self) -> Result<Option<String>, ErrorResponse> {
        for page in 1..=MAX_MAILBOX_PAGES {
            let result = self.get_mailboxes(page).await?;
            if let Some(address) = result.items.iter().find_map(Mailbox::usable_address) {
                debug!("Using inbound mailbox address from page {}", page);
                return Ok(Some(address.to_string()));
            }
            if !result.has_more {
                break;
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use serde_json::json;

    fn provider(mock: &MockHttpClient) -> InboundMailboxProvider {
        let client = DeskClient::new(Arc::new(mock.clone()), "https://desk.test", "t");
        InboundMailboxProvider::new(Arc::new(client))
    }

    fn mailbox_page(page: u32, email: &str, enabled: bool, next: bool) -> MockResponse {
        let next = if next { json!({"href": "/next"}) } else { serde_json::Value::Null };
        MockResponse::json(
            200,
            json!({"page": page, "_links": {"next": next},
                   "_embedded": {"entries": [{"email": email, "enabled": enabled}]}}),
        )
    }

    #[tokio::test]
    async fn test_get_mailboxes_uses_page_size_one() {
        let mock = MockHttpClient::new();
        mock.set_default_response(mailbox_page(3, "a@example.com", true, false));

        let result = provider(&mock).get_mailboxes(3).await.unwrap();
        assert_eq!(result.items.len(), 1);

        let request = &mock.get_requests()[0];
        assert_eq!(request.path(), "/api/v2/mailboxes/inbound");
        assert_eq!(request.query_param("per_page").as_deref(), Some("1"));
        assert_eq!(request.query_param("page").as_deref(), Some("3"));
    }

    #[tokio::test]
    async fn test_find_enabled_address_skips_disabled() {
        let mock = MockHttpClient::new();
        mock.push_response("https://desk.test", mailbox_page(1, "old@example.com", false, true));
        mock.push_response("https://desk.test", mailbox_page(2, "help@example.com", true, true));

        let address = provider(&mock).find_enabled_address().await.unwrap();
        assert_eq!(address.as_deref(), Some("help@example.com"));
        assert_eq!(mock.request_count(), 2);
    }

    #[tokio::test]
    async fn test_find_enabled_address_none() {
        let mock = MockHttpClient::new();
        mock.set_default_response(mailbox_page(1, "off@example.com", false, false));

        assert_eq!(provider(&mock).find_enabled_address().await.unwrap(), None);
        assert_eq!(mock.request_count(), 1);
    }
}
