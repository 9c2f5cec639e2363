//! Stateless request builders over [`DeskClient`].
//!
//! Each operation issues exactly one HTTP request (except
//! [`InboundMailboxProvider::find_enabled_address`], which walks pages) and
//! resolves once with either a result or an [`ErrorResponse`]. Nothing is
//! retried or retained.

mod article;
mod case;
mod mailbox;
mod topic;

pub use article::ArticleProvider;
pub use case::CaseProvider;
pub use mailbox::{InboundMailboxProvider, MAX_MAILBOX_PAGES};
pub use topic::{TopicProvider, TOPICS_PER_PAGE};

use serde::de::DeserializeOwned;

use crate::api::{DeskClient, Query};
use crate::error::ErrorResponse;
use crate::models::{Page, PageResult};

/// Topic id meaning "articles from every topic".
pub const ALL_TOPICS: u64 = 0;
/// Brand id meaning "content from every brand".
pub const ALL_BRANDS: u64 = 0;
pub const ARTICLES_PER_PAGE: u32 = 25;
pub const MAILBOXES_PER_PAGE: u32 = 1;

/// Sort, visibility and language parameters shared by topic and article lists.
fn support_center_query(client: &DeskClient) -> Query {
    Query::new()
        .push("sort_field", "position")
        .push("sort_direction", "asc")
        .push("in_support_center", true)
        .push("locale", client.language())
}

/// Fetch one page envelope; an empty body becomes [`PageResult::empty`].
async fn fetch_page<T: DeserializeOwned>(
    client: &DeskClient,
    path: &str,
    query: &Query,
) -> Result<PageResult<T>, ErrorResponse> {
    Ok(client
        .get_json::<Page<T>>(path, query)
        .await?
        .map(Page::into_result)
        .unwrap_or_else(PageResult::empty))
}
