//! Page fetching seam used by the list controllers.

use async_trait::async_trait;

use crate::error::ErrorResponse;
use crate::models::PageResult;
use crate::state::ListQuery;

/// Anything that can fetch one page of a [`ListQuery`].
///
/// Implemented by [`ArticleProvider`](crate::providers::ArticleProvider) and
/// [`TopicProvider`](crate::providers::TopicProvider). Tests can plug in
/// their own source to control timing.
#[async_trait]
pub trait PageSource<T>: Clone + Send + Sync + 'static {
    async fn fetch_page(&self, query: &ListQuery, page: u32) -> Result<PageResult<T>, ErrorResponse>;
}
