use tracing::warn;

use super::controller::ListController;
use super::list::ListQuery;
use crate::models::Article;
use crate::providers::ArticleProvider;

/// Article list with topic-browse and search modes.
pub type ArticleListController = ListController<Article, ArticleProvider>;

impl ListController<Article, ArticleProvider> {
    /// Browse articles of a topic (`0` = all topics), restarting at page one.
    pub fn load_articles(&mut self, topic_id: u64, brand_id: u64) {
        self.start(ListQuery::topic(topic_id, brand_id));
    }

    /// Search articles, restarting at page one. A blank query is ignored and
    /// returns `false`.
    pub fn search_articles(&mut self, topic_id: u64, brand_id: u64, query: &str) -> bool {
        match ListQuery::search(topic_id, brand_id, query) {
            Some(query) => {
                self.start(query);
                true
            }
            None => {
                warn!("Ignoring blank article search");
                false
            }
        }
    }
}
