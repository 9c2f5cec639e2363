use super::controller::ListController;
use super::list::ListQuery;
use crate::models::Topic;
use crate::providers::TopicProvider;

/// Topic list. Topics arrive in one page, so scrolling never loads more.
pub type TopicListController = ListController<Topic, TopicProvider>;

impl ListController<Topic, TopicProvider> {
    /// Load every support-center topic for a brand (`0` = all brands).
    pub fn load_topics(&mut self, brand_id: u64) {
        self.start(ListQuery::topic(0, brand_id));
    }
}
