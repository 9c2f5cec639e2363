//! Async driver around [`ListState`].
//!
//! Requests run on spawned tokio tasks and report back over an unbounded
//! channel as [`ListMessage`]s. Only the task owning the controller mutates
//! state, via [`ListController::handle_message`].

use tokio::sync::mpsc;
use tracing::{info, warn};

use super::list::{ListPhase, ListQuery, ListState, ListTexts, ListViewState, PageRequest};
use crate::error::DeskResult;
use crate::messages::ListMessage;
use crate::traits::PageSource;

/// Receives the item behind a selected row.
pub trait SelectionListener<T>: Send {
    fn on_item_selected(&mut self, position: usize, item: &T);
}

impl<T, F> SelectionListener<T> for F
where
    F: FnMut(usize, &T) + Send,
{
    fn on_item_selected(&mut self, position: usize, item: &T) {
        self(position, item)
    }
}

/// Owns a list's state, its pending requests and its selection listener.
///
/// Methods that start requests spawn tokio tasks and must be called from
/// within a runtime.
pub struct ListController<T, S> {
    source: S,
    state: ListState<T>,
    message_tx: mpsc::UnboundedSender<ListMessage<T>>,
    message_rx: mpsc::UnboundedReceiver<ListMessage<T>>,
    listener: Option<Box<dyn SelectionListener<T>>>,
}

impl<T, S> ListController<T, S>
where
    T: Clone + Send + 'static,
    S: PageSource<T>,
{
    pub fn new(source: S, texts: ListTexts) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            source,
            state: ListState::new(texts),
            message_tx,
            message_rx,
            listener: None,
        }
    }

    /// Use a custom scroll look-ahead (default 10 items).
    pub fn with_look_ahead(mut self, look_ahead: usize) -> Self {
        self.state = ListState::new(self.state.texts().clone()).with_look_ahead(look_ahead);
        self
    }

    pub fn state(&self) -> &ListState<T> {
        &self.state
    }

    pub fn set_texts(&mut self, texts: ListTexts) {
        self.state.set_texts(texts);
    }

    /// Start a fresh load cycle for `query`.
    pub(crate) fn start(&mut self, query: ListQuery) {
        info!("Loading page 1 (search: {})", query.is_search());
        let request = self.state.begin(query);
        self.spawn_request(request);
    }

    /// Feed a scroll position; returns `true` if a next-page request started.
    pub fn on_scroll(&mut self, first_visible: usize, visible: usize) -> bool {
        match self.state.on_scroll(first_visible, visible) {
            Some(request) => {
                self.spawn_request(request);
                true
            }
            None => false,
        }
    }

    /// Request the next page directly, without a scroll signal.
    pub fn load_next_page(&mut self) -> bool {
        match self.state.begin_next_page() {
            Some(request) => {
                self.spawn_request(request);
                true
            }
            None => false,
        }
    }

    fn spawn_request(&self, request: PageRequest) {
        let source = self.source.clone();
        let message_tx = self.message_tx.clone();
        let PageRequest {
            generation,
            page,
            query,
        } = request;

        tokio::spawn(async move {
            let result = source.fetch_page(&query, page).await;
            if let Err(error) = &result {
                warn!("Page {} failed: {}", page, error);
            }
            let _ = message_tx.send(ListMessage::from_result(generation, page, result));
        });
    }

    /// Apply one completion message. Returns `false` for stale responses.
    pub fn handle_message(&mut self, message: ListMessage<T>) -> bool {
        let applied = self.state.apply(message);
        if applied {
            match self.state.phase() {
                ListPhase::Loaded => info!(
                    "Showing {} items (page {}, more: {})",
                    self.state.items().len(),
                    self.state.current_page(),
                    self.state.has_next_page()
                ),
                ListPhase::Empty => info!("No items to show"),
                _ => {}
            }
        }
        applied
    }

    /// Wait for the next completion message and apply it.
    pub async fn process_next(&mut self) -> bool {
        match self.message_rx.recv().await {
            Some(message) => self.handle_message(message),
            None => false,
        }
    }

    /// Apply every message already delivered; returns how many were applied.
    pub fn process_pending(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(message) = self.message_rx.try_recv() {
            if self.handle_message(message) {
                applied += 1;
            }
        }
        applied
    }

    /// Process messages until no request is outstanding.
    pub async fn settle(&mut self) {
        while self.state.is_loading() {
            let Some(message) = self.message_rx.recv().await else {
                break;
            };
            self.handle_message(message);
        }
    }

    pub fn set_selection_listener(&mut self, listener: Box<dyn SelectionListener<T>>) {
        self.listener = Some(listener);
    }

    /// Resolve the row at `position` and hand it to the listener, once.
    /// Returns `false` if there is no such item or no listener.
    pub fn select(&mut self, position: usize) -> bool {
        let (Some(item), Some(listener)) = (self.state.item(position), self.listener.as_mut()) else {
            return false;
        };
        listener.on_item_selected(position, item);
        true
    }

    /// Drop the selection listener.
    pub fn detach(&mut self) {
        self.listener = None;
    }

    pub fn save(&self) -> ListViewState<T> {
        self.state.save()
    }

    /// Restore saved state. No request is issued; responses to requests made
    /// before the restore are ignored.
    pub fn restore(&mut self, saved: ListViewState<T>) {
        self.state.restore(saved);
    }
}

impl<T, S> ListController<T, S>
where
    T: Clone + Send + serde::Serialize + serde::de::DeserializeOwned + 'static,
    S: PageSource<T>,
{
    pub fn save_json(&self) -> DeskResult<String> {
        Ok(self.save().to_json()?)
    }

    pub fn restore_json(&mut self, json: &str) -> DeskResult<()> {
        self.restore(ListViewState::from_json(json)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorResponse;
    use crate::models::PageResult;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};
    use tokio::sync::Notify;

    /// Answers immediately, except topic 1 which waits for `gate`.
    #[derive(Clone, Default)]
    struct GatedSource {
        gate: Arc<Notify>,
        calls: Arc<Mutex<Vec<(ListQuery, u32)>>>,
        fail_page: Option<u32>,
    }

    #[async_trait]
    impl PageSource<String> for GatedSource {
        async fn fetch_page(
            &self,
            query: &ListQuery,
            page: u32,
        ) -> Result<PageResult<String>, ErrorResponse> {
            self.calls.lock().unwrap().push((query.clone(), page));
            if query.topic_id == 1 {
                self.gate.notified().await;
            }
            if self.fail_page == Some(page) {
                return Err(ErrorResponse::http(502, "Bad Gateway"));
            }
            let items = (0..25)
                .map(|i| format!("t{}-p{}-{}", query.topic_id, page, i))
                .collect();
            Ok(PageResult {
                items,
                page,
                has_more: page < 3,
            })
        }
    }

    fn controller(source: GatedSource) -> ListController<String, GatedSource> {
        ListController::new(source, ListTexts::new("Nothing here", "Failed"))
    }

    #[tokio::test]
    async fn test_superseded_load_is_discarded() {
        let source = GatedSource::default();
        let mut list = controller(source.clone());

        list.start(ListQuery::topic(1, 0));
        list.start(ListQuery::topic(2, 0));
        list.settle().await;
        assert_eq!(list.state().items()[0], "t2-p1-0");

        source.gate.notify_one();
        assert!(!list.process_next().await);
        assert_eq!(list.state().items()[0], "t2-p1-0");
        assert_eq!(list.state().items().len(), 25);
    }

    #[tokio::test]
    async fn test_scroll_pages_through() {
        let source = GatedSource::default();
        let mut list = controller(source.clone());

        list.start(ListQuery::topic(0, 0));
        list.settle().await;
        assert!(!list.on_scroll(0, 10));
        assert!(list.on_scroll(10, 10));
        // same threshold again while page two is pending
        assert!(!list.on_scroll(12, 10));
        list.settle().await;
        assert_eq!(list.state().items().len(), 50);
        assert_eq!(list.state().current_page(), 2);

        assert!(list.load_next_page());
        list.settle().await;
        assert_eq!(list.state().items().len(), 75);
        assert!(!list.state().has_next_page());
        assert!(!list.load_next_page());
        assert_eq!(source.calls.lock().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_failed_second_page_keeps_first() {
        let source = GatedSource {
            fail_page: Some(2),
            ..Default::default()
        };
        let mut list = controller(source);

        list.start(ListQuery::topic(0, 0));
        list.settle().await;
        assert!(list.load_next_page());
        list.settle().await;

        assert!(list.state().has_error());
        assert_eq!(list.state().items().len(), 25);
        assert_eq!(list.state().empty_view().unwrap().text, "Failed");
    }

    #[tokio::test]
    async fn test_select_and_detach() {
        let mut list = controller(GatedSource::default());
        list.start(ListQuery::topic(0, 0));
        list.settle().await;

        let picked = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&picked);
        list.set_selection_listener(Box::new(move |position: usize, item: &String| {
            sink.lock().unwrap().push((position, item.clone()));
        }));

        assert!(list.select(3));
        assert!(!list.select(99));
        assert_eq!(*picked.lock().unwrap(), vec![(3, "t0-p1-3".to_string())]);

        list.detach();
        assert!(!list.select(3));
        assert_eq!(picked.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_restore_json_issues_no_request() {
        let source = GatedSource::default();
        let mut list = controller(source.clone());
        list.start(ListQuery::search(0, 0, "printer").unwrap());
        list.settle().await;
        let json = list.save_json().unwrap();

        let fresh_source = GatedSource::default();
        let mut restored = controller(fresh_source.clone());
        restored.restore_json(&json).unwrap();

        assert_eq!(restored.state().items(), list.state().items());
        assert!(restored.state().is_list_visible());
        assert_eq!(restored.state().query().query(), Some("printer"));
        assert_eq!(restored.process_pending(), 0);
        assert!(fresh_source.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_restore_json_rejects_garbage() {
        let mut list = controller(GatedSource::default());
        assert!(list.restore_json("{not json").is_err());
    }
}
