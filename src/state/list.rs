//! Pagination state machine shared by the article and topic lists.
//!
//! ```text
//! Idle ─begin─> Loading(1) ─┬─> Loaded ─scroll─> LoadingMore(n+1) ─┬─> Loaded
//!                           ├─> Empty                              └─> Error
//!                           └─> Error
//! ```
//!
//! `Empty` and `Error` stay until the next [`ListState::begin`]. All methods
//! are synchronous; controllers feed results in through [`ListState::apply`].

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::scroll::ScrollTracker;
use crate::error::ErrorResponse;
use crate::messages::ListMessage;
use crate::models::PageResult;

/// What a list is showing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum ListMode {
    /// Browse a topic's articles (or every topic).
    Topic,
    /// Free-text search results.
    Search { query: String },
}

/// Parameters of one load cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    #[serde(flatten)]
    pub mode: ListMode,
    pub topic_id: u64,
    pub brand_id: u64,
    /// Page most recently requested.
    pub page: u32,
}

impl ListQuery {
    pub fn topic(topic_id: u64, brand_id: u64) -> Self {
        Self {
            mode: ListMode::Topic,
            topic_id,
            brand_id,
            page: 0,
        }
    }

    /// A search query; `None` if `query` is blank.
    pub fn search(topic_id: u64, brand_id: u64, query: impl Into<String>) -> Option<Self> {
        let query = query.into();
        let query = query.trim();
        if query.is_empty() {
            return None;
        }
        Some(Self {
            mode: ListMode::Search {
                query: query.to_string(),
            },
            topic_id,
            brand_id,
            page: 0,
        })
    }

    pub fn query(&self) -> Option<&str> {
        match &self.mode {
            ListMode::Topic => None,
            ListMode::Search { query } => Some(query),
        }
    }

    pub fn is_search(&self) -> bool {
        matches!(self.mode, ListMode::Search { .. })
    }
}

impl Default for ListQuery {
    fn default() -> Self {
        Self::topic(0, 0)
    }
}

/// Lifecycle phase of a [`ListState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListPhase {
    Idle,
    Loading,
    LoadingMore,
    Loaded,
    Empty,
    Error,
}

/// Texts shown in the empty-state view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListTexts {
    pub empty_text: String,
    pub error_text: String,
    /// Used instead of `error_text` when no response was received.
    pub network_error_text: Option<String>,
}

impl Default for ListTexts {
    fn default() -> Self {
        Self {
            empty_text: "No results".to_string(),
            error_text: "Unable to load. Please try again later.".to_string(),
            network_error_text: None,
        }
    }
}

impl ListTexts {
    pub fn new(empty_text: impl Into<String>, error_text: impl Into<String>) -> Self {
        Self {
            empty_text: empty_text.into(),
            error_text: error_text.into(),
            network_error_text: None,
        }
    }

    pub fn with_network_error_text(mut self, text: impl Into<String>) -> Self {
        self.network_error_text = Some(text.into());
        self
    }

    pub fn error_text_for(&self, error: &ErrorResponse) -> &str {
        match &self.network_error_text {
            Some(text) if error.is_network_error() => text,
            _ => &self.error_text,
        }
    }
}

/// The empty-state view: shown instead of the list when there is nothing
/// to show or the last request failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyView {
    pub text: String,
    pub is_error: bool,
}

/// Persisted form of a list, saved on teardown and handed back to
/// [`ListState::restore`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListViewState<T> {
    pub items: Vec<T>,
    pub current_page: u32,
    pub have_next_page: bool,
    pub have_error: bool,
    pub query: ListQuery,
}

impl<T: Serialize> ListViewState<T> {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl<T: serde::de::DeserializeOwned> ListViewState<T> {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// A request the owner must issue: fetch `page` of `query`, tagging the
/// response with `generation`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub generation: u64,
    pub page: u32,
    pub query: ListQuery,
}

/// Accumulated items plus pagination and visibility bookkeeping.
#[derive(Debug, Clone)]
pub struct ListState<T> {
    items: Vec<T>,
    query: ListQuery,
    current_page: u32,
    have_next_page: bool,
    have_error: bool,
    phase: ListPhase,
    generation: u64,
    in_flight: Option<u32>,
    texts: ListTexts,
    empty_view: Option<EmptyView>,
    scroll: ScrollTracker,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self::new(ListTexts::default())
    }
}

impl<T> ListState<T> {
    pub fn new(texts: ListTexts) -> Self {
        Self {
            items: Vec::new(),
            query: ListQuery::default(),
            current_page: 0,
            have_next_page: false,
            have_error: false,
            phase: ListPhase::Idle,
            generation: 0,
            in_flight: None,
            texts,
            empty_view: None,
            scroll: ScrollTracker::default(),
        }
    }

    /// Use a custom scroll look-ahead.
    pub fn with_look_ahead(mut self, look_ahead: usize) -> Self {
        self.scroll = ScrollTracker::new(look_ahead);
        self
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn item(&self, position: usize) -> Option<&T> {
        self.items.get(position)
    }

    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn has_next_page(&self) -> bool {
        self.have_next_page
    }

    pub fn has_error(&self) -> bool {
        self.have_error
    }

    pub fn phase(&self) -> ListPhase {
        self.phase
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn texts(&self) -> &ListTexts {
        &self.texts
    }

    pub fn set_texts(&mut self, texts: ListTexts) {
        self.texts = texts;
    }

    /// Whether a request is outstanding.
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, ListPhase::Loading | ListPhase::LoadingMore)
    }

    pub fn is_list_visible(&self) -> bool {
        !self.have_error && matches!(self.phase, ListPhase::Loaded | ListPhase::LoadingMore)
    }

    pub fn is_progress_visible(&self) -> bool {
        self.is_loading()
    }

    /// The empty-state view, if it should be shown.
    pub fn empty_view(&self) -> Option<&EmptyView> {
        self.empty_view.as_ref()
    }

    /// Start a fresh load cycle at page one. Anything in flight is superseded.
    pub fn begin(&mut self, query: ListQuery) -> PageRequest {
        self.generation += 1;
        self.items.clear();
        self.current_page = 0;
        self.have_next_page = false;
        self.have_error = false;
        self.empty_view = None;
        self.scroll.reset();
        self.phase = ListPhase::Loading;
        self.query = query;
        self.issue(1)
    }

    /// Request the next page if there is one and nothing is pending.
    pub fn begin_next_page(&mut self) -> Option<PageRequest> {
        if self.phase != ListPhase::Loaded
            || !self.have_next_page
            || self.have_error
            || self.in_flight.is_some()
        {
            return None;
        }
        self.phase = ListPhase::LoadingMore;
        Some(self.issue(self.current_page + 1))
    }

    /// Feed a scroll position; returns the next-page request when the list
    /// is within the look-ahead of its end.
    pub fn on_scroll(&mut self, first_visible: usize, visible: usize) -> Option<PageRequest> {
        if self.phase != ListPhase::Loaded || !self.have_next_page || self.in_flight.is_some() {
            return None;
        }
        if self.scroll.on_scroll(first_visible, visible, self.items.len()) {
            self.begin_next_page()
        } else {
            None
        }
    }

    fn issue(&mut self, page: u32) -> PageRequest {
        self.in_flight = Some(page);
        self.query.page = page;
        PageRequest {
            generation: self.generation,
            page,
            query: self.query.clone(),
        }
    }

    /// Apply a completion message. Returns `false` if it belonged to a
    /// superseded request and was dropped.
    pub fn apply(&mut self, message: ListMessage<T>) -> bool {
        let (generation, page) = (message.generation(), message.page());
        if generation != self.generation || self.in_flight != Some(page) {
            debug!(
                "Dropping stale response for page {} (generation {}, current {})",
                page, generation, self.generation
            );
            return false;
        }
        self.in_flight = None;

        match message {
            ListMessage::PageLoaded { page, result, .. } => self.complete_page(page, result),
            ListMessage::PageFailed { error, .. } => self.fail(&error),
        }
        true
    }

    /// The page completion path, shared by live responses and [`restore`].
    ///
    /// [`restore`]: ListState::restore
    fn complete_page(&mut self, requested_page: u32, result: PageResult<T>) {
        let first_page = requested_page <= 1;
        self.current_page = if result.page == 0 {
            requested_page
        } else {
            result.page
        };

        if first_page && result.items.is_empty() {
            self.items.clear();
            self.have_next_page = false;
            self.phase = ListPhase::Empty;
            self.empty_view = Some(EmptyView {
                text: self.texts.empty_text.clone(),
                is_error: false,
            });
            return;
        }

        if first_page {
            self.items = result.items;
        } else {
            self.items.extend(result.items);
            self.scroll.resume(self.items.len());
        }
        self.have_next_page = result.has_more;
        self.phase = ListPhase::Loaded;
        self.empty_view = None;
    }

    fn fail(&mut self, error: &ErrorResponse) {
        let text = self.texts.error_text_for(error).to_string();
        self.show_error(text);
    }

    fn show_error(&mut self, text: String) {
        self.have_error = true;
        self.phase = ListPhase::Error;
        self.empty_view = Some(EmptyView {
            text,
            is_error: true,
        });
    }

    /// Rebuild from a saved state without touching the network.
    ///
    /// An errored state redisplays the error view; a state with items replays
    /// the completion path; anything else comes back idle.
    pub fn restore(&mut self, saved: ListViewState<T>) {
        self.generation += 1;
        self.in_flight = None;
        self.items.clear();
        self.current_page = 0;
        self.have_next_page = false;
        self.have_error = false;
        self.empty_view = None;
        self.scroll.reset();
        self.query = saved.query;

        if saved.have_error {
            self.items = saved.items;
            self.current_page = saved.current_page;
            self.have_next_page = saved.have_next_page;
            let text = self.texts.error_text.clone();
            self.show_error(text);
        } else if !saved.items.is_empty() {
            let page = saved.current_page;
            self.complete_page(
                page,
                PageResult {
                    items: saved.items,
                    page,
                    has_more: saved.have_next_page,
                },
            );
        } else {
            self.phase = ListPhase::Idle;
        }
    }
}

impl<T: Clone> ListState<T> {
    /// Snapshot for persistence.
    pub fn save(&self) -> ListViewState<T> {
        ListViewState {
            items: self.items.clone(),
            current_page: self.current_page,
            have_next_page: self.have_next_page,
            have_error: self.have_error,
            query: self.query.clone(),
        }
    }
}
