//! List and form state driven by the host UI.
//!
//! - [`ListState`]: the pagination state machine, synchronous and renderer-agnostic
//! - [`ListController`]: runs requests for a [`ListState`] on tokio tasks
//! - [`ArticleListController`], [`TopicListController`]: the two concrete lists
//! - [`ContactUsForm`]: contact-us validation and case assembly
//!
//! Rendering is the host's job. It reads the visibility flags
//! ([`ListState::is_list_visible`], [`ListState::is_progress_visible`],
//! [`ListState::empty_view`]) after each handled message.

mod article_list;
mod contact_form;
mod controller;
mod list;
mod scroll;
mod topic_list;

pub use article_list::ArticleListController;
pub use contact_form::{is_valid_email, ContactUsForm, FormField, FormValidityListener, Identity};
pub use controller::{ListController, SelectionListener};
pub use list::{
    EmptyView, ListMode, ListPhase, ListQuery, ListState, ListTexts, ListViewState, PageRequest,
};
pub use scroll::{ScrollTracker, DEFAULT_LOOK_AHEAD};
pub use topic_list::TopicListController;
