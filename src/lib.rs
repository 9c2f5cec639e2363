//! Desk SDK - client core for an embedded help-desk support center
//!
//! Browse knowledge-base topics and articles, search them, and submit
//! "contact us" cases against a help-desk REST API. UI toolkits sit on top of
//! the controllers in [`state`] and render what they expose.
//!
//! ```ignore
//! use desk_sdk::{Desk, DeskConfig, ListTexts};
//!
//! let desk = Desk::new(DeskConfig::from_env()?);
//! let mut articles = desk.article_list(ListTexts::new("No articles", "Failed to load"));
//! articles.load_articles(0, 0);
//! articles.settle().await;
//! ```

pub mod adapters;
pub mod api;
pub mod cli;
pub mod config;
pub mod desk;
pub mod error;
pub mod locale;
pub mod messages;
pub mod models;
pub mod providers;
pub mod state;
pub mod traits;

pub use config::{BrandOverrides, ContactUsConfig, DeskConfig};
pub use desk::Desk;
pub use error::{DeskError, DeskResult, ErrorResponse};
pub use state::{
    ArticleListController, ContactUsForm, FormField, ListQuery, ListTexts, TopicListController,
};
