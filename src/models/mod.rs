//! API resource models.
//!
//! The help-desk API returns HAL-style JSON: resources carry their identity in
//! `_links.self.href` and lists come wrapped in a [`Page`] envelope.

mod article;
mod case;
mod link;
mod mailbox;
mod page;
mod topic;

pub use article::Article;
pub use case::{Case, CaseMessage, CreateCaseRequest, MessageDirection, NewCase, EMAIL_CASE_TYPE};
pub use link::{Link, ResourceLinks};
pub use mailbox::Mailbox;
pub use page::{Embedded, Page, PageResult};
pub use topic::Topic;

use serde::{Deserialize, Deserializer};

/// Deserialize an id sent either as a JSON number or a numeric string.
/// Missing, null, or non-numeric values become `None`.
pub(crate) fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(u64),
        Text(String),
    }

    Ok(match Option::<RawId>::deserialize(deserializer)? {
        Some(RawId::Number(n)) => Some(n),
        Some(RawId::Text(s)) => s.trim().parse().ok(),
        None => None,
    })
}

/// Deserialize nullable strings as empty string.
/// Handles both missing fields and explicit null values.
pub(crate) fn deserialize_nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(|opt| opt.unwrap_or_default())
}

/// Deserialize a field whose `null` means the same as its absence.
pub(crate) fn deserialize_nullable_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(|opt| opt.unwrap_or_default())
}
