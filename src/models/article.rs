use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{deserialize_nullable_string, deserialize_optional_id, ResourceLinks};

/// A single help-center content item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub subject: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub body: String,
    #[serde(default)]
    pub keywords: Option<String>,
    #[serde(default)]
    pub position: Option<i64>,
    #[serde(default)]
    pub in_support_center: bool,
    #[serde(default)]
    pub public_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(rename = "_links", default)]
    pub links: ResourceLinks,
}

impl Article {
    pub fn resource_id(&self) -> Option<u64> {
        self.id.or_else(|| self.links.self_id())
    }

    /// Id of the owning topic, if the article belongs to one.
    pub fn topic_id(&self) -> Option<u64> {
        self.links.topic.as_ref().and_then(|link| link.trailing_id())
    }
}
