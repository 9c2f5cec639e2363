use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{deserialize_nullable_string, deserialize_optional_id, ResourceLinks};

/// A named category grouping support-center articles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub position: Option<i64>,
    #[serde(default)]
    pub in_support_center: bool,
    #[serde(default)]
    pub allow_questions: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(rename = "_links", default)]
    pub links: ResourceLinks,
}

impl Topic {
    /// Topic id, falling back to the `self` link when the body omits `id`.
    pub fn resource_id(&self) -> Option<u64> {
        self.id.or_else(|| self.links.self_id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_from_api_json() {
        let json = r#"{
            "name": "Getting Started",
            "description": null,
            "position": 1,
            "allow_questions": true,
            "in_support_center": true,
            "created_at": "2013-10-21T18:02:10Z",
            "updated_at": "2013-11-02T08:22:55Z",
            "_links": {
                "self": {"href": "/api/v2/topics/611", "class": "topic"},
                "articles": {"href": "/api/v2/topics/611/articles", "class": "article"}
            }
        }"#;
        let topic: Topic = serde_json::from_str(json).unwrap();
        assert_eq!(topic.name, "Getting Started");
        assert_eq!(topic.id, None);
        assert_eq!(topic.resource_id(), Some(611));
        assert!(topic.in_support_center);
        assert!(topic.created_at.is_some());
    }

    #[test]
    fn test_explicit_id_wins() {
        let topic: Topic = serde_json::from_str(
            r#"{"id": 3, "name": "FAQ", "_links": {"self": {"href": "/api/v2/topics/611"}}}"#,
        )
        .unwrap();
        assert_eq!(topic.resource_id(), Some(3));
    }
}
