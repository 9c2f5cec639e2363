use serde::{Deserialize, Serialize};

/// A HAL link: `{"href": "/api/v2/topics/1", "class": "topic"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
    #[serde(default)]
    pub class: Option<String>,
}

impl Link {
    /// Numeric id at the end of the href, e.g. `1` for `/api/v2/topics/1`.
    pub fn trailing_id(&self) -> Option<u64> {
        self.href
            .split('?')
            .next()?
            .trim_end_matches('/')
            .rsplit('/')
            .next()?
            .parse()
            .ok()
    }
}

/// The `_links` object of a resource or page envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceLinks {
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<Link>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<Link>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous: Option<Link>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<Link>,
}

impl ResourceLinks {
    /// Id parsed from the `self` link.
    pub fn self_id(&self) -> Option<u64> {
        self.self_link.as_ref().and_then(Link::trailing_id)
    }
}
