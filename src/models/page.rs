use serde::{Deserialize, Serialize};

use super::deserialize_nullable_default;
use super::link::ResourceLinks;

/// Paginated list envelope returned by every list endpoint.
///
/// ```json
/// {"total_entries": 51, "page": 1,
///  "_links": {"next": {"href": "/api/v2/articles?page=2", "class": "page"}},
///  "_embedded": {"entries": [ ... ]}}
/// ```
///
/// Missing and `null` fields are read as empty.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Page<T> {
    #[serde(default)]
    pub total_entries: Option<u64>,
    #[serde(default, deserialize_with = "deserialize_nullable_default")]
    pub page: u32,
    #[serde(rename = "_links", default, deserialize_with = "deserialize_nullable_default")]
    pub links: ResourceLinks,
    #[serde(rename = "_embedded", default, deserialize_with = "deserialize_nullable_default")]
    pub embedded: Embedded<T>,
}

/// The `_embedded` object of a [`Page`].
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Embedded<T> {
    #[serde(default, deserialize_with = "deserialize_nullable_default")]
    pub entries: Vec<T>,
}

impl<T> Default for Embedded<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T> Page<T> {
    /// Whether the server advertises a next page.
    pub fn has_more(&self) -> bool {
        self.links.next.is_some()
    }

    /// Flatten the envelope into the shape list controllers consume.
    pub fn into_result(self) -> PageResult<T> {
        let has_more = self.has_more();
        PageResult {
            items: self.embedded.entries,
            page: self.page,
            has_more,
        }
    }
}

/// One page of results, produced exactly once per request.
///
/// `page` starts at 1; 0 only appears for the soft-empty fallback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub has_more: bool,
}

impl<T> PageResult<T> {
    /// Result used when a successful response had no body.
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            page: 0,
            has_more: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Deserialize)]
    struct Entry {
        name: String,
    }

    #[test]
    fn test_page_with_next_link() {
        let json = r#"{
            "total_entries": 30, "page": 1,
            "_links": {"self": {"href": "/api/v2/topics?page=1"}, "next": {"href": "/api/v2/topics?page=2"}},
            "_embedded": {"entries": [{"name": "Billing"}, {"name": "Shipping"}]}
        }"#;
        let page: Page<Entry> = serde_json::from_str(json).unwrap();
        assert!(page.has_more());

        let result = page.into_result();
        assert_eq!(result.page, 1);
        assert!(result.has_more);
        assert_eq!(result.items.len(), 2);
        assert_eq!(result.items[1].name, "Shipping");
    }

    #[test]
    fn test_last_page_has_null_next() {
        let json = r#"{"page": 3, "_links": {"next": null}, "_embedded": {"entries": []}}"#;
        let result = serde_json::from_str::<Page<Entry>>(json).unwrap().into_result();
        assert_eq!(result.page, 3);
        assert!(!result.has_more);
        assert!(result.items.is_empty());
    }

    #[test]
    fn test_null_fields_read_as_empty() {
        let json = r#"{"total_entries": null, "page": null, "_links": null, "_embedded": null}"#;
        let result = serde_json::from_str::<Page<Entry>>(json).unwrap().into_result();
        assert_eq!(result, PageResult::empty());

        let json = r#"{"page": 2, "_embedded": {"entries": null}}"#;
        let result = serde_json::from_str::<Page<Entry>>(json).unwrap().into_result();
        assert_eq!(result.page, 2);
        assert!(result.items.is_empty());
    }

    #[test]
    fn test_envelope_without_embedded() {
        let result = serde_json::from_str::<Page<Entry>>(r#"{"page": 1}"#)
            .unwrap()
            .into_result();
        assert!(result.items.is_empty());
        assert!(!result.has_more);
    }
}
