//! Error context for enriched error information.

use chrono::{DateTime, Utc};

/// Context attached to a [`DeskError`](super::DeskError) for logging.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorContext {
    /// Operation that failed, e.g. `"get_articles"`.
    pub operation: String,

    /// Brand the request was scoped to, if any.
    pub brand_id: Option<u64>,

    /// Page requested, for paginated operations.
    pub page: Option<u32>,

    /// When the error occurred.
    pub timestamp: DateTime<Utc>,

    /// Component where the error originated.
    pub component: Option<String>,
}

impl ErrorContext {
    /// Create a new ErrorContext for an operation.
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            brand_id: None,
            page: None,
            timestamp: Utc::now(),
            component: None,
        }
    }

    /// Set the brand for this context.
    pub fn with_brand_id(mut self, brand_id: u64) -> Self {
        self.brand_id = Some(brand_id);
        self
    }

    /// Set the page for this context.
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Set the component for this context.
    pub fn with_component(mut self, component: impl Into<String>) -> Self {
        self.component = Some(component.into());
        self
    }

    /// Get a formatted context string suitable for logging.
    pub fn to_log_string(&self) -> String {
        let mut parts = vec![format!("operation={}", self.operation)];

        if let Some(brand_id) = self.brand_id {
            parts.push(format!("brand_id={}", brand_id));
        }
        if let Some(page) = self.page {
            parts.push(format!("page={}", page));
        }
        if let Some(ref component) = self.component {
            parts.push(format!("component={}", component));
        }
        parts.push(format!("timestamp={}", self.timestamp.to_rfc3339()));

        parts.join(" ")
    }
}

impl std::fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.operation)?;
        if let Some(brand_id) = self.brand_id {
            write!(f, " brand={}", brand_id)?;
        }
        if let Some(page) = self.page {
            write!(f, " page={}", page)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_builder_pattern() {
        let ctx = ErrorContext::new("get_articles")
            .with_brand_id(7)
            .with_page(2)
            .with_component("article_provider");

        assert_eq!(ctx.operation, "get_articles");
        assert_eq!(ctx.brand_id, Some(7));
        assert_eq!(ctx.page, Some(2));
        assert_eq!(ctx.component, Some("article_provider".to_string()));
    }

    #[test]
    fn test_context_display() {
        let ctx = ErrorContext::new("get_topics").with_brand_id(3);
        assert_eq!(ctx.to_string(), "[get_topics] brand=3");
    }

    #[test]
    fn test_log_string_contains_fields() {
        let log = ErrorContext::new("find_articles").with_page(4).to_log_string();
        assert!(log.contains("operation=find_articles"));
        assert!(log.contains("page=4"));
        assert!(log.contains("timestamp="));
    }
}
