use std::fmt::Display;

/// Ordered query-string builder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, key: &str, value: impl Display) -> Self {
        self.pairs.push((key.to_string(), value.to_string()));
        self
    }

    /// Add an id filter unless `id` is `0`, which means "unscoped".
    pub fn push_scope(self, key: &str, id: u64) -> Self {
        if id == 0 {
            self
        } else {
            self.push(key, id)
        }
    }

    /// Append every pair of `other`.
    pub fn merge(mut self, other: Query) -> Self {
        self.pairs.extend(other.pairs);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Percent-encoded `a=1&b=2`.
    pub fn encode(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}
