//! Order-stable query strings.
//!
//! Parameters are emitted in insertion order, so a fixed filter value always
//! produces the same request path.

use std::fmt::Display;

use url::form_urlencoded;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, key: &str, value: impl Display) -> Self {
        self.pairs.push((key.to_string(), value.to_string()));
        self
    }

    /// Appends `key=value` only when `value` is present.
    #[must_use]
    pub fn with_opt<V: Display>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.with(key, value),
            None => self,
        }
    }

    /// Appends one `key=value` pair per item.
    #[must_use]
    pub fn with_each<V: Display>(self, key: &str, values: impl IntoIterator<Item = V>) -> Self {
        values
            .into_iter()
            .fold(self, |query, value| query.with(key, value))
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Encodes as `a=1&b=2` (no leading `?`).
    pub fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .finish()
    }

    /// Returns `path` with the encoded query appended, if any.
    pub fn append_to(&self, path: &str) -> String {
        if self.is_empty() {
            return path.to_string();
        }
        let separator = if path.contains('?') { '&' } else { '?' };
        format!("{path}{separator}{}", self.encode())
    }
}

/// Filter types that render themselves as query parameters.
pub trait ToQuery {
    fn to_query(&self) -> QueryParams;
}
