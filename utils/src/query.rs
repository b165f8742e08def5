//! Query-string building for list endpoints.

use std::fmt::Display;

/// Ordered set of query parameters.
///
/// Parameters whose value is `None` or an empty string are skipped, so filter
/// structs can be passed through without checking each field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryString {
    pairs: Vec<(String, String)>,
}

impl QueryString {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `key=value`, skipping empty values.
    pub fn push(mut self, key: &str, value: impl Display) -> Self {
        let value = value.to_string();
        if !value.is_empty() {
            self.pairs.push((key.to_owned(), value));
        }
        self
    }

    /// Adds `key=value` when `value` is present and non-empty.
    pub fn push_opt<V: Display>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.push(key, value),
            None => self,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Renders `""` when empty, otherwise `"?a=1&b=2"` with percent-encoded
    /// keys and values.
    pub fn to_query(&self) -> String {
        if self.pairs.is_empty() {
            return String::new();
        }
        let body = self
            .pairs
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        format!("?{body}")
    }

    /// Appends the query to `url`, joining with `&` if `url` already has one.
    pub fn append_to(&self, url: &str) -> String {
        let query = self.to_query();
        if query.is_empty() {
            return url.to_owned();
        }
        if url.contains('?') {
            format!("{url}&{}", &query[1..])
        } else {
            format!("{url}{query}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_renders_nothing() {
        let query = QueryString::new()
            .push_opt::<&str>("status", None)
            .push("search", "");
        assert!(query.is_empty());
        assert_eq!(query.to_query(), "");
        assert_eq!(query.append_to("/api/customers"), "/api/customers");
    }

    #[test]
    fn test_pairs_keep_insertion_order() {
        let query = QueryString::new()
            .push("status", "active")
            .push_opt("region_id", Some(3));
        assert_eq!(query.to_query(), "?status=active&region_id=3");
    }

    #[test]
    fn test_values_are_encoded() {
        let query = QueryString::new().push("q", "Budi & Sons");
        assert_eq!(query.to_query(), "?q=Budi%20%26%20Sons");
    }

    #[test]
    fn test_append_to_existing_query() {
        let query = QueryString::new().push("page", 2);
        assert_eq!(query.append_to("/api/x?a=1"), "/api/x?a=1&page=2");
    }
}
