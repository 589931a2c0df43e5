//! Query-string parameters for list endpoints.

use std::fmt::Write as _;

/// Ordered query parameters. Empty values are dropped when built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, key: &str, value: impl ToString) -> Self {
        self.push(key, value);
        self
    }

    #[must_use]
    pub fn with_opt(mut self, key: &str, value: Option<impl ToString>) -> Self {
        if let Some(value) = value {
            self.push(key, value);
        }
        self
    }

    pub fn push(&mut self, key: &str, value: impl ToString) {
        let value = value.to_string();
        if !value.trim().is_empty() {
            self.pairs.push((key.to_string(), value));
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    #[must_use]
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Percent-encoded `?k=v&...`, or an empty string without parameters.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut out = String::new();
        for (index, (key, value)) in self.pairs.iter().enumerate() {
            out.push(if index == 0 { '?' } else { '&' });
            let _ = write!(
                out,
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            );
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_params_render_nothing() {
        assert_eq!(QueryParams::new().to_query_string(), "");
    }

    #[test]
    fn values_are_percent_encoded_in_order() {
        let params = QueryParams::new()
            .with("search", "plan de mejora")
            .with("page", 2)
            .with_opt("action", Some("approve"))
            .with_opt("entity", None::<&str>);
        assert_eq!(
            params.to_query_string(),
            "?search=plan%20de%20mejora&page=2&action=approve"
        );
    }

    #[test]
    fn blank_values_are_dropped() {
        let params = QueryParams::new().with("search", "  ").with("limit", 10);
        assert_eq!(params.pairs().len(), 1);
        assert_eq!(params.to_query_string(), "?limit=10");
    }
}
