//! Per-screen filter state.

use chrono::NaiveDate;
use mejora_client::QueryParams;

use crate::list::{DateRange, PredicateSet};

/// Ephemeral, screen-local filters.
///
/// Every effective change resets the page to zero and is expected to trigger a
/// fresh remote fetch (see [`crate::ListScreen::update_filters`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub search_text: String,
    /// `(field, value)` exact-match filters, e.g. `("entity", "plan")`.
    pub categories: Vec<(String, String)>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub page: i64,
    pub page_size: usize,
}

impl FilterState {
    #[must_use]
    pub const fn new(page_size: usize) -> Self {
        Self {
            search_text: String::new(),
            categories: Vec::new(),
            date_from: None,
            date_to: None,
            page: 0,
            page_size,
        }
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
        self.page = 0;
    }

    /// Set or replace a categorical filter; a blank value removes it.
    pub fn set_category(&mut self, field: &str, value: impl Into<String>) {
        let value = value.into();
        self.categories.retain(|(existing, _)| existing != field);
        if !value.trim().is_empty() {
            self.categories.push((field.to_string(), value));
        }
        self.page = 0;
    }

    pub fn set_date_range(&mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) {
        self.date_from = from;
        self.date_to = to;
        self.page = 0;
    }

    pub const fn set_page(&mut self, page: i64) {
        self.page = page;
    }

    /// Reset every filter; the page size is kept.
    pub fn clear(&mut self) {
        *self = Self::new(self.page_size);
    }

    #[must_use]
    pub fn category(&self, field: &str) -> Option<&str> {
        self.categories
            .iter()
            .find(|(existing, _)| existing == field)
            .map(|(_, value)| value.as_str())
    }

    /// Local predicates equivalent to the current filters.
    #[must_use]
    pub fn to_predicates(&self) -> PredicateSet {
        let range = DateRange {
            from: self.date_from,
            to: self.date_to,
        };
        PredicateSet {
            search_text: Some(self.search_text.clone()).filter(|s| !s.trim().is_empty()),
            categories: self.categories.clone(),
            date_range: (!range.is_open()).then_some(range),
        }
    }

    /// Server-side filters. Pagination stays local.
    #[must_use]
    pub fn to_query_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push("search", &self.search_text);
        for (field, value) in &self.categories {
            params.push(field, value);
        }
        if let Some(from) = self.date_from {
            params.push("date_from", from.format("%Y-%m-%d"));
        }
        if let Some(to) = self.date_to {
            params.push("date_to", to.format("%Y-%m-%d"));
        }
        params
    }
}
