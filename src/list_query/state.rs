//! Client-side state for a server-driven list view.
//!
//! `ListState` is the single source of truth for what a table is showing:
//! filters, page, page size and sort. Its [`ListState::query_string`] is the
//! value a caller watches to decide when to re-fetch.

use std::collections::BTreeMap;

use super::params::{DEFAULT_LIMIT, DEFAULT_PAGE};
use super::sort::{SortDirection, SortKey};

const RESERVED_KEYS: [&str; 4] = ["page", "limit", "sortBy", "sortDirection"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListState<K> {
    filters: BTreeMap<String, String>,
    page: i64,
    limit: i64,
    sort_by: K,
    sort_direction: SortDirection,
    initial_filters: BTreeMap<String, String>,
    initial_sort_by: K,
    initial_sort_direction: SortDirection,
}

impl<K: SortKey> ListState<K> {
    pub fn new<I, S>(initial_filters: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        let filters: BTreeMap<String, String> = initial_filters
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            filters: filters.clone(),
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            sort_by: K::DEFAULT,
            sort_direction: SortDirection::Asc,
            initial_filters: filters,
            initial_sort_by: K::DEFAULT,
            initial_sort_direction: SortDirection::Asc,
        }
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_page(mut self, page: i64) -> Self {
        self.page = page;
        self
    }

    /// Sets both the current and the initial sort, so `reset_filters` returns to it.
    pub fn with_sort(mut self, sort_by: K, direction: SortDirection) -> Self {
        self.sort_by = sort_by;
        self.sort_direction = direction;
        self.initial_sort_by = sort_by;
        self.initial_sort_direction = direction;
        self
    }

    pub fn filters(&self) -> &BTreeMap<String, String> {
        &self.filters
    }

    pub fn filter(&self, key: &str) -> Option<&str> {
        self.filters.get(key).map(String::as_str)
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    pub fn sort_by(&self) -> K {
        self.sort_by
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    pub fn set_filter_value(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.filters.insert(key.into(), value.into());
        self.page = 1;
    }

    pub fn reset_filters(&mut self) {
        self.filters = self.initial_filters.clone();
        self.page = 1;
        self.sort_by = self.initial_sort_by;
        self.sort_direction = self.initial_sort_direction;
    }

    pub fn on_sort_change(&mut self, sort_by: K, direction: SortDirection) {
        self.sort_by = sort_by;
        self.sort_direction = direction;
        self.page = 1;
    }

    pub fn set_page(&mut self, page: i64) {
        self.page = page;
    }

    pub fn set_limit(&mut self, limit: i64) {
        self.limit = limit;
    }

    pub fn has_active_filters(&self) -> bool {
        self.filters.values().any(|v| !v.trim().is_empty())
    }

    /// Canonical encoding: paging and sort first, then non-empty filters in key order.
    pub fn query_string(&self) -> String {
        let mut pairs: Vec<(&str, String)> = vec![
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
            ("sortBy", self.sort_by.as_key().to_string()),
            ("sortDirection", self.sort_direction.as_str().to_string()),
        ];
        pairs.extend(
            self.filters
                .iter()
                .filter(|(key, _)| !RESERVED_KEYS.contains(&key.as_str()))
                .map(|(key, value)| (key.as_str(), value.trim().to_string()))
                .filter(|(_, value)| !value.is_empty()),
        );

        // a Vec of string pairs always serializes
        serde_urlencoded::to_string(&pairs).unwrap_or_default()
    }
}
