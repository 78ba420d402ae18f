//! Paging state and link query parameters.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Ordered query-string parameters.
///
/// Names are unique; inserting an existing name replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    /// Creates an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a parameter and returns the set.
    pub fn with(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.insert(name, value);
        self
    }

    /// Sets a parameter, keeping its original position if already present.
    pub fn insert(&mut self, name: impl Into<String>, value: impl ToString) {
        let name = name.into();
        let value = value.to_string();
        match self.0.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.0.push((name, value)),
        }
    }

    /// Value of a parameter.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    /// Whether a parameter is set.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Parameters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no parameters are set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Left-biased union: every parameter of `self`, then the parameters of
    /// `other` whose names `self` does not already set.
    pub fn union(&self, other: &QueryParams) -> QueryParams {
        let mut merged = self.clone();
        for (name, value) in other.iter() {
            if !merged.contains(name) {
                merged.0.push((name.to_string(), value.to_string()));
            }
        }
        merged
    }

    /// `limit` and `offset` followed by the caller's extra parameters.
    ///
    /// Paging values always win over same-named extras.
    pub fn paged(limit: u64, offset: u64, extra: &QueryParams) -> QueryParams {
        QueryParams::new()
            .with("limit", limit)
            .with("offset", offset)
            .union(extra)
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = QueryParams::new();
        for (name, value) in iter {
            params.insert(name, value);
        }
        params
    }
}

/// Current position in a paged result, used only to compute link targets.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Builder)]
#[builder(setter(into))]
pub struct PagingState {
    /// Rows per page
    limit: u64,
    /// Index of the first row on this page
    #[builder(default)]
    offset: u64,
    /// Parameters carried across page and size changes, e.g. active filters
    #[builder(default)]
    extra_query: QueryParams,
    /// Whether another page follows this one
    #[builder(default = "true")]
    has_next: bool,
}

impl PagingState {
    /// Creates paging state.
    pub fn new(limit: u64, offset: u64, extra_query: QueryParams, has_next: bool) -> Self {
        Self {
            limit,
            offset,
            extra_query,
            has_next,
        }
    }

    /// Create a new builder for paging state.
    pub fn builder() -> PagingStateBuilder {
        PagingStateBuilder::default()
    }

    /// Offset of the previous page, never below zero.
    pub fn previous_offset(&self) -> u64 {
        self.offset.saturating_sub(self.limit)
    }

    /// Offset of the next page.
    pub fn next_offset(&self) -> u64 {
        self.offset.saturating_add(self.limit)
    }

    /// Whether this is the first page.
    pub fn is_first_page(&self) -> bool {
        self.offset == 0
    }
}
