use log::debug;

use crate::error::RequestFailure;

/// Lifecycle of a single keyed request
#[derive(Debug, Clone, PartialEq)]
pub enum QueryStatus<T> {
    /// No key, nothing requested
    Idle,
    Loading,
    Success(T),
    Failure(RequestFailure),
}

/// A request keyed by the committed value that triggered it.
///
/// The query is inert while it has no key. Outcomes are applied only when
/// they were issued for the current key, so a late response for an
/// abandoned key never replaces the current state.
#[derive(Debug, Clone)]
pub struct Query<K, T> {
    key: Option<K>,
    status: QueryStatus<T>,
}

impl<K, T> Default for Query<K, T> {
    fn default() -> Self {
        Self {
            key: None,
            status: QueryStatus::Idle,
        }
    }
}

impl<K: Clone + PartialEq + std::fmt::Debug, T> Query<K, T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the query at `key`.
    ///
    /// Returns the key to fetch when a request has to be issued. An unchanged
    /// key is not fetched again unless its last attempt failed.
    pub fn set_key(&mut self, key: Option<K>) -> Option<K> {
        if self.key == key && !matches!(self.status, QueryStatus::Failure(_)) {
            return None;
        }

        self.key = key.clone();
        match key {
            Some(key) => {
                self.status = QueryStatus::Loading;
                Some(key)
            }
            None => {
                self.status = QueryStatus::Idle;
                None
            }
        }
    }

    /// Apply the outcome of a request issued for `key`.
    ///
    /// Returns false (and changes nothing) when the outcome is stale.
    pub fn resolve(&mut self, key: &K, result: Result<T, RequestFailure>) -> bool {
        if self.key.as_ref() != Some(key) || !self.is_loading() {
            debug!(
                "Dropping response for {:?}; current key is {:?}",
                key, self.key
            );
            return false;
        }

        self.status = match result {
            Ok(data) => QueryStatus::Success(data),
            Err(failure) => QueryStatus::Failure(failure),
        };
        true
    }

    pub fn key(&self) -> Option<&K> {
        self.key.as_ref()
    }

    pub fn status(&self) -> &QueryStatus<T> {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, QueryStatus::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match &self.status {
            QueryStatus::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&RequestFailure> {
        match &self.status {
            QueryStatus::Failure(failure) => Some(failure),
            _ => None,
        }
    }
}
