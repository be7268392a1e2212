//! Remote key-value store adapter.
//!
//! The store is namespace-scoped and read-only from this service's point
//! of view; operators write records out-of-band. Keys are exact hostnames
//! plus the reserved [`DEFAULT_KEY`] consulted when no exact entry exists.
//! Every fault is logged and degrades to absence.

use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::domain::RawSiteRecord;
use crate::error::SourceError;

/// Reserved key consulted when no exact hostname entry exists.
pub const DEFAULT_KEY: &str = "_default";

/// Read-only, namespace-scoped key-value store.
#[async_trait]
pub trait KvStore: Send + Sync + std::fmt::Debug {
    /// Fetches the raw JSON value stored under `key`.
    ///
    /// Returns `Ok(None)` when the key is absent.
    ///
    /// # Errors
    ///
    /// Returns a [`SourceError`] on transport or protocol faults; callers
    /// are expected to treat any error as absence.
    async fn get(&self, key: &str) -> Result<Option<serde_json::Value>, SourceError>;
}

/// HTTP-backed store: `GET {base_url}/{key}` with an optional bearer token.
///
/// A 404 is absence; any non-success status is a fault. The response body
/// is expected to be the stored JSON value itself.
#[derive(Debug, Clone)]
pub struct HttpKvStore {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl HttpKvStore {
    /// Creates a store client for the given namespace endpoint.
    #[must_use]
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
            token,
        }
    }
}

#[async_trait]
impl KvStore for HttpKvStore {
    async fn get(&self, key: &str) -> Result<Option<serde_json::Value>, SourceError> {
        let url = format!("{}/{key}", self.base_url);
        let mut request = self.client.get(&url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        let response = request.send().await?;
        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => Ok(Some(response.json().await?)),
            status => Err(SourceError::UnexpectedStatus(status.as_u16())),
        }
    }
}

/// In-memory store used by tests and offline development.
#[derive(Debug, Clone, Default)]
pub struct MemoryKvStore {
    entries: HashMap<String, serde_json::Value>,
}

impl MemoryKvStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `key`, replacing any previous entry.
    pub fn insert(&mut self, key: impl Into<String>, value: serde_json::Value) {
        self.entries.insert(key.into(), value);
    }
}

#[async_trait]
impl KvStore for MemoryKvStore {
    async fn get(&self, key: &str) -> Result<Option<serde_json::Value>, SourceError> {
        Ok(self.entries.get(key).cloned())
    }
}

/// Looks up one key, absorbing faults and malformed records into absence.
///
/// This is the only call site through which the resolver touches the
/// store, so the no-error-escapes rule is enforced here.
pub async fn lookup(store: &dyn KvStore, key: &str) -> Option<RawSiteRecord> {
    match store.get(key).await {
        Ok(Some(value)) => match serde_json::from_value(value) {
            Ok(record) => Some(record),
            Err(err) => {
                tracing::warn!(key, %err, "ignoring malformed kv record");
                None
            }
        },
        Ok(None) => None,
        Err(err) => {
            tracing::warn!(key, %err, "kv lookup failed, falling through");
            None
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic, clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn memory_store_round_trips_a_record() {
        let mut store = MemoryKvStore::new();
        store.insert("cdn-farm.io", json!({"mode": "landing"}));

        let record = lookup(&store, "cdn-farm.io").await;
        assert_eq!(record.and_then(|r| r.mode).as_deref(), Some("landing"));
    }

    #[tokio::test]
    async fn absent_key_is_none() {
        let store = MemoryKvStore::new();
        assert!(lookup(&store, "missing.example").await.is_none());
    }

    #[tokio::test]
    async fn malformed_record_is_absence() {
        let mut store = MemoryKvStore::new();
        store.insert("bad.example", json!("not an object"));
        assert!(lookup(&store, "bad.example").await.is_none());
    }

    /// Store stub whose every lookup faults.
    #[derive(Debug)]
    struct FailingStore;

    #[async_trait]
    impl KvStore for FailingStore {
        async fn get(&self, _key: &str) -> Result<Option<serde_json::Value>, SourceError> {
            Err(SourceError::UnexpectedStatus(503))
        }
    }

    #[tokio::test]
    async fn store_fault_is_absence() {
        assert!(lookup(&FailingStore, "any.example").await.is_none());
    }
}
