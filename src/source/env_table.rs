//! Snapshot of the process environment used for configuration overrides.
//!
//! The table serves two contracts: a per-domain `<PREFIX>_CONFIG` variable
//! holding a whole JSON-encoded record, and flat scalar overrides
//! (`<PREFIX>_<FIELD>` / global `<FIELD>`) applied by the resolver.

use std::collections::HashMap;

use crate::domain::{HostKey, RawSiteRecord};
use crate::error::SourceError;

/// Immutable string-keyed view of the process environment.
///
/// Captured once at startup; tests build their own tables from explicit
/// pairs so resolution stays deterministic.
#[derive(Debug, Clone, Default)]
pub struct EnvTable {
    vars: HashMap<String, String>,
}

impl EnvTable {
    /// Captures the current process environment.
    #[must_use]
    pub fn from_process() -> Self {
        Self {
            vars: std::env::vars().collect(),
        }
    }

    /// Builds a table from explicit key/value pairs.
    #[must_use]
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Looks up a single variable.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Reads the `<PREFIX>_CONFIG` JSON blob for `host`.
    ///
    /// A parse failure is logged with the offending key and treated as
    /// absence; it never aborts resolution.
    #[must_use]
    pub fn config_blob(&self, host: &HostKey) -> Option<RawSiteRecord> {
        let key = host.env_key("CONFIG");
        let raw = self.get(&key)?;
        let parsed: Result<RawSiteRecord, SourceError> =
            serde_json::from_str(raw).map_err(SourceError::from);
        match parsed {
            Ok(record) => Some(record),
            Err(err) => {
                tracing::warn!(key, %err, "ignoring malformed env config blob");
                None
            }
        }
    }
}
