//! Local developer preset store.
//!
//! A JSON file of named presets consulted only when the request hostname
//! is on the development allow-list. The first preset is the default base
//! record; the full list feeds the dev-mode theme switcher. A missing or
//! malformed file is never fatal.

use std::path::PathBuf;

use crate::domain::{HostKey, NamedPreset};
use crate::error::SourceError;

/// Loader for the local preset file.
#[derive(Debug, Clone)]
pub struct PresetStore {
    path: PathBuf,
    dev_hosts: Vec<String>,
}

impl PresetStore {
    /// Creates a store reading `path`, active for the given hostnames.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, dev_hosts: Vec<String>) -> Self {
        Self {
            path: path.into(),
            dev_hosts,
        }
    }

    /// True when the hostname is on the development allow-list.
    #[must_use]
    pub fn applies_to(&self, host: &HostKey) -> bool {
        self.dev_hosts.iter().any(|h| h == host.canonical())
    }

    /// Loads the preset list.
    ///
    /// Read failures, parse failures, and an empty list all yield `None`
    /// so the resolver falls through to the next source.
    pub async fn load(&self) -> Option<Vec<NamedPreset>> {
        match self.read().await {
            Ok(presets) if presets.is_empty() => None,
            Ok(presets) => Some(presets),
            Err(SourceError::PresetFile(err)) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no local preset file");
                None
            }
            Err(err) => {
                tracing::warn!(path = %self.path.display(), %err, "ignoring local preset file");
                None
            }
        }
    }

    async fn read(&self) -> Result<Vec<NamedPreset>, SourceError> {
        let text = tokio::fs::read_to_string(&self.path).await?;
        Ok(serde_json::from_str(&text)?)
    }
}
