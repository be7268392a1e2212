//! Configuration-source fault types.
//!
//! [`SourceError`] covers everything that can go wrong while consulting a
//! configuration source. Every variant is absorbed at its adapter: logged
//! and converted into absence so the resolver falls through to the next
//! source. Nothing here ever reaches a client.

/// A fault raised while consulting one configuration source.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Transport-level failure talking to the remote KV store.
    #[error("kv transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Remote KV store answered with an unexpected status code.
    #[error("kv store returned status {0}")]
    UnexpectedStatus(u16),

    /// A stored value or environment blob was not valid JSON.
    #[error("malformed configuration JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),

    /// The local preset file could not be read.
    #[error("preset file error: {0}")]
    PresetFile(#[from] std::io::Error),
}
