//! Hostname normalization into configuration lookup keys.
//!
//! Every incoming hostname yields two keys: the dotted lowercase form used
//! verbatim against the KV store, and an environment-variable-safe prefix
//! used to build per-domain override variable names.

/// Lookup keys derived from a request hostname.
///
/// Construction never fails; any string is accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostKey {
    canonical: String,
    env_prefix: String,
}

impl HostKey {
    /// Normalizes a raw hostname.
    ///
    /// The canonical form is trimmed and lowercased. The environment prefix
    /// replaces every `.` and `-` with `_` and uppercases the result, so
    /// `cdn-farm.io` becomes `CDN_FARM_IO`.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        let canonical = raw.trim().to_ascii_lowercase();
        let env_prefix = canonical
            .chars()
            .map(|c| match c {
                '.' | '-' => '_',
                other => other.to_ascii_uppercase(),
            })
            .collect();
        Self {
            canonical,
            env_prefix,
        }
    }

    /// Dotted lowercase form, the exact KV lookup key.
    #[must_use]
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    /// Environment-variable-safe uppercase prefix.
    #[must_use]
    pub fn env_prefix(&self) -> &str {
        &self.env_prefix
    }

    /// Full per-domain environment variable name for a field suffix,
    /// e.g. `CDN_FARM_IO_ACCENT_COLOR`.
    #[must_use]
    pub fn env_key(&self, suffix: &str) -> String {
        format!("{}_{suffix}", self.env_prefix)
    }
}
