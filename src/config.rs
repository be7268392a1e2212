//! Server configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`). This is the *service* configuration;
//! per-hostname page configuration is resolved separately per request.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Top-level server configuration.
///
/// Loaded once at startup via [`ServerConfig::from_env`].
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:8788`).
    pub listen_addr: SocketAddr,

    /// Base URL of the remote KV namespace; `None` disables the adapter.
    pub kv_base_url: Option<String>,

    /// Bearer token sent with KV requests.
    pub kv_api_token: Option<String>,

    /// Path of the local developer preset file.
    pub presets_file: PathBuf,

    /// Hostnames for which the local preset store is active.
    pub dev_hostnames: Vec<String>,
}

impl ServerConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to sensible defaults when a variable is not set.
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN_ADDR` is set but cannot be parsed as
    /// a [`SocketAddr`].
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let listen_addr: SocketAddr = std::env::var("LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8788".to_string())
            .parse()?;

        let kv_base_url = std::env::var("KV_BASE_URL").ok().filter(|v| !v.is_empty());
        let kv_api_token = std::env::var("KV_API_TOKEN").ok().filter(|v| !v.is_empty());

        let presets_file = std::env::var("PRESETS_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("presets.json"));

        let dev_hostnames = std::env::var("DEV_HOSTNAMES")
            .unwrap_or_else(|_| "localhost,127.0.0.1".to_string())
            .split(',')
            .map(|h| h.trim().to_ascii_lowercase())
            .filter(|h| !h.is_empty())
            .collect();

        Ok(Self {
            listen_addr,
            kv_base_url,
            kv_api_token,
            presets_file,
            dev_hostnames,
        })
    }
}
