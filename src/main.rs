//! vitrine server entry point.
//!
//! Starts the Axum HTTP server that renders one informational page per
//! requested hostname.

use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use vitrine::api;
use vitrine::app_state::AppState;
use vitrine::config::ServerConfig;
use vitrine::resolve::SiteResolver;
use vitrine::source::{EnvTable, HttpKvStore, KvStore, PresetStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = ServerConfig::from_env()?;
    tracing::info!(addr = %config.listen_addr, "starting vitrine");

    // Build the resolver and its source adapters
    let kv: Option<Arc<dyn KvStore>> = config
        .kv_base_url
        .as_ref()
        .map(|url| {
            Arc::new(HttpKvStore::new(url.clone(), config.kv_api_token.clone())) as Arc<dyn KvStore>
        });
    if kv.is_none() {
        tracing::info!("no KV endpoint configured; remote store disabled");
    }
    let presets = PresetStore::new(config.presets_file.clone(), config.dev_hostnames.clone());
    let resolver = Arc::new(SiteResolver::new(presets, kv));

    // Build application state
    let app_state = AppState {
        resolver,
        env: Arc::new(EnvTable::from_process()),
    };

    // Build router
    let app = api::build_router()
        .layer(TraceLayer::new_for_http())
        .with_state(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
