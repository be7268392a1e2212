//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::resolve::SiteResolver;
use crate::source::EnvTable;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Configuration resolver invoked once per page request.
    pub resolver: Arc<SiteResolver>,
    /// Environment snapshot captured at startup.
    pub env: Arc<EnvTable>,
}
