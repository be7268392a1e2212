//! Request handlers: the page endpoint and service health.

use axum::extract::{RawQuery, State};
use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE, HOST};
use axum::http::{HeaderMap, StatusCode, Uri};
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use serde::Serialize;

use crate::app_state::AppState;
use crate::domain::HostKey;
use crate::render;

/// Renders the informational page for the requested hostname.
///
/// This is the fallback route: every path serves the same page. The
/// hostname comes from the `Host` header, then the URI authority, then
/// `localhost`. Resolution cannot fail, so neither can this handler:
/// the query string is taken raw and parsed leniently rather than
/// through a typed extractor that could reject the request.
pub async fn page_handler(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
    uri: Uri,
) -> impl IntoResponse {
    let host = HostKey::new(request_host(&headers, &uri));
    let site = state
        .resolver
        .resolve(&host, &state.env, preset_index(query.as_deref()), Utc::now())
        .await;
    let mode = site.config.mode.as_str();
    tracing::debug!(host = %host.canonical(), mode, "rendered page");

    let html = render::render_page(&site);
    (
        [
            (CONTENT_TYPE, "text/html;charset=UTF-8".to_string()),
            (CACHE_CONTROL, "public, max-age=3600".to_string()),
        ],
        [
            ("x-resolved-host", host.canonical().to_string()),
            ("x-page-mode", mode.to_string()),
        ],
        html,
    )
}

/// Health check response.
#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    timestamp: String,
    version: String,
}

/// `GET /health` — Service health status.
pub async fn health_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}

/// First `preset` pair in the query string, when its value parses as an
/// index. Anything malformed — bad value, duplicated key, stray pairs —
/// is ignored; every request must receive a renderable page.
fn preset_index(query: Option<&str>) -> Option<usize> {
    query?
        .split('&')
        .find_map(|pair| pair.strip_prefix("preset="))
        .and_then(|value| value.parse().ok())
}

/// Hostname the request arrived under, without any port suffix.
fn request_host<'a>(headers: &'a HeaderMap, uri: &'a Uri) -> &'a str {
    headers
        .get(HOST)
        .and_then(|value| value.to_str().ok())
        .or_else(|| uri.host())
        .map_or("localhost", strip_port)
}

/// Drops a trailing `:port`, leaving IPv6 literals intact.
fn strip_port(host: &str) -> &str {
    match host.rsplit_once(':') {
        Some((name, port))
            if !name.contains(':') && !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()) =>
        {
            name
        }
        _ => host,
    }
}

#[cfg(test)]
#[allow(clippy::panic, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn preset_index_takes_first_well_formed_pair() {
        assert_eq!(preset_index(Some("preset=2")), Some(2));
        assert_eq!(preset_index(Some("preset=1&preset=2")), Some(1));
        assert_eq!(preset_index(Some("theme=dark&preset=3")), Some(3));
    }

    #[test]
    fn preset_index_ignores_malformed_input() {
        assert_eq!(preset_index(None), None);
        assert_eq!(preset_index(Some("")), None);
        assert_eq!(preset_index(Some("preset=abc")), None);
        assert_eq!(preset_index(Some("preset=")), None);
        assert_eq!(preset_index(Some("preset")), None);
    }

    #[test]
    fn strip_port_removes_numeric_suffix() {
        assert_eq!(strip_port("cdn-farm.io:8080"), "cdn-farm.io");
        assert_eq!(strip_port("cdn-farm.io"), "cdn-farm.io");
    }

    #[test]
    fn strip_port_leaves_ipv6_literals() {
        assert_eq!(strip_port("::1"), "::1");
        assert_eq!(strip_port("[::1]:8080"), "[::1]:8080");
    }

    #[test]
    fn request_host_prefers_host_header() {
        let mut headers = HeaderMap::new();
        headers.insert(HOST, "cdn-farm.io:443".parse().unwrap());
        let uri: Uri = "https://other.example/path".parse().unwrap();
        assert_eq!(request_host(&headers, &uri), "cdn-farm.io");
    }

    #[test]
    fn request_host_falls_back_to_uri_then_localhost() {
        let headers = HeaderMap::new();
        let uri: Uri = "https://from-uri.example/".parse().unwrap();
        assert_eq!(request_host(&headers, &uri), "from-uri.example");

        let bare: Uri = "/just/a/path".parse().unwrap();
        assert_eq!(request_host(&headers, &bare), "localhost");
    }
}
