//! # vitrine
//!
//! Hostname-keyed static informational page server.
//!
//! One GET request in, one rendered HTML page out: domain-for-sale,
//! coming-soon, or link-landing, selected per requested hostname. The
//! core is the configuration resolution pipeline, which layers a local
//! developer preset file, a remote KV store, process environment
//! variables, and built-in defaults into a single immutable per-request
//! configuration record.
//!
//! ## Architecture
//!
//! ```text
//! HTTP GET (any path)
//!     │
//!     ├── HostKey (domain/)            hostname → lookup keys
//!     ├── SiteResolver (resolve/)      priority chain + env overrides
//!     │       ├── PresetStore (source/)    dev-only local presets
//!     │       ├── KvStore (source/)        exact host, then `_default`
//!     │       ├── EnvTable (source/)       `<PREFIX>_CONFIG` blob
//!     │       └── built-in defaults (source/)
//!     ├── derive_fields (domain/)      age, registration, extension
//!     ├── render_page (render/)        mode dispatch → body → shell
//!     │
//!     └── HTML response
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod render;
pub mod resolve;
pub mod source;
