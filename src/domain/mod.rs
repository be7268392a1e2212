//! Domain layer: hostname keys, configuration records, derived fields.
//!
//! This module contains the per-request data model: the normalized
//! hostname lookup keys, the raw stored configuration shape, the fully
//! resolved immutable page configuration, and the pure calculator for
//! presentation-derived fields.

pub mod derived;
pub mod hostname;
pub mod record;

pub use derived::{DerivedFields, derive_fields};
pub use hostname::HostKey;
pub use record::{Feature, NamedPreset, PageMode, QuickLink, RawSiteRecord, SiteConfig};
