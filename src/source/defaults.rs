//! Built-in lowest-priority configuration.

use crate::domain::{HostKey, RawSiteRecord};

/// Safe, non-sensitive record returned when every other source misses.
///
/// Price, contact, and registration stay unset; the mode and accent color
/// defaults are applied later during finalization.
#[must_use]
pub fn default_record(host: &HostKey) -> RawSiteRecord {
    RawSiteRecord {
        domain: Some(host.canonical().to_string()),
        title: Some("This domain is parked".to_string()),
        description: Some("This domain is registered and may become available.".to_string()),
        ..RawSiteRecord::default()
    }
}
