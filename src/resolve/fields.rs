//! Fixed table of scalar fields overridable through environment variables.
//!
//! The table maps each overridable field to its variable-name suffix once,
//! instead of constructing names dynamically per lookup. Structured fields
//! (`features`, `links`, `socialLinks`) are deliberately absent: they are
//! not representable as flat strings and always come from the base record.

use crate::domain::{HostKey, RawSiteRecord};
use crate::source::EnvTable;

type Setter = fn(&mut RawSiteRecord, String);

/// Every scalar field with its environment-variable suffix.
const SCALAR_FIELDS: &[(&str, Setter)] = &[
    ("DOMAIN", |r, v| r.domain = Some(v)),
    ("DOMAIN_TITLE", |r, v| r.domain_title = Some(v)),
    ("MODE", |r, v| r.mode = Some(v)),
    ("TITLE", |r, v| r.title = Some(v)),
    ("DESCRIPTION", |r, v| r.description = Some(v)),
    ("SALE_PRICE", |r, v| r.sale_price = Some(v)),
    ("CONTACT_EMAIL", |r, v| r.contact_email = Some(v)),
    ("ACCENT_COLOR", |r, v| r.accent_color = Some(v)),
    ("LAUNCH_DATE", |r, v| r.launch_date = Some(v)),
    ("TAGLINE", |r, v| r.tagline = Some(v)),
    ("SUBTITLE", |r, v| r.subtitle = Some(v)),
    ("FOOTER_TEXT", |r, v| r.footer_text = Some(v)),
    ("REGISTRATION_DATE", |r, v| r.registration_date = Some(v)),
];

/// Applies environment overrides on top of the base record.
///
/// For each field: the per-domain variable (`<PREFIX>_<FIELD>`) wins over
/// the global one (`<FIELD>`); either wins over the stored value.
pub(crate) fn apply_env_overrides(record: &mut RawSiteRecord, host: &HostKey, env: &EnvTable) {
    for (suffix, set) in SCALAR_FIELDS {
        let value = env
            .get(&host.env_key(suffix))
            .or_else(|| env.get(suffix));
        if let Some(value) = value {
            set(record, value.to_string());
        }
    }
}
