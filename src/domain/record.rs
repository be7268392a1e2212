//! Configuration records: the raw stored shape and the resolved page config.
//!
//! Every configuration source (KV store, preset file, env blob) stores the
//! same JSON shape, [`RawSiteRecord`], with all fields optional. Resolution
//! merges the sources and produces one fully defaulted [`SiteConfig`] that
//! is immutable for the rest of the request.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Default accent color applied when no source supplies one.
pub const DEFAULT_ACCENT: &str = "#3b82f6";

/// Page template selector.
///
/// Stored as a plain string in configuration; anything other than the two
/// recognized non-default values renders the parking page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageMode {
    /// Domain-for-sale page with price and contact call-to-action.
    #[default]
    Parking,
    /// Pre-launch page with countdown and feature grid.
    ComingSoon,
    /// Simple link-landing page.
    Landing,
}

impl PageMode {
    /// Parses a stored mode string, falling back to [`PageMode::Parking`]
    /// for unrecognized values.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "coming-soon" => Self::ComingSoon,
            "landing" => Self::Landing,
            _ => Self::Parking,
        }
    }

    /// The wire string for this mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Parking => "parking",
            Self::ComingSoon => "coming-soon",
            Self::Landing => "landing",
        }
    }
}

/// Feature card shown in the coming-soon feature grid.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Feature {
    /// Card heading.
    pub title: String,
    /// Optional card body text.
    #[serde(default)]
    pub description: Option<String>,
}

/// Quick link shown on the landing page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuickLink {
    /// Link label.
    pub title: String,
    /// Link target.
    pub url: String,
}

/// A configuration record as stored in any source.
///
/// Everything is optional; gaps are filled during resolution. Field names
/// follow the stored JSON convention (`camelCase`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawSiteRecord {
    /// Canonical hostname this record describes.
    pub domain: Option<String>,
    /// Display override for the domain name.
    pub domain_title: Option<String>,
    /// Page mode string (`parking` | `coming-soon` | `landing`).
    pub mode: Option<String>,
    /// Headline, meaning depends on the mode.
    pub title: Option<String>,
    /// Body text, meaning depends on the mode.
    pub description: Option<String>,
    /// Short slogan (coming-soon).
    pub tagline: Option<String>,
    /// Secondary line (coming-soon).
    pub subtitle: Option<String>,
    /// ISO date the domain was registered; input to the derived age.
    pub registration_date: Option<String>,
    /// Pre-computed age text; wins over recomputation when present.
    pub domain_age_years: Option<String>,
    /// Pre-computed registration sentence; wins over recomputation.
    pub domain_registration: Option<String>,
    /// Pre-computed extension; wins over recomputation.
    pub domain_extension: Option<String>,
    /// Asking price text (parking).
    pub sale_price: Option<String>,
    /// Contact address for the parking call-to-action.
    pub contact_email: Option<String>,
    /// ISO launch instant driving the countdown (coming-soon).
    pub launch_date: Option<String>,
    /// Feature cards (coming-soon).
    pub features: Option<Vec<Feature>>,
    /// Quick links (landing).
    pub links: Option<Vec<QuickLink>>,
    /// Platform name to profile URL.
    pub social_links: Option<BTreeMap<String, String>>,
    /// Hex accent color for theming.
    pub accent_color: Option<String>,
    /// Footer text; the empty string suppresses the footer entirely.
    pub footer_text: Option<String>,
    /// Whether to append the credit line.
    pub show_credit: Option<bool>,
}

/// A named, fully formed configuration preset from the local override file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NamedPreset {
    /// Label shown in the dev switcher.
    pub name: String,
    /// The preset's configuration record.
    pub config: RawSiteRecord,
}

/// The immutable per-request configuration a renderer consumes.
///
/// Produced exactly once per request at the end of resolution; never
/// mutated afterwards and never shared across requests.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    /// Canonical hostname.
    pub domain: String,
    /// Display name, defaults to `domain`.
    pub domain_title: String,
    /// Selected page template.
    pub mode: PageMode,
    /// Headline.
    pub title: Option<String>,
    /// Body text.
    pub description: Option<String>,
    /// Short slogan.
    pub tagline: Option<String>,
    /// Secondary line.
    pub subtitle: Option<String>,
    /// Raw registration date as resolved.
    pub registration_date: Option<String>,
    /// Age text such as `15+`, empty when unknown.
    pub domain_age_years: String,
    /// Sentence such as `Registered in 2010`, empty when unknown.
    pub domain_registration: String,
    /// Extension such as `.io`, empty for IP literals and bare names.
    pub domain_extension: String,
    /// Asking price text.
    pub sale_price: Option<String>,
    /// Contact address.
    pub contact_email: Option<String>,
    /// Launch instant for the countdown.
    pub launch_date: Option<String>,
    /// Feature cards.
    pub features: Vec<Feature>,
    /// Quick links.
    pub links: Vec<QuickLink>,
    /// Platform name to profile URL.
    pub social_links: BTreeMap<String, String>,
    /// Hex accent color, defaulted to [`DEFAULT_ACCENT`].
    pub accent_color: String,
    /// Footer text: `Some("")` suppresses the footer, `None` falls back
    /// to a mode-specific default.
    pub footer_text: Option<String>,
    /// Whether the credit line is appended to the footer.
    pub show_credit: bool,
}
