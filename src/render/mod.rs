//! Page rendering: mode dispatch, section fragments, document shell.
//!
//! Rendering is pure string composition. The dispatcher is total: every
//! resolved mode maps to exactly one renderer, and anything the resolver
//! could not recognize has already collapsed to parking.

mod coming_soon;
mod landing;
mod parking;
mod sections;
mod shell;

use crate::domain::PageMode;
use crate::resolve::ResolvedSite;

/// Renders the complete HTML document for a resolved site.
#[must_use]
pub fn render_page(site: &ResolvedSite) -> String {
    let config = &site.config;
    let body = match config.mode {
        PageMode::ComingSoon => coming_soon::render(config),
        PageMode::Landing => landing::render(config),
        PageMode::Parking => parking::render(config),
    };
    shell::render(config, &body, site.presets.as_deref(), site.active_preset)
}
