//! Landing renderer: quick-link list.

use crate::domain::SiteConfig;

use super::sections;

/// Renders the landing page body.
pub(crate) fn render(config: &SiteConfig) -> String {
    let mut body = sections::header(config);
    body.push_str("<main class=\"page landing\">\n");

    if let Some(title) = &config.title {
        body.push_str(&format!(
            "  <h2 class=\"page-title\">{}</h2>\n",
            sections::escape(title)
        ));
    }
    if let Some(description) = &config.description {
        body.push_str(&format!(
            "  <p class=\"page-description\">{}</p>\n",
            sections::escape(description)
        ));
    }

    body.push_str(&quick_links(config));
    body.push_str(&sections::social_links(config));
    body.push_str("</main>\n");

    body.push_str(&sections::footer(config, &config.domain_title));
    body
}

/// Quick-link list, omitted when no links are configured.
fn quick_links(config: &SiteConfig) -> String {
    if config.links.is_empty() {
        return String::new();
    }
    let mut out = String::from("  <nav class=\"quick-links\">\n");
    for link in &config.links {
        out.push_str(&format!(
            "    <a class=\"quick-link\" href=\"{}\">{}</a>\n",
            sections::escape(&link.url),
            sections::escape(&link.title)
        ));
    }
    out.push_str("  </nav>\n");
    out
}
