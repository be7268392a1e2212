//! Shared section fragments used by all three page renderers.
//!
//! Every fragment is a pure function returning a markup string; a
//! fragment that does not apply returns the empty string so callers can
//! concatenate unconditionally.

use crate::domain::SiteConfig;

/// Escapes text for interpolation into HTML content or attribute values.
pub(crate) fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Escapes text for interpolation into a double-quoted JS string literal.
pub(crate) fn js_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '<' => out.push_str("\\u003c"),
            other => out.push(other),
        }
    }
    out
}

/// Header block: domain name plus the optional registration badge.
pub(crate) fn header(config: &SiteConfig) -> String {
    let mut out = String::from("<header class=\"site-header\">\n");
    out.push_str(&format!(
        "  <h1 class=\"domain-name\">{}</h1>\n",
        escape(&config.domain_title)
    ));
    if !config.domain_registration.is_empty() {
        out.push_str(&format!(
            "  <span class=\"registration-badge\">{}</span>\n",
            escape(&config.domain_registration)
        ));
    }
    out.push_str("</header>\n");
    out
}

/// Stat chips for the extension and registration age. Omitted entirely
/// when neither value is known.
pub(crate) fn stats(config: &SiteConfig) -> String {
    if config.domain_extension.is_empty() && config.domain_age_years.is_empty() {
        return String::new();
    }
    let mut out = String::from("<div class=\"domain-stats\">\n");
    if !config.domain_extension.is_empty() {
        out.push_str(&format!(
            "  <div class=\"stat\"><span class=\"stat-value\">{}</span><span class=\"stat-label\">Extension</span></div>\n",
            escape(&config.domain_extension)
        ));
    }
    if !config.domain_age_years.is_empty() {
        out.push_str(&format!(
            "  <div class=\"stat\"><span class=\"stat-value\">{}</span><span class=\"stat-label\">Years</span></div>\n",
            escape(&config.domain_age_years)
        ));
    }
    out.push_str("</div>\n");
    out
}

/// Social icon row. Omitted when no social links are configured.
pub(crate) fn social_links(config: &SiteConfig) -> String {
    if config.social_links.is_empty() {
        return String::new();
    }
    let mut out = String::from("<div class=\"social-links\">\n");
    for (platform, url) in &config.social_links {
        out.push_str(&format!(
            "  <a class=\"social-link\" href=\"{}\" target=\"_blank\" rel=\"noopener\">{}</a>\n",
            escape(url),
            escape(platform)
        ));
    }
    out.push_str("</div>\n");
    out
}

/// Footer block.
///
/// An explicitly empty `footerText` suppresses the footer entirely; an
/// absent one falls back to `default_text`. The credit line is appended
/// only when `showCredit` is set.
pub(crate) fn footer(config: &SiteConfig, default_text: &str) -> String {
    let text = match config.footer_text.as_deref() {
        Some("") => return String::new(),
        Some(text) => text,
        None => default_text,
    };
    let mut out = String::from("<footer class=\"site-footer\">\n");
    out.push_str(&format!("  <p>{}</p>\n", escape(text)));
    if config.show_credit {
        out.push_str("  <p class=\"credit\">Built with vitrine</p>\n");
    }
    out.push_str("</footer>\n");
    out
}

/// Minimal resolved config shared by the renderer tests.
#[cfg(test)]
pub(crate) fn test_config() -> SiteConfig {
    use crate::domain::PageMode;
    use crate::domain::record::DEFAULT_ACCENT;

    SiteConfig {
        domain: "cdn-farm.io".to_string(),
        domain_title: "cdn-farm.io".to_string(),
        mode: PageMode::Parking,
        title: None,
        description: None,
        tagline: None,
        subtitle: None,
        registration_date: None,
        domain_age_years: String::new(),
        domain_registration: String::new(),
        domain_extension: String::new(),
        sale_price: None,
        contact_email: None,
        launch_date: None,
        features: Vec::new(),
        links: Vec::new(),
        social_links: std::collections::BTreeMap::new(),
        accent_color: DEFAULT_ACCENT.to_string(),
        footer_text: None,
        show_credit: true,
    }
}
