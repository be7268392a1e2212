//! Parking-mode renderer: for-sale notice, price, contact call-to-action.

use crate::domain::SiteConfig;

use super::sections;

/// Renders the parking page body.
pub(crate) fn render(config: &SiteConfig) -> String {
    let mut body = sections::header(config);
    body.push_str("<main class=\"page parking\">\n");

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
    body.push_str(&sections::stats(config));

    if let Some(price) = &config.sale_price {
        body.push_str(&format!(
            "  <div class=\"sale-price\"><span class=\"price-label\">Asking price</span><span class=\"price-value\">{}</span></div>\n",
            sections::escape(price)
        ));
    }
    if let Some(email) = &config.contact_email {
        body.push_str(&contact_cta(email));
    }

    body.push_str(&sections::social_links(config));
    body.push_str("</main>\n");

    let default_footer = format!("Interested in {}? Get in touch.", config.domain_title);
    body.push_str(&sections::footer(config, &default_footer));
    body
}

/// Contact call-to-action with the address split into two halves that are
/// only joined client-side after the page loads. Keeps the address out of
/// the static markup to deter naive scrapers; not a security boundary.
fn contact_cta(email: &str) -> String {
    let (user, host) = email.split_once('@').unwrap_or((email, ""));
    format!(
        concat!(
            "  <a id=\"contact-cta\" class=\"cta\" href=\"#\">Contact owner</a>\n",
            "  <script>\n",
            "    window.addEventListener(\"DOMContentLoaded\", function () {{\n",
            "      var u = \"{user}\";\n",
            "      var d = \"{host}\";\n",
            "      var addr = u + \"@\" + d;\n",
            "      var cta = document.getElementById(\"contact-cta\");\n",
            "      cta.setAttribute(\"href\", \"mailto:\" + addr);\n",
            "      cta.textContent = addr;\n",
            "    }});\n",
            "  </script>\n",
        ),
        user = sections::js_escape(user),
        host = sections::js_escape(host),
    )
}
