//! Coming-soon renderer: countdown timer and feature grid.

use crate::domain::SiteConfig;

use super::sections;

/// Renders the coming-soon page body.
pub(crate) fn render(config: &SiteConfig) -> String {
    let mut body = sections::header(config);
    body.push_str("<main class=\"page coming-soon\">\n");

    if let Some(title) = &config.title {
        body.push_str(&format!(
            "  <h2 class=\"page-title\">{}</h2>\n",
            sections::escape(title)
        ));
    }
    if let Some(tagline) = &config.tagline {
        body.push_str(&format!(
            "  <p class=\"tagline\">{}</p>\n",
            sections::escape(tagline)
        ));
    }
    if let Some(subtitle) = &config.subtitle {
        body.push_str(&format!(
            "  <p class=\"subtitle\">{}</p>\n",
            sections::escape(subtitle)
        ));
    }

    if let Some(launch_date) = &config.launch_date {
        body.push_str(&countdown(launch_date));
    }
    body.push_str(&feature_grid(config));

    body.push_str(&sections::social_links(config));
    body.push_str("</main>\n");

    let default_footer = format!("{} is launching soon.", config.domain_title);
    body.push_str(&sections::footer(config, &default_footer));
    body
}

/// Countdown section plus its ticker script.
///
/// Remaining days/hours/minutes/seconds are recomputed every second by
/// integer division of the millisecond delta. Once the delta goes
/// negative the display is replaced with the live message for good and
/// the interval is cleared.
fn countdown(launch_date: &str) -> String {
    format!(
        concat!(
            "  <section class=\"countdown\" data-launch=\"{launch}\">\n",
            "    <div class=\"unit\"><span id=\"cd-days\">--</span><label>Days</label></div>\n",
            "    <div class=\"unit\"><span id=\"cd-hours\">--</span><label>Hours</label></div>\n",
            "    <div class=\"unit\"><span id=\"cd-minutes\">--</span><label>Minutes</label></div>\n",
            "    <div class=\"unit\"><span id=\"cd-seconds\">--</span><label>Seconds</label></div>\n",
            "  </section>\n",
            "  <script>\n",
            "    (function () {{\n",
            "      var root = document.querySelector(\".countdown\");\n",
            "      var target = new Date(root.getAttribute(\"data-launch\")).getTime();\n",
            "      if (isNaN(target)) return;\n",
            "      var timer = setInterval(tick, 1000);\n",
            "      function tick() {{\n",
            "        var delta = target - Date.now();\n",
            "        if (delta < 0) {{\n",
            "          root.innerHTML = \"<p class='live'>We are live!</p>\";\n",
            "          clearInterval(timer);\n",
            "          return;\n",
            "        }}\n",
            "        var s = Math.floor(delta / 1000);\n",
            "        document.getElementById(\"cd-days\").textContent = Math.floor(s / 86400);\n",
            "        document.getElementById(\"cd-hours\").textContent = Math.floor(s / 3600) % 24;\n",
            "        document.getElementById(\"cd-minutes\").textContent = Math.floor(s / 60) % 60;\n",
            "        document.getElementById(\"cd-seconds\").textContent = s % 60;\n",
            "      }}\n",
            "      tick();\n",
            "    }})();\n",
            "  </script>\n",
        ),
        launch = sections::escape(launch_date),
    )
}

/// Feature cards, omitted when the list is empty.
fn feature_grid(config: &SiteConfig) -> String {
    if config.features.is_empty() {
        return String::new();
    }
    let mut out = String::from("  <section class=\"feature-grid\">\n");
    for feature in &config.features {
        out.push_str("    <div class=\"feature\">\n");
        out.push_str(&format!(
            "      <h3>{}</h3>\n",
            sections::escape(&feature.title)
        ));
        if let Some(description) = &feature.description {
            out.push_str(&format!("      <p>{}</p>\n", sections::escape(description)));
        }
        out.push_str("    </div>\n");
    }
    out.push_str("  </section>\n");
    out
}
