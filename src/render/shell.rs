//! Document shell: head, theme variables, dark/light toggle, dev switcher.
//!
//! Wraps a rendered body with the chrome every page shares. The accent
//! color arrives as a hex string and is decomposed into an RGB triple so
//! the stylesheet can derive translucent tints; an unparseable color
//! falls back to the default blue.

use crate::domain::{NamedPreset, SiteConfig};

use super::sections;

/// RGB decomposition of the default blue accent.
const FALLBACK_RGB: (u8, u8, u8) = (59, 130, 246);

/// Key under which the client persists the theme choice.
const THEME_STORAGE_KEY: &str = "vitrine-theme";

/// Key under which the client persists the dev preset choice.
const PRESET_STORAGE_KEY: &str = "vitrine-preset";

/// Parses `#rgb` or `#rrggbb` into an RGB triple, blue on failure.
pub(crate) fn accent_rgb(hex: &str) -> (u8, u8, u8) {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    match digits.len() {
        3 => {
            let mut chars = digits.chars();
            let parsed = (
                chars.next().and_then(wide_channel),
                chars.next().and_then(wide_channel),
                chars.next().and_then(wide_channel),
            );
            match parsed {
                (Some(r), Some(g), Some(b)) => (r, g, b),
                _ => FALLBACK_RGB,
            }
        }
        6 => {
            let parsed = (
                channel(digits, 0),
                channel(digits, 2),
                channel(digits, 4),
            );
            match parsed {
                (Some(r), Some(g), Some(b)) => (r, g, b),
                _ => FALLBACK_RGB,
            }
        }
        _ => FALLBACK_RGB,
    }
}

/// Two hex digits starting at `start`.
fn channel(digits: &str, start: usize) -> Option<u8> {
    digits
        .get(start..start + 2)
        .and_then(|pair| u8::from_str_radix(pair, 16).ok())
}

/// Single shorthand hex digit expanded to a full channel (`f` → `ff`).
fn wide_channel(digit: char) -> Option<u8> {
    digit.to_digit(16).map(|d| {
        #[allow(clippy::cast_possible_truncation)]
        let d = d as u8;
        d * 17
    })
}

/// Wraps body markup with the shared document chrome.
pub(crate) fn render(
    config: &SiteConfig,
    body: &str,
    presets: Option<&[NamedPreset]>,
    active_preset: usize,
) -> String {
    let (r, g, b) = accent_rgb(&config.accent_color);
    let title = match &config.title {
        Some(title) => format!("{} — {}", config.domain_title, title),
        None => config.domain_title.clone(),
    };
    let description = config
        .description
        .as_deref()
        .map(|d| {
            format!(
                "  <meta name=\"description\" content=\"{}\">\n",
                sections::escape(d)
            )
        })
        .unwrap_or_default();

    let mut out = String::from("<!DOCTYPE html>\n<html lang=\"en\" data-theme=\"dark\">\n<head>\n");
    out.push_str("  <meta charset=\"utf-8\">\n");
    out.push_str("  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    out.push_str(&format!("  <title>{}</title>\n", sections::escape(&title)));
    out.push_str(&description);
    out.push_str(&format!(
        "  <style>\n    :root {{ --accent: {accent}; --accent-rgb: {r}, {g}, {b}; }}\n{base_css}  </style>\n",
        accent = sections::escape(&config.accent_color),
        base_css = BASE_CSS,
    ));
    out.push_str("</head>\n<body>\n");
    out.push_str(
        "  <button id=\"theme-toggle\" class=\"theme-toggle\" aria-label=\"Toggle theme\">◐</button>\n",
    );
    if let Some(presets) = presets {
        out.push_str(&preset_switcher(presets, active_preset));
    }
    out.push_str(body);
    out.push_str(&theme_script());
    out.push_str("</body>\n</html>\n");
    out
}

/// Static rules shared by every page; color comes in via the variables.
const BASE_CSS: &str = concat!(
    "    body { margin: 0; font-family: system-ui, sans-serif; ",
    "background: #0b1020; color: #e6e8ef; }\n",
    "    [data-theme=\"light\"] body { background: #f7f8fa; color: #1a1d27; }\n",
    "    a { color: var(--accent); }\n",
    "    .cta, .quick-link { background: rgba(var(--accent-rgb), 0.12); ",
    "border: 1px solid var(--accent); border-radius: 8px; padding: 0.6em 1.2em; ",
    "display: inline-block; text-decoration: none; }\n",
    "    .theme-toggle { position: fixed; top: 1rem; right: 1rem; cursor: pointer; }\n",
);

/// Dark/light toggle, persisted client-side, defaulting to dark.
fn theme_script() -> String {
    format!(
        concat!(
            "  <script>\n",
            "    (function () {{\n",
            "      var root = document.documentElement;\n",
            "      var saved = localStorage.getItem(\"{key}\");\n",
            "      root.setAttribute(\"data-theme\", saved === \"light\" ? \"light\" : \"dark\");\n",
            "      document.getElementById(\"theme-toggle\").addEventListener(\"click\", function () {{\n",
            "        var next = root.getAttribute(\"data-theme\") === \"dark\" ? \"light\" : \"dark\";\n",
            "        root.setAttribute(\"data-theme\", next);\n",
            "        localStorage.setItem(\"{key}\", next);\n",
            "      }});\n",
            "    }})();\n",
            "  </script>\n",
        ),
        key = THEME_STORAGE_KEY,
    )
}

/// Dev-only preset switcher. Selecting an entry persists the choice and
/// re-requests the page with `?preset=<index>` so the server re-resolves.
/// On load, a stored choice is re-applied when the parameter is absent.
fn preset_switcher(presets: &[NamedPreset], active: usize) -> String {
    let mut out = String::from(
        "  <div class=\"preset-switcher\">\n    <select id=\"preset-select\" aria-label=\"Preset\">\n",
    );
    for (index, preset) in presets.iter().enumerate() {
        let selected = if index == active { " selected" } else { "" };
        out.push_str(&format!(
            "      <option value=\"{index}\"{selected}>{}</option>\n",
            sections::escape(&preset.name)
        ));
    }
    out.push_str("    </select>\n  </div>\n");
    out.push_str(&format!(
        concat!(
            "  <script>\n",
            "    (function () {{\n",
            "      var url = new URL(window.location.href);\n",
            "      var stored = localStorage.getItem(\"{key}\");\n",
            "      if (stored !== null && !url.searchParams.has(\"preset\")) {{\n",
            "        url.searchParams.set(\"preset\", stored);\n",
            "        window.location.replace(url);\n",
            "        return;\n",
            "      }}\n",
            "      document.getElementById(\"preset-select\").addEventListener(\"change\", function () {{\n",
            "        localStorage.setItem(\"{key}\", this.value);\n",
            "        url.searchParams.set(\"preset\", this.value);\n",
            "        window.location.assign(url);\n",
            "      }});\n",
            "    }})();\n",
            "  </script>\n",
        ),
        key = PRESET_STORAGE_KEY,
    ));
    out
}
