use std::sync::OnceLock;

use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "assets"]
struct EmbeddedAssets;

static MAIN_CSS: OnceLock<String> = OnceLock::new();
static FAVICON: OnceLock<String> = OnceLock::new();

pub fn main_css() -> &'static str {
    MAIN_CSS.get_or_init(|| embedded_text("main.css"))
}

/// The planet favicon as an inline `image/svg+xml` data URI.
pub fn favicon_data_uri() -> &'static str {
    FAVICON.get_or_init(|| svg_data_uri(&embedded_text("favicon.svg")))
}

/// A missing asset renders unstyled rather than aborting the window.
fn embedded_text(name: &str) -> String {
    match EmbeddedAssets::get(name) {
        Some(file) => String::from_utf8_lossy(&file.data).into_owned(),
        None => {
            tracing::warn!(target: "assets", name, "embedded asset missing");
            String::new()
        }
    }
}

/// SVG is text, so the URI only needs the characters that break a URL or
/// an attribute escaped.
fn svg_data_uri(svg: &str) -> String {
    let mut uri = String::from("data:image/svg+xml,");
    for ch in svg.split_whitespace().collect::<Vec<_>>().join(" ").chars() {
        match ch {
            '%' => uri.push_str("%25"),
            '#' => uri.push_str("%23"),
            '"' => uri.push('\''),
            '<' => uri.push_str("%3C"),
            '>' => uri.push_str("%3E"),
            _ => uri.push(ch),
        }
    }
    uri
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn svg_uri_escapes_url_breaking_characters() {
        let uri = svg_data_uri("<svg fill=\"#0af\">\n  <circle r=\"50%\"/>\n</svg>");
        assert_eq!(
            uri,
            "data:image/svg+xml,%3Csvg fill='%230af'%3E %3Ccircle r='50%25'/%3E %3C/svg%3E"
        );
    }

    #[test]
    fn bundled_assets_are_embedded() {
        assert!(main_css().contains(".toast-stack"));
        assert!(favicon_data_uri().starts_with("data:image/svg+xml,%3Csvg"));
    }
}
