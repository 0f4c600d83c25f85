//! Markdown rendering.
//!
//! The pipeline is intentionally pure: markdown in, deterministic HTML out,
//! no state. Comrak options are configured once and shared process-wide.
//!
//! Raw HTML in the source passes through untouched. Config and event-page
//! markdown is an admin-authored, trusted surface; sanitisation of anything
//! player-authored is the embedding application's concern.

use std::sync::Arc;

use comrak::options::Options;
use once_cell::sync::Lazy;

/// Comrak-based markdown renderer with the platform's GFM extension set.
pub struct MarkdownRenderService {
    options: Options<'static>,
}

impl MarkdownRenderService {
    fn new() -> Self {
        Self {
            options: default_options(),
        }
    }

    /// Render markdown to HTML.
    pub fn render(&self, markdown: &str) -> String {
        comrak::markdown_to_html(markdown, &self.options)
    }
}

impl Default for MarkdownRenderService {
    fn default() -> Self {
        Self::new()
    }
}

static RENDER_SERVICE: Lazy<Arc<MarkdownRenderService>> =
    Lazy::new(|| Arc::new(MarkdownRenderService::new()));

/// Access the shared render service instance, initialised on first use.
pub fn render_service() -> Arc<MarkdownRenderService> {
    Arc::clone(&RENDER_SERVICE)
}

fn default_options() -> Options<'static> {
    let mut options = Options::default();
    let ext = &mut options.extension;
    ext.autolink = true;
    ext.table = true;
    ext.strikethrough = true;
    ext.tagfilter = false;
    // Trusted authoring surface; raw HTML survives rendering.
    options.render.r#unsafe = true;
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_paragraphs() {
        let html = render_service().render("hello *world*");
        assert_eq!(html, "<p>hello <em>world</em></p>\n");
    }

    #[test]
    fn autolink_extension_is_on() {
        let html = render_service().render("see https://example.com now");
        assert!(html.contains(r#"<a href="https://example.com">"#));
    }

    #[test]
    fn tables_render() {
        let html = render_service().render("| a | b |\n| - | - |\n| 1 | 2 |");
        assert!(html.contains("<table>"));
        assert!(html.contains("<td>1</td>"));
    }

    #[test]
    fn strikethrough_renders() {
        let html = render_service().render("~~gone~~");
        assert!(html.contains("<del>gone</del>"));
    }

    #[test]
    fn raw_html_passes_through() {
        let html = render_service().render("<div class=\"hint\">look here</div>");
        assert!(html.contains("<div class=\"hint\">look here</div>"));
    }
}
