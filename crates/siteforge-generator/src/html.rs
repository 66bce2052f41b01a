//! HTML document generation.
//!
//! Assembles the full exported page: head metadata from the site's SEO and
//! settings, body from the ordered sections.

use thiserror::Error;
use tracing::debug;

use siteforge_core::Site;

use crate::sections::SectionRegistry;
use crate::template::{DOCUMENT_TEMPLATE, Template, TemplateContext, TemplateError};
use crate::util::escape_html;

/// HTML generation errors.
#[derive(Debug, Error)]
pub enum HtmlError {
    /// Template error.
    #[error("template error: {0}")]
    Template(#[from] TemplateError),
}

/// Result type for HTML generation.
pub type Result<T> = std::result::Result<T, HtmlError>;

/// Renders a site document to a complete HTML page.
pub struct HtmlGenerator {
    registry: SectionRegistry,
    shell: Template,
}

impl HtmlGenerator {
    /// Create a generator with the built-in section renderers.
    #[must_use]
    pub fn new() -> Self {
        Self::with_registry(SectionRegistry::new())
    }

    /// Create a generator with a custom section registry.
    #[must_use]
    pub fn with_registry(registry: SectionRegistry) -> Self {
        Self {
            registry,
            shell: Template::new(DOCUMENT_TEMPLATE),
        }
    }

    /// Render the full HTML document for a site.
    ///
    /// Sections are emitted in ascending `order`; the sort is stable so
    /// equal orders keep their document position.
    pub fn render_document(&self, site: &Site) -> Result<String> {
        debug!(site = %site.id, sections = site.sections.len(), "rendering document");

        let mut ordered: Vec<_> = site.sections.iter().collect();
        ordered.sort_by_key(|section| section.order);

        let body = ordered
            .iter()
            .map(|section| self.registry.render(section))
            .collect::<Vec<_>>()
            .join("\n");

        let seo = &site.seo;
        let settings = &site.settings;

        let mut ctx = TemplateContext::new()
            .with_var("lang", escape_html(&settings.language))
            .with_var("title", escape_html(&seo.title))
            .with_var("description", escape_html(&seo.description))
            .with_var("og_title", escape_html(&seo.title))
            .with_var("og_description", escape_html(&seo.description))
            .with_var(
                "twitter_card",
                escape_html(seo.twitter_card.as_deref().unwrap_or("summary")),
            )
            .with_var("sections", body);

        if !seo.keywords.is_empty() {
            ctx.insert(
                "keywords_meta",
                format!(
                    "    <meta name=\"keywords\" content=\"{}\">\n",
                    escape_html(&seo.keywords.join(", "))
                ),
            );
        }

        if let Some(canonical) = seo.canonical_url.as_deref() {
            ctx.insert(
                "canonical_link",
                format!(
                    "    <link rel=\"canonical\" href=\"{}\">\n",
                    escape_html(canonical)
                ),
            );
        }

        // Implicit allow: the robots meta tag only appears to restrict.
        if !seo.robots_meta.index {
            ctx.insert(
                "robots_meta",
                "    <meta name=\"robots\" content=\"noindex,nofollow\">\n",
            );
        }

        if let Some(image) = seo.og_image.as_deref() {
            ctx.insert(
                "og_image_meta",
                format!(
                    "    <meta property=\"og:image\" content=\"{}\">\n",
                    escape_html(image)
                ),
            );
        }

        if let Some(favicon) = settings.favicon.as_deref() {
            ctx.insert(
                "favicon_link",
                format!(
                    "    <link rel=\"icon\" href=\"{}\">\n",
                    escape_html(favicon)
                ),
            );
        }

        // Custom CSS/JS are owner-authored and inlined verbatim.
        if let Some(css) = settings.custom_css.as_deref() {
            ctx.insert("custom_css", format!("    <style>\n{css}\n    </style>\n"));
        }

        if let Some(id) = settings.analytics_id.as_deref() {
            ctx.insert("analytics", analytics_snippet(id));
        }

        if let Some(js) = settings.custom_js.as_deref() {
            ctx.insert("custom_js", format!("<script>\n{js}\n</script>\n"));
        }

        Ok(self.shell.render(&ctx)?)
    }
}

impl Default for HtmlGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn analytics_snippet(analytics_id: &str) -> String {
    let id = escape_html(analytics_id);
    format!(
        "<script async src=\"https://www.googletagmanager.com/gtag/js?id={id}\"></script>\n\
         <script>\n\
         window.dataLayer = window.dataLayer || [];\n\
         function gtag(){{dataLayer.push(arguments);}}\n\
         gtag('js', new Date());\n\
         gtag('config', '{id}');\n\
         </script>\n"
    )
}
