//! Sitemap generation.
//!
//! Exports carry a homepage-only sitemap: the builder produces single-page
//! sites, so exactly one `<url>` entry is emitted.

use chrono::Utc;
use tracing::debug;

use siteforge_core::Site;

use crate::files::BuildFile;

/// Sitemap generator.
pub struct SitemapGenerator;

impl SitemapGenerator {
    /// Create a new sitemap generator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Generate `sitemap.xml` for a site.
    #[must_use]
    pub fn generate(&self, site: &Site) -> BuildFile {
        let base_url = site.base_url();
        debug!(site = %site.id, base_url, "generating sitemap");

        let lastmod = Utc::now().format("%Y-%m-%d");

        let mut xml = String::from(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        xml.push('\n');
        xml.push_str(r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#);
        xml.push('\n');
        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(base_url)));
        xml.push_str(&format!("    <lastmod>{lastmod}</lastmod>\n"));
        xml.push_str("    <changefreq>weekly</changefreq>\n");
        xml.push_str("    <priority>1.0</priority>\n");
        xml.push_str("  </url>\n");
        xml.push_str("</urlset>\n");

        BuildFile::new("sitemap.xml", xml)
    }
}

impl Default for SitemapGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
