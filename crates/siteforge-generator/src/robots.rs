//! Robots.txt generation.

use tracing::debug;

use siteforge_core::Site;

use crate::files::BuildFile;

/// Robots.txt generator.
pub struct RobotsGenerator;

impl RobotsGenerator {
    /// Create a new robots generator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Generate `robots.txt` for a site.
    ///
    /// The allow/disallow directive is coupled to `seo.robots_meta.index`,
    /// matching the `<meta name="robots">` tag in the document head.
    #[must_use]
    pub fn generate(&self, site: &Site) -> BuildFile {
        debug!(site = %site.id, index = site.seo.robots_meta.index, "generating robots.txt");

        let mut out = String::from("User-agent: *\n");
        if site.seo.robots_meta.index {
            out.push_str("Allow: /\n");
        } else {
            out.push_str("Disallow: /\n");
        }
        out.push_str(&format!("Sitemap: {}/sitemap.xml\n", site.base_url()));

        BuildFile::new("robots.txt", out)
    }
}

impl Default for RobotsGenerator {
    fn default() -> Self {
        Self::new()
    }
}
