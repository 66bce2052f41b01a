//! Stylesheet generation.
//!
//! Derives `styles.css` from the site theme: font imports, custom
//! properties for every theme token, then a fixed structural layer that
//! sections rely on. The structural rules reference the custom properties
//! with fallbacks, so sparse themes still produce a usable page.

use serde_json::Value;
use tracing::debug;

use siteforge_core::Site;

/// Stylesheet generator.
pub struct StylesheetGenerator;

impl StylesheetGenerator {
    /// Create a new stylesheet generator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Generate the stylesheet for a site.
    pub fn generate(&self, site: &Site) -> String {
        let theme = &site.theme;
        debug!(site = %site.id, colors = theme.colors.len(), "generating stylesheet");

        let mut css = String::new();

        css.push_str(&format!(
            "@import url('https://fonts.googleapis.com/css2?family={}&family={}&display=swap');\n\n",
            font_query(&theme.fonts.heading),
            font_query(&theme.fonts.body)
        ));

        css.push_str(":root {\n");
        for (name, value) in &theme.colors {
            css.push_str(&format!("  --color-{}: {};\n", name, color_value(value)));
        }
        css.push_str(&format!(
            "  --font-heading: '{}', sans-serif;\n",
            theme.fonts.heading
        ));
        css.push_str(&format!(
            "  --font-body: '{}', sans-serif;\n",
            theme.fonts.body
        ));
        css.push_str("}\n\n");

        css.push_str(STRUCTURAL_RULES);
        css
    }
}

impl Default for StylesheetGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Font family as a Google Fonts query fragment (spaces become `+`).
fn font_query(family: &str) -> String {
    family.replace(' ', "+")
}

/// Theme color values are strings in well-formed documents; anything else
/// is rendered through its JSON form rather than dropped.
fn color_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Structural layer shared by every export. Not derived from section
/// content; themed only through the custom properties above.
const STRUCTURAL_RULES: &str = "\
*, *::before, *::after { box-sizing: border-box; }
* { margin: 0; padding: 0; }

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
  scroll-behavior: smooth;
}

body {
  font-family: var(--font-body);
  line-height: 1.7;
  color: var(--color-text, #1E293B);
  background-color: var(--color-background, #FFFFFF);
}

h1, h2, h3, h4, h5, h6 {
  font-family: var(--font-heading);
  line-height: 1.2;
  margin-bottom: 0.5em;
}

img { max-width: 100%; display: block; }

section {
  padding: 4rem 1.5rem;
  max-width: 1080px;
  margin: 0 auto;
}

.btn {
  display: inline-block;
  padding: 0.75rem 1.75rem;
  border: none;
  border-radius: 0.375rem;
  font-family: var(--font-body);
  font-weight: 600;
  text-decoration: none;
  cursor: pointer;
  transition: opacity 0.2s ease;
}

.btn:hover { opacity: 0.85; }

.btn-primary {
  background-color: var(--color-primary, #3B82F6);
  color: #FFFFFF;
}

.section-hero { text-align: center; padding: 6rem 1.5rem; }

.hero-content {
  background-size: cover;
  background-position: center;
  padding: 3rem 1rem;
  border-radius: 0.5rem;
}

.hero-content h1 { font-size: 3rem; }

.hero-subheading {
  font-size: 1.25rem;
  color: var(--color-secondary, #475569);
  margin-bottom: 1.5rem;
}

.about-content { max-width: 720px; margin: 0 auto; }

.services-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
  gap: 1.5rem;
}

.service-card {
  padding: 1.5rem;
  border: 1px solid var(--color-border, #E2E8F0);
  border-radius: 0.5rem;
  background-color: var(--color-surface, #FFFFFF);
}

.service-icon { font-size: 2rem; margin-bottom: 0.75rem; }

.gallery-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(200px, 1fr));
  gap: 1rem;
}

.gallery-item img {
  width: 100%;
  height: 100%;
  object-fit: cover;
  border-radius: 0.375rem;
}

.gallery-item figcaption {
  font-size: 0.875rem;
  color: var(--color-secondary, #64748B);
  padding-top: 0.25rem;
}

.contact-info { margin-bottom: 2rem; }

.contact-form {
  display: flex;
  flex-direction: column;
  gap: 1rem;
  max-width: 480px;
}

.contact-form input,
.contact-form textarea {
  padding: 0.75rem;
  border: 1px solid var(--color-border, #E2E8F0);
  border-radius: 0.375rem;
  font-family: var(--font-body);
  font-size: 1rem;
}

.contact-form textarea { min-height: 8rem; resize: vertical; }

@media (max-width: 640px) {
  .hero-content h1 { font-size: 2rem; }
  section { padding: 2.5rem 1rem; }
}
";
