//! Site document model.
//!
//! The `Site` value is the snapshot the builder UI persists: an ordered set
//! of content sections plus theme, SEO metadata and site settings. The build
//! engine treats it as immutable input.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;

/// Root site document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Site {
    /// Site identifier.
    pub id: String,

    /// Display name; also the source of the export archive name.
    pub name: String,

    /// Primary domain, if one is connected.
    #[serde(default)]
    pub domain: Option<String>,

    /// Custom domain overriding `domain` when present.
    #[serde(default)]
    pub custom_domain: Option<String>,

    /// Content sections. Not necessarily sorted; renderers order by
    /// `Section::order` before emission.
    #[serde(default)]
    pub sections: Vec<Section>,

    /// Theme tokens applied across the generated stylesheet.
    #[serde(default)]
    pub theme: Theme,

    /// SEO metadata for the document head.
    #[serde(default)]
    pub seo: Seo,

    /// Site-wide settings.
    #[serde(default)]
    pub settings: SiteSettings,
}

impl Site {
    /// Parse a site document from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self> {
        let site: Site = serde_json::from_str(json)?;
        tracing::debug!(site = %site.id, sections = site.sections.len(), "parsed site document");
        Ok(site)
    }

    /// Load a site document from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&raw)
    }

    /// Base URL for absolute links: the custom domain when set, otherwise the
    /// primary domain, otherwise empty. Empty strings count as absent.
    #[must_use]
    pub fn base_url(&self) -> &str {
        non_empty(self.custom_domain.as_deref())
            .or_else(|| non_empty(self.domain.as_deref()))
            .unwrap_or("")
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// A typed, orderable content block within a site.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// Section identifier, unique within the document.
    pub id: String,

    /// Section type tag (`hero`, `about`, `services`, ...). Open-ended:
    /// unrecognized tags degrade to a placeholder at render time.
    #[serde(rename = "type")]
    pub kind: String,

    /// Position within the page; ascending, ties keep document order.
    #[serde(default)]
    pub order: i64,

    /// Type-specific payload.
    #[serde(default)]
    pub content: SectionContent,
}

/// Section payload. Shapes vary per section type, so every field is
/// optional; unknown keys round-trip through `extra`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SectionContent {
    pub heading: Option<String>,
    pub subheading: Option<String>,
    pub text: Option<String>,
    pub background_image: Option<String>,
    pub image: Option<String>,
    pub cta_text: Option<String>,
    pub cta_link: Option<String>,

    /// Card items (services and similar grid sections).
    pub items: Vec<SectionItem>,

    /// Gallery images.
    pub images: Vec<GalleryImage>,

    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,

    /// Editor fields this version does not model explicitly.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A single card in an item-grid section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SectionItem {
    pub title: String,
    pub description: String,
    pub icon: Option<String>,
}

/// A single gallery image.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GalleryImage {
    pub url: String,
    pub alt: String,
    pub caption: Option<String>,
}

/// Color and font tokens applied uniformly across generated CSS.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    /// Open-ended color mapping; each key becomes a `--color-{key}` custom
    /// property. Insertion order is preserved through to the stylesheet.
    #[serde(default)]
    pub colors: Map<String, Value>,

    /// Font family pair.
    #[serde(default)]
    pub fonts: ThemeFonts,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            colors: Map::new(),
            fonts: ThemeFonts::default(),
        }
    }
}

/// Heading and body font families.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeFonts {
    #[serde(default = "default_font")]
    pub heading: String,

    #[serde(default = "default_font")]
    pub body: String,
}

impl Default for ThemeFonts {
    fn default() -> Self {
        Self {
            heading: default_font(),
            body: default_font(),
        }
    }
}

fn default_font() -> String {
    "Inter".to_string()
}

/// SEO metadata for the generated document head.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Seo {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub focus_keyword: Option<String>,
    pub og_image: Option<String>,
    pub twitter_card: Option<String>,
    pub canonical_url: Option<String>,
    pub robots_meta: RobotsMeta,
}

/// Crawler directives. Both flags default to permissive.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RobotsMeta {
    pub index: bool,
    pub follow: bool,
}

impl Default for RobotsMeta {
    fn default() -> Self {
        Self {
            index: true,
            follow: true,
        }
    }
}

/// Site-wide settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteSettings {
    pub favicon: Option<String>,
    pub analytics_id: Option<String>,
    pub gtm_id: Option<String>,

    /// BCP 47 language tag for the `<html lang>` attribute.
    pub language: String,

    pub timezone: String,

    /// Raw CSS appended to the document head. Not escaped.
    pub custom_css: Option<String>,

    /// Raw JS appended to the document body. Not escaped.
    pub custom_js: Option<String>,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            favicon: None,
            analytics_id: None,
            gtm_id: None,
            language: "en".to_string(),
            timezone: "UTC".to_string(),
            custom_css: None,
            custom_js: None,
        }
    }
}
