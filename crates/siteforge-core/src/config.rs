//! Build configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Build target. Informational only: no generation stage branches on it
/// beyond the explicit flags below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildTarget {
    Production,
    Development,
}

/// Configuration for one build invocation. Read-only after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Whether to minify generated HTML and CSS.
    pub minify: bool,

    /// Whether to optimize images. Carried for the asset pipeline; the
    /// current file set contains no images, so this is a no-op.
    #[serde(alias = "optimizeImages")]
    pub optimize_images: bool,

    /// Whether to inline the stylesheet instead of linking it. Recognized
    /// but not applied: exports always link `styles.css`.
    #[serde(alias = "inlineCSS", alias = "inlineCss")]
    pub inline_css: bool,

    /// Whether to emit source maps. Recognized but not applied.
    #[serde(alias = "generateSourceMaps")]
    pub generate_source_maps: bool,

    pub target: BuildTarget,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            minify: true,
            optimize_images: true,
            inline_css: false,
            generate_source_maps: false,
            target: BuildTarget::Production,
        }
    }
}

impl BuildConfig {
    /// Load configuration from a TOML file. A missing file yields defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no build config file, using defaults");
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)?;
        let config: BuildConfig = toml::from_str(&raw)?;
        Ok(config)
    }

    /// Load configuration from a TOML file layered with
    /// `SITEFORGE__`-prefixed environment overrides.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(config::Environment::with_prefix("SITEFORGE").separator("__"))
            .build()?;

        let config: BuildConfig = settings.try_deserialize()?;
        Ok(config)
    }
}
