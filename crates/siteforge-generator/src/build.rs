//! Build orchestration.
//!
//! Runs the generation pipeline over a site snapshot and collects the
//! result. The pipeline itself is fallible; `BuildEngine::build` is not:
//! any stage error is captured in the returned `BuildResult` instead of
//! propagating.

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::time::Instant;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use siteforge_core::{BuildConfig, Site};

use crate::archive::{ArchiveError, Export, archive_file_name, package_archive};
use crate::css::StylesheetGenerator;
use crate::files::{BuildFile, SizeBreakdown};
use crate::html::{HtmlError, HtmlGenerator};
use crate::minify::{minify_css, minify_html};
use crate::robots::RobotsGenerator;
use crate::sitemap::SitemapGenerator;
use crate::util::slugify;

/// Pipeline stage errors.
#[derive(Debug, Error)]
pub enum EngineError {
    /// HTML generation error.
    #[error("HTML error: {0}")]
    Html(#[from] HtmlError),

    /// Archive packaging error.
    #[error("archive error: {0}")]
    Archive(#[from] ArchiveError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed site document.
    #[error("invalid site document: {0}")]
    InvalidDocument(String),

    /// A build that ended with a fatal error was asked for its output.
    #[error("build failed: {0}")]
    Failed(String),
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Error kind reported in a `BuildResult`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildErrorKind {
    /// The whole build was aborted; no partial output is returned.
    Fatal,
}

/// An error captured in a `BuildResult`.
#[derive(Debug, Clone, Serialize)]
pub struct BuildError {
    pub kind: BuildErrorKind,
    pub message: String,
}

impl BuildError {
    fn fatal(message: impl Into<String>) -> Self {
        Self {
            kind: BuildErrorKind::Fatal,
            message: message.into(),
        }
    }
}

/// A non-fatal quality notice. Reserved: current builds emit none.
#[derive(Debug, Clone, Serialize)]
pub struct BuildWarning {
    pub message: String,
}

/// Outcome of one build invocation. Never mutated after return.
#[derive(Debug, Clone, Serialize)]
pub struct BuildResult {
    /// True exactly when `errors` is empty.
    pub success: bool,

    /// Logical output directory name (the slugified site name).
    pub output_path: String,

    /// Generated files. Empty on fatal error.
    pub files: Vec<BuildFile>,

    /// Processed assets. Always empty: the image pipeline is not part of
    /// the generated file set.
    pub assets: Vec<BuildFile>,

    pub errors: Vec<BuildError>,
    pub warnings: Vec<BuildWarning>,

    /// Wall-clock build duration in milliseconds.
    pub build_time_ms: u64,

    pub size: SizeBreakdown,
}

/// Static site build engine.
///
/// Holds only its configuration, which is read-only after construction;
/// builds against different site snapshots may run concurrently.
pub struct BuildEngine {
    config: BuildConfig,
    html: HtmlGenerator,
    css: StylesheetGenerator,
    sitemap: SitemapGenerator,
    robots: RobotsGenerator,
}

impl BuildEngine {
    /// Create an engine with the given configuration.
    #[must_use]
    pub fn new(config: BuildConfig) -> Self {
        Self {
            config,
            html: HtmlGenerator::new(),
            css: StylesheetGenerator::new(),
            sitemap: SitemapGenerator::new(),
            robots: RobotsGenerator::new(),
        }
    }

    /// The engine's configuration.
    #[must_use]
    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Build a site into its static file set.
    ///
    /// Never fails: stage errors are captured as a single fatal error in
    /// the result, with no partial file list.
    pub fn build(&self, site: &Site) -> BuildResult {
        let start = Instant::now();

        match self.run_pipeline(site) {
            Ok((files, size)) => {
                let build_time_ms = start.elapsed().as_millis() as u64;
                info!(
                    site = %site.id,
                    files = files.len(),
                    bytes = size.total,
                    build_time_ms,
                    "build complete"
                );
                BuildResult {
                    success: true,
                    output_path: slugify(&site.name),
                    files,
                    assets: Vec::new(),
                    errors: Vec::new(),
                    warnings: Vec::new(),
                    build_time_ms,
                    size,
                }
            }
            Err(err) => {
                warn!(site = %site.id, error = %err, "build failed");
                BuildResult {
                    success: false,
                    output_path: String::new(),
                    files: Vec::new(),
                    assets: Vec::new(),
                    errors: vec![BuildError::fatal(err.to_string())],
                    warnings: Vec::new(),
                    build_time_ms: start.elapsed().as_millis() as u64,
                    size: SizeBreakdown::default(),
                }
            }
        }
    }

    fn run_pipeline(&self, site: &Site) -> Result<(Vec<BuildFile>, SizeBreakdown)> {
        self.validate(site)?;

        // 1. Generate page and stylesheet
        let mut html = self.html.render_document(site)?;
        let mut css = self.css.generate(site);

        // 2. Optional minification
        if self.config.minify {
            html = minify_html(&html);
            css = minify_css(&css);
        }

        // 3. Auxiliary files
        let sitemap = self.sitemap.generate(site);
        let robots = self.robots.generate(site);

        // 4. Hashing and size accounting
        let html = BuildFile::new("index.html", html);
        let css = BuildFile::new("styles.css", css);

        let size = SizeBreakdown {
            html: html.size,
            css: css.size,
            js: 0,
            images: 0,
            total: html.size + css.size,
        };

        Ok((vec![html, css, sitemap, robots], size))
    }

    /// Document-level invariants. Section-level anomalies are handled by
    /// the renderers and are deliberately not checked here.
    fn validate(&self, site: &Site) -> Result<()> {
        let mut seen = HashSet::new();
        for section in &site.sections {
            if !seen.insert(section.id.as_str()) {
                return Err(EngineError::InvalidDocument(format!(
                    "duplicate section id: {}",
                    section.id
                )));
            }
        }
        Ok(())
    }

    /// Build and package a site into its downloadable archive.
    pub fn export(&self, site: &Site) -> Result<Export> {
        let result = self.build(site);
        if !result.success {
            let message = result
                .errors
                .first()
                .map(|e| e.message.clone())
                .unwrap_or_default();
            return Err(EngineError::Failed(message));
        }

        let bytes = package_archive(&result.files)?;
        Ok(Export {
            file_name: archive_file_name(&site.name),
            bytes,
        })
    }

    /// Write a successful build's files into a directory.
    pub fn write_to_dir(&self, result: &BuildResult, dir: &Path) -> Result<()> {
        fs::create_dir_all(dir)?;
        for file in &result.files {
            let path = dir.join(&file.path);
            fs::write(&path, &file.content)?;
            debug!(path = %path.display(), bytes = file.size, "wrote file");
        }
        Ok(())
    }
}

/// Build a site with the given configuration.
pub fn generate_static_site(site: &Site, config: BuildConfig) -> BuildResult {
    BuildEngine::new(config).build(site)
}

/// Build and package a site into its downloadable archive.
pub fn generate_archive(site: &Site, config: BuildConfig) -> Result<Export> {
    BuildEngine::new(config).export(site)
}

#[cfg(test)]
mod tests {
    use siteforge_core::{Section, SectionContent};
    use tempfile::TempDir;

    use super::*;

    fn test_site() -> Site {
        Site::from_json(
            r##"{
                "id": "site-1",
                "name": "Acme Studio",
                "domain": "acme.example.com",
                "sections": [
                    {"id": "a", "type": "hero", "order": 1,
                     "content": {"heading": "Welcome"}},
                    {"id": "b", "type": "about", "order": 2,
                     "content": {"heading": "About", "text": "Who we are"}}
                ],
                "theme": {
                    "colors": {"primary": "#3B82F6"},
                    "fonts": {"heading": "Inter", "body": "Inter"}
                },
                "seo": {"title": "Acme", "description": "Studio"}
            }"##,
        )
        .unwrap()
    }

    #[test]
    fn test_successful_build_file_set() {
        let result = BuildEngine::new(BuildConfig::default()).build(&test_site());

        assert!(result.success);
        assert!(result.errors.is_empty());
        let paths: Vec<&str> = result.files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec!["index.html", "styles.css", "sitemap.xml", "robots.txt"]);
        assert_eq!(result.output_path, "acme-studio");
    }

    #[test]
    fn test_size_accounting() {
        let result = BuildEngine::new(BuildConfig::default()).build(&test_site());

        let html = &result.files[0];
        let css = &result.files[1];
        assert_eq!(html.size, html.content.len() as u64);
        assert_eq!(css.size, css.content.len() as u64);
        assert_eq!(result.size.html, html.size);
        assert_eq!(result.size.css, css.size);
        assert_eq!(result.size.js, 0);
        assert_eq!(result.size.images, 0);
        assert_eq!(result.size.total, html.size + css.size);
    }

    #[test]
    fn test_deterministic_output() {
        let site = test_site();
        let engine = BuildEngine::new(BuildConfig::default());

        let first = engine.build(&site);
        let second = engine.build(&site);

        for (a, b) in first.files.iter().zip(&second.files) {
            assert_eq!(a.content, b.content);
            assert_eq!(a.hash, b.hash);
        }
    }

    #[test]
    fn test_minify_flag_controls_output() {
        let site = test_site();
        let minified = BuildEngine::new(BuildConfig::default()).build(&site);

        let config = BuildConfig {
            minify: false,
            ..Default::default()
        };
        let plain = BuildEngine::new(config).build(&site);

        assert!(minified.files[0].size <= plain.files[0].size);
        assert!(plain.files[0].content.contains('\n'));
        assert!(!minified.files[0].content.contains('\n'));
    }

    #[test]
    fn test_duplicate_section_ids_are_fatal() {
        let mut site = test_site();
        site.sections.push(Section {
            id: "a".to_string(),
            kind: "contact".to_string(),
            order: 3,
            content: SectionContent::default(),
        });

        let result = BuildEngine::new(BuildConfig::default()).build(&site);

        assert!(!result.success);
        assert!(result.files.is_empty());
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].kind, BuildErrorKind::Fatal);
        assert!(result.errors[0].message.contains("duplicate section id"));
        assert_eq!(result.size.total, 0);
    }

    #[test]
    fn test_unknown_section_type_is_not_fatal() {
        let mut site = test_site();
        site.sections.push(Section {
            id: "z".to_string(),
            kind: "nonexistent".to_string(),
            order: 9,
            content: SectionContent::default(),
        });

        let result = BuildEngine::new(BuildConfig::default()).build(&site);

        assert!(result.success);
        assert!(result.files[0].content.contains("is not implemented"));
    }

    #[test]
    fn test_export_names_archive_after_site() {
        let export = BuildEngine::new(BuildConfig::default())
            .export(&test_site())
            .unwrap();
        assert_eq!(export.file_name, "acme-studio-export.zip");
        assert!(!export.bytes.is_empty());
    }

    #[test]
    fn test_export_of_failed_build_errors() {
        let mut site = test_site();
        let duplicate = site.sections[0].clone();
        site.sections.push(duplicate);

        let err = BuildEngine::new(BuildConfig::default())
            .export(&site)
            .unwrap_err();
        assert!(matches!(err, EngineError::Failed(_)));
    }

    #[test]
    fn test_write_to_dir() {
        let dir = TempDir::new().unwrap();
        let engine = BuildEngine::new(BuildConfig::default());
        let result = engine.build(&test_site());

        engine.write_to_dir(&result, dir.path()).unwrap();

        for name in ["index.html", "styles.css", "sitemap.xml", "robots.txt"] {
            assert!(dir.path().join(name).exists(), "{name} should exist");
        }
    }

    #[test]
    fn test_free_function_matches_engine() {
        let result = generate_static_site(&test_site(), BuildConfig::default());
        assert!(result.success);
        assert_eq!(result.files.len(), 4);
    }
}
