//! Siteforge Generator Library
//!
//! Static site build and export engine for Siteforge: turns a site
//! document into a self-contained static bundle (HTML, CSS, sitemap,
//! robots.txt) and packages it into a downloadable archive.
//!
//! # Modules
//!
//! - [`template`] - document shell with variable interpolation
//! - [`sections`] - per-type section rendering registry
//! - [`html`] - HTML document generation
//! - [`css`] - stylesheet generation from theme tokens
//! - [`sitemap`] - XML sitemap generation
//! - [`robots`] - robots.txt generation
//! - [`minify`] - whitespace minification for HTML/CSS
//! - [`files`] - build artifacts, hashing, size accounting
//! - [`archive`] - ZIP export packaging
//! - [`build`] - build orchestration

pub mod archive;
pub mod build;
pub mod css;
pub mod files;
pub mod html;
pub mod minify;
pub mod robots;
pub mod sections;
pub mod sitemap;
pub mod template;
pub mod util;

pub use archive::{Export, archive_file_name, package_archive};
pub use build::{
    BuildEngine, BuildError, BuildErrorKind, BuildResult, BuildWarning, EngineError,
    generate_archive, generate_static_site,
};
pub use css::StylesheetGenerator;
pub use files::{BuildFile, SizeBreakdown, content_hash};
pub use html::HtmlGenerator;
pub use minify::{minify_css, minify_html};
pub use robots::RobotsGenerator;
pub use sections::SectionRegistry;
pub use sitemap::SitemapGenerator;
pub use template::{Template, TemplateContext};
pub use util::{escape_html, slugify};
