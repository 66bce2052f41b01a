//! Siteforge Core Library
//!
//! Core types, configuration, and error handling for the Siteforge static
//! site export engine.

pub mod config;
pub mod error;
pub mod site;

pub use config::{BuildConfig, BuildTarget};
pub use error::{CoreError, Result};
pub use site::{
    GalleryImage, RobotsMeta, Section, SectionContent, SectionItem, Seo, Site, SiteSettings,
    Theme, ThemeFonts,
};
