//! Export archive packaging.
//!
//! Bundles the generated files into a single ZIP for download. Entry
//! content is written byte-exact; paths stay flat and relative.

use std::io::{Cursor, Write};

use thiserror::Error;
use tracing::debug;
use zip::CompressionMethod;
use zip::write::{FileOptions, ZipWriter};

use crate::files::BuildFile;
use crate::util::slugify;

/// Archive packaging errors.
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// ZIP encoding error.
    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for archive operations.
pub type Result<T> = std::result::Result<T, ArchiveError>;

/// A packaged export ready for download.
#[derive(Debug, Clone)]
pub struct Export {
    /// Download file name (`{slug}-export.zip`).
    pub file_name: String,

    /// Archive bytes.
    pub bytes: Vec<u8>,
}

/// Package build files into a deflate-compressed ZIP archive.
pub fn package_archive(files: &[BuildFile]) -> Result<Vec<u8>> {
    debug!(files = files.len(), "packaging archive");

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

    for file in files {
        writer.start_file(file.path.as_str(), options)?;
        writer.write_all(file.content.as_bytes())?;
    }

    let cursor = writer.finish()?;
    Ok(cursor.into_inner())
}

/// Download name for a site's export archive.
#[must_use]
pub fn archive_file_name(site_name: &str) -> String {
    format!("{}-export.zip", slugify(site_name))
}
