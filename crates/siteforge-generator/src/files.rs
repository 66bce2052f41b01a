//! Generated file artifacts, content hashing and size accounting.

use serde::Serialize;

/// One generated file in a build.
///
/// Constructed once; size and hash are derived from the content at
/// construction and never change afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct BuildFile {
    /// Relative path within the bundle (flat; e.g. `index.html`).
    pub path: String,

    /// File content.
    pub content: String,

    /// UTF-8 byte length of `content`.
    pub size: u64,

    /// Short content hash for change detection.
    pub hash: String,
}

impl BuildFile {
    /// Create a build file, computing size and hash from the content.
    #[must_use]
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        let content = content.into();
        let size = content.len() as u64;
        let hash = content_hash(&content);
        Self {
            path: path.into(),
            content,
            size,
            hash,
        }
    }
}

/// Aggregate byte sizes of a build, by artifact class.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct SizeBreakdown {
    pub html: u64,
    pub css: u64,
    pub js: u64,
    pub images: u64,
    pub total: u64,
}

/// Short content hash for cache busting and change detection.
///
/// FNV-1a over the UTF-8 bytes, rendered as the first 8 hex characters.
/// Deterministic across runs and platforms; not cryptographic.
#[must_use]
pub fn content_hash(content: &str) -> String {
    let mut hash: u64 = 0xcbf29ce484222325;
    for byte in content.as_bytes() {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(0x100000001b3);
    }
    format!("{hash:016x}")[..8].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_deterministic() {
        assert_eq!(content_hash("hello"), content_hash("hello"));
        assert_eq!(content_hash("hello").len(), 8);
    }

    #[test]
    fn test_hash_depends_only_on_content() {
        let a = BuildFile::new("index.html", "<html></html>");
        let b = BuildFile::new("other.html", "<html></html>");
        assert_eq!(a.hash, b.hash);

        let c = BuildFile::new("index.html", "<html> </html>");
        assert_ne!(a.hash, c.hash);
    }

    #[test]
    fn test_size_counts_utf8_bytes() {
        // Multi-byte characters count by encoded length, not chars.
        let file = BuildFile::new("index.html", "καλημέρα");
        assert_eq!(file.size, "καλημέρα".len() as u64);
        assert_eq!(file.size, 16);

        let ascii = BuildFile::new("robots.txt", "Allow: /");
        assert_eq!(ascii.size, 8);
    }

    #[test]
    fn test_empty_content() {
        let file = BuildFile::new("empty.txt", "");
        assert_eq!(file.size, 0);
        assert_eq!(file.hash.len(), 8);
    }
}
