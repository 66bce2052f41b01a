//! Small string helpers shared across generators.

/// Escape text for interpolation into HTML content or attribute positions.
///
/// Converts the five characters with markup meaning (`& < > " '`) to their
/// entity equivalents. Every user-supplied text value passes through here
/// before it reaches generated output.
#[must_use]
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Derive a file-name-safe slug: lowercase with whitespace runs collapsed
/// to single hyphens.
#[must_use]
pub fn slugify(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}
