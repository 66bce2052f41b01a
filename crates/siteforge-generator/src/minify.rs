//! Whitespace minification for generated HTML and CSS.
//!
//! Best-effort string transforms: no HTML or CSS grammar is parsed. Both
//! passes are idempotent and never grow their input. Known limitation:
//! literal `<` / `>` inside inline script or style content can be treated
//! as tag boundaries and lose surrounding whitespace.

use std::sync::LazyLock;

use regex::Regex;

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static BETWEEN_TAGS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r">\s+<").unwrap());
static CSS_PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*([{}:;])\s*").unwrap());

/// Minify HTML: collapse whitespace runs, drop whitespace directly between
/// adjacent tags, trim the ends.
#[must_use]
pub fn minify_html(input: &str) -> String {
    let collapsed = WHITESPACE_RUN.replace_all(input, " ");
    let tight = BETWEEN_TAGS.replace_all(&collapsed, "><");
    tight.trim().to_string()
}

/// Minify CSS: collapse whitespace runs, drop spaces around `{ } : ;`,
/// trim the ends.
#[must_use]
pub fn minify_css(input: &str) -> String {
    let collapsed = WHITESPACE_RUN.replace_all(input, " ");
    let tight = CSS_PUNCTUATION.replace_all(&collapsed, "$1");
    tight.trim().to_string()
}
