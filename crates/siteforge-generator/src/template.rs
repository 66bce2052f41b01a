//! Document shell template.
//!
//! A lightweight string-interpolation template carries the exported page
//! scaffold; no heavyweight template engine is involved. Variables are
//! written `{{ name }}`; `{{ name? }}` marks a variable that renders as
//! empty when absent, which is how the optional head tags (canonical link,
//! robots meta, favicon, ...) drop out of documents that do not need them.

use std::collections::HashMap;

use thiserror::Error;

/// Template rendering errors.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Missing required variable.
    #[error("missing required variable: {0}")]
    MissingVariable(String),

    /// Invalid template syntax.
    #[error("invalid template syntax: {0}")]
    InvalidSyntax(String),
}

/// Result type for template operations.
pub type Result<T> = std::result::Result<T, TemplateError>;

/// Variables for one render.
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    variables: HashMap<String, String>,
}

impl TemplateContext {
    /// Create a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a variable into the context.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.variables.insert(key.into(), value.into());
    }

    /// Create context with initial variables.
    #[must_use]
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Get a variable value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }
}

/// A template with `{{ variable }}` interpolation.
#[derive(Debug, Clone)]
pub struct Template {
    content: String,
}

impl Template {
    /// Create a template from its source text.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Render the template with the given context.
    ///
    /// Replaces all `{{ variable }}` placeholders with values from context.
    /// Inserted values are not rescanned, so user content containing `{{`
    /// passes through literally.
    pub fn render(&self, context: &TemplateContext) -> Result<String> {
        let mut result = self.content.clone();
        let mut pos = 0;

        while let Some(start) = result[pos..].find("{{") {
            let start = pos + start;
            let end = result[start..]
                .find("}}")
                .ok_or_else(|| TemplateError::InvalidSyntax("unclosed {{ delimiter".to_string()))?;
            let end = start + end + 2;

            let var_name = result[start + 2..end - 2].trim();

            let (var_name, optional) = if let Some(stripped) = var_name.strip_suffix('?') {
                (stripped, true)
            } else {
                (var_name, false)
            };

            let value = match context.get(var_name) {
                Some(v) => v.to_string(),
                None if optional => String::new(),
                None => return Err(TemplateError::MissingVariable(var_name.to_string())),
            };

            result.replace_range(start..end, &value);
            pos = start + value.len();
        }

        Ok(result)
    }
}

/// Shell of every exported page. Optional variables carry their own
/// indentation and trailing newline so absent tags leave no blank lines.
pub const DOCUMENT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="{{ lang }}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{ title }}</title>
    <meta name="description" content="{{ description }}">
{{ keywords_meta? }}{{ canonical_link? }}{{ robots_meta? }}    <meta property="og:title" content="{{ og_title }}">
    <meta property="og:description" content="{{ og_description }}">
{{ og_image_meta? }}    <meta name="twitter:card" content="{{ twitter_card }}">
{{ favicon_link? }}    <link rel="stylesheet" href="styles.css">
{{ custom_css? }}</head>
<body>
{{ sections }}
{{ analytics? }}{{ custom_js? }}</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_interpolation() {
        let template = Template::new("Hello, {{ name }}!");
        let ctx = TemplateContext::new().with_var("name", "World");
        assert_eq!(template.render(&ctx).unwrap(), "Hello, World!");
    }

    #[test]
    fn test_missing_required_variable() {
        let template = Template::new("Hello, {{ name }}!");
        let err = template.render(&TemplateContext::new()).unwrap_err();
        assert!(matches!(err, TemplateError::MissingVariable(v) if v == "name"));
    }

    #[test]
    fn test_optional_variable_renders_empty() {
        let template = Template::new("a{{ gone? }}b");
        assert_eq!(template.render(&TemplateContext::new()).unwrap(), "ab");
    }

    #[test]
    fn test_unclosed_delimiter() {
        let template = Template::new("broken {{ name");
        let err = template.render(&TemplateContext::new()).unwrap_err();
        assert!(matches!(err, TemplateError::InvalidSyntax(_)));
    }

    #[test]
    fn test_inserted_values_not_rescanned() {
        let template = Template::new("{{ a }} {{ b }}");
        let ctx = TemplateContext::new()
            .with_var("a", "{{ b }}")
            .with_var("b", "x");
        assert_eq!(template.render(&ctx).unwrap(), "{{ b }} x");
    }

    #[test]
    fn test_document_template_renders() {
        let template = Template::new(DOCUMENT_TEMPLATE);
        let ctx = TemplateContext::new()
            .with_var("lang", "en")
            .with_var("title", "T")
            .with_var("description", "D")
            .with_var("og_title", "T")
            .with_var("og_description", "D")
            .with_var("twitter_card", "summary")
            .with_var("sections", "<section></section>");

        let html = template.render(&ctx).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>T</title>"));
        assert!(html.contains(r#"<link rel="stylesheet" href="styles.css">"#));
        assert!(!html.contains("{{"));
    }
}
