//! Per-type section rendering.
//!
//! Dispatch is a registry mapping section type tags to pure render
//! functions, so new section types plug in without touching the render
//! loop. Unrecognized tags fall back to a visible placeholder comment;
//! a malformed or future section type never aborts an export.

use std::collections::HashMap;

use siteforge_core::Section;

use crate::util::escape_html;

/// Renders one section's inner markup.
pub type RenderFn = fn(&Section) -> String;

/// Registry of section renderers keyed by type tag.
pub struct SectionRegistry {
    renderers: HashMap<&'static str, RenderFn>,
}

impl SectionRegistry {
    /// Create a registry with the built-in section types.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self {
            renderers: HashMap::new(),
        };
        registry.register("hero", render_hero);
        registry.register("about", render_about);
        registry.register("services", render_services);
        registry.register("gallery", render_gallery);
        registry.register("contact", render_contact);
        registry
    }

    /// Register a renderer for a section type, replacing any existing one.
    pub fn register(&mut self, kind: &'static str, renderer: RenderFn) {
        self.renderers.insert(kind, renderer);
    }

    /// Render a section, wrapped in its `<section>` envelope.
    ///
    /// The envelope carries the section id as anchor and a type-derived
    /// class, whatever the type resolves to.
    #[must_use]
    pub fn render(&self, section: &Section) -> String {
        let inner = match self.renderers.get(section.kind.as_str()) {
            Some(renderer) => renderer(section),
            None => render_placeholder(section),
        };

        format!(
            "<section id=\"{}\" class=\"section-{}\">\n{}\n</section>",
            escape_html(&section.id),
            escape_html(&section.kind),
            inner
        )
    }
}

impl Default for SectionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn render_placeholder(section: &Section) -> String {
    format!(
        "<!-- section type \"{}\" is not implemented -->",
        escape_html(&section.kind)
    )
}

fn render_hero(section: &Section) -> String {
    let content = &section.content;
    let style = content
        .background_image
        .as_deref()
        .filter(|url| !url.is_empty())
        .map(|url| format!(" style=\"background-image: url('{}')\"", escape_html(url)))
        .unwrap_or_default();

    let heading = content.heading.as_deref().unwrap_or_default();
    let subheading = content
        .subheading
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(|s| format!("\n    <p class=\"hero-subheading\">{}</p>", escape_html(s)))
        .unwrap_or_default();
    let cta = content
        .cta_text
        .as_deref()
        .filter(|t| !t.is_empty())
        .map(|text| {
            let link = content.cta_link.as_deref().unwrap_or("#");
            format!(
                "\n    <a href=\"{}\" class=\"btn btn-primary\">{}</a>",
                escape_html(link),
                escape_html(text)
            )
        })
        .unwrap_or_default();

    format!(
        "  <div class=\"hero-content\"{}>\n    <h1>{}</h1>{}{}\n  </div>",
        style,
        escape_html(heading),
        subheading,
        cta
    )
}

fn render_about(section: &Section) -> String {
    let content = &section.content;
    let heading = content.heading.as_deref().unwrap_or_default();
    let text = content.text.as_deref().unwrap_or_default();
    let image = content
        .image
        .as_deref()
        .filter(|url| !url.is_empty())
        .map(|url| {
            format!(
                "\n    <img src=\"{}\" alt=\"{}\">",
                escape_html(url),
                escape_html(heading)
            )
        })
        .unwrap_or_default();

    format!(
        "  <div class=\"about-content\">\n    <h2>{}</h2>\n    <p>{}</p>{}\n  </div>",
        escape_html(heading),
        escape_html(text),
        image
    )
}

fn render_services(section: &Section) -> String {
    let content = &section.content;
    let heading = content.heading.as_deref().unwrap_or_default();

    let cards: String = content
        .items
        .iter()
        .map(|item| {
            let icon = item
                .icon
                .as_deref()
                .filter(|i| !i.is_empty())
                .map(|i| format!("<div class=\"service-icon\">{}</div>", escape_html(i)))
                .unwrap_or_default();
            format!(
                "    <div class=\"service-card\">{}<h3>{}</h3><p>{}</p></div>",
                icon,
                escape_html(&item.title),
                escape_html(&item.description)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "  <h2>{}</h2>\n  <div class=\"services-grid\">\n{}\n  </div>",
        escape_html(heading),
        cards
    )
}

fn render_gallery(section: &Section) -> String {
    let content = &section.content;
    let heading = content.heading.as_deref().unwrap_or_default();

    let items: String = content
        .images
        .iter()
        .map(|image| {
            let caption = image
                .caption
                .as_deref()
                .filter(|c| !c.is_empty())
                .map(|c| format!("<figcaption>{}</figcaption>", escape_html(c)))
                .unwrap_or_default();
            format!(
                "    <figure class=\"gallery-item\"><img src=\"{}\" alt=\"{}\" loading=\"lazy\">{}</figure>",
                escape_html(&image.url),
                escape_html(&image.alt),
                caption
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "  <h2>{}</h2>\n  <div class=\"gallery-grid\">\n{}\n  </div>",
        escape_html(heading),
        items
    )
}

fn render_contact(section: &Section) -> String {
    let content = &section.content;
    let heading = content.heading.as_deref().unwrap_or_default();

    let mut info = Vec::new();
    if let Some(email) = content.email.as_deref().filter(|v| !v.is_empty()) {
        info.push(format!(
            "    <p class=\"contact-email\">{}</p>",
            escape_html(email)
        ));
    }
    if let Some(phone) = content.phone.as_deref().filter(|v| !v.is_empty()) {
        info.push(format!(
            "    <p class=\"contact-phone\">{}</p>",
            escape_html(phone)
        ));
    }
    if let Some(address) = content.address.as_deref().filter(|v| !v.is_empty()) {
        info.push(format!(
            "    <p class=\"contact-address\">{}</p>",
            escape_html(address)
        ));
    }

    format!(
        "  <h2>{}</h2>\n  <div class=\"contact-info\">\n{}\n  </div>\n  \
         <form class=\"contact-form\">\n    \
         <input type=\"text\" name=\"name\" placeholder=\"Name\">\n    \
         <input type=\"email\" name=\"email\" placeholder=\"Email\">\n    \
         <textarea name=\"message\" placeholder=\"Message\"></textarea>\n    \
         <button type=\"submit\" class=\"btn btn-primary\">Send</button>\n  </form>",
        escape_html(heading),
        info.join("\n")
    )
}

#[cfg(test)]
mod tests {
    use siteforge_core::{GalleryImage, SectionContent, SectionItem};

    use super::*;

    fn section(kind: &str, content: SectionContent) -> Section {
        Section {
            id: format!("{kind}-1"),
            kind: kind.to_string(),
            order: 0,
            content,
        }
    }

    #[test]
    fn test_envelope_carries_id_and_class() {
        let html = SectionRegistry::new().render(&section("hero", SectionContent::default()));
        assert!(html.starts_with(r#"<section id="hero-1" class="section-hero">"#));
        assert!(html.ends_with("</section>"));
    }

    #[test]
    fn test_hero_renders_heading_and_cta() {
        let content = SectionContent {
            heading: Some("Build faster".to_string()),
            subheading: Some("Ship today".to_string()),
            background_image: Some("/img/bg.jpg".to_string()),
            cta_text: Some("Start".to_string()),
            cta_link: Some("/signup".to_string()),
            ..Default::default()
        };
        let html = SectionRegistry::new().render(&section("hero", content));

        assert!(html.contains("<h1>Build faster</h1>"));
        assert!(html.contains(r#"<p class="hero-subheading">Ship today</p>"#));
        assert!(html.contains("background-image: url('/img/bg.jpg')"));
        assert!(html.contains(r#"<a href="/signup" class="btn btn-primary">Start</a>"#));
    }

    #[test]
    fn test_hero_escapes_user_text() {
        let content = SectionContent {
            heading: Some("<script>alert(1)</script>".to_string()),
            ..Default::default()
        };
        let html = SectionRegistry::new().render(&section("hero", content));

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn test_services_renders_card_per_item() {
        let content = SectionContent {
            heading: Some("Services".to_string()),
            items: vec![
                SectionItem {
                    title: "Design".to_string(),
                    description: "Identity & web".to_string(),
                    icon: Some("🎨".to_string()),
                },
                SectionItem {
                    title: "Dev".to_string(),
                    description: "Full stack".to_string(),
                    icon: None,
                },
            ],
            ..Default::default()
        };
        let html = SectionRegistry::new().render(&section("services", content));

        assert_eq!(html.matches("service-card").count(), 2);
        assert!(html.contains("<h3>Design</h3>"));
        assert!(html.contains("Identity &amp; web"));
        assert!(html.contains(r#"<div class="service-icon">🎨</div>"#));
    }

    #[test]
    fn test_gallery_images_lazy_load() {
        let content = SectionContent {
            images: vec![GalleryImage {
                url: "/img/a.jpg".to_string(),
                alt: "A \"quoted\" view".to_string(),
                caption: Some("Morning".to_string()),
            }],
            ..Default::default()
        };
        let html = SectionRegistry::new().render(&section("gallery", content));

        assert!(html.contains(r#"loading="lazy""#));
        assert!(html.contains("alt=\"A &quot;quoted&quot; view\""));
        assert!(html.contains("<figcaption>Morning</figcaption>"));
    }

    #[test]
    fn test_contact_renders_info_and_form() {
        let content = SectionContent {
            heading: Some("Reach us".to_string()),
            email: Some("hi@acme.io".to_string()),
            phone: Some("+30 210 000 0000".to_string()),
            ..Default::default()
        };
        let html = SectionRegistry::new().render(&section("contact", content));

        assert!(html.contains(r#"<p class="contact-email">hi@acme.io</p>"#));
        assert!(html.contains(r#"<p class="contact-phone">+30 210 000 0000</p>"#));
        assert!(!html.contains("contact-address"));
        assert!(html.contains(r#"<form class="contact-form">"#));
        assert!(html.contains(r#"<textarea name="message""#));
    }

    #[test]
    fn test_unknown_type_renders_placeholder() {
        let html = SectionRegistry::new().render(&section("countdown", SectionContent::default()));
        assert!(html.contains(r#"<!-- section type "countdown" is not implemented -->"#));
        assert!(html.contains(r#"class="section-countdown""#));
    }

    #[test]
    fn test_placeholder_escapes_comment_breakout() {
        let mut s = section("x", SectionContent::default());
        s.kind = "evil --> <script>".to_string();
        let html = SectionRegistry::new().render(&s);
        assert!(!html.contains("--> <script>"));
    }

    #[test]
    fn test_custom_renderer_overrides_builtin() {
        fn stub(_: &Section) -> String {
            "  <p>custom</p>".to_string()
        }
        let mut registry = SectionRegistry::new();
        registry.register("hero", stub);
        let html = registry.render(&section("hero", SectionContent::default()));
        assert!(html.contains("<p>custom</p>"));
    }
}
