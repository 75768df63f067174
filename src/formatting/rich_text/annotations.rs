// src/formatting/rich_text/annotations.rs
//! Annotation processing for rich text.

use crate::types::Annotations;

/// Renderer for text annotations to Markdown.
pub struct MarkdownStyleRenderer;

impl MarkdownStyleRenderer {
    /// Wraps `content` in the markers for its annotations and link.
    ///
    /// Markers nest in a fixed order, innermost first: bold, italic,
    /// strikethrough, inline code, then the link. Underline has no Markdown
    /// form and is dropped.
    pub fn apply_styles(content: &str, annotations: &Annotations, href: Option<&str>) -> String {
        let mut result = content.to_string();

        if annotations.bold {
            result = format!("**{}**", result);
        }

        if annotations.italic {
            result = format!("*{}*", result);
        }

        if annotations.strikethrough {
            result = format!("~~{}~~", result);
        }

        if annotations.code {
            result = format!("`{}`", result);
        }

        if let Some(url) = href.filter(|url| !url.is_empty()) {
            result = format!("[{}]({})", result, url);
        }

        result
    }
}
