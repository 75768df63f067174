// src/formatting/front_matter.rs
//! Composes the final moment document: YAML-ish front matter plus body.
//!
//! The layout is fixed by the static site that consumes these files, down to
//! the trailing space after `link_logo:`. Values are inserted verbatim; quotes
//! inside them are not escaped.

use super::translator::TranslatedDocument;
use crate::error::AppError;
use crate::model::PageProperties;
use chrono::{DateTime, FixedOffset};
use handlebars::Handlebars;
use serde_json::json;

const TEMPLATE_NAME: &str = "moment";

/// Written for a page without a `Note` property; existing moments carry it.
const ABSENT_NOTE: &str = "None";

const MOMENT_TEMPLATE: &str = "---\n\
top:\n\
name: \"{{name}}\"\n\
avatar:\n\
signature: \"{{signature}}\"\n\
\n\
date: {{date}}\n\
\n\
tags:\n\
{{tag_part}}\n\
\n\
pictures:\n\
{{picture_part}}\n\
\n\
link: {{link}}\n\
link_text: {{link_text}}\n\
link_logo: \n\
\n\
note: \"{{note}}\"\n\
---";

/// Renders moment documents from page properties and translated content.
pub struct MomentTemplate {
    registry: Handlebars<'static>,
}

impl MomentTemplate {
    pub fn new() -> Result<Self, AppError> {
        let mut registry = Handlebars::new();
        registry.register_escape_fn(handlebars::no_escape);
        registry.set_strict_mode(true);
        registry
            .register_template_string(TEMPLATE_NAME, MOMENT_TEMPLATE)
            .map_err(|e| AppError::TemplateRenderError {
                name: TEMPLATE_NAME.to_string(),
                message: e.to_string(),
            })?;

        Ok(Self { registry })
    }

    /// Front matter followed by a newline and the Markdown body.
    pub fn render(
        &self,
        properties: &PageProperties,
        document: &TranslatedDocument,
    ) -> Result<String, AppError> {
        let data = json!({
            "name": properties.author.as_deref().unwrap_or(""),
            "signature": properties.signature,
            "date": front_matter_date(&properties.created_time),
            "tag_part": bullet_lines(&properties.tags),
            "picture_part": bullet_lines(&document.images),
            "link": quoted_or_empty(&properties.resource),
            "link_text": quoted_or_empty(&properties.resource_text),
            "note": properties.note.as_deref().unwrap_or(ABSENT_NOTE),
        });

        let front_matter = self
            .registry
            .render(TEMPLATE_NAME, &data)
            .map_err(|e| AppError::TemplateRenderError {
                name: TEMPLATE_NAME.to_string(),
                message: e.to_string(),
            })?;

        let mut content =
            String::with_capacity(front_matter.len() + 1 + document.md_text.len());
        content.push_str(&front_matter);
        content.push('\n');
        content.push_str(&document.md_text);
        Ok(content)
    }
}

/// One-shot rendering with a freshly built template.
pub fn compose_moment_markdown(
    properties: &PageProperties,
    document: &TranslatedDocument,
) -> Result<String, AppError> {
    MomentTemplate::new()?.render(properties, document)
}

/// `YYYY-MM-DDTHH:MM:SS±HH:00`: the offset keeps only its hours.
fn front_matter_date(created: &DateTime<FixedOffset>) -> String {
    let mut stamp = created.format("%Y-%m-%dT%H:%M:%S%z").to_string();
    stamp.truncate(stamp.len().saturating_sub(2));
    stamp.push_str(":00");
    stamp
}

fn bullet_lines(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("  - {}", item))
        .collect::<Vec<_>>()
        .join("\n")
}

fn quoted_or_empty(value: &str) -> String {
    if value.is_empty() {
        String::new()
    } else {
        format!("\"{}\"", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::parse_timestamp;
    use crate::types::PageId;
    use pretty_assertions::assert_eq;

    fn properties() -> PageProperties {
        PageProperties {
            page_id: PageId::parse("abcdef00000000000000000000000001").unwrap(),
            created_time: parse_timestamp("2024-03-05T10:20:00.000+08:00").unwrap(),
            author: None,
            signature: "on the road".to_string(),
            tags: vec!["travel".to_string(), "food".to_string()],
            note: Some("hi".to_string()),
            resource: "https://example.com".to_string(),
            resource_text: "Example".to_string(),
            resource_image: String::new(),
        }
    }

    #[test]
    fn test_full_document_layout() {
        let document = TranslatedDocument {
            md_text: "Hello\n\n- a".to_string(),
            images: vec!["https://img/1.png".to_string()],
        };

        let rendered = compose_moment_markdown(&properties(), &document).unwrap();
        let expected = "---\n\
top:\n\
name: \"\"\n\
avatar:\n\
signature: \"on the road\"\n\
\n\
date: 2024-03-05T10:20:00+08:00\n\
\n\
tags:\n  - travel\n  - food\n\
\n\
pictures:\n  - https://img/1.png\n\
\n\
link: \"https://example.com\"\n\
link_text: \"Example\"\n\
link_logo: \n\
\n\
note: \"hi\"\n\
---\n\
Hello\n\n- a";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_empty_collections_and_links() {
        let mut props = properties();
        props.tags.clear();
        props.resource.clear();
        props.resource_text.clear();
        props.note = None;

        let rendered = compose_moment_markdown(&props, &TranslatedDocument::default()).unwrap();
        assert!(rendered.contains("tags:\n\n\npictures:\n\n\nlink: \nlink_text: \nlink_logo: \n"));
        assert!(rendered.ends_with("note: \"None\"\n---\n"));
    }

    #[test]
    fn test_empty_note_differs_from_absent_note() {
        let mut props = properties();
        props.note = Some(String::new());

        let rendered = compose_moment_markdown(&props, &TranslatedDocument::default()).unwrap();
        assert!(rendered.ends_with("note: \"\"\n---\n"));
    }

    #[test]
    fn test_values_are_not_escaped() {
        let mut props = properties();
        props.signature = "<b>{braces}</b> & \"quotes\"".to_string();

        let rendered = compose_moment_markdown(&props, &TranslatedDocument::default()).unwrap();
        assert!(rendered.contains("signature: \"<b>{braces}</b> & \"quotes\"\"\n"));
    }

    #[test]
    fn test_date_keeps_only_offset_hours() {
        let utc = parse_timestamp("2024-03-05T10:20:00.000Z").unwrap();
        assert_eq!(front_matter_date(&utc), "2024-03-05T10:20:00+00:00");

        let india = parse_timestamp("2024-03-05T10:20:00.000+05:30").unwrap();
        assert_eq!(front_matter_date(&india), "2024-03-05T10:20:00+05:00");
    }
}
