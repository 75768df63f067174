// src/formatting/rich_text/mod.rs
//! Handles formatting of Notion RichTextItem arrays.
//!
//! Two flavours exist: Markdown with inline styling for prose blocks, and
//! bare text for code blocks and page properties.

mod annotations;

use annotations::MarkdownStyleRenderer;

use crate::types::RichTextItem;

/// Formats rich text runs into inline Markdown, concatenated without separators.
pub fn rich_text_to_markdown(items: &[RichTextItem]) -> String {
    items
        .iter()
        .map(|item| {
            MarkdownStyleRenderer::apply_styles(
                &item.plain_text,
                &item.annotations,
                item.href.as_deref(),
            )
        })
        .collect()
}

/// Concatenates the unformatted text of every run.
pub fn plain_text(items: &[RichTextItem]) -> String {
    items.iter().map(|item| item.plain_text.as_str()).collect()
}
