use super::blocks::*;
use crate::types::BlockId;
use serde::{Deserialize, Serialize};

/// One content block as returned by the children endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub id: BlockId,
    pub has_children: bool,
    pub kind: BlockKind,
}

/// The block kinds the Markdown translator understands.
///
/// Anything else Notion sends (headings, toggles, tables, ...) arrives as
/// `Unsupported` and is skipped during translation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BlockKind {
    Paragraph(TextBlockContent),
    BulletedListItem(TextBlockContent),
    NumberedListItem(TextBlockContent),
    Quote(TextBlockContent),
    Code(CodeBlock),
    Image(ImageBlock),
    Unsupported { block_type: String },
}

impl Block {
    pub fn new(id: BlockId, kind: BlockKind) -> Self {
        Self {
            id,
            has_children: false,
            kind,
        }
    }

    /// Marks the block as having children to fetch.
    pub fn with_children(mut self) -> Self {
        self.has_children = true;
        self
    }

    /// Get block type name as used by the Notion API
    pub fn block_type(&self) -> &str {
        match &self.kind {
            BlockKind::Paragraph(_) => "paragraph",
            BlockKind::BulletedListItem(_) => "bulleted_list_item",
            BlockKind::NumberedListItem(_) => "numbered_list_item",
            BlockKind::Quote(_) => "quote",
            BlockKind::Code(_) => "code",
            BlockKind::Image(_) => "image",
            BlockKind::Unsupported { block_type } => block_type,
        }
    }

    /// Whether this block takes part in a list run.
    pub fn is_list_item(&self) -> bool {
        matches!(
            self.kind,
            BlockKind::BulletedListItem(_) | BlockKind::NumberedListItem(_)
        )
    }
}
