use crate::types::RichTextItem;
use serde::{Deserialize, Serialize};

/// Text content shared by paragraph, quote and list item blocks
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TextBlockContent {
    pub rich_text: Vec<RichTextItem>,
}

impl TextBlockContent {
    pub fn new(rich_text: Vec<RichTextItem>) -> Self {
        Self { rich_text }
    }
}

/// Code block
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CodeBlock {
    pub rich_text: Vec<RichTextItem>,
    /// Language tag as reported by Notion (`rust`, `plain text`, ...); empty when unset.
    pub language: String,
}

/// Image block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageBlock {
    pub source: FileObject,
    pub caption: Vec<RichTextItem>,
}

impl ImageBlock {
    pub fn url(&self) -> &str {
        self.source.url()
    }
}

/// Where a file lives: uploaded to Notion or linked from elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FileObject {
    /// Notion-hosted file; the URL is signed and expires.
    Hosted {
        url: String,
        expiry_time: Option<String>,
    },
    External { url: String },
}

impl FileObject {
    pub fn url(&self) -> &str {
        match self {
            FileObject::Hosted { url, .. } | FileObject::External { url } => url,
        }
    }
}
