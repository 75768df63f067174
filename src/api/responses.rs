// src/api/responses.rs
//! Wire-format types for Notion API responses.
//!
//! Blocks are decoded in two steps: first into `RawBlock`, which keeps the
//! type-keyed payload as JSON, then into the domain `Block` by the adapter.
//! That keeps unknown block types from failing the whole listing.

use crate::types::RichTextItem;
use serde::Deserialize;
use serde_json::{Map, Value};

pub use notion_client::objects::error::Error as NotionError;

/// Envelope of every list endpoint (`/blocks/{id}/children`, `/databases/{id}/query`).
#[derive(Debug, Clone, Deserialize)]
pub struct ListResponse<T> {
    #[serde(default)]
    pub object: String,
    pub results: Vec<T>,
    #[serde(default)]
    pub next_cursor: Option<String>,
    #[serde(default)]
    pub has_more: bool,
}

/// A block as sent by the API, before its payload is interpreted.
#[derive(Debug, Clone, Deserialize)]
pub struct RawBlock {
    pub id: String,
    #[serde(default)]
    pub has_children: bool,
    #[serde(rename = "type")]
    pub block_type: String,
    /// Everything else, including the object keyed by `block_type`.
    #[serde(flatten)]
    pub payload: Map<String, Value>,
}

/// Payload of paragraph, quote and list item blocks.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTextPayload {
    pub rich_text: Vec<RichTextItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawCodePayload {
    pub rich_text: Vec<RichTextItem>,
    #[serde(default)]
    pub language: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawImagePayload {
    #[serde(default)]
    pub file: Option<RawFileLocation>,
    #[serde(default)]
    pub external: Option<RawFileLocation>,
    #[serde(default)]
    pub caption: Vec<RichTextItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawFileLocation {
    pub url: String,
    #[serde(default)]
    pub expiry_time: Option<String>,
}

pub type BlockChildrenResponse = ListResponse<RawBlock>;
pub type QueryDatabaseResponse = ListResponse<crate::model::Page>;
