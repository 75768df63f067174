// src/api/adapter.rs
//! Adapter layer for converting wire blocks to the domain model.
//!
//! Known block types must carry a well-formed payload; unknown ones are
//! kept as `Unsupported` so the translator can skip them.

use super::responses::{RawBlock, RawCodePayload, RawImagePayload, RawTextPayload};
use crate::error::AppError;
use crate::model::{Block, BlockKind, CodeBlock, FileObject, ImageBlock, TextBlockContent};
use crate::types::BlockId;
use serde::de::DeserializeOwned;

/// Convert a wire block into a domain `Block`.
pub fn convert_block(mut raw: RawBlock) -> Result<Block, AppError> {
    let id = BlockId::parse(&raw.id)?;

    let kind = match raw.block_type.as_str() {
        "paragraph" => BlockKind::Paragraph(text_content(&mut raw)?),
        "bulleted_list_item" => BlockKind::BulletedListItem(text_content(&mut raw)?),
        "numbered_list_item" => BlockKind::NumberedListItem(text_content(&mut raw)?),
        "quote" => BlockKind::Quote(text_content(&mut raw)?),
        "code" => {
            let payload: RawCodePayload = take_payload(&mut raw)?;
            BlockKind::Code(CodeBlock {
                rich_text: payload.rich_text,
                language: payload.language.unwrap_or_default(),
            })
        }
        "image" => BlockKind::Image(image_content(&mut raw)?),
        other => BlockKind::Unsupported {
            block_type: other.to_string(),
        },
    };

    Ok(Block {
        id,
        has_children: raw.has_children,
        kind,
    })
}

fn text_content(raw: &mut RawBlock) -> Result<TextBlockContent, AppError> {
    let payload: RawTextPayload = take_payload(raw)?;
    Ok(TextBlockContent::new(payload.rich_text))
}

/// Notion-hosted files take precedence over external links.
fn image_content(raw: &mut RawBlock) -> Result<ImageBlock, AppError> {
    let payload: RawImagePayload = take_payload(raw)?;

    let source = match (payload.file, payload.external) {
        (Some(file), _) => FileObject::Hosted {
            url: file.url,
            expiry_time: file.expiry_time,
        },
        (None, Some(external)) => FileObject::External { url: external.url },
        (None, None) => {
            return Err(AppError::MalformedResponse(format!(
                "Image block {} has neither a file nor an external URL",
                raw.id
            )))
        }
    };

    Ok(ImageBlock {
        source,
        caption: payload.caption,
    })
}

/// Removes and decodes the object keyed by the block's own type.
fn take_payload<T: DeserializeOwned>(raw: &mut RawBlock) -> Result<T, AppError> {
    let value = raw.payload.remove(&raw.block_type).ok_or_else(|| {
        AppError::MalformedResponse(format!(
            "Block {} of type '{}' has no '{}' payload",
            raw.id, raw.block_type, raw.block_type
        ))
    })?;

    serde_json::from_value(value).map_err(|e| {
        AppError::MalformedResponse(format!(
            "Block {} has a malformed '{}' payload: {}",
            raw.id, raw.block_type, e
        ))
    })
}
