// src/processor.rs
//! Turns one published database row into a moment document.
//!
//! Properties are read when the processor is created, so a row with broken
//! metadata fails before any of its content is requested.

use crate::api::{fetch_block_tree, NotionRepository};
use crate::error::Result;
use crate::formatting::{translate, MomentTemplate};
use crate::model::{Page, PageProperties};
use crate::output::moment_file_name;
use crate::types::BlockId;

/// A rendered moment, ready to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct MomentDocument {
    pub file_name: String,
    pub content: String,
    pub properties: PageProperties,
}

pub struct PageProcessor<'a> {
    repository: &'a dyn NotionRepository,
    properties: PageProperties,
}

impl<'a> PageProcessor<'a> {
    /// Extracts the page's properties; fails on missing or mistyped ones.
    pub fn new(page: &Page, repository: &'a dyn NotionRepository) -> Result<Self> {
        Ok(Self {
            repository,
            properties: PageProperties::from_page(page)?,
        })
    }

    pub fn properties(&self) -> &PageProperties {
        &self.properties
    }

    /// Fetches the page content, translates it and assembles the document.
    pub async fn process(self, template: &MomentTemplate) -> Result<MomentDocument> {
        let page_id = &self.properties.page_id;
        log::debug!("Fetching content of page {}", page_id);

        let tree = fetch_block_tree(self.repository, BlockId::from(page_id)).await?;
        let translated = translate(&tree);
        log::debug!(
            "Page {}: {} block(s), {} image(s)",
            page_id,
            tree.block_count(),
            translated.images.len()
        );

        let content = template.render(&self.properties, &translated)?;
        let file_name = moment_file_name(&self.properties.created_time, page_id);

        Ok(MomentDocument {
            file_name,
            content,
            properties: self.properties,
        })
    }
}

/// Processes a single page with a one-off template.
pub async fn process_page(page: &Page, repository: &dyn NotionRepository) -> Result<MomentDocument> {
    let template = MomentTemplate::new()?;
    PageProcessor::new(page, repository)?.process(&template).await
}
