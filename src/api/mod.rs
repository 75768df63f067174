// src/api/mod.rs
//! Notion API interaction: the ability to retrieve content from a workspace.
//!
//! Business logic sees only the `NotionRepository` trait; HTTP, wire
//! formats and pagination stay behind it.

mod adapter;
pub mod client;
mod pagination;
pub mod parser;
mod responses;
mod tree_fetcher;
mod types;

use crate::error::AppError;
use crate::model::{Block, Page};
use crate::types::{BlockId, DatabaseId};

/// The ability to retrieve content from a Notion workspace.
///
/// Both primitives return one page of results; callers drain them with
/// `fetch_all_pages`.
#[async_trait::async_trait]
pub trait NotionRepository: Send + Sync {
    /// Lists the direct children of a block (or page), starting at `cursor`.
    async fn list_children(
        &self,
        block_id: &BlockId,
        cursor: Option<String>,
    ) -> Result<PaginatedResponse<Block>, AppError>;

    /// Queries the rows of a database that match `filter`, starting at `cursor`.
    async fn query_pages(
        &self,
        database_id: &DatabaseId,
        filter: &DatabaseFilter,
        cursor: Option<String>,
    ) -> Result<PaginatedResponse<Page>, AppError>;
}

/// Every row of `database_id` marked for publishing, across all result pages.
pub async fn query_published_pages(
    repository: &dyn NotionRepository,
    database_id: &DatabaseId,
) -> Result<Vec<Page>, AppError> {
    let filter = DatabaseFilter::published();
    fetch_all_pages(|cursor| repository.query_pages(database_id, &filter, cursor)).await
}

// Re-export the public interface
pub use adapter::convert_block;
pub use client::{ApiResponse, NotionHttpClient};
pub use pagination::fetch_all_pages;
pub use tree_fetcher::{fetch_block_tree, BlockTreeFetcher};
pub use types::{DatabaseFilter, PaginatedResponse, SelectCondition};
