// src/api/tree_fetcher.rs
//! Reconstructs a page's block hierarchy from the paginated children listing.
//!
//! The walk is breadth-first: every child of a node is listed before any
//! grandchild. Nodes whose block reports `has_children` are queued and
//! expanded in the order they were discovered.

use super::pagination::fetch_all_pages;
use super::NotionRepository;
use crate::error::{AppError, Result};
use crate::model::BlockTree;
use crate::types::BlockId;
use std::collections::VecDeque;

/// One-shot fetcher for the block tree rooted at a page (or block).
///
/// The tree is only available after `fetch` has completed successfully;
/// asking for it earlier, or after a failed fetch, is an invalid-state error.
pub struct BlockTreeFetcher<'a> {
    repository: &'a dyn NotionRepository,
    root_id: BlockId,
    tree: Option<BlockTree>,
}

impl<'a> BlockTreeFetcher<'a> {
    pub fn new(repository: &'a dyn NotionRepository, root_id: BlockId) -> Self {
        Self {
            repository,
            root_id,
            tree: None,
        }
    }

    pub fn root_id(&self) -> &BlockId {
        &self.root_id
    }

    /// Lists the whole hierarchy and stores it.
    ///
    /// Any repository failure aborts the fetch and is returned unchanged;
    /// the fetcher then holds no tree.
    pub async fn fetch(&mut self) -> Result<&BlockTree> {
        self.tree = None;

        let repository = self.repository;
        let mut tree = BlockTree::new(self.root_id.clone());
        let mut pending = VecDeque::from([tree.root()]);

        while let Some(parent) = pending.pop_front() {
            let parent_id = tree.node(parent).id.clone();
            let children =
                fetch_all_pages(|cursor| repository.list_children(&parent_id, cursor)).await?;
            log::debug!("Block {} has {} child block(s)", parent_id, children.len());

            for index in tree.attach_children(parent, children) {
                if matches!(&tree.node(index).value, Some(block) if block.has_children) {
                    pending.push_back(index);
                }
            }
        }

        log::debug!(
            "Fetched {} block(s) under {}",
            tree.block_count(),
            self.root_id
        );
        Ok(&*self.tree.insert(tree))
    }

    pub fn is_completed(&self) -> bool {
        self.tree.is_some()
    }

    /// The fetched tree.
    pub fn result(&self) -> Result<&BlockTree> {
        self.tree.as_ref().ok_or_else(|| not_fetched(&self.root_id))
    }

    pub fn into_result(self) -> Result<BlockTree> {
        let Self { tree, root_id, .. } = self;
        tree.ok_or_else(|| not_fetched(&root_id))
    }
}

fn not_fetched(root_id: &BlockId) -> AppError {
    AppError::InvalidState(format!(
        "block tree for {} requested before a completed fetch",
        root_id
    ))
}

/// Fetches the block tree under `root_id` in one call.
pub async fn fetch_block_tree(
    repository: &dyn NotionRepository,
    root_id: BlockId,
) -> Result<BlockTree> {
    let mut fetcher = BlockTreeFetcher::new(repository, root_id);
    fetcher.fetch().await?;
    fetcher.into_result()
}
