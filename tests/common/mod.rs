// tests/common/mod.rs
//! Shared fixtures: block builders and an in-memory repository.

#![allow(dead_code)]

use notion2moment::{
    AppError, Block, BlockId, BlockKind, CodeBlock, DatabaseFilter, DatabaseId, FileObject,
    ImageBlock, NotionRepository, Page, PaginatedResponse, RichTextItem, TextBlockContent,
};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

pub fn block_id(n: u32) -> BlockId {
    BlockId::parse(&format!("{:032x}", n)).unwrap()
}

pub fn text(s: &str) -> TextBlockContent {
    TextBlockContent::new(vec![RichTextItem::plain_text(s)])
}

pub fn paragraph(n: u32, s: &str) -> Block {
    Block::new(block_id(n), BlockKind::Paragraph(text(s)))
}

pub fn bulleted(n: u32, s: &str) -> Block {
    Block::new(block_id(n), BlockKind::BulletedListItem(text(s)))
}

pub fn numbered(n: u32, s: &str) -> Block {
    Block::new(block_id(n), BlockKind::NumberedListItem(text(s)))
}

pub fn quote(n: u32, s: &str) -> Block {
    Block::new(block_id(n), BlockKind::Quote(text(s)))
}

pub fn code(n: u32, language: &str, source: &str) -> Block {
    Block::new(
        block_id(n),
        BlockKind::Code(CodeBlock {
            rich_text: vec![RichTextItem::plain_text(source)],
            language: language.to_string(),
        }),
    )
}

pub fn image(n: u32, url: &str) -> Block {
    Block::new(
        block_id(n),
        BlockKind::Image(ImageBlock {
            source: FileObject::Hosted {
                url: url.to_string(),
                expiry_time: None,
            },
            caption: Vec::new(),
        }),
    )
}

/// A database row carrying every property the moment front matter reads.
///
/// `date` is the `Date` property's start, or `None` for an empty date.
pub fn moment_page(id: &str, created_time: &str, date: Option<&str>) -> Page {
    let rich = |s: &str| serde_json::json!({"type": "rich_text", "rich_text": [{"plain_text": s}]});
    let date_value = match date {
        Some(start) => serde_json::json!({"start": start, "end": null}),
        None => serde_json::Value::Null,
    };

    serde_json::from_value(serde_json::json!({
        "object": "page",
        "id": id,
        "created_time": created_time,
        "properties": {
            "Signature": rich("a quiet morning"),
            "Resource": rich(""),
            "Resource Text": rich(""),
            "Resource Image": rich(""),
            "Tags": {"type": "multi_select", "multi_select": [{"name": "life"}, {"name": "coffee"}]},
            "Date": {"type": "date", "date": date_value},
            "Publish": {"type": "select", "select": {"name": "Yes"}}
        }
    }))
    .unwrap()
}

/// In-memory `NotionRepository` serving pre-arranged result pages.
///
/// Cursors are `cursor-<n>`, pointing at the n-th result page of a listing.
#[derive(Default)]
pub struct MockRepository {
    children: HashMap<BlockId, Vec<Vec<Block>>>,
    query_results: Vec<Vec<Page>>,
    failing: HashSet<BlockId>,
    calls: Mutex<Vec<(BlockId, Option<String>)>>,
    filters: Mutex<Vec<DatabaseFilter>>,
}

impl MockRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_children(self, parent: &BlockId, blocks: Vec<Block>) -> Self {
        self.with_paged_children(parent, vec![blocks])
    }

    pub fn with_paged_children(mut self, parent: &BlockId, pages: Vec<Vec<Block>>) -> Self {
        self.children.insert(parent.clone(), pages);
        self
    }

    pub fn with_query_results(mut self, pages: Vec<Vec<Page>>) -> Self {
        self.query_results = pages;
        self
    }

    pub fn failing_on(mut self, id: &BlockId) -> Self {
        self.failing.insert(id.clone());
        self
    }

    /// Every `list_children` call in order, with its cursor.
    pub fn calls(&self) -> Vec<(BlockId, Option<String>)> {
        self.calls.lock().unwrap().clone()
    }

    /// Blocks whose first result page was requested, in request order.
    pub fn listed_parents(&self) -> Vec<BlockId> {
        self.calls()
            .into_iter()
            .filter(|(_, cursor)| cursor.is_none())
            .map(|(id, _)| id)
            .collect()
    }

    pub fn filters(&self) -> Vec<DatabaseFilter> {
        self.filters.lock().unwrap().clone()
    }
}

fn page_at<T: Clone>(pages: &[Vec<T>], cursor: Option<&str>) -> PaginatedResponse<T> {
    let index = cursor
        .and_then(|c| c.strip_prefix("cursor-"))
        .and_then(|n| n.parse::<usize>().ok())
        .unwrap_or(0);

    let results = pages.get(index).cloned().unwrap_or_default();
    if index + 1 < pages.len() {
        PaginatedResponse::with_more(results, format!("cursor-{}", index + 1))
    } else {
        PaginatedResponse::last(results)
    }
}

#[async_trait::async_trait]
impl NotionRepository for MockRepository {
    async fn list_children(
        &self,
        block_id: &BlockId,
        cursor: Option<String>,
    ) -> Result<PaginatedResponse<Block>, AppError> {
        self.calls
            .lock()
            .unwrap()
            .push((block_id.clone(), cursor.clone()));

        if self.failing.contains(block_id) {
            return Err(AppError::MalformedResponse(format!(
                "listing {} failed",
                block_id
            )));
        }

        Ok(match self.children.get(block_id) {
            Some(pages) => page_at(pages, cursor.as_deref()),
            None => PaginatedResponse::last(Vec::new()),
        })
    }

    async fn query_pages(
        &self,
        _database_id: &DatabaseId,
        filter: &DatabaseFilter,
        cursor: Option<String>,
    ) -> Result<PaginatedResponse<Page>, AppError> {
        self.filters.lock().unwrap().push(filter.clone());
        Ok(page_at(&self.query_results, cursor.as_deref()))
    }
}
