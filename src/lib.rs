// src/lib.rs
//! notion2moment library: publishes Notion database pages as Markdown moments.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling**: `AppError`, `ValidationError`, `NotionClientError`
//! - **Configuration**: `CommandLineInput`, `PipelineConfig`
//! - **Domain model**: `Block`, `BlockKind`, `BlockTree`, `Page`, `PageProperties`
//! - **Domain types**: `PageId`, `BlockId`, `DatabaseId`, `ApiKey`, `RichTextItem`
//! - **API client**: `NotionRepository`, `NotionHttpClient`, `BlockTreeFetcher`
//! - **Formatting**: `translate`, `rich_text_to_markdown`, `MomentTemplate`
//! - **Processing and output**: `PageProcessor`, `OutputPlan`, `deliver`

#[cfg(feature = "bench")]
pub mod api;
#[cfg(not(feature = "bench"))]
mod api;

mod config;
mod constants;
mod error;

#[cfg(feature = "bench")]
pub mod formatting;
#[cfg(not(feature = "bench"))]
mod formatting;

#[cfg(feature = "bench")]
pub mod model;
#[cfg(not(feature = "bench"))]
mod model;

mod output;
mod pipeline;
mod processor;

#[cfg(feature = "bench")]
pub mod types;
#[cfg(not(feature = "bench"))]
mod types;

// --- Error Handling ---
pub use crate::error::{AppError, NotionClientError, NotionErrorCode, Result};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{CommandLineInput, PipelineConfig, DATABASE_ENV_VAR, SECRET_ENV_VAR};
pub use crate::constants::{DEFAULT_OUTPUT_DIR, TIME_FORMAT};

// --- Domain Model ---
pub use crate::model::{
    parse_timestamp, Block, BlockKind, BlockNode, BlockTree, CodeBlock, FileObject, ImageBlock,
    NodeIndex, Page, PageProperties, PropertyValue, TextBlockContent,
};

// --- Domain Types ---
pub use crate::types::{
    Annotations, ApiKey, BlockId, DatabaseId, DateValue, PageId, RichTextItem, SelectOption,
};

// --- API Client ---
pub use crate::api::{
    convert_block, fetch_all_pages, fetch_block_tree,
    parser::{parse_api_response, parse_blocks_pagination, parse_pages_pagination},
    query_published_pages, ApiResponse, BlockTreeFetcher, DatabaseFilter, NotionHttpClient,
    NotionRepository, PaginatedResponse, SelectCondition,
};

// --- Formatting ---
pub use crate::formatting::{
    compose_moment_markdown, plain_text, render_list_run, rich_text_to_markdown, translate,
    ListRun, MomentTemplate, TranslatedDocument,
};

// --- Processing and Output ---
pub use crate::output::{
    deliver, moment_file_name, moment_path, DeliveryTarget, OutputPlan, OutputReport,
};
pub use crate::processor::{process_page, MomentDocument, PageProcessor};

// --- Pipeline Traits ---
pub use crate::pipeline::{publish_moments, MomentComposer, MomentDelivery, MomentSource};
