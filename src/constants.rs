// src/constants.rs
//! Domain constants that define the operational boundaries of the system.
//!
//! Each constant is named for the domain concept it constrains. Reading
//! them top to bottom tells how a run talks to Notion, which pages it
//! publishes, and what shape the produced moment files take.

// ---------------------------------------------------------------------------
// Notion API boundaries
// ---------------------------------------------------------------------------

/// How many objects the Notion API returns per page of results.
///
/// The Notion API maximum is 100. We use the maximum to minimize
/// round-trips while draining children and database queries.
pub const NOTION_API_PAGE_SIZE: usize = 100;

/// API version sent with every request.
pub const NOTION_API_VERSION: &str = "2022-06-28";

pub const NOTION_API_BASE_URL: &str = "https://api.notion.com/v1";

/// Maximum characters shown when previewing error response bodies.
pub const ERROR_BODY_PREVIEW_LENGTH: usize = 200;

// ---------------------------------------------------------------------------
// Publishing rules
// ---------------------------------------------------------------------------

/// Select property that marks a database row as ready to publish.
pub const PUBLISH_PROPERTY: &str = "Publish";

/// Option of `PUBLISH_PROPERTY` that selects a row.
pub const PUBLISH_VALUE: &str = "Yes";

/// Timestamp layout accepted for both the `Date` property and the page's
/// own `created_time`. Anything else fails the page.
pub const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S.000%z";

// ---------------------------------------------------------------------------
// Output shape
// ---------------------------------------------------------------------------

/// Directory the moment files land in when `--output-dir` is not given.
pub const DEFAULT_OUTPUT_DIR: &str = "content";

/// Number of spaces per list nesting level in rendered Markdown.
pub const LIST_INDENT_SPACES: usize = 4;

/// Length of the page id prefix appended to each file name.
pub const FILE_NAME_ID_PREFIX_LEN: usize = 6;

// ---------------------------------------------------------------------------
// String capacity hints
// ---------------------------------------------------------------------------

/// Estimated characters per block, used to pre-allocate output strings.
pub const CHARS_PER_BLOCK_ESTIMATE: usize = 256;
