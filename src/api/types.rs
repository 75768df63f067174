// src/api/types.rs
//! Type definitions for the Notion API module.

use crate::constants::{PUBLISH_PROPERTY, PUBLISH_VALUE};
use serde::{Deserialize, Serialize};

/// One page of a paginated listing, already converted to domain values.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedResponse<T> {
    pub results: Vec<T>,
    pub next_cursor: Option<String>,
    pub has_more: bool,
}

impl<T> PaginatedResponse<T> {
    /// A single, final page holding `results`.
    pub fn last(results: Vec<T>) -> Self {
        Self {
            results,
            next_cursor: None,
            has_more: false,
        }
    }

    /// A page that is followed by another one at `cursor`.
    pub fn with_more(results: Vec<T>, cursor: impl Into<String>) -> Self {
        Self {
            results,
            next_cursor: Some(cursor.into()),
            has_more: true,
        }
    }
}

/// Filter sent with a database query.
///
/// Only single select-equality filters are needed to pick published rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseFilter {
    pub property: String,
    pub select: SelectCondition,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectCondition {
    pub equals: String,
}

impl DatabaseFilter {
    pub fn select_equals(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            select: SelectCondition {
                equals: value.into(),
            },
        }
    }

    /// Rows whose `Publish` select is `Yes`.
    pub fn published() -> Self {
        Self::select_equals(PUBLISH_PROPERTY, PUBLISH_VALUE)
    }
}

/// Body of `POST /databases/{id}/query`.
#[derive(Debug, Serialize)]
pub(crate) struct QueryRequest<'a> {
    pub filter: &'a DatabaseFilter,
    pub page_size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_cursor: Option<String>,
}
