//! Extraction of the flat moment metadata record from a page's properties.
//!
//! Every required property must be present with the expected type; any
//! deviation fails the page before its content is fetched.

use super::{Page, PropertyValue};
use crate::constants::TIME_FORMAT;
use crate::error::{AppError, Result};
use crate::formatting::plain_text;
use crate::types::PageId;
use chrono::{DateTime, FixedOffset};
use std::borrow::Cow;

/// Metadata of one moment, read from the database row.
#[derive(Debug, Clone, PartialEq)]
pub struct PageProperties {
    pub page_id: PageId,
    /// The `Date` property when set, otherwise the page's creation time.
    pub created_time: DateTime<FixedOffset>,
    /// No author property exists on the database; always `None`.
    pub author: Option<String>,
    pub signature: String,
    pub tags: Vec<String>,
    pub note: Option<String>,
    pub resource: String,
    pub resource_text: String,
    /// Read for validation only; the front matter leaves `link_logo` empty.
    pub resource_image: String,
}

impl PageProperties {
    pub fn from_page(page: &Page) -> Result<Self> {
        let reader = PropertyReader { page };

        Ok(Self {
            page_id: page.id.clone(),
            created_time: reader.creation_timestamp()?,
            author: None,
            signature: reader.rich_text("Signature")?,
            tags: reader.multi_select("Tags")?,
            note: reader.optional_rich_text("Note")?,
            resource: reader.rich_text("Resource")?,
            resource_text: reader.rich_text("Resource Text")?,
            resource_image: reader.rich_text("Resource Image")?,
        })
    }
}

struct PropertyReader<'a> {
    page: &'a Page,
}

impl<'a> PropertyReader<'a> {
    fn required(&self, name: &str) -> Result<&'a PropertyValue> {
        self.page
            .property(name)
            .ok_or_else(|| AppError::MissingProperty {
                page_id: self.page.id.to_string(),
                name: name.to_string(),
            })
    }

    fn unexpected(&self, name: &str, expected: &'static str, found: &PropertyValue) -> AppError {
        AppError::UnexpectedPropertyType {
            page_id: self.page.id.to_string(),
            name: name.to_string(),
            expected,
            found: found.type_name(),
        }
    }

    fn rich_text(&self, name: &str) -> Result<String> {
        match self.required(name)? {
            PropertyValue::RichText { rich_text } => Ok(plain_text(rich_text)),
            other => Err(self.unexpected(name, "rich_text", other)),
        }
    }

    fn optional_rich_text(&self, name: &str) -> Result<Option<String>> {
        match self.page.property(name) {
            None => Ok(None),
            Some(PropertyValue::RichText { rich_text }) => Ok(Some(plain_text(rich_text))),
            Some(other) => Err(self.unexpected(name, "rich_text", other)),
        }
    }

    fn multi_select(&self, name: &str) -> Result<Vec<String>> {
        match self.required(name)? {
            PropertyValue::MultiSelect { multi_select } => Ok(multi_select
                .iter()
                .map(|option| option.name.clone())
                .collect()),
            other => Err(self.unexpected(name, "multi_select", other)),
        }
    }

    /// `Date` must exist; its start wins over the page creation time.
    fn creation_timestamp(&self) -> Result<DateTime<FixedOffset>> {
        let explicit = match self.required("Date")? {
            PropertyValue::Date { date } => date.as_ref().and_then(|d| d.start.as_deref()),
            other => return Err(self.unexpected("Date", "date", other)),
        };

        parse_timestamp(explicit.unwrap_or(&self.page.created_time))
    }
}

/// Parses a timestamp in the publishing format.
///
/// A trailing `Z` is read as `+0000` and a `+hh:mm` offset as `+hhmm`.
pub fn parse_timestamp(value: &str) -> Result<DateTime<FixedOffset>> {
    DateTime::parse_from_str(&normalize_offset(value), TIME_FORMAT).map_err(|source| {
        AppError::TimestampParse {
            value: value.to_string(),
            format: TIME_FORMAT,
            source,
        }
    })
}

fn normalize_offset(value: &str) -> Cow<'_, str> {
    if let Some(stripped) = value.strip_suffix('Z') {
        return Cow::Owned(format!("{}+0000", stripped));
    }

    let bytes = value.as_bytes();
    let len = bytes.len();
    if len >= 6 && matches!(bytes[len - 6], b'+' | b'-') && bytes[len - 3] == b':' {
        let mut compact = String::with_capacity(len - 1);
        compact.push_str(&value[..len - 3]);
        compact.push_str(&value[len - 2..]);
        return Cow::Owned(compact);
    }

    Cow::Borrowed(value)
}
