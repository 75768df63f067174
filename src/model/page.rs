use crate::types::{DateValue, PageId, RichTextItem, SelectOption};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A database row as returned by the query endpoint.
///
/// `created_time` stays a raw string so that it can be parsed against the
/// publishing timestamp format later, where a mismatch is a page error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub id: PageId,
    pub created_time: String,
    #[serde(default)]
    pub properties: HashMap<String, PropertyValue>,
}

impl Page {
    pub fn property(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name)
    }
}

/// Property value keyed by the API `type` tag.
///
/// Only the property types the moment front matter reads are modelled;
/// everything else deserializes to `Unsupported`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PropertyValue {
    Title {
        title: Vec<RichTextItem>,
    },
    RichText {
        rich_text: Vec<RichTextItem>,
    },
    MultiSelect {
        multi_select: Vec<SelectOption>,
    },
    Select {
        select: Option<SelectOption>,
    },
    Date {
        date: Option<DateValue>,
    },
    Checkbox {
        checkbox: bool,
    },
    Url {
        url: Option<String>,
    },
    #[serde(other)]
    Unsupported,
}

impl PropertyValue {
    /// Returns the Notion API type name for this property value.
    pub fn type_name(&self) -> &'static str {
        match self {
            PropertyValue::Title { .. } => "title",
            PropertyValue::RichText { .. } => "rich_text",
            PropertyValue::MultiSelect { .. } => "multi_select",
            PropertyValue::Select { .. } => "select",
            PropertyValue::Date { .. } => "date",
            PropertyValue::Checkbox { .. } => "checkbox",
            PropertyValue::Url { .. } => "url",
            PropertyValue::Unsupported => "unsupported",
        }
    }
}
