//! Cross-context message protocol.
//!
//! Requests are tagged by a `type` field on the wire:
//!
//! ```json
//! {"type": "TOGGLE_INSPECT", "enabled": true}
//! {"type": "LOOKUP_CLASS", "className": "p-4"}
//! {"type": "GET_PAGE_CLASSES"}
//! ```
//!
//! Payloads are validated once, here; everything past this module works with
//! the closed [`Request`] enum.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Request {
    ToggleInspect {
        enabled: bool,
    },
    LookupClass {
        #[serde(rename = "className")]
        class_name: String,
    },
    GetPageClasses,
}

/// Discriminant of a [`Request`], used as the dispatch key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    ToggleInspect,
    LookupClass,
    GetPageClasses,
}

impl Request {
    pub fn kind(&self) -> MessageKind {
        match self {
            Request::ToggleInspect { .. } => MessageKind::ToggleInspect,
            Request::LookupClass { .. } => MessageKind::LookupClass,
            Request::GetPageClasses => MessageKind::GetPageClasses,
        }
    }

    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(Error::Message)
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        serde_json::from_value(value).map_err(Error::Message)
    }

    pub fn to_json(&self) -> String {
        // A derived Serialize on strings and bools cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Acknowledgement of `TOGGLE_INSPECT`.
///
/// The page context reports the resulting state in `active`; the background
/// relay acknowledges before the page has seen the message and leaves it out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleAck {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

/// Reply to `LOOKUP_CLASS`; `css` is `null` on a miss.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassLookup {
    #[serde(rename = "className")]
    pub class_name: String,
    pub css: Option<String>,
}

/// Reply to `GET_PAGE_CLASSES`: sorted, de-duplicated utility classes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageClasses {
    pub classes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Response {
    Toggle(ToggleAck),
    Lookup(ClassLookup),
    PageClasses(PageClasses),
}

impl Response {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

impl From<ToggleAck> for Response {
    fn from(ack: ToggleAck) -> Self {
        Response::Toggle(ack)
    }
}

impl From<ClassLookup> for Response {
    fn from(lookup: ClassLookup) -> Self {
        Response::Lookup(lookup)
    }
}

impl From<PageClasses> for Response {
    fn from(classes: PageClasses) -> Self {
        Response::PageClasses(classes)
    }
}
