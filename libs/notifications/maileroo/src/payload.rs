//! Request payload for the Maileroo "basic email" endpoint.
//!
//! Field names and shapes are the wire contract with the API client.

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// Tag set attached to a send. Values are kept as JSON so that numeric or
/// boolean tags from a directive header survive untouched. Key-only tags
/// carry `null`.
pub type Tags = BTreeMap<String, serde_json::Value>;

/// Tags from decoded JSON.
///
/// An object keeps its entries; a list becomes key-only entries
/// (`["promo"]` -> `{"promo": null}`). Nested values and `null` list items
/// are skipped. Anything else is not a tag set.
pub fn tags_from_json(value: serde_json::Value) -> Option<Tags> {
    use serde_json::Value;

    match value {
        Value::Object(map) => Some(map.into_iter().collect()),
        Value::Array(items) => Some(
            items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(key) => Some(key),
                    Value::Number(n) => Some(n.to_string()),
                    Value::Bool(b) => Some(b.to_string()),
                    Value::Null | Value::Array(_) | Value::Object(_) => None,
                })
                .map(|key| (key, Value::Null))
                .collect(),
        ),
        _ => None,
    }
}

/// Address record as expected by the API.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EmailAddress {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl EmailAddress {
    pub fn new(email: impl Into<String>, name: Option<String>) -> Self {
        Self {
            email: email.into(),
            name,
        }
    }
}

/// Attachment entry. `content` holds raw bytes and is base64-encoded on the wire.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Attachment {
    #[serde(rename = "file_name")]
    pub name: String,
    #[serde(serialize_with = "serialize_base64")]
    pub content: Vec<u8>,
    pub content_type: String,
    pub inline: bool,
}

impl Attachment {
    pub fn from_content(
        name: impl Into<String>,
        content: impl Into<Vec<u8>>,
        content_type: impl Into<String>,
        inline: bool,
    ) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            content_type: content_type.into(),
            inline,
        }
    }
}

fn serialize_base64<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&BASE64.encode(bytes))
}

/// Normalized request built fresh for every send.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Payload {
    pub from: EmailAddress,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub to: Vec<EmailAddress>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cc: Vec<EmailAddress>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bcc: Vec<EmailAddress>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub reply_to: Vec<EmailAddress>,
    pub subject: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plain: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
    /// Custom headers keyed by lower-cased name
    pub headers: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
}

impl Payload {
    /// Empty payload for the given sender; every optional field absent.
    pub fn new(from: EmailAddress) -> Self {
        Self {
            from,
            to: Vec::new(),
            cc: Vec::new(),
            bcc: Vec::new(),
            reply_to: Vec::new(),
            subject: String::new(),
            html: None,
            plain: None,
            attachments: Vec::new(),
            headers: BTreeMap::new(),
            tracking: None,
            tags: None,
        }
    }
}
