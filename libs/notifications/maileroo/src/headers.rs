//! Header classification.
//!
//! Every message header falls into exactly one class: a Maileroo control
//! directive, a reserved protocol header that the API manages itself, or a
//! custom header forwarded as-is.

use crate::models::Header;
use crate::payload::{Payload, Tags, tags_from_json};
use tracing::debug;

/// Per-message tracking toggle.
pub const TRACK_HEADER: &str = "x-maileroo-track";
/// Per-message tag set, as a JSON object or list.
pub const TAGS_HEADER: &str = "x-maileroo-tags";
/// Reference id recorded on the message after a successful send.
pub const REF_ID_HEADER: &str = "x-maileroo-ref-id";
/// Name the reference id header is written under.
pub const REF_ID_HEADER_NAME: &str = "X-Maileroo-Ref-Id";

/// Headers never forwarded as custom headers (lower-case).
pub const RESERVED_HEADERS: &[&str] = &[
    "mime-version",
    "content-type",
    "content-transfer-encoding",
    "content-disposition",
    "content-id",
    "content-description",
    "message-id",
    "date",
    "from",
    "to",
    "cc",
    "bcc",
    "subject",
    "reply-to",
    "return-path",
    "received",
    "delivered-to",
    "authentication-results",
    "dkim-signature",
    REF_ID_HEADER,
    TRACK_HEADER,
];

/// Outcome of classifying one header.
#[derive(Debug, Clone, PartialEq)]
pub enum HeaderClass {
    /// `x-maileroo-track`: the parsed flag
    Tracking(bool),
    /// `x-maileroo-tags`: parsed tags, `None` when the value is not a JSON object or list
    Tags(Option<Tags>),
    /// Protocol header handled by the API
    Reserved,
    /// Forwarded under its lower-cased name
    Custom { name: String, value: String },
}

/// Whether a string enables a flag: exactly `true`, `1` or `yes`.
pub fn is_truthy(value: &str) -> bool {
    matches!(value, "true" | "1" | "yes")
}

pub fn is_reserved(lowercase_name: &str) -> bool {
    RESERVED_HEADERS.contains(&lowercase_name)
}

/// Classify a single header by its case-insensitive name.
pub fn classify(header: &Header) -> HeaderClass {
    let name = header.name.to_ascii_lowercase();

    match name.as_str() {
        TRACK_HEADER => HeaderClass::Tracking(is_truthy(&header.value)),
        TAGS_HEADER => HeaderClass::Tags(parse_tags(&header.value)),
        n if is_reserved(n) => HeaderClass::Reserved,
        _ => HeaderClass::Custom {
            name,
            value: header.value.clone(),
        },
    }
}

/// Parse a tags directive: a JSON object, or a list of key-only tags.
pub fn parse_tags(value: &str) -> Option<Tags> {
    let decoded = match serde_json::from_str(value) {
        Ok(decoded) => decoded,
        Err(err) => {
            debug!(error = %err, "Ignoring malformed {} header", TAGS_HEADER);
            return None;
        }
    };

    let tags = tags_from_json(decoded);
    if tags.is_none() {
        debug!("Ignoring {} header that is not an object or list", TAGS_HEADER);
    }
    tags
}

/// Visit headers in order and apply each to the payload.
///
/// Later directives of the same kind overwrite earlier ones. A malformed tags
/// directive leaves previously applied tags untouched.
pub fn apply_headers(payload: &mut Payload, headers: &[Header]) {
    for header in headers {
        match classify(header) {
            HeaderClass::Tracking(enabled) => payload.tracking = Some(enabled),
            HeaderClass::Tags(Some(tags)) => payload.tags = Some(tags),
            HeaderClass::Tags(None) | HeaderClass::Reserved => {}
            HeaderClass::Custom { name, value } => {
                payload.headers.insert(name, value);
            }
        }
    }
}
