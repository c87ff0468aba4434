//! Message parts to API attachments.

use crate::models::{DataPart, MessagePart};
use crate::payload::Attachment;

/// Filename used when a part carries none.
pub const DEFAULT_ATTACHMENT_NAME: &str = "attachment";

/// Map one binary part.
pub fn map_attachment(part: &DataPart) -> Attachment {
    let name = part
        .filename
        .clone()
        .unwrap_or_else(|| DEFAULT_ATTACHMENT_NAME.to_string());
    let content_type = format!("{}/{}", part.media_type, part.media_subtype);

    Attachment::from_content(
        name,
        part.body.clone(),
        content_type,
        part.disposition == "inline",
    )
}

/// Map every binary part in order; text parts are skipped.
pub fn map_attachments(parts: &[MessagePart]) -> Vec<Attachment> {
    parts
        .iter()
        .filter_map(|part| match part {
            MessagePart::Data(data) => Some(map_attachment(data)),
            MessagePart::Text { .. } => None,
        })
        .collect()
}
