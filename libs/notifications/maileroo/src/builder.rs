//! Message to payload normalization.

use crate::address::{map_address, map_addresses};
use crate::attachment::map_attachments;
use crate::error::{TransportError, TransportResult};
use crate::headers::apply_headers;
use crate::models::{Email, Envelope};
use crate::options::TransportOptions;
use crate::payload::Payload;

/// Builds API payloads using a fixed set of transport options.
#[derive(Debug, Clone, Copy)]
pub struct PayloadBuilder<'a> {
    options: &'a TransportOptions,
}

impl<'a> PayloadBuilder<'a> {
    pub fn new(options: &'a TransportOptions) -> Self {
        Self { options }
    }

    /// Build the payload for one message.
    ///
    /// The envelope sender wins over the message `from`; with neither the
    /// message is rejected before anything else is mapped.
    pub fn build(&self, email: &Email, envelope: &Envelope) -> TransportResult<Payload> {
        let sender = envelope
            .sender
            .as_ref()
            .or_else(|| email.from.first())
            .ok_or_else(|| TransportError::Validation("From address is required".to_string()))?;

        let mut payload = Payload::new(map_address(sender));

        payload.to = map_addresses(&email.to);
        payload.cc = map_addresses(&email.cc);
        payload.bcc = map_addresses(&email.bcc);
        payload.reply_to = map_addresses(&email.reply_to);

        payload.subject = email.subject.clone().unwrap_or_default();
        payload.html = non_empty(&email.html_body);
        payload.plain = non_empty(&email.text_body);

        payload.attachments = map_attachments(&email.attachments);

        apply_headers(&mut payload, &email.headers);
        self.options.apply(&mut payload);

        Ok(payload)
    }
}

fn non_empty(body: &Option<String>) -> Option<String> {
    body.as_ref().filter(|b| !b.is_empty()).cloned()
}
