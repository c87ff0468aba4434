use serde::{Deserialize, Serialize};

/// A mailbox: email address with an optional display name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Address {
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl Address {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: None,
        }
    }

    pub fn with_name(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: Some(name.into()),
        }
    }
}

/// Binary content part (file attachment or inline image).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DataPart {
    pub filename: Option<String>,
    /// Top-level media type, e.g. `image`
    pub media_type: String,
    /// Media subtype, e.g. `png`
    pub media_subtype: String,
    pub body: Vec<u8>,
    /// Content disposition, usually `attachment` or `inline`
    pub disposition: String,
}

impl DataPart {
    /// Create an `attachment` disposition part.
    pub fn new(
        body: impl Into<Vec<u8>>,
        filename: Option<String>,
        media_type: impl Into<String>,
        media_subtype: impl Into<String>,
    ) -> Self {
        Self {
            filename,
            media_type: media_type.into(),
            media_subtype: media_subtype.into(),
            body: body.into(),
            disposition: "attachment".to_string(),
        }
    }

    /// Mark the part as inline (e.g. embedded image).
    pub fn inline(mut self) -> Self {
        self.disposition = "inline".to_string();
        self
    }
}

/// A part attached to a message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MessagePart {
    /// Binary data, forwarded as an attachment
    Data(DataPart),
    /// Text part (e.g. an alternative rendering); never sent as an attachment
    Text { media_subtype: String, body: String },
}

/// A single message header. Names compare case-insensitively.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Header {
    pub name: String,
    pub value: String,
}

/// Outbound email message.
///
/// Headers are kept as an ordered list so that duplicate headers resolve
/// deterministically (the last one wins).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Email {
    /// Transport-assigned id, set after a successful send
    pub message_id: Option<String>,
    #[serde(default)]
    pub from: Vec<Address>,
    #[serde(default)]
    pub to: Vec<Address>,
    #[serde(default)]
    pub cc: Vec<Address>,
    #[serde(default)]
    pub bcc: Vec<Address>,
    #[serde(default)]
    pub reply_to: Vec<Address>,
    pub subject: Option<String>,
    pub html_body: Option<String>,
    pub text_body: Option<String>,
    #[serde(default)]
    pub attachments: Vec<MessagePart>,
    #[serde(default)]
    pub headers: Vec<Header>,
}

impl Email {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from(mut self, address: Address) -> Self {
        self.from.push(address);
        self
    }

    pub fn to(mut self, address: Address) -> Self {
        self.to.push(address);
        self
    }

    pub fn cc(mut self, address: Address) -> Self {
        self.cc.push(address);
        self
    }

    pub fn bcc(mut self, address: Address) -> Self {
        self.bcc.push(address);
        self
    }

    pub fn reply_to(mut self, address: Address) -> Self {
        self.reply_to.push(address);
        self
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Set plain text body
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text_body = Some(text.into());
        self
    }

    /// Set HTML body
    pub fn with_html(mut self, html: impl Into<String>) -> Self {
        self.html_body = Some(html.into());
        self
    }

    pub fn attach(mut self, part: DataPart) -> Self {
        self.attachments.push(MessagePart::Data(part));
        self
    }

    pub fn attach_part(mut self, part: MessagePart) -> Self {
        self.attachments.push(part);
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.add_header(name, value);
        self
    }

    /// Append a header, keeping any existing header with the same name.
    pub fn add_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.headers.push(Header {
            name: name.into(),
            value: value.into(),
        });
    }

    /// Value of the last header named `name` (case-insensitive).
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .rev()
            .find(|h| h.name.eq_ignore_ascii_case(name))
            .map(|h| h.value.as_str())
    }
}

/// Transport-level routing data, distinct from the message headers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Envelope {
    /// Authoritative sender; wins over the message `from` when present
    pub sender: Option<Address>,
    #[serde(default)]
    pub recipients: Vec<Address>,
}

impl Envelope {
    pub fn new(sender: Option<Address>, recipients: Vec<Address>) -> Self {
        Self { sender, recipients }
    }

    /// Envelope derived from the message itself (no explicit sender).
    pub fn from_email(email: &Email) -> Self {
        let recipients = email
            .to
            .iter()
            .chain(&email.cc)
            .chain(&email.bcc)
            .cloned()
            .collect();
        Self {
            sender: None,
            recipients,
        }
    }
}
