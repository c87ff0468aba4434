//! Maileroo email transport
//!
//! Turns a structured outbound [`Email`] into the request payload of the
//! Maileroo sending API, submits it, and records the returned reference id on
//! the message.
//!
//! ## Components
//!
//! - **Mapping**: `address`, `attachment`, and `headers` (directive, reserved
//!   and custom header classification)
//! - **Payload**: [`PayloadBuilder`] assembles a [`Payload`];
//!   [`TransportOptions`] applies static tracking/tag overrides
//! - **Clients**: [`HttpMailerooClient`] (reqwest) and [`RecordingClient`]
//!   behind the [`MailerooClient`] trait
//! - **Transport**: [`MailerooTransport`] ties it together
//!
//! ## Directive headers
//!
//! | Header | Effect |
//! |--------|--------|
//! | `X-Maileroo-Track` | `true`, `1` or `yes` enables tracking, anything else disables it |
//! | `X-Maileroo-Tags` | JSON object merged into the send's tags |
//!
//! ## Usage
//!
//! ```rust,ignore
//! use maileroo_transport::{Address, Email, Envelope, MailerooTransport};
//!
//! let transport = MailerooTransport::from_env()?;
//!
//! let mut email = Email::new()
//!     .from(Address::new("noreply@example.com"))
//!     .to(Address::with_name("user@example.com", "User"))
//!     .subject("Welcome")
//!     .with_text("Hello!")
//!     .header("X-Maileroo-Track", "yes");
//!
//! let reference_id = transport.send(&mut email, &Envelope::default()).await?;
//! ```

pub mod address;
pub mod attachment;
pub mod builder;
pub mod client;
pub mod config;
pub mod error;
pub mod headers;
pub mod models;
pub mod options;
pub mod payload;
pub mod transport;

pub use builder::PayloadBuilder;
pub use client::{HttpMailerooClient, MailerooClient, RecordingClient};
pub use config::MailerooConfig;
pub use error::{ClientError, ClientResult, TransportError, TransportResult};
pub use models::{Address, DataPart, Email, Envelope, Header, MessagePart};
pub use options::{TrackingSetting, TransportOptions};
pub use payload::{Attachment, EmailAddress, Payload, Tags};
pub use transport::MailerooTransport;
