//! Maileroo transport: build, send, record the reference id.

use crate::builder::PayloadBuilder;
use crate::client::{HttpMailerooClient, MailerooClient};
use crate::config::MailerooConfig;
use crate::error::{TransportError, TransportResult};
use crate::headers::REF_ID_HEADER_NAME;
use crate::models::{Email, Envelope};
use crate::options::TransportOptions;
use crate::payload::Payload;
use std::fmt;
use tracing::{debug, error, info};

/// Sends [`Email`]s through a [`MailerooClient`].
///
/// Holds only the client and immutable options, so `send` can be called
/// concurrently from several tasks.
pub struct MailerooTransport<C: MailerooClient> {
    client: C,
    options: TransportOptions,
}

impl<C: MailerooClient> MailerooTransport<C> {
    pub fn new(client: C, options: TransportOptions) -> Self {
        Self { client, options }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn options(&self) -> &TransportOptions {
        &self.options
    }

    /// Build the payload for a message without sending it.
    pub fn build_payload(&self, email: &Email, envelope: &Envelope) -> TransportResult<Payload> {
        PayloadBuilder::new(&self.options).build(email, envelope)
    }

    /// Send a message and record the reference id on it.
    ///
    /// On failure the message is left untouched.
    pub async fn send(&self, email: &mut Email, envelope: &Envelope) -> TransportResult<String> {
        let payload = self.build_payload(email, envelope)?;

        debug!(
            client = self.client.name(),
            from = %payload.from.email,
            subject = %payload.subject,
            tracking = ?payload.tracking,
            "Submitting email"
        );

        let reference_id = self.submit(&payload).await?;

        email.message_id = Some(reference_id.clone());
        email.add_header(REF_ID_HEADER_NAME, reference_id.clone());

        info!(reference_id = %reference_id, "Email sent via Maileroo");

        Ok(reference_id)
    }

    /// Send a message using an envelope derived from the message itself.
    pub async fn send_email(&self, email: &mut Email) -> TransportResult<String> {
        let envelope = Envelope::from_email(email);
        self.send(email, &envelope).await
    }

    /// Hand a prepared payload to the client. No retries.
    pub async fn submit(&self, payload: &Payload) -> TransportResult<String> {
        self.client.send_basic_email(payload).await.map_err(|err| {
            error!(error = %err, "Request to Maileroo API failed");
            TransportError::from(err)
        })
    }
}

impl MailerooTransport<HttpMailerooClient> {
    /// Transport backed by the HTTP client, configured from `config`.
    pub fn from_config(config: &MailerooConfig) -> TransportResult<Self> {
        let client = HttpMailerooClient::new(config)
            .map_err(|e| TransportError::Config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self::new(client, config.options()))
    }

    /// Transport configured from `MAILEROO_*` environment variables.
    pub fn from_env() -> TransportResult<Self> {
        Self::from_config(&MailerooConfig::from_env()?)
    }
}

impl<C: MailerooClient> fmt::Display for MailerooTransport<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("maileroo")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockMailerooClient;
    use crate::error::ClientError;
    use crate::models::Address;
    use std::error::Error as _;

    fn email() -> Email {
        Email::new()
            .from(Address::new("a@x.com"))
            .to(Address::new("b@x.com"))
            .subject("Hi")
            .with_text("hello")
    }

    #[tokio::test]
    async fn test_send_records_reference_id() {
        let mut client = MockMailerooClient::new();
        client
            .expect_send_basic_email()
            .withf(|payload| payload.from.email == "a@x.com" && payload.subject == "Hi")
            .times(1)
            .returning(|_| Ok("ref-42".to_string()));
        client.expect_name().return_const("mock");

        let transport = MailerooTransport::new(client, TransportOptions::default());
        let mut email = email();

        let reference_id = transport.send(&mut email, &Envelope::default()).await.unwrap();

        assert_eq!(reference_id, "ref-42");
        assert_eq!(email.message_id.as_deref(), Some("ref-42"));
        assert_eq!(email.header_value("x-maileroo-ref-id"), Some("ref-42"));

        let written = email.headers.last().unwrap();
        assert_eq!(written.name, "X-Maileroo-Ref-Id");
        assert_eq!(written.value, "ref-42");
    }

    #[tokio::test]
    async fn test_client_failure_wrapped() {
        let mut client = MockMailerooClient::new();
        client
            .expect_send_basic_email()
            .times(1)
            .returning(|_| Err(ClientError::Other("network unreachable".to_string())));
        client.expect_name().return_const("mock");

        let transport = MailerooTransport::new(client, TransportOptions::default());
        let mut email = email();

        let err = transport.send(&mut email, &Envelope::default()).await.unwrap_err();

        assert!(matches!(err, TransportError::Provider { .. }));
        assert!(err.to_string().starts_with("Request to Maileroo API failed"));
        assert_eq!(err.source().unwrap().to_string(), "network unreachable");
        assert!(email.message_id.is_none());
        assert!(email.header_value("x-maileroo-ref-id").is_none());
    }

    #[tokio::test]
    async fn test_validation_error_skips_client() {
        let mut client = MockMailerooClient::new();
        client.expect_send_basic_email().never();

        let transport = MailerooTransport::new(client, TransportOptions::default());
        let mut email = Email::new().to(Address::new("b@x.com"));

        let err = transport.send(&mut email, &Envelope::default()).await.unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_display_name() {
        let transport =
            MailerooTransport::new(MockMailerooClient::new(), TransportOptions::default());
        assert_eq!(transport.to_string(), "maileroo");
    }

    #[test]
    fn test_from_config_builds_http_transport() {
        let config = MailerooConfig::new("key");
        let transport = MailerooTransport::from_config(&config).unwrap();
        assert_eq!(transport.client().name(), "maileroo");
        assert!(transport.options().tracking.is_none());
    }
}
