//! Maileroo API client implementations

pub mod http;
pub mod recording;

pub use http::HttpMailerooClient;
pub use recording::RecordingClient;

use crate::error::ClientResult;
use crate::payload::Payload;
use async_trait::async_trait;

/// Capability to submit a payload to the Maileroo API.
///
/// Implementations: [`HttpMailerooClient`] for the real API and
/// [`RecordingClient`] for tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MailerooClient: Send + Sync {
    /// Send one email and return the provider reference id.
    async fn send_basic_email(&self, payload: &Payload) -> ClientResult<String>;

    /// Check if the client is configured.
    async fn health_check(&self) -> ClientResult<()> {
        Ok(())
    }

    /// Get client name for logging.
    fn name(&self) -> &'static str;
}
