//! Recording client for testing

use super::MailerooClient;
use crate::error::{ClientError, ClientResult};
use crate::payload::Payload;
use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Mutex;

/// Client that captures payloads instead of calling the API.
pub struct RecordingClient {
    sent: Arc<Mutex<Vec<Payload>>>,
    counter: AtomicUsize,
    failure_message: Option<String>,
}

impl RecordingClient {
    /// Create a client that accepts every payload.
    pub fn new() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            counter: AtomicUsize::new(0),
            failure_message: None,
        }
    }

    /// Create a client that always fails
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure_message: Some(message.into()),
            ..Self::new()
        }
    }

    /// Get all recorded payloads
    pub async fn sent(&self) -> Vec<Payload> {
        self.sent.lock().await.clone()
    }

    pub async fn sent_count(&self) -> usize {
        self.sent.lock().await.len()
    }

    /// Most recent payload, if any.
    pub async fn last(&self) -> Option<Payload> {
        self.sent.lock().await.last().cloned()
    }
}

impl Default for RecordingClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MailerooClient for RecordingClient {
    async fn send_basic_email(&self, payload: &Payload) -> ClientResult<String> {
        if let Some(message) = &self.failure_message {
            return Err(ClientError::Other(message.clone()));
        }

        self.sent.lock().await.push(payload.clone());
        let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;

        Ok(format!("recorded-{n}"))
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::EmailAddress;

    #[tokio::test]
    async fn test_recording_client_captures_payloads() {
        let client = RecordingClient::new();
        let payload = Payload::new(EmailAddress::new("a@x.com", None));

        assert_eq!(client.send_basic_email(&payload).await.unwrap(), "recorded-1");
        assert_eq!(client.send_basic_email(&payload).await.unwrap(), "recorded-2");
        assert_eq!(client.sent_count().await, 2);
        assert_eq!(client.last().await.unwrap().from.email, "a@x.com");
    }

    #[tokio::test]
    async fn test_recording_client_fails() {
        let client = RecordingClient::failing("Simulated failure");
        let payload = Payload::new(EmailAddress::new("a@x.com", None));

        let err = client.send_basic_email(&payload).await.unwrap_err();
        assert!(err.to_string().contains("Simulated failure"));
        assert_eq!(client.sent_count().await, 0);
    }
}
