//! Maileroo HTTP API client
//!
//! Sends emails via `POST {api_url}/emails`.

use super::MailerooClient;
use crate::config::MailerooConfig;
use crate::error::{ClientError, ClientResult};
use crate::payload::Payload;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, error, info};

/// Client for the Maileroo sending API.
pub struct HttpMailerooClient {
    api_key: String,
    api_url: String,
    client: Client,
}

impl HttpMailerooClient {
    /// Create a client from configuration.
    pub fn new(config: &MailerooConfig) -> ClientResult<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            api_key: config.api_key.clone(),
            api_url: config.api_url.clone(),
            client,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/emails", self.api_url)
    }
}

/// Response envelope returned by the API.
#[derive(Debug, Deserialize)]
struct ApiResponse {
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: Option<ApiResponseData>,
}

#[derive(Debug, Deserialize)]
struct ApiResponseData {
    reference_id: String,
}

/// Extract the reference id from a response, or the provider's error.
fn parse_response(status: u16, body: &str) -> ClientResult<String> {
    let parsed: Option<ApiResponse> = serde_json::from_str(body).ok();
    let is_success = (200..300).contains(&status);

    match parsed {
        Some(ApiResponse {
            success: true,
            data: Some(data),
            ..
        }) if is_success => Ok(data.reference_id),
        Some(ApiResponse { success: true, .. }) if is_success => Err(ClientError::InvalidResponse(
            "response does not contain a reference id".to_string(),
        )),
        Some(response) => Err(ClientError::Api {
            status,
            message: response
                .message
                .unwrap_or_else(|| "unknown error".to_string()),
        }),
        None if is_success => Err(ClientError::InvalidResponse(body.to_string())),
        None => Err(ClientError::Api {
            status,
            message: body.to_string(),
        }),
    }
}

#[async_trait]
impl MailerooClient for HttpMailerooClient {
    async fn send_basic_email(&self, payload: &Payload) -> ClientResult<String> {
        debug!(
            from = %payload.from.email,
            subject = %payload.subject,
            to_count = payload.to.len(),
            attachment_count = payload.attachments.len(),
            "Sending email via Maileroo"
        );

        let response = self
            .client
            .post(self.endpoint())
            .header("X-Api-Key", &self.api_key)
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        match parse_response(status.as_u16(), &body) {
            Ok(reference_id) => {
                info!(reference_id = %reference_id, "Email accepted by Maileroo");
                Ok(reference_id)
            }
            Err(err) => {
                error!(status = %status, error = %err, "Maileroo API error");
                Err(err)
            }
        }
    }

    async fn health_check(&self) -> ClientResult<()> {
        if self.api_key.is_empty() {
            return Err(ClientError::Other("Maileroo API key not configured".to_string()));
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "maileroo"
    }
}
