//! Error types for the Maileroo transport.

use thiserror::Error;

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Result type for API client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors surfaced to the caller of a send.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The message cannot be sent as-is (e.g. no sender address).
    #[error("Validation error: {0}")]
    Validation(String),

    /// The Maileroo API client failed to deliver the payload.
    #[error("Request to Maileroo API failed: {message}")]
    Provider {
        message: String,
        #[source]
        source: ClientError,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl TransportError {
    /// Returns true when the failure happened before any network interaction.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<ClientError> for TransportError {
    fn from(err: ClientError) -> Self {
        TransportError::Provider {
            message: err.to_string(),
            source: err,
        }
    }
}

/// Errors returned by a [`MailerooClient`](crate::client::MailerooClient).
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or protocol level failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status or `success: false`.
    #[error("Maileroo API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The API answered with something we could not interpret.
    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    /// Catch-all used by substitute clients.
    #[error("{0}")]
    Other(String),
}
