//! Environment-sourced configuration.

use crate::error::{TransportError, TransportResult};
use crate::options::{TrackingSetting, TransportOptions};
use crate::payload::{Tags, tags_from_json};
use std::time::Duration;
use tracing::warn;

/// Default API base URL.
pub const DEFAULT_API_URL: &str = "https://smtp.maileroo.com/api/v2";
/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maileroo API configuration.
#[derive(Debug, Clone)]
pub struct MailerooConfig {
    /// Maileroo sending key.
    pub api_key: String,
    /// API base URL (defaults to production).
    pub api_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Static tracking override, if configured.
    pub tracking: Option<TrackingSetting>,
    /// Static tags merged into every send.
    pub tags: Tags,
}

impl MailerooConfig {
    /// Create a new configuration with defaults and no overrides.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            tracking: None,
            tags: Tags::new(),
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Expects:
    /// - `MAILEROO_API_KEY`
    /// - `MAILEROO_TIMEOUT` (seconds, optional)
    /// - `MAILEROO_TRACKING` (optional override)
    /// - `MAILEROO_TAGS` (optional JSON object or list)
    /// - `MAILEROO_API_URL` (optional)
    pub fn from_env() -> TransportResult<Self> {
        let api_key = std::env::var("MAILEROO_API_KEY")
            .map_err(|_| TransportError::Config("MAILEROO_API_KEY not set".to_string()))?;

        let mut config = Self::new(api_key);

        if let Ok(url) = std::env::var("MAILEROO_API_URL") {
            config.api_url = url.trim_end_matches('/').to_string();
        }

        if let Ok(timeout) = std::env::var("MAILEROO_TIMEOUT") {
            let secs = timeout.trim().parse::<u64>().map_err(|e| {
                TransportError::Config(format!(
                    "MAILEROO_TIMEOUT must be a number of seconds: {}",
                    e
                ))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        if let Ok(tracking) = std::env::var("MAILEROO_TRACKING") {
            config.tracking = parse_tracking_env(&tracking);
        }

        if let Ok(tags) = std::env::var("MAILEROO_TAGS") {
            config.tags = parse_tags_env(&tags);
        }

        Ok(config)
    }

    /// Transport options derived from this configuration.
    pub fn options(&self) -> TransportOptions {
        TransportOptions {
            tracking: self.tracking.clone(),
            tags: self.tags.clone(),
        }
    }
}

/// Boolean-like env values (`true/false`, `1/0`, `yes/no`, `on/off`).
/// Empty means "not configured".
fn parse_tracking_env(value: &str) -> Option<TrackingSetting> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" => None,
        "true" | "1" | "yes" | "on" => Some(TrackingSetting::Bool(true)),
        _ => Some(TrackingSetting::Bool(false)),
    }
}

fn parse_tags_env(value: &str) -> Tags {
    if value.trim().is_empty() {
        return Tags::new();
    }
    match serde_json::from_str(value).map(tags_from_json) {
        Ok(Some(tags)) => tags,
        Ok(None) => {
            warn!("MAILEROO_TAGS is not a JSON object or list, ignoring");
            Tags::new()
        }
        Err(err) => {
            warn!(error = %err, "MAILEROO_TAGS is not valid JSON, ignoring");
            Tags::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const VARS: [&str; 5] = [
        "MAILEROO_API_KEY",
        "MAILEROO_API_URL",
        "MAILEROO_TIMEOUT",
        "MAILEROO_TRACKING",
        "MAILEROO_TAGS",
    ];

    #[test]
    fn test_config_new_defaults() {
        let config = MailerooConfig::new("key");

        assert_eq!(config.api_key, "key");
        assert_eq!(config.api_url, "https://smtp.maileroo.com/api/v2");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.tracking.is_none());
        assert!(config.tags.is_empty());
    }

    #[test]
    fn test_from_env_requires_api_key() {
        temp_env::with_vars_unset(VARS, || {
            let err = MailerooConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("MAILEROO_API_KEY"));
        });
    }

    #[test]
    fn test_from_env_reads_all_values() {
        temp_env::with_vars(
            [
                ("MAILEROO_API_KEY", Some("secret")),
                ("MAILEROO_API_URL", Some("http://localhost:8080/api/v2/")),
                ("MAILEROO_TIMEOUT", Some("5")),
                ("MAILEROO_TRACKING", Some("off")),
                ("MAILEROO_TAGS", Some(r#"{"env":"staging"}"#)),
            ],
            || {
                let config = MailerooConfig::from_env().unwrap();
                assert_eq!(config.api_key, "secret");
                assert_eq!(config.api_url, "http://localhost:8080/api/v2");
                assert_eq!(config.timeout, Duration::from_secs(5));
                assert_eq!(config.tracking, Some(TrackingSetting::Bool(false)));
                assert_eq!(config.tags["env"], json!("staging"));

                let options = config.options();
                assert_eq!(options.tracking, Some(TrackingSetting::Bool(false)));
                assert_eq!(options.tags.len(), 1);
            },
        );
    }

    #[test]
    fn test_from_env_unset_tracking_is_not_an_override() {
        temp_env::with_vars(
            [
                ("MAILEROO_API_KEY", Some("secret")),
                ("MAILEROO_API_URL", None),
                ("MAILEROO_TIMEOUT", None),
                ("MAILEROO_TRACKING", None),
                ("MAILEROO_TAGS", Some("not json")),
            ],
            || {
                let config = MailerooConfig::from_env().unwrap();
                assert!(config.tracking.is_none());
                assert!(config.tags.is_empty());
            },
        );
    }

    #[test]
    fn test_from_env_invalid_timeout() {
        temp_env::with_vars(
            [
                ("MAILEROO_API_KEY", Some("secret")),
                ("MAILEROO_TIMEOUT", Some("soon")),
            ],
            || {
                let err = MailerooConfig::from_env().unwrap_err();
                assert!(matches!(err, TransportError::Config(_)));
                assert!(err.to_string().contains("MAILEROO_TIMEOUT"));
            },
        );
    }

    #[test]
    fn test_parse_tags_env_forms() {
        assert_eq!(parse_tags_env(r#"{"env":"prod"}"#)["env"], json!("prod"));

        let tags = parse_tags_env(r#"["transactional","eu"]"#);
        assert_eq!(tags.len(), 2);
        assert_eq!(tags["transactional"], json!(null));

        assert!(parse_tags_env("\"prod\"").is_empty());
        assert!(parse_tags_env("{broken").is_empty());
        assert!(parse_tags_env("").is_empty());
    }

    #[test]
    fn test_parse_tracking_env() {
        assert_eq!(parse_tracking_env("TRUE"), Some(TrackingSetting::Bool(true)));
        assert_eq!(parse_tracking_env("on"), Some(TrackingSetting::Bool(true)));
        assert_eq!(parse_tracking_env("no"), Some(TrackingSetting::Bool(false)));
        assert_eq!(parse_tracking_env("  "), None);
    }
}
