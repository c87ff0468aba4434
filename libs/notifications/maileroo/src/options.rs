//! Transport-level overrides applied on top of per-message directives.

use crate::headers::is_truthy;
use crate::payload::{Payload, Tags};
use serde::Deserialize;

/// Configured tracking override. Accepts a boolean or a string form.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TrackingSetting {
    Bool(bool),
    Text(String),
}

impl TrackingSetting {
    /// True only for boolean `true` or the strings `true`, `1`, `yes`.
    pub fn enabled(&self) -> bool {
        match self {
            Self::Bool(value) => *value,
            Self::Text(value) => is_truthy(value),
        }
    }
}

impl From<bool> for TrackingSetting {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for TrackingSetting {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Static options loaded once when the transport is built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransportOptions {
    /// When set, replaces any per-message tracking directive
    pub tracking: Option<TrackingSetting>,
    /// Default tags; per-message tags win on key collision
    pub tags: Tags,
}

impl TransportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tracking(mut self, tracking: impl Into<TrackingSetting>) -> Self {
        self.tracking = Some(tracking.into());
        self
    }

    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.tags.insert(key.into(), value.into());
        self
    }

    pub fn with_tags(mut self, tags: Tags) -> Self {
        self.tags = tags;
        self
    }

    /// Apply the overrides to a payload already carrying message directives.
    pub fn apply(&self, payload: &mut Payload) {
        if let Some(tracking) = &self.tracking {
            payload.tracking = Some(tracking.enabled());
        }

        if !self.tags.is_empty() {
            let merged = payload.tags.get_or_insert_with(Tags::new);
            for (key, value) in &self.tags {
                merged.entry(key.clone()).or_insert_with(|| value.clone());
            }
        }
    }
}
