use thiserror::Error;

use crate::schema::SchemaError;

/// Errors that can occur while asking the model for recipes or ingredients
#[derive(Error, Debug)]
pub enum SuggestError {
    /// Missing credential, unknown provider or unreadable configuration
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The model provider failed or returned no usable text
    #[error("Model service error: {0}")]
    ExternalService(String),

    /// The reply was received but does not have the expected recipe shape.
    /// `raw` holds the reply text so callers can show it as a fallback.
    #[error("Malformed model reply: {reason}")]
    MalformedSchema { reason: String, raw: String },

    /// Input rejected before any request was made
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl SuggestError {
    pub(crate) fn malformed(err: SchemaError, raw: &str) -> Self {
        SuggestError::MalformedSchema {
            reason: err.to_string(),
            raw: raw.to_string(),
        }
    }

    /// Raw model reply attached to a schema failure, if any
    pub fn raw_reply(&self) -> Option<&str> {
        match self {
            SuggestError::MalformedSchema { raw, .. } => Some(raw),
            _ => None,
        }
    }
}

impl From<config::ConfigError> for SuggestError {
    fn from(err: config::ConfigError) -> Self {
        SuggestError::Configuration(err.to_string())
    }
}
