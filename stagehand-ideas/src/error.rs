//! Error types for idea generation

use thiserror::Error;

/// Result type for idea generation
pub type Result<T> = std::result::Result<T, IdeaError>;

/// What the view shows for any failure of the model call
pub const GENERATION_FAILED: &str = "Could not generate content. Please try again.";

#[derive(Debug, Error)]
pub enum IdeaError {
    /// No API key is configured
    #[error("no API key configured; set STAGEHAND_AI__API_KEY or GEMINI_API_KEY")]
    MissingApiKey,

    /// The request was rejected before any call was made
    #[error("invalid {field}: {message}")]
    InvalidRequest { field: String, message: String },

    /// Transport failure, including timeouts
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status
    #[error("model service returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The response or the generated text was not the expected JSON
    #[error("could not parse model response: {0}")]
    Parse(#[from] serde_json::Error),

    /// The response carried no generated text
    #[error("model response contained no text")]
    EmptyResponse,
}

impl IdeaError {
    pub fn invalid_request(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Message for the panel. Input problems are spelled out; everything
    /// that went wrong with the model call reads the same.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidRequest { message, .. } => message.clone(),
            _ => GENERATION_FAILED.to_string(),
        }
    }
}
