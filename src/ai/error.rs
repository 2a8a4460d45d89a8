//! Error types for generative AI requests.

use thiserror::Error;

/// Errors that can occur while talking to the generative AI service.
#[derive(Debug, Error)]
pub enum AiError {
    /// No API key in config or environment. Fatal for AI features, never retried.
    #[error("Gemini API key is missing: set {env_var} or ai.api_key in the config file")]
    MissingCredential { env_var: String },

    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),

    /// Transport failure (connect, timeout, body read)
    #[error("Request to Gemini failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Service answered with a non-success status
    #[error("Gemini API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Response body was not the expected JSON
    #[error("Failed to parse Gemini response: {0}")]
    Parse(String),
}

impl AiError {
    /// True for configuration problems that retrying cannot fix.
    pub fn is_configuration(&self) -> bool {
        matches!(self, AiError::MissingCredential { .. } | AiError::ClientBuild(_))
    }
}
