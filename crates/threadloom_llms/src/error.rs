//! Error types for completion providers

use thiserror::Error;

/// Errors returned by providers and request conversion
#[derive(Error, Debug)]
pub enum Error {
    /// No API key configured for the provider
    #[error("missing API key for provider '{0}'")]
    MissingApiKey(String),

    /// Transport failure (connect, timeout, body decode)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider answered with a non-success status
    #[error("provider error: {0}")]
    Provider(String),

    /// Provider answered 2xx but the payload is unusable
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn provider_error(msg: impl Into<String>) -> Self {
        Self::Provider(msg.into())
    }

    pub fn invalid_response(msg: impl Into<String>) -> Self {
        Self::InvalidResponse(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_api_key_message() {
        let err = Error::MissingApiKey("openai".to_string());
        assert_eq!(err.to_string(), "missing API key for provider 'openai'");
    }

    #[test]
    fn test_provider_error_helper() {
        let err = Error::provider_error("OpenAI API error 429: slow down");
        assert!(matches!(err, Error::Provider(_)));
        assert_eq!(err.to_string(), "provider error: OpenAI API error 429: slow down");
    }

    #[test]
    fn test_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json");
        let err = Error::from(json_err.unwrap_err());
        assert!(err.to_string().contains("expected value"));
    }
}
