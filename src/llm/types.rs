//! LLM types: generation wire format, results, and errors.

use serde::{Deserialize, Serialize};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by generation client operations.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// The HTTP request to the generation endpoint failed (connect, timeout, I/O).
    #[error("API request failed: {0}")]
    ApiRequest(String),

    /// The generation endpoint returned a non-success HTTP status.
    #[error("API response error: status {status}")]
    ApiResponse { status: u16, body: String },

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl crate::error::ErrorCode for LlmError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::ConfigParse(_) => "E_CONFIG_PARSE",
            Self::ApiRequest(_) => "E_API_REQUEST",
            Self::ApiResponse { .. } => "E_API_RESPONSE",
            Self::HttpClientBuild(_) => "E_HTTP_CLIENT_BUILD",
        }
    }

    fn retryable(&self) -> bool {
        matches!(self, Self::ApiRequest(_) | Self::ApiResponse { status: 429 | 500..=599, .. })
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

/// Body of a `POST /api/generate` request.
#[derive(Debug, Serialize)]
pub struct GenerateRequest<'a> {
    pub model: &'a str,
    pub prompt: &'a str,
    pub stream: bool,
}

/// The subset of a generation reply the proxy reads. Everything else in the
/// body is relayed untouched.
#[derive(Debug, Deserialize)]
struct GenerateReply {
    response: Option<String>,
}

// =============================================================================
// GENERATION RESULT
// =============================================================================

/// Outcome of one generation call.
#[derive(Debug, Clone)]
pub struct Generation {
    /// Upstream body, byte-for-byte.
    pub raw: Vec<u8>,
    /// Generated text, when the body carries a string `response` field.
    pub text: Option<String>,
}

impl Generation {
    /// Wrap a raw upstream body, pulling out the generated text if present.
    #[must_use]
    pub fn from_body(raw: impl Into<Vec<u8>>) -> Self {
        let raw = raw.into();
        let text = serde_json::from_slice::<GenerateReply>(&raw)
            .ok()
            .and_then(|reply| reply.response);
        Self { raw, text }
    }
}

// =============================================================================
// GENERATE TRAIT
// =============================================================================

/// Provider-neutral async trait for text generation. Enables mocking in tests.
#[async_trait::async_trait]
pub trait Generate: Send + Sync {
    /// Send one non-streaming generation request for `prompt`.
    ///
    /// # Errors
    ///
    /// Returns an [`LlmError`] if the endpoint is unreachable, times out, or
    /// answers with a non-success status.
    async fn generate(&self, prompt: &str) -> Result<Generation, LlmError>;

    /// Model identifier sent with every request.
    fn model(&self) -> &str;
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
