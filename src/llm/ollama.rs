//! Ollama-compatible `/api/generate` client.
//!
//! Thin HTTP wrapper: one non-streaming POST per call, body returned verbatim.

use std::time::Duration;

use super::config::LlmConfig;
use super::types::{GenerateRequest, Generation, LlmError};

// =============================================================================
// CLIENT
// =============================================================================

pub struct OllamaClient {
    http: reqwest::Client,
    url: String,
    model: String,
}

impl OllamaClient {
    /// # Errors
    ///
    /// Returns [`LlmError::HttpClientBuild`] if the HTTP client cannot be built.
    pub fn new(config: &LlmConfig) -> Result<Self, LlmError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| LlmError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, url: config.generate_url(), model: config.model.clone() })
    }

    /// Endpoint this client posts to.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    pub async fn generate(&self, prompt: &str) -> Result<Generation, LlmError> {
        let body = GenerateRequest { model: &self.model, prompt, stream: false };

        let response = self
            .http
            .post(&self.url)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;

        if !status.is_success() {
            let body = String::from_utf8_lossy(&body).into_owned();
            return Err(LlmError::ApiResponse { status: status.as_u16(), body });
        }

        Ok(Generation::from_body(body))
    }
}

#[cfg(test)]
#[path = "ollama_test.rs"]
mod tests;
