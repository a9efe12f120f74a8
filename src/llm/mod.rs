//! LLM: local text-generation adapter for the chat proxy.
//!
//! DESIGN
//! ======
//! Configuration comes from environment variables. `LlmClient` wraps the
//! Ollama-compatible client and exposes it through the [`Generate`] trait so
//! route handlers never depend on the concrete HTTP client.

pub mod config;
pub mod ollama;
pub mod types;

use config::LlmConfig;
pub use types::Generate;
use types::{Generation, LlmError};

// =============================================================================
// CLIENT
// =============================================================================

/// Concrete generation client, configured by [`LlmClient::from_env`].
pub struct LlmClient {
    inner: ollama::OllamaClient,
    model: String,
}

impl LlmClient {
    /// Build a client from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a config value is malformed or the HTTP client
    /// fails to build.
    pub fn from_env() -> Result<Self, LlmError> {
        let config = LlmConfig::from_env()?;
        Self::from_config(&config)
    }

    /// Build a client from a parsed typed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn from_config(config: &LlmConfig) -> Result<Self, LlmError> {
        let inner = ollama::OllamaClient::new(config)?;
        Ok(Self { inner, model: config.model.clone() })
    }

    /// Generation endpoint URL.
    #[must_use]
    pub fn url(&self) -> &str {
        self.inner.url()
    }
}

#[async_trait::async_trait]
impl Generate for LlmClient {
    async fn generate(&self, prompt: &str) -> Result<Generation, LlmError> {
        self.inner.generate(prompt).await
    }

    fn model(&self) -> &str {
        &self.model
    }
}
