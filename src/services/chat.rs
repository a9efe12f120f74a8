//! Chat proxy: transcript in, one generation call out.
//!
//! DESIGN
//! ======
//! The user prompt is appended and the full transcript rendered under one
//! lock, then sent upstream without holding it. The upstream body is handed
//! back untouched; if it carries generated text, that text is appended as
//! the assistant turn.
//!
//! ERROR HANDLING
//! ==============
//! Upstream failures are returned as `ChatError`, never panics. The user
//! message stays in the transcript when the call fails.

use tracing::{info, warn};

use crate::error::ErrorCode;
use crate::llm::Generate;
use crate::llm::types::{Generation, LlmError};
use crate::services::conversation::{ConversationStore, Role};

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("generation failed: {0}")]
    Upstream(#[from] LlmError),
}

impl ErrorCode for ChatError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Upstream(_) => "E_UPSTREAM",
        }
    }

    fn retryable(&self) -> bool {
        matches!(self, Self::Upstream(e) if e.retryable())
    }
}

/// Send `prompt` with the accumulated transcript to the generation endpoint.
///
/// # Errors
///
/// Returns [`ChatError::Upstream`] when the generation call fails.
pub async fn send_prompt(
    conversation: &ConversationStore,
    llm: &dyn Generate,
    prompt: &str,
) -> Result<Generation, ChatError> {
    let transcript = conversation.append_and_render(Role::User, prompt).await;
    info!(model = llm.model(), prompt_len = transcript.len(), "forwarding transcript");

    let generation = match llm.generate(&transcript).await {
        Ok(generation) => generation,
        Err(e) => {
            warn!(error = %e, "generation request failed");
            return Err(e.into());
        }
    };

    if let Some(text) = &generation.text {
        conversation.append(Role::Assistant, text.clone()).await;
    }
    Ok(generation)
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;
