//! Conversation store: the single in-memory chat transcript.
//!
//! DESIGN
//! ======
//! One ordered list of role/content pairs shared by every clone of the
//! handle. Each operation takes the lock once, so an append and the render
//! of the resulting transcript cannot be split by another request.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

/// One transcript entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    #[must_use]
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self { role, content: content.into() }
    }
}

// =============================================================================
// STORE
// =============================================================================

#[derive(Clone, Default)]
pub struct ConversationStore {
    messages: Arc<RwLock<Vec<Message>>>,
}

impl ConversationStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn append(&self, role: Role, content: impl Into<String>) {
        self.messages.write().await.push(Message::new(role, content));
    }

    /// Append one entry and return the transcript that includes it.
    pub async fn append_and_render(&self, role: Role, content: impl Into<String>) -> String {
        let mut messages = self.messages.write().await;
        messages.push(Message::new(role, content));
        render(&messages)
    }

    /// Empty the transcript in place. Visible through every handle.
    pub async fn clear(&self) {
        self.messages.write().await.clear();
    }

    /// Snapshot of the transcript in arrival order.
    pub async fn all(&self) -> Vec<Message> {
        self.messages.read().await.clone()
    }

    /// Transcript rendered as newline-joined `role: content` lines.
    #[cfg(test)]
    pub async fn transcript(&self) -> String {
        render(&self.messages.read().await)
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.messages.read().await.len()
    }

    #[cfg(test)]
    pub async fn is_empty(&self) -> bool {
        self.messages.read().await.is_empty()
    }
}

fn render(messages: &[Message]) -> String {
    messages
        .iter()
        .map(|m| format!("{}: {}", m.role.as_str(), m.content))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
#[path = "conversation_test.rs"]
mod tests;
