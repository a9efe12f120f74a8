//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the conversation transcript, the book library, and the
//! generation client. Nothing lives in module-level globals, so tests build
//! a fresh state per case.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::llm::Generate;
use crate::services::conversation::ConversationStore;
use crate::services::library::BookLibrary;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    pub conversation: ConversationStore,
    pub library: BookLibrary,
    pub llm: Arc<dyn Generate>,
}

impl AppState {
    #[must_use]
    pub fn new(config: &ServerConfig, llm: Arc<dyn Generate>) -> Self {
        Self {
            conversation: ConversationStore::new(),
            library: BookLibrary::new(config.upload_dir.clone(), config.extract_timeout()),
            llm,
        }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
