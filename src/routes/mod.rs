//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the chat proxy and book library endpoints under one Axum router.
//! CORS is fully open for the browser front end; the body limit is raised
//! to the configured upload size.

pub mod books;
pub mod chat;
pub mod error;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// API routes with CORS, request tracing, and the upload body limit.
pub fn app(state: AppState, max_upload_bytes: usize) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/chat", post(chat::chat))
        .route("/api/clear", post(chat::clear))
        .route("/api/messages", get(chat::messages))
        .route("/api/upload-book", post(books::upload_book))
        .route("/api/books", get(books::list_books))
        .route("/api/book/{id}", get(books::get_book))
        .route("/healthz", get(healthz))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
