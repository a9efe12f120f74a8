//! Chat proxy and transcript routes.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Json, Response};
use serde::Deserialize;
use tracing::info;

use crate::routes::error::ApiError;
use crate::services::chat;
use crate::services::conversation::Message;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ChatBody {
    pub prompt: String,
}

/// `POST /api/chat`: forward the transcript upstream, relay the raw body.
pub async fn chat(
    State(state): State<AppState>,
    body: Result<Json<ChatBody>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(body) = body.map_err(|e| ApiError::bad_request(e.body_text()))?;

    let generation = chat::send_prompt(&state.conversation, state.llm.as_ref(), &body.prompt).await?;
    Ok(([(CONTENT_TYPE, "application/json")], generation.raw).into_response())
}

/// `POST /api/clear`: empty the transcript.
pub async fn clear(State(state): State<AppState>) -> Json<serde_json::Value> {
    state.conversation.clear().await;
    info!("chat history cleared");
    Json(serde_json::json!({ "message": "Chat history cleared" }))
}

/// `GET /api/messages`: the full transcript in arrival order.
pub async fn messages(State(state): State<AppState>) -> Json<Vec<Message>> {
    Json(state.conversation.all().await)
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;
