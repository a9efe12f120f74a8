//! Book upload and retrieval routes.

use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, Path, State};
use axum::response::Json;
use serde::Serialize;

use crate::routes::error::ApiError;
use crate::services::library::BookSummary;
use crate::state::AppState;

/// Multipart field carrying the uploaded document.
const FILE_FIELD: &str = "file";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub message: &'static str,
    pub book_id: String,
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct BookContentResponse {
    pub content: String,
}

/// `POST /api/upload-book`: ingest the multipart `file` field.
pub async fn upload_book(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, ApiError> {
    let mut multipart = multipart.map_err(|e| ApiError::bad_request(e.body_text()))?;

    let mut upload = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let data = field.bytes().await?;
        upload = Some((filename, data));
        break;
    }
    let Some((filename, data)) = upload else {
        return Err(ApiError::bad_request("No file uploaded"));
    };

    let summary = state.library.upload(&filename, Vec::from(data)).await?;
    Ok(Json(UploadResponse { message: "Book uploaded successfully", book_id: summary.id, name: summary.name }))
}

/// `GET /api/books`: every stored book, content omitted.
pub async fn list_books(State(state): State<AppState>) -> Json<Vec<BookSummary>> {
    Json(state.library.list().await)
}

/// `GET /api/book/{id}`: full content of one book.
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<BookContentResponse>, ApiError> {
    let book = state.library.get(&id).await?;
    Ok(Json(BookContentResponse { content: book.content }))
}

#[cfg(test)]
#[path = "books_test.rs"]
mod tests;
