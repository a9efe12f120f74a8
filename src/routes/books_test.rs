use std::sync::Arc;

use axum::body::Body;
use axum::extract::FromRequest;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Request, StatusCode};

use super::*;
use crate::state::test_helpers::{MockGenerate, test_app_state};

const BOUNDARY: &str = "bookchat-test-boundary";

fn multipart_body(field: &str, filename: &str, data: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n\
             Content-Type: application/octet-stream\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    body
}

async fn multipart_from(body: Vec<u8>) -> Result<Multipart, MultipartRejection> {
    let request = Request::builder()
        .method("POST")
        .uri("/api/upload-book")
        .header(CONTENT_TYPE, format!("multipart/form-data; boundary={BOUNDARY}"))
        .body(Body::from(body))
        .unwrap();
    Ok(Multipart::from_request(request, &()).await.unwrap())
}

fn state() -> (AppState, tempfile::TempDir) {
    test_app_state(Arc::new(MockGenerate::replying(&[])))
}

#[tokio::test]
async fn upload_txt_then_list_and_get() {
    let (state, _dir) = state();

    let Json(uploaded) = upload_book(State(state.clone()), multipart_from(multipart_body("file", "hello.txt", b"hello")).await)
        .await
        .unwrap();
    assert_eq!(uploaded.message, "Book uploaded successfully");
    assert_eq!(uploaded.name, "hello.txt");

    let Json(books) = list_books(State(state.clone())).await;
    assert_eq!(books, vec![BookSummary { id: uploaded.book_id.clone(), name: "hello.txt".into() }]);

    let Json(book) = get_book(State(state.clone()), Path(uploaded.book_id)).await.unwrap();
    assert_eq!(book.content, "hello");

    let leftover = std::fs::read_dir(state.library.upload_dir()).unwrap().count();
    assert_eq!(leftover, 0);
}

#[tokio::test]
async fn upload_response_uses_camel_case() {
    let (state, _dir) = state();
    let Json(uploaded) = upload_book(State(state), multipart_from(multipart_body("file", "a.md", b"# A")).await)
        .await
        .unwrap();
    let value = serde_json::to_value(&uploaded).unwrap();
    assert!(value.get("bookId").is_some());
    assert!(value.get("book_id").is_none());
}

#[tokio::test]
async fn upload_docx_is_400_and_adds_nothing() {
    let (state, _dir) = state();

    let err = upload_book(State(state.clone()), multipart_from(multipart_body("file", "report.docx", b"PK")).await)
        .await
        .unwrap_err();
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);

    let Json(books) = list_books(State(state)).await;
    assert!(books.is_empty());
}

#[tokio::test]
async fn upload_without_file_field_is_400() {
    let (state, _dir) = state();

    let err = upload_book(State(state), multipart_from(multipart_body("attachment", "a.txt", b"x")).await)
        .await
        .unwrap_err();
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    assert_eq!(err.message, "No file uploaded");
}

#[tokio::test]
async fn upload_unparseable_pdf_is_500() {
    let (state, _dir) = state();

    let err = upload_book(State(state.clone()), multipart_from(multipart_body("file", "scan.pdf", b"garbage")).await)
        .await
        .unwrap_err();
    assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(state.library.is_empty().await);
}

#[tokio::test]
async fn get_unknown_book_is_404() {
    let (state, _dir) = state();

    let err = get_book(State(state), Path("does-not-exist".into())).await.unwrap_err();
    assert_eq!(err.status(), StatusCode::NOT_FOUND);
    assert_eq!(err.message, "Book not found");
}

#[tokio::test]
async fn upload_without_multipart_content_type_is_400() {
    let (state, _dir) = state();
    let request = Request::builder()
        .method("POST")
        .uri("/api/upload-book")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"file":"hello"}"#))
        .unwrap();
    let Err(rejection) = Multipart::from_request(request, &()).await else {
        panic!("a JSON content type should be rejected as multipart");
    };

    let err = upload_book(State(state.clone()), Err(rejection)).await.unwrap_err();
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    assert_eq!(err.code, "E_BAD_REQUEST");
    assert!(state.library.is_empty().await);
}
