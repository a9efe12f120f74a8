use super::*;
use crate::extract::{DocumentFormat, ExtractError};
use crate::llm::types::LlmError;

#[test]
fn kind_status_contract() {
    assert_eq!(ApiErrorKind::BadRequest.status(), StatusCode::BAD_REQUEST);
    assert_eq!(ApiErrorKind::UnsupportedFormat.status(), StatusCode::BAD_REQUEST);
    assert_eq!(ApiErrorKind::NotFound.status(), StatusCode::NOT_FOUND);
    assert_eq!(ApiErrorKind::UpstreamFailure.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(ApiErrorKind::ExtractionFailure.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(ApiErrorKind::InternalFailure.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn library_unsupported_maps_to_400() {
    let err = ApiError::from(LibraryError::UnsupportedFormat { extension: "docx".into() });
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    assert_eq!(err.code, "E_UNSUPPORTED_FORMAT");
}

#[test]
fn library_not_found_maps_to_404() {
    let err = ApiError::from(LibraryError::NotFound("1".into()));
    assert_eq!(err.status(), StatusCode::NOT_FOUND);
    assert_eq!(err.message, "Book not found");
}

#[test]
fn library_extract_maps_to_500_without_details() {
    let err = ApiError::from(LibraryError::Extract(ExtractError::Parse {
        format: DocumentFormat::Pdf,
        message: "xref table broken at offset 42".into(),
    }));
    assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(err.kind, ApiErrorKind::ExtractionFailure);
    assert!(!err.message.contains("xref"));
}

#[test]
fn library_timeout_maps_to_500() {
    let err = ApiError::from(LibraryError::ExtractTimeout { secs: 60 });
    assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(err.code, "E_EXTRACT_TIMEOUT");
}

#[test]
fn chat_upstream_maps_to_502() {
    let err = ApiError::from(ChatError::Upstream(LlmError::ApiRequest("refused".into())));
    assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(err.code, "E_UPSTREAM");
}

#[tokio::test]
async fn into_response_writes_error_body() {
    let response = ApiError::bad_request("No file uploaded").into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, serde_json::json!({"error": "No file uploaded", "code": "E_BAD_REQUEST"}));
}
