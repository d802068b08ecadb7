use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::directory::DirectoryError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Document analysis is not configured")]
    AnalysisDisabled,

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Directory error: {0}")]
    Directory(#[from] DirectoryError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::AnalysisDisabled => (
                StatusCode::SERVICE_UNAVAILABLE,
                "ANALYSIS_DISABLED",
                "Document analysis is not configured on this server".to_string(),
            ),
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "LLM_ERROR",
                    "The document analysis service failed".to_string(),
                )
            }
            AppError::Directory(e) => {
                tracing::error!("Directory error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DIRECTORY_ERROR",
                    "The people directory is unavailable".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (AppError::NotFound("p9".into()), StatusCode::NOT_FOUND),
            (AppError::Validation("empty".into()), StatusCode::BAD_REQUEST),
            (AppError::AnalysisDisabled, StatusCode::SERVICE_UNAVAILABLE),
            (AppError::Llm("timeout".into()), StatusCode::BAD_GATEWAY),
            (
                AppError::Directory(DirectoryError::Unavailable("down".into())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }
}
