use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every variant is terminal for the request: nothing in the pipeline retries.
#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed or missing request input.
    #[error("{0}")]
    Validation(String),

    /// The job posting URL could not be fetched or decoded.
    #[error("Failed to fetch job URL: {0}")]
    Fetch(String),

    /// A process-wide setting needed for this request is missing.
    #[error("{0}")]
    Configuration(String),

    /// The stored résumé yielded no usable text.
    #[error("{0}")]
    Extraction(String),

    /// The model answered with text that is not JSON.
    #[error("Failed to generate valid JSON content from model.")]
    InvalidGeneratedContent,

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("{0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::Fetch(_) => StatusCode::BAD_REQUEST,
            AppError::Configuration(_)
            | AppError::Extraction(_)
            | AppError::InvalidGeneratedContent
            | AppError::Llm(_)
            | AppError::Storage(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();

        if status.is_server_error() {
            match &self {
                AppError::Internal(e) => tracing::error!("Internal error: {e:?}"),
                other => tracing::error!("Request failed: {other}"),
            }
        } else {
            tracing::warn!("Rejected request: {message}");
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}
