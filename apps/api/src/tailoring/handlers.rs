//! Axum route handler for the tailoring endpoint.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::lenient;
use crate::state::AppState;
use crate::tailoring::pipeline::{tailor_documents, Collaborators};

const MISSING_KEY_MESSAGE: &str = "GEMINI_API_KEY environment variable not set.";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct CustomizeRequest {
    #[serde(default, deserialize_with = "lenient")]
    pub job_description: Option<String>,
    /// Takes precedence over `job_description` when both are sent.
    #[serde(default, deserialize_with = "lenient")]
    pub job_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CustomizeResponse {
    pub result: &'static str,
    pub resume_docx: String,
    pub resume_filename: String,
    pub cover_letter_docx: String,
    pub cover_letter_filename: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /customize
///
/// Tailors the stored résumé to a job description (or a posting URL) and
/// uploads the résumé and cover letter documents.
#[tracing::instrument(skip_all, fields(request_id = %Uuid::new_v4()))]
pub async fn handle_customize(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<CustomizeResponse>, AppError> {
    let request = parse_request(payload)?;

    let job_description = match non_empty(request.job_url) {
        Some(url) => Some(state.fetcher.fetch_job_description(&url).await?),
        None => non_empty(request.job_description),
    }
    .ok_or_else(|| {
        AppError::Validation("Either 'job_description' or 'job_url' is required.".to_string())
    })?;

    let generator = state
        .generator
        .as_deref()
        .ok_or_else(|| AppError::Configuration(MISSING_KEY_MESSAGE.to_string()))?;

    let collaborators = Collaborators {
        generator,
        sources: state.sources.as_ref(),
        store: state.store.as_ref(),
    };
    let today = chrono::Local::now().date_naive();

    let documents = tailor_documents(
        &collaborators,
        &state.config.source_resume_key,
        &job_description,
        today,
    )
    .await?;

    info!(
        "Tailored documents ready: {}, {}",
        documents.resume.filename, documents.cover_letter.filename
    );

    Ok(Json(CustomizeResponse {
        result: "Success",
        resume_docx: documents.resume.locator,
        resume_filename: documents.resume.filename,
        cover_letter_docx: documents.cover_letter.locator,
        cover_letter_filename: documents.cover_letter.filename,
    }))
}

/// Accepts only a non-empty JSON object body.
fn parse_request(payload: Result<Json<Value>, JsonRejection>) -> Result<CustomizeRequest, AppError> {
    let body_required = || AppError::Validation("JSON body required".to_string());

    let Ok(Json(body)) = payload else {
        return Err(body_required());
    };
    if !body.as_object().is_some_and(|o| !o.is_empty()) {
        return Err(body_required());
    }

    serde_json::from_value(body).map_err(|_| body_required())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
