//! Resume tailoring: orchestrates one request end to end.
//!
//! Flow: source résumé text → prompt → model → normalize → render both
//! documents → name → upload. A failure at any step ends the request.

use chrono::NaiveDate;
use tracing::info;

use crate::errors::AppError;
use crate::llm_client::prompts::build_tailoring_prompt;
use crate::llm_client::ContentGenerator;
use crate::render::{render_cover_letter, render_resume};
use crate::storage::{BlobStore, SourceDocumentProvider};
use crate::tailoring::dispatch::{save_and_upload, Dispatched, DocumentKind, OutputNames};
use crate::tailoring::normalize::normalize_model_output;

/// Collaborators one tailoring run talks to.
pub struct Collaborators<'a> {
    pub generator: &'a dyn ContentGenerator,
    pub sources: &'a dyn SourceDocumentProvider,
    pub store: &'a dyn BlobStore,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TailoredDocuments {
    pub resume: Dispatched,
    pub cover_letter: Dispatched,
}

/// Runs the pipeline for a resolved job description.
///
/// `today` stamps both filenames; the caller reads the clock once.
pub async fn tailor_documents(
    collaborators: &Collaborators<'_>,
    source_id: &str,
    job_description: &str,
    today: NaiveDate,
) -> Result<TailoredDocuments, AppError> {
    let resume_text = collaborators.sources.extract_text(source_id).await?;
    info!("Extracted {} chars from source resume", resume_text.len());

    let prompt = build_tailoring_prompt(job_description, &resume_text);
    let raw = collaborators.generator.generate(&prompt).await?;
    let normalized = normalize_model_output(&raw)?;
    info!(
        "Generated content for {} / {}",
        normalized.company, normalized.job_title
    );

    let resume_doc = render_resume(&normalized.resume, normalized.skills.as_deref());
    let letter_doc = render_cover_letter(&normalized.cover_letter_text);

    let names = OutputNames::new(&normalized.company, &normalized.job_title, today);
    let resume = save_and_upload(
        collaborators.store,
        &resume_doc,
        &names.filename(DocumentKind::Resume),
    )
    .await?;
    let cover_letter = save_and_upload(
        collaborators.store,
        &letter_doc,
        &names.filename(DocumentKind::CoverLetter),
    )
    .await?;

    Ok(TailoredDocuments {
        resume,
        cover_letter,
    })
}
