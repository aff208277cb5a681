//! Storage collaborators: the stored source résumé and the output bucket.
//!
//! Both are traits so the request pipeline can run against in-memory fakes.
//! `AppState` carries them as `Arc<dyn _>`.

pub mod s3;

use std::path::Path;

use async_trait::async_trait;

use crate::errors::AppError;

pub const EMPTY_SOURCE_MESSAGE: &str = "Could not extract text from the resume PDF.";

/// Yields the plain text of a stored source document.
#[async_trait]
pub trait SourceDocumentProvider: Send + Sync {
    /// Fails when the document is unreadable or contains no text.
    async fn extract_text(&self, id: &str) -> Result<String, AppError>;
}

/// Destination for finished documents.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Uploads the file under its own file name and returns its locator.
    async fn upload(&self, local_path: &Path) -> Result<String, AppError>;
}

/// Extracts text from a PDF on disk. Blocking; call from `spawn_blocking`.
pub fn pdf_text(path: &Path) -> Result<String, AppError> {
    let text = pdf_extract::extract_text(path)
        .map_err(|e| AppError::Extraction(format!("{EMPTY_SOURCE_MESSAGE} ({e})")))?;
    require_text(text)
}

/// Rejects extracted text that is empty or whitespace only.
pub fn require_text(text: String) -> Result<String, AppError> {
    if text.trim().is_empty() {
        return Err(AppError::Extraction(EMPTY_SOURCE_MESSAGE.to_string()));
    }
    Ok(text)
}
