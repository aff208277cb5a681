//! Output naming and hand-off to the blob store.

use anyhow::Context;
use chrono::NaiveDate;
use tracing::info;

use crate::errors::AppError;
use crate::render::docx::{write_docx, DOCX_EXTENSION};
use crate::render::Document;
use crate::storage::BlobStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Resume,
    CoverLetter,
}

impl DocumentKind {
    pub fn tag(self) -> &'static str {
        match self {
            DocumentKind::Resume => "Resume",
            DocumentKind::CoverLetter => "CoverLetter",
        }
    }
}

/// Shared filename stem for the pair of documents produced by one request.
///
/// The date is captured once so both files always carry the same stamp.
#[derive(Debug, Clone)]
pub struct OutputNames {
    company: String,
    job_title: String,
    date: NaiveDate,
}

impl OutputNames {
    /// `company` and `job_title` must already be sanitized.
    pub fn new(company: &str, job_title: &str, date: NaiveDate) -> Self {
        Self {
            company: company.to_string(),
            job_title: job_title.to_string(),
            date,
        }
    }

    /// `{company}_{job_title}_{Resume|CoverLetter}_{YYYY-MM-DD}.docx`
    pub fn filename(&self, kind: DocumentKind) -> String {
        format!(
            "{}_{}_{}_{}.{DOCX_EXTENSION}",
            self.company,
            self.job_title,
            kind.tag(),
            self.date.format("%Y-%m-%d")
        )
    }
}

/// A document that reached the blob store.
#[derive(Debug, Clone, PartialEq)]
pub struct Dispatched {
    pub locator: String,
    pub filename: String,
}

/// Writes `doc` to a scratch directory under `filename`, uploads it, and
/// returns its locator. The scratch directory is removed when this returns,
/// including when the upload fails.
pub async fn save_and_upload(
    store: &dyn BlobStore,
    doc: &Document,
    filename: &str,
) -> Result<Dispatched, AppError> {
    let scratch = tempfile::tempdir().context("Failed to create scratch directory")?;
    let path = scratch.path().join(filename);

    // Packing the zip and writing it are blocking
    let owned = doc.clone();
    let target = path.clone();
    tokio::task::spawn_blocking(move || write_docx(&owned, &target))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in docx write: {e}")))??;

    let locator = store.upload(&path).await?;
    info!("Dispatched {filename} to {locator}");

    Ok(Dispatched {
        locator,
        filename: filename.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::render_cover_letter;
    use crate::test_support::RecordingStore;

    fn names() -> OutputNames {
        OutputNames::new(
            "Tech_Corp",
            "Python_Developer",
            NaiveDate::from_ymd_opt(2025, 3, 7).unwrap(),
        )
    }

    #[test]
    fn test_filename_template() {
        let names = names();
        assert_eq!(
            names.filename(DocumentKind::Resume),
            "Tech_Corp_Python_Developer_Resume_2025-03-07.docx"
        );
        assert_eq!(
            names.filename(DocumentKind::CoverLetter),
            "Tech_Corp_Python_Developer_CoverLetter_2025-03-07.docx"
        );
    }

    #[test]
    fn test_empty_components_still_produce_a_name() {
        let names = OutputNames::new("", "", NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        assert_eq!(names.filename(DocumentKind::Resume), "__Resume_2025-01-01.docx");
    }

    #[tokio::test]
    async fn test_upload_receives_named_file_then_scratch_is_removed() {
        let store = RecordingStore::default();
        let doc = render_cover_letter("Hello");

        let dispatched = save_and_upload(&store, &doc, "A_B_CoverLetter_2025-01-01.docx")
            .await
            .unwrap();

        assert_eq!(dispatched.filename, "A_B_CoverLetter_2025-01-01.docx");
        assert_eq!(dispatched.locator, "memory://A_B_CoverLetter_2025-01-01.docx");

        let uploads = store.uploads();
        assert_eq!(uploads.len(), 1);
        assert!(uploads[0].existed_at_upload);
        assert!(!uploads[0].path.exists());
        assert!(!uploads[0].path.parent().unwrap().exists());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_document_is_fully_written_before_upload() {
        let store = RecordingStore::default();
        let doc = render_cover_letter("Dear Team,\n\nSincerely,\nTommy Delta");

        save_and_upload(&store, &doc, "A_B_CoverLetter_2025-01-01.docx")
            .await
            .unwrap();

        let uploads = store.uploads();
        assert_eq!(uploads.len(), 1);
        assert!(uploads[0].existed_at_upload);
        assert!(uploads[0].bytes > 0);
    }

    #[tokio::test]
    async fn test_scratch_removed_when_upload_fails() {
        let store = RecordingStore::failing();
        let doc = render_cover_letter("Hello");

        let err = save_and_upload(&store, &doc, "A_B_Resume_2025-01-01.docx")
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Storage(_)));
        let uploads = store.uploads();
        assert_eq!(uploads.len(), 1);
        assert!(!uploads[0].path.exists());
        assert!(!uploads[0].path.parent().unwrap().exists());
    }
}
