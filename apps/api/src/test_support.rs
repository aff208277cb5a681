//! In-memory collaborators for pipeline and router tests.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::config::Config;
use crate::errors::AppError;
use crate::llm_client::ContentGenerator;
use crate::posting::PostingFetcher;
use crate::state::AppState;
use crate::storage::{require_text, BlobStore, SourceDocumentProvider};

/// Returns a canned model answer and remembers the prompts it saw.
#[derive(Default)]
pub struct FakeGenerator {
    answer: String,
    prompts: Mutex<Vec<String>>,
}

impl FakeGenerator {
    pub fn answering(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContentGenerator for FakeGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, AppError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok(self.answer.clone())
    }
}

/// Serves a fixed source résumé text.
pub struct FakeSource {
    text: String,
    pub calls: AtomicUsize,
}

impl FakeSource {
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl SourceDocumentProvider for FakeSource {
    async fn extract_text(&self, _id: &str) -> Result<String, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        require_text(self.text.clone())
    }
}

#[derive(Debug, Clone)]
pub struct RecordedUpload {
    pub path: PathBuf,
    pub existed_at_upload: bool,
    pub bytes: usize,
}

/// Records every upload; optionally fails each one.
#[derive(Default)]
pub struct RecordingStore {
    fail: bool,
    uploads: Mutex<Vec<RecordedUpload>>,
}

impl RecordingStore {
    pub fn failing() -> Self {
        Self {
            fail: true,
            uploads: Mutex::new(Vec::new()),
        }
    }

    pub fn uploads(&self) -> Vec<RecordedUpload> {
        self.uploads.lock().unwrap().clone()
    }

    pub fn filenames(&self) -> Vec<String> {
        self.uploads()
            .iter()
            .filter_map(|u| u.path.file_name()?.to_str().map(String::from))
            .collect()
    }
}

#[async_trait]
impl BlobStore for RecordingStore {
    async fn upload(&self, local_path: &Path) -> Result<String, AppError> {
        let bytes = std::fs::metadata(local_path).map(|m| m.len() as usize).unwrap_or(0);
        self.uploads.lock().unwrap().push(RecordedUpload {
            path: local_path.to_path_buf(),
            existed_at_upload: local_path.exists(),
            bytes,
        });
        if self.fail {
            return Err(AppError::Storage("bucket unavailable".to_string()));
        }
        let name = local_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();
        Ok(format!("memory://{name}"))
    }
}

pub fn test_config(api_key: Option<&str>) -> Config {
    Config {
        gemini_api_key: api_key.map(String::from),
        s3_bucket: "test-bucket".to_string(),
        source_resume_key: "source.pdf".to_string(),
        s3_endpoint: None,
        aws_region: "us-east-1".to_string(),
        port: 0,
        rust_log: "debug".to_string(),
    }
}

/// App state over fakes. `generator: None` models a missing API key.
pub fn test_state(
    generator: Option<Arc<FakeGenerator>>,
    source: Arc<FakeSource>,
    store: Arc<RecordingStore>,
) -> AppState {
    let api_key = generator.as_ref().map(|_| "TEST_KEY");
    AppState {
        config: test_config(api_key),
        fetcher: PostingFetcher::new().unwrap(),
        generator: generator.map(|g| g as Arc<dyn ContentGenerator>),
        sources: source,
        store,
    }
}
