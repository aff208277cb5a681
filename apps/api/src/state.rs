use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::ContentGenerator;
use crate::posting::PostingFetcher;
use crate::storage::{BlobStore, SourceDocumentProvider};

/// Shared application state injected into all route handlers via Axum extractors.
/// Built once at startup; holds no per-request data.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub fetcher: PostingFetcher,
    /// `None` when `GEMINI_API_KEY` was not set at startup.
    pub generator: Option<Arc<dyn ContentGenerator>>,
    pub sources: Arc<dyn SourceDocumentProvider>,
    pub store: Arc<dyn BlobStore>,
}
