//! Job posting retrieval: fetch a URL and reduce the page to plain text.

pub mod text;

use std::time::Duration;

use reqwest::Client;
use tracing::info;

use crate::errors::AppError;

/// Postings are fetched once with a short timeout and never retried.
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone)]
pub struct PostingFetcher {
    client: Client,
}

impl PostingFetcher {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            client: Client::builder().timeout(FETCH_TIMEOUT).build()?,
        })
    }

    /// Fetches the posting and returns its cleaned text behind a provenance header.
    pub async fn fetch_job_description(&self, url: &str) -> Result<String, AppError> {
        info!("Fetching job description from: {url}");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| AppError::Fetch(e.to_string()))?;

        let body = response
            .bytes()
            .await
            .map_err(|e| AppError::Fetch(e.to_string()))?;

        let cleaned = text::clean_html(&String::from_utf8_lossy(&body));
        Ok(with_provenance(url, &cleaned))
    }
}

/// Prefixes scraped text with the URL it came from.
pub fn with_provenance(url: &str, text: &str) -> String {
    format!("Content fetched from {url}:\n\n{text}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provenance_header() {
        assert_eq!(
            with_provenance("https://jobs.example.com/42", "Rust Engineer"),
            "Content fetched from https://jobs.example.com/42:\n\nRust Engineer"
        );
    }

    #[tokio::test]
    async fn test_unreachable_url_is_fetch_error() {
        let fetcher = PostingFetcher::new().unwrap();
        let err = fetcher
            .fetch_job_description("http://127.0.0.1:9/posting")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Fetch(_)));
        assert!(err.to_string().starts_with("Failed to fetch job URL: "));
    }

    #[tokio::test]
    async fn test_malformed_url_is_fetch_error() {
        let fetcher = PostingFetcher::new().unwrap();
        let err = fetcher.fetch_job_description("not a url").await.unwrap_err();
        assert!(matches!(err, AppError::Fetch(_)));
    }
}
