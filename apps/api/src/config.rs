use anyhow::{Context, Result};

const DEFAULT_BUCKET: &str = "knd2321-test2";
const DEFAULT_SOURCE_RESUME_KEY: &str = "John Thomas Delta --  Resume 2025.pdf";

/// Application configuration loaded from environment variables.
///
/// The model credential is optional at startup: requests fail with a
/// configuration error until it is provided.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    pub s3_bucket: String,
    pub source_resume_key: String,
    /// Custom endpoint for S3-compatible stores (MinIO locally). AWS default when unset.
    pub s3_endpoint: Option<String>,
    pub aws_region: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: optional_env("GEMINI_API_KEY"),
            s3_bucket: optional_env("S3_BUCKET").unwrap_or_else(|| DEFAULT_BUCKET.to_string()),
            source_resume_key: optional_env("SOURCE_RESUME_KEY")
                .unwrap_or_else(|| DEFAULT_SOURCE_RESUME_KEY.to_string()),
            s3_endpoint: optional_env("S3_ENDPOINT"),
            aws_region: optional_env("AWS_REGION").unwrap_or_else(|| "us-east-1".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Reads an env var, treating empty values as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
