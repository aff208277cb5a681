use std::io::Write;
use std::path::Path;

use anyhow::Context;
use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;
use tempfile::NamedTempFile;
use tracing::info;

use crate::errors::AppError;
use crate::storage::{pdf_text, BlobStore, SourceDocumentProvider};

/// S3 (or MinIO) bucket holding both the source résumé and the outputs.
#[derive(Clone)]
pub struct S3Storage {
    client: aws_sdk_s3::Client,
    bucket: String,
}

impl S3Storage {
    pub fn new(client: aws_sdk_s3::Client, bucket: String) -> Self {
        Self { client, bucket }
    }

    pub fn locator(&self, key: &str) -> String {
        format!("s3://{}/{}", self.bucket, key)
    }

    async fn download(&self, key: &str) -> Result<Bytes, AppError> {
        let object = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| {
                AppError::Storage(format!(
                    "S3 download of {} failed: {}",
                    self.locator(key),
                    aws_sdk_s3::error::DisplayErrorContext(&e)
                ))
            })?;

        let data = object
            .body
            .collect()
            .await
            .map_err(|e| AppError::Storage(format!("S3 body read failed: {e}")))?;
        Ok(data.into_bytes())
    }
}

#[async_trait]
impl SourceDocumentProvider for S3Storage {
    async fn extract_text(&self, key: &str) -> Result<String, AppError> {
        let bytes = self.download(key).await?;
        info!("Downloaded source document {} ({} bytes)", self.locator(key), bytes.len());

        // Removed when `temp` drops, whichever way extraction ends.
        let mut temp = NamedTempFile::new().context("Failed to create temp file for PDF")?;
        temp.write_all(&bytes)
            .context("Failed to write downloaded PDF")?;

        tokio::task::spawn_blocking(move || pdf_text(temp.path()))
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in PDF extraction: {e}")))?
    }
}

#[async_trait]
impl BlobStore for S3Storage {
    async fn upload(&self, local_path: &Path) -> Result<String, AppError> {
        let key = local_path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                AppError::Storage(format!("Invalid upload path {}", local_path.display()))
            })?
            .to_string();

        let body = ByteStream::from_path(local_path)
            .await
            .map_err(|e| AppError::Storage(format!("Failed to read {}: {e}", local_path.display())))?;

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .body(body)
            .content_type(
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            )
            .send()
            .await
            .map_err(|e| {
                AppError::Storage(format!(
                    "S3 upload failed: {}",
                    aws_sdk_s3::error::DisplayErrorContext(&e)
                ))
            })?;

        let locator = self.locator(&key);
        info!("Uploaded {locator}");
        Ok(locator)
    }
}
