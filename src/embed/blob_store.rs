use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;

use super::models::{BlobRef, UploadBlobResponse};
use crate::error::{GifError, UpstreamService};

#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Uploads `bytes` on behalf of the account that owns `token`.
    async fn upload_blob(
        &self,
        bytes: Vec<u8>,
        content_type: &str,
        token: &str,
    ) -> Result<BlobRef, GifError>;
}

/// `com.atproto.repo.uploadBlob` over XRPC.
#[derive(Clone)]
pub struct XrpcBlobStore {
    http: Client,
    upload_url: String,
}

impl XrpcBlobStore {
    pub fn new(http: Client, upload_url: &str) -> Self {
        Self {
            http,
            upload_url: upload_url.to_string(),
        }
    }
}

#[async_trait]
impl BlobStore for XrpcBlobStore {
    async fn upload_blob(
        &self,
        bytes: Vec<u8>,
        content_type: &str,
        token: &str,
    ) -> Result<BlobRef, GifError> {
        let size = bytes.len();
        let response = self
            .http
            .post(&self.upload_url)
            .header(CONTENT_TYPE, content_type)
            .header(AUTHORIZATION, format!("Bearer {}", token))
            .body(bytes)
            .send()
            .await
            .map_err(|e| GifError::network(UpstreamService::BlobStore, e))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("blob upload of {} bytes returned {}", size, status);
            return Err(GifError::from_status(UpstreamService::BlobStore, status));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| GifError::network(UpstreamService::BlobStore, e))?;
        let parsed: UploadBlobResponse = serde_json::from_slice(&body)
            .map_err(|e| GifError::MalformedResponse(format!("uploadBlob: {}", e)))?;

        tracing::debug!("uploaded {} byte thumbnail", size);
        Ok(parsed.blob)
    }
}
