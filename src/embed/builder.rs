use std::sync::Arc;

use reqwest::Client;

use super::blob_store::{BlobStore, XrpcBlobStore};
use super::models::{EmbedSelection, SelectedEmbed};
use super::transcode::{JpegTranscoder, Transcoder};
use crate::error::{GifError, UpstreamService};
use crate::tenor::TenorClient;
use crate::AppConfig;

/// Tenor previews are single small frames; anything near this is not one.
pub const DEFAULT_MAX_PREVIEW_BYTES: usize = 5 * 1024 * 1024;

/// Turns a GIF selection into a postable external embed.
#[derive(Clone)]
pub struct EmbedBuilder {
    http: Client,
    tenor: TenorClient,
    transcoder: Arc<dyn Transcoder>,
    blob_store: Arc<dyn BlobStore>,
    max_preview_bytes: usize,
}

impl EmbedBuilder {
    pub fn new(
        http: Client,
        tenor: TenorClient,
        transcoder: Arc<dyn Transcoder>,
        blob_store: Arc<dyn BlobStore>,
    ) -> Self {
        Self {
            http,
            tenor,
            transcoder,
            blob_store,
            max_preview_bytes: DEFAULT_MAX_PREVIEW_BYTES,
        }
    }

    /// Caps how much of the preview body is read before giving up.
    pub fn with_max_preview_bytes(mut self, max_preview_bytes: usize) -> Self {
        self.max_preview_bytes = max_preview_bytes;
        self
    }

    pub fn from_config(config: &AppConfig, http: Client, tenor: TenorClient) -> Self {
        let blob_store = XrpcBlobStore::new(http.clone(), &config.blob_upload_url);
        Self::new(
            http,
            tenor,
            Arc::new(JpegTranscoder::default()),
            Arc::new(blob_store),
        )
        .with_max_preview_bytes(config.max_preview_bytes)
    }

    pub async fn build_embed(&self, selection: &EmbedSelection) -> Result<SelectedEmbed, GifError> {
        // Analytics only; never awaited and never allowed to fail the embed.
        let _ = self.tenor.spawn_register_share(selection.id.clone());

        let preview = self.fetch_preview(&selection.preview_url).await?;

        let transcoder = self.transcoder.clone();
        let content_type = transcoder.content_type();
        let thumbnail = tokio::task::spawn_blocking(move || transcoder.transcode(&preview))
            .await
            .map_err(|e| GifError::Transcode(format!("transcode task failed: {}", e)))??;

        let blob = self
            .blob_store
            .upload_blob(thumbnail, content_type, &selection.token)
            .await?;

        tracing::info!("built embed for gif {}", selection.id);
        Ok(SelectedEmbed::new(&selection.asset_url, blob))
    }

    async fn fetch_preview(&self, preview_url: &str) -> Result<Vec<u8>, GifError> {
        let mut response = self
            .http
            .get(preview_url)
            .send()
            .await
            .map_err(|e| GifError::network(UpstreamService::Preview, e))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("preview fetch returned {}", status);
            return Err(GifError::from_status(UpstreamService::Preview, status));
        }

        let limit = self.max_preview_bytes;
        if response.content_length().is_some_and(|len| len > limit as u64) {
            return Err(GifError::PreviewTooLarge { limit });
        }

        // Content-Length may be absent or wrong, so the cap also applies while reading
        let mut preview = Vec::new();
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| GifError::network(UpstreamService::Preview, e))?
        {
            if preview.len() + chunk.len() > limit {
                return Err(GifError::PreviewTooLarge { limit });
            }
            preview.extend_from_slice(&chunk);
        }
        Ok(preview)
    }
}
