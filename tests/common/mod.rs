#![allow(dead_code)]

use std::io::Cursor;
use std::sync::Arc;

use gif_relay::embed::{EmbedBuilder, EmbedSelection, Transcoder, XrpcBlobStore};
use gif_relay::error::GifError;
use gif_relay::tenor::TenorClient;
use image::{ImageBuffer, ImageOutputFormat, Rgba};

pub const API_KEY: &str = "test-api-key";
pub const CLIENT_KEY: &str = "graysky";

/// Passes bytes through unchanged so tests can assert on the uploaded body.
pub struct IdentityTranscoder;

impl Transcoder for IdentityTranscoder {
    fn content_type(&self) -> &'static str {
        "image/gif"
    }

    fn transcode(&self, bytes: &[u8]) -> Result<Vec<u8>, GifError> {
        Ok(bytes.to_vec())
    }
}

pub fn tenor_client(base_url: &str) -> TenorClient {
    TenorClient::new(reqwest::Client::new(), base_url, API_KEY, CLIENT_KEY)
        .expect("valid Tenor base URL")
}

pub fn embed_builder(
    tenor_url: &str,
    upload_url: &str,
    transcoder: Arc<dyn Transcoder>,
) -> EmbedBuilder {
    embed_builder_with_client(reqwest::Client::new(), tenor_url, upload_url, transcoder)
}

pub fn embed_builder_with_client(
    http: reqwest::Client,
    tenor_url: &str,
    upload_url: &str,
    transcoder: Arc<dyn Transcoder>,
) -> EmbedBuilder {
    let tenor = TenorClient::new(http.clone(), tenor_url, API_KEY, CLIENT_KEY)
        .expect("valid Tenor base URL");
    let store = XrpcBlobStore::new(http.clone(), upload_url);
    EmbedBuilder::new(http, tenor, transcoder, Arc::new(store))
}

pub fn selection(preview_url: &str) -> EmbedSelection {
    EmbedSelection {
        id: "1".to_string(),
        asset_url: "https://x/1.gif".to_string(),
        preview_url: preview_url.to_string(),
        title: Some("A cat".to_string()),
        description: Some("A cat falling off a table".to_string()),
        token: "tok".to_string(),
    }
}

/// A tiny single-frame GIF, like Tenor's `preview` format.
pub fn preview_gif() -> Vec<u8> {
    let img: ImageBuffer<Rgba<u8>, Vec<u8>> =
        ImageBuffer::from_fn(4, 4, |x, y| Rgba([(x * 60) as u8, (y * 60) as u8, 128, 255]));
    let mut out = Cursor::new(Vec::new());
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut out, ImageOutputFormat::Gif)
        .expect("encode test gif");
    out.into_inner()
}
