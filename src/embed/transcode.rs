use std::io::Cursor;

use image::ImageOutputFormat;

use crate::error::GifError;

const JPEG_QUALITY: u8 = 85;

/// Converts fetched preview bytes into the format uploaded as the thumbnail.
pub trait Transcoder: Send + Sync {
    fn content_type(&self) -> &'static str;

    fn transcode(&self, bytes: &[u8]) -> Result<Vec<u8>, GifError>;
}

/// Decodes any supported image and re-encodes its first frame as JPEG.
#[derive(Debug, Clone, Copy)]
pub struct JpegTranscoder {
    quality: u8,
}

impl JpegTranscoder {
    pub fn new(quality: u8) -> Self {
        Self { quality }
    }
}

impl Default for JpegTranscoder {
    fn default() -> Self {
        Self::new(JPEG_QUALITY)
    }
}

impl Transcoder for JpegTranscoder {
    fn content_type(&self) -> &'static str {
        "image/jpeg"
    }

    fn transcode(&self, bytes: &[u8]) -> Result<Vec<u8>, GifError> {
        // load_from_memory only yields the first frame of an animated GIF
        let img = image::load_from_memory(bytes)
            .map_err(|e| GifError::Transcode(e.to_string()))?;

        // JPEG has no alpha channel
        let rgb = image::DynamicImage::ImageRgb8(img.to_rgb8());

        let mut out = Cursor::new(Vec::new());
        rgb.write_to(&mut out, ImageOutputFormat::Jpeg(self.quality))
            .map_err(|e| GifError::Transcode(e.to_string()))?;
        Ok(out.into_inner())
    }
}
