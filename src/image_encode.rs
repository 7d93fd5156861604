//! Image uploads are stored inline as size-capped JPEG data URIs.

use anyhow::{Context, Result, bail};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageReader};
use std::io::Cursor;
use std::path::Path;
use tracing::debug;

pub const MAX_DIMENSION: u32 = 1200;
pub const JPEG_QUALITY: u8 = 80;
const DATA_URI_PREFIX: &str = "data:image/jpeg;base64,";

/// Read an image file and return it as a JPEG data URI.
pub fn encode_data_uri(path: &Path) -> Result<String> {
    let bytes =
        std::fs::read(path).with_context(|| format!("failed to read image {}", path.display()))?;
    encode_image_bytes(&bytes).with_context(|| format!("failed to encode {}", path.display()))
}

/// Downscale so neither side exceeds [`MAX_DIMENSION`], re-encode as JPEG at
/// [`JPEG_QUALITY`], and wrap as a data URI.
pub fn encode_image_bytes(raw: &[u8]) -> Result<String> {
    let img = ImageReader::new(Cursor::new(raw))
        .with_guessed_format()
        .context("could not guess image format")?
        .decode()
        .context("could not decode image")?;

    let (width, height) = img.dimensions();
    let img = if width.max(height) > MAX_DIMENSION {
        img.resize(MAX_DIMENSION, MAX_DIMENSION, FilterType::Triangle)
    } else {
        img
    };
    // JPEG has no alpha channel.
    let rgb = DynamicImage::ImageRgb8(img.to_rgb8());

    let mut buf = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut buf, JPEG_QUALITY);
    rgb.write_with_encoder(encoder)
        .context("JPEG encode failed")?;
    debug!(
        from_width = width,
        from_height = height,
        width = rgb.width(),
        height = rgb.height(),
        bytes = buf.len(),
        "Encoded image upload"
    );

    Ok(format!("{DATA_URI_PREFIX}{}", STANDARD.encode(&buf)))
}

/// Bytes of a base64 `data:` URI, for display.
pub fn decode_data_uri(uri: &str) -> Result<Vec<u8>> {
    let Some(rest) = uri.strip_prefix("data:") else {
        bail!("not a data URI");
    };
    let Some((meta, payload)) = rest.split_once(',') else {
        bail!("data URI has no payload");
    };
    if !meta.ends_with(";base64") {
        bail!("data URI is not base64 encoded");
    }
    STANDARD
        .decode(payload.trim())
        .context("invalid base64 payload")
}
