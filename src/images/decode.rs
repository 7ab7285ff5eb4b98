//! Decoding fetched bytes into an embeddable JPEG

use image::codecs::jpeg::JpegEncoder;

use super::ImageError;
use crate::render::EmbeddedImage;

const JPEG_QUALITY: u8 = 90;

/// Decode any supported raster format and re-encode it as baseline RGB JPEG
///
/// Alpha is dropped; the catalog page background is white.
pub fn decode_for_embedding(bytes: &[u8]) -> Result<EmbeddedImage, ImageError> {
    let decoded = image::load_from_memory(bytes).map_err(|e| ImageError::Decode(e.to_string()))?;
    let rgb = decoded.to_rgb8();
    let (width, height) = rgb.dimensions();

    let mut jpeg = Vec::new();
    JpegEncoder::new_with_quality(&mut jpeg, JPEG_QUALITY)
        .encode_image(&rgb)
        .map_err(|e| ImageError::Decode(e.to_string()))?;

    Ok(EmbeddedImage {
        width,
        height,
        jpeg,
    })
}
