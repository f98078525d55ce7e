use image::{DynamicImage, ImageFormat};
use std::io::Cursor;

use crate::error::{GenGraphicError, Result};
use crate::utils::convert;

/// Load image from bytes (supports PNG, JPEG, WebP, etc.)
pub fn load_image_from_bytes(bytes: &[u8]) -> Result<DynamicImage> {
    image::load_from_memory(bytes).map_err(|e| GenGraphicError::Decode(e.to_string()))
}

/// Load image from a base64 payload as returned by the model.
pub fn load_image_from_base64(encoded: &str) -> Result<DynamicImage> {
    let bytes = convert::decode_base64(encoded)?;
    load_image_from_bytes(&bytes)
}

/// Save image to PNG bytes
pub fn save_image_to_bytes(image: &DynamicImage) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    image.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)?;
    Ok(buf)
}
