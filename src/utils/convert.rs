//! Conversions between raw bytes, base64 payloads and `data:` URLs.

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};

use crate::error::{GenGraphicError, Result};

const PNG_DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// Encode raw bytes as standard base64.
pub fn encode_base64(bytes: &[u8]) -> String {
    BASE64.encode(bytes)
}

/// Decode a standard base64 payload. Surrounding whitespace is ignored.
pub fn decode_base64(encoded: &str) -> Result<Vec<u8>> {
    BASE64
        .decode(encoded.trim())
        .map_err(|e| GenGraphicError::Decode(format!("invalid base64 payload: {}", e)))
}

/// Wrap PNG bytes into a `data:image/png;base64,...` URL.
pub fn png_data_url(png_bytes: &[u8]) -> String {
    format!("{}{}", PNG_DATA_URL_PREFIX, encode_base64(png_bytes))
}

/// Extract the bytes carried by a base64 `data:` URL of any media type.
pub fn data_url_bytes(url: &str) -> Result<Vec<u8>> {
    let rest = url
        .strip_prefix("data:")
        .ok_or_else(|| GenGraphicError::Decode("not a data URL".into()))?;
    let (meta, payload) = rest
        .split_once(',')
        .ok_or_else(|| GenGraphicError::Decode("data URL has no payload".into()))?;
    if !meta.ends_with(";base64") {
        return Err(GenGraphicError::Decode(
            "only base64 data URLs are supported".into(),
        ));
    }
    decode_base64(payload)
}
