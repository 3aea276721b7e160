//! Saving QR codes delivered as base64-encoded PNG payloads.

use crate::error::ClientError;
use base64::Engine as _;
use std::path::Path;

/// PNG file signature.
const PNG_MAGIC: &[u8; 8] = b"\x89PNG\r\n\x1a\n";

/// Data-URL prefix some backends include in the payload.
const DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// Decodes a base64 QR payload into PNG bytes.
///
/// Accepts the raw base64 string as well as a full
/// `data:image/png;base64,...` data URL.
///
/// # Errors
///
/// Returns [`ClientError::QrDecode`] for malformed base64 and
/// [`ClientError::QrNotPng`] when the decoded bytes are not a PNG image.
pub fn decode_png(qr_code_base64: &str) -> Result<Vec<u8>, ClientError> {
    let raw = qr_code_base64
        .strip_prefix(DATA_URL_PREFIX)
        .unwrap_or(qr_code_base64)
        .trim();

    let bytes = base64::engine::general_purpose::STANDARD.decode(raw)?;

    if !bytes.starts_with(PNG_MAGIC) {
        return Err(ClientError::QrNotPng);
    }

    Ok(bytes)
}

/// Decodes a base64 QR payload and writes the PNG to `path`.
///
/// # Errors
///
/// Returns the decode errors of [`decode_png`], or
/// [`ClientError::QrWrite`] when the file cannot be written.
pub fn save_png(qr_code_base64: &str, path: &Path) -> Result<(), ClientError> {
    let bytes = decode_png(qr_code_base64)?;
    std::fs::write(path, &bytes)?;

    tracing::debug!("wrote QR code ({} bytes) to {}", bytes.len(), path.display());
    Ok(())
}
