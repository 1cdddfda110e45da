//! File input boundary: local images become data URIs before use.

use std::path::Path;

use crate::data_uri::DataUri;
use crate::error::StudioError;

/// Upload size ceiling: 5 MB.
pub const MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

/// Sniff an image MIME type from magic bytes.
///
/// Only image types are recognized; anything else is rejected upstream.
#[must_use]
pub fn sniff_mime(data: &[u8]) -> Option<&'static str> {
    if data.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]) {
        return Some("image/png");
    }
    if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
        return Some("image/jpeg");
    }
    if data.len() >= 12 && data.starts_with(b"RIFF") && &data[8..12] == b"WEBP" {
        return Some("image/webp");
    }
    if data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a") {
        return Some("image/gif");
    }
    None
}

/// Read a local image file and encode it as a data URI.
///
/// The size ceiling and MIME restriction are checked before anything else
/// happens with the file's contents.
///
/// # Errors
///
/// Returns an error if the file cannot be read, exceeds the ceiling, or is
/// not a recognized image type.
pub fn load_source_image(path: &Path) -> Result<String, StudioError> {
    let metadata = std::fs::metadata(path)?;
    if metadata.len() > MAX_UPLOAD_BYTES {
        return Err(StudioError::InvalidArgument("File size too large. Max 5MB".into()));
    }
    let data = std::fs::read(path)?;
    let mime = sniff_mime(&data).ok_or_else(|| {
        StudioError::InvalidArgument(format!("Not a recognized image file: {}", path.display()))
    })?;
    Ok(DataUri::from_bytes(mime, &data).to_string())
}
