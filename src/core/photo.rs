//! Photo attachments stored inline as `data:` URIs.

use crate::errors::{AppError, AppResult};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::fs;
use std::path::Path;

fn mime_for(path: &Path) -> AppResult<&'static str> {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "png" => Ok("image/png"),
        "jpg" | "jpeg" => Ok("image/jpeg"),
        "gif" => Ok("image/gif"),
        "webp" => Ok("image/webp"),
        "bmp" => Ok("image/bmp"),
        "heic" => Ok("image/heic"),
        _ => Err(AppError::InvalidPhoto(format!(
            "unsupported image type: {}",
            path.display()
        ))),
    }
}

pub fn encode_bytes(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// Read an image file and return it as a base64 data URI.
pub fn encode_file(path: &Path) -> AppResult<String> {
    let mime = mime_for(path)?;
    let bytes = fs::read(path)
        .map_err(|e| AppError::InvalidPhoto(format!("{}: {}", path.display(), e)))?;
    Ok(encode_bytes(mime, &bytes))
}
