//! Local image files as inline data URLs.

use std::path::Path;

use base64::Engine;

use oratory_core::types::ImageRef;

const FALLBACK_MIME: &str = "application/octet-stream";

/// MIME type guessed from the file extension.
pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        Some("bmp") => "image/bmp",
        Some("avif") => "image/avif",
        _ => FALLBACK_MIME,
    }
}

/// Encode raw file bytes as a `data:` reference. Empty input yields nothing.
pub fn encode_image(bytes: &[u8], mime_type: &str) -> Option<ImageRef> {
    if bytes.is_empty() {
        return None;
    }
    let payload = base64::engine::general_purpose::STANDARD.encode(bytes);
    Some(ImageRef::data_url(mime_type, &payload))
}

/// Read a whole file into an inline image reference.
///
/// The contents are not validated as an image. Unreadable or empty files
/// produce `None`.
pub async fn read_image_file(path: &Path) -> Option<ImageRef> {
    match tokio::fs::read(path).await {
        Ok(bytes) => {
            let image = encode_image(&bytes, mime_for_path(path));
            if image.is_none() {
                tracing::warn!(path = %path.display(), "Ignoring empty upload");
            }
            image
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Failed to read upload");
            None
        }
    }
}
