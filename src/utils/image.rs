use std::path::Path;

use base64::{engine::general_purpose, Engine as _};

use crate::error::{AdminError, Result};

/// Convert an image file into a base64 data URL for storage alongside the
/// account record. The MIME type is guessed from the extension; unknown
/// extensions fall back to `application/octet-stream`, which the avatar
/// display simply ignores.
pub async fn file_to_data_url(path: &Path) -> Result<String> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| AdminError::store(format!("failed to read avatar file: {e}")))?;
    Ok(bytes_to_data_url(&bytes, mime_for_path(path)))
}

/// Encode raw bytes into a data URL with the given MIME type
pub fn bytes_to_data_url(bytes: &[u8], mime: &str) -> String {
    format!("data:{};base64,{}", mime, general_purpose::STANDARD.encode(bytes))
}

fn mime_for_path(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_url_shape() {
        let url = bytes_to_data_url(b"abc", "image/png");
        assert!(url.starts_with("data:image/png;base64,"));
        assert!(url.ends_with("YWJj"));
    }

    #[tokio::test]
    async fn missing_file_errors() {
        let err = file_to_data_url(Path::new("/nonexistent/avatar.png")).await;
        assert!(err.is_err());
    }

    #[tokio::test]
    async fn reads_and_encodes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("avatar.jpg");
        tokio::fs::write(&path, b"fakejpeg").await.unwrap();

        let url = file_to_data_url(&path).await.unwrap();
        assert!(url.starts_with("data:image/jpeg;base64,"));
    }
}
