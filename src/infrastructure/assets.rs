//! Filesystem-backed store for reserved well-known assets.

use serde_json::json;
use std::path::PathBuf;

use crate::error::AppError;

/// Short codes reserved for well-known asset paths instead of link lookup.
pub const ROBOTS: &str = "robots.txt";
pub const FAV_ICON: &str = "favicon.ico";

/// Returns true if `code` names a reserved asset rather than a short link.
pub fn is_reserved(code: &str) -> bool {
    code == ROBOTS || code == FAV_ICON
}

/// An asset loaded from disk together with its media type.
#[derive(Debug, Clone)]
pub struct Asset {
    pub bytes: Vec<u8>,
    pub content_type: &'static str,
}

/// Serves reserved assets from a directory on disk.
pub struct FsAssetStore {
    root: PathBuf,
}

impl FsAssetStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Loads an asset by its relative path.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Asset))` if the file exists
    /// - `Ok(None)` if it does not (the handler answers 404)
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on any other filesystem error.
    pub async fn load(&self, path: &str) -> Result<Option<Asset>, AppError> {
        let full_path = self.root.join(path);

        match tokio::fs::read(&full_path).await {
            Ok(bytes) => Ok(Some(Asset {
                bytes,
                content_type: content_type_for(path),
            })),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::internal(
                "Failed to read asset",
                json!({ "path": path, "reason": e.to_string() }),
            )),
        }
    }
}

fn content_type_for(path: &str) -> &'static str {
    match path.rsplit('.').next() {
        Some("ico") => "image/vnd.microsoft.icon",
        Some("txt") => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_codes() {
        assert!(is_reserved("robots.txt"));
        assert!(is_reserved("favicon.ico"));
        assert!(!is_reserved("abc"));
        assert!(!is_reserved("robots"));
    }

    #[test]
    fn test_content_type_mapping() {
        assert_eq!(content_type_for("favicon.ico"), "image/vnd.microsoft.icon");
        assert_eq!(content_type_for("robots.txt"), "text/plain; charset=utf-8");
        assert_eq!(content_type_for("unknown.bin"), "application/octet-stream");
    }

    #[tokio::test]
    async fn test_load_missing_asset_is_none() {
        let store = FsAssetStore::new("www");
        let asset = store.load("favicon.ico").await.unwrap();
        assert!(asset.is_none());
    }

    #[tokio::test]
    async fn test_load_existing_asset() {
        let store = FsAssetStore::new("www");
        let asset = store.load("robots.txt").await.unwrap().unwrap();

        assert_eq!(asset.content_type, "text/plain; charset=utf-8");
        assert!(!asset.bytes.is_empty());
    }
}
