//! Image resolver
//!
//! Resolution order for a reference:
//! 1. strip surrounding quotes and whitespace
//! 2. `file://` URLs become plain paths
//! 3. HTTP(S) URLs go through the [`ImageFetcher`]
//! 4. anything else is tried against the local candidates from
//!    [`local_candidates`], first existing path wins
//!
//! The loaded bytes are then decoded on a blocking thread.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;

use super::decode::decode_for_embedding;
use super::fetcher::{HttpFetcher, ImageFetcher};
use super::paths::{classify, local_candidates, ImageLocation};
use super::ImageError;
use crate::catalog::ImageRef;
use crate::render::EmbeddedImage;

/// Resolves image references to embeddable images
#[derive(Clone)]
pub struct ImageResolver {
    fetcher: Arc<dyn ImageFetcher>,
    asset_dir: PathBuf,
}

impl ImageResolver {
    pub fn new(fetcher: Arc<dyn ImageFetcher>, asset_dir: impl Into<PathBuf>) -> Self {
        Self {
            fetcher,
            asset_dir: asset_dir.into(),
        }
    }

    /// Resolver backed by a real HTTP client
    pub fn with_http(
        asset_dir: impl Into<PathBuf>,
        timeout: Duration,
        max_bytes: usize,
    ) -> Result<Self, ImageError> {
        Ok(Self::new(Arc::new(HttpFetcher::new(timeout, max_bytes)?), asset_dir))
    }

    /// Resolve one reference
    pub async fn resolve(&self, raw: &str) -> Result<EmbeddedImage, ImageError> {
        let bytes = match classify(raw) {
            ImageLocation::Remote(url) => self.fetcher.fetch(&url).await?,
            ImageLocation::Local(path) => self.read_local(&path).await?,
        };

        tokio::task::spawn_blocking(move || decode_for_embedding(&bytes))
            .await
            .map_err(|e| ImageError::Decode(format!("decoder task failed: {}", e)))?
    }

    /// Resolve every reference concurrently, keeping input order
    ///
    /// Failures are logged and returned in place; they never abort the batch.
    pub async fn resolve_all(&self, images: &[ImageRef]) -> Vec<Result<EmbeddedImage, ImageError>> {
        join_all(images.iter().map(|image| async move {
            let result = self.resolve(&image.path).await;
            match &result {
                Ok(embedded) => tracing::debug!(
                    "Resolved image {} ({}x{} px)",
                    image.path,
                    embedded.width,
                    embedded.height
                ),
                Err(e) => tracing::warn!("Image {} could not be resolved: {}", image.path, e),
            }
            result
        }))
        .await
    }

    async fn read_local(&self, path: &str) -> Result<Vec<u8>, ImageError> {
        let candidates = local_candidates(path, &self.asset_dir);

        for candidate in &candidates {
            if tokio::fs::try_exists(candidate).await.unwrap_or(false) {
                return tokio::fs::read(candidate)
                    .await
                    .map_err(|source| ImageError::Read {
                        path: candidate.clone(),
                        source,
                    });
            }
        }

        Err(ImageError::NotFound { tried: candidates })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::path::Path;
    use std::sync::Mutex;
    use tempfile::TempDir;

    /// Records requested URLs and serves a fixed response
    struct StubFetcher {
        response: Result<Vec<u8>, u16>,
        requested: Mutex<Vec<String>>,
    }

    impl StubFetcher {
        fn serving(response: Result<Vec<u8>, u16>) -> Arc<Self> {
            Arc::new(Self {
                response,
                requested: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl ImageFetcher for StubFetcher {
        async fn fetch(&self, url: &str) -> Result<Vec<u8>, ImageError> {
            self.requested.lock().unwrap().push(url.to_string());
            match &self.response {
                Ok(bytes) => Ok(bytes.clone()),
                Err(status) => Err(ImageError::Status {
                    url: url.to_string(),
                    status: *status,
                }),
            }
        }
    }

    fn write_png(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        image::RgbImage::from_pixel(4, 3, image::Rgb([10, 120, 40]))
            .save(&path)
            .unwrap();
        path
    }

    fn png_bytes() -> Vec<u8> {
        let mut buffer = Vec::new();
        image::RgbImage::from_pixel(2, 2, image::Rgb([0, 0, 0]))
            .write_to(&mut std::io::Cursor::new(&mut buffer), image::ImageFormat::Png)
            .unwrap();
        buffer
    }

    #[tokio::test]
    async fn test_relative_path_resolves_against_asset_dir() {
        let temp_dir = TempDir::new().unwrap();
        write_png(temp_dir.path(), "images/coffee1.png");
        let resolver = ImageResolver::new(StubFetcher::serving(Err(500)), temp_dir.path());

        let image = resolver.resolve("images/coffee1.png").await.unwrap();
        assert_eq!((image.width, image.height), (4, 3));
    }

    #[tokio::test]
    async fn test_quoted_absolute_and_file_url_paths() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_png(temp_dir.path(), "tea.png");
        let resolver = ImageResolver::new(StubFetcher::serving(Err(500)), "/nonexistent");

        let quoted = format!("  \"{}\" ", path.display());
        assert!(resolver.resolve(&quoted).await.is_ok());

        #[cfg(unix)]
        {
            let file_url = format!("file://{}", path.display());
            assert!(resolver.resolve(&file_url).await.is_ok());
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_backslash_path_falls_back_to_swapped_variant() {
        let temp_dir = TempDir::new().unwrap();
        write_png(temp_dir.path(), "images/spices1.png");
        let resolver = ImageResolver::new(StubFetcher::serving(Err(500)), temp_dir.path());

        assert!(resolver.resolve("images\\spices1.png").await.is_ok());
    }

    #[tokio::test]
    async fn test_missing_local_file_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let resolver = ImageResolver::new(StubFetcher::serving(Err(500)), temp_dir.path());

        match resolver.resolve("missing/nothing.jpg").await {
            Err(ImageError::NotFound { tried }) => {
                assert_eq!(tried.len(), 2);
                assert_eq!(tried[1], temp_dir.path().join("missing/nothing.jpg"));
            }
            other => panic!("expected NotFound, got {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn test_existing_file_with_bad_content_is_decode_error() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("broken.jpg"), b"not a jpeg").unwrap();
        let resolver = ImageResolver::new(StubFetcher::serving(Err(500)), temp_dir.path());

        let result = resolver.resolve("broken.jpg").await;
        assert!(matches!(result, Err(ImageError::Decode(_))));
    }

    #[tokio::test]
    async fn test_remote_url_goes_through_fetcher_with_encoded_spaces() {
        let fetcher = StubFetcher::serving(Ok(png_bytes()));
        let resolver = ImageResolver::new(fetcher.clone(), "/nonexistent");

        let image = resolver
            .resolve("https://cdn.example.com/tea leaves.png")
            .await
            .unwrap();
        assert_eq!((image.width, image.height), (2, 2));
        assert_eq!(
            fetcher.requested.lock().unwrap().as_slice(),
            ["https://cdn.example.com/tea%20leaves.png".to_string()]
        );
    }

    #[tokio::test]
    async fn test_remote_failure_status_is_error() {
        let resolver = ImageResolver::new(StubFetcher::serving(Err(404)), "/nonexistent");
        let result = resolver.resolve("http://cdn.example.com/a.png").await;
        assert!(matches!(result, Err(ImageError::Status { status: 404, .. })));
    }

    #[tokio::test]
    async fn test_resolve_all_keeps_order_and_failures() {
        let temp_dir = TempDir::new().unwrap();
        write_png(temp_dir.path(), "a.png");
        let resolver = ImageResolver::new(StubFetcher::serving(Err(503)), temp_dir.path());

        let refs = vec![
            ImageRef::new("missing.png"),
            ImageRef::new("a.png"),
            ImageRef::new("https://cdn.example.com/b.png"),
        ];
        let results = resolver.resolve_all(&refs).await;

        assert_eq!(results.len(), 3);
        assert!(matches!(results[0], Err(ImageError::NotFound { .. })));
        assert!(results[1].is_ok());
        assert!(matches!(results[2], Err(ImageError::Status { status: 503, .. })));
    }
}
