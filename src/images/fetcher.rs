//! Remote image fetching

use std::time::Duration;

use async_trait::async_trait;

use super::ImageError;

/// Source of remote image bytes
#[async_trait]
pub trait ImageFetcher: Send + Sync {
    /// Fetch the body of `url`; any non-success outcome is an error
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, ImageError>;
}

/// HTTP(S) fetcher with a per-request timeout and a body size cap
#[derive(Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    timeout: Duration,
    max_bytes: usize,
}

impl HttpFetcher {
    pub fn new(timeout: Duration, max_bytes: usize) -> Result<Self, ImageError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("catalog-pdf-server/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ImageError::Fetch {
                url: String::new(),
                reason: format!("Failed to build HTTP client: {}", e),
            })?;
        Ok(Self {
            client,
            timeout,
            max_bytes,
        })
    }

    fn too_large(&self, url: &str) -> ImageError {
        ImageError::Fetch {
            url: url.to_string(),
            reason: format!("image exceeds {} bytes", self.max_bytes),
        }
    }
}

#[async_trait]
impl ImageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, ImageError> {
        tracing::debug!("Fetching remote image: {}", url);

        let mut response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                ImageError::Timeout {
                    url: url.to_string(),
                    secs: self.timeout.as_secs(),
                }
            } else {
                ImageError::Fetch {
                    url: url.to_string(),
                    reason: e.to_string(),
                }
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ImageError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        if response
            .content_length()
            .is_some_and(|length| length > self.max_bytes as u64)
        {
            return Err(self.too_large(url));
        }

        // Content-Length may be absent or wrong, so count while streaming
        let mut body = Vec::new();
        while let Some(chunk) = response.chunk().await.map_err(|e| ImageError::Fetch {
            url: url.to_string(),
            reason: e.to_string(),
        })? {
            if body.len() + chunk.len() > self.max_bytes {
                return Err(self.too_large(url));
            }
            body.extend_from_slice(&chunk);
        }
        Ok(body)
    }
}
