//! Image resolution
//!
//! Turns the `path` of an image reference (local path, `file://` URL or
//! HTTP(S) URL) into image bytes ready for embedding. Resolution failures
//! are never fatal to a document: the builder renders a placeholder line
//! instead.

mod decode;
mod fetcher;
mod paths;
mod resolver;

use std::path::PathBuf;

use thiserror::Error;

pub use decode::decode_for_embedding;
pub use fetcher::{HttpFetcher, ImageFetcher};
pub use paths::{classify, expand_path, local_candidates, normalize_path, ImageLocation};
pub use resolver::ImageResolver;

/// Placeholder text for references with no existing local candidate
pub const NOT_FOUND_PLACEHOLDER: &str = "Image not found at the provided path.";
/// Placeholder text for fetch, read and decode failures
pub const UNRENDERABLE_PLACEHOLDER: &str = "Image could not be rendered.";

/// Why an image reference could not be turned into an embeddable image
#[derive(Debug, Error)]
pub enum ImageError {
    #[error("Image not found. Tried: {tried:?}")]
    NotFound { tried: Vec<PathBuf> },

    #[error("Failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("Fetching {url} timed out after {secs}s")]
    Timeout { url: String, secs: u64 },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode image: {0}")]
    Decode(String),
}

impl ImageError {
    /// Text rendered in the document in place of the image
    pub fn placeholder(&self) -> &'static str {
        match self {
            ImageError::NotFound { .. } => NOT_FOUND_PLACEHOLDER,
            _ => UNRENDERABLE_PLACEHOLDER,
        }
    }
}
