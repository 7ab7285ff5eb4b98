//! Application state management

use std::sync::Arc;
use std::time::Duration;

use crate::catalog::{BuilderOptions, CatalogBuilder};
use crate::config::Config;
use crate::images::{ImageError, ImageResolver};

/// Error type for state initialization
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("Failed to initialize image resolver: {0}")]
    ImageResolverInit(#[from] ImageError),
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: Config,
    resolver: ImageResolver,
    builder: CatalogBuilder,
}

impl AppState {
    /// Create state with an HTTP-backed image resolver
    pub fn new(config: Config) -> Result<Self, StateError> {
        let resolver = ImageResolver::with_http(
            config.catalog.asset_dir.clone(),
            Duration::from_secs(config.catalog.image_fetch_timeout_secs),
            config.catalog.image_max_bytes,
        )?;
        Ok(Self::with_resolver(config, resolver))
    }

    /// Create state around an existing resolver
    pub fn with_resolver(config: Config, resolver: ImageResolver) -> Self {
        let builder = CatalogBuilder::new(BuilderOptions {
            image_sizing: config.catalog.image_sizing,
            ..Default::default()
        });

        Self {
            inner: Arc::new(AppStateInner {
                config,
                resolver,
                builder,
            }),
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Get the image resolver
    pub fn resolver(&self) -> &ImageResolver {
        &self.inner.resolver
    }

    /// Get the catalog builder
    pub fn builder(&self) -> &CatalogBuilder {
        &self.inner.builder
    }
}
