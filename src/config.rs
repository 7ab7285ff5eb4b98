//! Configuration management for the Catalog PDF Server

use serde::Deserialize;
use std::env;
use std::path::PathBuf;

use crate::catalog::ImageSizing;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// Base directory for relative image paths
    pub asset_dir: PathBuf,
    /// Timeout for fetching remote images
    pub image_fetch_timeout_secs: u64,
    /// Largest accepted remote image body
    pub image_max_bytes: usize,
    pub image_sizing: ImageSizing,
    /// Largest accepted request body
    pub max_body_bytes: usize,
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value:?} ({reason})")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8000,
            },
            catalog: CatalogConfig::default(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig {
            asset_dir: env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            image_fetch_timeout_secs: 10,
            image_max_bytes: 20 * 1024 * 1024,
            image_sizing: ImageSizing::PerImage,
            max_body_bytes: 2 * 1024 * 1024,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup; unset keys fall back to defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        Ok(Config {
            server: ServerConfig {
                host: lookup("SERVER_HOST").unwrap_or(defaults.server.host),
                port: parse_var(&lookup, "SERVER_PORT", defaults.server.port)?,
            },
            catalog: CatalogConfig {
                asset_dir: lookup("CATALOG_ASSET_DIR")
                    .map(PathBuf::from)
                    .unwrap_or(defaults.catalog.asset_dir),
                image_fetch_timeout_secs: parse_var(
                    &lookup,
                    "IMAGE_FETCH_TIMEOUT_SECS",
                    defaults.catalog.image_fetch_timeout_secs,
                )?,
                image_max_bytes: parse_var(
                    &lookup,
                    "IMAGE_MAX_BYTES",
                    defaults.catalog.image_max_bytes,
                )?,
                image_sizing: parse_var(
                    &lookup,
                    "CATALOG_IMAGE_SIZING",
                    defaults.catalog.image_sizing,
                )?,
                max_body_bytes: parse_var(
                    &lookup,
                    "CATALOG_MAX_BODY_BYTES",
                    defaults.catalog.max_body_bytes,
                )?,
            },
        })
    }
}

fn parse_var<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(var) {
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            var,
            reason: e.to_string(),
            value,
        }),
        None => Ok(default),
    }
}
