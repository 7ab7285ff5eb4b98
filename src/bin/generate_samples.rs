//! Writes sample catalog request files for exercising the API
//!
//! Usage: `generate-samples [TARGET_DIR]` (defaults to the current directory)

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use catalog_pdf_server::catalog::samples::sample_files;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let target = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    fs::create_dir_all(&target)
        .with_context(|| format!("Failed to create {}", target.display()))?;

    for (name, value) in sample_files() {
        let path = target.join(&name);
        let json = serde_json::to_string_pretty(&value)?;
        fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::info!("Created {}", path.display());
    }

    tracing::info!("Sample files written to {}", target.display());
    Ok(())
}
