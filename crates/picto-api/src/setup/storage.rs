//! Storage setup and initialization

use anyhow::{Context, Result};
use picto_core::Config;
use picto_storage::{ImageStorage, LocalStorage};
use std::sync::Arc;

/// Create the upload directory (if needed) and return the storage backend.
pub async fn setup_storage(config: &Config) -> Result<Arc<dyn ImageStorage>> {
    tracing::info!("Initializing image storage...");
    let storage = LocalStorage::new(config.upload_directory.clone())
        .await
        .context("Failed to initialize image storage")?;
    tracing::info!(
        path = %storage.base_path().display(),
        "Image storage initialized successfully"
    );
    Ok(Arc::new(storage))
}
