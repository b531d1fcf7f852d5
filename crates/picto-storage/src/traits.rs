//! Storage abstraction trait
//!
//! This module defines the ImageStorage trait that storage backends implement.

use async_trait::async_trait;
use bytes::Bytes;
use picto_core::StoredImage;
use std::path::Path;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Delete failed: {0}")]
    DeleteFailed(String),

    #[error("Listing failed: {0}")]
    ListFailed(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Result of a delete request. A missing file is an expected outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted { filename: String },
    NotFound,
}

/// Image storage abstraction trait
///
/// Handlers only see this trait, so tests and alternative backends can be swapped in
/// through `AppState`.
#[async_trait]
pub trait ImageStorage: Send + Sync {
    /// Persist `data` under a freshly generated file id.
    ///
    /// The extension of `original_filename` (if any) is preserved in the stored name.
    async fn store(&self, original_filename: Option<&str>, data: Bytes)
        -> StorageResult<StoredImage>;

    /// Remove the first stored file whose name starts with `file_id`.
    ///
    /// At most one file is removed per call.
    async fn delete(&self, file_id: &str) -> StorageResult<DeleteOutcome>;

    /// Root directory of the store
    fn base_path(&self) -> &Path;
}
