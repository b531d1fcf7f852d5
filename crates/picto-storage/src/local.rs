use crate::keys::{file_extension, generate_file_id};
use crate::traits::{DeleteOutcome, ImageStorage, StorageError, StorageResult};
use async_trait::async_trait;
use bytes::Bytes;
use picto_core::StoredImage;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Local filesystem storage implementation
#[derive(Clone, Debug)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    /// Create a new LocalStorage instance
    ///
    /// Creates `base_path` (and any missing parents) if it does not exist yet. Calling
    /// this on an existing directory is a no-op.
    ///
    /// # Arguments
    /// * `base_path` - Directory for image files (e.g., "./uploaded_images")
    pub async fn new(base_path: impl Into<PathBuf>) -> StorageResult<Self> {
        let base_path = base_path.into();

        fs::create_dir_all(&base_path).await.map_err(|e| {
            StorageError::ConfigError(format!(
                "Failed to create storage directory {}: {}",
                base_path.display(),
                e
            ))
        })?;

        tracing::debug!(path = %base_path.display(), "Storage directory ready");

        Ok(LocalStorage { base_path })
    }

    /// Find the first regular file in the directory whose name starts with `file_id`.
    async fn find_by_prefix(&self, file_id: &str) -> StorageResult<Option<(String, PathBuf)>> {
        let mut entries = fs::read_dir(&self.base_path).await.map_err(|e| {
            StorageError::ListFailed(format!(
                "Failed to read directory {}: {}",
                self.base_path.display(),
                e
            ))
        })?;

        while let Some(entry) = entries.next_entry().await.map_err(|e| {
            StorageError::ListFailed(format!(
                "Failed to read directory {}: {}",
                self.base_path.display(),
                e
            ))
        })? {
            let file_name = entry.file_name();
            // Names that are not valid UTF-8 were never produced by `store`.
            let Some(name) = file_name.to_str() else {
                continue;
            };
            if !name.starts_with(file_id) {
                continue;
            }
            if !entry.file_type().await?.is_file() {
                continue;
            }
            return Ok(Some((name.to_string(), entry.path())));
        }

        Ok(None)
    }
}

#[async_trait]
impl ImageStorage for LocalStorage {
    async fn store(
        &self,
        original_filename: Option<&str>,
        data: Bytes,
    ) -> StorageResult<StoredImage> {
        let extension = original_filename.map(file_extension).unwrap_or_default();
        let image = StoredImage::new(generate_file_id(), extension, data.len() as u64);
        let path = self.base_path.join(&image.filename);

        let start = std::time::Instant::now();

        let mut file = fs::File::create(&path).await.map_err(|e| {
            StorageError::UploadFailed(format!("Failed to create file {}: {}", path.display(), e))
        })?;

        file.write_all(&data).await.map_err(|e| {
            StorageError::UploadFailed(format!("Failed to write file {}: {}", path.display(), e))
        })?;

        file.sync_all().await.map_err(|e| {
            StorageError::UploadFailed(format!("Failed to sync file {}: {}", path.display(), e))
        })?;

        tracing::info!(
            path = %path.display(),
            file_id = %image.file_id,
            size_bytes = image.size_bytes,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Local storage upload successful"
        );

        Ok(image)
    }

    async fn delete(&self, file_id: &str) -> StorageResult<DeleteOutcome> {
        // An empty prefix would match every file.
        if file_id.is_empty() {
            return Ok(DeleteOutcome::NotFound);
        }

        let start = std::time::Instant::now();

        let Some((filename, path)) = self.find_by_prefix(file_id).await? else {
            tracing::debug!(file_id = %file_id, "No stored file matches id");
            return Ok(DeleteOutcome::NotFound);
        };

        fs::remove_file(&path).await.map_err(|e| {
            StorageError::DeleteFailed(format!("Failed to delete file {}: {}", path.display(), e))
        })?;

        tracing::info!(
            path = %path.display(),
            file_id = %file_id,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Local storage delete successful"
        );

        Ok(DeleteOutcome::Deleted { filename })
    }

    fn base_path(&self) -> &Path {
        &self.base_path
    }
}
