use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// An image persisted as `<file_id><extension>` in the upload directory.
///
/// The directory itself is the only index: an image exists for as long as a file
/// whose name starts with its `file_id` is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredImage {
    pub file_id: String,
    pub extension: String,
    pub filename: String,
    pub size_bytes: u64,
}

impl StoredImage {
    pub fn new(file_id: impl Into<String>, extension: impl Into<String>, size_bytes: u64) -> Self {
        let file_id = file_id.into();
        let extension = extension.into();
        let filename = format!("{}{}", file_id, extension);
        Self {
            file_id,
            extension,
            filename,
            size_bytes,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UploadImageResponse {
    /// Identifier to pass to the delete endpoint
    #[schema(example = "0b6c3a5e-1f0d-4c6e-9d1a-6f3f2b1e4c7a")]
    pub file_id: String,
}

impl From<StoredImage> for UploadImageResponse {
    fn from(image: StoredImage) -> Self {
        Self {
            file_id: image.file_id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteImageResponse {
    #[schema(example = "File deleted successfully")]
    pub message: String,
}

impl DeleteImageResponse {
    pub fn deleted() -> Self {
        Self {
            message: "File deleted successfully".to_string(),
        }
    }
}
