//! Common utilities for file upload handlers

use axum::extract::Multipart;
use bytes::Bytes;
use picto_core::AppError;

use crate::error::HttpAppError;

/// Form field carrying the uploaded file
pub const FILE_FIELD: &str = "file";

/// A file read from a multipart form.
#[derive(Debug)]
pub struct UploadedFile {
    pub filename: Option<String>,
    pub content_type: Option<String>,
    pub data: Bytes,
}

/// Read the first field named "file" from a multipart form.
///
/// Other fields are skipped. A form without a "file" field is rejected.
pub async fn extract_multipart_file(mut multipart: Multipart) -> Result<UploadedFile, HttpAppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = field.file_name().map(|s| s.to_string());
        let content_type = field.content_type().map(|s| s.to_string());
        let data = field.bytes().await?;

        return Ok(UploadedFile {
            filename,
            content_type,
            data,
        });
    }

    Err(AppError::InvalidInput("No file provided".to_string()).into())
}
