use std::sync::Arc;

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use picto_core::models::UploadImageResponse;

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use crate::utils::upload::extract_multipart_file;

/// Upload image handler
///
/// Stores the `file` field of a multipart form verbatim under a new id, keeping the
/// original file extension. The content is not inspected.
///
/// # Errors
/// - `AppError::InvalidInput` - Not a multipart request, or no `file` field
/// - `AppError::PayloadTooLarge` - Body exceeds the configured upload limit
/// - `AppError::Storage` - The file could not be written
#[utoipa::path(
    post,
    path = "/upload-image/",
    tag = "images",
    request_body(content = inline(Object), content_type = "multipart/form-data", description = "Form with a single `file` field (JPEG or PNG image)"),
    responses(
        (status = 200, description = "Image stored", body = UploadImageResponse),
        (status = 413, description = "File too large", body = ErrorResponse),
        (status = 422, description = "Missing or malformed file field", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, multipart), fields(operation = "upload_image"))]
pub async fn upload_image(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadImageResponse>, HttpAppError> {
    let file = extract_multipart_file(multipart?).await?;

    tracing::debug!(
        filename = ?file.filename,
        content_type = ?file.content_type,
        size_bytes = file.data.len(),
        "Received image upload"
    );

    let image = state
        .storage
        .store(file.filename.as_deref(), file.data)
        .await?;

    Ok(Json(UploadImageResponse::from(image)))
}
