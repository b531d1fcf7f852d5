use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use picto_core::models::DeleteImageResponse;
use picto_core::AppError;
use picto_storage::DeleteOutcome;

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;

#[utoipa::path(
    delete,
    path = "/delete-image/{file_id}",
    tag = "images",
    params(
        ("file_id" = String, Path, description = "The unique ID of the image to delete")
    ),
    responses(
        (status = 200, description = "Image deleted", body = DeleteImageResponse),
        (status = 404, description = "No image with this ID", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "delete_image"))]
pub async fn delete_image(
    State(state): State<Arc<AppState>>,
    Path(file_id): Path<String>,
) -> Result<Json<DeleteImageResponse>, HttpAppError> {
    match state.storage.delete(&file_id).await? {
        DeleteOutcome::Deleted { filename } => {
            tracing::debug!(filename = %filename, "Image deleted");
            Ok(Json(DeleteImageResponse::deleted()))
        }
        DeleteOutcome::NotFound => Err(AppError::NotFound("File not found".to_string()).into()),
    }
}
