//! OpenAPI documentation.
//! Served as JSON at `/openapi.json` and browsable through RapiDoc at `/docs`.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;
use picto_core::models;

pub const OPENAPI_JSON_PATH: &str = "/openapi.json";
pub const DOCS_PATH: &str = "/docs";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Image Upload and Translation API",
        version = "1.0.0",
        description = "API to upload, delete images, and translate text."
    ),
    paths(
        handlers::image_upload::upload_image,
        handlers::image_delete::delete_image,
        handlers::translate::translate_text,
    ),
    components(schemas(
        models::UploadImageResponse,
        models::DeleteImageResponse,
        models::TranslationRequest,
        models::TranslationResponse,
        error::ErrorResponse,
    )),
    tags(
        (name = "images", description = "Image storage"),
        (name = "translation", description = "Text translation")
    )
)]
pub struct ApiDoc;
