//! Route configuration and setup

use crate::api_doc::{ApiDoc, DOCS_PATH, OPENAPI_JSON_PATH};
use crate::handlers;
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, post},
    Router,
};
use picto_core::Config;
use std::sync::Arc;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;

/// Setup all application routes
pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Router {
    match config.max_upload_size_bytes {
        Some(limit) => tracing::info!(max_upload_size_bytes = limit, "Request body limit enabled"),
        None => tracing::info!("Request body limit disabled"),
    }

    build_router(state, config.max_upload_size_bytes)
}

/// Build the router from prepared state.
///
/// axum's default 2 MB body cap is always lifted; `max_body_bytes` optionally installs
/// an explicit limit instead. Unmatched paths and methods answer with the same
/// `{"detail": ...}` body as handler errors.
pub fn build_router(state: Arc<AppState>, max_body_bytes: Option<usize>) -> Router {
    let api_routes = Router::new()
        .route("/upload-image/", post(handlers::image_upload::upload_image))
        .route("/upload-image", post(handlers::image_upload::upload_image))
        .route(
            "/delete-image/{file_id}",
            delete(handlers::image_delete::delete_image),
        )
        .route("/translate/", post(handlers::translate::translate_text))
        .route("/translate", post(handlers::translate::translate_text))
        .layer(DefaultBodyLimit::disable());

    let api_routes = match max_body_bytes {
        Some(limit) => api_routes.layer(RequestBodyLimitLayer::new(limit)),
        None => api_routes,
    };

    api_routes
        .with_state(state)
        .merge(RapiDoc::with_openapi(OPENAPI_JSON_PATH, ApiDoc::openapi()).path(DOCS_PATH))
        .fallback(handlers::fallback::not_found)
        .method_not_allowed_fallback(handlers::fallback::method_not_allowed)
        .layer(TraceLayer::new_for_http())
}
