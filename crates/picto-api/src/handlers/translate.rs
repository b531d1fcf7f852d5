use std::sync::Arc;

use axum::{extract::State, Json};
use picto_core::models::{TranslationRequest, TranslationResponse};

use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::state::AppState;

/// Translate text handler
///
/// The language code is checked before the provider is contacted, so unsupported
/// codes never cost a provider call. Provider failures are not retried.
#[utoipa::path(
    post,
    path = "/translate/",
    tag = "translation",
    request_body = TranslationRequest,
    responses(
        (status = 200, description = "Translated text", body = TranslationResponse),
        (status = 400, description = "Unsupported language code", body = ErrorResponse),
        (status = 422, description = "Malformed request body", body = ErrorResponse),
        (status = 500, description = "Translation provider failure", body = ErrorResponse)
    )
)]
#[tracing::instrument(
    skip_all,
    fields(language = %request.language, operation = "translate_text")
)]
pub async fn translate_text(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<TranslationRequest>,
) -> Result<Json<TranslationResponse>, HttpAppError> {
    let target = request.language_code()?.target_lang();

    let translation = state.translator.translate(&request.text, target).await?;

    tracing::debug!(
        provider = state.translator.provider_name(),
        target_lang = %target,
        "Text translated"
    );

    Ok(Json(TranslationResponse {
        translated_text: translation.text,
    }))
}
