use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppError;
use crate::models::LanguageCode;

/// Body of `POST /translate/`.
///
/// `language` stays a plain string so that unknown codes are reported as
/// "Unsupported language code" rather than as a malformed body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TranslationRequest {
    /// One of: en, kr, germ, fran, chi, jp, ital, pli
    #[schema(example = "kr")]
    pub language: String,
    #[schema(example = "Hello")]
    pub text: String,
}

impl TranslationRequest {
    pub fn language_code(&self) -> Result<LanguageCode, AppError> {
        self.language.parse()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TranslationResponse {
    #[schema(example = "안녕하세요")]
    pub translated_text: String,
}
