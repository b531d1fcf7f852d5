use async_trait::async_trait;
use picto_core::TargetLang;
use thiserror::Error;

/// Translation provider errors
///
/// Callers surface all of these the same way; the variants exist for logging and
/// for a readable message.
#[derive(Debug, Error)]
pub enum TranslationError {
    #[error("Authorization failure, check auth_key")]
    Authorization,

    #[error("Quota for this billing period has been exceeded")]
    QuotaExceeded,

    #[error("Too many requests, provider is currently experiencing high load")]
    TooManyRequests,

    #[error("Bad request, message: {0}")]
    BadRequest(String),

    #[error("Unexpected status code: {status}, content: {message}")]
    Http { status: u16, message: String },

    #[error("Connection failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// A single translated text returned by the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub text: String,
    /// Source language as detected by the provider, when reported
    pub detected_source_language: Option<String>,
}

/// Translation provider abstraction
///
/// One instance is created at startup and shared by all requests, so
/// implementations must be safe to call concurrently.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate `text` into `target`. Exactly one provider call is made; no retries.
    async fn translate(&self, text: &str, target: TargetLang)
        -> Result<Translation, TranslationError>;

    /// Provider name used in logs
    fn provider_name(&self) -> &'static str;
}
