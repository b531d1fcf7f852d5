//! DeepL translation client

use async_trait::async_trait;
use picto_core::TargetLang;
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::time::Duration;

use crate::translator::{Translation, TranslationError, Translator};

/// DeepL answers 456 when the account's character quota is used up.
const STATUS_QUOTA_EXCEEDED: u16 = 456;

/// DeepL client configuration
#[derive(Clone)]
pub struct DeepLConfig {
    /// DeepL API authentication key
    pub auth_key: String,
    /// Base URL without the `/v2` suffix (e.g. "https://api-free.deepl.com")
    pub api_url: String,
    /// Per-request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
}

impl Debug for DeepLConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("DeepLConfig")
            .field("auth_key", &"<redacted>")
            .field("api_url", &self.api_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// DeepL translator backed by a pooled `reqwest::Client`
pub struct DeepLTranslator {
    http_client: reqwest::Client,
    auth_key: String,
    api_url: String,
}

impl Debug for DeepLTranslator {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("DeepLTranslator")
            .field("api_url", &self.api_url)
            .finish()
    }
}

#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    text: [&'a str; 1],
    target_lang: TargetLang,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    translations: Vec<TranslationEntry>,
}

#[derive(Debug, Deserialize)]
struct TranslationEntry {
    text: String,
    #[serde(default)]
    detected_source_language: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    detail: Option<String>,
}

impl DeepLTranslator {
    pub fn new(config: DeepLConfig) -> Result<Self, TranslationError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build()?;

        Ok(Self {
            http_client,
            auth_key: config.auth_key,
            api_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    fn translate_url(&self) -> String {
        format!("{}/v2/translate", self.api_url)
    }

    /// Map a non-success response to a typed error, keeping the provider's message.
    fn error_for_status(status: reqwest::StatusCode, body: &str) -> TranslationError {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| match (b.message, b.detail) {
                (Some(m), Some(d)) => Some(format!("{}, {}", m, d)),
                (Some(m), None) => Some(m),
                (None, d) => d,
            })
            .unwrap_or_else(|| body.to_string());

        match status.as_u16() {
            400 => TranslationError::BadRequest(message),
            403 => TranslationError::Authorization,
            429 => TranslationError::TooManyRequests,
            STATUS_QUOTA_EXCEEDED => TranslationError::QuotaExceeded,
            code => TranslationError::Http {
                status: code,
                message,
            },
        }
    }
}

#[async_trait]
impl Translator for DeepLTranslator {
    async fn translate(
        &self,
        text: &str,
        target: TargetLang,
    ) -> Result<Translation, TranslationError> {
        let start = std::time::Instant::now();
        tracing::debug!(
            target_lang = %target,
            text_chars = text.chars().count(),
            "Sending DeepL translation request"
        );

        let response = self
            .http_client
            .post(self.translate_url())
            .header(
                reqwest::header::AUTHORIZATION,
                format!("DeepL-Auth-Key {}", self.auth_key),
            )
            .json(&TranslateRequest {
                text: [text],
                target_lang: target,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err = Self::error_for_status(status, &body);
            tracing::warn!(
                status = status.as_u16(),
                error = %err,
                target_lang = %target,
                "DeepL translation request failed"
            );
            return Err(err);
        }

        let parsed: TranslateResponse = response
            .json()
            .await
            .map_err(|e| TranslationError::InvalidResponse(e.to_string()))?;

        let entry = parsed.translations.into_iter().next().ok_or_else(|| {
            TranslationError::InvalidResponse("response contained no translations".to_string())
        })?;

        tracing::debug!(
            target_lang = %target,
            detected_source_language = ?entry.detected_source_language,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "DeepL translation successful"
        );

        Ok(Translation {
            text: entry.text,
            detected_source_language: entry.detected_source_language,
        })
    }

    fn provider_name(&self) -> &'static str {
        "deepl"
    }
}
