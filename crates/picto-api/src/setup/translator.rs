//! Translation provider setup

use anyhow::{Context, Result};
use picto_core::Config;
use picto_translate::{DeepLConfig, DeepLTranslator, Translator};
use std::sync::Arc;

/// Build the process-wide translation client.
pub fn setup_translator(config: &Config) -> Result<Arc<dyn Translator>> {
    let deepl_config = DeepLConfig {
        auth_key: config.deepl_auth_key.clone(),
        api_url: config.deepl_api_url.clone(),
        timeout: config.deepl_timeout,
    };
    let translator = DeepLTranslator::new(deepl_config)
        .context("Failed to create HTTP client for DeepL")?;

    tracing::info!(
        provider = translator.provider_name(),
        api_url = %config.deepl_api_url,
        timeout_secs = ?config.deepl_timeout.map(|t| t.as_secs()),
        "Translation client initialized"
    );

    Ok(Arc::new(translator))
}
