//! Configuration validation
//!
//! Validates critical configuration values at startup to catch misconfigurations early.

use anyhow::Result;
use picto_core::Config;

/// Validate critical configuration values
pub fn validate_config(config: &Config) -> Result<()> {
    if config.deepl_auth_key.is_empty() {
        return Err(anyhow::anyhow!("DEEPL_AUTH_KEY cannot be empty"));
    }

    if !config.deepl_api_url.starts_with("http://") && !config.deepl_api_url.starts_with("https://")
    {
        return Err(anyhow::anyhow!(
            "DEEPL_API_URL must be an http(s) URL, got '{}'",
            config.deepl_api_url
        ));
    }

    if config.max_upload_size_bytes == Some(0) {
        return Err(anyhow::anyhow!("MAX_UPLOAD_SIZE_MB cannot be 0"));
    }

    if config.deepl_timeout.is_some_and(|t| t.is_zero()) {
        return Err(anyhow::anyhow!("DEEPL_TIMEOUT_SECS cannot be 0"));
    }

    Ok(())
}
