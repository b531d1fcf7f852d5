//! Configuration module
//!
//! Server, storage and translation-provider settings, loaded from the environment
//! (and an optional `.env` file) once at startup.

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_UPLOAD_DIRECTORY: &str = "./uploaded_images";

/// DeepL routes free-tier keys (suffix `:fx`) to a separate host.
const DEEPL_FREE_API_URL: &str = "https://api-free.deepl.com";
const DEEPL_PRO_API_URL: &str = "https://api.deepl.com";

/// Console log output format
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

#[derive(Clone)]
pub struct Config {
    pub host: String,
    pub server_port: u16,
    pub upload_directory: PathBuf,
    pub deepl_auth_key: String,
    pub deepl_api_url: String,
    pub deepl_timeout: Option<Duration>,
    pub max_upload_size_bytes: Option<usize>,
    pub environment: String,
    pub log_format: LogFormat,
}

// The auth key must never end up in logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("host", &self.host)
            .field("server_port", &self.server_port)
            .field("upload_directory", &self.upload_directory)
            .field("deepl_auth_key", &"<redacted>")
            .field("deepl_api_url", &self.deepl_api_url)
            .field("deepl_timeout", &self.deepl_timeout)
            .field("max_upload_size_bytes", &self.max_upload_size_bytes)
            .field("environment", &self.environment)
            .field("log_format", &self.log_format)
            .finish()
    }
}

impl Config {
    /// Load configuration from the process environment, reading `.env` first if present.
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup("ENVIRONMENT")
            .or_else(|| lookup("APP_ENV"))
            .unwrap_or_else(|| "development".to_string());

        let server_port = lookup("PORT")
            .unwrap_or_else(|| DEFAULT_PORT.to_string())
            .parse()
            .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?;

        let deepl_auth_key = lookup("DEEPL_AUTH_KEY")
            .map(|key| key.trim().to_string())
            .ok_or_else(|| anyhow::anyhow!("DEEPL_AUTH_KEY environment variable not set"))?;

        let deepl_api_url = lookup("DEEPL_API_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| default_deepl_api_url(&deepl_auth_key).to_string());

        let deepl_timeout = lookup("DEEPL_TIMEOUT_SECS")
            .map(|secs| {
                secs.parse::<u64>()
                    .map(Duration::from_secs)
                    .map_err(|_| anyhow::anyhow!("DEEPL_TIMEOUT_SECS must be a valid number"))
            })
            .transpose()?;

        let max_upload_size_bytes = lookup("MAX_UPLOAD_SIZE_MB")
            .map(|mb| {
                mb.parse::<usize>()
                    .map(|mb| mb * 1024 * 1024)
                    .map_err(|_| anyhow::anyhow!("MAX_UPLOAD_SIZE_MB must be a valid number"))
            })
            .transpose()?;

        let log_format = match lookup("LOG_FORMAT")
            .unwrap_or_else(|| "compact".to_string())
            .to_lowercase()
            .as_str()
        {
            "json" => LogFormat::Json,
            "compact" => LogFormat::Compact,
            other => {
                return Err(anyhow::anyhow!(
                    "LOG_FORMAT must be 'compact' or 'json', got '{}'",
                    other
                ))
            }
        };

        Ok(Config {
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            server_port,
            upload_directory: lookup("UPLOAD_DIRECTORY")
                .unwrap_or_else(|| DEFAULT_UPLOAD_DIRECTORY.to_string())
                .into(),
            deepl_auth_key,
            deepl_api_url,
            deepl_timeout,
            max_upload_size_bytes,
            environment,
            log_format,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.server_port)
    }
}

fn default_deepl_api_url(auth_key: &str) -> &'static str {
    if auth_key.ends_with(":fx") {
        DEEPL_FREE_API_URL
    } else {
        DEEPL_PRO_API_URL
    }
}
