//! Error types module
//!
//! All request-level failures are unified under `AppError`. Each variant describes
//! how it is presented to clients through the `ErrorMetadata` trait; the API crate
//! turns that into an HTTP response with a `{"detail": ...}` body.

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected client errors
    Debug,
    /// Warning level - for recoverable issues
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Short variant name used as a structured log field
    fn error_type(&self) -> &'static str;

    /// Client-facing message (may differ from internal error message)
    fn client_message(&self) -> String;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Unsupported language code: {0}")]
    UnsupportedLanguage(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Translation error: {0}")]
    Translation(String),
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        match self {
            AppError::UnsupportedLanguage(_) => 400,
            AppError::InvalidInput(_) => 422,
            AppError::NotFound(_) => 404,
            AppError::MethodNotAllowed(_) => 405,
            AppError::PayloadTooLarge(_) => 413,
            AppError::Storage(_) | AppError::Translation(_) => 500,
        }
    }

    fn error_type(&self) -> &'static str {
        match self {
            AppError::UnsupportedLanguage(_) => "UnsupportedLanguage",
            AppError::InvalidInput(_) => "InvalidInput",
            AppError::NotFound(_) => "NotFound",
            AppError::MethodNotAllowed(_) => "MethodNotAllowed",
            AppError::PayloadTooLarge(_) => "PayloadTooLarge",
            AppError::Storage(_) => "Storage",
            AppError::Translation(_) => "Translation",
        }
    }

    fn client_message(&self) -> String {
        match self {
            AppError::UnsupportedLanguage(_) => "Unsupported language code".to_string(),
            AppError::InvalidInput(msg)
            | AppError::NotFound(msg)
            | AppError::MethodNotAllowed(msg)
            | AppError::PayloadTooLarge(msg) => msg.clone(),
            AppError::Translation(msg) => format!("Translation error: {}", msg),
            // Filesystem paths and OS errors stay in the logs.
            AppError::Storage(_) => "Internal server error".to_string(),
        }
    }

    fn log_level(&self) -> LogLevel {
        match self {
            AppError::UnsupportedLanguage(_)
            | AppError::InvalidInput(_)
            | AppError::NotFound(_)
            | AppError::MethodNotAllowed(_)
            | AppError::PayloadTooLarge(_) => LogLevel::Debug,
            AppError::Translation(_) | AppError::Storage(_) => LogLevel::Error,
        }
    }
}
