//! Application setup and initialization
//!
//! This module contains all application initialization logic extracted from main.rs
//! for better organization and testability.

pub mod routes;
pub mod server;
pub mod storage;
pub mod translator;
pub mod validation;

use crate::state::AppState;
use anyhow::{Context, Result};
use picto_core::Config;
use std::sync::Arc;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    // Validate configuration first - fail fast on misconfiguration
    validation::validate_config(&config).context("Configuration validation failed")?;

    crate::telemetry::init_telemetry(config.log_format)
        .map_err(|e| anyhow::anyhow!("Failed to initialize telemetry: {}", e))?;

    tracing::info!(
        environment = %config.environment,
        "Configuration loaded and validated successfully"
    );

    let storage = storage::setup_storage(&config).await?;
    let translator = translator::setup_translator(&config)?;

    let state = Arc::new(AppState::new(storage, translator));

    let router = routes::setup_routes(&config, state.clone());

    Ok((state, router))
}
