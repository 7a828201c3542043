// src/config/validation.rs

use crate::errors::{AppError, Result};

/// Validates settings that clap cannot check on its own.
pub(super) fn validate_api_url(api_url: &str) -> Result<()> {
    if api_url.trim().is_empty() {
        return Err(AppError::ConfigError(
            "--api-url must not be empty.".to_string(),
        ));
    }

    Ok(())
}
