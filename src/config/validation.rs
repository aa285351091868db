//! Configuration validation.
//!
//! # Responsibilities
//! - Normalize the host into a base URL
//! - Validate value ranges (timeouts > 0)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Host normalization: trim whitespace, default the scheme to `http://`,
//!   strip trailing slashes, then require an http(s) URL with a host

use thiserror::Error;
use url::Url;

use crate::config::schema::ClientConfig;

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("host is empty")]
    EmptyHost,

    #[error("host '{host}' is not a valid URL: {reason}")]
    InvalidHost { host: String, reason: String },

    #[error("host '{host}' uses unsupported scheme '{scheme}'")]
    UnsupportedScheme { host: String, scheme: String },

    #[error("timeouts.{field} must be greater than zero")]
    ZeroTimeout { field: &'static str },
}

/// Normalize a raw host argument into a base URL without a trailing slash.
pub fn normalize_host(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyHost);
    }

    let with_scheme = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("http://{}", trimmed)
    };
    let base = with_scheme.trim_end_matches('/').to_string();

    let parsed = Url::parse(&base).map_err(|e| ValidationError::InvalidHost {
        host: raw.to_string(),
        reason: e.to_string(),
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ValidationError::UnsupportedScheme {
            host: raw.to_string(),
            scheme: parsed.scheme().to_string(),
        });
    }
    if parsed.host_str().map_or(true, str::is_empty) {
        return Err(ValidationError::InvalidHost {
            host: raw.to_string(),
            reason: "missing host".to_string(),
        });
    }

    Ok(base)
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &ClientConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(e) = normalize_host(&config.host) {
        errors.push(e);
    }
    if config.timeouts.connect_ms == 0 {
        errors.push(ValidationError::ZeroTimeout { field: "connect_ms" });
    }
    if config.timeouts.read_ms == 0 {
        errors.push(ValidationError::ZeroTimeout { field: "read_ms" });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
