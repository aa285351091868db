//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber
//! - Resolve the log filter from CLI, environment and config
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - Everything goes to stderr; stdout carries only the result
//! - Precedence: `--log-level`, then `RUST_LOG`, then config

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ObservabilityConfig;

const FALLBACK_FILTER: &str = "noclist=warn";

/// Pick the active filter.
pub fn resolve_filter(cli_level: Option<&str>, config: &ObservabilityConfig) -> EnvFilter {
    if let Some(level) = cli_level {
        match EnvFilter::try_new(level) {
            Ok(filter) => return filter,
            Err(e) => eprintln!("Ignoring invalid --log-level '{}': {}", level, e),
        }
    }

    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new(FALLBACK_FILTER))
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init_logging(cli_level: Option<&str>, config: &ObservabilityConfig) {
    let _ = tracing_subscriber::registry()
        .with(resolve_filter(cli_level, config))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
