//! Run orchestration: auth stage, then resource stage.
//!
//! ```text
//! Start → AuthPending ─┬→ AuthFailed (exit 1)
//!                      └→ AuthOK → ResourcePending ─┬→ ResourceFailed (exit 1)
//!                                                   └→ ResourceOK (exit 0, JSON)
//! ```

use thiserror::Error;

use crate::badsec::{fetch_token, fetch_user_list};
use crate::config::{check_config, normalize_host, ClientConfig, ConfigError};
use crate::resilience::{Requester, Timeouts};

/// Terminal failures of a run. All of them map to exit code 1.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("Could not retrieve auth token.")]
    AuthUnavailable,

    #[error("Could not get user list.")]
    UserListUnavailable,
}

pub type PipelineResult<T> = Result<T, PipelineError>;

/// Validate `config`, build a requester and fetch the list.
pub async fn fetch_noc_list(config: &ClientConfig) -> PipelineResult<String> {
    check_config(config)?;
    let host =
        normalize_host(&config.host).map_err(|e| ConfigError::Validation(vec![e]))?;
    let requester = Requester::with_timeouts(Timeouts::from(&config.timeouts))?;

    tracing::info!(host = %host, "Fetching NOC list");
    run(&requester, &host).await
}

/// Sequence the two stages against an already-normalized `host`.
pub async fn run(requester: &Requester, host: &str) -> PipelineResult<String> {
    let token = fetch_token(requester, host)
        .await
        .ok_or(PipelineError::AuthUnavailable)?;
    tracing::debug!("Auth token acquired");

    let users = fetch_user_list(requester, host, &token)
        .await
        .ok_or(PipelineError::UserListUnavailable)?;
    tracing::info!("User list retrieved");

    Ok(users)
}
