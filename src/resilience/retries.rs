//! Retry logic.
//!
//! # Responsibilities
//! - Issue one logical request as up to three attempts
//! - Sleep the fixed backoff schedule between attempts
//! - Hand back only 200 responses; everything else is retried
//!
//! # Design Decisions
//! - Transport errors and non-200 statuses form one retryable class
//! - Callers see a single error kind once the schedule is spent
//! - Headers are owned per call, never shared between calls

use reqwest::header::HeaderMap;
use reqwest::{Client, Method, Response, StatusCode};
use thiserror::Error;

use crate::resilience::backoff::{delay_before, MAX_ATTEMPTS};
use crate::resilience::timeouts::Timeouts;

/// Errors surfaced by [`Requester::execute`].
#[derive(Debug, Error)]
pub enum RequestError {
    /// Every scheduled attempt failed to produce a 200 response.
    #[error("{method} {url} failed after {attempts} attempts")]
    Exhausted {
        method: Method,
        url: String,
        attempts: usize,
    },
}

pub type RequestResult<T> = Result<T, RequestError>;

/// Why a single attempt did not count as a success.
#[derive(Debug, Error)]
enum AttemptFailure {
    #[error("unexpected status {0}")]
    Status(StatusCode),

    #[error("transport error: {0}")]
    Transport(reqwest::Error),
}

/// HTTP requester with a bounded retry schedule.
#[derive(Debug, Clone)]
pub struct Requester {
    client: Client,
}

impl Requester {
    /// Build a requester using the default connect/read timeouts.
    pub fn new() -> reqwest::Result<Self> {
        Self::with_timeouts(Timeouts::default())
    }

    /// Build a requester with explicit per-attempt timeouts.
    pub fn with_timeouts(timeouts: Timeouts) -> reqwest::Result<Self> {
        let client = timeouts.apply(Client::builder()).build()?;
        Ok(Self { client })
    }

    /// Execute `method url` with `headers`, retrying on any failure.
    ///
    /// Returns the first response whose status is exactly 200. Transport
    /// errors and every other status are logged and retried until the
    /// schedule runs out, at which point [`RequestError::Exhausted`] is returned.
    pub async fn execute(
        &self,
        method: Method,
        url: &str,
        headers: HeaderMap,
    ) -> RequestResult<Response> {
        for attempt in 0..MAX_ATTEMPTS {
            let delay = delay_before(attempt);
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }

            if attempt > 0 {
                tracing::warn!(
                    retry = attempt,
                    method = %method,
                    url = %url,
                    "Retry #{}: {} to {}",
                    attempt,
                    method,
                    url
                );
            }

            match self.attempt(&method, url, &headers).await {
                Ok(response) => return Ok(response),
                Err(failure) => {
                    tracing::warn!(
                        attempt = attempt,
                        method = %method,
                        url = %url,
                        error = %failure,
                        "Request attempt failed"
                    );
                }
            }
        }

        tracing::error!(
            method = %method,
            url = %url,
            attempts = MAX_ATTEMPTS,
            "Retries exhausted"
        );
        Err(RequestError::Exhausted {
            method,
            url: url.to_string(),
            attempts: MAX_ATTEMPTS,
        })
    }

    async fn attempt(
        &self,
        method: &Method,
        url: &str,
        headers: &HeaderMap,
    ) -> Result<Response, AttemptFailure> {
        let response = self
            .client
            .request(method.clone(), url)
            .headers(headers.clone())
            .send()
            .await
            .map_err(AttemptFailure::Transport)?;

        match response.status() {
            StatusCode::OK => Ok(response),
            status => Err(AttemptFailure::Status(status)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exhausted_display() {
        let err = RequestError::Exhausted {
            method: Method::HEAD,
            url: "http://localhost/auth".to_string(),
            attempts: 3,
        };
        assert_eq!(err.to_string(), "HEAD http://localhost/auth failed after 3 attempts");
    }

    #[test]
    fn test_attempt_failure_display() {
        let failure = AttemptFailure::Status(StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(failure.to_string(), "unexpected status 503 Service Unavailable");
    }

    #[tokio::test]
    async fn test_invalid_url_exhausts() {
        let requester = Requester::new().unwrap();
        let err = requester
            .execute(Method::GET, "not a url", HeaderMap::new())
            .await
            .unwrap_err();
        assert!(matches!(err, RequestError::Exhausted { attempts: 3, .. }));
    }
}
