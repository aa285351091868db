//! Auth stage: fetch the rotating token.

use reqwest::header::HeaderMap;
use reqwest::Method;

use crate::badsec::types::{endpoint, AuthToken, AUTH_PATH, AUTH_TOKEN_HEADER};
use crate::resilience::Requester;

/// `HEAD {host}/auth` and pull the token out of the response headers.
///
/// Exhausted retries, a missing header, an empty value and a non-UTF-8
/// value all collapse to `None`.
pub async fn fetch_token(requester: &Requester, host: &str) -> Option<AuthToken> {
    let url = endpoint(host, AUTH_PATH);
    let response = match requester.execute(Method::HEAD, &url, HeaderMap::new()).await {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!(error = %e, "Auth request failed");
            return None;
        }
    };

    token_from_headers(response.headers())
}

fn token_from_headers(headers: &HeaderMap) -> Option<AuthToken> {
    let Some(value) = headers.get(AUTH_TOKEN_HEADER) else {
        tracing::warn!(header = AUTH_TOKEN_HEADER, "Auth response missing token header");
        return None;
    };
    match value.to_str() {
        Ok(raw) => AuthToken::new(raw),
        Err(_) => {
            tracing::warn!(header = AUTH_TOKEN_HEADER, "Auth token header is not valid text");
            None
        }
    }
}
