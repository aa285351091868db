//! Resource stage: fetch the user list with a checksum and encode it.

use std::io;

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::Method;
use serde::ser::Error as _;
use serde::Serialize;

use crate::badsec::checksum::request_checksum;
use crate::badsec::types::{endpoint, AuthToken, CHECKSUM_HEADER, USERS_PATH};
use crate::resilience::Requester;

/// `GET {host}/users` authorized by the token's checksum.
///
/// Returns the body as a JSON array string, one element per `\n`-separated
/// line. Any failure along the way yields `None`.
pub async fn fetch_user_list(
    requester: &Requester,
    host: &str,
    token: &AuthToken,
) -> Option<String> {
    let checksum = request_checksum(token, USERS_PATH);
    let mut headers = HeaderMap::new();
    match HeaderValue::from_str(checksum.as_str()) {
        Ok(value) => {
            headers.insert(CHECKSUM_HEADER, value);
        }
        Err(e) => {
            tracing::error!(error = %e, "Checksum is not a valid header value");
            return None;
        }
    }

    let url = endpoint(host, USERS_PATH);
    let response = match requester.execute(Method::GET, &url, headers).await {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!(error = %e, "User list request failed");
            return None;
        }
    };

    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read user list body");
            return None;
        }
    };

    match encode_user_list(&body) {
        Ok(json) => {
            tracing::debug!(bytes = body.len(), "User list encoded");
            Some(json)
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to encode user list");
            None
        }
    }
}

/// Split `body` on `\n` and encode the pieces as a JSON array.
///
/// No trimming, no filtering: `"a\n"` becomes `["a", ""]`.
pub fn encode_user_list(body: &str) -> serde_json::Result<String> {
    let users: Vec<&str> = body.split('\n').collect();

    let mut buf = Vec::with_capacity(body.len() + users.len() * 4 + 2);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, SpacedAsciiFormatter);
    users.serialize(&mut ser)?;

    // The formatter only emits ASCII.
    String::from_utf8(buf).map_err(serde_json::Error::custom)
}

/// Compact JSON with `", "` between array elements; DEL and non-ASCII are
/// escaped as `\uXXXX`.
struct SpacedAsciiFormatter;

impl serde_json::ser::Formatter for SpacedAsciiFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        for ch in fragment.chars() {
            if ch.is_ascii() && ch != '\x7f' {
                writer.write_all(&[ch as u8])?;
            } else {
                let mut units = [0u16; 2];
                for unit in ch.encode_utf16(&mut units) {
                    write!(writer, "\\u{:04x}", unit)?;
                }
            }
        }
        Ok(())
    }
}
