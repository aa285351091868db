//! Protocol types and wire constants.

use std::fmt;

/// Path of the token endpoint.
pub const AUTH_PATH: &str = "/auth";

/// Path of the protected user list.
pub const USERS_PATH: &str = "/users";

/// Response header carrying the rotating token.
pub const AUTH_TOKEN_HEADER: &str = "Badsec-Authentication-Token";

/// Request header carrying the checksum for `/users`.
pub const CHECKSUM_HEADER: &str = "X-Request-Checksum";

/// Join a normalized host with a fixed path.
pub fn endpoint(host: &str, path: &str) -> String {
    format!("{}{}", host, path)
}

/// Opaque token handed out by the auth endpoint. Lives for one run.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    /// Wrap a raw header value. Empty values are not tokens.
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        if value.is_empty() {
            None
        } else {
            Some(Self(value))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Tokens stay out of logs.
impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(..)")
    }
}

/// Lowercase hex SHA-256 digest authorizing a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checksum(String);

impl Checksum {
    pub(crate) fn from_hex(hex: String) -> Self {
        Self(hex)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
