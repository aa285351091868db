//! Request checksum derivation.

use sha2::{Digest, Sha256};

use crate::badsec::types::{AuthToken, Checksum};

/// Checksum binding `token` to `path`: hex(SHA-256(token ++ path)).
pub fn request_checksum(token: &AuthToken, path: &str) -> Checksum {
    let mut hasher = Sha256::new();
    hasher.update(token.as_str().as_bytes());
    hasher.update(path.as_bytes());
    Checksum::from_hex(hex::encode(hasher.finalize()))
}
