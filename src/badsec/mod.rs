//! BadSec protocol subsystem.
//!
//! # Data Flow
//! ```text
//! HEAD {host}/auth
//!     → auth.rs (Badsec-Authentication-Token header)
//!     → checksum.rs (hex sha256(token + "/users"))
//!     → users.rs (GET {host}/users + X-Request-Checksum)
//!     → JSON array of user ids
//! ```
//!
//! # Design Decisions
//! - Both stages retry only through the shared requester
//! - Stage failures collapse to `None`; the caller decides the exit code
//! - Tokens are never persisted or logged

pub mod auth;
pub mod checksum;
pub mod types;
pub mod users;

pub use auth::fetch_token;
pub use checksum::request_checksum;
pub use types::{AuthToken, Checksum};
pub use users::{encode_user_list, fetch_user_list};
