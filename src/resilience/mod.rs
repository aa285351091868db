//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Logical request:
//!     → backoff.rs (sleep 0s / 0s / 1s before each attempt)
//!     → timeouts.rs (connect + read deadline per attempt)
//!     → retries.rs (200 wins, anything else is retried)
//!     → Response | RequestError::Exhausted
//! ```
//!
//! # Design Decisions
//! - Schedule is fixed; attempt count is not configurable
//! - Only status 200 counts as success
//! - A non-200 response never escapes the requester

pub mod backoff;
pub mod retries;
pub mod timeouts;

pub use retries::{RequestError, RequestResult, Requester};
pub use timeouts::Timeouts;
