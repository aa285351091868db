//! NOC list client for BadSec servers.
//!
//! Fetches a rotating token, derives a request checksum from it and pulls
//! the protected user list, retrying each HTTP call on a fixed schedule.

pub mod badsec;
pub mod cli;
pub mod config;
pub mod observability;
pub mod pipeline;
pub mod resilience;

pub use config::ClientConfig;
pub use pipeline::{fetch_noc_list, PipelineError};
pub use resilience::{RequestError, Requester};
