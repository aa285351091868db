//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! optional config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → CLI overrides (--host, --log-level)
//!     → validation.rs (host normalization, range checks)
//!     → ClientConfig (validated, immutable for the run)
//! ```
//!
//! # Design Decisions
//! - All fields have defaults so the client runs with no file at all
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{check_config, load_config, ConfigError};
pub use schema::{ClientConfig, ObservabilityConfig, TimeoutConfig, DEFAULT_HOST};
pub use validation::{normalize_host, validate_config, ValidationError};
