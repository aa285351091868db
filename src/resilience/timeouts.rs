//! Per-attempt timeout settings.
//!
//! The connect timeout sits just above the 3s TCP retransmission window so
//! slow-but-healthy connections are not cut off.

use std::time::Duration;

use crate::config::TimeoutConfig;

/// Connect and read timeouts applied to every attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub connect: Duration,
    pub read: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            connect: Duration::from_millis(3050),
            read: Duration::from_secs(5),
        }
    }
}

impl From<&TimeoutConfig> for Timeouts {
    fn from(config: &TimeoutConfig) -> Self {
        Self {
            connect: Duration::from_millis(config.connect_ms),
            read: Duration::from_millis(config.read_ms),
        }
    }
}

impl Timeouts {
    /// Apply both timeouts to a client builder.
    pub fn apply(&self, builder: reqwest::ClientBuilder) -> reqwest::ClientBuilder {
        builder
            .connect_timeout(self.connect)
            .read_timeout(self.read)
    }
}
