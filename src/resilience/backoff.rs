//! Fixed pre-attempt backoff schedule.
//!
//! The schedule approximates the opening steps of an exponential backoff:
//! no wait before the first two attempts, one second before the third.

use std::time::Duration;

/// Delay slept before each attempt, indexed by attempt (0-based).
pub const BACKOFF_SCHEDULE: [Duration; 3] = [
    Duration::from_secs(0),
    Duration::from_secs(0),
    Duration::from_secs(1),
];

/// Total number of attempts a single logical request is allowed.
pub const MAX_ATTEMPTS: usize = BACKOFF_SCHEDULE.len();

/// Delay to sleep before `attempt` (0-based). Attempts past the schedule get no delay.
pub fn delay_before(attempt: usize) -> Duration {
    BACKOFF_SCHEDULE
        .get(attempt)
        .copied()
        .unwrap_or(Duration::ZERO)
}

/// Sum of every scheduled delay; the minimum time an exhausted request blocks.
pub fn total_delay() -> Duration {
    BACKOFF_SCHEDULE.iter().sum()
}
