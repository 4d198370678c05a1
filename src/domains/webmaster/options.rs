//! Timeout and retry settings for the Webmaster API client.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default per-attempt timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Default number of attempts, the first one included.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Default base retry delay in milliseconds.
pub const DEFAULT_RETRY_DELAY_MS: u64 = 1_000;

/// Configures HTTP timeout and retry behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientOptions {
    /// Per-attempt timeout in milliseconds.
    pub timeout_ms: u64,

    /// Maximum number of attempts for one logical call, the first one included.
    pub max_attempts: u32,

    /// Base retry delay in milliseconds. Attempt `n` is followed by a wait of
    /// `retry_delay_ms * n` (linear backoff).
    pub retry_delay_ms: u64,
}

impl ClientOptions {
    /// Per-attempt timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Delay to wait after the failed attempt number `attempt` (1-based).
    pub fn backoff(&self, attempt: u32) -> Duration {
        Duration::from_millis(self.retry_delay_ms.saturating_mul(u64::from(attempt)))
    }
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_TIMEOUT_MS,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            retry_delay_ms: DEFAULT_RETRY_DELAY_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ClientOptions::default();
        assert_eq!(options.timeout_ms, 30_000);
        assert_eq!(options.max_attempts, 3);
        assert_eq!(options.retry_delay_ms, 1_000);
    }

    #[test]
    fn test_backoff_is_linear() {
        let options = ClientOptions::default();
        assert_eq!(options.backoff(1), Duration::from_millis(1_000));
        assert_eq!(options.backoff(2), Duration::from_millis(2_000));
        assert_eq!(options.backoff(3), Duration::from_millis(3_000));
    }
}
