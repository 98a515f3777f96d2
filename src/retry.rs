//! Bounded retry with exponential backoff
//!
//! Only transient transport failures are retried; a missing object or a
//! corrupt download never fixes itself. The caller always observes the final
//! failure rather than an endless silent retry loop.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Retry policy for remote fetches
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryPolicy {
    /// Total attempts, including the first (minimum 1)
    pub max_attempts: u32,

    /// Delay before the second attempt, in milliseconds
    pub initial_delay_ms: u64,

    /// Upper bound on any single delay, in milliseconds
    pub max_delay_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay_ms: 200,
            max_delay_ms: 5_000,
        }
    }
}

impl RetryPolicy {
    /// A policy that never retries
    pub fn none() -> Self {
        Self {
            max_attempts: 1,
            ..Self::default()
        }
    }

    /// Total attempts, clamped to at least one
    pub fn attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }

    /// Backoff delay after the given failed attempt (1-based): doubles each
    /// time, capped at `max_delay_ms`.
    pub fn delay_after(&self, attempt: u32) -> Duration {
        let exp = attempt.saturating_sub(1).min(16);
        let ms = self
            .initial_delay_ms
            .saturating_mul(1u64 << exp)
            .min(self.max_delay_ms);
        Duration::from_millis(ms)
    }
}
