use std::time::Duration;

use crate::error::{GriefError, Result};

pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;
pub const DEFAULT_BASE_DELAY: Duration = Duration::from_millis(1000);

/// How many times a remote call is tried and how long to wait in between.
///
/// The delay doubles per attempt: 1x, 2x, 4x, 8x the base. Nothing is
/// scheduled after the last attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    base_delay: Duration,
}

impl RetryPolicy {
    /// # Errors
    ///
    /// Returns `GriefError::Config` if `max_attempts` is zero.
    pub fn new(max_attempts: u32, base_delay: Duration) -> Result<Self> {
        if max_attempts == 0 {
            return Err(GriefError::config("max_attempts must be at least 1"));
        }
        Ok(Self {
            max_attempts,
            base_delay,
        })
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn base_delay(&self) -> Duration {
        self.base_delay
    }

    /// Delay to wait after the failed attempt with 0-based index `attempt`.
    ///
    /// Returns `None` when that attempt was the last one.
    pub fn backoff_after(&self, attempt: u32) -> Option<Duration> {
        if attempt + 1 >= self.max_attempts {
            return None;
        }
        let factor = 2u32.saturating_pow(attempt);
        Some(self.base_delay.saturating_mul(factor))
    }

    /// Delay scheduled before attempt `k` (0-based). Zero for the first one.
    pub fn delay_before(&self, attempt: u32) -> Duration {
        match attempt {
            0 => Duration::ZERO,
            k => self.backoff_after(k - 1).unwrap_or(Duration::ZERO),
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            base_delay: DEFAULT_BASE_DELAY,
        }
    }
}
