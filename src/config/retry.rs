use std::time::Duration;

pub const RETRY_ATTEMPTS: u32 = 5;
pub const RETRY_DELAY: Duration = Duration::from_secs(30);

/// How many times to try opening the service access file and how long to
/// wait between tries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    delay: Duration,
}

impl RetryPolicy {
    /// Zero attempts is treated as one.
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            delay,
        }
    }

    /// `5 × 30s` when `retry` is set, a single attempt otherwise.
    pub fn from_retry(retry: bool) -> Self {
        let attempts = if retry { RETRY_ATTEMPTS } else { 1 };
        Self::new(attempts, RETRY_DELAY)
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn with_max_attempts(self, max_attempts: u32) -> Self {
        Self::new(max_attempts, self.delay)
    }

    pub fn with_delay(self, delay: Duration) -> Self {
        Self::new(self.max_attempts, delay)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from_retry(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retry_flag_selects_attempts() {
        assert_eq!(RetryPolicy::from_retry(true).max_attempts(), 5);
        assert_eq!(RetryPolicy::from_retry(false).max_attempts(), 1);
        assert_eq!(RetryPolicy::default().delay(), Duration::from_secs(30));
    }

    #[test]
    fn zero_attempts_means_one() {
        assert_eq!(RetryPolicy::new(0, Duration::ZERO).max_attempts(), 1);
        assert_eq!(
            RetryPolicy::from_retry(true).with_max_attempts(0).max_attempts(),
            1
        );
    }
}
