//! Retry policies for HTTP requests.

use std::time::Duration;

/// Retry policy for an HTTP request.
///
/// Every failure is retried under a policy that allows retries, whether it is
/// a transport error or a non-success status (401 included).
#[derive(Debug, Clone, Default)]
pub enum RetryPolicy {
    /// Single attempt, no retries.
    None,
    /// Two retries with 250ms exponential backoff. Default for every endpoint.
    #[default]
    Standard,
    /// User-provided retry logic.
    Custom(RetryConfig),
}

impl RetryPolicy {
    /// Resolve the policy into a concrete configuration.
    pub fn config(&self) -> RetryConfig {
        match self {
            RetryPolicy::None => RetryConfig::standard().with_max_retries(0),
            RetryPolicy::Standard => RetryConfig::standard(),
            RetryPolicy::Custom(c) => c.clone(),
        }
    }
}

/// Configuration for retry behavior.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryConfig {
    /// Maximum number of retry attempts (not counting the initial request).
    pub max_retries: u32,
    /// Delay after the first failed attempt.
    pub initial_delay: Duration,
    /// Multiplier applied to the delay after each retry.
    pub backoff_factor: f64,
    /// Upper bound on a single delay. `None` leaves the backoff uncapped.
    pub max_delay: Option<Duration>,
    /// Whether to add ±25% jitter to the delay.
    pub jitter: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl RetryConfig {
    /// The standard schedule: 3 attempts, 250ms doubling, uncapped, no jitter.
    pub fn standard() -> Self {
        Self {
            max_retries: 2,
            initial_delay: Duration::from_millis(250),
            backoff_factor: 2.0,
            max_delay: None,
            jitter: false,
        }
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = delay;
        self
    }

    pub fn with_backoff_factor(mut self, factor: f64) -> Self {
        self.backoff_factor = factor;
        self
    }

    pub fn with_max_delay(mut self, max_delay: Duration) -> Self {
        self.max_delay = Some(max_delay);
        self
    }

    pub fn with_jitter(mut self, jitter: bool) -> Self {
        self.jitter = jitter;
        self
    }

    /// Total number of attempts, initial request included.
    pub fn total_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }

    /// Calculate the delay after failed attempt `attempt` (0-indexed).
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let exponent = attempt.min(i32::MAX as u32) as i32;
        let base = self.initial_delay.as_millis() as f64 * self.backoff_factor.powi(exponent);
        let capped = match self.max_delay {
            Some(max) => base.min(max.as_millis() as f64),
            None => base,
        };

        let final_ms = if self.jitter {
            let jitter_range = capped * 0.25;
            let jitter = (rand::random::<f64>() - 0.5) * 2.0 * jitter_range;
            (capped + jitter).max(0.0)
        } else {
            capped
        };

        // `as` saturates, so an overflowing schedule clamps to u64::MAX ms.
        Duration::from_millis(final_ms as u64)
    }
}
