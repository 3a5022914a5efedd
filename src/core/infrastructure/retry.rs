//! Retry policy for transient failures.
//!
//! Delays grow exponentially from `min_interval` and are capped at
//! `max_interval`. A `Retry-After` header, in seconds or as an HTTP date,
//! replaces the computed delay but is still capped.

use chrono::{DateTime, Utc};
use reqwest::Method;
use reqwest::header::{HeaderMap, RETRY_AFTER};
use std::time::Duration;

const DEFAULT_MAX_RETRIES: u32 = 4;
const DEFAULT_MIN_INTERVAL: Duration = Duration::from_secs(1);
const DEFAULT_MAX_INTERVAL: Duration = Duration::from_secs(30);

/// Controls how many times, and how patiently, a failed call is retried.
///
/// # Fields
/// * `max_retries` - Retries after the first attempt
/// * `min_interval` - Delay before the first retry
/// * `max_interval` - Upper bound of any delay, including `Retry-After`
/// * `retry_non_idempotent` - Also retry `POST` and `PATCH`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub min_interval: Duration,
    pub max_interval: Duration,
    pub retry_non_idempotent: bool,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            min_interval: DEFAULT_MIN_INTERVAL,
            max_interval: DEFAULT_MAX_INTERVAL,
            retry_non_idempotent: false,
        }
    }
}

impl RetryPolicy {
    /// Creates a policy with the given budget and cap. A zero `max_interval`
    /// falls back to the default cap.
    pub fn new(max_retries: u32, max_interval: Duration) -> Self {
        let max_interval = if max_interval.is_zero() {
            DEFAULT_MAX_INTERVAL
        } else {
            max_interval
        };
        Self {
            max_retries,
            min_interval: DEFAULT_MIN_INTERVAL.min(max_interval),
            max_interval,
            retry_non_idempotent: false,
        }
    }

    #[must_use]
    pub fn with_min_interval(mut self, min_interval: Duration) -> Self {
        self.min_interval = min_interval;
        self
    }

    #[must_use]
    pub fn with_retry_non_idempotent(mut self, enabled: bool) -> Self {
        self.retry_non_idempotent = enabled;
        self
    }

    /// Whether requests with this method may be sent more than once.
    pub(crate) fn allows_method(&self, method: &Method) -> bool {
        method.is_idempotent() || self.retry_non_idempotent
    }

    /// Exponential delay for the given zero-based retry number.
    pub(crate) fn backoff(&self, attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempt);
        self.min_interval
            .checked_mul(factor)
            .unwrap_or(self.max_interval)
            .min(self.max_interval)
    }

    /// Delay before the next attempt, preferring the server's `Retry-After`.
    pub(crate) fn delay_for(&self, attempt: u32, headers: Option<&HeaderMap>) -> Duration {
        headers
            .and_then(|h| retry_after(h, Utc::now()))
            .map_or_else(|| self.backoff(attempt), |d| d.min(self.max_interval))
    }
}

/// Parses `Retry-After` as delta-seconds or as an HTTP date relative to `now`.
pub(crate) fn retry_after(headers: &HeaderMap, now: DateTime<Utc>) -> Option<Duration> {
    let value = headers.get(RETRY_AFTER)?.to_str().ok()?.trim();
    if let Ok(seconds) = value.parse::<u64>() {
        return Some(Duration::from_secs(seconds));
    }
    let at = DateTime::parse_from_rfc2822(value).ok()?.with_timezone(&Utc);
    // A date in the past means "retry now".
    Some((at - now).to_std().unwrap_or(Duration::ZERO))
}
