/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Rate limiter module for controlling API request rates
//!
//! This module provides rate limiting functionality using the `governor` crate.
//! Every outbound call takes exactly one token; there is no per-endpoint quota.

use crate::application::config::RateLimiterConfig;
use governor::{
    Quota, RateLimiter as GovernorRateLimiter,
    clock::QuantaClock,
    state::{InMemoryState, NotKeyed},
};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

/// Rate limiter for controlling API request rates
///
/// Admits `max_requests` per `period_seconds`, spaced evenly over the period
/// with no initial burst, so the request after the first `max_requests` waits
/// for the next period. Clones share the same bucket.
#[derive(Clone)]
pub struct RateLimiter {
    limiter: Arc<GovernorRateLimiter<NotKeyed, InMemoryState, QuantaClock>>,
    max_requests: NonZeroU32,
    period: Duration,
}

impl RateLimiter {
    /// Creates a new rate limiter from configuration
    ///
    /// A zero `max_requests` is treated as one request per period and a zero
    /// period as one second.
    ///
    /// # Example
    ///
    /// ```
    /// use bookstack_client::application::config::RateLimiterConfig;
    /// use bookstack_client::application::rate_limiter::RateLimiter;
    ///
    /// let limiter = RateLimiter::new(&RateLimiterConfig::per_second(180));
    /// assert!(limiter.check());
    /// ```
    #[must_use]
    pub fn new(config: &RateLimiterConfig) -> Self {
        let max_requests = NonZeroU32::new(config.max_requests).unwrap_or(NonZeroU32::MIN);
        let period = Duration::from_secs(config.period_seconds.max(1));

        let quota = Quota::with_period(period / max_requests.get())
            .unwrap_or_else(|| Quota::per_second(max_requests))
            .allow_burst(NonZeroU32::MIN);

        Self {
            limiter: Arc::new(GovernorRateLimiter::direct(quota)),
            max_requests,
            period,
        }
    }

    /// Creates a limiter admitting `max_requests` per second
    #[must_use]
    pub fn per_second(max_requests: u32) -> Self {
        Self::new(&RateLimiterConfig::per_second(max_requests))
    }

    /// Waits until a request can be made according to the rate limit
    pub async fn wait(&self) {
        self.limiter.until_ready().await;
    }

    /// Takes a token if one is available right now
    ///
    /// # Returns
    ///
    /// * `true` if the request may proceed
    /// * `false` if the bucket is empty
    #[must_use]
    pub fn check(&self) -> bool {
        self.limiter.check().is_ok()
    }

    /// Number of requests admitted per period
    #[must_use]
    pub fn max_requests(&self) -> u32 {
        self.max_requests.get()
    }

    /// Length of the period
    #[must_use]
    pub fn period(&self) -> Duration {
        self.period
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(&RateLimiterConfig::default())
    }
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter")
            .field("max_requests", &self.max_requests)
            .field("period", &self.period)
            .finish_non_exhaustive()
    }
}
