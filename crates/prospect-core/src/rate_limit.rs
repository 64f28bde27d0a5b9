//! Fixed-interval request spacing shared by the HTTP clients.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::{Instant, sleep};

/// Rate limiter ensuring a minimum interval between requests.
#[derive(Debug)]
pub struct RateLimiter {
    last_request: Option<Instant>,
    min_interval: Duration,
}

impl RateLimiter {
    /// Creates a limiter whose first request goes out immediately.
    #[must_use]
    pub const fn new(min_interval: Duration) -> Self {
        Self {
            last_request: None,
            min_interval,
        }
    }

    /// Waits until the interval since the previous request has elapsed.
    pub async fn wait(&mut self) {
        if let Some(last) = self.last_request {
            let elapsed = last.elapsed();
            if elapsed < self.min_interval {
                sleep(self.min_interval - elapsed).await;
            }
        }
        self.last_request = Some(Instant::now());
    }

    /// Returns the configured interval.
    #[must_use]
    pub const fn min_interval(&self) -> Duration {
        self.min_interval
    }
}

/// Cloneable handle to a shared [`RateLimiter`].
///
/// Every client holds one throttle per upstream and calls [`Throttle::wait`]
/// before each request.
#[derive(Clone, Debug)]
pub struct Throttle {
    inner: Arc<Mutex<RateLimiter>>,
}

impl Throttle {
    /// Creates a throttle with the given minimum spacing.
    #[must_use]
    pub fn new(min_interval: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(RateLimiter::new(min_interval))),
        }
    }

    /// A throttle that never waits.
    #[must_use]
    pub fn unlimited() -> Self {
        Self::new(Duration::ZERO)
    }

    /// Waits for this upstream's spacing interval.
    pub async fn wait(&self) {
        self.inner.lock().await.wait().await;
    }
}
