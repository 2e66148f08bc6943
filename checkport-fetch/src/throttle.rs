//! Client-side request throttling.
//!
//! The monitoring API enforces an undocumented rate limit, so the client
//! waits a fixed delay before every request instead of reacting to
//! server feedback.

use std::time::Duration;
use tracing::trace;

/// Fixed pre-request delay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestThrottle {
    delay: Option<Duration>,
}

impl RequestThrottle {
    /// Creates a throttle from a millisecond setting.
    ///
    /// Zero or negative values disable the delay.
    pub fn from_millis(millis: i64) -> Self {
        let delay = u64::try_from(millis)
            .ok()
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis);
        Self { delay }
    }

    /// A throttle that never waits.
    pub fn disabled() -> Self {
        Self { delay: None }
    }

    /// Returns the configured delay, if any.
    pub fn delay(&self) -> Option<Duration> {
        self.delay
    }

    /// Sleeps for the configured delay.
    pub async fn wait(&self) {
        if let Some(delay) = self.delay {
            trace!(delay_ms = delay.as_millis(), "Throttling request");
            tokio::time::sleep(delay).await;
        }
    }
}
