//! Minimum-delay policy for rate-limited upstream calls.

use std::time::Duration;

/// Explicit inter-call delay policy.
///
/// The geolocation upstream throttles per-client request rate; a burst
/// degrades or blocks lookups for the remainder of a run. The policy sleeps
/// the full interval before every call — per call, not amortized — matching
/// the upstream's tolerance. Swap in [`RatePolicy::disabled`] in tests.
#[derive(Debug, Clone, Copy)]
pub struct RatePolicy {
    min_interval: Duration,
}

impl RatePolicy {
    /// Default delay before each geolocation call.
    const DEFAULT_INTERVAL: Duration = Duration::from_millis(1200);

    /// Policy with a custom minimum interval.
    #[must_use]
    pub const fn new(min_interval: Duration) -> Self {
        Self { min_interval }
    }

    /// Policy that never pauses.
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            min_interval: Duration::ZERO,
        }
    }

    /// The configured minimum interval.
    #[must_use]
    pub const fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// Wait out the mandatory delay before the next upstream call.
    pub async fn pause(&self) {
        if !self.min_interval.is_zero() {
            tokio::time::sleep(self.min_interval).await;
        }
    }
}

impl Default for RatePolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INTERVAL)
    }
}
