//! Soft latency checks for scenarios.
//!
//! A slow response is reported, not failed: `LatencyBudget::check` logs a
//! warning and returns `false` so the caller can decide what to do with it.

use std::time::{Duration, Instant};

pub const DEFAULT_LATENCY_BUDGET: Duration = Duration::from_secs(3);

/// Run `f` and return its output with the wall-clock time it took.
pub fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let out = f();
    (out, start.elapsed())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyBudget {
    limit: Duration,
}

impl LatencyBudget {
    pub fn new(limit: Duration) -> Self {
        Self { limit }
    }

    pub fn limit(&self) -> Duration {
        self.limit
    }

    /// `true` when `elapsed` is strictly under the limit.
    pub fn check(&self, label: &str, elapsed: Duration) -> bool {
        let within = elapsed < self.limit;
        if within {
            tracing::debug!(label, elapsed_ms = millis(elapsed), "response time");
        } else {
            tracing::warn!(
                label,
                elapsed_ms = millis(elapsed),
                limit_ms = millis(self.limit),
                "response slower than budget"
            );
        }
        within
    }
}

/// Whole milliseconds, saturating at `u64::MAX`.
fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

impl Default for LatencyBudget {
    fn default() -> Self {
        Self::new(DEFAULT_LATENCY_BUDGET)
    }
}
