// Metric query windows
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use std::time::{
    Duration,
    SystemTime,
};

/// One day, the granularity CloudWatch publishes bucket sizes at.
pub const ONE_DAY: Duration = Duration::from_secs(86_400);

// The metrics backend reports with up to two days of delay, so both
// windows are anchored slightly in the past.
const REPORTING_LAG: Duration = Duration::from_secs(2 * 86_400);

// Distance between the recent sample and the prior month baseline.
const BASELINE_OFFSET: Duration = Duration::from_secs(30 * 86_400);

/// An interval of time handed to the metrics backend.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeWindow {
    pub start: SystemTime,
    pub end:   SystemTime,
}

impl TimeWindow {
    /// Window for the current size sample: the last two days.
    pub fn recent(now: SystemTime) -> Self {
        Self {
            start: now - REPORTING_LAG,
            end:   now,
        }
    }

    /// Window for the prior month baseline: a single day roughly thirty
    /// days ago, shifted by the same reporting lag.
    pub fn baseline(now: SystemTime) -> Self {
        Self {
            start: now - BASELINE_OFFSET - REPORTING_LAG,
            end:   now - BASELINE_OFFSET,
        }
    }
}
