// Common traits and types
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use std::time::Duration;

mod bucket;
mod config;
mod credentials;
mod human_size;
mod storage_metrics;
mod storage_types;
mod time_window;

pub use bucket::*;
pub use config::*;
pub use credentials::*;
pub use human_size::*;
pub use storage_metrics::*;
pub use storage_types::*;
pub use time_window::*;

// These are used by the S3 and CloudWatch clients.
pub type BucketNames = Vec<String>;

/// Attempts made for a retryable provider call before giving up.
pub const RETRY_ATTEMPTS: u32 = 3;

/// Fixed pause between retry attempts.
pub const RETRY_DELAY: Duration = Duration::from_secs(2);
