// Imports all of the components needed for cloudwatch::Client
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Aggregates per storage class samples into size and growth per bucket.
mod aggregator;

/// CloudWatch `Client`.
mod client;

/// Per region pool of CloudWatch clients.
mod pool;

/// Implementation of the `StorageMetrics` trait for our CloudWatch
/// `Client`.
mod storage_metrics;

pub use aggregator::*;
pub use client::*;
pub use pool::*;
