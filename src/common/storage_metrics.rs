// StorageMetrics trait
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::Result;
use async_trait::async_trait;
use super::TimeWindow;

/// `StorageMetrics` represents the ability to report the average stored
/// bytes of one bucket and storage class over a window of time.
///
/// This trait is implemented by the per region CloudWatch `Client`; the
/// aggregator only ever talks through it.
#[async_trait]
pub trait StorageMetrics {
    /// Average `BucketSizeBytes` over `window`, or `None` when the backend
    /// holds no datapoints for that bucket and storage class.
    async fn average_size(
        &self,
        bucket: &str,
        storage_type: &str,
        window: &TimeWindow,
    ) -> Result<Option<f64>>;
}
