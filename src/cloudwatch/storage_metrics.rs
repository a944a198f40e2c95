// Implements the StorageMetrics trait for the CloudWatch Client
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::Result;
use async_trait::async_trait;
use aws_sdk_cloudwatch::operation::get_metric_statistics::GetMetricStatisticsOutput;
use aws_sdk_cloudwatch::primitives::DateTime;
use crate::common::{
    StorageMetrics,
    TimeWindow,
    RETRY_ATTEMPTS,
    RETRY_DELAY,
};
use std::cmp::Reverse;
use super::client::Client;
use tracing::{
    debug,
    warn,
};

// Pull the most recent average out of the response. Zero datapoints means
// the backend holds nothing for that bucket and storage type combination,
// which is an expected outcome rather than an error.
fn latest_average(output: GetMetricStatisticsOutput) -> Option<f64> {
    let mut datapoints = output.datapoints()
        .unwrap_or_default()
        .to_vec();

    if datapoints.is_empty() {
        return None;
    }

    // We don't know which order datapoints will be in if we get more than
    // a single datapoint, so we must sort them.
    // We sort so that the latest datapoint is at index 0 of the vec.
    datapoints.sort_by_key(|d| {
        Reverse(d.timestamp().map(DateTime::secs).unwrap_or_default())
    });

    datapoints[0].average()
}

#[async_trait]
impl StorageMetrics for Client {
    /// Average size of `bucket` under `storage_type` over `window`.
    ///
    /// A failing query is retried a fixed number of times; after that the
    /// error escapes to the aggregator carrying the bucket and storage
    /// class it belongs to.
    async fn average_size(
        &self,
        bucket: &str,
        storage_type: &str,
        window: &TimeWindow,
    ) -> Result<Option<f64>> {
        let mut attempt = 0;

        loop {
            attempt += 1;

            match self.get_metric_statistics(bucket, storage_type, window).await {
                Ok(output) => {
                    let average = latest_average(output);

                    debug!(
                        "average_size: '{}' '{}' -> {:?}",
                        bucket,
                        storage_type,
                        average,
                    );

                    return Ok(average);
                },
                Err(error) => {
                    warn!(
                        "average_size: attempt {}/{} for '{}' '{}' failed: {}",
                        attempt,
                        RETRY_ATTEMPTS,
                        bucket,
                        storage_type,
                        error,
                    );

                    if attempt >= RETRY_ATTEMPTS {
                        return Err(error.context(format!(
                            "Storage metrics exhausted for bucket '{}', storage type '{}'",
                            bucket,
                            storage_type,
                        )));
                    }

                    tokio::time::sleep(RETRY_DELAY).await;
                },
            }
        }
    }
}
