// Aggregates storage metrics into per bucket size and growth
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::Result;
use crate::common::{
    BucketRecord,
    Buckets,
    StorageMetrics,
    TimeWindow,
};
use std::time::SystemTime;
use super::pool::ClientPool;
use tracing::{
    debug,
    warn,
};

/// Current and prior month size sums for one bucket, in bytes.
#[derive(Debug, PartialEq)]
pub struct SizeSample {
    /// Sum of the recent window averages across storage classes.
    pub current: f64,

    /// Sum of the baseline window averages across storage classes.
    pub prior_month: f64,
}

/// Sum the average size over both windows across `storage_types`.
///
/// A storage class failing after retries abandons the whole sample, so a
/// bucket never reports a partial sum as if it were complete.
pub async fn sample_bucket<M: StorageMetrics>(
    client: &M,
    bucket: &str,
    storage_types: &[String],
    recent: &TimeWindow,
    baseline: &TimeWindow,
) -> Result<SizeSample> {
    let mut current     = 0.0;
    let mut prior_month = 0.0;

    for storage_type in storage_types {
        current += client.average_size(bucket, storage_type, recent)
            .await?
            .unwrap_or_default();

        prior_month += client.average_size(bucket, storage_type, baseline)
            .await?
            .unwrap_or_default();
    }

    Ok(SizeSample {
        current,
        prior_month,
    })
}

// Apply a sample to the record, or leave it zeroed when the sample was
// abandoned. The error text already names the bucket and storage class.
async fn apply_metrics<M: StorageMetrics>(
    client: &M,
    record: &mut BucketRecord,
    storage_types: &[String],
    recent: &TimeWindow,
    baseline: &TimeWindow,
) {
    match sample_bucket(client, &record.name, storage_types, recent, baseline).await {
        Ok(sample) => {
            record.current_size   = sample.current;
            record.monthly_growth = sample.current - sample.prior_month;
        },
        Err(error) => {
            warn!("apply_metrics: abandoning '{}': {:#}", record.name, error);
        },
    }
}

/// Compute `current_size` and `monthly_growth` for every record with a
/// resolved region.
///
/// Records without one are skipped entirely, keep their zeroed metrics,
/// and never cause a metrics client to be built. One bucket's abandoned
/// sample never stops the buckets after it.
pub async fn set_size_and_growth(
    pool: &mut ClientPool,
    storage_types: &[String],
    buckets: &mut Buckets,
) -> Result<()> {
    let now      = SystemTime::now();
    let recent   = TimeWindow::recent(now);
    let baseline = TimeWindow::baseline(now);

    for record in buckets.iter_mut() {
        let region = match &record.region {
            Some(region) => region.clone(),
            None => {
                debug!("set_size_and_growth: skipping '{}', no region", record.name);

                continue;
            },
        };

        let client = pool.ensure(&region).await?;

        apply_metrics(client, record, storage_types, &recent, &baseline).await;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;
    use async_trait::async_trait;
    use crate::common::CredentialSource;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    // Scripted metrics backend: a (recent, baseline) pair per storage
    // type, with selected storage types failing outright.
    struct FakeMetrics {
        recent:  TimeWindow,
        sizes:   HashMap<&'static str, (Option<f64>, Option<f64>)>,
        failing: Vec<&'static str>,
    }

    impl FakeMetrics {
        fn new(now: SystemTime) -> Self {
            Self {
                recent:  TimeWindow::recent(now),
                sizes:   HashMap::new(),
                failing: Vec::new(),
            }
        }
    }

    #[async_trait]
    impl StorageMetrics for FakeMetrics {
        async fn average_size(
            &self,
            bucket: &str,
            storage_type: &str,
            window: &TimeWindow,
        ) -> Result<Option<f64>> {
            if self.failing.iter().any(|f| *f == storage_type) {
                bail!("boom for '{}' '{}'", bucket, storage_type);
            }

            let (recent, baseline) = self.sizes
                .get(storage_type)
                .copied()
                .unwrap_or((None, None));

            if window == &self.recent {
                Ok(recent)
            }
            else {
                Ok(baseline)
            }
        }
    }

    fn storage_types(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| (*n).to_string()).collect()
    }

    #[tokio::test]
    async fn test_sample_bucket_sums_storage_types() {
        let now = SystemTime::now();

        let mut fake = FakeMetrics::new(now);
        fake.sizes.insert("StandardStorage", (Some(100.0), Some(60.0)));
        fake.sizes.insert("GlacierStorage", (Some(50.0), Some(20.0)));

        let ret = sample_bucket(
            &fake,
            "test-bucket",
            &storage_types(&["StandardStorage", "GlacierStorage"]),
            &TimeWindow::recent(now),
            &TimeWindow::baseline(now),
        ).await.unwrap();

        let expected = SizeSample {
            current:     150.0,
            prior_month: 80.0,
        };

        assert_eq!(ret, expected);
    }

    #[tokio::test]
    async fn test_sample_bucket_no_datapoints_is_zero() {
        let now  = SystemTime::now();
        let fake = FakeMetrics::new(now);

        let ret = sample_bucket(
            &fake,
            "test-bucket",
            &storage_types(&["StandardStorage", "GlacierStorage"]),
            &TimeWindow::recent(now),
            &TimeWindow::baseline(now),
        ).await.unwrap();

        let expected = SizeSample {
            current:     0.0,
            prior_month: 0.0,
        };

        assert_eq!(ret, expected);
    }

    #[tokio::test]
    async fn test_failed_storage_type_discards_partial_sums() {
        let now = SystemTime::now();

        // The first storage type succeeds, the second fails: the record
        // must come out as if nothing had been summed at all.
        let mut fake = FakeMetrics::new(now);
        fake.sizes.insert("StandardStorage", (Some(100.0), Some(60.0)));
        fake.failing.push("GlacierStorage");

        let mut record = BucketRecord::resolved("test-bucket", "eu-west-1", Default::default());

        apply_metrics(
            &fake,
            &mut record,
            &storage_types(&["StandardStorage", "GlacierStorage"]),
            &TimeWindow::recent(now),
            &TimeWindow::baseline(now),
        ).await;

        assert_eq!(record.current_size, 0.0);
        assert_eq!(record.monthly_growth, 0.0);
    }

    #[tokio::test]
    async fn test_apply_metrics_sets_growth() {
        let now = SystemTime::now();

        let mut fake = FakeMetrics::new(now);
        fake.sizes.insert("StandardStorage", (Some(100.0), Some(160.0)));

        let mut record = BucketRecord::resolved("test-bucket", "eu-west-1", Default::default());

        apply_metrics(
            &fake,
            &mut record,
            &storage_types(&["StandardStorage"]),
            &TimeWindow::recent(now),
            &TimeWindow::baseline(now),
        ).await;

        assert_eq!(record.current_size, 100.0);

        // Shrinking buckets report negative growth.
        assert_eq!(record.monthly_growth, -60.0);
    }

    #[tokio::test]
    async fn test_unresolved_buckets_never_build_clients() {
        let mut pool = ClientPool::new(CredentialSource::Profile(None));

        let mut buckets = vec![
            BucketRecord::inaccessible("a-bucket-name"),
            BucketRecord::inaccessible("another-bucket-name"),
        ];

        set_size_and_growth(
            &mut pool,
            &storage_types(&["StandardStorage"]),
            &mut buckets,
        ).await.unwrap();

        assert!(pool.is_empty());

        for record in &buckets {
            assert_eq!(record.current_size, 0.0);
            assert_eq!(record.monthly_growth, 0.0);
        }
    }
}
