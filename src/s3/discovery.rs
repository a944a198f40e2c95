// Bucket discovery: region probe, tags, and record assembly
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::Result;
use aws_smithy_http::result::SdkError;
use crate::common::{
    BucketRecord,
    Buckets,
    Tags,
    RETRY_ATTEMPTS,
    RETRY_DELAY,
};
use http::StatusCode;
use super::client::Client;
use super::region_lookup::RegionLookup;
use tracing::{
    debug,
    warn,
};

// A definitive denial from the provider is a valid outcome, not a failure:
// the bucket exists but can't be seen into with these credentials.
fn is_denied<E>(error: &SdkError<E>) -> bool {
    match error {
        SdkError::ServiceError(context) => {
            let status = context.raw().http().status();

            status == StatusCode::FORBIDDEN || status == StatusCode::NOT_FOUND
        },
        _ => false,
    }
}

impl Client {
    /// Resolve the home region of `bucket`.
    ///
    /// Transient failures are retried a fixed number of times before the
    /// bucket is declared unavailable; the pipeline keeps moving either
    /// way.
    pub async fn bucket_region(&self, bucket: &str) -> RegionLookup {
        let mut attempt = 0;

        loop {
            attempt += 1;

            match self.get_bucket_location(bucket).await {
                Ok(region) => return RegionLookup::Resolved(region),
                Err(error) => {
                    if is_denied(&error) {
                        debug!("bucket_region: '{}' is inaccessible", bucket);

                        return RegionLookup::Inaccessible;
                    }

                    warn!(
                        "bucket_region: attempt {}/{} for '{}' failed: {}",
                        attempt,
                        RETRY_ATTEMPTS,
                        bucket,
                        error,
                    );

                    if attempt >= RETRY_ATTEMPTS {
                        return RegionLookup::Unavailable;
                    }

                    tokio::time::sleep(RETRY_DELAY).await;
                },
            }
        }
    }

    /// Fetch the tags of `bucket` as a plain mapping.
    ///
    /// Tags are best effort. A bucket with no tag set at all surfaces as a
    /// provider error, so any failure here collapses to an empty mapping.
    pub async fn bucket_tags(&self, bucket: &str) -> Tags {
        match self.get_bucket_tagging(bucket).await {
            Ok(tag_set) => {
                tag_set.iter()
                    .filter_map(|tag| {
                        let key   = tag.key()?.to_string();
                        let value = tag.value()?.to_string();

                        Some((key, value))
                    })
                    .collect()
            },
            Err(error) => {
                debug!("bucket_tags: no tags for '{}': {}", bucket, error);

                Tags::new()
            },
        }
    }

    /// Produce one `BucketRecord` per bucket visible to the account, in
    /// the provider's listing order.
    ///
    /// A bucket that can't be reached degrades to an inaccessible record
    /// rather than aborting the whole run. Tags are only attempted once
    /// the region is known.
    pub async fn discover_buckets(&self) -> Result<Buckets> {
        debug!("discover_buckets: Listing...");

        let bucket_list = self.list_buckets().await?;

        let mut buckets = Buckets::new();

        for name in bucket_list.bucket_names() {
            let record = match self.bucket_region(name).await {
                RegionLookup::Resolved(region) => {
                    let tags = self.bucket_tags(name).await;

                    BucketRecord::resolved(name, &region, tags)
                },
                RegionLookup::Inaccessible => BucketRecord::inaccessible(name),
                RegionLookup::Unavailable => {
                    warn!("discover_buckets: probes exhausted for '{}'", name);

                    BucketRecord::inaccessible(name)
                },
            };

            buckets.push(record);
        }

        Ok(buckets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::client::tests::{
        mock_client,
        ResponseType,
    };
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_bucket_region_resolved() {
        let client = mock_client(vec![
            ResponseType::FromFile("s3-get-bucket-location.xml"),
        ]);

        let ret = client.bucket_region("test-bucket").await;

        assert_eq!(ret, RegionLookup::Resolved("eu-west-1".into()));
    }

    #[tokio::test]
    async fn test_bucket_region_denied() {
        for status in [403, 404] {
            let client = mock_client(vec![
                ResponseType::WithStatus(status),
            ]);

            let ret = client.bucket_region("test-bucket").await;

            assert_eq!(ret, RegionLookup::Inaccessible);
        }
    }

    // Paused time turns the retry pauses into no-ops.
    #[tokio::test(start_paused = true)]
    async fn test_bucket_region_unavailable() {
        let client = mock_client(vec![
            ResponseType::WithStatus(500),
            ResponseType::WithStatus(500),
            ResponseType::WithStatus(500),
        ]);

        let ret = client.bucket_region("test-bucket").await;

        assert_eq!(ret, RegionLookup::Unavailable);
    }

    #[tokio::test]
    async fn test_bucket_tags() {
        let client = mock_client(vec![
            ResponseType::FromFile("s3-get-bucket-tagging.xml"),
        ]);

        let ret = client.bucket_tags("test-bucket").await;

        assert_eq!(ret.get("team").map(String::as_str), Some("storage"));
        assert_eq!(ret.get("env").map(String::as_str), Some("production"));
        assert_eq!(ret.len(), 2);
    }

    #[tokio::test]
    async fn test_bucket_tags_error_is_empty() {
        let client = mock_client(vec![
            ResponseType::WithStatus(404),
        ]);

        let ret = client.bucket_tags("test-bucket").await;

        assert!(ret.is_empty());
    }

    #[tokio::test]
    async fn test_discover_buckets() {
        // One resolvable bucket with tags, one the provider denies.
        let client = mock_client(vec![
            ResponseType::FromFile("s3-list-buckets.xml"),
            ResponseType::FromFile("s3-get-bucket-location.xml"),
            ResponseType::FromFile("s3-get-bucket-tagging.xml"),
            ResponseType::WithStatus(403),
        ]);

        let ret = client.discover_buckets().await.unwrap();

        assert_eq!(ret.len(), 2);

        assert_eq!(ret[0].name, "a-bucket-name");
        assert_eq!(ret[0].region.as_deref(), Some("eu-west-1"));
        assert!(ret[0].accessible);
        assert_eq!(ret[0].tags.as_ref().map(|t| t.len()), Some(2));

        assert_eq!(ret[1].name, "another-bucket-name");
        assert_eq!(ret[1].region, None);
        assert!(!ret[1].accessible);
        assert_eq!(ret[1].tags, None);

        // The accessibility flag always follows the region.
        for record in &ret {
            assert_eq!(record.accessible, record.region.is_some());
        }
    }
}
