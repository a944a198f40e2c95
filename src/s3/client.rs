// Implements the S3 Client
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::Result;
use aws_sdk_s3::client::Client as S3Client;
use aws_sdk_s3::operation::get_bucket_location::GetBucketLocationError;
use aws_sdk_s3::operation::get_bucket_tagging::GetBucketTaggingError;
use aws_sdk_s3::types::Tag;
use aws_smithy_http::result::SdkError;
use crate::common::CredentialSource;
use super::bucket_list::BucketList;
use tracing::debug;

/// The S3 `Client`.
pub struct Client {
    /// The AWS SDK `S3Client`.
    pub client: S3Client,
}

impl Client {
    /// Return a new S3 `Client` authenticated through `credentials`.
    ///
    /// Bucket listing is account wide, so no explicit region is needed
    /// here; the environment's region (or the fallback) is used.
    pub async fn new(credentials: &CredentialSource) -> Result<Self> {
        debug!("new: Creating S3Client");

        let config = credentials.sdk_config(None).await?;
        let client = S3Client::new(&config);

        Ok(Self { client })
    }

    /// Returns the list of bucket names visible to the account.
    pub async fn list_buckets(&self) -> Result<BucketList> {
        debug!("list_buckets: Listing...");

        let output = self.client.list_buckets()
            .send()
            .await?;

        Ok(output.into())
    }

    /// Return the bucket location for the given `bucket`.
    ///
    /// This method will properly handle the case of the `null` (empty) and
    /// `EU` location constraints, by replacing them with `us-east-1` and
    /// `eu-west-1` respectively.
    pub async fn get_bucket_location(
        &self,
        bucket: &str,
    ) -> Result<String, SdkError<GetBucketLocationError>> {
        debug!("get_bucket_location for '{}'", bucket);

        let output = self.client.get_bucket_location()
            .bucket(bucket)
            .send()
            .await?;

        let location = match output.location_constraint() {
            Some(constraint) => constraint.as_str().to_string(),
            None             => String::new(),
        };

        debug!("GetBucketLocation API returned '{}'", location);

        // Location constraints for sufficiently old buckets in S3 may not
        // quite meet expectations. These returns are badly documented and
        // the assumptions here are based on what the web console does.
        let location = match location.as_ref() {
            ""   => "us-east-1".to_string(),
            "EU" => "eu-west-1".to_string(),
            _    => location,
        };

        Ok(location)
    }

    /// Return the raw tag set of the given `bucket`.
    pub async fn get_bucket_tagging(
        &self,
        bucket: &str,
    ) -> Result<Vec<Tag>, SdkError<GetBucketTaggingError>> {
        debug!("get_bucket_tagging for '{}'", bucket);

        let output = self.client.get_bucket_tagging()
            .bucket(bucket)
            .send()
            .await?;

        Ok(output.tag_set().unwrap_or_default().to_vec())
    }
}
