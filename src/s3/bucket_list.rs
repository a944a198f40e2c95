// Easily handle converting from a ListBucketsOutput into our own BucketList
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use aws_sdk_s3::operation::list_buckets::ListBucketsOutput;
use crate::common::BucketNames;

/// Holds a `Vec` of discovered S3 bucket names.
pub struct BucketList(BucketNames);

/// Implement a conversion from `ListBucketsOutput` to `BucketList`.
impl From<ListBucketsOutput> for BucketList {
    fn from(output: ListBucketsOutput) -> Self {
        let bucket_names = output.buckets()
            .unwrap_or_default()
            .iter()
            .filter_map(|b| b.name().map(String::from))
            .collect();

        BucketList(bucket_names)
    }
}

impl BucketList {
    /// Return a reference to a `Vec` of `BucketNames`.
    pub fn bucket_names(&self) -> &BucketNames {
        &self.0
    }
}
