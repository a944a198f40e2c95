// Imports all of the components needed for s3::Client
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Handles converting a `ListBucketsOutput` into our own `BucketList`.
mod bucket_list;

/// S3 `Client`.
mod client;

/// Bucket discovery built on top of the S3 `Client`.
mod discovery;

/// Tagged outcome of a bucket region probe.
mod region_lookup;

pub use client::*;
pub use region_lookup::*;
