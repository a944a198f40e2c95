// Definition of a bucket record
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use serde::{
    Deserialize,
    Serialize,
};
use std::collections::BTreeMap;

/// Tags attached to a bucket, keyed by tag name.
pub type Tags = BTreeMap<String, String>;

/// Represents a discovered S3 bucket and its computed storage metrics.
///
/// `region` is `None` when the bucket couldn't be reached with the current
/// credentials. `tags` is `None` when the region never resolved and the tag
/// lookup wasn't attempted at all, as opposed to an empty mapping which
/// means the lookup ran and came back with nothing.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct BucketRecord {
    pub name:           String,
    pub region:         Option<String>,
    pub tags:           Option<Tags>,
    pub accessible:     bool,
    pub current_size:   f64,
    pub monthly_growth: f64,
}

impl BucketRecord {
    /// Record for a bucket whose region resolved.
    pub fn resolved(name: &str, region: &str, tags: Tags) -> Self {
        Self {
            name:           name.into(),
            region:         Some(region.into()),
            tags:           Some(tags),
            accessible:     true,
            current_size:   0.0,
            monthly_growth: 0.0,
        }
    }

    /// Record for a bucket that couldn't be reached.
    pub fn inaccessible(name: &str) -> Self {
        Self {
            name:           name.into(),
            region:         None,
            tags:           None,
            accessible:     false,
            current_size:   0.0,
            monthly_growth: 0.0,
        }
    }
}

/// Convenience type for a list of `BucketRecord`.
pub type Buckets = Vec<BucketRecord>;
