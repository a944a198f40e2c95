// Ranking of buckets by monthly growth
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use crate::common::Buckets;
use tracing::debug;

/// How many buckets the top growth report keeps.
pub const TOP_GROWTH_BUCKETS_COUNT: usize = 10;

/// Return the `TOP_GROWTH_BUCKETS_COUNT` records with the highest monthly
/// growth, ordered descending.
///
/// The sort is stable, so buckets with equal growth keep their discovery
/// order. The input is left untouched.
pub fn top_growth_buckets(buckets: &Buckets) -> Buckets {
    debug!("top_growth_buckets: ranking {} records", buckets.len());

    let mut ranked = buckets.to_owned();

    ranked.sort_by(|a, b| b.monthly_growth.total_cmp(&a.monthly_growth));
    ranked.truncate(TOP_GROWTH_BUCKETS_COUNT.min(buckets.len()));

    ranked
}
