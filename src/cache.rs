// JSON persistence of bucket records between runs
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::{
    bail,
    Context,
    Result,
};
use crate::common::Buckets;
use std::fs::File;
use std::io::{
    BufReader,
    BufWriter,
};
use std::path::Path;
use tracing::debug;

/// Cache of every discovered bucket record.
pub const BUCKET_METRICS_FILE: &str = "bucket_metrics.json";

/// Cache of the ranked top growth subset.
pub const TOP_GROWTH_BUCKETS_FILE: &str = "top_growth_buckets.json";

/// Write `buckets` to `path` as a JSON array.
pub fn store(buckets: &Buckets, path: &Path) -> Result<()> {
    debug!("store: {} records -> '{}'", buckets.len(), path.display());

    let file = File::create(path)
        .with_context(|| format!("Failed to create '{}'", path.display()))?;

    serde_json::to_writer(BufWriter::new(file), buckets)
        .with_context(|| format!("Failed to write '{}'", path.display()))?;

    Ok(())
}

/// Read records back from `path`.
///
/// Loaded records are checked against the accessibility invariant so a
/// hand edited cache can't smuggle in inconsistent rows.
pub fn load(path: &Path) -> Result<Buckets> {
    debug!("load: reading '{}'", path.display());

    let file = File::open(path)
        .with_context(|| format!("Failed to open '{}'", path.display()))?;

    let buckets: Buckets = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse '{}'", path.display()))?;

    for record in &buckets {
        if record.accessible != record.region.is_some() {
            bail!(
                "Record '{}' in '{}' has accessible = {} but region = {:?}",
                record.name,
                path.display(),
                record.accessible,
                record.region,
            );
        }
    }

    Ok(buckets)
}
