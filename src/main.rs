// s3growth: A tool for reporting the size and growth of AWS S3 buckets.
#![forbid(unsafe_code)]
use anyhow::{
    Context,
    Result,
};
use common::RunConfig;
use std::path::Path;
use tracing::info;

mod cache;
mod cli;
mod cloudwatch;
mod common;
mod ranking;
mod report;
mod s3;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    // Nothing comes back from the CLI besides --help and --version;
    // behaviour is driven by the run configuration file.
    cli::parse_args();

    let config = RunConfig::load(Path::new(common::INPUT_CONFIGS_FILE))?;

    let (buckets, top_growth) = if config.use_cached {
        info!("Reusing cached bucket records");

        let buckets    = cache::load(Path::new(cache::BUCKET_METRICS_FILE))?;
        let top_growth = cache::load(Path::new(cache::TOP_GROWTH_BUCKETS_FILE))?;

        (buckets, top_growth)
    }
    else {
        let credentials = config.credential_source();

        let client = s3::Client::new(&credentials).await?;

        let mut buckets = client.discover_buckets()
            .await
            .context("Failed to discover buckets")?;

        info!("Discovered {} buckets", buckets.len());

        let storage_types = config.storage_types();
        let mut pool      = cloudwatch::ClientPool::new(credentials);

        cloudwatch::set_size_and_growth(&mut pool, &storage_types, &mut buckets)
            .await
            .context("Failed to aggregate storage metrics")?;

        let top_growth = ranking::top_growth_buckets(&buckets);

        cache::store(&buckets, Path::new(cache::BUCKET_METRICS_FILE))?;
        cache::store(&top_growth, Path::new(cache::TOP_GROWTH_BUCKETS_FILE))?;

        (buckets, top_growth)
    };

    let rendered = report::render(&buckets, &top_growth);

    println!("{}", rendered);

    report::write_log(&rendered, Path::new(report::CONSOLE_LOG_FILE))?;

    Ok(())
}
