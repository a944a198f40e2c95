// Rendering of the bucket metrics and top growth tables
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::{
    Context,
    Result,
};
use chrono::Local;
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use crate::common::{
    Buckets,
    HumanSize,
    Tags,
};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Rendered report artifact written at the end of a run.
pub const CONSOLE_LOG_FILE: &str = "console_log.txt";

// Markers for the accessibility column.
const ACCESSIBLE: &str   = "✓";
const INACCESSIBLE: &str = "✗";

// Tags render as a compact JSON object, absent or empty tags as a blank
// cell.
fn render_tags(tags: &Option<Tags>) -> String {
    match tags {
        Some(tags) if !tags.is_empty() => {
            serde_json::to_string(tags).unwrap_or_default()
        },
        _ => String::new(),
    }
}

fn metrics_table(buckets: &Buckets) -> Table {
    let mut table = Table::new();

    table
        .load_preset(UTF8_FULL)
        .set_header(vec![
            "#",
            "Bucket",
            "Region",
            "Tags",
            "Size",
            "Accessible",
        ]);

    for (idx, record) in buckets.iter().enumerate() {
        let accessible = if record.accessible {
            ACCESSIBLE
        }
        else {
            INACCESSIBLE
        };

        table.add_row(vec![
            (idx + 1).to_string(),
            record.name.clone(),
            record.region.clone().unwrap_or_default(),
            render_tags(&record.tags),
            record.current_size.humansize(),
            accessible.to_string(),
        ]);
    }

    table
}

fn growth_table(top_growth: &Buckets) -> Table {
    let mut table = Table::new();

    table
        .load_preset(UTF8_FULL)
        .set_header(vec![
            "#",
            "Bucket",
            "Size Growth",
        ]);

    for (idx, record) in top_growth.iter().enumerate() {
        table.add_row(vec![
            (idx + 1).to_string(),
            record.name.clone(),
            record.monthly_growth.humansize(),
        ]);
    }

    table
}

/// Render both tables into the final report text.
pub fn render(buckets: &Buckets, top_growth: &Buckets) -> String {
    format!(
        "Bucket Metrics\n{}\n\nTop Growth Buckets\n{}\n",
        metrics_table(buckets),
        growth_table(top_growth),
    )
}

/// Write the rendered report to the log artifact at `path`.
pub fn write_log(rendered: &str, path: &Path) -> Result<()> {
    debug!("write_log: '{}'", path.display());

    let stamped = format!(
        "Generated at {}\n\n{}",
        Local::now().format("%Y-%m-%d %H:%M:%S"),
        rendered,
    );

    fs::write(path, stamped)
        .with_context(|| format!("Failed to write '{}'", path.display()))
}
