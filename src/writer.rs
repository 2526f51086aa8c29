//! Persists a generated [`Dataset`] as a pretty-printed JSON document.

use crate::domain::Dataset;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub const DEFAULT_OUTPUT_FILE: &str = "iot_sensor_data.json";

/// Writes `dataset` to `path` (2-space indent) and returns the reading count.
pub fn write_dataset<P: AsRef<Path>>(dataset: &Dataset, path: P) -> Result<usize> {
    let path = path.as_ref();
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file {}", path.display()))?;

    let mut out = BufWriter::new(file);
    write_json(dataset, &mut out)?;
    out.flush()
        .with_context(|| format!("Failed to flush {}", path.display()))?;

    tracing::debug!(path = %path.display(), readings = dataset.len(), "dataset written");
    Ok(dataset.len())
}

/// Serializes into any writer; the file variant above wraps this.
pub fn write_json<W: Write>(dataset: &Dataset, out: W) -> Result<()> {
    serde_json::to_writer_pretty(out, dataset).context("Failed to serialize dataset")
}
