// DrishtiGuide — Accelerometer Trace Loading

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{bail, ensure, Context, Result};
use csv::ReaderBuilder;

use crate::events::AccelSample;

/// Load a recorded accelerometer session: `timestamp_ms,ax,ay,az` rows
/// under a header, timestamps non-decreasing. Axis values are in g; each
/// row becomes one magnitude sample.
pub fn load_samples_from_csv(path: impl AsRef<Path>) -> Result<Vec<AccelSample>> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("failed to open trace {path:?}"))?;
    parse_samples(file).with_context(|| format!("invalid trace {path:?}"))
}

/// Parse the CSV from any reader. Split out from the file path entry so
/// tests can feed byte slices.
pub fn parse_samples(reader: impl Read) -> Result<Vec<AccelSample>> {
    let mut csv = ReaderBuilder::new().has_headers(true).from_reader(reader);

    let mut samples: Vec<AccelSample> = Vec::new();
    let mut last_timestamp = 0u32;

    for (row_idx, result) in csv.records().enumerate() {
        let row = row_idx + 2; // 1-based, counting the header
        let record = result.with_context(|| format!("row {row} is not valid CSV"))?;
        ensure!(
            record.len() >= 4,
            "row {row} has {} columns, expected timestamp_ms,ax,ay,az",
            record.len()
        );

        let timestamp_ms: u32 = record[0]
            .trim()
            .parse()
            .with_context(|| format!("bad timestamp_ms in row {row}"))?;
        let ax: f32 = record[1]
            .trim()
            .parse()
            .with_context(|| format!("bad ax in row {row}"))?;
        let ay: f32 = record[2]
            .trim()
            .parse()
            .with_context(|| format!("bad ay in row {row}"))?;
        let az: f32 = record[3]
            .trim()
            .parse()
            .with_context(|| format!("bad az in row {row}"))?;

        if !samples.is_empty() && timestamp_ms < last_timestamp {
            bail!("timestamps go backwards at row {row} ({last_timestamp} → {timestamp_ms})");
        }
        last_timestamp = timestamp_ms;

        samples.push(AccelSample::from_axes(timestamp_ms, ax, ay, az));
    }

    ensure!(!samples.is_empty(), "trace contains no samples");
    Ok(samples)
}
