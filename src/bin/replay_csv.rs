// DrishtiGuide — CSV Trace Replay
//
// Replays a recorded accelerometer session (timestamp_ms,ax,ay,az) through
// a fall detector and reports every detection plus a summary.

use std::env;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use anyhow::{anyhow, bail, Result};

use drishtiguide::csv_loader::load_samples_from_csv;
use drishtiguide::{DetectorConfig, FallDetector};

fn parse_args() -> Result<(PathBuf, Option<String>)> {
    let mut config_path = None;
    let mut csv_path: Option<PathBuf> = None;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                config_path = Some(args.next().ok_or_else(|| anyhow!("--config needs a path"))?);
            }
            _ => {
                if csv_path.is_some() {
                    bail!("Usage: replay_csv [--config <file.toml>] <trace.csv>");
                }
                csv_path = Some(PathBuf::from(arg));
            }
        }
    }

    let csv_path = csv_path.ok_or_else(|| anyhow!("a trace CSV path is required"))?;
    Ok((csv_path, config_path))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let (csv_path, config_path) = parse_args()?;
    let config = match config_path {
        Some(ref path) => DetectorConfig::load(path)?,
        None => DetectorConfig::default(),
    };

    let samples = load_samples_from_csv(&csv_path)?;
    let first_ms = samples.first().map(|s| s.timestamp_ms).unwrap_or(0);
    let last_ms = samples.last().map(|s| s.timestamp_ms).unwrap_or(0);
    println!(
        "Replaying {:?}: {} samples spanning {} ms",
        csv_path,
        samples.len(),
        last_ms - first_ms
    );

    let mut detector = FallDetector::new(config);
    let warning_alerts = Arc::new(AtomicU32::new(0));
    let counter = warning_alerts.clone();
    detector.set_warning_callback(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    for sample in &samples {
        if detector.update(*sample) {
            if let Some(event) = detector.last_fall() {
                println!(
                    "FALL at {} ms: impact {:.2} g after a {:.2} g dip ({} ms apart)",
                    event.timestamp_ms,
                    event.max_acceleration,
                    event.min_acceleration,
                    event.duration_ms
                );
            }
        }
    }

    let peak = samples.iter().map(|s| s.magnitude).fold(f32::MIN, f32::max);
    let floor = samples.iter().map(|s| s.magnitude).fold(f32::MAX, f32::min);

    println!("\nSummary:");
    println!("  samples:        {}", samples.len());
    println!("  magnitude span: {floor:.2} g … {peak:.2} g");
    println!("  falls detected: {}", detector.fall_count());
    println!("  warning alerts: {}", warning_alerts.load(Ordering::SeqCst));
    if detector.should_trigger_emergency() {
        println!("  trace ends with inactivity escalation armed");
    }
    Ok(())
}
