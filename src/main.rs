// DrishtiGuide — Monitor Demo Entry Point
//
// Run sequence:
//   1. Initialise logging and load the optional TOML config.
//   2. Build a detector and wire its alert sinks to the alert task.
//   3. Feed the chosen scripted scenario at the firmware sample cadence.
//   4. Log a summary, then drain outstanding alerts.
//
// Scenarios: "demo" (walk, fall, stillness, recovery), "walk", "fall".

use std::env;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use anyhow::{anyhow, bail, Result};

use drishtiguide::config::{
    BEEP_DURATION_MS, EMERGENCY_BEEP_COUNT, SAMPLE_INTERVAL_MS, WARNING_BEEP_COUNT,
};
use drishtiguide::sim::{self, ProfileBuilder};
use drishtiguide::{AccelSample, AlertEvent, DetectorConfig, FallDetector, FallEvent};

struct MonitorOptions {
    config_path: Option<String>,
    scenario: String,
    realtime: bool,
}

fn parse_args() -> Result<MonitorOptions> {
    let mut config_path = None;
    let mut scenario = "demo".to_string();
    let mut realtime = false;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                config_path = Some(args.next().ok_or_else(|| anyhow!("--config needs a path"))?);
            }
            "--scenario" => {
                scenario = args.next().ok_or_else(|| anyhow!("--scenario needs a name"))?;
            }
            "--realtime" => realtime = true,
            _ => bail!("Usage: drishtiguide [--config <file.toml>] [--scenario demo|walk|fall] [--realtime]"),
        }
    }

    Ok(MonitorOptions {
        config_path,
        scenario,
        realtime,
    })
}

fn scenario_samples(name: &str) -> Result<Vec<AccelSample>> {
    let interval = SAMPLE_INTERVAL_MS as u32;
    let samples = match name {
        "demo" => sim::demo_scenario(interval),
        "walk" => ProfileBuilder::new(interval)
            .rest(1_000)
            .walk(6_000)
            .rest(1_000)
            .build(),
        "fall" => ProfileBuilder::new(interval)
            .rest(1_000)
            .fall()
            .stillness(12_000)
            .build(),
        _ => bail!("unknown scenario {name:?} (expected demo, walk, or fall)"),
    };
    Ok(samples)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("DrishtiGuide monitor starting…");

    let opts = parse_args()?;
    let config = match opts.config_path {
        Some(ref path) => {
            let config = DetectorConfig::load(path)?;
            log::info!("Loaded config from {path}");
            config
        }
        None => DetectorConfig::default(),
    };
    let samples = scenario_samples(&opts.scenario)?;
    log::info!(
        "Scenario {:?}: {} samples at {} ms cadence",
        opts.scenario,
        samples.len(),
        SAMPLE_INTERVAL_MS
    );

    // ---- Alert channel & task ---------------------------------------------
    let (alert_tx, alert_rx) = mpsc::channel();
    let alerts = thread::Builder::new()
        .name("alerts".into())
        .spawn(move || alert_task(alert_rx))?;

    // ---- Detector with sinks wired to the channel -------------------------
    let mut detector = FallDetector::new(config);
    let fall_tx = alert_tx.clone();
    detector.set_emergency_callback(move |event: &FallEvent| {
        let _ = fall_tx.send(AlertEvent::Fall(*event));
    });
    let warn_tx = alert_tx.clone();
    detector.set_warning_callback(move |magnitude| {
        let _ = warn_tx.send(AlertEvent::Warning(magnitude));
    });
    drop(alert_tx);

    // ---- Control loop ------------------------------------------------------
    for sample in samples {
        detector.update(sample);

        if sample.timestamp_ms % 5_000 == 0 {
            let status = detector.status();
            log::info!(
                "Status @ {} ms: state={} filtered={:.2} g falls={}",
                sample.timestamp_ms,
                status.state.display_name(),
                status.filtered_magnitude.unwrap_or(0.0),
                status.fall_count
            );
        }
        if opts.realtime {
            thread::sleep(Duration::from_millis(SAMPLE_INTERVAL_MS));
        }
    }

    // ---- Summary -----------------------------------------------------------
    log::info!("Scenario complete: {} fall(s) detected", detector.fall_count());
    if let Some(event) = detector.last_fall() {
        log::info!(
            "Last fall: impact {:.2} g after a {:.2} g dip, {} ms apart",
            event.max_acceleration,
            event.min_acceleration,
            event.duration_ms
        );
    }
    if detector.should_trigger_emergency() {
        log::warn!("Inactivity escalation still armed at exit");
    }

    // Dropping the detector closes the alert channel; the task drains and
    // finishes its queued patterns.
    drop(detector);
    if alerts.join().is_err() {
        log::error!("Alert task panicked");
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Alert task — buzzer stand-in on host builds
// ---------------------------------------------------------------------------
fn alert_task(alert_rx: mpsc::Receiver<AlertEvent>) {
    log::info!("Alert task started");
    while let Ok(event) = alert_rx.recv() {
        match event {
            AlertEvent::Fall(fall) => {
                log::error!(
                    "EMERGENCY: fall at {} ms (impact {:.2} g after a {:.2} g dip)",
                    fall.timestamp_ms,
                    fall.max_acceleration,
                    fall.min_acceleration
                );
                play_pattern("emergency", EMERGENCY_BEEP_COUNT);
            }
            AlertEvent::Warning(magnitude) => {
                log::warn!("Warning alert (magnitude {magnitude:.2} g)");
                play_pattern("warning", WARNING_BEEP_COUNT);
            }
        }
    }
    log::info!("Alert task done");
}

/// The hardware beep pattern, rendered as paced log lines.
fn play_pattern(kind: &str, beeps: u32) {
    for i in 1..=beeps {
        log::info!("  beep {i}/{beeps} ({kind})");
        thread::sleep(Duration::from_millis(BEEP_DURATION_MS));
    }
}
