// DrishtiGuide — Detection Thresholds & System Configuration

use std::fs;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Fall Detection Defaults (g-units, milliseconds)
// ---------------------------------------------------------------------------
pub const DEFAULT_LOW_G_THRESHOLD: f32 = 0.3;     // free-fall dip, fraction of 1 g
pub const DEFAULT_HIGH_G_THRESHOLD: f32 = 2.8;    // impact spike
pub const DEFAULT_DETECTION_WINDOW_MS: u32 = 300; // dip → impact pairing window
pub const DEFAULT_COOLDOWN_MS: u32 = 1000;        // duplicate suppression after a fall

// ---------------------------------------------------------------------------
// Inactivity Escalation
// ---------------------------------------------------------------------------
pub const DEFAULT_INACTIVITY_TIMEOUT_MS: u32 = 10_000; // stillness before the first alert
pub const DEFAULT_INACTIVITY_REALERT_MS: u32 = 10_000; // repeat interval while still
pub const DEFAULT_MOVEMENT_DELTA_G: f32 = 0.05;        // smallest delta that counts as movement

// ---------------------------------------------------------------------------
// Sampling & History
// ---------------------------------------------------------------------------
pub const ACCEL_HISTORY_LEN: usize = 50; // recent magnitudes kept for filtering
pub const SAMPLE_INTERVAL_MS: u64 = 100; // 10 Hz accelerometer poll
pub const MOVEMENT_BASELINE_MIN_SAMPLES: usize = 3; // history fill before deltas count as movement

// ---------------------------------------------------------------------------
// Alert Patterns (monitor demo)
// ---------------------------------------------------------------------------
pub const EMERGENCY_BEEP_COUNT: u32 = 5;
pub const WARNING_BEEP_COUNT: u32 = 2;
pub const BEEP_DURATION_MS: u64 = 300;

// ---------------------------------------------------------------------------
// Runtime-loadable Detector Configuration
// ---------------------------------------------------------------------------

/// Tunable parameters of the fall detector.
///
/// Defaults match the deployed firmware. Any subset of fields may appear in
/// a TOML file; missing ones fall back to the defaults.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// Magnitude below this opens a detection window (g).
    pub low_g_threshold: f32,
    /// Magnitude above this inside the window confirms a fall (g).
    pub high_g_threshold: f32,
    /// How long a dip stays armed waiting for an impact (ms).
    pub detection_window_ms: u32,
    /// Suppress further detections this long after a fall (ms).
    pub cooldown_ms: u32,
    /// Stillness after a fall before the first alert (ms).
    pub inactivity_timeout_ms: u32,
    /// Repeat interval for inactivity alerts while stillness persists (ms).
    pub inactivity_realert_ms: u32,
    /// Smallest filtered-magnitude delta that counts as movement (g).
    pub movement_delta_g: f32,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            low_g_threshold: DEFAULT_LOW_G_THRESHOLD,
            high_g_threshold: DEFAULT_HIGH_G_THRESHOLD,
            detection_window_ms: DEFAULT_DETECTION_WINDOW_MS,
            cooldown_ms: DEFAULT_COOLDOWN_MS,
            inactivity_timeout_ms: DEFAULT_INACTIVITY_TIMEOUT_MS,
            inactivity_realert_ms: DEFAULT_INACTIVITY_REALERT_MS,
            movement_delta_g: DEFAULT_MOVEMENT_DELTA_G,
        }
    }
}

impl DetectorConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {path}"))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("failed to parse config file: {path}"))?;
        Ok(config)
    }

    /// Write the configuration out as TOML.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = toml::to_string_pretty(self).context("failed to serialize config")?;
        fs::write(path, content).with_context(|| format!("failed to write config file: {path}"))?;
        Ok(())
    }

    /// Sanity-check the parameters. Violations are logged as warnings and
    /// returned; nothing is clamped or rejected, the detector runs with
    /// whatever it was given.
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if self.low_g_threshold >= self.high_g_threshold {
            warnings.push(format!(
                "low-g threshold {:.2} g is not below high-g threshold {:.2} g",
                self.low_g_threshold, self.high_g_threshold
            ));
        }
        if self.low_g_threshold >= 1.0 {
            warnings.push(format!(
                "low-g threshold {:.2} g is at or above the 1 g resting baseline",
                self.low_g_threshold
            ));
        }
        if self.high_g_threshold <= 1.0 {
            warnings.push(format!(
                "high-g threshold {:.2} g is at or below the 1 g resting baseline",
                self.high_g_threshold
            ));
        }
        if self.detection_window_ms == 0 {
            warnings.push("detection window is 0 ms; dips can never pair with an impact".into());
        }
        if self.movement_delta_g <= 0.0 {
            warnings.push(format!(
                "movement delta {:.3} g means every sample counts as movement",
                self.movement_delta_g
            ));
        }

        for warning in &warnings {
            log::warn!("Config: {warning}");
        }
        warnings
    }
}
